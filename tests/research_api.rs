//! End-to-end tests against a local mock of the research API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use credit_dashboard::dashboard::{BarChart, Metric, MetricSeries, PageStatus};
use credit_dashboard::research::{QueryPayload, ResearchRequest};
use credit_dashboard::{
    collect_pages, render_dashboard, Country, ReportSource, ResearchClient, ResearchClientConfig,
    ResearchError,
};

const GDP_GROWTH: [f64; 6] = [2.0, 3.1, 3.4, 3.2, 3.0, 2.9];

/// How the mock answers a given page
#[derive(Clone)]
enum Reply {
    Records(serde_json::Value),
    Status(StatusCode),
    Garbage,
    Delayed(Duration, serde_json::Value),
}

#[derive(Default)]
struct MockApi {
    replies: HashMap<u32, Reply>,
    seen: Mutex<Vec<QueryPayload>>,
}

async fn process_json(
    State(mock): State<Arc<MockApi>>,
    Json(body): Json<ResearchRequest>,
) -> Response {
    let payload = match body.payload() {
        Ok(payload) => payload,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let page = payload.page;
    mock.seen.lock().unwrap().push(payload);

    match mock.replies.get(&page) {
        Some(Reply::Records(records)) => Json(records.clone()).into_response(),
        Some(Reply::Status(status)) => (*status, "upstream failure").into_response(),
        Some(Reply::Garbage) => "not json".into_response(),
        Some(Reply::Delayed(delay, records)) => {
            tokio::time::sleep(*delay).await;
            Json(records.clone()).into_response()
        }
        None => Json(json!([])).into_response(),
    }
}

/// Start the mock on an ephemeral port and return a client pointed at it
async fn spawn_mock(replies: Vec<(u32, Reply)>) -> (ResearchClient, Arc<MockApi>) {
    spawn_mock_with_timeout(replies, Some(5)).await
}

async fn spawn_mock_with_timeout(
    replies: Vec<(u32, Reply)>,
    request_timeout_secs: Option<u64>,
) -> (ResearchClient, Arc<MockApi>) {
    let mock = Arc::new(MockApi {
        replies: replies.into_iter().collect(),
        seen: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/process_json", post(process_json))
        .with_state(Arc::clone(&mock));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ResearchClient::new(ResearchClientConfig {
        url: format!("http://{}/process_json", addr),
        request_timeout_secs,
        ..Default::default()
    })
    .unwrap();

    (client, mock)
}

fn israel_report() -> serde_json::Value {
    let mut record = json!({
        "Title": "Israel Credit Research",
        "Country": "Israel",
        "NFARating": "BB+",
    });
    for (i, value) in GDP_GROWTH.iter().enumerate() {
        record[format!("GDPGrowthRateYear{}", i + 1)] = json!(value);
    }
    record
}

#[tokio::test]
async fn test_two_pages_are_fetched_and_concatenated() {
    let (client, mock) = spawn_mock(vec![
        (1, Reply::Records(json!([israel_report()]))),
        (2, Reply::Records(json!([{"Title": "Older edition"}]))),
    ])
    .await;

    let payload = client.query_for(Country::Israel);
    let outcome = collect_pages(&client, &payload, 2).await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(
        outcome.first().unwrap().text("Title").as_deref(),
        Some("Israel Credit Research")
    );

    let seen = mock.seen.lock().unwrap();
    let pages: Vec<_> = seen.iter().map(|p| p.page).collect();
    assert_eq!(pages, vec![1, 2]);
    for query in seen.iter() {
        assert_eq!(query.country(), Some("Israel"));
        assert_eq!(query.table, "FullReport");
        assert_eq!(query.page_size, 10);
    }
}

#[tokio::test]
async fn test_chart_values_match_record_in_year_order() {
    let (client, _mock) = spawn_mock(vec![(1, Reply::Records(json!([israel_report()])))]).await;

    let payload = client.query_for(Country::Israel);
    let outcome = collect_pages(&client, &payload, 2).await;
    let record = outcome.first().unwrap();

    let chart = BarChart::new(&MetricSeries::extract(record, Metric::GdpGrowth));
    assert_eq!(chart.x_values(), &[2024, 2025, 2026, 2027, 2028, 2029]);
    assert_eq!(chart.y_values(), &GDP_GROWTH);

    let page = render_dashboard(Country::Israel, &outcome, Utc::now());
    assert_eq!(page.status, PageStatus::Complete);
    assert!(page.html.contains("NFA Rating: BB+"));
    assert!(page.html.contains(
        "<td>GDP Growth (%)</td><td>2.00</td><td>3.10</td><td>3.40</td><td>3.20</td><td>3.00</td><td>2.90</td>"
    ));
}

#[tokio::test]
async fn test_server_error_on_page_two_keeps_page_one() {
    let (client, _mock) = spawn_mock(vec![
        (1, Reply::Records(json!([israel_report()]))),
        (2, Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)),
    ])
    .await;

    let payload = client.query_for(Country::Israel);
    let outcome = collect_pages(&client, &payload, 2).await;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].page, 2);
    assert!(outcome.failures[0].cause.contains("500"));

    let page = render_dashboard(Country::Israel, &outcome, Utc::now());
    assert_eq!(page.status, PageStatus::Complete);
    assert!(page
        .html
        .contains("Failed to retrieve data from the process_json endpoint for page 2"));
    assert!(page.html.contains("Country: Israel"));
}

#[tokio::test]
async fn test_status_error_is_reported_per_page() {
    let (client, _mock) = spawn_mock(vec![(1, Reply::Status(StatusCode::BAD_GATEWAY))]).await;

    let payload = client.query_for(Country::Mexico);
    let err = client.fetch_page(&payload, 1).await.unwrap_err();

    assert!(matches!(err, ResearchError::Status { page: 1, status: 502 }));
}

#[tokio::test]
async fn test_every_page_failing_halts_with_no_data() {
    let (client, _mock) = spawn_mock(vec![
        (1, Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        (2, Reply::Garbage),
    ])
    .await;

    let payload = client.query_for(Country::Qatar);
    let outcome = collect_pages(&client, &payload, 2).await;

    assert!(outcome.is_empty());
    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.failures[1].cause.contains("Invalid response body"));

    let page = render_dashboard(Country::Qatar, &outcome, Utc::now());
    assert_eq!(page.status, PageStatus::NoData);
    assert!(page.html.contains("No data available to display"));
    assert!(!page.html.contains("Economic Data (2024 Onwards)"));
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_each_page() {
    // Bind then drop a listener to find a port nothing is serving on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ResearchClient::new(ResearchClientConfig {
        url: format!("http://127.0.0.1:{}/process_json", port),
        request_timeout_secs: Some(5),
        ..Default::default()
    })
    .unwrap();

    let payload = client.query_for(Country::SaudiArabia);
    let outcome = collect_pages(&client, &payload, 2).await;

    assert!(outcome.is_empty());
    let pages: Vec<_> = outcome.failures.iter().map(|f| f.page).collect();
    assert_eq!(pages, vec![1, 2]);
}

#[tokio::test]
async fn test_default_client_waits_for_slow_pages() {
    let (client, _mock) = spawn_mock_with_timeout(
        vec![(1, Reply::Delayed(Duration::from_millis(1500), json!([israel_report()])))],
        ResearchClientConfig::default().request_timeout_secs,
    )
    .await;

    let payload = client.query_for(Country::Israel);
    let outcome = collect_pages(&client, &payload, 1).await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.records.len(), 1);
}

#[tokio::test]
async fn test_configured_timeout_fails_the_page() {
    let (client, _mock) = spawn_mock_with_timeout(
        vec![(1, Reply::Delayed(Duration::from_secs(3), json!([israel_report()])))],
        Some(1),
    )
    .await;

    let payload = client.query_for(Country::Israel);
    let err = client.fetch_page(&payload, 1).await.unwrap_err();

    assert!(matches!(err, ResearchError::Timeout { page: 1 }));
}
