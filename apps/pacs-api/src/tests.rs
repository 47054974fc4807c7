//! 路由级行为测试（进程内 oneshot，关闭延迟模拟）。

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pacs_config::AppConfig;
use serde_json::Value;
use tower::util::ServiceExt;

use crate::{build_router, build_state};

/// 基准时刻：2025-08-05T13:20:00Z。
const NOW_MS: i64 = 1_754_400_000_000;

fn test_app() -> Router {
    let config = AppConfig {
        latency_enabled: false,
        ..AppConfig::default()
    };
    build_router(build_state(&config, NOW_MS))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_is_ok_under_both_prefixes() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let (status, _) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn event_pagination_is_deterministic_over_stable_dataset() {
    let app = test_app();
    let (status, first) = send(&app, get("/api/events?top=10&skip=0")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, get("/api/events?top=10&skip=0")).await;
    assert_eq!(first["data"]["results"], second["data"]["results"]);
    assert_eq!(first["data"]["results"].as_array().map(|a| a.len()), Some(10));
    assert!(first["data"]["next"]["href"].as_str().is_some());
}

#[tokio::test]
async fn attach_unknown_access_group_returns_400_invalid() {
    let app = test_app();
    let request = json_request(
        "POST",
        "/api/cardholders/CH-0001/access-groups",
        serde_json::json!({ "accessGroup": "No Such Group" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "InvalidAccessGroupException");
}

#[tokio::test]
async fn duplicate_attach_returns_409() {
    let app = test_app();
    // 固定数据里每个持卡人都挂在 All Staff 上
    let request = json_request(
        "POST",
        "/api/cardholders/CH-0001/access-groups",
        serde_json::json!({ "accessGroup": "All Staff" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DuplicateAccessGroupException");
}

#[tokio::test]
async fn patch_unknown_door_returns_404() {
    let app = test_app();
    let request = json_request(
        "PATCH",
        "/api/doors/DOOR-999",
        serde_json::json!({ "status": "fault" }),
    );
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_door_status_round_trips() {
    let app = test_app();
    let request = json_request(
        "PATCH",
        "/api/doors/DOOR-001",
        serde_json::json!({ "status": "fault" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "fault");
    assert_eq!(body["data"]["mode"]["value"], "degraded");

    let (_, fetched) = send(&app, get("/api/doors/DOOR-001")).await;
    assert_eq!(fetched["data"]["status"], "fault");
}

#[tokio::test]
async fn unknown_cardholder_returns_typed_404() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/cardholders/CH-9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CardholderNotFoundException");
}

#[tokio::test]
async fn create_and_fetch_cardholder() {
    let app = test_app();
    let request = json_request(
        "POST",
        "/api/cardholders",
        serde_json::json!({
            "firstName": "Test",
            "lastName": "User",
            "accessGroups": ["All Staff"]
        }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().expect("id").to_string();
    assert_eq!(body["data"]["phone"], "");

    let (status, fetched) = send(&app, get(&format!("/api/cardholders/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["firstName"], "Test");
}

#[tokio::test]
async fn member_routes_enforce_duplicate_and_missing_rules() {
    let app = test_app();
    // CH-0001 在固定数据里已是 AG-01（All Staff）成员
    let request = json_request(
        "POST",
        "/api/access_groups/AG-01/members",
        serde_json::json!({ "cardholderId": "CH-0001" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DuplicateMemberException");

    let request = json_request(
        "POST",
        "/api/access_groups/AG-01/members",
        serde_json::json!({ "cardholderId": "CH-9999" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CardholderNotFoundException");

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/access_groups/AG-01/members/CH-9999")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "MemberNotFoundException");
}

#[tokio::test]
async fn refresh_discards_session_edits() {
    let app = test_app();
    let request = json_request(
        "PATCH",
        "/api/doors/DOOR-002",
        serde_json::json!({ "status": "offline" }),
    );
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .method("POST")
        .uri("/api/system/refresh")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, get("/api/doors/DOOR-002")).await;
    assert_eq!(fetched["data"]["status"], "online");
}

#[tokio::test]
async fn unmatched_endpoint_returns_envelope_404() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/no-such-endpoint")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "ENDPOINT.NOT_FOUND");
    assert_eq!(body["error"]["message"], "Endpoint not found");
}

#[tokio::test]
async fn event_date_filter_rejects_bad_dates() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/events?start_date=2025-13-99")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID.REQUEST");
}

#[tokio::test]
async fn csv_export_sets_content_type_and_header_row() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(get("/api/events/export?format=csv"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with("id,timestamp,"));
}

#[tokio::test]
async fn statistics_totals_match_dataset_size() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/events/statistics")).await;
    assert_eq!(status, StatusCode::OK);
    let total = body["data"]["total"].as_u64().expect("total");
    let by_type_sum: u64 = body["data"]["byType"]
        .as_array()
        .expect("byType")
        .iter()
        .map(|entry| entry["count"].as_u64().unwrap_or(0))
        .sum();
    assert_eq!(total, by_type_sum);
    assert_eq!(total, 600);
}

#[tokio::test]
async fn patterns_flag_the_seeded_fault_door() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/events/patterns")).await;
    assert_eq!(status, StatusCode::OK);
    let repeated = body["data"]["repeatedFaults"].as_array().expect("faults");
    assert!(
        repeated
            .iter()
            .any(|entry| entry["doorId"] == "DOOR-005")
    );
}

#[tokio::test]
async fn assist_query_answers_with_counts() {
    let app = test_app();
    let request = json_request(
        "POST",
        "/api/assist/query",
        serde_json::json!({ "question": "denied access in the last 7 days" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["matchedRule"], "denied-access");
    assert!(body["data"]["eventCount"].as_u64().unwrap_or(0) > 0);
}

#[tokio::test]
async fn vendor_stubs_answer_on_root_paths() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(get("/axis-cgi/param.cgi?action=list&group=Brand"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("root.Brand.Brand=AXIS"));

    let request = Request::builder()
        .method("POST")
        .uri("/onvif/device_service")
        .header(header::CONTENT_TYPE, "application/soap+xml")
        .body(Body::from(""))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
