use crate::shell::http::router;
use crate::tests::fixtures::auth::bearer_for;
use crate::tests::fixtures::state::make_test_state;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn call(app: &Router, method: &str, uri: &str, tenant: i64) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("authorization", bearer_for(7, "jane", tenant))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn tracks_and_syncs_a_working_day() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employee/list-employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 7, "name": "Jane", "email": "jane@example.com"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/timesheet/create"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;
    let app = router(make_test_state(&server.uri()));

    let (status, first) = call(&app, "POST", "/api/time/start?projectName=ProjectX&employeeId=7", 1).await;
    assert_eq!(status, StatusCode::OK);
    let first = json(&first);

    let (_, second) = call(&app, "POST", "/api/time/start?projectName=ProjectY&employeeId=7", 1).await;
    let second = json(&second);
    assert_ne!(first["id"], second["id"]);

    let (_, current) = call(&app, "GET", "/api/time/current?employeeId=7", 1).await;
    assert_eq!(json(&current)["id"], second["id"]);

    let (status, stopped) = call(&app, "POST", "/api/time/stop?employeeId=7", 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&stopped)["id"], second["id"]);
    assert_eq!(json(&stopped)["active"], false);

    let (status, _) = call(&app, "POST", "/api/time/stop?employeeId=7", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, entries) = call(&app, "GET", "/api/time/entries?employeeId=7", 1).await;
    let entries = json(&entries);
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert!(entries.as_array().unwrap().iter().all(|entry| entry["active"] == false));

    let (status, body) = call(&app, "POST", "/api/time/sync", 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "Synced 2 entries");

    let (_, body) = call(&app, "POST", "/api/time/sync", 1).await;
    assert_eq!(String::from_utf8(body).unwrap(), "Synced 0 entries");

    let (_, employees) = call(&app, "GET", "/api/employees", 1).await;
    assert_eq!(json(&employees)[0]["name"], "Jane");
}

#[tokio::test]
async fn keeps_tenants_apart() {
    let app = router(make_test_state("http://127.0.0.1:1"));

    let (_, started) = call(&app, "POST", "/api/time/start?projectName=Secret&employeeId=7", 2).await;
    let foreign_id = json(&started)["id"].as_str().unwrap().to_string();

    let (status, _) = call(&app, "GET", "/api/time/current?employeeId=7", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "POST", "/api/time/stop?employeeId=7", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/api/time/entries/{foreign_id}?billable=false"),
        1,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = call(&app, "GET", "/api/time/entries/all", 1).await;
    assert!(json(&all).as_array().unwrap().is_empty());

    let (_, current) = call(&app, "GET", "/api/time/current?employeeId=7", 2).await;
    let current = json(&current);
    assert_eq!(current["billable"], true);
    assert_eq!(current["active"], true);
}
