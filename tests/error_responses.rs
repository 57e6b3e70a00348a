mod common;

use axum::{
    body::{Body, Bytes, to_bytes},
    http::{HeaderValue, Request, StatusCode, header},
};
use axum_test::TestServer;
use serde_json::json;
use service_status::error::ErrorBody;
use tower::ServiceExt;

fn server() -> TestServer {
    TestServer::new(common::create_test_app(common::create_test_state("1.0.0", true))).unwrap()
}

#[tokio::test]
async fn test_malformed_json_body() {
    let response = server()
        .post("/items")
        .bytes(Bytes::from_static(b"{\"name\": "))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.header("content-type"), "application/json");

    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "MessageNotReadable");
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_wrong_body_shape() {
    let response = server().post("/items").json(&json!({"title": "x"})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "MessageNotReadable");
    assert!(body.message.contains("name"));
}

#[tokio::test]
async fn test_unsupported_content_type() {
    let response = server().post("/items").text("name=widget").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.json::<ErrorBody>().kind, "MediaTypeNotSupported");
}

#[tokio::test]
async fn test_validation_failure() {
    let response = server().post("/items").json(&json!({"name": ""})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "ArgumentNotValid");
    assert!(body.message.contains("name"));
}

#[tokio::test]
async fn test_valid_request_passes_through() {
    let response = server().post("/items").json(&json!({"name": "widget"})).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["name"], "widget");
}

#[tokio::test]
async fn test_missing_query_parameter() {
    let response = server().get("/items").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "MissingRequestParameter");
    assert!(body.message.contains("page"));
}

#[tokio::test]
async fn test_invalid_query_parameter() {
    let response = server().get("/items?page=last").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorBody>().kind, "ArgumentNotValid");
}

#[tokio::test]
async fn test_bad_enum_value_mentioning_missing_field() {
    let response = server().get("/items?page=1&order=missing%20field").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "ArgumentNotValid");
    assert!(body.message.contains("unknown variant"));
}

#[tokio::test]
async fn test_valid_query_passes_through() {
    let response = server().get("/items?page=2&order=desc").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 2);
    assert_eq!(json["order"], "desc");
}

#[tokio::test]
async fn test_method_not_allowed() {
    let response = server().delete("/status").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("content-type"), "application/json");
    assert!(
        response
            .header("allow")
            .to_str()
            .unwrap()
            .contains("GET")
    );

    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "MethodNotSupported");
    assert!(body.message.contains("DELETE"));
}

#[tokio::test]
async fn test_not_acceptable() {
    let response = server()
        .get("/status")
        .add_header(header::ACCEPT, HeaderValue::from_static("text/html"))
        .await;

    response.assert_status(StatusCode::NOT_ACCEPTABLE);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.json::<ErrorBody>().kind, "MediaTypeNotAcceptable");
}

#[tokio::test]
async fn test_vnd_error_accept_is_served() {
    let response = server()
        .get("/status")
        .add_header(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.error+json"),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_service_error_is_propagated_verbatim() {
    let response = server().post("/items").json(&json!({"name": "dup"})).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "message": "duplicate entry",
            "kind": "DuplicateEntry",
            "code": "E_DUPLICATE"
        })
    );
}

#[tokio::test]
async fn test_service_error_status_range() {
    let server = server();

    for code in [200u16, 202, 301, 404, 409, 418, 422, 429, 503, 599] {
        let response = server.get(&format!("/custom/{code}")).await;
        assert_eq!(response.status_code().as_u16(), code);
        assert_eq!(response.header("content-type"), "application/json");
    }
}

#[tokio::test]
async fn test_service_error_with_405_keeps_its_body() {
    let response = server().get("/custom/405").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "ServiceError");
    assert_eq!(body.message, "status 405");
}

#[tokio::test]
async fn test_unhandled_anyhow_error() {
    let response = server().get("/fail").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("content-type"), "application/json");

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "upstream unreachable");
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unhandled_std_error_reports_type_name() {
    let response = server().get("/io-fail").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.message, "disk full");
    assert_eq!(body.kind, "Error");
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let response = server().get("/explode").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("content-type"), "application/json");

    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "Panic");
    assert_eq!(body.message, "kaboom");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_failures_do_not_interfere() {
    let app = common::create_test_app(common::create_test_state("1.0.0", true));

    let cases: Vec<(&'static str, &'static str, Option<&'static str>, StatusCode, &'static str)> = vec![
        ("GET", "/items", None, StatusCode::BAD_REQUEST, "MissingRequestParameter"),
        ("DELETE", "/status", None, StatusCode::METHOD_NOT_ALLOWED, "MethodNotSupported"),
        ("POST", "/items", Some("{oops"), StatusCode::BAD_REQUEST, "MessageNotReadable"),
        ("GET", "/custom/409", None, StatusCode::CONFLICT, "ServiceError"),
        ("GET", "/fail", None, StatusCode::INTERNAL_SERVER_ERROR, "Error"),
        ("GET", "/explode", None, StatusCode::INTERNAL_SERVER_ERROR, "Panic"),
    ];

    let mut handles = Vec::new();
    for i in 0..60 {
        let (method, uri, body, status, kind) = cases[i % cases.len()];
        let app = app.clone();

        handles.push(tokio::spawn(async move {
            let mut request = Request::builder().method(method).uri(uri);
            if body.is_some() {
                request = request.header(header::CONTENT_TYPE, "application/json");
            }
            let request = request
                .body(body.map(Body::from).unwrap_or_else(Body::empty))
                .unwrap();

            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), status, "{method} {uri}");

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let error: ErrorBody = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(error.kind, kind, "{method} {uri}");
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
