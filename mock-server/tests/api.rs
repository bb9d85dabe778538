use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, request_log};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn post(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn ok_returns_200_with_body() {
    let resp = app(request_log()).oneshot(get("/ok")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"ok");
}

#[tokio::test]
async fn submit_returns_201_with_empty_body() {
    let resp = app(request_log())
        .oneshot(post("/submit", "x=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn echo_roundtrips_the_body() {
    let resp = app(request_log())
        .oneshot(post("/echo", "payload"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"payload");
}

#[tokio::test]
async fn query_returns_the_exact_request_target() {
    let resp = app(request_log())
        .oneshot(get("/query?x=1&y=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"/query?x=1&y=2");
}

#[tokio::test]
async fn missing_returns_404_with_body() {
    let resp = app(request_log()).oneshot(get("/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await.as_ref(), b"missing");
}

#[tokio::test]
async fn served_requests_are_recorded() {
    use tower::Service;

    let log = request_log();
    let mut app = app(log.clone()).into_service();

    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(post("/submit", "x=1"))
        .await
        .unwrap();
    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/ok"))
        .await
        .unwrap();

    let recorded = log.read().await;
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].uri, "/submit");
    assert_eq!(recorded[0].body, b"x=1");
    assert_eq!(recorded[1].method, "GET");
    assert_eq!(recorded[1].uri, "/ok");
}

#[tokio::test]
async fn requests_route_dumps_the_log_without_recording_itself() {
    use tower::Service;

    let mut app = app(request_log()).into_service();

    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/ok"))
        .await
        .unwrap();
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/requests"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: Vec<serde_json::Value> =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["uri"], "/ok");
}
