//! Wire-level tests for the GraphQL executor.

use std::io::Write;
use std::time::Duration;

use monday_sdk::{ClientConfig, ErrorKind, GraphQLClient, MondayError, Variables};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn config() -> ClientConfig {
    ClientConfig::new("secret-key").api_version("2024-01")
}

async fn executor(server: &MockServer) -> GraphQLClient {
    GraphQLClient::new(format!("{}/v2", server.uri()), &config()).unwrap()
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

fn header_value<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[tokio::test]
async fn test_json_body_has_only_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("authorization", "secret-key"))
        .and(header("api-version", "2024-01"))
        .and(body_json(json!({"query": "query { me { id } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": {"id": "1"}}})))
        .expect(1)
        .mount(&server)
        .await;

    let body = executor(&server)
        .await
        .execute("query { me { id } }", None)
        .await
        .unwrap();
    assert_eq!(body, json!({"data": {"me": {"id": "1"}}}));

    let request = only_request(&server).await;
    assert!(header_value(&request, "content-type").starts_with("application/json"));
    let sent: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(sent.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_variables_without_file_are_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "query { boards { id } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"boards": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let variables = Variables::new().with("limit", 5);
    executor(&server)
        .await
        .execute("query { boards { id } }", Some(&variables))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_file_variable_sends_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"add_file_to_update": {"id": "9"}}})))
        .expect(1)
        .mount(&server)
        .await;

    let contents: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0x00, 0xff, 0xfe, b'\r', b'\n'];
    let mut file = tempfile::Builder::new()
        .prefix("payload")
        .suffix(".bin")
        .tempfile()
        .unwrap();
    file.write_all(&contents).unwrap();
    let file_name = file.path().file_name().unwrap().to_string_lossy().into_owned();

    let query = "mutation ($file: File!) { add_file_to_update(update_id: \"7\", file: $file) { id } }";
    let body = executor(&server)
        .await
        .execute(query, Some(&Variables::file(file.path())))
        .await
        .unwrap();
    assert_eq!(body["data"]["add_file_to_update"]["id"], "9");

    let request = only_request(&server).await;
    assert!(header_value(&request, "content-type").starts_with("multipart/form-data; boundary="));
    assert_eq!(header_value(&request, "authorization"), "secret-key");
    assert!(contains(&request.body, b"name=\"query\""));
    assert!(contains(&request.body, query.as_bytes()));
    assert!(contains(&request.body, b"name=\"variables[file]\""));
    assert!(contains(
        &request.body,
        format!("filename=\"{file_name}\"").as_bytes()
    ));
    assert!(contains(&request.body, &contents));
    assert!(serde_json::from_slice::<Value>(&request.body).is_err());
}

#[tokio::test]
async fn test_missing_file_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let err = executor(&server)
        .await
        .execute("mutation { x }", Some(&Variables::file(&missing)))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::File);
    assert!(matches!(err, MondayError::File { ref path, .. } if *path == missing));
}

#[tokio::test]
async fn test_non_string_file_is_argument_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let variables = Variables::new().with("file", json!({"path": "a.txt"}));
    let err = executor(&server)
        .await
        .execute("mutation { x }", Some(&variables))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[tokio::test]
async fn test_errors_array_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Invalid board ID", "locations": [{"line": 1, "column": 9}]}],
            "account_id": 1
        })))
        .mount(&server)
        .await;

    let err = executor(&server)
        .await
        .execute("query { boards(ids: [\"x\"]) { id } }", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.to_string(), "Invalid board ID");
}

#[tokio::test]
async fn test_error_message_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_message": "rate limited",
            "status_code": 429
        })))
        .mount(&server)
        .await;

    let err = executor(&server)
        .await
        .execute("query { me { id } }", None)
        .await
        .unwrap_err();
    assert_eq!(err.api_message(), Some("rate limited"));
}

#[tokio::test]
async fn test_http_failure_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = executor(&server)
        .await
        .execute("query { me { id } }", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        MondayError::Transport(source) => assert_eq!(source.status().map(|s| s.as_u16()), Some(500)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = executor(&server)
        .await
        .execute("query { me { id } }", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = config().timeout(Duration::from_millis(200));
    let client = GraphQLClient::new(format!("{}/v2", server.uri()), &config).unwrap();
    let err = client.execute("query { me { id } }", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_headers_are_omitted_when_unset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = GraphQLClient::new(server.uri(), &ClientConfig::default()).unwrap();
    client.execute("query { me { id } }", None).await.unwrap();

    let request = only_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
    assert!(request.headers.get("api-version").is_none());
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "query { me { id } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": {"id": "1"}}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "query { versions { value } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": [{"message": "boom"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = executor(&server).await;
    let other = client.clone();
    let (me, versions) = tokio::join!(
        client.execute("query { me { id } }", None),
        other.execute("query { versions { value } }", None),
    );

    assert_eq!(me.unwrap()["data"]["me"]["id"], "1");
    assert_eq!(versions.unwrap_err().api_message(), Some("boom"));
}
