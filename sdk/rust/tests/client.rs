//! End-to-end tests: operations rendered and sent through `MondayClient`.

use std::io::Write;

use monday_sdk::resources::boards::{DuplicateBoard, FetchBoards};
use monday_sdk::resources::items::FetchItemsPage;
use monday_sdk::resources::updates::AddFileToUpdate;
use monday_sdk::resources::users::FetchCurrentUser;
use monday_sdk::types::State;
use monday_sdk::{ClientConfig, ErrorKind, MondayClient, Operation, RawQuery};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> MondayClient {
    let config = ClientConfig::new("secret-key")
        .api_url(format!("{}/v2", server.uri()))
        .file_url(format!("{}/v2/file", server.uri()));
    MondayClient::with_config(config).unwrap()
}

#[derive(Debug, Deserialize)]
struct Boards {
    boards: Vec<Board>,
}

#[derive(Debug, Deserialize)]
struct Board {
    id: String,
    name: String,
}

#[tokio::test]
async fn test_send_renders_and_posts_operation() {
    let server = MockServer::start().await;
    let op = FetchBoards {
        ids: Some("1".into()),
        state: Some(State::Active),
        ..Default::default()
    };
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(body_json(json!({"query": op.render().unwrap()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"boards": [{"id": "1", "name": "Roadmap"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server).send(&op).await.unwrap();
    assert_eq!(body["data"]["boards"][0]["name"], "Roadmap");
}

#[tokio::test]
async fn test_send_as_deserializes_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"boards": [{"id": "1", "name": "Roadmap"}, {"id": "2", "name": "Bugs"}]},
            "account_id": 42
        })))
        .mount(&server)
        .await;

    let boards: Boards = client(&server)
        .send_as(&FetchBoards::default())
        .await
        .unwrap();
    let names: Vec<&str> = boards.boards.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Roadmap", "Bugs"]);
    assert_eq!(boards.boards[1].id, "2");
}

#[tokio::test]
async fn test_send_as_type_mismatch_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": {"id": "1"}}})))
        .mount(&server)
        .await;

    let err = client(&server)
        .send_as::<Boards, _>(&FetchCurrentUser)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_argument_errors_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let duplicate = DuplicateBoard {
        workspace_id: Some("9".to_string()),
        ..DuplicateBoard::new("1")
    };
    let err = client.send(&duplicate).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let page = FetchItemsPage {
        cursor: Some("abc".to_string()),
        query_params: Some("{operator: and}".to_string()),
        ..FetchItemsPage::new("1")
    };
    let err = client.send(&page).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "`cursor` and `query_params` cannot be used in the same request"
    );
}

#[tokio::test]
async fn test_upload_goes_to_file_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"add_file_to_update": {"id": "55"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"quarterly numbers").unwrap();

    let body = client(&server)
        .send(&AddFileToUpdate::new("7", file.path()))
        .await
        .unwrap();
    assert_eq!(body["data"]["add_file_to_update"]["id"], "55");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_raw_query_and_upload_helpers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(body_json(json!({"query": "query { me { id } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": {"id": "1"}}})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.execute("query { me { id } }").await.unwrap();
    client.send(&RawQuery::new("query { me { id } }")).await.unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"notes").unwrap();
    client
        .upload(
            "mutation ($file: File!) { add_file_to_update(update_id: \"1\", file: $file) { id } }",
            file.path(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_boxed_operations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(2)
        .mount(&server)
        .await;

    let operations: Vec<Box<dyn Operation>> = vec![
        Box::new(FetchCurrentUser),
        Box::new(FetchBoards::default()),
    ];
    let client = client(&server);
    for op in &operations {
        client.send(op.as_ref()).await.unwrap();
    }
}
