//! Tests for error handling shared by every action.

mod common;

use common::{client_for, mock_api_error, setup_mock_server};
use wanikani::{
    AssignmentUpdate, AssignmentsParams, CreateReview, Error, LevelProgressionsParams,
    ReviewsParams, SubjectsParams, WaniKaniClient,
};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn assert_unauthorized<T: std::fmt::Debug>(result: wanikani::Result<T>) {
    match result {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_surfaces_from_every_action() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(mock_api_error(401, "Unauthorized"))
        .expect(11)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_unauthorized(client.assignments().list(&AssignmentsParams::default()).await);
    assert_unauthorized(client.assignments().get(1).await);
    assert_unauthorized(
        client
            .assignments()
            .update(1, &AssignmentUpdate::new().hidden(true))
            .await,
    );
    assert_unauthorized(
        client
            .level_progressions()
            .list(&LevelProgressionsParams::default())
            .await,
    );
    assert_unauthorized(client.level_progressions().get(1).await);
    assert_unauthorized(client.reviews().list(&ReviewsParams::default()).await);
    assert_unauthorized(client.reviews().get(1).await);
    assert_unauthorized(client.reviews().create(&CreateReview::new(1, 0, 0)).await);
    assert_unauthorized(client.subjects().list(&SubjectsParams::default()).await);
    assert_unauthorized(client.subjects().get(1).await);

    let err = client.subjects().get(2).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "WaniKani API error 401: Unauthorized");
}

#[tokio::test]
async fn test_not_found() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(mock_api_error(404, "Not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.subjects().get(999_999).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.code(), Some(404));
}

#[tokio::test]
async fn test_error_body_not_json() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.assignments().get(1).await.unwrap_err();

    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn test_success_body_wrong_shape() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.reviews().get(1).await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Use a port that's almost certainly not in use
    let client = WaniKaniClient::builder()
        .url("http://127.0.0.1:59999")
        .api_key("key")
        .build();

    let err = client.subjects().get(1).await.unwrap_err();
    assert!(
        matches!(err, Error::ConnectionRefused),
        "Expected connection refused error, got: {}",
        err
    );
}
