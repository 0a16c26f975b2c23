//! Common test utilities for WaniKani API tests.

use serde_json::{Value, json};
use wanikani::WaniKaniClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> WaniKaniClient {
    WaniKaniClient::builder()
        .url(server.uri())
        .api_key(API_KEY)
        .build()
}

/// Wrap entity data in a resource envelope.
#[allow(dead_code)]
pub fn resource_json(id: u64, object: &str, data: Value) -> Value {
    json!({
        "id": id,
        "object": object,
        "url": format!("https://api.wanikani.com/v2/{}s/{}", object, id),
        "data_updated_at": "2018-04-11T21:00:53.011287Z",
        "data": data
    })
}

/// Wrap resources in a collection envelope.
#[allow(dead_code)]
pub fn collection_json(endpoint: &str, items: Vec<Value>) -> Value {
    json!({
        "object": "collection",
        "url": format!("https://api.wanikani.com/v2/{}", endpoint),
        "pages": {
            "per_page": 500,
            "next_url": null,
            "previous_url": null
        },
        "total_count": items.len(),
        "data_updated_at": "2018-04-11T21:00:53.011287Z",
        "data": items
    })
}

/// Create a successful response.
#[allow(dead_code)]
pub fn mock_ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create an error response in the API's `{ code, error }` shape.
#[allow(dead_code)] // Not all test files use this
pub fn mock_api_error(code: u16, error: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({"code": code, "error": error}))
}

/// Mount a mock for `verb` on `route` that only matches requests carrying
/// the bearer token and the JSON content type.
#[allow(dead_code)]
pub async fn mock_route(server: &MockServer, verb: &str, route: &str, response: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub fn assignment_data() -> Value {
    json!({
        "created_at": "2017-09-05T23:38:10.695133Z",
        "subject_id": 8761,
        "subject_type": "radical",
        "srs_stage": 8,
        "unlocked_at": "2017-09-05T23:38:10.695133Z",
        "started_at": "2017-09-05T23:41:28.980679Z",
        "passed_at": "2017-09-07T17:14:14.491889Z",
        "burned_at": null,
        "available_at": "2018-02-27T00:00:00.000000Z",
        "resurrected_at": null,
        "hidden": false
    })
}

#[allow(dead_code)]
pub fn level_progression_data(level: u8) -> Value {
    json!({
        "created_at": "2017-03-30T08:21:51.439918Z",
        "level": level,
        "unlocked_at": "2017-03-30T08:21:51.439918Z",
        "started_at": "2017-03-30T08:21:51.439918Z",
        "passed_at": null,
        "completed_at": null,
        "abandoned_at": null
    })
}

#[allow(dead_code)]
pub fn review_data() -> Value {
    json!({
        "created_at": "2017-12-20T01:00:59.255427Z",
        "assignment_id": 1,
        "spaced_repetition_system_id": 1,
        "subject_id": 8,
        "starting_srs_stage": 4,
        "ending_srs_stage": 2,
        "incorrect_meaning_answers": 0,
        "incorrect_reading_answers": 1
    })
}

#[allow(dead_code)]
pub fn subject_data() -> Value {
    json!({
        "created_at": "2012-02-27T19:55:19.000000Z",
        "level": 1,
        "slug": "一",
        "hidden_at": null,
        "document_url": "https://www.wanikani.com/kanji/%E4%B8%80",
        "characters": "一",
        "meanings": [{"meaning": "One", "primary": true, "accepted_answer": true}],
        "auxiliary_meanings": [],
        "readings": [{"type": "onyomi", "primary": true, "accepted_answer": true, "reading": "いち"}],
        "component_subject_ids": [1],
        "amalgamation_subject_ids": [2467]
    })
}
