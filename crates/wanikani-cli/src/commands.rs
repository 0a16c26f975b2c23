//! Subcommand execution.

use serde::Serialize;
use tracing::debug;
use wanikani::{
    AssignmentUpdate, AssignmentsParams, CreateReview, LevelProgressionsParams, PaginationParams,
    ReviewsParams, SubjectsParams, WaniKaniClient,
};

use crate::{
    AssignmentsCommand, Command, LevelProgressionsCommand, PageArgs, ReviewsCommand,
    SubjectsCommand,
};

impl From<PageArgs> for PaginationParams {
    fn from(page: PageArgs) -> Self {
        PaginationParams {
            page_after_id: page.page_after_id,
            page_before_id: page.page_before_id,
            per_page: page.per_page,
            ..Default::default()
        }
    }
}

/// Run a command and render its result as pretty JSON.
pub async fn run(
    client: &WaniKaniClient,
    command: Command,
) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Assignments(cmd) => assignments(client, cmd).await,
        Command::LevelProgressions(cmd) => level_progressions(client, cmd).await,
        Command::Reviews(cmd) => reviews(client, cmd).await,
        Command::Subjects(cmd) => subjects(client, cmd).await,
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn assignments(
    client: &WaniKaniClient,
    cmd: AssignmentsCommand,
) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        AssignmentsCommand::List {
            levels,
            subject_ids,
            subject_types,
            srs_stages,
            available_after,
            available_before,
            burned,
            hidden,
            started,
            unlocked,
            in_review,
            page,
        } => {
            let params = AssignmentsParams {
                levels,
                subject_ids,
                subject_types,
                srs_stages,
                available_after,
                available_before,
                burned,
                hidden,
                started,
                unlocked,
                in_review,
                page: page.into(),
                ..Default::default()
            };
            let collection = client.assignments().list(&params).await?;
            debug!(count = collection.len(), total = collection.total_count, "Listed assignments");
            render(&collection)
        }
        AssignmentsCommand::Get { id } => render(&client.assignments().get(id).await?),
        AssignmentsCommand::Update {
            id,
            started_at,
            hidden,
        } => {
            let mut update = AssignmentUpdate::new();
            if let Some(at) = started_at {
                update = update.started_at(at);
            }
            if let Some(hidden) = hidden {
                update = update.hidden(hidden);
            }
            render(&client.assignments().update(id, &update).await?)
        }
    }
}

async fn level_progressions(
    client: &WaniKaniClient,
    cmd: LevelProgressionsCommand,
) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        LevelProgressionsCommand::List { page } => {
            let params = LevelProgressionsParams {
                page: page.into(),
                ..Default::default()
            };
            render(&client.level_progressions().list(&params).await?)
        }
        LevelProgressionsCommand::Get { id } => {
            render(&client.level_progressions().get(id).await?)
        }
    }
}

async fn reviews(
    client: &WaniKaniClient,
    cmd: ReviewsCommand,
) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        ReviewsCommand::List {
            assignment_ids,
            subject_ids,
            updated_after,
            page,
        } => {
            let params = ReviewsParams {
                assignment_ids,
                subject_ids,
                updated_after,
                page: page.into(),
                ..Default::default()
            };
            render(&client.reviews().list(&params).await?)
        }
        ReviewsCommand::Get { id } => render(&client.reviews().get(id).await?),
        ReviewsCommand::Create {
            assignment_id,
            incorrect_meaning,
            incorrect_reading,
            created_at,
        } => {
            let mut review = CreateReview::new(assignment_id, incorrect_meaning, incorrect_reading);
            if let Some(at) = created_at {
                review = review.created_at(at);
            }
            render(&client.reviews().create(&review).await?)
        }
    }
}

async fn subjects(
    client: &WaniKaniClient,
    cmd: SubjectsCommand,
) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        SubjectsCommand::List {
            levels,
            slugs,
            types,
            hidden,
            page,
        } => {
            let params = SubjectsParams {
                levels,
                slugs,
                types,
                hidden,
                page: page.into(),
                ..Default::default()
            };
            render(&client.subjects().list(&params).await?)
        }
        SubjectsCommand::Get { id } => render(&client.subjects().get(id).await?),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> WaniKaniClient {
        WaniKaniClient::builder()
            .url(server.uri())
            .api_key("cli-key")
            .build()
    }

    fn resource(object: &str, id: u64, data: Value) -> Value {
        json!({
            "id": id,
            "object": object,
            "url": format!("https://api.wanikani.com/v2/{}s/{}", object, id),
            "data_updated_at": "2018-01-01T00:00:00.000000Z",
            "data": data
        })
    }

    fn assignment(hidden: bool) -> Value {
        json!({
            "created_at": "2017-09-05T23:38:10.695133Z",
            "subject_id": 8761,
            "subject_type": "radical",
            "srs_stage": 8,
            "hidden": hidden
        })
    }

    #[test]
    fn test_page_args_into_pagination() {
        let page: PaginationParams = PageArgs {
            page_after_id: Some(5),
            page_before_id: None,
            per_page: Some(100),
        }
        .into();

        assert_eq!(page.page_after_id, Some(5));
        assert_eq!(page.per_page, Some(100));
        assert!(page.page_after.is_none());
    }

    #[test]
    fn test_render_is_pretty_json() {
        let out = render(&serde_json::json!({"id": 1})).unwrap();
        assert_eq!(out, "{\n  \"id\": 1\n}");
    }

    #[tokio::test]
    async fn test_assignments_update_puts_wrapped_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/assignments/5"))
            .and(header("authorization", "Bearer cli-key"))
            .and(body_json(json!({"data": {"hidden": true}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(resource("assignment", 5, assignment(true))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Assignments(AssignmentsCommand::Update {
            id: 5,
            started_at: None,
            hidden: Some(true),
        });
        let out = run(&client_for(&server), command).await.unwrap();
        let printed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(printed["id"], 5);
        assert_eq!(printed["data"]["hidden"], true);
    }

    #[tokio::test]
    async fn test_level_progressions_list_passes_page_size() {
        let server = MockServer::start().await;
        let body = json!({
            "object": "collection",
            "url": "https://api.wanikani.com/v2/level_progressions",
            "pages": {"per_page": 10, "next_url": null, "previous_url": null},
            "total_count": 1,
            "data_updated_at": null,
            "data": [resource("level_progression", 1, json!({
                "created_at": "2017-03-30T08:21:51.439918Z",
                "level": 1
            }))]
        });
        Mock::given(method("GET"))
            .and(path("/v2/level_progressions"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::LevelProgressions(LevelProgressionsCommand::List {
            page: PageArgs {
                per_page: Some(10),
                ..Default::default()
            },
        });
        let out = run(&client_for(&server), command).await.unwrap();
        let printed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(printed["total_count"], 1);
        assert_eq!(printed["data"][0]["data"]["level"], 1);
    }

    #[tokio::test]
    async fn test_reviews_create_posts_flat_body() {
        let server = MockServer::start().await;
        let review = json!({
            "created_at": "2017-12-20T01:00:59.255427Z",
            "assignment_id": 42,
            "spaced_repetition_system_id": 1,
            "subject_id": 8,
            "starting_srs_stage": 4,
            "ending_srs_stage": 2,
            "incorrect_meaning_answers": 1,
            "incorrect_reading_answers": 0
        });
        Mock::given(method("POST"))
            .and(path("/v2/reviews"))
            .and(body_json(json!({
                "assignment_id": 42,
                "incorrect_meaning_answers": 1,
                "incorrect_reading_answers": 0
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(resource("review", 9, review)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Reviews(ReviewsCommand::Create {
            assignment_id: 42,
            incorrect_meaning: 1,
            incorrect_reading: 0,
            created_at: None,
        });
        let out = run(&client_for(&server), command).await.unwrap();
        let printed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(printed["data"]["assignment_id"], 42);
        assert_eq!(printed["data"]["spaced_repetition_system_id"], 1);
    }

    #[tokio::test]
    async fn test_subjects_get_prints_unmodelled_fields() {
        let server = MockServer::start().await;
        let subject = json!({
            "created_at": "2012-02-27T19:55:19.000000Z",
            "level": 1,
            "slug": "一",
            "document_url": "https://www.wanikani.com/kanji/%E4%B8%80",
            "characters": "一",
            "meanings": [{"meaning": "One", "primary": true, "accepted_answer": true}],
            "meaning_mnemonic": "Lying on the <radical>ground</radical>",
            "reading_mnemonic": "As you're sitting there next to <kanji>One</kanji>",
            "lesson_position": 2,
            "character_images": [],
            "spaced_repetition_system_id": 1
        });
        Mock::given(method("GET"))
            .and(path("/v2/subjects/440"))
            .respond_with(ResponseTemplate::new(200).set_body_json(resource("kanji", 440, subject)))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Subjects(SubjectsCommand::Get { id: 440 });
        let out = run(&client_for(&server), command).await.unwrap();
        let printed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            printed["data"]["meaning_mnemonic"],
            "Lying on the <radical>ground</radical>"
        );
        assert_eq!(printed["data"]["lesson_position"], 2);
        assert_eq!(printed["data"]["character_images"], json!([]));
        assert_eq!(printed["data"]["spaced_repetition_system_id"], 1);
    }

    #[tokio::test]
    async fn test_api_error_is_returned_not_printed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/assignments/1"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"code": 404, "error": "Not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Assignments(AssignmentsCommand::Get { id: 1 });
        let err = run(&client_for(&server), command).await.unwrap_err();

        assert!(err.to_string().contains("Not found"));
    }
}
