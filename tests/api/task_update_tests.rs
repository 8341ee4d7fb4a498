//! Integration tests for PUT /tasks/{task_id}.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn update_replaces_title_and_keeps_id_and_status() {
    let app = spawn_app().await;
    app.client
        .create_task(&TaskFactory::create_request("buy milk"))
        .await
        .unwrap();

    let result = app
        .client
        .update_task(1, &TaskFactory::update_request("buy oat milk"))
        .await;

    assert_success(&result);
    match result.unwrap() {
        UpdateOutcomeDto::Updated(task) => {
            assert_eq!(task.id, 1);
            assert_eq!(task.title, "buy oat milk");
            assert!(!task.status);
        }
        UpdateOutcomeDto::NotFound { error } => panic!("unexpected not-found: {error}"),
    }
}

#[rstest]
#[tokio::test]
async fn update_missing_id_answers_200_with_error_payload() {
    let app = spawn_app().await;
    app.client
        .create_task(&TaskFactory::create_request("buy milk"))
        .await
        .unwrap();
    let before = app.raw_tasks_file().await.unwrap();

    let result = app
        .client
        .update_task(99, &TaskFactory::update_request("nope"))
        .await;

    assert_success(&result);
    assert_eq!(
        result.unwrap(),
        UpdateOutcomeDto::NotFound {
            error: "Task not found".to_string()
        }
    );

    // The file is untouched by a failed lookup.
    assert_eq!(app.raw_tasks_file().await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn update_leaves_other_tasks_unchanged() {
    let app = spawn_app().await;
    for title in ["a", "b", "c"] {
        app.client
            .create_task(&TaskFactory::create_request(title))
            .await
            .unwrap();
    }

    app.client
        .update_task(2, &TaskFactory::update_request("b2"))
        .await
        .unwrap();

    let tasks = app.client.list_tasks().await.unwrap();
    let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b2", "c"]);
}
