use mockito::{Matcher, Server};
use recipe_assistant::{AssistantError, RecipeAssistant, RecipeOutcome, RejectReason, Screening};
use serde_json::json;

fn completion_body(content: &str) -> String {
    json!({
        "model": "llama2:latest",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_recipe_round_trip_through_ollama() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "llama2:latest"})),
            Matcher::Regex("Give me a recipe for chicken-fried-rice".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Ingredients:\n- 2 cups rice\n- 1 chicken breast"))
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .model("llama2:latest")
        .build()
        .unwrap();

    let outcome = assistant.recipe_for("chicken-fried-rice").await.unwrap();
    match outcome {
        RecipeOutcome::Recipe {
            dish,
            text,
            screening,
        } => {
            assert_eq!(dish, "chicken-fried-rice");
            assert!(text.contains("2 cups rice"));
            assert_eq!(screening, Screening::Recipe);
        }
        other => panic!("Expected recipe, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_name_never_reaches_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    for (candidate, reason) in [
        ("", RejectReason::EmptyInput),
        ("pizza2", RejectReason::InvalidCharacters),
        ("-pizza", RejectReason::InvalidHyphenPlacement),
        (
            "laptop",
            RejectReason::NonEdible {
                token: "laptop".to_string(),
            },
        ),
    ] {
        let outcome = assistant.recipe_for(candidate).await.unwrap();
        assert_eq!(outcome, RecipeOutcome::Rejected(reason));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refusal_is_screened() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "I'm sorry, but I don't know a dish called xyzzy.",
        ))
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    match assistant.recipe_for("xyzzy").await.unwrap() {
        RecipeOutcome::Recipe { screening, text, .. } => {
            assert_eq!(screening, Screening::Declined);
            assert!(text.starts_with("I'm sorry"));
        }
        other => panic!("Expected recipe, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "model \"llama2:latest\" not found, try pulling it first"}}"#)
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let err = assistant.recipe_for("soup").await.unwrap_err();
    assert!(matches!(err, AssistantError::Provider(_)));
    assert!(err.to_string().contains("try pulling it first"));
}

#[tokio::test]
async fn test_plain_text_error_page_is_reported_with_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(404)
        .with_header("content-type", "text/plain")
        .with_body("404 page not found")
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let err = assistant.recipe_for("soup").await.unwrap_err();
    assert!(matches!(err, AssistantError::Provider(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_recommendation_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("I have these ingredients: eggs, spinach".to_string()),
            Matcher::Regex("dietary restrictions: vegetarian".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("1. Spinach frittata\n2. Shakshuka"))
        .create_async()
        .await;

    let assistant = RecipeAssistant::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let ingredients = vec!["eggs".to_string(), " spinach".to_string()];
    let diet = vec!["vegetarian".to_string(), String::new()];
    let text = assistant.recommend(&ingredients, &diet).await.unwrap();
    assert!(text.contains("Spinach frittata"));
    mock.assert_async().await;
}

/// Requires a running Ollama server with llama2 pulled
#[tokio::test]
#[ignore]
async fn test_live_ollama() {
    let assistant = RecipeAssistant::builder().build().unwrap();
    let outcome = assistant.recipe_for("pancakes").await.unwrap();
    assert!(matches!(outcome, RecipeOutcome::Recipe { .. }));
}
