//! Tests for transcript growth, reset seeding and failure handling.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::{
    Attachment, GenerateRequest, Generation, ModelClient, Part, ProviderError, Speaker,
    TokenUsage, Turn,
};

// ==================== Test Mocks ====================

/// What a mock saw for one call.
#[derive(Debug, Clone)]
struct SeenRequest {
    model: String,
    turns: Vec<Turn>,
    instructions: String,
    temperature: f64,
}

struct MockClient {
    replies: Mutex<VecDeque<Result<Generation, ProviderError>>>,
    seen: Mutex<Vec<SeenRequest>>,
}

impl MockClient {
    fn new(replies: Vec<Result<Generation, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::from(replies)),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<Generation, ProviderError> {
        self.seen.lock().unwrap().push(SeenRequest {
            model: request.model.to_string(),
            turns: request.turns.to_vec(),
            instructions: request.instructions.to_string(),
            temperature: request.temperature,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Api("no more scripted replies".into())))
    }
}

fn answer(text: &str) -> Result<Generation, ProviderError> {
    Ok(Generation {
        text: Some(text.to_string()),
        usage: TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        },
    })
}

fn session_with(client: Arc<MockClient>) -> TutorSession {
    let settings = TutorSettings::default()
        .with_model("gemini-test")
        .with_instructions("You are an unfolding tutor.");
    TutorSession::new(client, settings)
}

fn png() -> Attachment {
    Attachment::new("image/png", "iVBORw0KGgo=")
}

// ==================== Transcript growth ====================

#[tokio::test]
async fn successful_sends_alternate_user_and_assistant() {
    let client = MockClient::new(vec![answer("a1"), answer("a2"), answer("a3")]);
    let mut session = session_with(client);

    for (i, question) in ["q1", "q2", "q3"].iter().enumerate() {
        let reply = session.send_message(question, None).await;
        assert_eq!(reply, format!("a{}", i + 1));
    }

    let history = session.history();
    assert_eq!(history.len(), 6);
    for (i, turn) in history.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Speaker::User
        } else {
            Speaker::Assistant
        };
        assert_eq!(turn.speaker(), expected, "turn {i}");
    }
    assert_eq!(history[4].text(), "q3");
    assert_eq!(history[5].text(), "a3");
}

#[tokio::test]
async fn each_request_carries_full_transcript_and_persona() {
    let client = MockClient::new(vec![answer("a1"), answer("a2")]);
    let mut session = session_with(client.clone());

    session.send_message("q1", None).await;
    session.send_message("q2", None).await;

    let seen = client.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].turns.len(), 1);
    assert_eq!(seen[1].turns.len(), 3);
    assert_eq!(seen[1].turns[1], Turn::assistant("a1"));
    for request in &seen {
        assert_eq!(request.model, "gemini-test");
        assert_eq!(request.instructions, "You are an unfolding tutor.");
        assert_eq!(request.temperature, 0.7);
    }
}

#[tokio::test]
async fn failed_send_keeps_user_turn_only() {
    let client = MockClient::new(vec![
        answer("a1"),
        Err(ProviderError::Network("connection reset".into())),
        answer("a3"),
    ]);
    let mut session = session_with(client.clone());

    session.send_message("q1", None).await;
    let reply = session.send_message("q2", None).await;
    assert_eq!(reply, PROVIDER_FAILURE_MESSAGE);
    assert_eq!(session.turn_count(), 3);
    assert_eq!(session.history()[2].speaker(), Speaker::User);

    // The unanswered question is still context for the next call.
    session.send_message("q3", None).await;
    let seen = client.seen();
    let texts: Vec<_> = seen[2].turns.iter().map(Turn::text).collect();
    assert_eq!(texts, vec!["q1", "a1", "q2", "q3"]);
    assert_eq!(session.turn_count(), 5);
}

// ==================== Reset ====================

#[tokio::test]
async fn reset_discards_history_and_seeds_menu_exchange() {
    let client = MockClient::new(vec![answer("a1"), answer("a2"), answer("### Practice menu")]);
    let mut session = session_with(client.clone());
    session.send_message("q1", None).await;
    session.send_message("q2", None).await;
    assert_eq!(session.turn_count(), 4);

    let reply = session.reset_chat().await;
    assert_eq!(reply, "### Practice menu");

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].speaker(), Speaker::User);
    assert_eq!(history[0].parts(), &[Part::Text(SEED_GREETING.into())]);
    assert_eq!(history[1].text(), "### Practice menu");

    // The reset request only saw the seed turn.
    let seen = client.seen();
    assert_eq!(seen[2].turns.len(), 1);
}

#[tokio::test]
async fn failed_reset_leaves_only_seed_turn() {
    let client = MockClient::new(vec![
        answer("a1"),
        Err(ProviderError::Timeout),
    ]);
    let mut session = session_with(client);
    session.send_message("q1", None).await;

    let outcome = session.reset().await;
    assert!(matches!(
        outcome,
        Exchange::Failed {
            kind: FailureKind::Provider,
            ..
        }
    ));
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.history()[0].text(), SEED_GREETING);
}

#[tokio::test]
async fn reset_on_fresh_session_is_the_same_as_after_history() {
    let client = MockClient::new(vec![answer("menu")]);
    let mut session = session_with(client);
    session.reset_chat().await;
    assert_eq!(session.turn_count(), 2);
    assert_eq!(session.history()[0].text(), SEED_GREETING);
}

#[tokio::test]
async fn reset_clears_token_usage() {
    let client = MockClient::new(vec![answer("a1"), answer("menu")]);
    let mut session = session_with(client);
    session.send_message("q1", None).await;
    assert_eq!(session.tracker().call_count(), 1);

    session.reset_chat().await;
    assert_eq!(session.tracker().call_count(), 1);
    assert_eq!(session.tracker().total_tokens(), 15);
}

// ==================== Attachments ====================

#[tokio::test]
async fn attachment_only_turn_has_no_text_part() {
    let client = MockClient::new(vec![answer("I see a cone.")]);
    let mut session = session_with(client.clone());

    session.send_message("", Some(png())).await;

    let user = &session.history()[0];
    assert_eq!(user.parts().len(), 1);
    assert_eq!(user.parts()[0], Part::Attachment(png()));
    assert_eq!(client.seen()[0].turns[0].attachments().count(), 1);
}

#[tokio::test]
async fn text_and_attachment_keep_order() {
    let client = MockClient::new(vec![answer("ok")]);
    let mut session = session_with(client);

    session.send_message("hi", Some(png())).await;

    let user = &session.history()[0];
    assert_eq!(
        user.parts(),
        &[Part::Text("hi".into()), Part::Attachment(png())]
    );
    assert_eq!(session.history()[1].attachments().count(), 0);
}

// ==================== Outcomes ====================

#[tokio::test]
async fn empty_provider_text_becomes_fallback_reply() {
    let client = MockClient::new(vec![
        Ok(Generation::default()),
        answer("   "),
    ]);
    let mut session = session_with(client);

    let first = session.exchange("q1", None).await;
    assert_eq!(
        first,
        Exchange::Answered {
            text: FALLBACK_REPLY.into()
        }
    );
    let second = session.send_message("q2", None).await;
    assert_eq!(second, FALLBACK_REPLY);

    assert_eq!(session.turn_count(), 4);
    assert_eq!(session.history()[1].text(), FALLBACK_REPLY);
    assert_eq!(session.history()[3].text(), FALLBACK_REPLY);
}

#[tokio::test]
async fn entity_not_found_maps_to_credential_message() {
    let client = MockClient::new(vec![Err(ProviderError::Api(
        "HTTP 404 Not Found: Requested entity was not found.".into(),
    ))]);
    let mut session = session_with(client);

    let outcome = session.exchange("q1", None).await;
    match &outcome {
        Exchange::Failed { kind, detail } => {
            assert_eq!(*kind, FailureKind::Credential);
            assert!(detail.contains("entity was not found"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(outcome.display_text(), CREDENTIAL_FAILURE_MESSAGE);
}

#[tokio::test]
async fn other_errors_map_to_generic_message() {
    let client = MockClient::new(vec![
        Err(ProviderError::RateLimited),
        Err(ProviderError::Parse("eof".into())),
        Err(ProviderError::Credential("no API key set".into())),
    ]);
    let mut session = session_with(client);

    assert_eq!(session.send_message("a", None).await, PROVIDER_FAILURE_MESSAGE);
    assert_eq!(session.send_message("b", None).await, PROVIDER_FAILURE_MESSAGE);
    assert_eq!(session.send_message("c", None).await, CREDENTIAL_FAILURE_MESSAGE);
    assert_eq!(session.turn_count(), 3);
}

#[tokio::test]
async fn empty_input_is_rejected_without_calling_provider() {
    let client = MockClient::new(vec![answer("unused")]);
    let mut session = session_with(client.clone());

    let outcome = session.exchange("", None).await;
    assert!(matches!(
        outcome,
        Exchange::Failed {
            kind: FailureKind::EmptyInput,
            ..
        }
    ));
    assert_eq!(outcome.display_text(), EMPTY_INPUT_MESSAGE);
    assert_eq!(session.turn_count(), 0);
    assert!(client.seen().is_empty());
}

#[tokio::test]
async fn every_call_resolves_to_a_string() {
    let client = MockClient::new(vec![
        Err(ProviderError::Timeout),
        Err(ProviderError::Network("dns".into())),
    ]);
    let mut session = session_with(client);

    let sent = session.send_message("q", Some(png())).await;
    let reset = session.reset_chat().await;
    let empty = session.send_message("", None).await;
    assert!(!sent.is_empty());
    assert!(!reset.is_empty());
    assert!(!empty.is_empty());
}

#[test]
fn default_settings_use_tutor_persona() {
    let settings = TutorSettings::default();
    assert_eq!(settings.model, crate::persona::DEFAULT_MODEL);
    assert_eq!(settings.temperature, 0.7);
    assert!(settings.instructions.contains("unfolding"));
    assert!(settings.max_output_tokens.is_none());
}
