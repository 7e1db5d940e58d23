use async_trait::async_trait;

use llamachat::backend::{ImageGenerator, TextGenerator};
use llamachat::conversation::{ChatMessage, Conversation, MessageKind, Mode, Role};
use llamachat::core::prompt::{self, PromptKind};
use llamachat::core::text_normalizer::normalize;
use llamachat::engine::ChatEngine;
use llamachat::error::{ChatError, ChatResult};
use llamachat::fetcher::WebFetcher;

/// Backend that answers with a canned string and remembers nothing
struct CannedBackend(&'static str);

#[async_trait]
impl TextGenerator for CannedBackend {
    async fn generate(&self, _prompt: &str) -> ChatResult<String> {
        Ok(self.0.to_string())
    }
}

struct CannedImageBackend;

#[async_trait]
impl ImageGenerator for CannedImageBackend {
    async fn generate_image(&self, _prompt: &str) -> ChatResult<Vec<u8>> {
        Ok(b"imagebytes".to_vec())
    }
}

fn test_engine(answer: &'static str) -> ChatEngine {
    ChatEngine::new(
        WebFetcher::new(1),
        Box::new(CannedBackend(answer)),
        Box::new(CannedImageBackend),
    )
}

#[test]
fn test_normalizer_on_page_like_input() {
    // Test cases: (input, expected)
    let test_cases = vec![
        ("<p>Visit https://x.com now!! 123</p>", "Visit now 123"),
        ("<html><body>Hello,   world.</body></html>", "Hello world"),
        ("no markup at all", "no markup at all"),
        ("  \n\t ", ""),
        ("<<<", ""),
        ("check http://a.b/c?d=e done", "check done"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_normalizer_idempotent_over_samples() {
    let samples = [
        "<div class='x'>some <b>bold</b> text</div>",
        "mixed https://example.org/path content & punctuation!",
        "",
        "plain",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_prompt_selection_follows_mode() {
    let mut conversation = Conversation::new();
    assert_eq!(conversation.select_template(), PromptKind::PlainQuestion);

    conversation.toggle_interface().unwrap();
    assert_eq!(conversation.select_template(), PromptKind::WebsiteQa);
    conversation.toggle_interface().unwrap();

    conversation.toggle_generation_mode().unwrap();
    assert_eq!(conversation.select_template(), PromptKind::ImagePrompt);
}

#[test]
fn test_transcript_renders_between_history_and_suffix() {
    let history = vec![
        ChatMessage::text(Role::User, "what is rust"),
        ChatMessage::text(Role::Assistant, "a systems language"),
    ];
    let request = prompt::plain_question(&history, "is it fast");

    assert!(request.rendered.starts_with("Chat History:\n"));
    assert!(request.rendered.contains("Human: what is rust\nAI: a systems language"));
    assert!(request.rendered.contains("Human: is it fast"));
    assert!(request
        .rendered
        .ends_with("AI: Let me think about that and provide a helpful response."));
}

#[tokio::test]
async fn test_full_chat_session_accumulates_history() {
    let mut engine = test_engine("the answer");

    engine.ask_question("first").await.expect("turn 1 failed");
    engine.ask_question("second").await.expect("turn 2 failed");

    let messages = engine.conversation().messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].content, "first");
    assert_eq!(messages[1].content, "the answer");
    assert_eq!(messages[2].content, "second");
    assert_eq!(messages[3].role, Role::Assistant);
}

#[tokio::test]
async fn test_mode_switching_mid_session_keeps_history() {
    let mut engine = test_engine("ok");

    engine.ask_question("remember me").await.expect("turn failed");
    engine.toggle_interface().expect("toggle failed");
    assert_eq!(engine.mode(), Mode::WebsiteAnalysis);
    engine.toggle_interface().expect("toggle failed");

    engine.toggle_generation_mode().expect("toggle failed");
    let _ = engine.generate_image("a llama").await.expect("image failed");
    engine.toggle_generation_mode().expect("toggle failed");

    let messages = engine.conversation().messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].content, "remember me");
    assert_eq!(messages[3].kind, MessageKind::Image);
}

#[tokio::test]
async fn test_website_analysis_does_not_touch_history() {
    let mut engine = test_engine("ok");
    engine.ask_question("hello").await.expect("turn failed");

    // The fetch fails fast (nothing listens on port 9) and the turn aborts
    // before prompt assembly
    let result = engine.analyze_website("http://127.0.0.1:9/", "anything").await;
    assert!(matches!(result, Err(ChatError::Fetch(_))));

    assert_eq!(engine.conversation().messages().len(), 2);
}

#[tokio::test]
async fn test_generation_toggle_rejected_in_analyzer_mode() {
    let mut engine = test_engine("ok");
    engine.toggle_interface().expect("toggle failed");

    let result = engine.toggle_generation_mode();
    assert!(matches!(result, Err(ChatError::State(_))));
    assert_eq!(engine.mode(), Mode::WebsiteAnalysis);
}
