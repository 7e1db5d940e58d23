//! Prompt Assembly
//!
//! Renders the fixed instruction templates handed to the generation
//! backends. Rendering is deterministic: identical inputs produce
//! byte-identical output, and nothing here truncates — token limits are the
//! backend's problem.

use crate::conversation::{ChatMessage, Role};

/// Which template a turn uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    PlainQuestion,
    WebsiteQa,
    ImagePrompt,
}

/// A fully rendered instruction for a generation backend
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub kind: PromptKind,
    pub rendered: String,
    /// Only plain questions carry prior turns
    pub history_included: bool,
}

/// Render the transcript of a conversation, oldest first.
fn render_history(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|message| match message.role {
            Role::User => format!("Human: {}", message.content),
            Role::Assistant => format!("AI: {}", message.content),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the prompt for an ordinary chat turn.
///
/// The transcript slot is present even when the history is empty.
pub fn plain_question(history: &[ChatMessage], question: &str) -> PromptRequest {
    let rendered = format!(
        "Chat History:\n{history}\nHuman: {question}\n\nAI: Let me think about that and provide a helpful response.",
        history = render_history(history),
        question = question
    );

    PromptRequest {
        kind: PromptKind::PlainQuestion,
        rendered,
        history_included: true,
    }
}

/// Assemble the prompt for a website-analysis turn.
///
/// `cleaned` must already have been through the normalizer; no history is
/// included (website analysis is single-shot per invocation).
pub fn website_qa(cleaned: &str, question: &str) -> PromptRequest {
    let rendered = format!(
        r#"Analyze the following website content and answer the user's question:

Website Content:
{cleaned}

User's Question:
{question}

Provide a detailed and informative answer based on the website content:"#
    );

    PromptRequest {
        kind: PromptKind::WebsiteQa,
        rendered,
        history_included: false,
    }
}

/// Assemble the prompt for an image-generation turn.
///
/// Identity: the raw question is the generation request.
pub fn image_prompt(question: &str) -> PromptRequest {
    PromptRequest {
        kind: PromptKind::ImagePrompt,
        rendered: question.to_string(),
        history_included: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ChatMessage;

    #[test]
    fn test_plain_question_deterministic() {
        let history = vec![
            ChatMessage::text(Role::User, "hi"),
            ChatMessage::text(Role::Assistant, "hello"),
        ];
        let a = plain_question(&history, "bye");
        let b = plain_question(&history, "bye");
        assert_eq!(a.rendered, b.rendered);
        assert_eq!(a.kind, PromptKind::PlainQuestion);
        assert!(a.history_included);
    }

    #[test]
    fn test_plain_question_history_order() {
        let history = vec![
            ChatMessage::text(Role::User, "hi"),
            ChatMessage::text(Role::Assistant, "hello"),
        ];
        let request = plain_question(&history, "bye");

        let hi = request.rendered.find("hi").expect("missing first turn");
        let hello = request.rendered.find("hello").expect("missing second turn");
        let bye = request.rendered.find("bye").expect("missing question");
        assert!(hi < hello && hello < bye, "transcript out of order");
    }

    #[test]
    fn test_plain_question_empty_history_keeps_slot() {
        let request = plain_question(&[], "first question");
        // Empty transcript, not an omitted one
        assert!(request.rendered.starts_with("Chat History:\n\nHuman: first question"));
    }

    #[test]
    fn test_website_qa_embeds_inputs_verbatim() {
        let request = website_qa("cat sat mat", "where did the cat sit");
        assert!(request.rendered.contains("cat sat mat"));
        assert!(request.rendered.contains("where did the cat sit"));
        assert_eq!(request.kind, PromptKind::WebsiteQa);
        assert!(!request.history_included);
    }

    #[test]
    fn test_image_prompt_is_identity() {
        let request = image_prompt("a llama in space");
        assert_eq!(request.rendered, "a llama in space");
        assert_eq!(request.kind, PromptKind::ImagePrompt);
        assert!(!request.history_included);
    }
}
