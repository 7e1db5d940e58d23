//! Conversation Store
//!
//! Session-scoped message log and mode state machine. One session owns one
//! `Conversation`; it is created empty in chat mode and dropped wholesale at
//! session end.

use serde::{Deserialize, Serialize};

use crate::core::prompt::PromptKind;
use crate::error::{ChatError, ChatResult};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// What a message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

/// One turn in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub kind: MessageKind,
    /// Text body, or an encoded reference for image messages
    pub content: String,
}

impl ChatMessage {
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            kind: MessageKind::Text,
            content: content.into(),
        }
    }

    pub fn image(role: Role, reference: impl Into<String>) -> Self {
        Self {
            role,
            kind: MessageKind::Image,
            content: reference.into(),
        }
    }
}

/// Current interface/generation mode
///
/// Valid transitions are `chat <-> website_analysis` and
/// `chat <-> image_generation`; there is no path between the analyzer view
/// and image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Chat,
    WebsiteAnalysis,
    ImageGeneration,
}

/// Session-owned conversation state
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    mode: Mode,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a fresh session: empty log, chat mode
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            mode: Mode::Chat,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The transcript, in strict append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message. Prior entries are never mutated or removed.
    ///
    /// Returns the updated sequence length.
    pub fn record(&mut self, message: ChatMessage) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    /// Switch between the chat and website-analysis interfaces.
    ///
    /// History is kept across toggles. Rejected while in image-generation
    /// mode — the analyzer view is only reachable from the text views.
    pub fn toggle_interface(&mut self) -> ChatResult<Mode> {
        self.mode = match self.mode {
            Mode::Chat => Mode::WebsiteAnalysis,
            Mode::WebsiteAnalysis => Mode::Chat,
            Mode::ImageGeneration => {
                return Err(ChatError::State(
                    "interface toggle is not available in image-generation mode".to_string(),
                ))
            }
        };
        Ok(self.mode)
    }

    /// Switch between text and image generation.
    ///
    /// Only valid from the chat-family view; the website analyzer has no
    /// generation-mode concept.
    pub fn toggle_generation_mode(&mut self) -> ChatResult<Mode> {
        self.mode = match self.mode {
            Mode::Chat => Mode::ImageGeneration,
            Mode::ImageGeneration => Mode::Chat,
            Mode::WebsiteAnalysis => {
                return Err(ChatError::State(
                    "generation mode cannot be toggled from the website analyzer".to_string(),
                ))
            }
        };
        Ok(self.mode)
    }

    /// Which prompt template the next turn must use. Pure; no side effects.
    pub fn select_template(&self) -> PromptKind {
        match self.mode {
            Mode::Chat => PromptKind::PlainQuestion,
            Mode::WebsiteAnalysis => PromptKind::WebsiteQa,
            Mode::ImageGeneration => PromptKind::ImagePrompt,
        }
    }
}
