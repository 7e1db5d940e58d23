//! Chat Engine
//!
//! Drives one session: routes a turn through the conversation store, the
//! prompt assembler and the generation backends. One interaction runs to
//! completion before the next is accepted; the engine is the single writer
//! of its conversation state.

use base64::Engine as _;
use tracing::{debug, info};

use crate::backend::{ImageGenerator, TextGenerator};
use crate::conversation::{ChatMessage, Conversation, Mode, Role};
use crate::core::prompt::{self, PromptKind};
use crate::core::text_normalizer::normalize;
use crate::error::ChatResult;
use crate::fetcher::WebFetcher;

pub struct ChatEngine {
    conversation: Conversation,
    fetcher: WebFetcher,
    text_backend: Box<dyn TextGenerator>,
    image_backend: Box<dyn ImageGenerator>,
}

impl ChatEngine {
    pub fn new(
        fetcher: WebFetcher,
        text_backend: Box<dyn TextGenerator>,
        image_backend: Box<dyn ImageGenerator>,
    ) -> Self {
        Self {
            conversation: Conversation::new(),
            fetcher,
            text_backend,
            image_backend,
        }
    }

    /// The session transcript, for the presentation layer to pull
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn mode(&self) -> Mode {
        self.conversation.mode()
    }

    /// Which template the next turn will use
    pub fn select_template(&self) -> PromptKind {
        self.conversation.select_template()
    }

    pub fn toggle_interface(&mut self) -> ChatResult<Mode> {
        let mode = self.conversation.toggle_interface()?;
        info!("Switched to {:?} mode", mode);
        Ok(mode)
    }

    pub fn toggle_generation_mode(&mut self) -> ChatResult<Mode> {
        let mode = self.conversation.toggle_generation_mode()?;
        info!("Switched to {:?} mode", mode);
        Ok(mode)
    }

    /// Run an ordinary chat turn: prompt over the current history, then
    /// record the user and assistant messages.
    ///
    /// Nothing is recorded unless the backend answers.
    pub async fn ask_question(&mut self, question: &str) -> ChatResult<String> {
        let request = prompt::plain_question(self.conversation.messages(), question);
        debug!("Assembled chat prompt ({} bytes)", request.rendered.len());

        let answer = self.text_backend.generate(&request.rendered).await?;

        self.conversation.record(ChatMessage::text(Role::User, question));
        self.conversation
            .record(ChatMessage::text(Role::Assistant, answer.as_str()));
        Ok(answer)
    }

    /// Run a website-analysis turn: fetch, normalize, prompt, answer.
    ///
    /// Single-shot: the conversation log is neither read nor updated.
    pub async fn analyze_website(&mut self, url: &str, question: &str) -> ChatResult<String> {
        let document = self.fetcher.fetch(url).await?;
        let cleaned = normalize(&document.raw_text);
        debug!(
            "Normalized {} into {} chars of clean text",
            document.source_url,
            cleaned.len()
        );

        let request = prompt::website_qa(&cleaned, question);
        self.text_backend.generate(&request.rendered).await
    }

    /// Run an image-generation turn: the question is the prompt; on success
    /// the transcript gains a text question and an image answer.
    pub async fn generate_image(&mut self, question: &str) -> ChatResult<Vec<u8>> {
        let request = prompt::image_prompt(question);

        let image = self.image_backend.generate_image(&request.rendered).await?;

        let reference = base64::engine::general_purpose::STANDARD.encode(&image);
        self.conversation.record(ChatMessage::text(Role::User, question));
        self.conversation
            .record(ChatMessage::image(Role::Assistant, reference));
        Ok(image)
    }
}
