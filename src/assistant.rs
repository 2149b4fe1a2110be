//! Question-answering orchestration: classify, prompt, generate, log.

use crate::classifier::classify;
use crate::config::AssistantConfig;
use crate::gemini::{GenerateError, GenerationParams, TextGenerator};
use crate::history::{ConversationEntry, ConversationLog};
use crate::prompt::study_prompt;
use crate::storage::SnapshotStore;
use crate::taxonomy::Taxonomy;

/// Notice shown to the user when the answering path fails.
pub const RETRY_NOTICE: &str =
    "Sorry, I encountered an error. Please try again or check your internet connection.";

/// Study assistant front door.
///
/// One `ask` call runs classification, prompt construction, the remote
/// generation round trip, and history bookkeeping. History persistence is
/// best-effort: a failed save is logged and never fails the ask.
pub struct StudyAssistant<G> {
    taxonomy: Taxonomy,
    generator: G,
    log: ConversationLog,
    store: Option<SnapshotStore>,
}

impl<G: TextGenerator> StudyAssistant<G> {
    /// Assistant without persistence.
    pub fn new(taxonomy: Taxonomy, generator: G, config: &AssistantConfig) -> Self {
        Self {
            taxonomy,
            generator,
            log: ConversationLog::new(config.max_history()),
            store: None,
        }
    }

    /// Assistant that reloads its conversation log from `store` and persists
    /// it after every exchange.
    pub fn with_store(
        taxonomy: Taxonomy,
        generator: G,
        config: &AssistantConfig,
        store: SnapshotStore,
    ) -> Self {
        Self {
            taxonomy,
            generator,
            log: ConversationLog::load(&store, config.max_history()),
            store: Some(store),
        }
    }

    /// Answers one question and records the exchange.
    pub fn ask(&mut self, question: &str) -> Result<String, GenerateError> {
        let context = classify(question, &self.taxonomy);
        tracing::debug!(
            subject = ?context.subject,
            level = ?context.level,
            topics = context.matched_topics.len(),
            "classified question"
        );

        let prompt = study_prompt(question, &context);
        let answer = self
            .generator
            .generate(&prompt, &GenerationParams::answering())?;

        self.log
            .push(ConversationEntry::new(question, answer.as_str(), context));
        if let Some(store) = &self.store {
            if let Err(err) = self.log.save(store) {
                tracing::warn!(error = %err, "failed to persist conversation history");
            }
        }

        Ok(answer)
    }

    /// Recorded exchanges in chronological order.
    pub fn history(&self) -> &[ConversationEntry] {
        self.log.entries()
    }
}
