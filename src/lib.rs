#![warn(missing_docs)]
//! Core library for the Our Books study platform: question classification,
//! credential rotation, remote answer generation, conversation history, and
//! the Urdu page-translation engine.

pub mod assistant;
pub mod classifier;
pub mod config;
pub mod extract;
pub mod gemini;
pub mod history;
pub mod keypool;
pub mod prompt;
pub mod storage;
pub mod taxonomy;
pub mod translator;

pub use assistant::{StudyAssistant, RETRY_NOTICE};
pub use classifier::{classify, ChapterMatch, QuestionContext};
pub use config::{AssistantConfig, ServiceArgs};
pub use extract::page_text;
pub use gemini::{
    GeminiClient, GenerateError, GenerationParams, TextGenerator, DEFAULT_API_BASE,
    FALLBACK_ANSWER,
};
pub use history::{ConversationEntry, ConversationLog};
pub use keypool::KeyPool;
pub use prompt::{study_prompt, translation_prompt};
pub use storage::{SnapshotStore, CONVERSATION_HISTORY_KEY, TRANSLATION_CACHE_KEY};
pub use taxonomy::{Chapter, Level, Shelf, Subject, Taxonomy};
pub use translator::{
    DocumentState, PageDocument, PageTranslator, TranslateError, TranslationOutcome,
    TranslationStep, TRANSLATION_FAILED_NOTICE,
};
