//! End-to-end flows over the public API with scripted generators.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use ourbooks::{
    AssistantConfig, DocumentState, GenerateError, GenerationParams, Level, PageDocument,
    PageTranslator, SnapshotStore, StudyAssistant, Subject, Taxonomy, TextGenerator,
    TranslationOutcome,
};

/// Shared view of every prompt a generator received.
#[derive(Clone, Default)]
struct PromptLog(Rc<RefCell<Vec<String>>>);

impl PromptLog {
    fn prompts(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

struct RecordingGenerator {
    log: PromptLog,
    answer: String,
}

impl RecordingGenerator {
    fn new(log: &PromptLog, answer: &str) -> Self {
        Self {
            log: log.clone(),
            answer: answer.to_string(),
        }
    }
}

impl TextGenerator for RecordingGenerator {
    fn generate(
        &mut self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        self.log.0.borrow_mut().push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

struct ExhaustedGenerator;

impl TextGenerator for ExhaustedGenerator {
    fn generate(
        &mut self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        Err(GenerateError::NoCredentialAvailable)
    }
}

#[test]
fn classified_question_flows_into_a_recorded_answer() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SnapshotStore::open(dir.path()).expect("store");
    let log = PromptLog::default();
    let config = AssistantConfig::default();

    let generator = RecordingGenerator::new(&log, "The mole links mass to particle count.");
    let mut assistant =
        StudyAssistant::with_store(Taxonomy::builtin(), generator, &config, store.clone());

    let answer = assistant
        .ask("Explain stoichiometry in chemistry class 11")
        .expect("answer");
    assert_eq!(answer, "The mole links mass to particle count.");

    let prompts = log.prompts();
    assert!(prompts[0].contains("Chapter 1: Stoichiometry"), "{}", prompts[0]);
    assert!(prompts[0].contains("mole concept"), "{}", prompts[0]);
    assert!(prompts[0].ends_with("Question: Explain stoichiometry in chemistry class 11"));

    let entry = &assistant.history()[0];
    assert_eq!(entry.context.subject, Some(Subject::Chemistry));
    assert_eq!(entry.context.level, Some(Level::Lower));
    assert_eq!(entry.context.chapter.as_ref().map(|c| c.number), Some(1));

    // The exchange was persisted; a fresh assistant over the same store sees it.
    let generator = RecordingGenerator::new(&log, "");
    let reloaded = StudyAssistant::with_store(Taxonomy::builtin(), generator, &config, store);
    assert_eq!(reloaded.history().len(), 1);
    assert_eq!(
        reloaded.history()[0].question,
        "Explain stoichiometry in chemistry class 11"
    );
}

#[test]
fn pool_exhaustion_reaches_the_caller_as_a_typed_error() {
    let config = AssistantConfig::default();
    let mut assistant = StudyAssistant::new(Taxonomy::builtin(), ExhaustedGenerator, &config);

    match assistant.ask("what is chemistry?") {
        Err(GenerateError::NoCredentialAvailable) => {}
        other => panic!("expected pool exhaustion, got {other:?}"),
    }
    assert!(assistant.history().is_empty());
}

#[test]
fn translation_round_trip_uses_the_cache_and_persists_it() {
    const PAGE: &str =
        r#"<main class="content"><h1>Stoichiometry</h1><p>The mole is a unit.</p></main>"#;

    let dir = tempfile::tempdir().expect("temp dir");
    let store = SnapshotStore::open(dir.path()).expect("store");
    let log = PromptLog::default();
    let mut generator = RecordingGenerator::new(&log, "<p>مواد کا ترجمہ</p>");

    let mut translator = PageTranslator::with_store(store.clone());
    let mut doc = PageDocument::new("/chemistrybooks/ch1.html", PAGE);

    let outcome = translator
        .translate_with(&mut doc, &mut generator)
        .expect("translated");
    assert_eq!(outcome, TranslationOutcome::Remote);
    assert_eq!(doc.markup(), "<p>مواد کا ترجمہ</p>");

    let prompts = log.prompts();
    assert!(prompts[0].contains("English to Urdu"), "{}", prompts[0]);
    assert!(
        prompts[0].contains("Stoichiometry\nThe mole is a unit."),
        "extracted text should reach the prompt: {}",
        prompts[0]
    );

    translator.restore_original(&mut doc).expect("restore");
    assert_eq!(doc.markup(), PAGE);
    assert_eq!(doc.state(), DocumentState::Original);

    // A second request is served from cache without another remote call.
    let outcome = translator
        .translate_with(&mut doc, &mut generator)
        .expect("cached");
    assert_eq!(outcome, TranslationOutcome::Cached);
    assert_eq!(log.len(), 1);

    // The cache snapshot survives a fresh engine over the same store.
    let mut fresh = PageTranslator::with_store(store);
    let mut reopened = PageDocument::new("/chemistrybooks/ch1.html", PAGE);
    let outcome = fresh
        .translate_with(&mut reopened, &mut generator)
        .expect("cache hit");
    assert_eq!(outcome, TranslationOutcome::Cached);
    assert_eq!(log.len(), 1);
    assert_eq!(reopened.markup(), "<p>مواد کا ترجمہ</p>");
}
