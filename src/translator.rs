//! Translation cache and apply/restore engine for page documents.

use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::page_text;
use crate::gemini::{GenerateError, GenerationParams, TextGenerator};
use crate::prompt::translation_prompt;
use crate::storage::{SnapshotStore, TRANSLATION_CACHE_KEY};

/// Notice shown to the user when a translation attempt fails.
pub const TRANSLATION_FAILED_NOTICE: &str = "Translation failed. Please try again.";

/// Display state of one page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Showing the authored markup.
    Original,
    /// A translation request is in flight.
    Translating,
    /// Showing translated markup.
    Translated,
}

/// Plain-data view of the page being translated.
///
/// Carries the route (the cache key), the live markup, and the one-shot
/// backup of the authored markup. The engine never touches a real document
/// tree; callers apply `markup()` to their own rendering surface.
#[derive(Debug, Clone)]
pub struct PageDocument {
    route: String,
    markup: String,
    original: Option<String>,
    state: DocumentState,
}

impl PageDocument {
    /// Wraps the markup currently displayed at `route`.
    pub fn new(route: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            markup: markup.into(),
            original: None,
            state: DocumentState::Original,
        }
    }

    /// Route identifying this page; also the translation cache key.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Markup currently applied to the page.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Current display state.
    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// The authored markup: the backup when one was captured, the live
    /// markup otherwise.
    fn source_markup(&self) -> &str {
        self.original.as_deref().unwrap_or(&self.markup)
    }

    /// First capture wins; later translations must not overwrite the backup.
    fn capture_original(&mut self) {
        if self.original.is_none() {
            self.original = Some(self.markup.clone());
        }
    }
}

/// Failures surfaced by a translation request.
#[derive(Debug)]
pub enum TranslateError {
    /// A translation for this page is still in flight; the request is
    /// rejected without touching the document.
    InFlight,
    /// The remote translation call failed; the document reverted to the
    /// original view.
    Generate(GenerateError),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => write!(f, "translation already in progress"),
            Self::Generate(err) => write!(f, "translation failed: {err}"),
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Generate(err) => Some(err),
            Self::InFlight => None,
        }
    }
}

/// Cached translation for one page plus the checksum of the markup it was
/// produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedTranslation {
    /// Translated markup as returned by the service.
    pub markup: String,
    /// CRC32 of the authored markup at translation time.
    pub source_checksum: u32,
}

type TranslationCache = BTreeMap<String, CachedTranslation>;

/// Continuation for a translation that needs a remote round trip.
///
/// Produced by [`PageTranslator::begin`]; hand the source text to a
/// generator and feed the result to [`PageTranslator::complete`].
#[derive(Debug)]
pub struct PendingTranslation {
    route: String,
    source_text: String,
    source_checksum: u32,
}

impl PendingTranslation {
    /// Extracted page text to be translated.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// What `begin` decided for a translation request.
#[derive(Debug)]
pub enum TranslationStep {
    /// The translated view was applied without a remote call.
    Applied,
    /// A remote round trip is required.
    Pending(PendingTranslation),
}

/// How an applied translation was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Served from the process-lifetime cache (or already applied).
    Cached,
    /// Produced by a fresh remote call.
    Remote,
}

/// Cache plus state machine driving translated/original views of pages.
///
/// Overlapping requests for the same route are rejected while one is in
/// flight; distinct routes translate independently.
#[derive(Debug, Default)]
pub struct PageTranslator {
    cache: TranslationCache,
    in_flight: HashSet<String>,
    store: Option<SnapshotStore>,
}

impl PageTranslator {
    /// Engine with an empty, unpersisted cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose cache reloads from — and persists to — `store`.
    ///
    /// A corrupt persisted cache reloads as empty.
    pub fn with_store(store: SnapshotStore) -> Self {
        Self {
            cache: store.load_or_default(TRANSLATION_CACHE_KEY),
            in_flight: HashSet::new(),
            store: Some(store),
        }
    }

    /// Number of routes with a cached translation.
    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }

    /// Requests the translated view for `doc`.
    ///
    /// Rejects the request when a translation for the route is already in
    /// flight. Applies straight from cache when the stored entry still
    /// matches the authored markup; otherwise extracts the page text and
    /// returns a pending continuation, leaving the document `Translating`.
    pub fn begin(&mut self, doc: &mut PageDocument) -> Result<TranslationStep, TranslateError> {
        if self.in_flight.contains(doc.route()) || doc.state == DocumentState::Translating {
            return Err(TranslateError::InFlight);
        }
        if doc.state == DocumentState::Translated {
            return Ok(TranslationStep::Applied);
        }

        let checksum = crc32fast::hash(doc.source_markup().as_bytes());
        if let Some(entry) = self.cache.get(doc.route()) {
            if entry.source_checksum == checksum {
                let translated = entry.markup.clone();
                doc.capture_original();
                doc.markup = translated;
                doc.state = DocumentState::Translated;
                return Ok(TranslationStep::Applied);
            }
            tracing::debug!(route = doc.route(), "cached translation is stale; re-translating");
        }

        let source_text = page_text(doc.source_markup());
        doc.state = DocumentState::Translating;
        self.in_flight.insert(doc.route().to_string());
        Ok(TranslationStep::Pending(PendingTranslation {
            route: doc.route().to_string(),
            source_text,
            source_checksum: checksum,
        }))
    }

    /// Finishes a pending translation with the generator's result.
    ///
    /// On success the translation is cached (and persisted best-effort), the
    /// original markup is captured once, and the document flips to
    /// `Translated`. On failure the document reverts to `Original` untouched.
    pub fn complete(
        &mut self,
        doc: &mut PageDocument,
        pending: PendingTranslation,
        outcome: Result<String, GenerateError>,
    ) -> Result<(), TranslateError> {
        self.in_flight.remove(&pending.route);
        match outcome {
            Ok(translated) => {
                self.cache.insert(
                    pending.route,
                    CachedTranslation {
                        markup: translated.clone(),
                        source_checksum: pending.source_checksum,
                    },
                );
                self.persist_cache();
                doc.capture_original();
                doc.markup = translated;
                doc.state = DocumentState::Translated;
                Ok(())
            }
            Err(err) => {
                doc.state = DocumentState::Original;
                Err(TranslateError::Generate(err))
            }
        }
    }

    /// Requests the translated view, driving the remote round trip through
    /// `generator` when the cache cannot serve it.
    pub fn translate_with<G: TextGenerator>(
        &mut self,
        doc: &mut PageDocument,
        generator: &mut G,
    ) -> Result<TranslationOutcome, TranslateError> {
        match self.begin(doc)? {
            TranslationStep::Applied => Ok(TranslationOutcome::Cached),
            TranslationStep::Pending(pending) => {
                let prompt = translation_prompt(pending.source_text());
                let outcome = generator.generate(&prompt, &GenerationParams::translating());
                self.complete(doc, pending, outcome)?;
                Ok(TranslationOutcome::Remote)
            }
        }
    }

    /// Switches the page back to the authored markup, verbatim, without any
    /// remote call. Rejected while a translation for the route is in flight.
    pub fn restore_original(&mut self, doc: &mut PageDocument) -> Result<(), TranslateError> {
        if self.in_flight.contains(doc.route()) || doc.state == DocumentState::Translating {
            return Err(TranslateError::InFlight);
        }
        if let Some(original) = doc.original.clone() {
            doc.markup = original;
        }
        doc.state = DocumentState::Original;
        Ok(())
    }

    fn persist_cache(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(TRANSLATION_CACHE_KEY, &self.cache) {
                tracing::warn!(error = %err, "failed to persist translation cache");
            }
        }
    }
}
