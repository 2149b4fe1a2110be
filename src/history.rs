//! Bounded conversation log with whole-snapshot persistence.

use std::io;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::classifier::QuestionContext;
use crate::storage::{SnapshotStore, CONVERSATION_HISTORY_KEY};

/// One question/answer exchange with its classification snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// The question as the user typed it.
    pub question: String,
    /// The answer shown to the user.
    pub answer: String,
    /// Classification snapshot taken before prompting.
    pub context: QuestionContext,
    /// RFC 3339 timestamp recorded when the entry was created.
    pub timestamp: String,
}

impl ConversationEntry {
    /// Builds an entry stamped with the current UTC time.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        context: QuestionContext,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            context,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Ordered log of exchanges, bounded by a configured maximum.
///
/// The bound is enforced on append: once the log is full the oldest entry is
/// evicted. A maximum of zero disables the bound.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
    max_entries: usize,
}

impl ConversationLog {
    /// Creates an empty log bounded to `max_entries`.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Reloads the persisted log, trimming oldest entries if the stored
    /// snapshot exceeds the current bound.
    pub fn load(store: &SnapshotStore, max_entries: usize) -> Self {
        let mut log = Self {
            entries: store.load_or_default(CONVERSATION_HISTORY_KEY),
            max_entries,
        };
        log.enforce_bound();
        log
    }

    /// Appends an entry, evicting the oldest once the bound is reached.
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
        self.enforce_bound();
    }

    /// Entries in chronological order.
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persists the whole log as one snapshot.
    pub fn save(&self, store: &SnapshotStore) -> io::Result<()> {
        store.save(CONVERSATION_HISTORY_KEY, &self.entries)
    }

    fn enforce_bound(&mut self) {
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }
}
