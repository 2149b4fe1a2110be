//! Maps free-text questions onto the content taxonomy.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Chapter, Level, Subject, Taxonomy};

/// Owned snapshot of a matched chapter, suitable for persisting inside a
/// conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMatch {
    /// Chapter number as printed in the book.
    pub number: u32,
    /// Chapter title.
    pub name: String,
    /// The chapter's full topic keyword list.
    pub topics: Vec<String>,
}

impl ChapterMatch {
    fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            number: chapter.number,
            name: chapter.name.to_string(),
            topics: chapter.topics.iter().map(|topic| topic.to_string()).collect(),
        }
    }
}

/// Classification result for one question.
///
/// Fields stay unset when the question gives no signal for them; chapter and
/// topics are only ever populated when both subject and level resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionContext {
    /// Best-matching subject, if any.
    pub subject: Option<Subject>,
    /// Detected class level, if any.
    pub level: Option<Level>,
    /// Chapter owning the last matched topic keyword.
    pub chapter: Option<ChapterMatch>,
    /// Every matched topic keyword in scan order (duplicates kept).
    pub matched_topics: Vec<String>,
}

/// Classifies a question against the taxonomy.
///
/// Subject matching is a first-wins substring scan in table order, so a
/// question naming two subjects resolves to whichever is declared first.
/// Chapter matching scans every chapter of the resolved shelf, checking the
/// chapter name and then its topic keywords; when keywords from several
/// chapters appear, the last matching chapter wins and earlier ones are
/// overwritten. A question with topic keywords but no recognizable level
/// keeps an unset chapter; the keywords alone are not trusted to pick one.
pub fn classify(question: &str, taxonomy: &Taxonomy) -> QuestionContext {
    let text = question.to_lowercase();

    let subject = Subject::ALL
        .into_iter()
        .find(|subject| text.contains(subject.name()));

    // "class xi" is a prefix of "class xii", so the upper-level markers must
    // be checked first.
    let level = if text.contains("class xii") || text.contains("class 12") {
        Some(Level::Upper)
    } else if text.contains("class xi") || text.contains("class 11") {
        Some(Level::Lower)
    } else {
        None
    };

    let mut context = QuestionContext {
        subject,
        level,
        ..QuestionContext::default()
    };

    if let (Some(subject), Some(level)) = (context.subject, context.level) {
        if let Some(shelf) = taxonomy.shelf(subject, level) {
            for chapter in shelf.chapters {
                let chapter_name = chapter.name.to_lowercase();
                if text.contains(&chapter_name) {
                    context.matched_topics.push(chapter_name);
                    context.chapter = Some(ChapterMatch::from_chapter(chapter));
                }
                for topic in chapter.topics {
                    if text.contains(topic) {
                        context.matched_topics.push(topic.to_string());
                        context.chapter = Some(ChapterMatch::from_chapter(chapter));
                    }
                }
            }
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Taxonomy {
        Taxonomy::builtin()
    }

    #[test]
    fn first_declared_subject_wins() {
        let context = classify("how does physics relate to chemistry?", &builtin());
        assert_eq!(context.subject, Some(Subject::Chemistry));
    }

    #[test]
    fn level_markers_resolve_both_spellings() {
        let taxonomy = builtin();
        for input in ["tell me about class 11 biology", "class xi biology"] {
            assert_eq!(classify(input, &taxonomy).level, Some(Level::Lower), "{input}");
        }
        for input in ["tell me about class 12 biology", "class xii biology"] {
            assert_eq!(classify(input, &taxonomy).level, Some(Level::Upper), "{input}");
        }
        assert_eq!(classify("tell me about biology", &taxonomy).level, None);
    }

    #[test]
    fn stoichiometry_question_resolves_chapter_one() {
        let context = classify(
            "Explain the mole concept in chemistry class 11",
            &builtin(),
        );
        assert_eq!(context.subject, Some(Subject::Chemistry));
        assert_eq!(context.level, Some(Level::Lower));
        let chapter = context.chapter.expect("chapter resolved");
        assert_eq!(chapter.number, 1);
        assert_eq!(chapter.name, "Stoichiometry");
        assert_eq!(context.matched_topics, vec!["mole concept".to_string()]);
    }

    #[test]
    fn later_chapter_match_overwrites_earlier_one() {
        // "enthalpy" lives in chapter 5, "reaction rate" in chapter 8; the
        // chapter field keeps the later match while both topics are recorded.
        let context = classify(
            "compare enthalpy with reaction rate, chemistry class 11",
            &builtin(),
        );
        let chapter = context.chapter.expect("chapter resolved");
        assert_eq!(chapter.number, 8);
        assert_eq!(
            context.matched_topics,
            vec!["enthalpy".to_string(), "reaction rate".to_string()]
        );
    }

    #[test]
    fn chapter_name_alone_resolves_the_chapter() {
        let context = classify(
            "Explain stoichiometry in chemistry class 11",
            &builtin(),
        );
        let chapter = context.chapter.expect("chapter resolved");
        assert_eq!(chapter.number, 1);
        assert_eq!(context.matched_topics, vec!["stoichiometry".to_string()]);
    }

    #[test]
    fn topic_without_level_leaves_chapter_unset() {
        let context = classify("what is the mole concept in chemistry?", &builtin());
        assert_eq!(context.subject, Some(Subject::Chemistry));
        assert_eq!(context.level, None);
        assert!(context.chapter.is_none());
        assert!(context.matched_topics.is_empty());
    }

    #[test]
    fn unrelated_question_yields_empty_context() {
        let context = classify("what's for lunch today?", &builtin());
        assert_eq!(context, QuestionContext::default());
    }
}
