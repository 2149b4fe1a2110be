//! Prompt construction for study answers and full-page translation.

use crate::classifier::QuestionContext;

/// Builds the study-assistant prompt for a classified question.
///
/// Three framing tiers depending on how much context resolved, then a fixed
/// math-notation instruction block, then the literal question text.
pub fn study_prompt(question: &str, context: &QuestionContext) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are an intelligent study assistant for the \"Our Books\" educational platform. ",
    );

    match (context.subject, &context.chapter) {
        (Some(subject), Some(chapter)) => {
            prompt.push_str(&format!(
                "The user is asking about {} Chapter {}: {}. ",
                subject.name(),
                chapter.number,
                chapter.name
            ));
            prompt.push_str(&format!(
                "Focus your answer on the topics: {}. ",
                chapter.topics.join(", ")
            ));
            prompt.push_str(
                "Provide detailed explanations with examples and use LaTeX for mathematical expressions. ",
            );
        }
        (Some(subject), None) => {
            prompt.push_str(&format!(
                "The user is asking about {}. Provide comprehensive information about this subject. ",
                subject.name()
            ));
        }
        (None, _) => {
            prompt.push_str("The user is asking a general question. Provide helpful information. ");
        }
    }

    prompt.push_str(
        "IMPORTANT: Use LaTeX for all mathematical expressions. Use $ for inline math and $$ for display math. For example: $E = mc^2$ or $$\\frac{a}{b} = \\frac{c}{d}$$",
    );
    prompt.push_str(&format!("Question: {question}"));
    prompt
}

/// Builds the English-to-Urdu translation prompt for extracted page text.
pub fn translation_prompt(text: &str) -> String {
    format!(
        "Translate the following educational content from English to Urdu. \
This is a textbook chapter about science subjects (Chemistry, Physics, Mathematics, Biology). \n\n\
IMPORTANT INSTRUCTIONS:\n\
1. Translate ALL text content to Urdu\n\
2. Keep mathematical formulas and equations in LaTeX format unchanged\n\
3. Keep chemical formulas unchanged (like H2O, CO2, etc.)\n\
4. Keep scientific symbols and units unchanged\n\
5. Maintain the educational tone and structure\n\
6. Use proper Urdu scientific terminology\n\
7. Preserve HTML structure and formatting\n\
8. Return ONLY the translated content, no explanations\n\n\
Content to translate:\n{text}"
    )
}
