pub mod defs;
pub mod loader;

use std::sync::Arc;

use crate::error::QuestionnaireError;
use crate::model::Question;

/// Immutable question set defined once per process. Sessions take fresh
/// copies via [`QuestionTemplate::fresh`].
#[derive(Debug, Clone)]
pub struct QuestionTemplate {
    questions: Arc<[Question]>,
}

impl QuestionTemplate {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        loader::validate_questions(&questions)?;
        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn builtin() -> Self {
        Self {
            questions: defs::instantiate(defs::builtin_questions()).into(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn fresh(&self) -> Vec<Question> {
        self.questions.to_vec()
    }

    /// Accepts a persisted question list only if it has the template's shape
    /// and every selection is in range.
    pub fn check_compatible(&self, questions: &[Question]) -> Result<(), QuestionnaireError> {
        if questions.len() != self.questions.len() {
            return Err(QuestionnaireError::InvalidTemplate(format!(
                "expected {} questions, found {}",
                self.questions.len(),
                questions.len()
            )));
        }
        for (idx, (q, t)) in questions.iter().zip(self.questions.iter()).enumerate() {
            if q.title != t.title || q.answers != t.answers {
                return Err(QuestionnaireError::InvalidTemplate(format!(
                    "question {idx} ({}) differs from the template",
                    q.title
                )));
            }
            q.check_selection(idx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/questions/tests.rs"]
mod tests;
