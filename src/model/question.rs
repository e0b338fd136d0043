use serde::{Deserialize, Serialize};

use crate::error::QuestionnaireError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub label: String,
    pub points: u32,
}

/// One multiple-choice question. `selected` is `None` until the user picks an
/// answer; `Some(0)` means the first answer was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    pub prompt: String,
    pub answers: Vec<Answer>,
    #[serde(default)]
    selected: Option<usize>,
}

impl Question {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            answers,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_answer(&self) -> Option<&Answer> {
        self.selected.and_then(|idx| self.answers.get(idx))
    }

    pub fn select(&mut self, question: usize, answer: usize) -> Result<(), QuestionnaireError> {
        if answer >= self.answers.len() {
            return Err(QuestionnaireError::AnswerOutOfRange {
                question,
                answer,
                available: self.answers.len(),
            });
        }
        self.selected = Some(answer);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Checks a deserialized selection still points at an existing answer.
    pub fn check_selection(&self, question: usize) -> Result<(), QuestionnaireError> {
        match self.selected {
            Some(answer) if answer >= self.answers.len() => {
                Err(QuestionnaireError::AnswerOutOfRange {
                    question,
                    answer,
                    available: self.answers.len(),
                })
            }
            _ => Ok(()),
        }
    }
}
