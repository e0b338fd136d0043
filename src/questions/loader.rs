use std::path::Path;

use crate::error::{AdvisorError, QuestionnaireError};
use crate::model::Question;
use crate::questions::QuestionTemplate;
use crate::questions::defs::{builtin_questions, instantiate};

pub fn load_template(path: Option<&Path>) -> Result<QuestionTemplate, AdvisorError> {
    let questions = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)?;
            let mut questions: Vec<Question> = serde_json::from_str(&raw)?;
            // A template never carries selections.
            for q in &mut questions {
                q.clear();
            }
            tracing::info!(path = %p.display(), count = questions.len(), "loaded question template");
            questions
        }
        None => instantiate(builtin_questions()),
    };
    Ok(QuestionTemplate::new(questions)?)
}

pub fn validate_questions(questions: &[Question]) -> Result<(), QuestionnaireError> {
    if questions.is_empty() {
        return Err(QuestionnaireError::InvalidTemplate(
            "template has no questions".to_string(),
        ));
    }
    for (idx, q) in questions.iter().enumerate() {
        if q.answers.is_empty() {
            return Err(QuestionnaireError::InvalidTemplate(format!(
                "question {idx} ({}) has no answers",
                q.title
            )));
        }
        if let Some(a) = q.answers.iter().find(|a| a.points > 100) {
            return Err(QuestionnaireError::InvalidTemplate(format!(
                "question {idx} answer {:?} has {} points (max 100)",
                a.label, a.points
            )));
        }
    }
    Ok(())
}
