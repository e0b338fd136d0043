use crate::model::Question;

/// Risk tolerance in [0, 100]. Every question carries equal weight and the
/// denominator is the full question count, so unanswered questions pull the
/// score down instead of being prorated away.
pub fn risk_tolerance(questions: &[Question]) -> f32 {
    if questions.is_empty() {
        return 0.0;
    }
    let points: u64 = questions
        .iter()
        .filter_map(Question::selected_answer)
        .map(|a| u64::from(a.points))
        .sum();
    (points as f32 / questions.len() as f32).clamp(0.0, 100.0)
}

pub fn all_answered(questions: &[Question]) -> bool {
    questions.iter().all(Question::is_answered)
}

pub fn answered_count(questions: &[Question]) -> usize {
    questions.iter().filter(|q| q.is_answered()).count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/scoring.rs"]
mod tests;
