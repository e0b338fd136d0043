use std::time::Duration;

use crate::engine::scoring::{all_answered, answered_count, risk_tolerance};
use crate::error::QuestionnaireError;
use crate::model::Question;
use crate::questions::QuestionTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Question(usize),
    Finished,
}

/// Auto-advance requested by an answer selection. The caller commits it with
/// [`AdvisorFlow::advance`] once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub from: usize,
    pub to: usize,
    pub delay: Duration,
    epoch: u64,
}

#[derive(Debug, Clone)]
pub struct AdvisorFlow {
    template: QuestionTemplate,
    questions: Vec<Question>,
    state: FlowState,
    advance_delay: Duration,
    // Bumped on every navigation; advances scheduled under an older epoch are void.
    epoch: u64,
}

impl AdvisorFlow {
    pub fn new(template: QuestionTemplate, advance_delay: Duration) -> Self {
        let questions = template.fresh();
        Self {
            template,
            questions,
            state: FlowState::Question(0),
            advance_delay,
            epoch: 0,
        }
    }

    pub fn restore(
        template: QuestionTemplate,
        questions: Vec<Question>,
        active: usize,
        advance_delay: Duration,
    ) -> Result<Self, QuestionnaireError> {
        template.check_compatible(&questions)?;
        if active >= questions.len() {
            return Err(QuestionnaireError::QuestionOutOfRange {
                index: active,
                count: questions.len(),
            });
        }
        Ok(Self {
            template,
            questions,
            state: FlowState::Question(active),
            advance_delay,
            epoch: 0,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == FlowState::Finished
    }

    /// Index of the question on screen. A finished flow reports the last question.
    pub fn active(&self) -> usize {
        match self.state {
            FlowState::Question(idx) => idx,
            FlowState::Finished => self.questions.len().saturating_sub(1),
        }
    }

    pub fn score(&self) -> f32 {
        risk_tolerance(&self.questions)
    }

    pub fn all_answered(&self) -> bool {
        all_answered(&self.questions)
    }

    pub fn answered(&self) -> usize {
        answered_count(&self.questions)
    }

    pub fn select_answer(
        &mut self,
        answer: usize,
    ) -> Result<Option<ScheduledAdvance>, QuestionnaireError> {
        let active = self.active_question()?;
        self.questions[active].select(active, answer)?;
        tracing::debug!(question = active, answer, score = self.score(), "answer selected");

        if active + 1 < self.questions.len() {
            Ok(Some(ScheduledAdvance {
                from: active,
                to: active + 1,
                delay: self.advance_delay,
                epoch: self.epoch,
            }))
        } else {
            Ok(None)
        }
    }

    /// Commits a scheduled advance. Ignored if the user navigated or reset in
    /// the meantime, even when they came back to the same question.
    pub fn advance(&mut self, scheduled: ScheduledAdvance) -> bool {
        if scheduled.epoch != self.epoch
            || self.state != FlowState::Question(scheduled.from)
            || scheduled.to >= self.questions.len()
        {
            tracing::debug!(from = scheduled.from, to = scheduled.to, "stale advance dropped");
            return false;
        }
        self.move_to(scheduled.to);
        true
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), QuestionnaireError> {
        self.active_question()?;
        if index >= self.questions.len() {
            return Err(QuestionnaireError::QuestionOutOfRange {
                index,
                count: self.questions.len(),
            });
        }
        self.move_to(index);
        Ok(())
    }

    pub fn can_go_next(&self) -> bool {
        match self.state {
            FlowState::Question(idx) => idx + 1 < self.questions.len() && !self.all_answered(),
            FlowState::Finished => false,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        match self.state {
            FlowState::Question(idx) => idx > 0 && !self.all_answered(),
            FlowState::Finished => false,
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.move_to(self.active() + 1);
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.move_to(self.active() - 1);
        true
    }

    pub fn can_reset(&self) -> bool {
        self.answered() > 0
    }

    /// Clears every selection and returns to the first question. No-op while
    /// nothing is selected.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.questions = self.template.fresh();
        self.move_to(0);
        tracing::info!("questionnaire reset");
        true
    }

    pub fn can_continue(&self) -> bool {
        self.all_answered()
    }

    pub fn finish(&mut self) -> Result<f32, QuestionnaireError> {
        if !self.all_answered() {
            return Err(QuestionnaireError::Incomplete {
                answered: self.answered(),
                total: self.questions.len(),
            });
        }
        self.state = FlowState::Finished;
        self.epoch += 1;
        let score = self.score();
        tracing::info!(score, "questionnaire finished");
        Ok(score)
    }

    fn move_to(&mut self, index: usize) {
        self.state = FlowState::Question(index);
        self.epoch += 1;
    }

    fn active_question(&self) -> Result<usize, QuestionnaireError> {
        match self.state {
            FlowState::Question(idx) => Ok(idx),
            FlowState::Finished => Err(QuestionnaireError::Finished),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/flow.rs"]
mod tests;
