pub mod script;
pub mod store;

use std::time::Instant;

use crate::config::AdvisorProfile;
use crate::engine::flow::{AdvisorFlow, FlowState, ScheduledAdvance};
use crate::engine::redistribute::SliderGroup;
use crate::engine::view::{AllocationView, SliderMode};
use crate::error::{AllocationError, QuestionnaireError, StoreError};
use crate::model::{AdvisorResult, AllocationResult, Question};
use crate::questions::QuestionTemplate;
use store::{AdvisorSnapshot, PersistedState};

/// Everything one user session owns: its questionnaire copy and the result
/// record handed to downstream collaborators.
#[derive(Debug, Clone)]
pub struct AdvisorSession {
    profile: AdvisorProfile,
    flow: AdvisorFlow,
    result: AdvisorResult,
}

impl AdvisorSession {
    pub fn new(template: QuestionTemplate, profile: AdvisorProfile) -> Self {
        let flow = AdvisorFlow::new(template, profile.advance_delay());
        let mut session = Self {
            profile,
            flow,
            result: AdvisorResult::default(),
        };
        session.refresh_score();
        session
    }

    pub fn restore(
        template: QuestionTemplate,
        profile: AdvisorProfile,
        state: PersistedState,
    ) -> Result<Self, StoreError> {
        let flow = AdvisorFlow::restore(
            template,
            state.advisor.questions,
            state.advisor.active,
            profile.advance_delay(),
        )?;
        let score = flow.score();
        let mut result = state.result;
        SliderGroup::new(result.assets.iter())?;
        if !(0.0..=100.0).contains(&result.risk_tolerance) {
            tracing::warn!(
                persisted = result.risk_tolerance,
                recomputed = score,
                "persisted risk tolerance out of range; using questionnaire score"
            );
            result.risk_tolerance = score;
        }
        Ok(Self {
            profile,
            flow,
            result,
        })
    }

    pub fn profile(&self) -> &AdvisorProfile {
        &self.profile
    }

    pub fn flow(&self) -> &AdvisorFlow {
        &self.flow
    }

    pub fn questions(&self) -> &[Question] {
        self.flow.questions()
    }

    pub fn state(&self) -> FlowState {
        self.flow.state()
    }

    pub fn result(&self) -> &AdvisorResult {
        &self.result
    }

    pub fn set_amount(&mut self, amount: u64) {
        self.result.amount = amount;
    }

    pub fn select_answer(
        &mut self,
        answer: usize,
    ) -> Result<Option<ScheduledAdvance>, QuestionnaireError> {
        let scheduled = self.flow.select_answer(answer)?;
        self.refresh_score();
        Ok(scheduled)
    }

    pub fn advance(&mut self, scheduled: ScheduledAdvance) -> bool {
        self.flow.advance(scheduled)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), QuestionnaireError> {
        self.flow.jump_to(index)
    }

    pub fn next(&mut self) -> bool {
        self.flow.next()
    }

    pub fn previous(&mut self) -> bool {
        self.flow.previous()
    }

    pub fn reset(&mut self) -> bool {
        if !self.flow.reset() {
            return false;
        }
        self.refresh_score();
        true
    }

    pub fn finish(&mut self) -> Result<f32, QuestionnaireError> {
        self.flow.finish()
    }

    /// Derives a fresh allocation view from the current result.
    pub fn allocation_view(
        &self,
        mode: SliderMode,
        now: Instant,
    ) -> Result<AllocationView, AllocationError> {
        AllocationView::from_result(&self.result, mode, &self.profile, now)
    }

    pub fn commit(&mut self, allocation: &AllocationResult) {
        self.result.apply(allocation);
    }

    /// Replaces the asset map, e.g. with a manually chosen distribution.
    pub fn set_assets<I, K>(&mut self, assets: I)
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        self.result.assets = assets.into_iter().filter(|(_, v)| *v != 0).collect();
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            advisor: AdvisorSnapshot {
                questions: self.flow.questions().to_vec(),
                active: self.flow.active(),
            },
            result: self.result.clone(),
        }
    }

    // Every score change hands the default basket split downstream together
    // with the new risk tolerance.
    fn refresh_score(&mut self) {
        self.result.risk_tolerance = self.flow.score();
        let defaults = self.profile.default_assets.clone();
        self.set_assets(defaults);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/tests.rs"]
mod tests;
