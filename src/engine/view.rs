use std::time::Instant;

use crate::config::AdvisorProfile;
use crate::engine::fetch::{ChartSource, RequestToken, RequestTracker, SpendAmountSource};
use crate::engine::redistribute::SliderGroup;
use crate::engine::spend::{
    SpendAmounts, percentages_from_spend, scaled_amount, scaled_risk_rate,
};
use crate::error::{AllocationError, SourceError};
use crate::model::{AdvisorResult, AllocationResult, AssetMap, RiskSlider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderMode {
    Interactive,
    Display,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub token: RequestToken,
    pub assets: AssetMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRequest {
    pub token: RequestToken,
    pub risk_rate: u64,
    pub input_amount: u64,
}

/// Slider state of one allocation screen plus the two debounced fetches
/// feeding it. A failed or superseded fetch never touches the slider values.
#[derive(Debug, Clone)]
pub struct AllocationView {
    mode: SliderMode,
    risk: RiskSlider,
    group: SliderGroup,
    amount: u64,
    risk_rate_scale: u64,
    amount_scale: u64,
    chart: Option<String>,
    chart_error: Option<SourceError>,
    chart_requests: RequestTracker,
    allocation_error: Option<SourceError>,
    allocation_requests: RequestTracker,
    allocation_input: u64,
}

impl AllocationView {
    pub fn from_result(
        result: &AdvisorResult,
        mode: SliderMode,
        profile: &AdvisorProfile,
        now: Instant,
    ) -> Result<Self, AllocationError> {
        if !(0.0..=100.0).contains(&result.risk_tolerance) {
            return Err(AllocationError::OutOfRange(result.risk_tolerance));
        }
        let group = SliderGroup::new(result.assets.iter())?;
        let mut chart_requests = RequestTracker::new(profile.fetch_debounce());
        chart_requests.mark_changed(now);
        Ok(Self {
            mode,
            risk: RiskSlider::new(result.risk_tolerance),
            group,
            amount: result.amount,
            risk_rate_scale: profile.risk_rate_scale,
            amount_scale: profile.amount_scale,
            chart: None,
            chart_error: None,
            chart_requests,
            allocation_error: None,
            allocation_requests: RequestTracker::new(profile.fetch_debounce()),
            allocation_input: 0,
        })
    }

    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    pub fn risk(&self) -> &RiskSlider {
        &self.risk
    }

    pub fn group(&self) -> &SliderGroup {
        &self.group
    }

    pub fn chart(&self) -> Option<&str> {
        self.chart.as_deref()
    }

    pub fn chart_error(&self) -> Option<&SourceError> {
        self.chart_error.as_ref()
    }

    pub fn allocation_error(&self) -> Option<&SourceError> {
        self.allocation_error.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.group.is_complete()
    }

    /// A failed chart keeps the loading affordance up until a later fetch succeeds.
    pub fn chart_loading(&self) -> bool {
        self.chart_requests.is_pending()
            || self.chart_requests.is_outstanding()
            || self.chart_error.is_some()
    }

    pub fn allocation_loading(&self) -> bool {
        self.allocation_requests.is_pending() || self.allocation_requests.is_outstanding()
    }

    pub fn result(&self) -> AllocationResult {
        AllocationResult {
            risk_tolerance: self.risk.current,
            assets: self.group.assets(),
        }
    }

    pub fn adjust(
        &mut self,
        key: &str,
        value: u32,
        now: Instant,
    ) -> Result<AllocationResult, AllocationError> {
        self.ensure_interactive()?;
        if let Err(err) = self.group.adjust(key, value) {
            tracing::debug!(key, value, error = %err, "slider adjust rejected");
            return Err(err);
        }
        self.chart_requests.mark_changed(now);
        tracing::info!(key, value, sum = self.group.sum(), "slider committed");
        Ok(self.result())
    }

    pub fn adjust_risk_tolerance(
        &mut self,
        value: f32,
        now: Instant,
    ) -> Result<AllocationResult, AllocationError> {
        self.ensure_interactive()?;
        if !(0.0..=self.risk.max).contains(&value) {
            return Err(AllocationError::OutOfRange(value));
        }
        self.risk.current = value;
        self.allocation_requests.mark_changed(now);
        tracing::info!(risk_tolerance = value, "risk tolerance committed");
        Ok(self.result())
    }

    /// Asks for a fresh spend-amount quote for the current risk tolerance.
    pub fn request_allocation(&mut self, now: Instant) {
        self.allocation_requests.mark_changed(now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.risk.current = self.risk.default;
        self.group.reset();
        self.chart_requests.mark_changed(now);
    }

    pub fn poll_chart(&mut self, now: Instant) -> Option<ChartRequest> {
        let token = self.chart_requests.poll(now)?;
        Some(ChartRequest {
            token,
            assets: self.group.assets(),
        })
    }

    pub fn complete_chart(
        &mut self,
        token: RequestToken,
        response: Result<String, SourceError>,
    ) -> bool {
        if !self.chart_requests.accept(token) {
            return false;
        }
        match response {
            Ok(svg) => {
                self.chart = Some(svg);
                self.chart_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "chart fetch failed; keeping last chart");
                self.chart_error = Some(err);
                false
            }
        }
    }

    pub fn poll_allocation(&mut self, now: Instant) -> Option<AllocationRequest> {
        if self.amount == 0 {
            if self.allocation_requests.is_pending() {
                tracing::warn!("allocation fetch skipped: no investment amount set");
            }
            return None;
        }
        let token = self.allocation_requests.poll(now)?;
        let input_amount = scaled_amount(self.amount, self.amount_scale);
        self.allocation_input = input_amount;
        Some(AllocationRequest {
            token,
            risk_rate: scaled_risk_rate(self.risk.current, self.risk_rate_scale),
            input_amount,
        })
    }

    pub fn complete_allocation(
        &mut self,
        token: RequestToken,
        response: Result<SpendAmounts, SourceError>,
        now: Instant,
    ) -> bool {
        if !self.allocation_requests.accept(token) {
            return false;
        }
        let spend = match response {
            Ok(spend) => spend,
            Err(err) => {
                tracing::warn!(error = %err, "allocation fetch failed; keeping sliders");
                self.allocation_error = Some(err);
                return false;
            }
        };
        let group = percentages_from_spend(&spend, self.allocation_input)
            .and_then(SliderGroup::new);
        match group {
            Ok(group) => {
                tracing::info!(
                    assets = group.sliders().len(),
                    sum = group.sum(),
                    "allocation derived from spend amounts"
                );
                self.group = group;
                self.allocation_error = None;
                self.chart_requests.mark_changed(now);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "unusable spend amounts; keeping sliders");
                self.allocation_error = Some(SourceError::new("spend amounts", err.to_string()));
                false
            }
        }
    }

    /// Polls, calls the chart source and completes in one step.
    pub fn drive_chart(&mut self, source: &dyn ChartSource, now: Instant) -> bool {
        match self.poll_chart(now) {
            Some(req) => {
                let response = source.render_chart(&req.assets);
                self.complete_chart(req.token, response)
            }
            None => false,
        }
    }

    pub fn drive_allocation(&mut self, source: &dyn SpendAmountSource, now: Instant) -> bool {
        match self.poll_allocation(now) {
            Some(req) => {
                let response = source.spend_amounts(req.risk_rate, req.input_amount);
                self.complete_allocation(req.token, response, now)
            }
            None => false,
        }
    }

    fn ensure_interactive(&self) -> Result<(), AllocationError> {
        match self.mode {
            SliderMode::Interactive => Ok(()),
            SliderMode::Display => Err(AllocationError::ReadOnly),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/view.rs"]
mod tests;
