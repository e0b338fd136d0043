use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::engine::fetch::SpendAmountSource;
use crate::engine::spend::SpendAmounts;
use crate::engine::view::{AllocationView, SliderMode};
use crate::error::{AdvisorError, AllocationError, SourceError};
use crate::model::AssetMap;
use crate::report::RejectedAdjust;
use crate::session::AdvisorSession;

pub const RISK_TOLERANCE_KEY: &str = "risk_tolerance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    #[default]
    Interactive,
    Display,
}

impl From<ScriptMode> for SliderMode {
    fn from(mode: ScriptMode) -> Self {
        match mode {
            ScriptMode::Interactive => SliderMode::Interactive,
            ScriptMode::Display => SliderMode::Display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub key: String,
    pub value: f32,
}

/// A recorded user session: answers in question order (`null` = unanswered),
/// then the allocation inputs and slider drags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    pub amount: u64,
    pub answers: Vec<Option<usize>>,
    pub assets: Option<AssetMap>,
    pub spend: Option<SpendAmounts>,
    pub adjustments: Vec<Adjustment>,
    pub mode: ScriptMode,
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self, AdvisorError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Replays a quote captured from the basket builder.
#[derive(Debug, Clone)]
pub struct RecordedQuote {
    pub spend: SpendAmounts,
}

impl SpendAmountSource for RecordedQuote {
    fn spend_amounts(&self, _risk_rate: u64, _input_amount: u64) -> Result<SpendAmounts, SourceError> {
        if self.spend.assets.is_empty() {
            return Err(SourceError::new("recorded quote", "no assets recorded"));
        }
        Ok(self.spend.clone())
    }
}

#[derive(Debug)]
pub struct ScriptOutcome {
    pub view: AllocationView,
    pub rejected: Vec<RejectedAdjust>,
}

pub fn replay(
    session: &mut AdvisorSession,
    script: &SessionScript,
    start: Instant,
) -> Result<ScriptOutcome, AdvisorError> {
    let debounce = session.profile().fetch_debounce();
    let mut clock = start;

    if script.amount > 0 {
        session.set_amount(script.amount);
    }

    for (idx, answer) in script.answers.iter().enumerate() {
        let Some(answer) = *answer else {
            continue;
        };
        session.jump_to(idx)?;
        if let Some(scheduled) = session.select_answer(answer)? {
            clock += scheduled.delay;
            session.advance(scheduled);
        }
    }

    if session.flow().can_continue() {
        session.finish()?;
    } else {
        tracing::warn!(
            answered = session.flow().answered(),
            total = session.questions().len(),
            "questionnaire incomplete; allocation is provisional"
        );
    }

    if let Some(assets) = &script.assets {
        session.set_assets(assets.iter());
    }

    let mut view = session.allocation_view(script.mode.into(), clock)?;
    let quote = script.spend.clone().map(|spend| RecordedQuote { spend });
    if let Some(quote) = &quote {
        view.request_allocation(clock);
        clock = settle(&mut view, quote, clock, debounce);
    }

    let mut rejected = Vec::new();
    for adj in &script.adjustments {
        let outcome = if adj.key == RISK_TOLERANCE_KEY {
            view.adjust_risk_tolerance(adj.value, clock)
        } else {
            match whole_percent(adj.value) {
                Some(value) => view.adjust(&adj.key, value, clock),
                None => Err(AllocationError::OutOfRange(adj.value)),
            }
        };
        match outcome {
            Ok(result) => session.commit(&result),
            Err(err) => rejected.push(RejectedAdjust {
                key: adj.key.clone(),
                value: adj.value,
                reason: err.to_string(),
            }),
        }
        if let Some(quote) = &quote {
            clock = settle(&mut view, quote, clock, debounce);
        }
    }

    session.commit(&view.result());
    Ok(ScriptOutcome { view, rejected })
}

fn whole_percent(value: f32) -> Option<u32> {
    if value.fract() != 0.0 || !(0.0..=100.0).contains(&value) {
        return None;
    }
    Some(value as u32)
}

fn settle(
    view: &mut AllocationView,
    quote: &RecordedQuote,
    clock: Instant,
    debounce: Duration,
) -> Instant {
    if !view.allocation_loading() {
        return clock;
    }
    let later = clock + debounce;
    view.drive_allocation(quote, later);
    later
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/script.rs"]
mod tests;
