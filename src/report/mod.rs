pub mod json;
pub mod text;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::engine::flow::FlowState;
use crate::engine::view::{AllocationView, SliderMode};
use crate::error::AdvisorError;
use crate::model::AssetMap;
use crate::model::basket::{BasketMatch, builtin_baskets, rank_baskets};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::session::AdvisorSession;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerLine {
    pub title: String,
    pub answer: Option<String>,
    pub points: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderLine {
    pub key: String,
    pub current: u32,
    pub default: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedAdjust {
    pub key: String,
    pub value: f32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub tool: String,
    pub version: String,
    pub finished: bool,
    pub answered: usize,
    pub total_questions: usize,
    pub score: f32,
    pub risk_tolerance: f32,
    pub amount: u64,
    pub mode: String,
    pub complete: bool,
    pub allocation_sum: u32,
    pub assets: AssetMap,
    pub answers: Vec<AnswerLine>,
    pub sliders: Vec<SliderLine>,
    pub baskets: Vec<BasketMatch>,
    pub rejected: Vec<RejectedAdjust>,
    pub chart_available: bool,
    pub fetch_errors: Vec<String>,
}

pub fn build_summary(
    session: &AdvisorSession,
    view: &AllocationView,
    rejected: Vec<RejectedAdjust>,
) -> SessionSummary {
    let answers = session
        .questions()
        .iter()
        .map(|q| AnswerLine {
            title: q.title.clone(),
            answer: q.selected_answer().map(|a| a.label.clone()),
            points: q.selected_answer().map(|a| a.points),
        })
        .collect();
    let sliders = view
        .group()
        .sliders()
        .iter()
        .map(|s| SliderLine {
            key: s.key.clone(),
            current: s.current,
            default: s.default,
            max: s.max,
        })
        .collect();
    let allocation = view.result();
    let mut fetch_errors = Vec::new();
    if let Some(err) = view.allocation_error() {
        fetch_errors.push(err.to_string());
    }
    if let Some(err) = view.chart_error() {
        fetch_errors.push(err.to_string());
    }

    SessionSummary {
        tool: "basket-advisor".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        finished: session.state() == FlowState::Finished,
        answered: session.flow().answered(),
        total_questions: session.questions().len(),
        score: session.flow().score(),
        risk_tolerance: allocation.risk_tolerance,
        amount: session.result().amount,
        mode: match view.mode() {
            SliderMode::Interactive => "interactive".to_string(),
            SliderMode::Display => "display".to_string(),
        },
        complete: view.is_complete(),
        allocation_sum: view.group().sum(),
        baskets: rank_baskets(allocation.risk_tolerance, builtin_baskets()),
        assets: allocation.assets,
        answers,
        sliders,
        rejected,
        chart_available: view.chart().is_some(),
        fetch_errors,
    }
}

pub fn write_reports(summary: &SessionSummary, out_dir: &Path) -> Result<(), AdvisorError> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join("summary.json"), render_summary_json(summary)?)?;
    fs::write(out_dir.join("report.txt"), render_report_text(summary))?;
    tracing::info!(out = %out_dir.display(), "reports written");
    Ok(())
}

pub fn format_pct(v: f32) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
