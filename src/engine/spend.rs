use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// Parallel arrays as returned by the basket builder: one spend amount (in
/// input-token base units) per asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendAmounts {
    pub assets: Vec<String>,
    pub amounts: Vec<u64>,
}

/// Risk tolerance in the builder's fixed-point unit: 1% maps to `scale`.
pub fn scaled_risk_rate(risk_tolerance: f32, scale: u64) -> u64 {
    (risk_tolerance.clamp(0.0, 100.0) as f64 * scale as f64).round() as u64
}

pub fn scaled_amount(amount: u64, scale: u64) -> u64 {
    amount.saturating_mul(scale)
}

/// Share of `input_amount` spent on one asset, rounded to two decimals and
/// then truncated to a whole percent.
pub fn spend_percentage(amount: u64, input_amount: u64) -> u32 {
    let pct = amount as f64 / input_amount as f64 * 100.0;
    let rounded = (pct * 100.0).round() / 100.0;
    rounded.trunc().clamp(0.0, 100.0) as u32
}

pub fn percentages_from_spend(
    spend: &SpendAmounts,
    input_amount: u64,
) -> Result<Vec<(String, u32)>, AllocationError> {
    if spend.assets.len() != spend.amounts.len() {
        return Err(AllocationError::SpendLengthMismatch {
            assets: spend.assets.len(),
            amounts: spend.amounts.len(),
        });
    }
    if input_amount == 0 {
        return Err(AllocationError::ZeroInputAmount);
    }
    Ok(spend
        .assets
        .iter()
        .zip(spend.amounts.iter())
        .map(|(asset, &amount)| (asset.clone(), spend_percentage(amount, input_amount)))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/spend.rs"]
mod tests;
