use std::time::{Duration, Instant};

use crate::engine::spend::SpendAmounts;
use crate::error::SourceError;
use crate::model::AssetMap;

/// Renders an asset-percentage map to SVG markup.
pub trait ChartSource {
    fn render_chart(&self, assets: &AssetMap) -> Result<String, SourceError>;
}

/// Basket builder quote: spend amounts per asset for a risk rate and input amount,
/// both already in fixed-point units.
pub trait SpendAmountSource {
    fn spend_amounts(&self, risk_rate: u64, input_amount: u64) -> Result<SpendAmounts, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Debounces state changes into requests and tags each request with a
/// generation. Only the newest generation's response is accepted, so a late
/// answer to a superseded request cannot overwrite newer state.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    debounce: Duration,
    generation: u64,
    changed_at: Option<Instant>,
    outstanding: Option<u64>,
}

impl RequestTracker {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            generation: 0,
            changed_at: None,
            outstanding: None,
        }
    }

    /// Restarts the debounce window.
    pub fn mark_changed(&mut self, now: Instant) {
        self.changed_at = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.changed_at.is_some()
    }

    pub fn is_outstanding(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Issues a token once the debounce window since the last change has passed.
    pub fn poll(&mut self, now: Instant) -> Option<RequestToken> {
        let changed_at = self.changed_at?;
        if now.saturating_duration_since(changed_at) < self.debounce {
            return None;
        }
        self.changed_at = None;
        self.generation += 1;
        self.outstanding = Some(self.generation);
        Some(RequestToken {
            generation: self.generation,
        })
    }

    /// True if `token` belongs to the latest issued request. Accepting clears
    /// the outstanding marker.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if self.outstanding != Some(token.generation) {
            tracing::debug!(
                stale = token.generation,
                latest = self.generation,
                "dropping superseded response"
            );
            return false;
        }
        self.outstanding = None;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/fetch.rs"]
mod tests;
