use serde::{Deserialize, Serialize};

use crate::model::assets::AssetMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlider {
    pub key: String,
    pub current: u32,
    pub default: u32,
    pub max: u32,
}

impl AllocationSlider {
    pub fn new(key: impl Into<String>, value: u32) -> Self {
        Self {
            key: key.into(),
            current: value,
            default: value,
            max: 100,
        }
    }
}

/// Risk tolerance control. Not part of the 100% group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSlider {
    pub current: f32,
    pub default: f32,
    pub max: f32,
}

impl RiskSlider {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            default: value,
            max: 100.0,
        }
    }
}

/// Derived record emitted on every slider commit. Zero-valued assets are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub risk_tolerance: f32,
    pub assets: AssetMap,
}

/// The session-level result handed to downstream collaborators and persisted
/// across reloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorResult {
    pub risk_tolerance: f32,
    #[serde(default)]
    pub assets: AssetMap,
    #[serde(default)]
    pub amount: u64,
}

impl AdvisorResult {
    pub fn apply(&mut self, allocation: &AllocationResult) {
        self.risk_tolerance = allocation.risk_tolerance;
        self.assets = allocation.assets.clone();
    }

    pub fn asset_sum(&self) -> u32 {
        self.assets.sum()
    }
}
