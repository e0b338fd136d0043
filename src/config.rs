use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorProfile {
    pub advance_delay_ms: u64,
    pub fetch_debounce_ms: u64,
    pub risk_rate_scale: u64,
    pub amount_scale: u64,
    pub store_name: String,
    pub default_assets: Vec<(String, u32)>,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl AdvisorProfile {
    pub fn default_v1() -> Self {
        Self {
            advance_delay_ms: 250,
            fetch_debounce_ms: 500,
            risk_rate_scale: 1_000_000,
            amount_scale: 1_000_000,
            store_name: "basket-advisor".to_string(),
            default_assets: vec![
                ("stable".to_string(), 40),
                ("mid".to_string(), 30),
                ("risky".to_string(), 30),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self, AdvisorError> {
        let raw = std::fs::read_to_string(path)?;
        let profile: AdvisorProfile = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), AdvisorError> {
        if self.store_name.trim().is_empty() {
            return Err(AdvisorError::Config("store_name is empty".to_string()));
        }
        if self
            .store_name
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '.')
        {
            return Err(AdvisorError::Config(format!(
                "store_name {:?} must be a plain file stem",
                self.store_name
            )));
        }
        if self.risk_rate_scale == 0 || self.amount_scale == 0 {
            return Err(AdvisorError::Config("scales must be non-zero".to_string()));
        }
        let sum: u64 = self.default_assets.iter().map(|(_, v)| u64::from(*v)).sum();
        if sum > 100 {
            return Err(AdvisorError::Config(format!(
                "default_assets sum to {sum}, above 100"
            )));
        }
        Ok(())
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn fetch_debounce(&self) -> Duration {
        Duration::from_millis(self.fetch_debounce_ms)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
