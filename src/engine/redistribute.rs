use crate::error::AllocationError;
use crate::model::{AllocationSlider, AssetMap};

pub const BUDGET: u32 = 100;

/// Percentage sliders whose current values never sum above [`BUDGET`].
/// After every commit each slider's `max` equals the budget left over by the
/// others, so no single drag can overshoot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderGroup {
    sliders: Vec<AllocationSlider>,
}

impl SliderGroup {
    pub fn new<I, K>(values: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let mut sliders: Vec<AllocationSlider> = Vec::new();
        for (key, value) in values {
            let key = key.into();
            if value > BUDGET {
                return Err(AllocationError::OutOfRange(value as f32));
            }
            if sliders.iter().any(|s| s.key == key) {
                return Err(AllocationError::DuplicateKey(key));
            }
            sliders.push(AllocationSlider::new(key, value));
        }
        let sum: u32 = sliders.iter().map(|s| s.current).sum();
        if sum > BUDGET {
            return Err(AllocationError::SumExceeds(sum));
        }
        let mut group = Self { sliders };
        group.recompute_max();
        Ok(group)
    }

    pub fn sliders(&self) -> &[AllocationSlider] {
        &self.sliders
    }

    pub fn get(&self, key: &str) -> Option<&AllocationSlider> {
        self.sliders.iter().find(|s| s.key == key)
    }

    pub fn sum(&self) -> u32 {
        self.sliders.iter().map(|s| s.current).sum()
    }

    /// Only a complete group may be treated as a final allocation.
    pub fn is_complete(&self) -> bool {
        self.sum() == BUDGET
    }

    pub fn remaining(&self) -> u32 {
        BUDGET.saturating_sub(self.sum())
    }

    /// Rejected calls leave the group untouched.
    pub fn adjust(&mut self, key: &str, value: u32) -> Result<(), AllocationError> {
        let idx = self
            .sliders
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| AllocationError::UnknownSlider(key.to_string()))?;
        let max = self.sliders[idx].max;
        if value > max {
            return Err(AllocationError::ExceedsBudget {
                key: key.to_string(),
                value,
                max,
            });
        }
        self.sliders[idx].current = value;
        self.recompute_max();
        Ok(())
    }

    pub fn reset(&mut self) {
        for s in &mut self.sliders {
            s.current = s.default;
        }
        self.recompute_max();
    }

    /// Non-zero sliders only.
    pub fn assets(&self) -> AssetMap {
        self.sliders
            .iter()
            .filter(|s| s.current != 0)
            .map(|s| (s.key.clone(), s.current))
            .collect()
    }

    fn recompute_max(&mut self) {
        let sum = self.sum();
        for s in &mut self.sliders {
            let others = sum - s.current;
            s.max = BUDGET.saturating_sub(others);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/redistribute.rs"]
mod tests;
