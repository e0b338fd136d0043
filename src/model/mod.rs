pub mod allocation;
pub mod assets;
pub mod basket;
pub mod question;

pub use allocation::{AdvisorResult, AllocationResult, AllocationSlider, RiskSlider};
pub use assets::AssetMap;
pub use question::{Answer, Question};
