pub mod fetch;
pub mod flow;
pub mod redistribute;
pub mod scoring;
pub mod spend;
pub mod view;

pub use fetch::{ChartSource, RequestToken, RequestTracker, SpendAmountSource};
pub use flow::{AdvisorFlow, FlowState, ScheduledAdvance};
pub use redistribute::SliderGroup;
pub use spend::SpendAmounts;
pub use view::{AllocationView, SliderMode};
