use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("answer {answer} out of range for question {question} ({available} answers)")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        available: usize,
    },

    #[error("question {index} out of range ({count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("questionnaire incomplete: {answered} of {total} answered")]
    Incomplete { answered: usize, total: usize },

    #[error("questionnaire already finished")]
    Finished,

    #[error("invalid question template: {0}")]
    InvalidTemplate(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("unknown slider: {0}")]
    UnknownSlider(String),

    #[error("slider {key}: value {value} exceeds remaining budget {max}")]
    ExceedsBudget { key: String, value: u32, max: u32 },

    #[error("value {0} outside 0..=100")]
    OutOfRange(f32),

    #[error("sliders are read-only in display mode")]
    ReadOnly,

    #[error("initial allocation sums to {0}, above 100")]
    SumExceeds(u32),

    #[error("duplicate slider key: {0}")]
    DuplicateKey(String),

    #[error("spend amounts mismatch: {assets} assets, {amounts} amounts")]
    SpendLengthMismatch { assets: usize, amounts: usize },

    #[error("input amount must be greater than zero")]
    ZeroInputAmount,
}

/// Failure reported by an external collaborator (chart renderer or spend-amount source).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source_name} failed: {message}")]
pub struct SourceError {
    pub source_name: &'static str,
    pub message: String,
}

impl SourceError {
    pub fn new(source_name: &'static str, message: impl Into<String>) -> Self {
        Self {
            source_name,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("persisted state rejected: {0}")]
    Invalid(#[from] QuestionnaireError),

    #[error("persisted allocation rejected: {0}")]
    Allocation(#[from] AllocationError),
}

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
