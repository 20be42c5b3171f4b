/// Workflow-level errors.
///
/// Only malformed input surfaces here: the narrative collaborator's failures
/// are caught inside the synthesiser and converted to a fallback result, and
/// invariant violations are programming bugs that panic rather than return.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
