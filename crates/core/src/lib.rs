//! # MatruKavach Core
//!
//! The maternal risk-assessment workflow graph:
//! - Clinical-vitals scoring and environmental-hazard scoring as two
//!   independent, concurrent producer stages
//! - A fixed join barrier, then one guidance-synthesis stage that merges
//!   both outputs into a [`matru_types::CompositeAssessment`]
//! - Graceful degradation to rule-based guidance when the injected
//!   [`NarrativeGenerator`] backend fails
//!
//! **No transport or persistence concerns**: HTTP routing, storage and
//! messaging consume the composite record as an opaque value and live
//! outside this crate.

pub mod clinical;
pub mod constants;
pub mod environment;
mod error;
pub mod guidance;
pub mod narrative;
pub mod synthesis;
pub mod workflow;

pub use error::{AssessmentError, AssessmentResult};
pub use narrative::{
    NarrativeContext, NarrativeError, NarrativeGenerator, NarrativeGuidance, TemplateNarrative,
};
pub use synthesis::{
    GuidanceSynthesiser, FALLBACK_GENERIC_JUSTIFICATION, FALLBACK_QUOTA_JUSTIFICATION,
};
pub use workflow::WorkflowExecutor;
