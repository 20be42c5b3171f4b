//! # MatruKavach shared types
//!
//! Serde-ready data model shared by the risk-assessment workflow and its
//! collaborators:
//! - [`PatientName`]: validated, non-empty patient display name
//! - [`RiskLevel`]: categorical risk bands derived from a composite score
//! - Input records ([`ClinicalVitals`], [`EnvironmentalReading`],
//!   [`AssessmentRequest`]) and output records ([`ClinicalAssessment`],
//!   [`EnvironmentalAssessment`], [`CompositeAssessment`])
//!
//! **No scoring logic**: thresholds, scoring and synthesis belong in
//! `matru-core`; this crate only defines the shapes that cross crate
//! boundaries.

mod level;
mod model;
mod name;

pub use level::RiskLevel;
pub use model::{
    AssessmentRequest, ClinicalAssessment, ClinicalVitals, CompositeAssessment,
    EnvironmentalAssessment, EnvironmentalReading,
};
pub use name::{NameError, PatientName};
