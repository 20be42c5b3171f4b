//! Workflow execution: fan-out, join, synthesis.
//!
//! The task graph is small and fixed:
//!
//! ```text
//! START ──┬── clinical scorer ──────┐
//!         └── environmental scorer ─┴── join ── guidance synthesis ── DONE
//! ```
//!
//! The two scorer branches are pure and share no state, so they run as
//! independent spawned tasks with no locking; their completion order cannot
//! affect the result. The join is a fixed barrier and the synthesiser is
//! invoked exactly once per run, after it.

use matru_types::{AssessmentRequest, CompositeAssessment};
use tokio::task::JoinError;

use crate::clinical::assess_clinical;
use crate::environment::assess_environment;
use crate::error::AssessmentResult;
use crate::narrative::NarrativeGenerator;
use crate::synthesis::GuidanceSynthesiser;

/// Runs the full risk-assessment workflow for one request.
pub struct WorkflowExecutor<G> {
    synthesiser: GuidanceSynthesiser<G>,
}

impl<G: NarrativeGenerator> WorkflowExecutor<G> {
    /// Creates an executor around the injected narrative backend.
    pub fn new(generator: G) -> Self {
        Self {
            synthesiser: GuidanceSynthesiser::new(generator),
        }
    }

    /// Executes `START → {clinical, environmental} → join → synthesis → DONE`.
    ///
    /// Fails only when a scorer rejects malformed input, in which case the
    /// workflow aborts before synthesis. The narrative backend's failures
    /// never surface here; the synthesiser converts them into a fallback
    /// result. A panicking scorer branch is resurfaced as a panic.
    pub async fn run(&self, request: &AssessmentRequest) -> AssessmentResult<CompositeAssessment> {
        tracing::info!(patient = %request.patient, "starting risk assessment");

        let vitals = request.vitals.clone();
        let reading = request.reading;
        let clinical_branch = tokio::spawn(async move { assess_clinical(&vitals) });
        let environment_branch = tokio::spawn(async move { assess_environment(&reading) });

        // Fixed barrier: both branches must complete before synthesis.
        let (clinical, environment) = tokio::join!(clinical_branch, environment_branch);
        let clinical = unwind_branch(clinical)?;
        let environment = unwind_branch(environment)?;

        tracing::info!(
            clinical_score = clinical.score,
            environmental_flags = environment.flags.len(),
            "scorers joined, synthesising guidance"
        );

        let composite = self
            .synthesiser
            .synthesise(&request.patient, &clinical, &environment, &request.reading)
            .await;

        tracing::info!(score = composite.score, level = %composite.risk_level, "assessment complete");
        Ok(composite)
    }
}

/// Unwraps a joined scorer branch.
///
/// A panic inside a branch is an invariant violation, not an input error,
/// so it is resurfaced to the caller as-is instead of being converted.
fn unwind_branch<T>(joined: Result<AssessmentResult<T>, JoinError>) -> AssessmentResult<T> {
    match joined {
        Ok(result) => result,
        Err(join_error) if join_error.is_panic() => {
            std::panic::resume_unwind(join_error.into_panic())
        }
        Err(join_error) => panic!("scorer branch cancelled: {join_error}"),
    }
}
