use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matru_core::{TemplateNarrative, WorkflowExecutor};
use matru_types::{AssessmentRequest, ClinicalVitals, EnvironmentalReading, PatientName};

#[derive(Parser)]
#[command(name = "matru")]
#[command(about = "MatruKavach maternal risk-assessment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a risk assessment from a JSON request file
    Assess {
        /// Path to an assessment request (JSON)
        request: PathBuf,
    },
    /// Sample environmental conditions for a location
    SampleEnvironment {
        /// Latitude in decimal degrees
        latitude: f64,
        /// Longitude in decimal degrees
        longitude: f64,
    },
    /// Run the built-in demo scenario
    Demo,
}

/// Entry point for the MatruKavach CLI.
///
/// Runs the risk-assessment workflow with the deterministic offline
/// narrative backend; hosted backends plug in through the same
/// `NarrativeGenerator` trait in the surrounding system.
///
/// # Environment Variables
/// - `RUST_LOG`: tracing filter (the `matru` target defaults to `info`)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("matru=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess { request } => {
            tracing::info!(path = %request.display(), "loading assessment request");
            let raw = std::fs::read_to_string(&request)?;
            let request: AssessmentRequest = serde_json::from_str(&raw)?;
            run_and_print(&request).await?;
        }
        Commands::SampleEnvironment {
            latitude,
            longitude,
        } => {
            let sample = matru_enviro::sample_environment(latitude, longitude)?;
            println!("{}", serde_json::to_string_pretty(&sample)?);
        }
        Commands::Demo => {
            run_and_print(&demo_request()).await?;
        }
    }

    Ok(())
}

async fn run_and_print(request: &AssessmentRequest) -> anyhow::Result<()> {
    let executor = WorkflowExecutor::new(TemplateNarrative::new());
    let composite = executor.run(request).await?;
    println!("{}", serde_json::to_string_pretty(&composite)?);
    Ok(())
}

/// A stable, healthy-pregnancy scenario for quick end-to-end checks.
fn demo_request() -> AssessmentRequest {
    AssessmentRequest {
        patient: PatientName::new("Demo Patient").expect("demo name is valid"),
        vitals: ClinicalVitals {
            systolic_bp: 120,
            diastolic_bp: 70,
            weight_kg: 77.0,
            hemoglobin: 11.0,
            glucose: 100,
            gestational_age_weeks: 30,
            symptom_note: None,
        },
        reading: EnvironmentalReading {
            temperature_c: 26.3,
            heat_index_c: 30.3,
            air_quality_index: 79.0,
            toxin_index: 4.0,
        },
    }
}
