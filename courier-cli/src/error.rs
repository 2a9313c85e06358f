//! Error types emitted by the Courier CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_data::{ManifestError, StreetMapError};
use courier_optimizer::AnnealingConfigError;
use courier_planner::PlanError;
use thiserror::Error;

/// Errors emitted by the Courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The street map could not be loaded.
    #[error("failed to load street map: {0}")]
    LoadStreetMap(#[from] StreetMapError),
    /// The delivery manifest could not be loaded.
    #[error("failed to load deliveries: {0}")]
    LoadManifest(#[from] ManifestError),
    /// The annealing schedule built from the configuration is invalid.
    #[error("invalid annealing schedule: {0}")]
    InvalidSchedule(#[from] AnnealingConfigError),
    /// Planning the run failed.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// Serialising the plan failed.
    #[error("failed to serialise delivery plan: {0}")]
    SerialisePlan(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}
