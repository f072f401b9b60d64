//! Error types for problem assembly.
//!
//! Input errors abort assembly before any solver call. Solver errors only
//! abort bounds estimation; they mean the model is structurally sound but
//! could not be optimized.

use std::path::PathBuf;
use thiserror::Error;

/// Bad or inconsistent input data. Always fatal, never retried.
#[derive(Debug, Error)]
pub enum InputError {
    /// A required table is not on disk
    #[error("required input file `{}` does not exist", .0.display())]
    MissingFile(PathBuf),
    /// Reading a file failed after it was found
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The CSV reader rejected a file
    #[error("malformed CSV in `{file}`: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    /// carbon.json, dec_vars.json or a configuration document did not parse
    #[error("malformed JSON in `{file}`: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    /// A column looked up by name is absent from the header
    #[error("`{file}` is missing required column `{column}`")]
    MissingColumn { file: String, column: String },
    /// A cell that is present but not a finite number
    #[error("`{file}` row {row}: cannot parse `{value}` in column `{column}`")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
    /// Every schedule of a stand was filtered away
    #[error("stand `{0}` has no schedules left after filtering")]
    EmptyStand(String),
    /// A stand vector does not have one entry per schedule slot
    #[error("stand `{stand}`: vector `{vector}` has length {actual}, expected {expected}")]
    ShapeMismatch {
        stand: String,
        vector: String,
        expected: usize,
        actual: usize,
    },
    /// The filter join left nothing to plan
    #[error("no stands remain after joining with the filter table")]
    NoStands,
    /// A `ProblemConfig` value out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A plan handed to `Problem::evaluate` does not fit the problem
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Failure inside the external single-objective solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No plan satisfies the constraints
    #[error("problem is infeasible when optimizing `{0}`")]
    Infeasible(String),
    /// The objective can grow without limit
    #[error("objective `{0}` is unbounded")]
    Unbounded(String),
    /// The solver could not be started
    #[error("solver not available: {0}")]
    Unavailable(String),
    /// The solver or its result broke down numerically
    #[error("numerical failure: {0}")]
    Numerical(String),
    /// The solver result lacks one of the objectives
    #[error("no value reported for objective `{0}`")]
    MissingObjective(String),
}

/// Any failure of `assemble` or `forest_problem`.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// Bad input data, detected before any solver call
    #[error(transparent)]
    Input(#[from] InputError),
    /// Failure while estimating objective bounds
    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl ProblemError {
    pub fn is_input(&self) -> bool {
        matches!(self, ProblemError::Input(_))
    }

    pub fn is_solver(&self) -> bool {
        matches!(self, ProblemError::Solver(_))
    }
}
