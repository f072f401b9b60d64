//! Assembly parameters.
//!
//! Every invocation is parameterized by one `ProblemConfig`; nothing is read
//! from the process environment.

use crate::assembly::error::InputError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PROBLEM_NAME: &str = "Forest problem";
pub const DEFAULT_DISCOUNT_PERCENT: u32 = 3;
/// Scaling of the carbon differential for the periods ending at years 5, 10 and 20.
pub const DEFAULT_CARBON_PERIOD_SCALES: [f64; 3] = [5.0, 10.0, 5.0];
pub const DEFAULT_CARBON_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProblemConfig {
    /// Directory holding alternatives.csv, alternatives_key.csv, filter.csv,
    /// carbon.json and optionally dec_vars.json.
    pub data_dir: PathBuf,
    pub problem_name: String,
    /// Restrict the tables to one holding; `None` keeps every holding.
    pub holding: Option<i64>,
    /// Discount rate in whole percent. Selects the `npv_{p}_percent` column.
    pub discount_percent: u32,
    /// Carbon compensation weight blended into the harvest value objective.
    pub compensation: f64,
    pub carbon_period_scales: [f64; 3],
    pub carbon_tolerance: f64,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            problem_name: DEFAULT_PROBLEM_NAME.to_string(),
            holding: None,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
            compensation: 0.0,
            carbon_period_scales: DEFAULT_CARBON_PERIOD_SCALES,
            carbon_tolerance: DEFAULT_CARBON_TOLERANCE,
        }
    }
}

impl ProblemConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        serde_json::from_str(s).map_err(|source| InputError::Json {
            file: "configuration".to_string(),
            source,
        })
    }

    /// Discount rate as a fraction (3 -> 0.03).
    pub fn discount_rate(&self) -> f64 {
        f64::from(self.discount_percent) / 100.0
    }

    pub fn npv_column(&self) -> String {
        format!("npv_{}_percent", self.discount_percent)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !(1..=99).contains(&self.discount_percent) {
            return Err(InputError::InvalidConfig(format!(
                "discount_percent must be within 1..=99, got {}",
                self.discount_percent
            )));
        }
        if !self.compensation.is_finite() || self.compensation < 0.0 {
            return Err(InputError::InvalidConfig(format!(
                "compensation must be a non-negative number, got {}",
                self.compensation
            )));
        }
        if self.carbon_period_scales.iter().any(|s| !s.is_finite()) {
            return Err(InputError::InvalidConfig(
                "carbon_period_scales must be finite".to_string(),
            ));
        }
        if !self.carbon_tolerance.is_finite() || self.carbon_tolerance < 0.0 {
            return Err(InputError::InvalidConfig(format!(
                "carbon_tolerance must be a non-negative number, got {}",
                self.carbon_tolerance
            )));
        }
        Ok(())
    }
}
