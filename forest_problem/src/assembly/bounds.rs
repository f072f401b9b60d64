//! Payoff-table estimation of objective bounds.
//!
//! The numerical solver is external. This module only drives it: each
//! objective is optimized alone and the full objective vector at that
//! optimum becomes one row of the table.

use crate::assembly::error::SolverError;
use crate::Problem;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Single-objective optimizer over an assembled problem.
pub trait ObjectiveSolver {
    /// Optimize `objective` alone subject to every constraint of `problem` and
    /// return the value of every objective at the optimum found.
    fn optimize(&self, problem: &Problem, objective: &str) -> Result<BTreeMap<String, f64>, SolverError>;

    fn name(&self) -> &str {
        "solver"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    pub objectives: Vec<String>,
    pub maximize: Vec<bool>,
    /// `rows[i][k]`: value of objective `k` when objective `i` is optimized.
    pub rows: Vec<Vec<f64>>,
}

impl PayoffTable {
    pub fn ideal(&self) -> BTreeMap<String, f64> {
        self.objectives
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), self.rows[i][i]))
            .collect()
    }

    /// Worst value each objective takes over the rows.
    pub fn nadir(&self) -> BTreeMap<String, f64> {
        self.objectives
            .iter()
            .enumerate()
            .map(|(k, s)| {
                let column = self.rows.iter().map(|row| row[k]);
                let worst = if self.maximize[k] {
                    column.fold(f64::INFINITY, f64::min)
                } else {
                    column.fold(f64::NEG_INFINITY, f64::max)
                };
                (s.clone(), worst)
            })
            .collect()
    }

    pub fn bounds(&self) -> ObjectiveBounds {
        ObjectiveBounds {
            ideal: self.ideal(),
            nadir: self.nadir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveBounds {
    pub ideal: BTreeMap<String, f64>,
    pub nadir: BTreeMap<String, f64>,
}

/// Optimize every objective of `problem` in turn. The first failure aborts.
pub fn payoff_table(problem: &Problem, solver: &dyn ObjectiveSolver) -> Result<PayoffTable, SolverError> {
    let objectives = problem.objective_symbols();
    let mut rows = Vec::with_capacity(objectives.len());

    for symbol in &objectives {
        debug!(solver = solver.name(), objective = %symbol, "optimizing single objective");
        let values = solver.optimize(problem, symbol)?;
        let mut row = Vec::with_capacity(objectives.len());
        for k in &objectives {
            let v = *values
                .get(k)
                .ok_or_else(|| SolverError::MissingObjective(k.clone()))?;
            if !v.is_finite() {
                return Err(SolverError::Numerical(format!(
                    "`{}` evaluated to {} while optimizing `{}`",
                    k, v, symbol
                )));
            }
            row.push(v);
        }
        rows.push(row);
    }

    Ok(PayoffTable {
        maximize: problem.objectives.iter().map(|o| o.maximize).collect(),
        objectives,
        rows,
    })
}

/// Ideal and nadir of every objective, estimated from the payoff table.
pub fn payoff_table_method(problem: &Problem, solver: &dyn ObjectiveSolver) -> Result<ObjectiveBounds, SolverError> {
    let bounds = payoff_table(problem, solver)?.bounds();
    info!(ideal = ?bounds.ideal, nadir = ?bounds.nadir, "objective bounds estimated");
    Ok(bounds)
}
