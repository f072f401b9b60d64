use serde::{Deserialize, Serialize};

pub mod assembly;
pub mod config;
pub mod logging;

pub use assembly::bounds::{payoff_table, payoff_table_method, ObjectiveBounds, ObjectiveSolver, PayoffTable};
pub use assembly::error::{InputError, ProblemError, SolverError};
pub use assembly::eval::Evaluation;
pub use assembly::finalize::{with_bounds, ScheduleMap, StandSchedules};
pub use assembly::linear::{emit_lp, LinearExpr};
pub use assembly::{assemble, assemble_tables, forest_problem, AssembledProblem};
pub use config::ProblemConfig;

/// Name of element `slot` of the tensor variable `symbol` (`X_3`, 1 -> `X_3_1`).
pub fn element_name(symbol: &str, slot: usize) -> String {
    format!("{}_{}", symbol, slot)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub name: String,
    pub description: String,
    pub constants: Vec<TensorConstant>,
    pub tensor_variables: Vec<TensorVariable>,
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub objectives: Vec<Objective>,
}

impl Problem {
    pub fn objective(&self, symbol: &str) -> Option<&Objective> {
        self.objectives.iter().find(|o| o.symbol == symbol)
    }

    pub fn constraint(&self, symbol: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.symbol == symbol)
    }

    pub fn constant(&self, symbol: &str) -> Option<&TensorConstant> {
        self.constants.iter().find(|c| c.symbol == symbol)
    }

    pub fn tensor_variable(&self, symbol: &str) -> Option<&TensorVariable> {
        self.tensor_variables.iter().find(|v| v.symbol == symbol)
    }

    pub fn variable(&self, symbol: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.symbol == symbol)
    }

    pub fn objective_symbols(&self) -> Vec<String> {
        self.objectives.iter().map(|o| o.symbol.clone()).collect()
    }

    pub fn log_summary(&self) {
        tracing::info!(
            name = %self.name,
            constants = self.constants.len(),
            tensor_variables = self.tensor_variables.len(),
            variables = self.variables.len(),
            constraints = self.constraints.len(),
            objectives = self.objectives.len(),
            "problem assembled"
        );
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Constant vector, one entry per schedule slot of a stand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TensorConstant {
    pub name: String,
    pub symbol: String,
    pub values: Vec<f64>,
}

impl TensorConstant {
    pub fn new(symbol: impl Into<String>, values: Vec<f64>) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            values,
        }
    }

    pub fn shape(&self) -> [usize; 1] {
        [self.values.len()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VarType {
    Binary,
    Real,
}

/// Vector-valued decision variable. Element `i` is addressed as `element_name(symbol, i)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TensorVariable {
    pub name: String,
    pub symbol: String,
    pub var_type: VarType,
    pub lower_bounds: Vec<f64>,
    pub upper_bounds: Vec<f64>,
    pub initial_values: Vec<f64>,
}

impl TensorVariable {
    /// Binary vector of `len` entries bounded to [0, 1], initially all zero.
    pub fn binary(symbol: impl Into<String>, len: usize) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            var_type: VarType::Binary,
            lower_bounds: vec![0.0; len],
            upper_bounds: vec![1.0; len],
            initial_values: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.lower_bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower_bounds.is_empty()
    }

    pub fn shape(&self) -> [usize; 1] {
        [self.len()]
    }

    pub fn element(&self, slot: usize) -> String {
        element_name(&self.symbol, slot)
    }

    pub fn elements(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.len()).map(|i| self.element(i))
    }
}

/// Scalar decision variable (the aggregators).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variable {
    pub name: String,
    pub symbol: String,
    pub var_type: VarType,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl Variable {
    pub fn real(symbol: impl Into<String>, lower_bound: Option<f64>) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            var_type: VarType::Real,
            lower_bound,
            upper_bound: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConstraintKind {
    /// `func == 0`
    Eq,
    /// `func <= 0`
    Lte,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub symbol: String,
    pub kind: ConstraintKind,
    pub func: LinearExpr,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Objective {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: Option<String>,
    pub func: LinearExpr,
    pub maximize: bool,
    #[serde(default)]
    pub ideal: Option<f64>,
    #[serde(default)]
    pub nadir: Option<f64>,
}
