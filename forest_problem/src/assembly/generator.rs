use crate::assembly::linear::LinearExpr;
use crate::assembly::tensors::StandTensors;
use crate::config::ProblemConfig;
use crate::{Constraint, ConstraintKind, Objective, Problem, TensorConstant, TensorVariable, Variable};

pub(crate) const NPV_AGGREGATOR: &str = "V_end";
pub(crate) const PERIODS: [usize; 3] = [1, 2, 3];

pub(crate) fn harvest_aggregator(period: usize) -> String {
    format!("P_{}", period)
}

pub(crate) fn carbon_aggregator(period: usize) -> String {
    format!("C_{}", period)
}

/// Accumulates the pieces of a `Problem` while the stands are lowered.
pub(crate) struct Generator<'a> {
    pub(crate) config: &'a ProblemConfig,
    pub(crate) stands: &'a [StandTensors],
    pub(crate) constants: Vec<TensorConstant>,
    pub(crate) tensor_variables: Vec<TensorVariable>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objectives: Vec<Objective>,
}

impl<'a> Generator<'a> {
    pub(crate) fn new(config: &'a ProblemConfig, stands: &'a [StandTensors]) -> Self {
        Self {
            config,
            stands,
            constants: vec![],
            tensor_variables: vec![],
            variables: vec![],
            constraints: vec![],
            objectives: vec![],
        }
    }

    pub(crate) fn declare_stands(&mut self) {
        for s in self.stands {
            self.constants.extend(s.constants());
            self.tensor_variables.push(s.decision_variable());
        }
    }

    pub(crate) fn declare_aggregators(&mut self) {
        for p in PERIODS {
            self.variables.push(Variable::real(harvest_aggregator(p), Some(0.0)));
        }
        self.variables.push(Variable::real(NPV_AGGREGATOR, Some(0.0)));
        // carbon differentials may be negative
        for p in PERIODS {
            self.variables.push(Variable::real(carbon_aggregator(p), None));
        }
    }

    pub(crate) fn push_constraint(&mut self, symbol: String, kind: ConstraintKind, func: LinearExpr) {
        self.constraints.push(Constraint {
            name: symbol.clone(),
            symbol,
            kind,
            func,
        });
    }

    pub(crate) fn into_problem(self) -> Problem {
        Problem {
            name: self.config.problem_name.clone(),
            description: format!(
                "Forest management planning problem over {} stands.",
                self.stands.len()
            ),
            constants: self.constants,
            tensor_variables: self.tensor_variables,
            variables: self.variables,
            constraints: self.constraints,
            objectives: self.objectives,
        }
    }
}
