//! Scoring a concrete plan against an assembled problem.
//!
//! Aggregators are not chosen by the caller: every equality that has exactly
//! one unresolved variable is solved for it, repeatedly, until nothing
//! changes. For an assembled forest problem that resolves `V_end`, `P_p` and
//! `C_p` from the decision vectors.

use crate::assembly::error::InputError;
use crate::{ConstraintKind, Problem};
use std::collections::BTreeMap;

/// Absolute tolerance on constraint residuals.
pub const FEASIBILITY_TOL: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub point: BTreeMap<String, f64>,
    pub objectives: BTreeMap<String, f64>,
    /// Constraint symbol -> value of its `func` at the point.
    pub residuals: BTreeMap<String, f64>,
    pub feasible: bool,
}

impl Evaluation {
    pub fn objective(&self, symbol: &str) -> Option<f64> {
        self.objectives.get(symbol).copied()
    }

    /// Symbols of the constraints violated beyond tolerance.
    pub fn violations(&self, problem: &Problem) -> Vec<String> {
        problem
            .constraints
            .iter()
            .filter(|c| {
                self.residuals
                    .get(&c.symbol)
                    .map_or(true, |r| !satisfied(c.kind, *r))
            })
            .map(|c| c.symbol.clone())
            .collect()
    }
}

fn satisfied(kind: ConstraintKind, residual: f64) -> bool {
    match kind {
        ConstraintKind::Eq => residual.abs() <= FEASIBILITY_TOL,
        ConstraintKind::Lte => residual <= FEASIBILITY_TOL,
    }
}

impl Problem {
    /// One-hot point choosing `selection[X_j]` as the slot of every stand.
    pub fn point_from_selection(
        &self,
        selection: &BTreeMap<String, usize>,
    ) -> Result<BTreeMap<String, f64>, InputError> {
        for symbol in selection.keys() {
            if self.tensor_variable(symbol).is_none() {
                return Err(InputError::InvalidSelection(format!(
                    "unknown decision variable `{}`",
                    symbol
                )));
            }
        }
        let mut point = BTreeMap::new();
        for x in &self.tensor_variables {
            let slot = *selection.get(&x.symbol).ok_or_else(|| {
                InputError::InvalidSelection(format!("no schedule chosen for `{}`", x.symbol))
            })?;
            if slot >= x.len() {
                return Err(InputError::InvalidSelection(format!(
                    "`{}` has {} slots, slot {} chosen",
                    x.symbol,
                    x.len(),
                    slot
                )));
            }
            for (i, name) in x.elements().enumerate() {
                point.insert(name, if i == slot { 1.0 } else { 0.0 });
            }
        }
        Ok(point)
    }

    /// Fill in every variable determined by an equality with a single unknown.
    pub fn complete_point(&self, point: &mut BTreeMap<String, f64>) {
        loop {
            let mut progressed = false;
            for c in self.constraints.iter().filter(|c| c.kind == ConstraintKind::Eq) {
                let unknown: Vec<&str> = c.func.variables().filter(|v| !point.contains_key(*v)).collect();
                let &[var] = unknown.as_slice() else {
                    continue;
                };
                let coef = c.func.coefficient(var);
                let mut rest = c.func.clone();
                rest.terms.remove(var);
                if let Some(v) = rest.eval(point) {
                    point.insert(var.to_string(), -v / coef);
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
    }

    pub fn evaluate_point(&self, mut point: BTreeMap<String, f64>) -> Result<Evaluation, InputError> {
        self.complete_point(&mut point);

        let unresolved = |what: &str| {
            InputError::InvalidSelection(format!("`{}` depends on an unresolved variable", what))
        };
        let mut objectives = BTreeMap::new();
        for o in &self.objectives {
            let v = o.func.eval(&point).ok_or_else(|| unresolved(&o.symbol))?;
            objectives.insert(o.symbol.clone(), v);
        }
        let mut residuals = BTreeMap::new();
        let mut feasible = true;
        for c in &self.constraints {
            let r = c.func.eval(&point).ok_or_else(|| unresolved(&c.symbol))?;
            feasible &= satisfied(c.kind, r);
            residuals.insert(c.symbol.clone(), r);
        }

        Ok(Evaluation {
            point,
            objectives,
            residuals,
            feasible,
        })
    }

    /// Score the plan choosing slot `selection[X_j]` in every stand.
    pub fn evaluate(&self, selection: &BTreeMap<String, usize>) -> Result<Evaluation, InputError> {
        let point = self.point_from_selection(selection)?;
        self.evaluate_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, LinearExpr, Objective, TensorVariable, Variable};

    fn problem() -> Problem {
        let v_con = LinearExpr::from_var("V_end", 1.0).sub(LinearExpr::dot(&[10.0, 20.0], "X_1"));
        let w_con = LinearExpr::from_var("W", 2.0).sub(LinearExpr::from_var("V_end", 1.0));
        Problem {
            name: "p".into(),
            description: String::new(),
            constants: vec![],
            tensor_variables: vec![TensorVariable::binary("X_1", 2)],
            variables: vec![Variable::real("V_end", Some(0.0)), Variable::real("W", None)],
            constraints: vec![
                Constraint {
                    name: "x_con_1".into(),
                    symbol: "x_con_1".into(),
                    kind: ConstraintKind::Eq,
                    func: LinearExpr::sum_of("X_1", 2).sub(LinearExpr::from_const(1.0)),
                },
                // listed before the constraint that resolves V_end
                Constraint {
                    name: "w_con".into(),
                    symbol: "w_con".into(),
                    kind: ConstraintKind::Eq,
                    func: w_con,
                },
                Constraint {
                    name: "v_con".into(),
                    symbol: "v_con".into(),
                    kind: ConstraintKind::Eq,
                    func: v_con,
                },
                Constraint {
                    name: "cap".into(),
                    symbol: "cap".into(),
                    kind: ConstraintKind::Lte,
                    func: LinearExpr::from_var("V_end", 1.0).sub(LinearExpr::from_const(15.0)),
                },
            ],
            objectives: vec![Objective {
                name: "half".into(),
                symbol: "f_1".into(),
                description: None,
                func: LinearExpr::from_var("W", 1.0),
                maximize: true,
                ideal: None,
                nadir: None,
            }],
        }
    }

    fn select(slot: usize) -> BTreeMap<String, usize> {
        [("X_1".to_string(), slot)].into_iter().collect()
    }

    #[test]
    fn test_chained_aggregators_resolve() {
        let p = problem();
        let e = p.evaluate(&select(0)).unwrap();
        assert_eq!(e.point["V_end"], 10.0);
        assert_eq!(e.objective("f_1"), Some(5.0));
        assert!(e.feasible);
    }

    #[test]
    fn test_violations_are_reported() {
        let p = problem();
        let e = p.evaluate(&select(1)).unwrap();
        assert!(!e.feasible);
        assert_eq!(e.violations(&p), vec!["cap".to_string()]);
        assert_eq!(e.residuals["cap"], 5.0);
    }

    #[test]
    fn test_bad_selections() {
        let p = problem();
        assert!(matches!(p.evaluate(&select(2)), Err(InputError::InvalidSelection(_))));
        assert!(matches!(p.evaluate(&BTreeMap::new()), Err(InputError::InvalidSelection(_))));

        let mut sel = select(0);
        sel.insert("X_9".into(), 0);
        assert!(matches!(p.evaluate(&sel), Err(InputError::InvalidSelection(_))));
    }
}
