use crate::assembly::error::SolverError;
use crate::{element_name, ConstraintKind, Problem, VarType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const ZERO_TOL: f64 = 1e-12;

/// Linear form `sum(coef * var) + constant` over scalar variable names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearExpr {
    pub terms: BTreeMap<String, f64>,
    pub constant: f64,
}

impl LinearExpr {
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
            constant: 0.0,
        }
    }

    pub fn from_const(v: f64) -> Self {
        let mut e = Self::zero();
        e.constant = v;
        e
    }

    pub fn from_var(v: &str, c: f64) -> Self {
        let mut e = Self::zero();
        if c != 0.0 {
            e.terms.insert(v.to_string(), c);
        }
        e
    }

    /// `values · symbol`, expanded over the elements of the tensor variable.
    pub fn dot(values: &[f64], symbol: &str) -> Self {
        let mut e = Self::zero();
        for (slot, v) in values.iter().enumerate() {
            if v.abs() > ZERO_TOL {
                e.terms.insert(element_name(symbol, slot), *v);
            }
        }
        e
    }

    /// `sum(symbol)` over `len` elements.
    pub fn sum_of(symbol: &str, len: usize) -> Self {
        Self::dot(&vec![1.0; len], symbol)
    }

    pub fn add_inplace(&mut self, other: &LinearExpr) {
        self.constant += other.constant;
        for (k, v) in other.terms.iter() {
            *self.terms.entry(k.clone()).or_insert(0.0) += *v;
        }
        self.terms.retain(|_, c| c.abs() > ZERO_TOL);
    }

    pub fn sub_inplace(&mut self, other: &LinearExpr) {
        self.constant -= other.constant;
        for (k, v) in other.terms.iter() {
            *self.terms.entry(k.clone()).or_insert(0.0) -= *v;
        }
        self.terms.retain(|_, c| c.abs() > ZERO_TOL);
    }

    pub fn scale(&self, k: f64) -> Self {
        let mut e = Self::zero();
        e.constant = self.constant * k;
        for (n, c) in self.terms.iter() {
            if (c * k).abs() > ZERO_TOL {
                e.terms.insert(n.clone(), c * k);
            }
        }
        e
    }

    pub fn add(mut self, other: LinearExpr) -> LinearExpr {
        self.add_inplace(&other);
        self
    }

    pub fn sub(mut self, other: LinearExpr) -> LinearExpr {
        self.sub_inplace(&other);
        self
    }

    pub fn coefficient(&self, var: &str) -> f64 {
        self.terms.get(var).copied().unwrap_or(0.0)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Value at `point`; `None` if some variable has no value there.
    pub fn eval(&self, point: &BTreeMap<String, f64>) -> Option<f64> {
        let mut acc = self.constant;
        for (n, c) in self.terms.iter() {
            acc += c * point.get(n)?;
        }
        Some(acc)
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_lin(self, true))
    }
}

/// Render `problem` with `objective` as its only goal, in CPLEX LP format.
pub fn emit_lp(problem: &Problem, objective: &str) -> Result<String, SolverError> {
    let obj = problem
        .objective(objective)
        .ok_or_else(|| SolverError::MissingObjective(objective.to_string()))?;

    let mut out = String::new();
    out.push_str(&format!("\\ {}: {}\n", problem.name, obj.name));
    if obj.maximize {
        out.push_str("Maximize\n obj: ");
    } else {
        out.push_str("Minimize\n obj: ");
    }
    // constant offsets are not representable in the objective section
    out.push_str(&fmt_lin(&obj.func, false));
    out.push('\n');

    out.push_str("Subject To\n");
    for c in &problem.constraints {
        let mut expr = c.func.clone();
        let rhs = -expr.constant;
        expr.constant = 0.0;
        out.push_str(&format!(
            " {}: {} {} {}\n",
            c.symbol,
            fmt_lin(&expr, false),
            fmt_sense(c.kind),
            fmt_num(rhs)
        ));
    }

    out.push_str("Bounds\n");
    for v in &problem.variables {
        match (v.lower_bound, v.upper_bound) {
            (None, None) => out.push_str(&format!(" {} free\n", v.symbol)),
            (Some(lb), None) => out.push_str(&format!(" {} >= {}\n", v.symbol, fmt_num(lb))),
            (None, Some(ub)) => {
                out.push_str(&format!(" -inf <= {} <= {}\n", v.symbol, fmt_num(ub)))
            }
            (Some(lb), Some(ub)) => out.push_str(&format!(
                " {} <= {} <= {}\n",
                fmt_num(lb),
                v.symbol,
                fmt_num(ub)
            )),
        }
    }

    out.push_str("Binary\n");
    for x in problem
        .tensor_variables
        .iter()
        .filter(|x| x.var_type == VarType::Binary)
    {
        for name in x.elements() {
            out.push_str(&format!(" {}\n", name));
        }
    }
    out.push_str("End\n");
    Ok(out)
}

fn fmt_sense(k: ConstraintKind) -> &'static str {
    match k {
        ConstraintKind::Lte => "<=",
        ConstraintKind::Eq => "=",
    }
}

fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{}", v)
    }
}

fn fmt_lin(e: &LinearExpr, with_constant: bool) -> String {
    let mut parts: Vec<String> = vec![];
    for (n, c) in e.terms.iter() {
        if (c - 1.0).abs() < ZERO_TOL {
            parts.push(format!("+1 {}", n));
        } else if (c + 1.0).abs() < ZERO_TOL {
            parts.push(format!("-1 {}", n));
        } else {
            parts.push(format!("{:+} {}", c, n));
        }
    }
    if with_constant && e.constant.abs() > ZERO_TOL {
        parts.push(format!("{:+}", e.constant));
    }
    if parts.is_empty() {
        parts.push("+0".to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, Objective, TensorVariable, Variable};

    #[test]
    fn test_fmt_num_int() {
        assert_eq!(fmt_num(3.0), "3");
        assert_eq!(fmt_num(-2.0), "-2");
        assert_eq!(fmt_num(0.001), "0.001");
    }

    #[test]
    fn test_linear_sub() {
        let a = LinearExpr::from_var("x", 1.0);
        let b = LinearExpr::from_var("y", 2.0);
        let c = a.sub(b);
        assert_eq!(c.terms["x"], 1.0);
        assert_eq!(c.terms["y"], -2.0);
    }

    #[test]
    fn test_dot_skips_zero_entries() {
        let e = LinearExpr::dot(&[10.0, 0.0, 7.5], "X_1");
        assert_eq!(e.terms.len(), 2);
        assert_eq!(e.coefficient("X_1_0"), 10.0);
        assert_eq!(e.coefficient("X_1_1"), 0.0);
        assert_eq!(e.coefficient("X_1_2"), 7.5);
    }

    #[test]
    fn test_cancelling_terms_are_dropped() {
        let mut e = LinearExpr::dot(&[3.0, 4.0], "X_1");
        e.sub_inplace(&LinearExpr::dot(&[3.0, 1.0], "X_1"));
        assert_eq!(e.terms.len(), 1);
        assert_eq!(e.coefficient("X_1_1"), 3.0);
    }

    #[test]
    fn test_eval_requires_every_variable() {
        let e = LinearExpr::from_var("a", 2.0)
            .add(LinearExpr::from_var("b", -1.0))
            .add(LinearExpr::from_const(0.5));
        let mut point = BTreeMap::new();
        point.insert("a".to_string(), 3.0);
        assert_eq!(e.eval(&point), None);
        point.insert("b".to_string(), 1.0);
        assert_eq!(e.eval(&point), Some(5.5));
    }

    #[test]
    fn test_display() {
        let e = LinearExpr::from_var("P_1", 0.5).add(LinearExpr::from_var("V_end", 1.0));
        assert_eq!(e.to_string(), "+0.5 P_1 +1 V_end");
        assert_eq!(LinearExpr::zero().to_string(), "+0");
    }

    #[test]
    fn test_emit_lp_moves_constants_to_rhs() {
        let problem = Problem {
            name: "tiny".into(),
            description: String::new(),
            constants: vec![],
            tensor_variables: vec![TensorVariable::binary("X_1", 2)],
            variables: vec![Variable::real("V_end", Some(0.0)), Variable::real("C_1", None)],
            constraints: vec![
                Constraint {
                    name: "x_con_1".into(),
                    symbol: "x_con_1".into(),
                    kind: ConstraintKind::Eq,
                    func: LinearExpr::sum_of("X_1", 2).sub(LinearExpr::from_const(1.0)),
                },
                Constraint {
                    name: "cmin_con".into(),
                    symbol: "cmin_con".into(),
                    kind: ConstraintKind::Lte,
                    func: LinearExpr::from_var("C_1", -1.0).sub(LinearExpr::from_const(0.001)),
                },
            ],
            objectives: vec![Objective {
                name: "Net present value".into(),
                symbol: "f_1".into(),
                description: None,
                func: LinearExpr::from_var("V_end", 1.0),
                maximize: true,
                ideal: None,
                nadir: None,
            }],
        };

        let lp = emit_lp(&problem, "f_1").unwrap();
        assert!(lp.contains("Maximize\n obj: +1 V_end\n"));
        assert!(lp.contains(" x_con_1: +1 X_1_0 +1 X_1_1 = 1\n"));
        assert!(lp.contains(" cmin_con: -1 C_1 <= 0.001\n"));
        assert!(lp.contains(" V_end >= 0\n"));
        assert!(lp.contains(" C_1 free\n"));
        assert!(lp.contains("Binary\n X_1_0\n X_1_1\nEnd\n"));

        assert!(matches!(
            emit_lp(&problem, "f_7"),
            Err(SolverError::MissingObjective(s)) if s == "f_7"
        ));
    }
}
