use crate::assembly::generator::{carbon_aggregator, harvest_aggregator, Generator, NPV_AGGREGATOR, PERIODS};
use crate::assembly::linear::LinearExpr;
use crate::assembly::tensors::Metric;
use crate::ConstraintKind;

/// Carbon measurement closing each period.
const CARBON_PERIOD_ENDS: [Metric; 3] = [Metric::Carbon5, Metric::Carbon10, Metric::Carbon20];

impl Generator<'_> {
    pub(crate) fn emit_constraints(&mut self) {
        self.emit_selection();
        self.emit_npv_definition();
        self.emit_harvest_definitions();
        self.emit_carbon_definitions();
        self.emit_carbon_floor();
    }

    /// `sum(X_j) - 1 = 0` for every stand.
    fn emit_selection(&mut self) {
        for s in self.stands {
            debug_assert!(!s.is_empty(), "stand {} reached emission without schedules", s.unit);
            let func = LinearExpr::sum_of(&s.x_symbol(), s.len()).sub(LinearExpr::from_const(1.0));
            self.push_constraint(format!("x_con_{}", s.index), ConstraintKind::Eq, func);
        }
    }

    /// `agg - sum_j(metric_j · X_j) = 0`
    fn emit_definition(&mut self, symbol: String, aggregator: &str, metric: Metric) {
        let mut func = LinearExpr::from_var(aggregator, 1.0);
        for s in self.stands {
            func.sub_inplace(&LinearExpr::dot(s.vector(metric), &s.x_symbol()));
        }
        self.push_constraint(symbol, ConstraintKind::Eq, func);
    }

    fn emit_npv_definition(&mut self) {
        self.emit_definition("v_con".to_string(), NPV_AGGREGATOR, Metric::Npv);
    }

    fn emit_harvest_definitions(&mut self) {
        for (p, metric) in PERIODS.iter().zip(Metric::HARVEST) {
            self.emit_definition(format!("p{}_con", p), &harvest_aggregator(*p), metric);
        }
    }

    /// `C_p - sum_j(scale_p * (C{t}_j · X_j - reference_j)) = 0`
    fn emit_carbon_definitions(&mut self) {
        for (k, p) in PERIODS.iter().enumerate() {
            let metric = CARBON_PERIOD_ENDS[k];
            let scale = self.config.carbon_period_scales[k];
            let mut func = LinearExpr::from_var(&carbon_aggregator(*p), 1.0);
            for s in self.stands {
                let x = s.x_symbol();
                let carbon = s.vector(metric);
                let diff = LinearExpr::dot(carbon, &x).sub(s.baseline.reference(carbon, &x));
                func.sub_inplace(&diff.scale(scale));
            }
            self.push_constraint(format!("c{}_con", p), ConstraintKind::Eq, func);
        }
    }

    /// `-(C_1 + C_2 + C_3 + tolerance) <= 0`: the plan may not store less carbon than the reference.
    fn emit_carbon_floor(&mut self) {
        let mut total = LinearExpr::from_const(self.config.carbon_tolerance);
        for p in PERIODS {
            total.add_inplace(&LinearExpr::from_var(&carbon_aggregator(p), 1.0));
        }
        self.push_constraint("cmin_con".to_string(), ConstraintKind::Lte, total.scale(-1.0));
    }
}
