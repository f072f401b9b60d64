use crate::assembly::generator::{carbon_aggregator, harvest_aggregator, Generator, NPV_AGGREGATOR, PERIODS};
use crate::assembly::linear::LinearExpr;
use crate::assembly::tensors::Metric;
use crate::Objective;

/// Years from the start of the plan to the middle of each harvest period.
pub const DISCOUNT_LAGS: [i32; 3] = [2, 7, 17];

pub const NPV_OBJECTIVE: &str = "f_1";
pub const WOOD_OBJECTIVE: &str = "f_2";
pub const HARVEST_OBJECTIVE: &str = "f_3";
pub const CARBON_OBJECTIVE: &str = "f_4";

/// Compound discount weights `(1 - r)^lag` for a rate `r` given as a fraction.
pub fn discount_weights(rate: f64) -> [f64; 3] {
    DISCOUNT_LAGS.map(|lag| (1.0 - rate).powi(lag))
}

impl Generator<'_> {
    pub(crate) fn emit_objectives(&mut self, initial_wood_volume: f64) {
        let npv = LinearExpr::from_var(NPV_AGGREGATOR, 1.0);

        // no aggregator is tied to wood stock, so it is summed from the stand constants
        let mut wood = LinearExpr::zero();
        for s in self.stands {
            wood.add_inplace(&LinearExpr::dot(s.vector(Metric::WoodStock), &s.x_symbol()));
        }

        let weights = discount_weights(self.config.discount_rate());
        let compensation = self.config.compensation;
        let mut harvest = LinearExpr::zero();
        for (p, d) in PERIODS.iter().zip(weights) {
            let mut period = LinearExpr::from_var(&harvest_aggregator(*p), 1.0);
            if compensation != 0.0 {
                period.add_inplace(&LinearExpr::from_var(&carbon_aggregator(*p), compensation));
            }
            harvest.add_inplace(&period.scale(d));
        }

        let mut carbon = LinearExpr::zero();
        for p in PERIODS {
            carbon.add_inplace(&LinearExpr::from_var(&carbon_aggregator(p), 1.0));
        }

        self.objectives = vec![
            objective("Net present value", NPV_OBJECTIVE, npv, None),
            objective(
                "Wood stock volume",
                WOOD_OBJECTIVE,
                wood,
                Some(format!("initially {} m^3", initial_wood_volume.round())),
            ),
            objective("Harvest value", HARVEST_OBJECTIVE, harvest, None),
            objective("Carbon storage", CARBON_OBJECTIVE, carbon, None),
        ];
    }
}

fn objective(name: &str, symbol: &str, func: LinearExpr, description: Option<String>) -> Objective {
    Objective {
        name: name.to_string(),
        symbol: symbol.to_string(),
        description,
        func,
        maximize: true,
        ideal: None,
        nadir: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::tables::{AlternativeRow, StandId, StandTable};
    use crate::assembly::tensors::build_stand;
    use crate::config::ProblemConfig;

    fn objectives(config: &ProblemConfig) -> Vec<Objective> {
        let unit = StandId::new("1");
        let mut t = StandTable::new(unit.clone());
        for (i, w) in [5.0, 8.0].iter().enumerate() {
            t.schedules.insert(
                i,
                AlternativeRow {
                    holding: 1,
                    unit: unit.clone(),
                    schedule: i,
                    npv: Some(1.0),
                    stock_0: Some(4.0),
                    stock_20: Some(*w),
                    harvest_value: [None; 3],
                },
            );
            t.treatments.insert(i, format!("t{}", i));
        }
        let stands = vec![build_stand(1, &t, None, None).unwrap()];
        let mut gen = Generator::new(config, &stands);
        gen.emit_objectives(4.0);
        gen.objectives
    }

    #[test]
    fn test_discount_weights_at_three_percent() {
        let [d1, d2, d3] = discount_weights(0.03);
        assert!((d1 - 0.9409).abs() < 1e-4);
        assert!((d2 - 0.80804).abs() < 1e-4);
        assert!((d3 - 0.59539).abs() < 1e-4);
    }

    #[test]
    fn test_objectives_are_maximized_and_plain() {
        let objs = objectives(&ProblemConfig::default());
        assert_eq!(objs.len(), 4);
        assert!(objs.iter().all(|o| o.maximize && o.ideal.is_none()));

        // f_1 is the bare aggregator, no `+ 0`
        assert_eq!(objs[0].func, LinearExpr::from_var("V_end", 1.0));
        assert_eq!(objs[1].func.coefficient("X_1_0"), 5.0);
        assert_eq!(objs[1].func.coefficient("X_1_1"), 8.0);
        assert_eq!(objs[1].description.as_deref(), Some("initially 4 m^3"));
        assert_eq!(objs[3].func.terms.len(), 3);
    }

    #[test]
    fn test_harvest_value_without_compensation() {
        let objs = objectives(&ProblemConfig::default());
        let f3 = &objs[2].func;
        let d = discount_weights(0.03);
        assert_eq!(f3.coefficient("P_1"), d[0]);
        assert_eq!(f3.coefficient("P_3"), d[2]);
        assert_eq!(f3.coefficient("C_1"), 0.0);
    }

    #[test]
    fn test_harvest_value_with_compensation() {
        let mut config = ProblemConfig::default();
        config.compensation = 2.0;
        config.discount_percent = 5;
        let objs = objectives(&config);
        let f3 = &objs[2].func;
        let d = discount_weights(0.05);
        assert!((f3.coefficient("P_2") - d[1]).abs() < 1e-12);
        assert!((f3.coefficient("C_2") - 2.0 * d[1]).abs() < 1e-12);
        assert!((f3.coefficient("C_3") - 2.0 * d[2]).abs() < 1e-12);
    }
}
