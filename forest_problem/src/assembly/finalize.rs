use crate::assembly::error::SolverError;
use crate::assembly::tables::StandId;
use crate::assembly::tensors::StandTensors;
use crate::Problem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What slot `i` of a stand's decision vector means.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandSchedules {
    pub unit: StandId,
    /// Slot -> treatment label.
    pub treatments: BTreeMap<usize, String>,
    /// Slot -> schedule number.
    pub schedules: Vec<usize>,
}

/// Keyed by decision-variable symbol (`X_j`).
pub type ScheduleMap = BTreeMap<String, StandSchedules>;

pub fn build_schedule_map(stands: &[StandTensors]) -> ScheduleMap {
    stands
        .iter()
        .map(|s| {
            (
                s.x_symbol(),
                StandSchedules {
                    unit: s.unit.clone(),
                    treatments: s.treatments.clone(),
                    schedules: s.schedule_ids.clone(),
                },
            )
        })
        .collect()
}

/// Copy of `problem` with every objective annotated with its bounds, rounded
/// outward to whole units.
pub fn with_bounds(
    problem: &Problem,
    ideals: &BTreeMap<String, f64>,
    nadirs: &BTreeMap<String, f64>,
) -> Result<Problem, SolverError> {
    let mut out = problem.clone();
    for o in &mut out.objectives {
        let lookup = |m: &BTreeMap<String, f64>| {
            m.get(&o.symbol)
                .copied()
                .ok_or_else(|| SolverError::MissingObjective(o.symbol.clone()))
        };
        let (ideal, nadir) = (lookup(ideals)?, lookup(nadirs)?);
        let (ideal, nadir) = if o.maximize {
            (ideal.ceil(), nadir.floor())
        } else {
            (ideal.floor(), nadir.ceil())
        };
        o.ideal = Some(ideal);
        o.nadir = Some(nadir);
    }
    Ok(out)
}
