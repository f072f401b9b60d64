//! Per-stand constant vectors and decision variables.
//!
//! Slot `i` of every vector of a stand refers to the stand's `i`-th retained
//! schedule in ascending schedule-number order.

use crate::assembly::error::InputError;
use crate::assembly::linear::LinearExpr;
use crate::assembly::tables::{ForestTables, StandId, StandTable};
use crate::{TensorConstant, TensorVariable};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Added to every harvest value so no real slot is indistinguishable from padding.
pub const HARVEST_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Npv,
    WoodStock,
    Harvest1,
    Harvest2,
    Harvest3,
    Carbon0,
    Carbon5,
    Carbon10,
    Carbon20,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Npv,
        Metric::WoodStock,
        Metric::Harvest1,
        Metric::Harvest2,
        Metric::Harvest3,
        Metric::Carbon0,
        Metric::Carbon5,
        Metric::Carbon10,
        Metric::Carbon20,
    ];
    pub const HARVEST: [Metric; 3] = [Metric::Harvest1, Metric::Harvest2, Metric::Harvest3];
    pub const CARBON: [Metric; 4] = [
        Metric::Carbon0,
        Metric::Carbon5,
        Metric::Carbon10,
        Metric::Carbon20,
    ];

    /// Symbol prefix of the stand constant (`V` -> `V_3`).
    pub fn prefix(self) -> &'static str {
        match self {
            Metric::Npv => "V",
            Metric::WoodStock => "W",
            Metric::Harvest1 => "P1",
            Metric::Harvest2 => "P2",
            Metric::Harvest3 => "P3",
            Metric::Carbon0 => "C0",
            Metric::Carbon5 => "C5",
            Metric::Carbon10 => "C10",
            Metric::Carbon20 => "C20",
        }
    }

    /// Year of the carbon measurement, for carbon metrics.
    pub fn time_point(self) -> Option<u32> {
        match self {
            Metric::Carbon0 => Some(0),
            Metric::Carbon5 => Some(5),
            Metric::Carbon10 => Some(10),
            Metric::Carbon20 => Some(20),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// What a stand's carbon differential is measured against.
#[derive(Debug, Clone, PartialEq)]
pub enum BaselineSource {
    /// One-hot reference decision vector.
    Baseline(Vec<f64>),
    /// No reference plan: the year-0 carbon of the chosen schedule.
    InitialState(Vec<f64>),
}

impl BaselineSource {
    /// Reference carbon for `carbon` (one of the C vectors): `carbon · B`, or `C0 · X`.
    pub fn reference(&self, carbon: &[f64], x_symbol: &str) -> LinearExpr {
        match self {
            BaselineSource::Baseline(b) => {
                LinearExpr::from_const(carbon.iter().zip(b).map(|(c, b)| c * b).sum())
            }
            BaselineSource::InitialState(c0) => LinearExpr::dot(c0, x_symbol),
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, BaselineSource::Baseline(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandTensors {
    /// 1-based position in stand order; suffix of every symbol of the stand.
    pub index: usize,
    pub unit: StandId,
    /// Slot -> schedule number.
    pub schedule_ids: Vec<usize>,
    /// Slot -> treatment label, for slots that have one.
    pub treatments: BTreeMap<usize, String>,
    metrics: [Vec<f64>; 9],
    pub baseline: BaselineSource,
}

impl StandTensors {
    pub fn len(&self) -> usize {
        self.schedule_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule_ids.is_empty()
    }

    pub fn vector(&self, metric: Metric) -> &[f64] {
        &self.metrics[metric.index()]
    }

    pub fn symbol(&self, metric: Metric) -> String {
        format!("{}_{}", metric.prefix(), self.index)
    }

    pub fn x_symbol(&self) -> String {
        format!("X_{}", self.index)
    }

    pub fn b_symbol(&self) -> String {
        format!("B_{}", self.index)
    }

    pub fn decision_variable(&self) -> TensorVariable {
        TensorVariable::binary(self.x_symbol(), self.len())
    }

    /// The nine metric constants, plus `B_j` when a baseline exists.
    pub fn constants(&self) -> Vec<TensorConstant> {
        let mut out: Vec<TensorConstant> = Metric::ALL
            .iter()
            .map(|m| TensorConstant::new(self.symbol(*m), self.vector(*m).to_vec()))
            .collect();
        if let BaselineSource::Baseline(b) = &self.baseline {
            out.push(TensorConstant::new(self.b_symbol(), b.clone()));
        }
        out
    }

    /// Every vector of the stand must have one entry per slot.
    pub fn check_shapes(&self) -> Result<(), InputError> {
        let expected = self.len();
        if expected == 0 {
            return Err(InputError::EmptyStand(self.unit.to_string()));
        }
        let baseline = match &self.baseline {
            BaselineSource::Baseline(b) => (self.b_symbol(), b.len()),
            BaselineSource::InitialState(c0) => (self.symbol(Metric::Carbon0), c0.len()),
        };
        let lengths = Metric::ALL
            .iter()
            .map(|m| (self.symbol(*m), self.vector(*m).len()))
            .chain(std::iter::once(baseline));
        for (vector, actual) in lengths {
            if actual != expected {
                return Err(InputError::ShapeMismatch {
                    stand: self.unit.to_string(),
                    vector,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Build the vectors of one stand. `baseline_row` is the stand's entry of dec_vars.json.
pub fn build_stand(
    index: usize,
    stand: &StandTable,
    carbon: Option<&BTreeMap<String, Vec<Option<f64>>>>,
    baseline_row: Option<&[f64]>,
) -> Result<StandTensors, InputError> {
    let schedule_ids = stand.schedule_ids();
    if schedule_ids.is_empty() {
        return Err(InputError::EmptyStand(stand.unit.to_string()));
    }
    let n = schedule_ids.len();
    let unit = &stand.unit;

    if carbon.is_none() {
        warn!(%unit, "stand missing from carbon table, carbon zero-filled");
    }

    let mut metrics: [Vec<f64>; 9] = Default::default();
    for m in Metric::ALL {
        metrics[m.index()] = vec![0.0; n];
    }
    let mut treatments = BTreeMap::new();

    for (slot, (&schedule, row)) in stand.schedules.iter().enumerate() {
        let zero_fill = |metric: Metric, value: Option<f64>| {
            value.unwrap_or_else(|| {
                debug!(%unit, schedule, metric = metric.prefix(), "missing value zero-filled");
                0.0
            })
        };

        metrics[Metric::Npv.index()][slot] = zero_fill(Metric::Npv, row.npv);

        match stand.treatment(schedule) {
            Some(label) => {
                treatments.insert(slot, label.to_string());
                metrics[Metric::WoodStock.index()][slot] = zero_fill(Metric::WoodStock, row.stock_20);
            }
            None => debug!(%unit, schedule, "no treatment label, wood stock entry skipped"),
        }

        for (k, m) in Metric::HARVEST.iter().enumerate() {
            metrics[m.index()][slot] = zero_fill(*m, row.harvest_value[k]) + HARVEST_EPSILON;
        }

        for m in Metric::CARBON {
            let value = carbon
                .zip(m.time_point())
                .and_then(|(series, t)| series.get(&t.to_string()))
                .and_then(|values| values.get(schedule).copied().flatten());
            if carbon.is_some() {
                metrics[m.index()][slot] = zero_fill(m, value);
            }
        }
    }

    let baseline = match baseline_row {
        Some(row) => {
            let mut b = row.to_vec();
            if b.len() != n {
                debug!(%unit, given = b.len(), slots = n, "baseline row resized to slot count");
            }
            b.resize(n, 0.0);
            BaselineSource::Baseline(b)
        }
        None => BaselineSource::InitialState(metrics[Metric::Carbon0.index()].clone()),
    };

    let tensors = StandTensors {
        index,
        unit: unit.clone(),
        schedule_ids,
        treatments,
        metrics,
        baseline,
    };
    tensors.check_shapes()?;
    Ok(tensors)
}

/// Build every stand in loader order.
pub fn build_tensors(tables: &ForestTables) -> Result<Vec<StandTensors>, InputError> {
    let mut out = Vec::with_capacity(tables.stands.len());
    for (i, stand) in tables.stands.values().enumerate() {
        let baseline_row = match &tables.baseline {
            Some(rows) => {
                let row = rows.get(i).map(Vec::as_slice);
                if row.is_none() {
                    warn!(unit = %stand.unit, "no baseline row for stand, falling back to the initial state");
                }
                row
            }
            None => None,
        };
        out.push(build_stand(i + 1, stand, tables.carbon_of(&stand.unit), baseline_row)?);
    }
    Ok(out)
}
