//! Table loading and the filter join.
//!
//! The alternatives and key tables are restricted to the (holding, unit,
//! schedule) triples listed in the filter table and grouped by stand. Stand
//! order is the order in which units first appear in the filtered
//! alternatives table; schedules inside a stand are kept sorted, so the
//! per-stand content does not depend on row order.

use crate::assembly::error::InputError;
use crate::config::ProblemConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

pub const ALTERNATIVES_FILE: &str = "alternatives.csv";
pub const KEY_FILE: &str = "alternatives_key.csv";
pub const FILTER_FILE: &str = "filter.csv";
pub const CARBON_FILE: &str = "carbon.json";
pub const BASELINE_FILE: &str = "dec_vars.json";

// ── Column names ────────────────────────────────────────────────────────────
pub mod columns {
    pub const HOLDING: &str = "holding";
    pub const UNIT: &str = "unit";
    pub const SCHEDULE: &str = "schedule";
    pub const STOCK_0: &str = "stock_0";
    pub const STOCK_20: &str = "stock_20";
    pub const HARVEST_VALUE_5: &str = "harvest_value_5";
    pub const HARVEST_VALUE_10: &str = "harvest_value_10";
    pub const HARVEST_VALUE_20: &str = "harvest_value_20";
    pub const TREATMENT: &str = "treatment";

    pub const HARVEST_VALUES: [&str; 3] = [HARVEST_VALUE_5, HARVEST_VALUE_10, HARVEST_VALUE_20];
}

/// Stand identifier. Numeric ids are normalized so `7`, `7.0` and ` 7 ` match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandId(String);

impl StandId {
    pub fn new(raw: &str) -> Self {
        let t = raw.trim();
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                StandId(format!("{}", v as i64))
            }
            _ => StandId(t.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of alternatives.csv. Empty metric cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeRow {
    pub holding: i64,
    pub unit: StandId,
    pub schedule: usize,
    pub npv: Option<f64>,
    pub stock_0: Option<f64>,
    pub stock_20: Option<f64>,
    pub harvest_value: [Option<f64>; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyRow {
    pub holding: i64,
    pub unit: StandId,
    pub schedule: usize,
    pub treatment: Option<String>,
}

pub type FilterKey = (i64, StandId, usize);

/// Carbon per stand: time point ("0", "5", "10", "20") -> value per schedule number.
pub type CarbonTable = HashMap<StandId, BTreeMap<String, Vec<Option<f64>>>>;

/// Filtered rows of a single stand.
#[derive(Debug, Clone, PartialEq)]
pub struct StandTable {
    pub unit: StandId,
    pub schedules: BTreeMap<usize, AlternativeRow>,
    pub treatments: BTreeMap<usize, String>,
}

impl StandTable {
    pub fn new(unit: StandId) -> Self {
        Self {
            unit,
            schedules: BTreeMap::new(),
            treatments: BTreeMap::new(),
        }
    }

    pub fn schedule_ids(&self) -> Vec<usize> {
        self.schedules.keys().copied().collect()
    }

    pub fn treatment(&self, schedule: usize) -> Option<&str> {
        self.treatments.get(&schedule).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct ForestTables {
    pub stands: IndexMap<StandId, StandTable>,
    pub carbon: CarbonTable,
    /// One-hot reference decision vectors, in stand order.
    pub baseline: Option<Vec<Vec<f64>>>,
}

impl ForestTables {
    pub fn load(config: &ProblemConfig) -> Result<Self, InputError> {
        let dir = &config.data_dir;
        let alternatives = read_alternatives(&dir.join(ALTERNATIVES_FILE), &config.npv_column())?;
        let keys = read_keys(&dir.join(KEY_FILE))?;
        let filter = read_filter(&dir.join(FILTER_FILE))?;
        let carbon = read_carbon(&dir.join(CARBON_FILE))?;
        let baseline = read_baseline(&dir.join(BASELINE_FILE))?;

        let tables = Self::join(alternatives, keys, &filter, config.holding, carbon, baseline)?;
        info!(
            dir = %dir.display(),
            stands = tables.stands.len(),
            baseline = tables.baseline.is_some(),
            "tables loaded"
        );
        Ok(tables)
    }

    /// Keep only rows listed in `filter` (and of `holding`, if given) and group them by stand.
    pub fn join(
        alternatives: Vec<AlternativeRow>,
        keys: Vec<KeyRow>,
        filter: &HashSet<FilterKey>,
        holding: Option<i64>,
        carbon: CarbonTable,
        baseline: Option<Vec<Vec<f64>>>,
    ) -> Result<Self, InputError> {
        let keep = |h: i64, unit: &StandId, schedule: usize| {
            holding.map_or(true, |want| want == h) && filter.contains(&(h, unit.clone(), schedule))
        };

        let mut stands: IndexMap<StandId, StandTable> = IndexMap::new();
        let mut dropped = 0usize;
        for row in alternatives {
            if !keep(row.holding, &row.unit, row.schedule) {
                dropped += 1;
                continue;
            }
            let stand = stands
                .entry(row.unit.clone())
                .or_insert_with(|| StandTable::new(row.unit.clone()));
            if stand.schedules.contains_key(&row.schedule) {
                warn!(unit = %row.unit, schedule = row.schedule, "duplicate alternative row ignored");
                continue;
            }
            stand.schedules.insert(row.schedule, row);
        }
        debug!(dropped, "alternative rows outside the filter dropped");

        for key in keys {
            if !keep(key.holding, &key.unit, key.schedule) {
                continue;
            }
            let Some(stand) = stands.get_mut(&key.unit) else {
                debug!(unit = %key.unit, schedule = key.schedule, "key row without alternatives");
                continue;
            };
            match key.treatment {
                Some(label) => {
                    if stand.treatments.contains_key(&key.schedule) {
                        warn!(unit = %key.unit, schedule = key.schedule, "duplicate treatment label ignored");
                    } else {
                        stand.treatments.insert(key.schedule, label);
                    }
                }
                None => debug!(unit = %key.unit, schedule = key.schedule, "empty treatment label"),
            }
        }

        if stands.is_empty() {
            return Err(InputError::NoStands);
        }

        Ok(Self {
            stands,
            carbon,
            baseline,
        })
    }

    pub fn stand_ids(&self) -> impl Iterator<Item = &StandId> {
        self.stands.keys()
    }

    pub fn carbon_of(&self, unit: &StandId) -> Option<&BTreeMap<String, Vec<Option<f64>>>> {
        self.carbon.get(unit)
    }

    /// Total standing volume at the start of the planning period.
    pub fn initial_wood_volume(&self) -> f64 {
        self.stands
            .values()
            .filter_map(|s| s.schedules.values().next())
            .filter_map(|row| row.stock_0)
            .sum()
    }
}

// ── CSV access ──────────────────────────────────────────────────────────────

struct CsvTable {
    file: String,
    headers: HashMap<String, usize>,
    records: Vec<csv::StringRecord>,
}

impl CsvTable {
    fn read(path: &Path) -> Result<Self, InputError> {
        if !path.is_file() {
            return Err(InputError::MissingFile(path.to_path_buf()));
        }
        let file = file_label(path);
        let csv_err = |source: csv::Error| InputError::Csv {
            file: file.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(csv_err)?;
        let headers = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}').to_string(), i))
            .collect();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        Ok(Self {
            file,
            headers,
            records,
        })
    }

    fn column(&self, name: &str) -> Result<usize, InputError> {
        self.headers
            .get(name)
            .copied()
            .ok_or_else(|| InputError::MissingColumn {
                file: self.file.clone(),
                column: name.to_string(),
            })
    }

    /// Records with their 1-based line number (header is line 1).
    fn rows(&self) -> impl Iterator<Item = (usize, &csv::StringRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 2, r))
    }

    fn invalid(&self, row: usize, column: &str, value: &str) -> InputError {
        InputError::InvalidValue {
            file: self.file.clone(),
            row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    fn text<'r>(record: &'r csv::StringRecord, index: usize) -> Option<&'r str> {
        record
            .get(index)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn float(
        &self,
        row: usize,
        record: &csv::StringRecord,
        index: usize,
        column: &str,
    ) -> Result<Option<f64>, InputError> {
        match Self::text(record, index) {
            None => Ok(None),
            Some(s) => match s.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(self.invalid(row, column, s)),
            },
        }
    }

    /// Integer cell; written as `3` or `3.0` by the upstream exporter.
    fn integer(
        &self,
        row: usize,
        record: &csv::StringRecord,
        index: usize,
        column: &str,
    ) -> Result<i64, InputError> {
        let s = Self::text(record, index).unwrap_or("");
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
            _ => Err(self.invalid(row, column, s)),
        }
    }

    fn schedule(
        &self,
        row: usize,
        record: &csv::StringRecord,
        index: usize,
    ) -> Result<usize, InputError> {
        let v = self.integer(row, record, index, columns::SCHEDULE)?;
        usize::try_from(v).map_err(|_| self.invalid(row, columns::SCHEDULE, &v.to_string()))
    }

    fn unit(
        &self,
        row: usize,
        record: &csv::StringRecord,
        index: usize,
    ) -> Result<StandId, InputError> {
        Self::text(record, index)
            .map(StandId::new)
            .ok_or_else(|| self.invalid(row, columns::UNIT, ""))
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn read_alternatives(path: &Path, npv_column: &str) -> Result<Vec<AlternativeRow>, InputError> {
    let table = CsvTable::read(path)?;
    let holding = table.column(columns::HOLDING)?;
    let unit = table.column(columns::UNIT)?;
    let schedule = table.column(columns::SCHEDULE)?;
    let npv = table.column(npv_column)?;
    let stock_0 = table.column(columns::STOCK_0)?;
    let stock_20 = table.column(columns::STOCK_20)?;
    let harvest = [
        table.column(columns::HARVEST_VALUE_5)?,
        table.column(columns::HARVEST_VALUE_10)?,
        table.column(columns::HARVEST_VALUE_20)?,
    ];

    let mut rows = Vec::with_capacity(table.records.len());
    for (row, record) in table.rows() {
        let mut harvest_value = [None; 3];
        for (k, idx) in harvest.iter().enumerate() {
            harvest_value[k] = table.float(row, record, *idx, columns::HARVEST_VALUES[k])?;
        }
        rows.push(AlternativeRow {
            holding: table.integer(row, record, holding, columns::HOLDING)?,
            unit: table.unit(row, record, unit)?,
            schedule: table.schedule(row, record, schedule)?,
            npv: table.float(row, record, npv, npv_column)?,
            stock_0: table.float(row, record, stock_0, columns::STOCK_0)?,
            stock_20: table.float(row, record, stock_20, columns::STOCK_20)?,
            harvest_value,
        });
    }
    Ok(rows)
}

pub fn read_keys(path: &Path) -> Result<Vec<KeyRow>, InputError> {
    let table = CsvTable::read(path)?;
    let holding = table.column(columns::HOLDING)?;
    let unit = table.column(columns::UNIT)?;
    let schedule = table.column(columns::SCHEDULE)?;
    let treatment = table.column(columns::TREATMENT)?;

    table
        .rows()
        .map(|(row, record)| {
            Ok::<_, InputError>(KeyRow {
                holding: table.integer(row, record, holding, columns::HOLDING)?,
                unit: table.unit(row, record, unit)?,
                schedule: table.schedule(row, record, schedule)?,
                treatment: CsvTable::text(record, treatment).map(str::to_string),
            })
        })
        .collect()
}

pub fn read_filter(path: &Path) -> Result<HashSet<FilterKey>, InputError> {
    let table = CsvTable::read(path)?;
    let holding = table.column(columns::HOLDING)?;
    let unit = table.column(columns::UNIT)?;
    let schedule = table.column(columns::SCHEDULE)?;

    table
        .rows()
        .map(|(row, record)| {
            Ok::<_, InputError>((
                table.integer(row, record, holding, columns::HOLDING)?,
                table.unit(row, record, unit)?,
                table.schedule(row, record, schedule)?,
            ))
        })
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Json {
        file: file_label(path),
        source,
    })
}

pub fn read_carbon(path: &Path) -> Result<CarbonTable, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path.to_path_buf()));
    }
    let raw: HashMap<String, BTreeMap<String, Vec<Option<f64>>>> = read_json(path)?;
    let file = file_label(path);
    for (unit, series) in &raw {
        for (t, values) in series {
            for (schedule, v) in values.iter().enumerate() {
                if let Some(v) = v {
                    ensure_finite(&file, schedule, &format!("{}/{}", unit, t), *v)?;
                }
            }
        }
    }
    Ok(raw
        .into_iter()
        .map(|(unit, series)| (StandId::new(&unit), series))
        .collect())
}

/// The baseline is optional; without it carbon is measured against the initial state.
pub fn read_baseline(path: &Path) -> Result<Option<Vec<Vec<f64>>>, InputError> {
    if !path.is_file() {
        warn!(path = %path.display(), "no carbon baseline, falling back to the initial state");
        return Ok(None);
    }
    let rows: Vec<Vec<f64>> = read_json(path)?;
    let file = file_label(path);
    for (i, row) in rows.iter().enumerate() {
        for (slot, v) in row.iter().enumerate() {
            ensure_finite(&file, i, &slot.to_string(), *v)?;
        }
    }
    Ok(Some(rows))
}

/// JSON numbers beyond the f64 range must not reach the model as infinities.
fn ensure_finite(file: &str, row: usize, column: &str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::InvalidValue {
            file: file.to_string(),
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn row(unit: &str, schedule: usize, npv: f64) -> AlternativeRow {
        AlternativeRow {
            holding: 1,
            unit: StandId::new(unit),
            schedule,
            npv: Some(npv),
            stock_0: Some(100.0),
            stock_20: Some(120.0),
            harvest_value: [Some(1.0), Some(2.0), Some(3.0)],
        }
    }

    fn key(unit: &str, schedule: usize, label: &str) -> KeyRow {
        KeyRow {
            holding: 1,
            unit: StandId::new(unit),
            schedule,
            treatment: Some(label.to_string()),
        }
    }

    #[test]
    fn test_stand_id_normalization() {
        assert_eq!(StandId::new("7"), StandId::new("7.0"));
        assert_eq!(StandId::new(" 7 ").as_str(), "7");
        assert_eq!(StandId::new("A-12").as_str(), "A-12");
        assert_eq!(StandId::new("7.5").as_str(), "7.5");
    }

    #[test]
    fn test_join_drops_unfiltered_rows_and_keeps_first_seen_order() {
        let alternatives = vec![row("9", 1, 5.0), row("3", 0, 1.0), row("9", 0, 4.0), row("3", 1, 2.0)];
        let keys = vec![key("9", 0, "thin"), key("9", 1, "clearcut"), key("3", 1, "none")];
        let filter: HashSet<FilterKey> = [
            (1, StandId::new("9"), 0),
            (1, StandId::new("9"), 1),
            (1, StandId::new("3"), 0),
        ]
        .into_iter()
        .collect();

        let tables = ForestTables::join(alternatives, keys, &filter, None, CarbonTable::new(), None).unwrap();
        let ids: Vec<&str> = tables.stand_ids().map(StandId::as_str).collect();
        assert_eq!(ids, vec!["9", "3"]);
        assert_eq!(tables.stands[0].schedule_ids(), vec![0, 1]);
        assert_eq!(tables.stands[1].schedule_ids(), vec![0]);
        // (3, 1) is not in the filter, so its label is gone as well
        assert!(tables.stands[1].treatments.is_empty());
        assert_eq!(tables.stands[0].treatment(1), Some("clearcut"));
    }

    #[test]
    fn test_join_restricts_holding() {
        let mut other = row("5", 0, 1.0);
        other.holding = 2;
        let alternatives = vec![row("4", 0, 1.0), other];
        let filter: HashSet<FilterKey> =
            [(1, StandId::new("4"), 0), (2, StandId::new("5"), 0)].into_iter().collect();

        let tables =
            ForestTables::join(alternatives, vec![], &filter, Some(2), CarbonTable::new(), None).unwrap();
        assert_eq!(tables.stands.len(), 1);
        assert!(tables.stands.contains_key(&StandId::new("5")));
    }

    #[test]
    fn test_join_with_empty_result_fails() {
        let filter = HashSet::new();
        let err = ForestTables::join(vec![row("1", 0, 1.0)], vec![], &filter, None, CarbonTable::new(), None)
            .unwrap_err();
        assert!(matches!(err, InputError::NoStands));
    }

    #[test]
    fn test_duplicate_rows_keep_first() {
        let filter: HashSet<FilterKey> = [(1, StandId::new("1"), 0)].into_iter().collect();
        let tables = ForestTables::join(
            vec![row("1", 0, 1.0), row("1.0", 0, 99.0)],
            vec![],
            &filter,
            None,
            CarbonTable::new(),
            None,
        )
        .unwrap();
        assert_eq!(tables.stands[0].schedules[&0].npv, Some(1.0));
    }

    #[test]
    fn test_initial_wood_volume_counts_each_stand_once() {
        let filter: HashSet<FilterKey> = [
            (1, StandId::new("1"), 0),
            (1, StandId::new("1"), 1),
            (1, StandId::new("2"), 0),
        ]
        .into_iter()
        .collect();
        let tables = ForestTables::join(
            vec![row("1", 0, 1.0), row("1", 1, 1.0), row("2", 0, 1.0)],
            vec![],
            &filter,
            None,
            CarbonTable::new(),
            None,
        )
        .unwrap();
        assert_eq!(tables.initial_wood_volume(), 200.0);
    }

    #[test]
    fn test_read_alternatives_by_column_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ALTERNATIVES_FILE);
        fs::write(
            &path,
            "unit,holding,schedule,stock_0,stock_20,npv_3_percent,harvest_value_5,harvest_value_10,harvest_value_20\n\
             12.0,1,0,50,60,1000.5,10,,30\n",
        )
        .unwrap();

        let rows = read_alternatives(&path, "npv_3_percent").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit.as_str(), "12");
        assert_eq!(rows[0].npv, Some(1000.5));
        assert_eq!(rows[0].harvest_value, [Some(10.0), None, Some(30.0)]);
    }

    #[test]
    fn test_read_alternatives_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ALTERNATIVES_FILE);
        fs::write(&path, "holding,unit,schedule\n1,1,0\n").unwrap();

        let err = read_alternatives(&path, "npv_3_percent").unwrap_err();
        assert!(matches!(err, InputError::MissingColumn { ref column, .. } if column == "npv_3_percent"));
    }

    #[test]
    fn test_read_alternatives_bad_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ALTERNATIVES_FILE);
        fs::write(
            &path,
            "holding,unit,schedule,npv_3_percent,stock_0,stock_20,harvest_value_5,harvest_value_10,harvest_value_20\n\
             1,1,0,abc,1,1,1,1,1\n",
        )
        .unwrap();

        let err = read_alternatives(&path, "npv_3_percent").unwrap_err();
        assert!(matches!(err, InputError::InvalidValue { row: 2, ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_read_alternatives_rejects_non_finite_numbers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ALTERNATIVES_FILE);
        for bad in ["NaN", "inf", "-inf"] {
            fs::write(
                &path,
                format!(
                    "holding,unit,schedule,npv_3_percent,stock_0,stock_20,harvest_value_5,harvest_value_10,harvest_value_20\n\
                     1,1,0,10,1,1,1,1,1\n\
                     1,1,1,{},1,1,1,1,1\n",
                    bad
                ),
            )
            .unwrap();

            let err = read_alternatives(&path, "npv_3_percent").unwrap_err();
            assert!(
                matches!(err, InputError::InvalidValue { row: 3, ref column, ref value, .. }
                    if column == "npv_3_percent" && value == bad),
                "{}: {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_json_tables_reject_out_of_range_numbers() {
        let dir = TempDir::new().unwrap();
        let carbon = dir.path().join(CARBON_FILE);
        fs::write(&carbon, r#"{"1": {"0": [1.0, 1e999]}}"#).unwrap();
        assert!(matches!(
            read_carbon(&carbon),
            Err(InputError::Json { .. } | InputError::InvalidValue { .. })
        ));

        let baseline = dir.path().join(BASELINE_FILE);
        fs::write(&baseline, "[[1, 0], [-1e999]]").unwrap();
        assert!(matches!(
            read_baseline(&baseline),
            Err(InputError::Json { .. } | InputError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("carbon.json", 0, "1/5", 2.5).unwrap(), 2.5);
        let err = ensure_finite("dec_vars.json", 1, "0", f64::INFINITY).unwrap_err();
        assert!(matches!(err, InputError::InvalidValue { row: 1, ref value, .. } if value == "inf"));
        assert!(ensure_finite("dec_vars.json", 0, "0", f64::NAN).is_err());
    }

    #[test]
    fn test_missing_files() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_filter(&dir.path().join(FILTER_FILE)),
            Err(InputError::MissingFile(_))
        ));
        assert!(matches!(
            read_carbon(&dir.path().join(CARBON_FILE)),
            Err(InputError::MissingFile(_))
        ));
        assert!(read_baseline(&dir.path().join(BASELINE_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_read_carbon_normalizes_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CARBON_FILE);
        fs::write(&path, r#"{"4.0": {"0": [1.0, 2.0], "5": [1.5, null]}}"#).unwrap();

        let carbon = read_carbon(&path).unwrap();
        let series = &carbon[&StandId::new("4")];
        assert_eq!(series["5"], vec![Some(1.5), None]);
    }
}
