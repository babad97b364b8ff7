use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::{Metric, Side, StatRecord, Subjects, YearlyRecord};
use crate::error::{ChartError, ChartResult};

pub const FACTOR_COLUMN: &str = "Factors";
pub const YEAR_COLUMN: &str = "Year";

/// A row dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

impl From<SkippedRow> for ChartError {
    fn from(row: SkippedRow) -> Self {
        ChartError::malformed(row.line, row.reason)
    }
}

/// Typed records of one resource plus the rows that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

impl<T> LoadReport<T> {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub fn load_factors(
    path: impl AsRef<Path>,
    subjects: &Subjects,
) -> ChartResult<LoadReport<StatRecord>> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|err| ChartError::data_unavailable(&source, err))?;
    parse_factors_from(file, subjects, &source)
}

pub fn load_yearly(
    path: impl AsRef<Path>,
    subjects: &Subjects,
) -> ChartResult<LoadReport<YearlyRecord>> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|err| ChartError::data_unavailable(&source, err))?;
    parse_yearly_from(file, subjects, &source)
}

/// Parses a `Factors,<first>,<second>` table.
///
/// Empty cells are absent values; a row needs at least one present value.
pub fn parse_factors<R: Read>(
    reader: R,
    subjects: &Subjects,
) -> ChartResult<LoadReport<StatRecord>> {
    parse_factors_from(reader, subjects, "input")
}

/// Parses a `Year,<first>Assists,<second>Assists,<first>Goals,<second>Goals`
/// table into records sorted by year, one per year.
pub fn parse_yearly<R: Read>(
    reader: R,
    subjects: &Subjects,
) -> ChartResult<LoadReport<YearlyRecord>> {
    parse_yearly_from(reader, subjects, "input")
}

fn parse_factors_from<R: Read>(
    reader: R,
    subjects: &Subjects,
    source: &str,
) -> ChartResult<LoadReport<StatRecord>> {
    let mut csv = csv_reader(reader);
    let headers = read_headers(&mut csv, source)?;
    let factor_idx = column_index(&headers, FACTOR_COLUMN, source)?;
    let value_idx = [
        column_index(&headers, subjects.name(Side::First), source)?,
        column_index(&headers, subjects.name(Side::Second), source)?,
    ];

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for row in csv.records() {
        let Some((line, row)) = next_row(row, source, &mut skipped)? else {
            continue;
        };
        match stat_record(&row, factor_idx, value_idx) {
            Ok(record) => records.push(record),
            Err(reason) => skip(&mut skipped, source, line, reason),
        }
    }

    debug!(
        source,
        records = records.len(),
        skipped = skipped.len(),
        "loaded factor table"
    );
    Ok(LoadReport { records, skipped })
}

fn parse_yearly_from<R: Read>(
    reader: R,
    subjects: &Subjects,
    source: &str,
) -> ChartResult<LoadReport<YearlyRecord>> {
    let mut csv = csv_reader(reader);
    let headers = read_headers(&mut csv, source)?;
    let year_idx = column_index(&headers, YEAR_COLUMN, source)?;
    let mut metric_idx = [[0usize; 2]; 2];
    for metric in [Metric::Assists, Metric::Goals] {
        for side in Side::BOTH {
            let column = format!("{}{}", subjects.name(side), metric.label());
            metric_idx[metric_slot(metric)][side.index()] =
                column_index(&headers, &column, source)?;
        }
    }

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for row in csv.records() {
        let Some((line, row)) = next_row(row, source, &mut skipped)? else {
            continue;
        };
        match yearly_record(&row, year_idx, metric_idx) {
            Ok(record) => rows.push((line, record)),
            Err(reason) => skip(&mut skipped, source, line, reason),
        }
    }

    rows.sort_by_key(|(_, record)| record.year);
    let mut records: Vec<YearlyRecord> = Vec::with_capacity(rows.len());
    for (line, record) in rows {
        if records.last().is_some_and(|last| last.year == record.year) {
            skip(
                &mut skipped,
                source,
                line,
                format!("duplicate year {}", record.year),
            );
            continue;
        }
        records.push(record);
    }
    skipped.sort_by_key(|row| row.line);

    debug!(
        source,
        records = records.len(),
        skipped = skipped.len(),
        "loaded yearly table"
    );
    Ok(LoadReport { records, skipped })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn read_headers<R: Read>(csv: &mut csv::Reader<R>, source: &str) -> ChartResult<StringRecord> {
    let headers = csv
        .headers()
        .map_err(|err| ChartError::data_unavailable(source, err))?
        .clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(ChartError::data_unavailable(source, "missing header row"));
    }
    Ok(headers)
}

fn column_index(headers: &StringRecord, name: &str, source: &str) -> ChartResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ChartError::data_unavailable(source, format!("missing column `{name}`")))
}

/// Splits stream failures (whole resource unavailable) from per-row failures.
fn next_row(
    row: csv::Result<StringRecord>,
    source: &str,
    skipped: &mut Vec<SkippedRow>,
) -> ChartResult<Option<(u64, StringRecord)>> {
    match row {
        Ok(row) => {
            let line = row.position().map_or(0, csv::Position::line);
            Ok(Some((line, row)))
        }
        Err(err) if err.is_io_error() => Err(ChartError::data_unavailable(source, err)),
        Err(err) => {
            let line = err.position().map_or(0, csv::Position::line);
            skip(skipped, source, line, err.to_string());
            Ok(None)
        }
    }
}

fn skip(skipped: &mut Vec<SkippedRow>, source: &str, line: u64, reason: String) {
    warn!(source, line, reason = %reason, "skipping malformed record");
    skipped.push(SkippedRow { line, reason });
}

fn stat_record(
    row: &StringRecord,
    factor_idx: usize,
    value_idx: [usize; 2],
) -> Result<StatRecord, String> {
    let factor = row.get(factor_idx).unwrap_or_default();
    if factor.is_empty() {
        return Err("empty factor name".to_owned());
    }
    let first = optional_number(row.get(value_idx[0]))?;
    let second = optional_number(row.get(value_idx[1]))?;
    let record = StatRecord::new(factor, first, second);
    if !record.has_any_value() {
        return Err(format!("factor `{factor}` has no value for either subject"));
    }
    Ok(record)
}

fn yearly_record(
    row: &StringRecord,
    year_idx: usize,
    metric_idx: [[usize; 2]; 2],
) -> Result<YearlyRecord, String> {
    let year = parse_year(row.get(year_idx).unwrap_or_default())?;
    let required = |idx: usize| -> Result<f64, String> {
        optional_number(row.get(idx))?.ok_or_else(|| format!("missing value in column {idx}"))
    };
    let assists_idx = metric_idx[metric_slot(Metric::Assists)];
    let goals_idx = metric_idx[metric_slot(Metric::Goals)];
    Ok(YearlyRecord::new(
        year,
        [required(assists_idx[0])?, required(assists_idx[1])?],
        [required(goals_idx[0])?, required(goals_idx[1])?],
    ))
}

const fn metric_slot(metric: Metric) -> usize {
    match metric {
        Metric::Assists => 0,
        Metric::Goals => 1,
    }
}

/// Accepts `2009` as well as season labels such as `2009/10`.
pub fn parse_year(cell: &str) -> Result<i32, String> {
    let head = cell.split('/').next().unwrap_or_default().trim();
    head.parse::<i32>()
        .map_err(|_| format!("invalid year `{cell}`"))
}

fn optional_number(cell: Option<&str>) -> Result<Option<f64>, String> {
    let Some(cell) = cell.map(str::trim).filter(|cell| !cell.is_empty()) else {
        return Ok(None);
    };
    let value = cell
        .parse::<f64>()
        .map_err(|_| format!("invalid number `{cell}`"))?;
    if !value.is_finite() {
        return Err(format!("non-finite number `{cell}`"));
    }
    if value < 0.0 {
        return Err(format!("negative count `{cell}`"));
    }
    Ok(Some(value))
}
