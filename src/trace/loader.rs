//! Path trace CSV loading.
//!
//! A trace file is a header line, any number of data rows and a trailing summary line.
//! Data rows carry at least four comma-separated fields: `x`, `y`, a field pathviz does not
//! use, and a flag telling whether the row was interpolated by the planner.

use std::{fs::File, io::Read, path::Path};

use anyhow::Context as _;
use kurbo::Point;

use crate::{
    foundation::error::{PathvizError, PathvizResult},
    trace::flag::parse_flag,
};

const MIN_FIELDS: usize = 4;

/// One data row of a trace file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub point: Point,
    pub interpolated: bool,
}

/// The actual and interpolated paths of one trace file.
///
/// Each keeps the source row order; the two are not aligned with each other.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Trace {
    pub actual: Vec<Point>,
    pub interpolated: Vec<Point>,
}

impl Trace {
    pub fn from_rows(rows: impl IntoIterator<Item = TraceRow>) -> Self {
        let mut trace = Self::default();
        for row in rows {
            if row.interpolated {
                trace.interpolated.push(row.point);
            } else {
                trace.actual.push(row.point);
            }
        }
        trace
    }

    pub fn len(&self) -> usize {
        self.actual.len() + self.interpolated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty() && self.interpolated.is_empty()
    }
}

/// Parse the data rows of a trace, dropping the header and the trailing summary line.
///
/// Fields are split on every comma; quotes have no special meaning.
pub fn parse_rows<R: Read>(reader: R) -> PathvizResult<Vec<TraceRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in rdr.byte_records() {
        records.push(record.context("read trace row")?);
    }
    // trailing summary line
    records.pop();

    records
        .iter()
        .map(|record| {
            let line = record.position().map_or(0, csv::Position::line);
            parse_record(line, record)
        })
        .collect()
}

fn parse_record(line: u64, record: &csv::ByteRecord) -> PathvizResult<TraceRow> {
    if record.len() < MIN_FIELDS {
        return Err(PathvizError::parse(
            line,
            format!("expected at least {MIN_FIELDS} fields, found {}", record.len()),
        ));
    }
    let x = parse_coord(line, "x", &record[0])?;
    let y = parse_coord(line, "y", &record[1])?;
    let interpolated = std::str::from_utf8(&record[3]).is_ok_and(parse_flag);
    Ok(TraceRow {
        line,
        point: Point::new(x, y),
        interpolated,
    })
}

fn parse_coord(line: u64, name: &str, field: &[u8]) -> PathvizResult<f64> {
    let text = String::from_utf8_lossy(field);
    let v: f64 = text
        .parse()
        .map_err(|_| PathvizError::parse(line, format!("{name} is not a number: {text:?}")))?;
    if !v.is_finite() {
        return Err(PathvizError::parse(
            line,
            format!("{name} is not finite: {text:?}"),
        ));
    }
    Ok(v)
}

/// Parse a whole trace from `reader`.
pub fn parse_trace<R: Read>(reader: R) -> PathvizResult<Trace> {
    Ok(Trace::from_rows(parse_rows(reader)?))
}

/// Open and parse the trace file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_trace(path: &Path) -> PathvizResult<Trace> {
    let file = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let trace = parse_trace(std::io::BufReader::new(file))?;
    tracing::debug!(
        actual = trace.actual.len(),
        interpolated = trace.interpolated.len(),
        "loaded trace"
    );
    Ok(trace)
}

#[cfg(test)]
#[path = "../../tests/unit/trace/loader.rs"]
mod tests;
