use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{error, info, warn};

use crate::errors::LoadError;
use crate::models::{PricePoint, PriceTable};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// Column positions resolved from the header row.
struct Columns {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::Schema(format!("Missing required column: {}", name)))
        };

        Ok(Self {
            date: find("Date")?,
            open: find("Open")?,
            high: find("High")?,
            low: find("Low")?,
            close: find("Close")?,
            volume: find("Volume")?,
        })
    }
}

/// Loads the price history from a CSV file.
pub fn load(path: &Path) -> Result<PriceTable, LoadError> {
    let file = File::open(path).map_err(|e| {
        error!("Failed to open price source {:?}: {}", path, e);
        LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let table = load_from_reader(file)?;
    info!(
        "Loaded {} price rows from {:?} ({:?} to {:?})",
        table.len(),
        path,
        table.first_date(),
        table.max_date()
    );
    Ok(table)
}

/// Parses CSV with a `Date,Open,High,Low,Close,Volume` header (extra columns ignored)
/// into a date-sorted table.
pub fn load_from_reader<R: Read>(reader: R) -> Result<PriceTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        points.push(parse_row(&record, &columns, line)?);
    }

    let table = PriceTable::from_points(points);
    if table.is_empty() {
        return Err(LoadError::Schema("Price source contains no data rows".to_string()));
    }
    if table.has_duplicate_dates() {
        warn!("Price source contains duplicate dates; keeping source order for ties");
    }
    Ok(table)
}

fn parse_row(record: &StringRecord, columns: &Columns, line: u64) -> Result<PricePoint, LoadError> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| LoadError::Schema(format!("Line {}: missing {} field", line, name)))
    };

    let raw_date = field(columns.date, "Date")?;
    let date = parse_date(raw_date).ok_or_else(|| LoadError::MalformedDate {
        line,
        value: raw_date.to_string(),
    })?;

    Ok(PricePoint::new(
        date,
        parse_price(field(columns.open, "Open")?, "Open", line)?,
        parse_price(field(columns.high, "High")?, "High", line)?,
        parse_price(field(columns.low, "Low")?, "Low", line)?,
        parse_price(field(columns.close, "Close")?, "Close", line)?,
        parse_volume(field(columns.volume, "Volume")?, line)?,
    ))
}

/// Calendar date from the common CSV export formats. Any time-of-day part is dropped.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn parse_price(s: &str, column: &str, line: u64) -> Result<f64, LoadError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::Schema(format!("Line {}: {} is not a number: {:?}", line, column, s)))
}

fn parse_volume(s: &str, line: u64) -> Result<u64, LoadError> {
    if let Ok(v) = s.parse::<u64>() {
        return Ok(v);
    }

    // Some exports write integral volumes as "1200.0"
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
        .ok_or_else(|| {
            LoadError::Schema(format!(
                "Line {}: Volume is not a non-negative integer: {:?}",
                line, s
            ))
        })
}
