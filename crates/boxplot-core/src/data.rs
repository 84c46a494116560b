// File: crates/boxplot-core/src/data.rs
// Summary: Earnings records and the sources that fetch them (local CSV, HTTP CSV, in-memory).

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::DataError;
use crate::health::HealthStatus;

/// Divisor that turns raw currency units into the displayed unit (millions).
pub const DISPLAY_DIVISOR: f64 = 1_000_000.0;

/// One person: raw earnings and self-reported health status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub earnings: f64,
    pub health: HealthStatus,
}

impl Record {
    pub const fn new(earnings: f64, health: HealthStatus) -> Self {
        Self { earnings, health }
    }

    /// Earnings in millions.
    #[inline]
    pub fn earnings_millions(&self) -> f64 {
        self.earnings / DISPLAY_DIVISOR
    }
}

/// Anything that can produce the full dataset on demand. Called once per redraw.
pub trait DataSource {
    fn fetch(&self) -> Result<Vec<Record>, DataError>;
    /// Human readable location for logs.
    fn describe(&self) -> String;
}

/// CSV file on the local filesystem.
#[derive(Clone, Debug)]
pub struct CsvFile {
    pub path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for CsvFile {
    fn fetch(&self) -> Result<Vec<Record>, DataError> {
        let file = std::fs::File::open(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_csv(file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// CSV served over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpCsv {
    pub url: String,
}

impl HttpCsv {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DataSource for HttpCsv {
    fn fetch(&self) -> Result<Vec<Record>, DataError> {
        let response = ureq::get(&self.url).call().map_err(|source| DataError::Http {
            url: self.url.clone(),
            source: Box::new(source),
        })?;
        parse_csv(response.into_reader())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Records already in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    pub records: Vec<Record>,
}

impl InMemory {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        parse_csv(text.as_bytes()).map(Self::new)
    }
}

impl DataSource for InMemory {
    fn fetch(&self) -> Result<Vec<Record>, DataError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}

/// Pick a source from a location string: `http(s)://` URLs go over the network, anything
/// else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn DataSource + Send + Sync> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCsv::new(location))
    } else {
        Box::new(CsvFile::new(Path::new(location)))
    }
}

/// Parse a CSV with at least `Earn` and `Health` columns. Extra columns are ignored.
///
/// `Earn` uses numeric-cast coercion (see [`coerce_number`]): blank is `0`, unparsable
/// text is `NaN`.
/// Rows whose `Health` label is not one of the five categories are dropped, since they
/// have no position on the category axis.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let idx = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn(name))
    };
    let i_earn = idx("Earn")?;
    let i_health = idx("Health")?;

    let mut out = Vec::new();
    let mut unknown = 0usize;
    let mut non_numeric = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let earnings = coerce_number(rec.get(i_earn).unwrap_or(""));
        if earnings.is_nan() {
            non_numeric += 1;
        }
        match rec.get(i_health).unwrap_or("").parse::<HealthStatus>() {
            Ok(health) => out.push(Record { earnings, health }),
            Err(_) => unknown += 1,
        }
    }

    if unknown > 0 {
        log::warn!("dropped {unknown} rows with an unrecognized Health label");
    }
    if non_numeric > 0 {
        log::warn!("{non_numeric} rows have a non-numeric Earn value");
    }
    log::debug!("parsed {} records", out.len());
    Ok(out)
}

/// Numeric cast of a CSV cell, with browser number-cast rules.
///
/// Blank is `0`. `Infinity` (optionally signed) is the only spelling of infinity, and
/// `0x`/`0o`/`0b` prefixes read unsigned integer literals. Anything else that is not a
/// plain decimal, `inf` and `nan` included, is `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(v) = radix_literal(s) {
        return v;
    }
    let decimal = s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(digits.chars().filter_map(|c| c.to_digit(radix)).fold(0.0, |acc, d| acc * radix as f64 + d as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_follows_numeric_cast() {
        assert_eq!(coerce_number(" 1500 "), 1500.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("2.5e6"), 2_500_000.0);
        assert!(coerce_number("n/a").is_nan());
    }

    #[test]
    fn only_the_exact_infinity_spelling_is_infinite() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        for raw in ["inf", "INF", "infinity", "-inf", "nan", "NaN"] {
            assert!(coerce_number(raw).is_nan(), "{raw}");
        }
    }

    #[test]
    fn prefixed_integer_literals() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("1_000").is_nan());
    }

    #[test]
    fn inf_cells_do_not_reach_the_quartiles() {
        let csv = "Earn,Health\ninf,Good\ninf,Good\n1000000,Good\n";
        let recs = parse_csv(csv.as_bytes()).unwrap();
        let values: Vec<f64> = recs.iter().map(Record::earnings_millions).collect();
        let s = crate::stats::BoxPlotStats::from_values(&values).unwrap();
        assert_eq!((s.q1, s.median, s.q3), (1.0, 1.0, 1.0));
    }

    #[test]
    fn parses_columns_by_header_name() {
        let csv = "id,Health,Earn,Age\n1,Good,1000000,40\n2,Very good,250000,31\n";
        let recs = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            recs,
            vec![
                Record::new(1_000_000.0, HealthStatus::Good),
                Record::new(250_000.0, HealthStatus::VeryGood),
            ]
        );
        assert!((recs[1].earnings_millions() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn unknown_labels_are_dropped() {
        let csv = "Earn,Health\n10,Good\n20,good\n30,Terrible\n";
        let recs = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].health, HealthStatus::Good);
    }

    #[test]
    fn non_numeric_earn_becomes_nan() {
        let recs = parse_csv("Earn,Health\nabc,Fair\n".as_bytes()).unwrap();
        assert!(recs[0].earnings.is_nan());
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_csv("Income,Health\n1,Poor\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("Earn")));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CsvFile::new("does/not/exist.csv").fetch().unwrap_err();
        match err {
            DataError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn location_picks_source_kind() {
        assert_eq!(source_for("https://example.org/df.csv").describe(), "https://example.org/df.csv");
        assert_eq!(source_for("df.csv").describe(), "df.csv");
    }
}
