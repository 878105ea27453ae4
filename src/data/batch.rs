use csv::{Position, Reader};
use serde::Deserialize;
use std::path::Path;

use crate::data::reading::{SensorReading, UserProfile};
use crate::error::InputError;

/// One CSV row: `age,temperature,humidity,no2,o3,co,pm25,pm10`.
#[derive(Debug, Deserialize)]
struct BatchRecord {
    age: u32,
    temperature: f64,
    humidity: f64,
    no2: f64,
    o3: f64,
    co: f64,
    pm25: f64,
    pm10: f64,
}

impl From<BatchRecord> for (SensorReading, UserProfile) {
    fn from(r: BatchRecord) -> Self {
        (
            SensorReading {
                no2: r.no2,
                o3: r.o3,
                co: r.co,
                pm25: r.pm25,
                pm10: r.pm10,
                temperature: r.temperature,
                humidity: r.humidity,
            },
            UserProfile { age: r.age },
        )
    }
}

/// A parsed row, or the parse failure for it. `line` is the 1-based physical
/// line the row starts on.
pub struct BatchRow {
    pub line: u64,
    pub result: Result<(SensorReading, UserProfile), InputError>,
}

pub fn open_batch(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// csv reports a record at the position where the previous one ended, which
/// sits before any blank lines it skipped. Step over them.
fn record_line(text: &str, pos: &Position) -> u64 {
    let skipped = text
        .as_bytes()
        .get(pos.byte() as usize..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + skipped as u64
}

/// Parse every row. Bad rows are returned as errors in place so the caller
/// decides whether to stop.
pub fn read_rows(text: &str) -> Vec<BatchRow> {
    let mut rdr = Reader::from_reader(text.as_bytes());
    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return vec![BatchRow {
                line: 1,
                result: Err(e.into()),
            }]
        }
    };

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = match result {
            Ok(record) => BatchRow {
                line: record.position().map(|p| record_line(text, p)).unwrap_or(0),
                result: record
                    .deserialize::<BatchRecord>(Some(&headers))
                    .map(Into::into)
                    .map_err(InputError::from),
            },
            Err(e) => BatchRow {
                line: e.position().map(|p| record_line(text, p)).unwrap_or(0),
                result: Err(e.into()),
            },
        };
        rows.push(row);
    }
    rows
}
