use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::advice::{adjust_suggestion, categorize, AqiCategory, MajorPollutant};
use crate::config::OutputFormat;
use crate::data::batch::BatchRow;
use crate::data::features::assemble;
use crate::data::reading::{SensorReading, UserProfile};
use crate::error::{AqiError, PredictionError};
use crate::model::AqiPredictor;

/// Everything shown to the user after one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub predicted_aqi: f64,
    pub category: AqiCategory,
    pub major_pollutant: MajorPollutant,
    pub suggestion: String,
}

/// Run one full prediction: assemble, predict, categorize, adjust for age.
pub fn assess<P: AqiPredictor + ?Sized>(
    predictor: &P,
    reading: &SensorReading,
    profile: &UserProfile,
) -> Result<Assessment, PredictionError> {
    let features = assemble(reading);
    let predicted_aqi = predictor.predict(&features)?;

    let (category, base) = categorize(predicted_aqi);
    let suggestion = adjust_suggestion(base, profile.age);
    let major_pollutant = MajorPollutant::from(reading);

    tracing::debug!(
        predicted_aqi,
        category = category.name(),
        major = major_pollutant.pollutant.as_str(),
        age = profile.age,
        "assessment complete"
    );

    Ok(Assessment {
        predicted_aqi,
        category,
        major_pollutant,
        suggestion,
    })
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted AQI: {:.2}", self.predicted_aqi)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(
            f,
            "Major Pollutant: {} ({:?})",
            self.major_pollutant.pollutant, self.major_pollutant.value
        )?;
        write!(f, "Suggestion: {}", self.suggestion)
    }
}

/// Write one assessment in the chosen format.
pub fn write_assessment<W: Write>(
    out: &mut W,
    assessment: &Assessment,
    format: OutputFormat,
) -> Result<(), AqiError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "\nPredicted AQI & Suggestions")?;
            writeln!(out, "{}", assessment)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, assessment)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Assess batch rows in order and write each result. A bad row stops the run
/// unless `keep_going` is set, in which case it is logged and skipped.
/// Returns the number of assessments written.
pub fn assess_batch<P: AqiPredictor + ?Sized, W: Write>(
    predictor: &P,
    rows: Vec<BatchRow>,
    keep_going: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, AqiError> {
    let mut written = 0;
    for row in rows {
        let (reading, profile) = match row.result {
            Ok(parsed) => parsed,
            Err(e) if keep_going => {
                tracing::warn!(line = row.line, "skipping row: {}", e);
                continue;
            }
            Err(source) => {
                return Err(AqiError::BatchRow {
                    line: row.line,
                    source,
                })
            }
        };
        let assessment =
            assess(predictor, &reading, &profile).map_err(|source| AqiError::BatchPrediction {
                line: row.line,
                source,
            })?;
        write_assessment(out, &assessment, format)?;
        if format == OutputFormat::Text {
            writeln!(out)?;
        }
        written += 1;
    }
    Ok(written)
}
