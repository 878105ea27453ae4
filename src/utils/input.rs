use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::data::reading::{SensorReading, UserProfile};
use crate::error::InputError;

pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;

/// Prompt until the line parses. An empty line takes `default`.
pub fn get_input<T, R, W>(input: &mut R, out: &mut W, prompt: &str, default: T) -> Result<T, InputError>
where
    T: FromStr + Copy + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{} [{}]: ", prompt, default)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Please enter a valid number")?,
        }
    }
}

fn get_age<R: BufRead, W: Write>(input: &mut R, out: &mut W, default: u32) -> Result<u32, InputError> {
    loop {
        let age = get_input(input, out, "Enter Age (years)", default)?;
        if AGE_RANGE.contains(&age) {
            return Ok(age);
        }
        writeln!(
            out,
            "Age must be between {} and {}",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        )?;
    }
}

/// Collect the full form: age first, then sensor values.
pub fn read_form<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<(SensorReading, UserProfile), InputError> {
    let d = SensorReading::default();

    writeln!(out, "User Information")?;
    let age = get_age(input, out, UserProfile::default().age)?;

    writeln!(out, "\nSensor Inputs")?;
    let temperature = get_input(input, out, "Temperature (°C)", d.temperature)?;
    let humidity = get_input(input, out, "Humidity (%)", d.humidity)?;
    let no2 = get_input(input, out, "NO2 (ppb)", d.no2)?;
    let o3 = get_input(input, out, "O3 (ppb)", d.o3)?;
    let co = get_input(input, out, "CO (ppm)", d.co)?;
    let pm25 = get_input(input, out, "PM2.5 (µg/m³)", d.pm25)?;
    let pm10 = get_input(input, out, "PM10 (µg/m³)", d.pm10)?;

    Ok((
        SensorReading {
            no2,
            o3,
            co,
            pm25,
            pm10,
            temperature,
            humidity,
        },
        UserProfile { age },
    ))
}
