use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::data::reading::{SensorReading, UserProfile};

#[derive(Debug, Parser)]
#[command(name = "aqi_advisor", version, about = "Predict AQI and get a health suggestion")]
pub struct Config {
    /// Trained model artifact (bincode)
    #[arg(long, env = "AQI_MODEL_PATH", default_value = "aqi_model.bin")]
    pub model: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for each reading (default)
    Interactive,
    /// Predict from command-line values
    Predict(PredictArgs),
    /// Predict every row of a CSV file
    Batch {
        /// CSV with headers age,temperature,humidity,no2,o3,co,pm25,pm10
        path: PathBuf,
        /// Skip rows that fail to parse instead of stopping
        #[arg(long)]
        keep_going: bool,
    },
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: u32,
    /// °C
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub temperature: f64,
    /// %
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub humidity: f64,
    /// ppb
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub no2: f64,
    /// ppb
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub o3: f64,
    /// ppm
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub co: f64,
    /// µg/m³
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub pm25: f64,
    /// µg/m³
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    pub pm10: f64,
}

impl PredictArgs {
    pub fn split(&self) -> (SensorReading, UserProfile) {
        (
            SensorReading {
                no2: self.no2,
                o3: self.o3,
                co: self.co,
                pm25: self.pm25,
                pm10: self.pm10,
                temperature: self.temperature,
                humidity: self.humidity,
            },
            UserProfile { age: self.age },
        )
    }
}
