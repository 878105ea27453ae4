//! AQI prediction and health advice.
//!
//! Sensor readings are laid out in the model's feature order, scored by a
//! pre-trained regressor, and turned into a category, a major pollutant and
//! an age-aware suggestion. The model is loaded once per process and shared
//! read-only afterwards; [`init_model`] and the C entry points below all go
//! through the same slot.

pub mod advice;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod utils;

use libc::c_char;
use std::ffi::{CStr, CString};
use std::path::Path;
use std::sync::OnceLock;

pub use advice::{AgeGroup, AqiCategory, MajorPollutant};
pub use data::features::{assemble, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use data::reading::{Pollutant, SensorReading, UserProfile};
pub use error::{AqiError, InputError, ModelError, PredictionError};
pub use model::{AqiModel, AqiPredictor};
pub use pipeline::{assess, assess_batch, write_assessment, Assessment};

static MODEL: OnceLock<AqiModel> = OnceLock::new();

/// Load the model into the process-wide slot. Later calls return the model
/// already held and ignore `path`.
pub fn init_model(path: &Path) -> Result<&'static AqiModel, ModelError> {
    if let Some(model) = MODEL.get() {
        return Ok(model);
    }
    let model = utils::io::load_model(path)?;
    Ok(MODEL.get_or_init(|| model))
}

/// The process-wide model, if [`init_model`] has succeeded.
pub fn shared_model() -> Option<&'static AqiModel> {
    MODEL.get()
}

/// Assessment handed across the C boundary. Strings are owned by the
/// struct; release with [`aqi_advisor_free_assessment`].
#[repr(C)]
pub struct AqiAssessmentFfi {
    pub predicted_aqi: f64,
    pub category: *mut c_char,
    pub major_pollutant: *mut c_char,
    pub major_pollutant_value: f64,
    pub suggestion: *mut c_char,
}

fn into_c_string(s: &str) -> Option<*mut c_char> {
    CString::new(s).ok().map(CString::into_raw)
}

impl AqiAssessmentFfi {
    fn from_assessment(a: &Assessment) -> Option<Self> {
        Some(AqiAssessmentFfi {
            predicted_aqi: a.predicted_aqi,
            category: into_c_string(a.category.name())?,
            major_pollutant: into_c_string(a.major_pollutant.pollutant.as_str())?,
            major_pollutant_value: a.major_pollutant.value,
            suggestion: into_c_string(&a.suggestion)?,
        })
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn aqi_advisor_init(model_path: *const c_char) -> bool {
    if model_path.is_null() {
        tracing::error!("aqi_advisor_init called with null model path");
        return false;
    }
    let path = unsafe { CStr::from_ptr(model_path) };
    let path = match path.to_str() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("model path is not valid UTF-8: {}", e);
            return false;
        }
    };

    match init_model(Path::new(path)) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("failed to load model: {}", e);
            false
        }
    }
}

/// Returns null if the model is not loaded or prediction fails.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn aqi_advisor_assess(
    age: u32,
    temperature: f64,
    humidity: f64,
    no2: f64,
    o3: f64,
    co: f64,
    pm25: f64,
    pm10: f64,
) -> *mut AqiAssessmentFfi {
    let Some(model) = shared_model() else {
        tracing::error!("aqi_advisor_assess called before aqi_advisor_init");
        return std::ptr::null_mut();
    };

    let reading = SensorReading {
        no2,
        o3,
        co,
        pm25,
        pm10,
        temperature,
        humidity,
    };
    match assess(model, &reading, &UserProfile { age }) {
        Ok(assessment) => match AqiAssessmentFfi::from_assessment(&assessment) {
            Some(ffi) => Box::into_raw(Box::new(ffi)),
            None => std::ptr::null_mut(),
        },
        Err(e) => {
            tracing::error!("prediction failed: {}", e);
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn aqi_advisor_free_assessment(result: *mut AqiAssessmentFfi) {
    if result.is_null() {
        return;
    }
    unsafe {
        let result = Box::from_raw(result);
        for s in [result.category, result.major_pollutant, result.suggestion] {
            if !s.is_null() {
                drop(CString::from_raw(s));
            }
        }
    }
}
