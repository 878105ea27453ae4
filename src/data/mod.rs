pub mod batch;
pub mod features;
pub mod preprocessing;
pub mod reading;
