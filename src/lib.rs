pub mod artifacts;
pub mod classifier;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod handlers;
pub mod models;
pub mod preprocess;
pub mod scaler;
