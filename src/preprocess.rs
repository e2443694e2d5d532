use image::imageops::FilterType;
use ndarray::Array1;

use crate::dataset::{IMAGE_SIDE, N_FEATURES};
use crate::error::PredictError;

/// Turn an uploaded image into the raw feature vector the model was trained
/// on: decode, grayscale, resize to 28x28 with triangle interpolation, scale
/// intensities to `[0, 1]`, flatten row-major. The output length is always
/// `N_FEATURES` whatever the upload's dimensions or channel count.
pub fn image_to_features(bytes: &[u8]) -> Result<Array1<f64>, PredictError> {
    let decoded = image::load_from_memory(bytes)?;
    let gray = image::imageops::resize(
        &decoded.to_luma8(),
        IMAGE_SIDE,
        IMAGE_SIDE,
        FilterType::Triangle,
    );

    let mut features = Array1::zeros(N_FEATURES);
    for (i, pixel) in gray.pixels().enumerate() {
        features[i] = f64::from(pixel.0[0]) / 255.0;
    }
    Ok(features)
}
