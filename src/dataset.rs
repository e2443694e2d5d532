use std::path::Path;

use anyhow::{bail, Context, Result};
use ndarray::Array2;

/// Side length of a training image; every sample is a flattened 28x28
/// grayscale matrix.
pub const IMAGE_SIDE: u32 = 28;
pub const N_FEATURES: usize = (IMAGE_SIDE * IMAGE_SIDE) as usize;

/// The bundled training set: parallel (features, labels) of equal length,
/// loaded once at startup and immutable afterwards. Features are pixel
/// intensities already normalized to `[0, 1]`.
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Load the dataset from CSV: each row is `label,p0,p1,...,p783` with pixel
/// values in `[0, 255]`. Any malformed row is fatal; the caller treats every
/// error here as a startup abort.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;

    let mut pixels = Vec::new();
    let mut labels = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading dataset row {i}"))?;
        if record.len() != N_FEATURES + 1 {
            bail!(
                "dataset row {i}: expected {} columns (label + {N_FEATURES} pixels), got {}",
                N_FEATURES + 1,
                record.len()
            );
        }
        labels.push(record[0].to_string());
        for field in record.iter().skip(1) {
            let value: f64 = field
                .trim()
                .parse()
                .with_context(|| format!("dataset row {i}: bad pixel value {field:?}"))?;
            pixels.push(value / 255.0);
        }
    }

    if labels.is_empty() {
        bail!("dataset {} contains no samples", path.display());
    }

    let features = Array2::from_shape_vec((labels.len(), N_FEATURES), pixels)
        .context("assembling feature matrix")?;

    Ok(Dataset { features, labels })
}
