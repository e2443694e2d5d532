use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::classifier::{SgdClassifier, SgdConfig};
use crate::dataset::Dataset;
use crate::encoder::LabelEncoder;
use crate::scaler::StandardScaler;

pub const MODEL_FILE: &str = "sgd_model.json";
pub const ENCODER_FILE: &str = "label_encoder.json";
pub const SCALER_FILE: &str = "scaler.json";

/// The fitted model bundle: built once at startup, then shared read-only
/// across all request handlers for the life of the process. Nothing mutates
/// it after fitting.
pub struct Artifacts {
    pub scaler: StandardScaler,
    pub encoder: LabelEncoder,
    pub classifier: SgdClassifier,
}

impl Artifacts {
    /// Fit encoder, scaler and classifier on the full dataset.
    pub fn train(dataset: &Dataset, config: &SgdConfig) -> Result<Self> {
        let (encoder, y) = LabelEncoder::fit_transform(&dataset.labels);
        let scaler = StandardScaler::fit(&dataset.features)
            .context("cannot fit scaler on an empty dataset")?;
        let scaled = scaler.transform_all(&dataset.features);
        let classifier = SgdClassifier::fit(&scaled, &y, encoder.len(), config);

        let mut correct = 0usize;
        for (row, &label) in scaled.rows().into_iter().zip(&y) {
            if classifier.predict(row).ok() == Some(label) {
                correct += 1;
            }
        }
        log::info!(
            "trained on {} samples, {} classes, training accuracy {:.1}%",
            dataset.len(),
            encoder.len(),
            100.0 * correct as f64 / dataset.len() as f64
        );

        Ok(Self {
            scaler,
            encoder,
            classifier,
        })
    }

    /// Persist all three artifacts to `dir`, overwriting any existing files.
    /// These are write-only snapshots; the server keeps using the in-memory
    /// copies and never reads them back.
    pub fn persist(&self, dir: &Path) -> Result<()> {
        write_json(&dir.join(MODEL_FILE), &self.classifier)?;
        write_json(&dir.join(ENCODER_FILE), &self.encoder)?;
        write_json(&dir.join(SCALER_FILE), &self.scaler)?;
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating artifact {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), value)
        .with_context(|| format!("serializing artifact {}", path.display()))?;
    Ok(())
}
