use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Per-feature standardization to zero mean / unit variance, with the
/// statistics computed once over the training set. The same flattened pixel
/// order must be used at fit and at transform time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Compute per-column mean and (population) standard deviation.
    /// `None` when the matrix has no rows. Zero-variance columns get a
    /// divisor of 1.0 so constant features pass through centered.
    pub fn fit(x: &Array2<f64>) -> Option<Self> {
        let mean = x.mean_axis(Axis(0))?;
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s == 0.0 { 1.0 } else { s });
        Some(Self { mean, std })
    }

    /// Standardize a single feature vector.
    pub fn transform(&self, x: &Array1<f64>) -> Array1<f64> {
        (x - &self.mean) / &self.std
    }

    /// Standardize a whole sample matrix (rows are samples).
    pub fn transform_all(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mean) / &self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn transformed_columns_have_zero_mean_unit_std() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let scaler = StandardScaler::fit(&x).unwrap();
        let scaled = scaler.transform_all(&x);

        for col in scaled.columns() {
            let mean = col.mean().unwrap();
            let std = col.std(0.0);
            assert!(mean.abs() < 1e-12, "mean was {mean}");
            assert!((std - 1.0).abs() < 1e-12, "std was {std}");
        }
    }

    #[test]
    fn single_vector_matches_matrix_transform() {
        let x = array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
        let scaler = StandardScaler::fit(&x).unwrap();
        let whole = scaler.transform_all(&x);
        let row = scaler.transform(&x.row(1).to_owned());
        assert_eq!(row, whole.row(1).to_owned());
    }

    #[test]
    fn constant_column_is_centered_not_divided() {
        let x = array![[5.0, 1.0], [5.0, 3.0]];
        let scaler = StandardScaler::fit(&x).unwrap();
        let scaled = scaler.transform(&array![5.0, 2.0]);
        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    fn empty_matrix_does_not_fit() {
        let x = Array2::<f64>::zeros((0, 4));
        assert!(StandardScaler::fit(&x).is_none());
    }
}
