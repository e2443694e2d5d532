use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Training hyperparameters. The seed drives the per-epoch shuffle, so two
/// fits over the same data produce identical weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SgdConfig {
    /// L2 regularization strength.
    pub alpha: f64,
    /// Base learning rate for the decaying schedule.
    pub eta0: f64,
    /// Full passes over the training set.
    pub epochs: usize,
    pub seed: u64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self {
            alpha: 1e-4,
            eta0: 0.1,
            epochs: 50,
            seed: 42,
        }
    }
}

/// One-vs-rest linear classifier trained with stochastic gradient descent on
/// the hinge loss. One weight row and intercept per class; prediction is the
/// argmax of the per-class decision values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SgdClassifier {
    weights: Array2<f64>,
    intercepts: Array1<f64>,
    config: SgdConfig,
}

impl SgdClassifier {
    /// Fit on standardized features `x` (rows are samples) and encoded
    /// labels `y` in `0..n_classes`.
    pub fn fit(x: &Array2<f64>, y: &[usize], n_classes: usize, config: &SgdConfig) -> Self {
        let n_features = x.ncols();
        let mut weights = Array2::zeros((n_classes, n_features));
        let mut intercepts = Array1::zeros(n_classes);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..x.nrows()).collect();
        let mut t = 0.0_f64;

        for _ in 0..config.epochs {
            order.shuffle(&mut rng);
            for &i in &order {
                let xi = x.row(i);
                let eta = config.eta0 / (1.0 + config.alpha * config.eta0 * t);
                for k in 0..n_classes {
                    let target = if y[i] == k { 1.0 } else { -1.0 };
                    let margin = weights.row(k).dot(&xi) + intercepts[k];
                    let mut wk = weights.row_mut(k);
                    wk *= 1.0 - eta * config.alpha;
                    if target * margin < 1.0 {
                        wk.scaled_add(eta * target, &xi);
                        intercepts[k] += eta * target;
                    }
                }
                t += 1.0;
            }
        }

        Self {
            weights,
            intercepts,
            config: config.clone(),
        }
    }

    /// Per-class decision values `W x + b`.
    fn decision_function(&self, x: ArrayView1<f64>) -> Array1<f64> {
        self.weights.dot(&x) + &self.intercepts
    }

    /// Predict the encoded class for one standardized feature vector.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<usize, PredictError> {
        if x.len() != self.weights.ncols() {
            return Err(PredictError::Model(format!(
                "feature vector has {} values, model expects {}",
                x.len(),
                self.weights.ncols()
            )));
        }
        let scores = self.decision_function(x);
        scores
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| k)
            .ok_or_else(|| PredictError::Model("model has no classes".into()))
    }

    pub fn n_classes(&self) -> usize {
        self.weights.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Three well-separated clusters in 2-D, four points each.
    fn clusters() -> (Array2<f64>, Vec<usize>) {
        let x = array![
            [5.0, 0.1],
            [4.8, -0.2],
            [5.2, 0.0],
            [5.1, 0.3],
            [-5.0, 0.2],
            [-4.9, -0.1],
            [-5.1, 0.0],
            [-5.2, 0.2],
            [0.1, 5.0],
            [-0.2, 5.1],
            [0.0, 4.9],
            [0.3, 5.2],
        ];
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];
        (x, y)
    }

    #[test]
    fn separable_clusters_are_classified_correctly() {
        let (x, y) = clusters();
        let model = SgdClassifier::fit(&x, &y, 3, &SgdConfig::default());
        for (i, &label) in y.iter().enumerate() {
            assert_eq!(model.predict(x.row(i)).unwrap(), label, "sample {i}");
        }
    }

    #[test]
    fn same_seed_gives_identical_models() {
        let (x, y) = clusters();
        let config = SgdConfig::default();
        let a = SgdClassifier::fit(&x, &y, 3, &config);
        let b = SgdClassifier::fit(&x, &y, 3, &config);
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.intercepts, b.intercepts);
    }

    #[test]
    fn wrong_dimensionality_is_a_model_error() {
        let (x, y) = clusters();
        let model = SgdClassifier::fit(&x, &y, 3, &SgdConfig::default());
        let bad = array![1.0, 2.0, 3.0];
        assert!(model.predict(bad.view()).is_err());
    }

    #[test]
    fn single_class_always_predicts_it() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let model = SgdClassifier::fit(&x, &[0, 0], 1, &SgdConfig::default());
        assert_eq!(model.predict(array![0.0, 0.0].view()).unwrap(), 0);
    }
}
