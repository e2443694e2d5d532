use serde::{Deserialize, Serialize};

/// Bijective mapping between class labels and dense integer codes `0..K-1`.
/// Codes follow the sorted order of the distinct labels, so the mapping is
/// stable across runs for the same dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learn the distinct labels and return the encoded codes for the input
    /// in one pass.
    pub fn fit_transform(labels: &[String]) -> (Self, Vec<usize>) {
        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();
        let encoder = Self { classes };
        let codes = labels
            .iter()
            .map(|label| {
                // Every input label is in `classes` by construction.
                encoder
                    .classes
                    .binary_search(label)
                    .unwrap_or_default()
            })
            .collect();
        (encoder, codes)
    }

    /// Map a class code back to its label. `None` when the code is not a
    /// valid index, which would mean the classifier produced a code outside
    /// the encoder it was trained with.
    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct classes, K.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn codes_are_dense_and_sorted() {
        let (encoder, codes) = LabelEncoder::fit_transform(&labels(&["hu", "ha", "hi", "ha"]));
        assert_eq!(encoder.classes(), &labels(&["ha", "hi", "hu"]));
        assert_eq!(codes, vec![2, 0, 1, 0]);
    }

    #[test]
    fn inverse_round_trips_every_code() {
        let input = labels(&["ha", "hu", "hi"]);
        let (encoder, codes) = LabelEncoder::fit_transform(&input);
        for (label, code) in input.iter().zip(codes) {
            assert_eq!(encoder.inverse_transform(code), Some(label.as_str()));
        }
    }

    #[test]
    fn out_of_range_code_is_none() {
        let (encoder, _) = LabelEncoder::fit_transform(&labels(&["ha"]));
        assert!(encoder.inverse_transform(1).is_none());
    }
}
