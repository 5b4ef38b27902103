use deposit_predictor::{FeatureSchema, ModelArtifact};
use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use ndarray::{Array1, Array2};

/// Training columns, including one-hot columns the form never fills.
pub const COLUMNS: [&str; 8] = [
    "age",
    "balance",
    "campaign",
    "previous",
    "housing_yes",
    "loan_yes",
    "job_retired",
    "poutcome_success",
];

pub const IMPORTANCES: [f64; 8] = [0.14, 0.31, 0.12, 0.08, 0.16, 0.09, 0.05, 0.05];

/// Deterministic toy data: subscribers hold large balances, few contacts and
/// mostly no loans; non-subscribers the opposite.
pub fn training_data() -> (Array2<f64>, Array1<usize>) {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..40u32 {
        let k = f64::from(i);
        let odd = f64::from(i % 2);
        rows.extend_from_slice(&[
            30.0 + (k % 25.0),
            3000.0 + 120.0 * k,
            1.0 + (k % 2.0),
            1.0 + (k % 3.0),
            if i % 7 == 0 { 1.0 } else { 0.0 },
            if i % 9 == 0 { 1.0 } else { 0.0 },
            odd,
            1.0 - odd,
        ]);
        labels.push(1);

        rows.extend_from_slice(&[
            22.0 + (k % 40.0),
            50.0 + 15.0 * k,
            4.0 + (k % 5.0),
            k % 2.0,
            if i % 6 == 0 { 0.0 } else { 1.0 },
            if i % 5 == 0 { 0.0 } else { 1.0 },
            odd,
            0.0,
        ]);
        labels.push(0);
    }
    let x = Array2::from_shape_vec((labels.len(), COLUMNS.len()), rows).unwrap();
    (x, Array1::from_vec(labels))
}

pub fn trained_artifact() -> ModelArtifact {
    let (x, y) = training_data();
    let model: GaussianNb<f64, usize> = GaussianNb::params().fit(&Dataset::new(x, y)).unwrap();
    ModelArtifact::new(model, FeatureSchema::new(COLUMNS), IMPORTANCES.to_vec()).unwrap()
}
