//! # deposit-predictor 🏦
//!
//! Decision support for term-deposit marketing campaigns, driven by a
//! pre-trained binary classifier.
//!
//! A customer profile (age, balance, housing and personal loan flags, contact
//! counts) is aligned to the column order the model was trained on, scored with
//! [`linfa-bayes`](https://crates.io/crates/linfa-bayes), and rendered together
//! with the model's most important features and a few fixed talking points.
//!
//! ## Features
//! - Model artifact persistence with `rmp-serde` (MessagePack)
//! - Schema-aligned feature rows with zero-filled unknown columns
//! - Label + probability prediction with confidence bands
//! - Top-N feature importance chart
//! - Rule-based explanations over the raw profile
//! - Interactive terminal form and CSV batch scoring
//! - Benchmarkable with [Criterion](https://crates.io/crates/criterion)
//!
//! ## Example
//! ```no_run
//! use std::path::Path;
//! use deposit_predictor::{CustomerProfile, ModelArtifact, Predictor};
//!
//! let model = ModelArtifact::load_from_file(Path::new("model.msgpack"))?;
//! let prediction = Predictor::new(&model).predict(&CustomerProfile::default())?;
//! println!(
//!     "label: {}, P(subscribe): {:.2}, confidence: {}%",
//!     prediction.label, prediction.probability, prediction.confidence
//! );
//! # Ok::<(), deposit_predictor::Error>(())
//! ```

pub mod batch;
pub mod error;
pub mod explain;
pub mod features;
pub mod form;
pub mod importance;
pub mod model;
pub mod predictor;
pub mod profile;
pub mod report;

pub use error::{Error, Result};
pub use features::{FeatureRow, FeatureSchema};
pub use model::{Classifier, ModelArtifact};
pub use predictor::{ConfidenceBand, Prediction, Predictor};
pub use profile::CustomerProfile;
pub use report::{ConsoleRenderer, Report};

/// Scores a profile and gathers everything the console report shows.
pub fn build_report<'m, C: Classifier + ?Sized>(
    predictor: &Predictor<'m, C>,
    profile: &CustomerProfile,
    top_n: usize,
) -> Result<Report<'m>> {
    let prediction = predictor.predict(profile)?;
    Ok(Report {
        prediction,
        top_features: importance::model_top_features(predictor.model(), top_n),
        explanations: explain::explain(profile),
        balance: profile.balance,
    })
}
