use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Classifier;
use crate::profile::CustomerProfile;

/// Label of the "subscribes" class.
pub const POSITIVE_CLASS: usize = 1;

/// Qualitative band used to phrase the confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    pub fn from_percent(confidence: u8) -> Self {
        match confidence {
            70.. => ConfidenceBand::High,
            40..=69 => ConfidenceBand::Moderate,
            _ => ConfidenceBand::Low,
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            ConfidenceBand::High => "High confidence customer - prioritize outreach",
            ConfidenceBand::Moderate => "Moderate confidence - targeted follow-up recommended",
            ConfidenceBand::Low => "Low confidence - avoid aggressive marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: usize,
    /// Probability of [`POSITIVE_CLASS`].
    pub probability: f64,
    /// `probability` as a rounded percentage.
    pub confidence: u8,
}

impl Prediction {
    pub fn new(label: usize, probability: f64) -> Self {
        let confidence = (probability * 100.0).round().clamp(0.0, 100.0) as u8;
        Prediction {
            label,
            probability,
            confidence,
        }
    }

    pub fn subscribes(&self) -> bool {
        self.label == POSITIVE_CLASS
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_percent(self.confidence)
    }
}

/// Runs profiles through an injected model.
pub struct Predictor<'m, C: Classifier + ?Sized> {
    model: &'m C,
}

impl<'m, C: Classifier + ?Sized> Predictor<'m, C> {
    /// Wraps a loaded model; the predictor only ever borrows it.
    pub fn new(model: &'m C) -> Self {
        Predictor { model }
    }

    /// The model this predictor scores with.
    pub fn model(&self) -> &'m C {
        self.model
    }

    /// Vectorizes the profile once and asks the model for both the label and
    /// the class probabilities on that same row.
    pub fn predict(&self, profile: &CustomerProfile) -> Result<Prediction> {
        let row = self.model.feature_schema().vectorize(profile);
        let label = self.model.predict(&row)?;
        let proba = self.model.predict_proba(&row)?;
        let probability = proba
            .get(POSITIVE_CLASS)
            .copied()
            .ok_or(Error::MissingClass {
                class: POSITIVE_CLASS,
            })?;

        let prediction = Prediction::new(label, probability);
        debug!(
            "label={} probability={:.4} confidence={}",
            prediction.label, prediction.probability, prediction.confidence
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FeatureRow, FeatureSchema};
    use std::cell::RefCell;

    /// Records every row it is asked about.
    struct RecordingModel {
        schema: FeatureSchema,
        proba: Vec<f64>,
        seen: RefCell<Vec<Vec<f64>>>,
    }

    impl RecordingModel {
        fn new(proba: Vec<f64>) -> Self {
            RecordingModel {
                schema: FeatureSchema::new(["age", "balance", "housing_yes", "poutcome_success"]),
                proba,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Classifier for RecordingModel {
        fn feature_schema(&self) -> &FeatureSchema {
            &self.schema
        }

        fn feature_importances(&self) -> &[f64] {
            &[0.25, 0.25, 0.25, 0.25]
        }

        fn predict(&self, row: &FeatureRow<'_>) -> Result<usize> {
            self.seen.borrow_mut().push(row.values().to_vec());
            Ok(usize::from(self.proba[1] >= 0.5))
        }

        fn predict_proba(&self, row: &FeatureRow<'_>) -> Result<Vec<f64>> {
            self.seen.borrow_mut().push(row.values().to_vec());
            Ok(self.proba.clone())
        }
    }

    #[test]
    fn both_calls_see_the_same_row() {
        let model = RecordingModel::new(vec![0.2, 0.8]);
        let profile = CustomerProfile {
            housing: true,
            balance: 2500.0,
            ..Default::default()
        };
        let prediction = Predictor::new(&model).predict(&profile).expect("predict");

        let seen = model.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[0], vec![35.0, 2500.0, 1.0, 0.0]);
        assert_eq!(prediction.label, 1);
        assert_eq!(prediction.confidence, 80);
    }

    #[test]
    fn missing_positive_probability_is_an_error() {
        let model = RecordingModel::new(vec![1.0]);
        let err = Predictor::new(&model).predict(&CustomerProfile::default());
        assert!(matches!(err, Err(Error::MissingClass { class: 1 })));
    }

    #[test]
    fn confidence_bands() {
        assert_eq!(Prediction::new(1, 0.85).band(), ConfidenceBand::High);
        assert_eq!(Prediction::new(1, 0.55).band(), ConfidenceBand::Moderate);
        assert_eq!(Prediction::new(0, 0.10).band(), ConfidenceBand::Low);
    }

    #[test]
    fn band_edges() {
        assert_eq!(ConfidenceBand::from_percent(70), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percent(69), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_percent(40), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_percent(39), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_percent(100), ConfidenceBand::High);
    }

    #[test]
    fn confidence_rounds_to_nearest_percent() {
        assert_eq!(Prediction::new(0, 0.0).confidence, 0);
        assert_eq!(Prediction::new(1, 0.696).confidence, 70);
        assert_eq!(Prediction::new(1, 1.0).confidence, 100);
    }
}
