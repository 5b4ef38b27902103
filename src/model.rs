use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use linfa_bayes::NaiveBayes;
use ndarray::Array1;
use rmp_serde::{decode::from_read, encode::write_named};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::features::{FeatureRow, FeatureSchema};

/// Number of classes every [`Classifier`] predicts over.
pub const CLASS_COUNT: usize = 2;

/// A binary classifier plus the schema and importances it was trained with.
pub trait Classifier {
    fn feature_schema(&self) -> &FeatureSchema;

    /// Importance per schema column, in schema order.
    fn feature_importances(&self) -> &[f64];

    /// Predicted class label, `0` or `1`.
    fn predict(&self, row: &FeatureRow<'_>) -> Result<usize>;

    /// Probability per class, indexed by class label.
    fn predict_proba(&self, row: &FeatureRow<'_>) -> Result<Vec<f64>>;
}

/// Pre-trained model loaded from a MessagePack artifact.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    feature_names: FeatureSchema,
    feature_importances: Vec<f64>,
    model: GaussianNb<f64, usize>,
}

impl ModelArtifact {
    pub const ALGORITHM: &'static str = "Gaussian Naive Bayes";
    pub const TASK: &'static str = "Classification";
    pub const OUTPUT: &'static str = "Probability";

    /// Bundles an already fitted model with its training schema.
    pub fn new(
        model: GaussianNb<f64, usize>,
        feature_names: FeatureSchema,
        feature_importances: Vec<f64>,
    ) -> Result<Self> {
        let artifact = ModelArtifact {
            feature_names,
            feature_importances,
            model,
        };
        artifact.check_importances()?;
        Ok(artifact)
    }

    fn check_importances(&self) -> Result<()> {
        if self.feature_importances.len() != self.feature_names.len() {
            return Err(Error::ImportanceMismatch {
                names: self.feature_names.len(),
                importances: self.feature_importances.len(),
            });
        }
        Ok(())
    }

    /// Saves the model to a binary `.msgpack` file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write_named(&mut writer, self)?;
        writer.flush().map_err(|source| Error::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote model artifact to {:?}", path);
        Ok(())
    }

    /// Loads the model from a binary `.msgpack` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::ArtifactMissing {
                path: path.to_path_buf(),
            },
            _ => Error::ArtifactIo {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let reader = BufReader::new(file);
        let artifact: ModelArtifact = from_read(reader).map_err(|source| Error::ArtifactDecode {
            path: path.to_path_buf(),
            source,
        })?;
        artifact.check_importances()?;

        info!(
            "Loaded model from {:?} ({} features)",
            path,
            artifact.feature_names.len()
        );
        Ok(artifact)
    }
}

impl Classifier for ModelArtifact {
    fn feature_schema(&self) -> &FeatureSchema {
        &self.feature_names
    }

    fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }

    fn predict(&self, row: &FeatureRow<'_>) -> Result<usize> {
        let input = row.to_array();
        let labels: Array1<usize> = self.model.predict(&input);
        labels.first().copied().ok_or(Error::EmptyPrediction)
    }

    fn predict_proba(&self, row: &FeatureRow<'_>) -> Result<Vec<f64>> {
        let input = row.to_array();
        let (proba, classes) = self.model.predict_proba(input.view());

        // A class the model never saw during fitting has probability zero.
        let per_class = (0..CLASS_COUNT)
            .map(|class| {
                classes
                    .iter()
                    .position(|&c| *c == class)
                    .map_or(0.0, |col| proba[[0, col]])
            })
            .collect();
        Ok(per_class)
    }
}
