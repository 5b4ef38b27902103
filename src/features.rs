use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::profile::CustomerProfile;

/// Ordered feature columns the model was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Builds a schema from column names in training order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FeatureSchema {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Column names in training order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` when the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Aligns a profile to this schema.
    ///
    /// Each column takes the profile's raw value when it has one and zero
    /// otherwise, so one-hot columns the form never collects stay at zero.
    pub fn vectorize(&self, profile: &CustomerProfile) -> FeatureRow<'_> {
        let values = self
            .names
            .iter()
            .map(|name| profile.raw_feature(name).unwrap_or(0.0))
            .collect();
        FeatureRow {
            schema: self,
            values,
        }
    }
}

/// A single model input row, aligned to a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow<'s> {
    schema: &'s FeatureSchema,
    values: Vec<f64>,
}

impl<'s> FeatureRow<'s> {
    /// Values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of the named column, or `None` if the schema lacks it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema
            .names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s str, f64)> + '_ {
        self.schema
            .names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// The row as a `1 x n` matrix.
    pub fn to_array(&self) -> Array2<f64> {
        ArrayView1::from(self.values.as_slice())
            .insert_axis(Axis(0))
            .to_owned()
    }
}
