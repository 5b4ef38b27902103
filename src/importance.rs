use crate::model::Classifier;

pub const DEFAULT_TOP_N: usize = 8;

/// The `n` most important features, highest first.
///
/// Ties keep schema order. Importances are reported as the model gives them.
pub fn top_features<'a>(names: &'a [String], importances: &[f64], n: usize) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<_> = names
        .iter()
        .map(String::as_str)
        .zip(importances.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

pub fn model_top_features<C: Classifier + ?Sized>(model: &C, n: usize) -> Vec<(&str, f64)> {
    top_features(
        model.feature_schema().names(),
        model.feature_importances(),
        n,
    )
}
