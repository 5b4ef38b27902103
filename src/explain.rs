//! Static talking points for a prediction.
//!
//! These rules read the raw profile only. They are a fixed heuristic and are
//! not derived from the model's decision boundary or its feature importances,
//! so a rule can fire for a customer the model scores poorly.

use crate::profile::CustomerProfile;

pub struct ExplanationRule {
    pub applies: fn(&CustomerProfile) -> bool,
    pub message: &'static str,
}

/// Rules in display order.
pub static RULES: &[ExplanationRule] = &[
    ExplanationRule {
        applies: |p| p.balance > 2000.0,
        message: "High account balance increases likelihood of subscription",
    },
    ExplanationRule {
        applies: |p| p.campaign <= 2,
        message: "Lower number of campaign contacts improves success rate",
    },
    ExplanationRule {
        applies: |p| !p.housing,
        message: "No housing loan reduces financial burden",
    },
    ExplanationRule {
        applies: |p| !p.loan,
        message: "No personal loan indicates lower customer risk",
    },
];

pub const FALLBACK: &str = "Prediction driven by combined customer profile patterns.";

/// Messages of every matching rule, or the fallback alone when none match.
pub fn explain(profile: &CustomerProfile) -> Vec<&'static str> {
    explain_with(RULES, profile)
}

/// Same as [`explain`], over a caller-supplied rule table.
pub fn explain_with(rules: &[ExplanationRule], profile: &CustomerProfile) -> Vec<&'static str> {
    let reasons: Vec<_> = rules
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| rule.message)
        .collect();

    if reasons.is_empty() {
        vec![FALLBACK]
    } else {
        reasons
    }
}
