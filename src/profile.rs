use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;
pub const MIN_CAMPAIGN: u32 = 1;

/// Raw attributes collected for one customer, before vectorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub age: u32,
    pub balance: f64,
    /// Customer holds a housing loan.
    #[serde(with = "yes_no")]
    pub housing: bool,
    /// Customer holds a personal loan.
    #[serde(with = "yes_no")]
    pub loan: bool,
    /// Contacts made during the current campaign.
    pub campaign: u32,
    /// Contacts made before the current campaign.
    pub previous: u32,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        CustomerProfile {
            age: 35,
            balance: 1000.0,
            housing: false,
            loan: false,
            campaign: 1,
            previous: 0,
        }
    }
}

/// A profile field the input form would reject.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("age {0} is outside 18..=100")]
    AgeOutOfRange(u32),

    #[error("campaign contacts must be at least 1, got {0}")]
    CampaignTooLow(u32),

    #[error("balance must be a finite number")]
    NonFiniteBalance,

    #[error("expected yes or no, got {0:?}")]
    InvalidFlag(String),
}

impl CustomerProfile {
    /// Checks the same bounds the input form enforces.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        if self.campaign < MIN_CAMPAIGN {
            return Err(ProfileError::CampaignTooLow(self.campaign));
        }
        if !self.balance.is_finite() {
            return Err(ProfileError::NonFiniteBalance);
        }
        Ok(())
    }

    /// Value of a raw-mapped feature column, or `None` when the profile
    /// does not produce that column.
    pub fn raw_feature(&self, name: &str) -> Option<f64> {
        match name {
            "age" => Some(self.age as f64),
            "balance" => Some(self.balance),
            "campaign" => Some(self.campaign as f64),
            "previous" => Some(self.previous as f64),
            "housing_yes" => Some(indicator(self.housing)),
            "loan_yes" => Some(indicator(self.loan)),
            _ => None,
        }
    }
}

/// Columns a profile can fill; every other schema column is zero.
pub const RAW_FEATURES: [&str; 6] = [
    "age",
    "balance",
    "campaign",
    "previous",
    "housing_yes",
    "loan_yes",
];

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Parses a yes/no answer, case-insensitively.
pub fn parse_flag(input: &str) -> Result<bool, ProfileError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(ProfileError::InvalidFlag(input.trim().to_string())),
    }
}

/// The `yes`/`no` spelling of a flag, as shown in prompts and CSV output.
pub fn flag_label(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::flag_label(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_flag(&raw).map_err(D::Error::custom)
    }
}
