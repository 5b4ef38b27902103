//! CSV scoring of many profiles through one predictor.

use serde::Serialize;
use std::io::{Read, Write};
use tracing::info;

use crate::error::{Error, Result};
use crate::model::Classifier;
use crate::predictor::Predictor;
use crate::profile::{CustomerProfile, flag_label};

#[derive(Debug, Serialize)]
struct ScoredRecord {
    age: u32,
    balance: f64,
    housing: &'static str,
    loan: &'static str,
    campaign: u32,
    previous: u32,
    label: usize,
    probability: f64,
    confidence: u8,
}

/// Scores every CSV row and writes it back with its prediction appended.
///
/// Nothing reaches `output` unless every row scores. Returns the number of
/// rows scored.
pub fn score_csv<C, R, W>(predictor: &Predictor<'_, C>, input: R, mut output: W) -> Result<usize>
where
    C: Classifier + ?Sized,
    R: Read,
    W: Write,
{
    let mut rdr = csv::Reader::from_reader(input);
    let mut scored_csv = Vec::new();
    let mut wtr = csv::Writer::from_writer(&mut scored_csv);
    let headers = rdr.headers()?.clone();
    let mut scored = 0;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        let profile: CustomerProfile = record.deserialize(Some(&headers))?;
        profile
            .validate()
            .map_err(|source| Error::InvalidRow { line, source })?;

        let prediction = predictor.predict(&profile)?;
        wtr.serialize(ScoredRecord {
            age: profile.age,
            balance: profile.balance,
            housing: flag_label(profile.housing),
            loan: flag_label(profile.loan),
            campaign: profile.campaign,
            previous: profile.previous,
            label: prediction.label,
            probability: prediction.probability,
            confidence: prediction.confidence,
        })?;
        scored += 1;
    }

    wtr.flush().map_err(csv::Error::from)?;
    drop(wtr);

    output
        .write_all(&scored_csv)
        .and_then(|()| output.flush())
        .map_err(csv::Error::from)?;
    info!("Scored {} customers", scored);
    Ok(scored)
}
