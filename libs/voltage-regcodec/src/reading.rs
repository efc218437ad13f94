//! Register pair readings
//!
//! Field names on the wire follow the meter export format:
//! `register_pair`, `LSR`, `MSR`, `value`.

use serde::{Deserialize, Serialize};

use crate::decoder::RegisterPairDecoder;

/// One row of raw register contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPair {
    /// Opaque identifier, e.g. "40001-40002"
    #[serde(rename = "register_pair")]
    pub label: String,
    /// Least significant register
    #[serde(rename = "LSR")]
    pub low: i16,
    /// Most significant register
    #[serde(rename = "MSR")]
    pub high: i16,
}

impl RegisterPair {
    pub fn new(label: impl Into<String>, low: i16, high: i16) -> Self {
        Self {
            label: label.into(),
            low,
            high,
        }
    }

    /// Decode this pair with the given strategy
    pub fn decode_with(&self, decoder: &dyn RegisterPairDecoder) -> f32 {
        decoder.decode(self.low, self.high)
    }
}

/// A register pair plus its decoded value, if a decode step ran
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    #[serde(flatten)]
    pub pair: RegisterPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
}

impl Reading {
    pub fn raw(pair: RegisterPair) -> Self {
        Self { pair, value: None }
    }

    pub fn decoded(pair: RegisterPair, value: f32) -> Self {
        Self {
            pair,
            value: Some(value),
        }
    }

    pub fn label(&self) -> &str {
        &self.pair.label
    }

    pub fn is_decoded(&self) -> bool {
        self.value.is_some()
    }
}
