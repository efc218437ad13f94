//! Reading pipeline
//!
//! Wires a `RowLoader` to an optional `RegisterPairDecoder`. Without a
//! decoder the pipeline reports raw register contents.

use std::sync::Arc;

use tracing::{debug, info};

use crate::decoder::RegisterPairDecoder;
use crate::error::Result;
use crate::loader::RowLoader;
use crate::reading::{Reading, RegisterPair};

/// Load rows, optionally decode them, keep input order
pub struct ReadingPipeline<L> {
    loader: L,
    decoder: Option<Arc<dyn RegisterPairDecoder>>,
}

impl<L: RowLoader> ReadingPipeline<L> {
    /// Raw pipeline: rows are reported without decoding
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            decoder: None,
        }
    }

    /// Add a decode step
    pub fn with_decoder(mut self, decoder: Arc<dyn RegisterPairDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Decode step, if any
    pub fn decoder(&self) -> Option<&dyn RegisterPairDecoder> {
        self.decoder.as_deref()
    }

    /// Load every row and decode it if a decoder is set
    pub fn run(&mut self) -> Result<Vec<Reading>> {
        let source = self.loader.describe();
        let pairs = self.loader.load()?;

        let decoder = self.decoder();
        let readings = match decoder {
            Some(decoder) => decode_all(pairs, decoder),
            None => pairs.into_iter().map(Reading::raw).collect(),
        };

        info!(
            "Successfully parsed {} modbus readings from {} ({})",
            readings.len(),
            source,
            decoder.map_or("raw", |d| d.name())
        );
        Ok(readings)
    }
}

/// Decode a batch of pairs in order
pub fn decode_all(pairs: Vec<RegisterPair>, decoder: &dyn RegisterPairDecoder) -> Vec<Reading> {
    pairs
        .into_iter()
        .map(|pair| {
            let value = pair.decode_with(decoder);
            debug!(
                "{}: LSR={} MSR={} -> {:#010X} ({})",
                pair.label,
                pair.low,
                pair.high,
                value.to_bits(),
                value
            );
            Reading::decoded(pair, value)
        })
        .collect()
}
