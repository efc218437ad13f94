//! Voltage Register Codec Library
//!
//! Decodes float32 measurements packed into pairs of 16-bit Modbus registers
//! and reports them.
//!
//! # Architecture
//!
//! - **Bytes**: `ByteOrder` and register/word conversions
//! - **Decoder**: `RegisterPairDecoder` capability, `Float32Decoder` strategy
//! - **Loader**: `RowLoader` sources (CSV, in-memory)
//! - **Pipeline**: loader + optional decoder, order preserving
//! - **Report**: text / JSON / CSV output
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use voltage_regcodec::{
//!     decode, CsvLoaderOptions, CsvRowLoader, Float32Decoder, ReadingPipeline,
//! };
//!
//! assert_eq!(decode(0, 17530), 1000.0);
//!
//! let csv = "register_pair,LSR,MSR\n40001-40002,0,17530\n";
//! let loader = CsvRowLoader::from_reader(csv.as_bytes(), CsvLoaderOptions::default());
//! let readings = ReadingPipeline::new(loader)
//!     .with_decoder(Arc::new(Float32Decoder::default()))
//!     .run()
//!     .unwrap();
//! assert_eq!(readings[0].value, Some(1000.0));
//! ```

pub mod bytes;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reading;
pub mod report;

// Re-export core types
pub use bytes::ByteOrder;
pub use decoder::{decode, split, Float32Decoder, RegisterPairDecoder};
pub use error::{RegCodecError, Result};
pub use loader::{CsvLoaderOptions, CsvRowLoader, MemoryRowLoader, RowLoader};
pub use pipeline::ReadingPipeline;
pub use reading::{Reading, RegisterPair};
pub use report::{write_report, ReportFormat, ReportOptions};
