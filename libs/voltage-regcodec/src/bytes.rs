//! Binary data utilities for register pairs
//!
//! Byte/word order handling and 32-bit conversions for values that
//! industrial devices spread over two 16-bit registers.

pub mod byte_order;
pub mod conversions;

pub use byte_order::ByteOrder;
pub use conversions::*;
