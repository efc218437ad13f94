//! Register pair decoding
//!
//! A float32 measurement arrives as two 16-bit registers: the least
//! significant register (LSR) and the most significant register (MSR).
//! Register values are treated as raw bit patterns; the sign of the `i16`
//! carries no meaning.

use crate::bytes::{self, ByteOrder};

/// Decode strategy for a register pair
///
/// Implementations must be pure: the same `(low, high)` always yields the
/// same bits. Decoding is total and never fails.
pub trait RegisterPairDecoder: Send + Sync {
    /// Decode the registers of one pair into a float32
    fn decode(&self, low: i16, high: i16) -> f32;

    /// Short name for logs and reports
    fn name(&self) -> &str;
}

/// Decode `low`/`high` registers as an IEEE-754 binary32 value
///
/// `low` supplies bits 0..16 and `high` bits 16..32:
/// `f32::from_bits(low as u16 | (high as u16) << 16)`.
/// Every bit pattern passes through unaltered, NaN and infinity included.
#[inline]
pub fn decode(low: i16, high: i16) -> f32 {
    let word = u32::from(low as u16) | (u32::from(high as u16) << 16);
    f32::from_bits(word)
}

/// Inverse of [`decode`]: split a float32 into `(low, high)` registers
#[inline]
pub fn split(value: f32) -> (i16, i16) {
    let bits = value.to_bits();
    ((bits & 0xFFFF) as u16 as i16, (bits >> 16) as u16 as i16)
}

/// Float32 decoder with a configurable register layout
///
/// The pair's registers are taken in row order `[low, high]` and assembled
/// according to `order`. With the default `CDAB` the first register is the
/// low word, which is exactly [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Float32Decoder {
    order: ByteOrder,
}

impl Float32Decoder {
    pub fn new(order: ByteOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Registers in row order that decode back to `value`
    pub fn split(&self, value: f32) -> (i16, i16) {
        let [first, second] = bytes::f32_to_regs(value, self.order);
        (first as i16, second as i16)
    }
}

impl RegisterPairDecoder for Float32Decoder {
    fn decode(&self, low: i16, high: i16) -> f32 {
        match self.order {
            ByteOrder::BigEndianSwap => decode(low, high),
            order => bytes::regs_to_f32(&[low as u16, high as u16], order),
        }
    }

    fn name(&self) -> &str {
        self.order.code()
    }
}

impl From<ByteOrder> for Float32Decoder {
    fn from(order: ByteOrder) -> Self {
        Self::new(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_zero() {
        let value = decode(0, 0);
        assert_eq!(value, 0.0);
        assert_eq!(value.to_bits(), 0);
    }

    #[test]
    fn test_decode_all_bits_set_is_nan() {
        let value = decode(-1, -1);
        assert!(value.is_nan());
        assert_eq!(value.to_bits(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_decode_one_thousand() {
        // 0x447A0000: low = 0x0000, high = 0x447A (17530)
        assert_eq!(decode(0, 17530), 1000.0);
    }

    #[test]
    fn test_decode_negative_registers_are_bit_patterns() {
        // -0.0 = 0x80000000: high register 0x8000 reads as i16::MIN
        let value = decode(0, i16::MIN);
        assert_eq!(value.to_bits(), 0x8000_0000);
        assert!(value.is_sign_negative());

        // -inf = 0xFF800000
        assert_eq!(decode(0, 0xFF80u16 as i16), f32::NEG_INFINITY);

        // low register with the sign bit set must not sign-extend into high
        assert_eq!(decode(-1, 0).to_bits(), 0x0000_FFFF);
    }

    #[test]
    fn test_decode_subnormal() {
        let value = decode(1, 0);
        assert!(value.is_subnormal());
        assert_eq!(value, f32::from_bits(1));
    }

    #[test]
    fn test_split_inverts_decode() {
        for value in [0.0f32, -0.0, 1.0, -1.5, 1000.0, 3.4e38, f32::MIN_POSITIVE] {
            let (low, high) = split(value);
            assert_eq!(decode(low, high).to_bits(), value.to_bits());
        }
        assert_eq!(split(1000.0), (0, 17530));
    }

    #[test]
    fn test_default_decoder_matches_decode() {
        let decoder = Float32Decoder::default();
        assert_eq!(decoder.order(), ByteOrder::BigEndianSwap);

        let pairs = [(0, 0), (-1, -1), (0, 17530), (0x1234, -0x1234), (i16::MIN, i16::MAX)];
        for (low, high) in pairs {
            assert_eq!(
                decoder.decode(low, high).to_bits(),
                decode(low, high).to_bits(),
                "pair ({}, {})",
                low,
                high
            );
        }
    }

    #[test]
    fn test_alternate_orders() {
        // 1000.0 = 0x447A0000 in every layout
        let cases = [
            (ByteOrder::BigEndian, 0x447Au16, 0x0000u16),
            (ByteOrder::LittleEndian, 0x0000, 0x7A44),
            (ByteOrder::BigEndianSwap, 0x0000, 0x447A),
            (ByteOrder::LittleEndianSwap, 0x7A44, 0x0000),
        ];

        for (order, first, second) in cases {
            let decoder = Float32Decoder::new(order);
            assert_eq!(
                decoder.decode(first as i16, second as i16),
                1000.0,
                "order {}",
                order
            );
            assert_eq!(decoder.split(1000.0), (first as i16, second as i16));
        }
    }

    #[test]
    fn test_byte_swapped_layouts() {
        // DCBA: low word first, bytes swapped. BADC: high word first, bytes swapped.
        let dcba = Float32Decoder::new(ByteOrder::LittleEndian);
        let badc = Float32Decoder::new(ByteOrder::LittleEndianSwap);

        assert!(ByteOrder::LittleEndian.is_low_word_first());
        assert!(!ByteOrder::LittleEndianSwap.is_low_word_first());

        assert_eq!(dcba.decode(0x7856, 0x3412).to_bits(), 0x1234_5678);
        assert_eq!(badc.decode(0x3412, 0x7856).to_bits(), 0x1234_5678);

        assert_eq!(dcba.decode(0x0000, 0x7A44), 1000.0);
        assert_eq!(badc.decode(0x7A44, 0x0000), 1000.0);

        // Feeding one layout's registers to the other decodes a different word
        assert_eq!(dcba.decode(0x7A44, 0x0000).to_bits(), 0x0000_447A);
        assert_eq!(badc.decode(0x0000, 0x7A44).to_bits(), 0x0000_447A);
    }

    #[test]
    fn test_decoder_name_is_order_code() {
        assert_eq!(Float32Decoder::new(ByteOrder::BigEndian).name(), "ABCD");
        assert_eq!(Float32Decoder::from(ByteOrder::LittleEndian).name(), "DCBA");
    }
}
