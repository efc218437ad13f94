//! Register pair conversions with byte order support
//!
//! Converts between two u16 registers and 32-bit values (u32, f32).
//! Float conversions reinterpret bits and never round, so NaN payloads,
//! infinities, subnormals and signed zeros pass through unchanged.

use super::ByteOrder;

// ============================================================================
// Register to Bytes Conversions
// ============================================================================

/// Convert 2 u16 registers to 4 big-endian bytes (ABCD) with specified byte order
pub fn regs_to_bytes_4(regs: &[u16; 2], order: ByteOrder) -> [u8; 4] {
    let [h0, h1] = [regs[0].to_be_bytes(), regs[1].to_be_bytes()];

    match order {
        ByteOrder::BigEndian => [h0[0], h0[1], h1[0], h1[1]], // ABCD
        ByteOrder::LittleEndian => [h1[1], h1[0], h0[1], h0[0]], // DCBA
        ByteOrder::BigEndianSwap => [h1[0], h1[1], h0[0], h0[1]], // CDAB
        ByteOrder::LittleEndianSwap => [h0[1], h0[0], h1[1], h1[0]], // BADC
    }
}

// ============================================================================
// Register to Numeric Type Conversions
// ============================================================================

/// Convert 2 u16 registers to u32
pub fn regs_to_u32(regs: &[u16; 2], order: ByteOrder) -> u32 {
    u32::from_be_bytes(regs_to_bytes_4(regs, order))
}

/// Convert 2 u16 registers to f32 (bit reinterpretation, no numeric cast)
pub fn regs_to_f32(regs: &[u16; 2], order: ByteOrder) -> f32 {
    f32::from_bits(regs_to_u32(regs, order))
}

/// Split a u32 into 2 u16 registers
///
/// Built from the word/byte properties of `order` rather than the byte
/// table, so round trips cross-check both descriptions of each layout.
pub fn u32_to_regs(value: u32, order: ByteOrder) -> [u16; 2] {
    let low = (value & 0xFFFF) as u16;
    let high = (value >> 16) as u16;

    let [first, second] = if order.is_low_word_first() {
        [low, high]
    } else {
        [high, low]
    };

    if order.swaps_register_bytes() {
        [first.swap_bytes(), second.swap_bytes()]
    } else {
        [first, second]
    }
}

/// Split an f32 into 2 u16 registers
pub fn f32_to_regs(value: f32, order: ByteOrder) -> [u16; 2] {
    u32_to_regs(value.to_bits(), order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regs_to_bytes_4_all_orders() {
        let regs = [0x1234, 0x5678];

        assert_eq!(
            regs_to_bytes_4(&regs, ByteOrder::BigEndian),
            [0x12, 0x34, 0x56, 0x78]
        );
        assert_eq!(
            regs_to_bytes_4(&regs, ByteOrder::LittleEndian),
            [0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(
            regs_to_bytes_4(&regs, ByteOrder::BigEndianSwap),
            [0x56, 0x78, 0x12, 0x34]
        );
        assert_eq!(
            regs_to_bytes_4(&regs, ByteOrder::LittleEndianSwap),
            [0x34, 0x12, 0x78, 0x56]
        );
    }

    #[test]
    fn test_documented_register_layouts() {
        // Registers that carry 0x12345678 in each layout
        let cases = [
            (ByteOrder::BigEndian, [0x1234, 0x5678]),
            (ByteOrder::LittleEndian, [0x7856, 0x3412]),
            (ByteOrder::BigEndianSwap, [0x5678, 0x1234]),
            (ByteOrder::LittleEndianSwap, [0x3412, 0x7856]),
        ];

        for (order, regs) in cases {
            assert_eq!(regs_to_u32(&regs, order), 0x1234_5678, "order {}", order);
            assert_eq!(u32_to_regs(0x1234_5678, order), regs, "order {}", order);
        }
    }

    #[test]
    fn test_regs_to_f32_known_values() {
        // 1000.0 = 0x447A0000
        assert_eq!(regs_to_f32(&[0x447A, 0x0000], ByteOrder::BigEndian), 1000.0);
        assert_eq!(
            regs_to_f32(&[0x0000, 0x447A], ByteOrder::BigEndianSwap),
            1000.0
        );
        // 25.0 = 0x41C80000
        assert_eq!(
            regs_to_f32(&[0x0000, 0xC841], ByteOrder::LittleEndian),
            25.0
        );
        assert_eq!(
            regs_to_f32(&[0xC841, 0x0000], ByteOrder::LittleEndianSwap),
            25.0
        );
    }

    #[test]
    fn test_f32_special_values_keep_bits() {
        let patterns = [
            0x0000_0000u32, // +0.0
            0x8000_0000,    // -0.0
            0x7F80_0000,    // +inf
            0xFF80_0000,    // -inf
            0x0000_0001,    // smallest subnormal
            0x7FC0_0000,    // quiet NaN
            0x7F80_0001,    // signaling NaN
            0xFFFF_FFFF,    // NaN, all bits set
        ];

        for bits in patterns {
            for order in ByteOrder::ALL {
                let regs = u32_to_regs(bits, order);
                assert_eq!(
                    regs_to_f32(&regs, order).to_bits(),
                    bits,
                    "bits {:#010X} order {}",
                    bits,
                    order
                );
            }
        }
    }

    #[test]
    fn test_f32_to_regs() {
        assert_eq!(f32_to_regs(1000.0, ByteOrder::BigEndianSwap), [0x0000, 0x447A]);
        assert_eq!(f32_to_regs(-1.5, ByteOrder::BigEndian), [0xBFC0, 0x0000]);
    }
}
