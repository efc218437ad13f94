//! Byte/word order for values packed into two 16-bit registers
//!
//! Devices disagree on how a 32-bit value is spread over a register pair.
//! `ByteOrder` names the four layouts seen in the field so the order can be
//! configured per device family instead of being hardcoded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Byte/word order of a 32-bit value held in two consecutive registers
///
/// # Naming Convention
/// Uses ABCD notation where:
/// - A = Most significant byte (MSB)
/// - B = Second byte
/// - C = Third byte
/// - D = Least significant byte (LSB)
///
/// The letters list the value's bytes in the order they appear across the
/// registers `[first, second]`, each register read MSB first.
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: registers `[0x1234, 0x5678]`
/// - `LittleEndian (DCBA)`: registers `[0x7856, 0x3412]`
/// - `BigEndianSwap (CDAB)`: registers `[0x5678, 0x1234]`
/// - `LittleEndianSwap (BADC)`: registers `[0x3412, 0x7856]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Big-endian: ABCD
    ///
    /// First register holds the high word.
    BigEndian,

    /// Little-endian: DCBA
    ///
    /// Fully reversed byte stream: first register holds the low word with
    /// its bytes swapped, second register the high word, bytes swapped.
    LittleEndian,

    /// Big-endian with swapped words: CDAB
    ///
    /// First register holds the low word (LSR), second the high word (MSR).
    /// Common in Modbus meters and the default for register pair readings.
    BigEndianSwap,

    /// Little-endian with swapped words: BADC
    ///
    /// High word first, bytes swapped inside each register. Rare.
    LittleEndianSwap,
}

impl ByteOrder {
    /// All supported orders
    pub const ALL: [ByteOrder; 4] = [
        Self::BigEndian,
        Self::LittleEndian,
        Self::BigEndianSwap,
        Self::LittleEndianSwap,
    ];

    /// Convert from legacy string formats
    ///
    /// Supports various common string representations:
    /// - "ABCD", "AB-CD" → BigEndian
    /// - "DCBA", "DC-BA" → LittleEndian
    /// - "CDAB", "CD-AB" → BigEndianSwap
    /// - "BADC", "BA-DC" → LittleEndianSwap
    /// - "BE", "BIG_ENDIAN" → BigEndian
    /// - "LE", "LITTLE_ENDIAN" → LittleEndian
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Some(Self::BigEndian),
            "DCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Some(Self::LittleEndian),
            "CDAB" | "BIG_ENDIAN_SWAP" | "BIGENDIANSWAP" => Some(Self::BigEndianSwap),
            "BADC" | "LITTLE_ENDIAN_SWAP" | "LITTLEENDIANSWAP" => Some(Self::LittleEndianSwap),
            _ => None,
        }
    }

    /// Short ABCD code, also used when serializing
    pub fn code(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD",
            Self::LittleEndian => "DCBA",
            Self::BigEndianSwap => "CDAB",
            Self::LittleEndianSwap => "BADC",
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::BigEndianSwap => "CDAB (Big-Endian Swap)",
            Self::LittleEndianSwap => "BADC (Little-Endian Swap)",
        }
    }

    /// Check if bytes inside each register are swapped
    pub fn swaps_register_bytes(&self) -> bool {
        matches!(self, Self::LittleEndian | Self::LittleEndianSwap)
    }

    /// Check if the first register carries the low word
    pub fn is_low_word_first(&self) -> bool {
        matches!(self, Self::BigEndianSwap | Self::LittleEndian)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Low register first (LSR, MSR)
    fn default() -> Self {
        Self::BigEndianSwap
    }
}

impl std::str::FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ByteOrder::from_str(s).ok_or_else(|| {
            format!(
                "Unknown byte order '{}', expected one of ABCD, DCBA, CDAB, BADC",
                s
            )
        })
    }
}

impl Serialize for ByteOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ByteOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
