//! CIDR prefix length.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Smallest accepted prefix. `/0` is rejected.
pub const MIN_LENGTH: u8 = 1;

/// Number of leading network bits in an address, always within 1..=32.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Create a prefix, rejecting values outside 1..=32.
    pub fn new(len: u8) -> Result<PrefixLength> {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&len) {
            Ok(PrefixLength(len))
        } else {
            Err(CalcError::PrefixRange(len.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - prefix`.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<u8> for PrefixLength {
    type Error = CalcError;

    fn try_from(len: u8) -> Result<PrefixLength> {
        PrefixLength::new(len)
    }
}

impl From<PrefixLength> for u8 {
    fn from(prefix: PrefixLength) -> u8 {
        prefix.0
    }
}

impl FromStr for PrefixLength {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<PrefixLength> {
        crate::validate::validate_prefix(s)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bounds() {
        assert!(PrefixLength::new(0).is_err());
        assert_eq!(PrefixLength::new(1).unwrap().get(), 1);
        assert_eq!(PrefixLength::new(32).unwrap().get(), 32);
        assert_eq!(
            PrefixLength::new(33).unwrap_err(),
            CalcError::PrefixRange("33".to_string())
        );
    }

    #[test]
    fn test_host_bits() {
        assert_eq!(PrefixLength::new(24).unwrap().host_bits(), 8);
        assert_eq!(PrefixLength::new(32).unwrap().host_bits(), 0);
        assert_eq!(PrefixLength::new(1).unwrap().host_bits(), 31);
    }

    #[test]
    fn test_prefix_serde() {
        let p: PrefixLength = serde_json::from_str("26").unwrap();
        assert_eq!(p.get(), 26);
        assert_eq!(serde_json::to_string(&p).unwrap(), "26");
        assert!(serde_json::from_str::<PrefixLength>("0").is_err());
    }
}
