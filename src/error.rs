//! Error types for address and prefix calculations.

use thiserror::Error;

/// Failures raised by validation and subnet arithmetic.
///
/// Every variant carries the offending input so callers can report it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Malformed dotted-decimal or dotted-binary address.
    #[error("Invalid IP address: {0}")]
    IpFormat(String),

    /// Prefix outside 1-32, or not a decimal number.
    #[error("Invalid CIDR prefix (must be an integer between 1 and 32): {0}")]
    PrefixRange(String),

    /// Target prefix is not longer than the base prefix.
    #[error("Invalid subnetting prefix (must be greater than the network prefix): {0}")]
    SubnetRange(String),

    /// Subnetting request would produce more than `2^max` subnets.
    #[error("Subnetting by {requested} bits exceeds the limit of {max} bits")]
    SubnetLimit { requested: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_input() {
        let e = CalcError::IpFormat("256.1.1.1".to_string());
        assert_eq!(e.to_string(), "Invalid IP address: 256.1.1.1");

        let e = CalcError::PrefixRange("33".to_string());
        assert!(e.to_string().ends_with(": 33"));

        let e = CalcError::SubnetLimit {
            requested: 20,
            max: 16,
        };
        assert_eq!(
            e.to_string(),
            "Subnetting by 20 bits exceeds the limit of 16 bits"
        );
    }
}
