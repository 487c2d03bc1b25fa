//! Input validation for addresses and prefixes.
//!
//! All checks are fail-fast: the first violated rule returns an error and
//! nothing is computed.

use crate::error::{CalcError, Result};
use crate::models::PrefixLength;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Dotted-decimal address with an optional `/1`..`/32` suffix, ASCII digits only.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

/// Four dot-separated groups of eight `0`/`1`.
static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^((?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}",
            r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])",
            r"(?:/([1-9]|[12][0-9]|3[0-2]))?$"
        ))
        .expect("Invalid Regex")
    })
}

fn get_binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| Regex::new(r"^([01]{8}\.){3}[01]{8}$").expect("Invalid Regex"))
}

/// Validate a dotted-decimal address, optionally followed by `/prefix`.
///
/// Returns the address part only; see [`split_cidr`] to also get the prefix.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::validate::validate_address;
/// assert!(validate_address("192.168.1.3/24").is_ok());
/// assert!(validate_address("256.1.1.1").is_err());
/// ```
pub fn validate_address(text: &str) -> Result<Ipv4Addr> {
    split_cidr(text).map(|(addr, _)| addr)
}

/// Validate `a.b.c.d[/p]` and split it into address and optional prefix.
pub fn split_cidr(text: &str) -> Result<(Ipv4Addr, Option<PrefixLength>)> {
    log::trace!("split_cidr({text})");
    if !get_address_regex().is_match(text) {
        return Err(CalcError::IpFormat(text.to_string()));
    }

    let (addr, prefix) = match text.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (text, None),
    };

    // The regex already bounds every octet to 0-255, so parsing cannot fail here.
    let octets = addr
        .split('.')
        .map(|o| o.parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|_| CalcError::IpFormat(text.to_string()))?;
    let addr = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);

    let prefix = prefix.map(validate_prefix).transpose()?;
    Ok((addr, prefix))
}

/// Validate a prefix given as text: decimal digits only, value 1..=32.
pub fn validate_prefix(text: &str) -> Result<PrefixLength> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(CalcError::PrefixRange(text.to_string()));
    }
    let value: u8 = text
        .parse()
        .map_err(|_| CalcError::PrefixRange(text.to_string()))?;
    PrefixLength::new(value).map_err(|_| CalcError::PrefixRange(text.to_string()))
}

/// Validate a dotted-binary address such as `11000000.10101000.00000001.00000001`.
pub fn validate_binary_address(text: &str) -> Result<()> {
    if get_binary_regex().is_match(text) {
        Ok(())
    } else {
        Err(CalcError::IpFormat(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address_ok() {
        assert_eq!(
            validate_address("192.168.1.3").unwrap(),
            Ipv4Addr::new(192, 168, 1, 3)
        );
        assert_eq!(
            validate_address("0.0.0.0/1").unwrap(),
            Ipv4Addr::new(0, 0, 0, 0)
        );
        assert_eq!(
            validate_address("255.255.255.255/32").unwrap(),
            Ipv4Addr::BROADCAST
        );
    }

    #[test]
    fn test_validate_address_bad_shape() {
        for bad in [
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "a.b.c.d",
            "01.2.3.4",
            "1.2.3.4/",
            "1.2.3.4/0",
            "1.2.3.4/33",
            "1.2.3.4/1\u{0663}",
            "1\u{0662}.2.3.4",
            "1.2.3.\u{0664}",
            " 1.2.3.4",
            "",
        ] {
            assert_eq!(
                validate_address(bad).unwrap_err(),
                CalcError::IpFormat(bad.to_string()),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_split_cidr() {
        let (addr, prefix) = split_cidr("10.0.0.5/31").unwrap();
        assert_eq!(addr, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(prefix.unwrap().get(), 31);

        let (addr, prefix) = split_cidr("172.16.5.9").unwrap();
        assert_eq!(addr, Ipv4Addr::new(172, 16, 5, 9));
        assert!(prefix.is_none());
    }

    #[test]
    fn test_validate_prefix() {
        assert_eq!(validate_prefix("1").unwrap().get(), 1);
        assert_eq!(validate_prefix("32").unwrap().get(), 32);
        assert_eq!(validate_prefix("024").unwrap().get(), 24);
        for bad in ["0", "33", "-1", "24.0", "", "abc", " 24", "99999999999"] {
            assert_eq!(
                validate_prefix(bad).unwrap_err(),
                CalcError::PrefixRange(bad.to_string()),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_binary_address() {
        assert!(validate_binary_address("11000000.10101000.00000001.00000001").is_ok());
        assert!(validate_binary_address("00000000.00000000.00000000.00000000").is_ok());
        assert!(validate_binary_address("11000000101010000000000100000001").is_err());
        assert!(validate_binary_address("1100000.10101000.00000001.00000001").is_err());
        assert!(validate_binary_address("11000002.10101000.00000001.00000001").is_err());
        assert!(validate_binary_address("11000000.10101000.00000001").is_err());
    }
}
