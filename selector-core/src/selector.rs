//! # Signatures and Selectors
//!
//! An error's selector is the first four bytes of the Keccak-256 digest of
//! its canonical signature, rendered as `0x` followed by eight lowercase hex
//! characters.

use crate::abi::Param;
use crate::error::UsageError;
use crate::traits::SelectorHasher;
use std::fmt;

/// Canonical `Name(type1,type2)` form. Parameter names never appear.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorSignature(String);

impl ErrorSignature {
    pub fn new(name: &str, inputs: &[Param]) -> Self {
        let types: Vec<&str> = inputs.iter().map(|p| p.ty.as_str()).collect();
        Self(format!("{}({})", name, types.join(",")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 4-byte selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn from_digest(digest: &[u8; 32]) -> Self {
        Self([digest[0], digest[1], digest[2], digest[3]])
    }

    pub fn compute<H: SelectorHasher>(hasher: &H, signature: &ErrorSignature) -> Self {
        Self::from_digest(&hasher.digest(signature.as_str().as_bytes()))
    }

    pub fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Keccak-256 with the original padding, as used by the Ethereum ABI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl SelectorHasher for Keccak256 {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        alloy_primitives::keccak256(data).0
    }
}

/// Normalised selector or selector prefix supplied by the operator.
///
/// Always stored lowercase with a leading `0x`, holding 1 to 8 hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPrefix(String);

impl SelectorPrefix {
    pub fn parse(input: &str) -> Result<Self, UsageError> {
        let lowered = input.trim().to_lowercase();
        let digits = lowered.strip_prefix("0x").unwrap_or(&lowered);

        let invalid = |reason: String| UsageError::InvalidSelector {
            input: input.to_string(),
            reason,
        };

        if digits.is_empty() {
            return Err(invalid("expected at least one hex digit".to_string()));
        }
        if digits.len() > 8 {
            return Err(invalid(format!(
                "a selector has 8 hex digits, got {}",
                digits.len()
            )));
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(invalid(format!("non-hex character '{c}'")));
        }

        Ok(Self(format!("0x{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        selector.to_string().starts_with(&self.0)
    }
}

impl fmt::Display for SelectorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keccak_selector(signature: &str) -> String {
        let digest = Keccak256.digest(signature.as_bytes());
        Selector::from_digest(&digest).to_string()
    }

    #[test]
    fn test_known_selectors() {
        assert_eq!(keccak_selector("transfer(address,uint256)"), "0xa9059cbb");
        assert_eq!(keccak_selector("Error(string)"), "0x08c379a0");
        assert_eq!(keccak_selector("Panic(uint256)"), "0x4e487b71");
        assert_eq!(keccak_selector("TokenDoesNotExist()"), "0xceea21b6");
    }

    #[test]
    fn test_keccak_is_not_sha3() {
        // Keccak-256 of the empty string; SHA3-256 would give a7ffc6f8...
        assert_eq!(
            hex::encode(Keccak256.digest(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_signature_uses_types_in_order() {
        let inputs = vec![
            Param {
                name: Some("sender".to_string()),
                ty: "address".to_string(),
            },
            Param {
                name: Some("tokenId".to_string()),
                ty: "uint256".to_string(),
            },
        ];
        let sig = ErrorSignature::new("ERC721InsufficientApproval", &inputs);
        assert_eq!(sig.as_str(), "ERC721InsufficientApproval(address,uint256)");
    }

    #[test]
    fn test_signature_without_params() {
        assert_eq!(ErrorSignature::new("Unauthorized", &[]).to_string(), "Unauthorized()");
    }

    #[test]
    fn test_selector_display_pads_leading_zeros() {
        assert_eq!(Selector::new([0x00, 0x0a, 0xff, 0x01]).to_string(), "0x000aff01");
    }

    #[test]
    fn test_prefix_normalisation() {
        for input in ["DEAD", "0xdead", "0XdEaD", " dead "] {
            assert_eq!(SelectorPrefix::parse(input).unwrap().as_str(), "0xdead");
        }
    }

    #[test]
    fn test_prefix_rejects_bad_input() {
        for input in ["", "0x", "0xdeadbeef00", "xyz", "0xde ad"] {
            assert!(
                SelectorPrefix::parse(input).is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_prefix_matches() {
        let selector = Selector::new([0xde, 0xad, 0xbe, 0xef]);
        for input in ["de", "dead", "deadbe", "deadbeef", "0xDEADBEEF"] {
            assert!(SelectorPrefix::parse(input).unwrap().matches(&selector));
        }
        assert!(!SelectorPrefix::parse("beef").unwrap().matches(&selector));
    }
}
