//! Address encoding for both sides of the bridge.
//!
//! Home-chain accounts and contracts are bech32 strings whose data part is a
//! 20-byte (account) or 32-byte (contract) canonical address. Remote-chain
//! addresses are 20-byte EVM addresses written as 0x-prefixed hex.

use alloy_primitives::Address;
use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::{StdError, StdResult};

/// Longest canonical address a home chain hands out
pub const MAX_CANONICAL_LEN: usize = 32;

// ============================================================================
// EVM Addresses
// ============================================================================

/// Parse a hex EVM address; the 0x prefix is optional and case is ignored
pub fn parse_evm_address(addr: &str) -> StdResult<Address> {
    addr.parse::<Address>()
        .map_err(|e| StdError::generic_err(format!("Invalid EVM address {:?}: {}", addr, e)))
}

/// Lowercase 0x-prefixed hex
pub fn encode_evm_address(addr: &Address) -> String {
    format!("0x{}", hex::encode(addr))
}

/// Parse and re-encode, so stored and compared addresses are lowercase
pub fn normalize_evm_address(addr: &str) -> StdResult<String> {
    parse_evm_address(addr).map(|parsed| encode_evm_address(&parsed))
}

// ============================================================================
// Bech32 Addresses
// ============================================================================

/// Decode a bech32 address into its prefix and canonical bytes.
pub fn decode_bech32_address(addr: &str) -> StdResult<(String, Vec<u8>)> {
    let (hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| StdError::generic_err(format!("Invalid bech32 address: {}", e)))?;
    if variant != Variant::Bech32 {
        return Err(StdError::generic_err("Bech32m addresses are not accounts"));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| StdError::generic_err(format!("Invalid base32 data: {}", e)))?;
    if bytes.is_empty() || bytes.len() > MAX_CANONICAL_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 1 to {} bytes, got {}",
            MAX_CANONICAL_LEN,
            bytes.len()
        )));
    }

    Ok((hrp, bytes))
}

/// Encode canonical bytes as a bech32 address under `hrp`
pub fn encode_bech32_address(bytes: &[u8], hrp: &str) -> StdResult<String> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
}

/// A prefix accounts can be rendered under: non-empty, lowercase ASCII
pub fn validate_prefix(hrp: &str) -> StdResult<()> {
    let usable = !hrp.is_empty()
        && hrp
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    if !usable {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix: {:?}",
            hrp
        )));
    }
    Ok(())
}
