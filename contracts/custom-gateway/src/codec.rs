//! Calldata codec for messages exchanged with the remote gateway
//!
//! Byte layouts follow Solidity's `abi.encode`, so the remote side can decode
//! them with the standard ABI decoder and anyone can predict the calldata a
//! deposit will produce.
//!
//! # Finalize calldata (outbound, home -> remote)
//! ```solidity
//! abi.encodeWithSelector(
//!     ITokenGateway.finalizeInboundTransfer.selector,
//!     token, from, to, amount,
//!     abi.encode(emptyBytes, extraData)
//! )
//! ```
//!
//! # Outbound data (router -> gateway)
//! ```solidity
//! bytes memory inner = abi.encode(maxSubmissionCost, extraData);  // added by the user
//! bytes memory data  = abi.encode(from, inner);                    // added by the router
//! ```
//!
//! # Home addresses in `address` slots
//! A 20-byte canonical address is used as is. Anything longer (32-byte
//! contract addresses) is represented by the low 20 bytes of its keccak256,
//! as is a home token identifier that is not bech32 at all.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall, SolValue};
use cosmwasm_std::{StdError, StdResult, Uint128, Uint256};
use tiny_keccak::{Hasher, Keccak};

use crate::address_codec::{decode_bech32_address, encode_bech32_address, parse_evm_address};
use crate::error::ContractError;

const ADDRESS_LEN: usize = 20;

sol! {
    /// Remote gateway entry point that mints or releases the bridged token
    function finalizeInboundTransfer(
        address token,
        address from,
        address to,
        uint256 amount,
        bytes data
    );
}

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Selector of the remote `finalizeInboundTransfer`
pub fn finalize_selector() -> [u8; 4] {
    finalizeInboundTransferCall::SELECTOR
}

// ============================================================================
// Home addresses as EVM addresses
// ============================================================================

fn hashed_address(preimage: &[u8]) -> Address {
    Address::from_slice(&keccak256(preimage)[12..])
}

/// EVM view of canonical home-chain bytes
pub fn canonical_to_address(canonical: &[u8]) -> Address {
    if canonical.len() == ADDRESS_LEN {
        Address::from_slice(canonical)
    } else {
        hashed_address(canonical)
    }
}

/// EVM view of a bech32 home-chain account or contract
pub fn home_address(addr: &str) -> StdResult<Address> {
    let (_, canonical) = decode_bech32_address(addr)?;
    Ok(canonical_to_address(&canonical))
}

/// EVM view of the home token; never fails, so any identifier can be bridged
pub fn home_token_address(token: &str) -> Address {
    match decode_bech32_address(token) {
        Ok((_, canonical)) => canonical_to_address(&canonical),
        Err(_) => hashed_address(token.as_bytes()),
    }
}

fn to_u256(value: Uint256) -> U256 {
    U256::from_be_bytes(value.to_be_bytes())
}

fn from_u256(value: U256) -> Uint256 {
    Uint256::from_be_bytes(value.to_be_bytes::<32>())
}

// ============================================================================
// Finalize calldata
// ============================================================================

/// Calldata for the remote gateway's `finalizeInboundTransfer`.
///
/// Pure: identical inputs produce identical bytes.
pub fn finalize_inbound_transfer_calldata(
    token: Address,
    from: Address,
    to: Address,
    amount: Uint128,
    extra_data: &[u8],
) -> Vec<u8> {
    // Empty gateway data keeps the layout of gateways that forward call data
    let gateway_data = (Bytes::new(), Bytes::copy_from_slice(extra_data)).abi_encode_params();

    finalizeInboundTransferCall {
        token,
        from,
        to,
        amount: U256::from(amount.u128()),
        data: Bytes::from(gateway_data),
    }
    .abi_encode()
}

/// Finalize calldata from address strings: home token, home depositor, remote recipient
pub fn build_finalize_calldata(
    token: &str,
    from: &str,
    to: &str,
    amount: Uint128,
    extra_data: &[u8],
) -> StdResult<Vec<u8>> {
    let from = home_address(from)
        .map_err(|e| StdError::generic_err(format!("Invalid from address: {}", e)))?;
    let to = parse_evm_address(to)
        .map_err(|e| StdError::generic_err(format!("Invalid to address: {}", e)))?;
    Ok(finalize_inbound_transfer_calldata(
        home_token_address(token),
        from,
        to,
        amount,
        extra_data,
    ))
}

// ============================================================================
// Outbound data
// ============================================================================

/// Both layers of the `data` field of an outbound transfer, peeled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundData {
    /// Depositor on the home chain (bech32)
    pub from: String,
    pub max_submission_cost: Uint256,
    pub extra_data: Vec<u8>,
}

/// Dirty padding, dirty address bytes, odd offsets and trailing bytes all
/// decode leniently but re-encode differently.
fn ensure_canonical(data: &[u8], reencoded: &[u8], layer: &str) -> Result<(), ContractError> {
    if reencoded != data {
        return Err(ContractError::malformed(format!(
            "{}: non-canonical encoding",
            layer
        )));
    }
    Ok(())
}

/// Peel the router envelope `(address from, bytes inner)` and the user
/// envelope `(uint256 maxSubmissionCost, bytes extraData)`.
pub fn decode_outbound_data(data: &[u8], hrp: &str) -> Result<OutboundData, ContractError> {
    let (from, inner) = <(Address, Bytes)>::abi_decode_params(data)
        .map_err(|e| ContractError::malformed(format!("router envelope: {}", e)))?;
    ensure_canonical(
        data,
        &(from, inner.clone()).abi_encode_params(),
        "router envelope",
    )?;

    let (max_submission_cost, extra_data) = <(U256, Bytes)>::abi_decode_params(&inner)
        .map_err(|e| ContractError::malformed(format!("user envelope: {}", e)))?;
    ensure_canonical(
        &inner,
        &(max_submission_cost, extra_data.clone()).abi_encode_params(),
        "user envelope",
    )?;

    Ok(OutboundData {
        from: encode_bech32_address(from.as_slice(), hrp)?,
        max_submission_cost: from_u256(max_submission_cost),
        extra_data: extra_data.to_vec(),
    })
}

/// Build the two-layer `data` field the gateway expects from the router
pub fn encode_outbound_data(
    from: &str,
    max_submission_cost: Uint256,
    extra_data: &[u8],
) -> StdResult<Vec<u8>> {
    let (_, canonical) = decode_bech32_address(from)?;
    if canonical.len() != ADDRESS_LEN {
        return Err(StdError::generic_err(format!(
            "Depositor must be a 20-byte account, got {} bytes",
            canonical.len()
        )));
    }

    let inner = (
        to_u256(max_submission_cost),
        Bytes::copy_from_slice(extra_data),
    )
        .abi_encode_params();
    Ok((Address::from_slice(&canonical), Bytes::from(inner)).abi_encode_params())
}
