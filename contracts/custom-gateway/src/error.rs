//! Error types for the custom gateway contract

use cosmwasm_std::{StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Gateway already configured")]
    AlreadyConfigured,

    #[error("Gateway not configured")]
    NotConfigured,

    #[error("Deposits are disabled")]
    DepositsDisabled,

    #[error("Token not supported: {token}")]
    UnsupportedToken { token: String },

    // ========================================================================
    // Payload Errors
    // ========================================================================

    #[error("Extra data is disabled")]
    ExtraDataDisabled,

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Collaborator Errors
    // ========================================================================

    #[error("Escrow failed: {reason}")]
    EscrowFailed { reason: String },

    #[error("Release failed: {reason}")]
    ReleaseFailed { reason: String },

    #[error("Exit already processed: {exit_num}")]
    ExitAlreadyProcessed { exit_num: Uint256 },

    #[error("Dispatch failed: {reason}")]
    DispatchFailed { reason: String },

    #[error("Messenger returned no sequence number")]
    MissingDispatchData,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}

impl ContractError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ContractError::MalformedPayload {
            reason: reason.into(),
        }
    }
}
