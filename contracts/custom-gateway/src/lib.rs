//! Custom Gateway Contract - Single-Token Bridge Gateway (home side)
//!
//! Escrows one CW20 token on this chain and asks a paired gateway on an EVM
//! chain to mint or release the equivalent, through a crosschain messenger.
//!
//! # Outbound Flow (Deposit)
//! 1. The router forwards a user's `OutboundTransfer`
//! 2. The gateway pulls the tokens into escrow with CW20 `TransferFrom`
//! 3. It encodes `finalizeInboundTransfer` calldata for the remote gateway
//! 4. The messenger dispatches it and returns a sequence number
//!
//! # Inbound Flow (Withdrawal)
//! 1. The messenger delivers `FinalizeInboundTransfer` from the remote gateway
//! 2. The gateway checks the message originator against its counterpart
//! 3. Escrowed tokens are released to the recipient
//!
//! # Security
//! - Token pair and counterpart are bound once and never change
//! - Only the router can deposit; only the counterpart can withdraw
//! - Extra call data on deposits is rejected
//! - Exit numbers are recorded so a withdrawal cannot be replayed

pub mod address_codec;
pub mod codec;
pub mod contract;
pub mod error;
mod execute;
pub mod guard;
pub mod msg;
mod query;
pub mod state;

pub use crate::codec::{build_finalize_calldata, decode_outbound_data, encode_outbound_data};
pub use crate::error::ContractError;
