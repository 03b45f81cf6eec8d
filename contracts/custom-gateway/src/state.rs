//! State definitions for the custom gateway contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Owner allowed to configure the gateway and toggle deposits
    pub owner: Addr,
    /// The only caller allowed to start deposits
    pub router: Addr,
    /// Crosschain messenger that dispatches and delivers messages
    pub messenger: Addr,
    /// Bech32 prefix of home-chain accounts (e.g. "terra")
    pub bech32_prefix: String,
}

/// Token pair and counterpart, bound exactly once by the owner
#[cw_serde]
pub struct GatewayConfiguration {
    /// CW20 token escrowed on the home chain
    pub home_token: Addr,
    /// Token minted on the remote chain (0x-prefixed lowercase hex)
    pub remote_token: String,
    /// Gateway contract on the remote chain (0x-prefixed lowercase hex)
    pub remote_gateway: String,
}

/// Pending ownership change proposal
#[cw_serde]
pub struct PendingOwner {
    /// Proposed new owner address
    pub new_address: Addr,
    /// Block time when the change can be accepted
    pub execute_after: Timestamp,
}

/// Deposit context carried from the outbound handler to the dispatch reply
#[cw_serde]
pub struct PendingDeposit {
    pub home_token: Addr,
    pub from: Addr,
    pub to: String,
    pub amount: Uint128,
}

/// Gateway statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of dispatched deposits
    pub total_deposits: u64,
    /// Number of finalized withdrawals
    pub total_withdrawals: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custom-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for ownership change timelock
pub const OWNER_TIMELOCK_DURATION: u64 = 604_800;

/// Reply id of the CW20 `TransferFrom` that escrows a deposit
pub const ESCROW_REPLY_ID: u64 = 1;

/// Reply id of the messenger dispatch
pub const DISPATCH_REPLY_ID: u64 = 2;

/// Reply id of the CW20 `Transfer` that releases a withdrawal
pub const RELEASE_REPLY_ID: u64 = 3;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Absent until the owner calls `Configure`
pub const GATEWAY: Item<GatewayConfiguration> = Item::new("gateway");

pub const ALLOWS_DEPOSITS: Item<bool> = Item::new("allows_deposits");

pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");

/// Only present between an outbound transfer and its dispatch reply
pub const PENDING_DEPOSIT: Item<PendingDeposit> = Item::new("pending_deposit");

/// Amount escrowed by deposits and not yet released by withdrawals
pub const ESCROWED: Item<Uint128> = Item::new("escrowed");

/// Finalized withdrawals
/// Key: exit number as 32 big-endian bytes
pub const PROCESSED_EXITS: Map<&[u8], bool> = Map::new("processed_exits");

pub const STATS: Item<Stats> = Item::new("stats");
