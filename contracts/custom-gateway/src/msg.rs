//! Message types for the custom gateway contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint256};

pub use common::{FinalizeInboundTransferMsg, OutboundTransferMsg};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner allowed to configure the gateway and toggle deposits
    pub owner: String,
    /// Router fronting this gateway; the only caller allowed to deposit
    pub router: String,
    /// Crosschain messenger contract
    pub messenger: String,
    /// Bech32 prefix of home-chain accounts (e.g. "terra")
    pub bech32_prefix: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Configuration
    // ========================================================================
    /// Bind the token pair and counterpart gateway. Succeeds once.
    ///
    /// Authorization: Owner only
    Configure {
        /// CW20 token escrowed on this chain
        home_token: String,
        /// Token on the remote chain (0x-prefixed hex)
        remote_token: String,
        /// Counterpart gateway on the remote chain (0x-prefixed hex)
        remote_gateway: String,
    },

    /// Authorization: Owner only
    EnableDeposits {},

    /// Authorization: Owner only
    DisableDeposits {},

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Escrow tokens and dispatch a finalize message to the remote gateway.
    ///
    /// Authorization: Router only. Native funds attached are forwarded to the
    /// messenger as the message value. Response data is the JSON sequence number.
    OutboundTransfer(OutboundTransferMsg),

    /// Release escrowed tokens for a withdrawal started on the remote chain.
    ///
    /// Authorization: Messenger, delivering a message from the counterpart gateway
    FinalizeInboundTransfer(FinalizeInboundTransferMsg),

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Propose a new owner (starts timelock).
    ProposeOwner { new_owner: String },

    /// Accept pending ownership (after timelock).
    AcceptOwner {},

    /// Cancel pending ownership proposal.
    CancelOwnerProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    /// Remote token for a home token, `None` unless it is the configured one
    #[returns(RemoteTokenResponse)]
    RemoteTokenAddress { home_token: String },

    #[returns(CounterpartGatewayResponse)]
    CounterpartGateway {},

    /// Calldata a deposit with these parameters would send to the remote gateway
    #[returns(FinalizeCalldataResponse)]
    FinalizeCalldata {
        /// Home token
        token: String,
        /// Home depositor (bech32)
        from: String,
        /// Remote recipient (0x-prefixed hex)
        to: String,
        amount: Uint128,
        extra_data: Binary,
    },

    #[returns(DepositsAllowedResponse)]
    DepositsAllowed {},

    #[returns(EscrowedBalanceResponse)]
    EscrowedBalance {},

    #[returns(ExitProcessedResponse)]
    ExitProcessed { exit_num: Uint256 },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub router: Addr,
    pub messenger: Addr,
    pub bech32_prefix: String,
    pub home_token: Option<Addr>,
    pub remote_token: Option<String>,
    pub remote_gateway: Option<String>,
    pub allows_deposits: bool,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
    pub execute_after: Option<Timestamp>,
}

#[cw_serde]
pub struct RemoteTokenResponse {
    pub remote_token: Option<String>,
}

#[cw_serde]
pub struct CounterpartGatewayResponse {
    pub remote_gateway: Option<String>,
}

#[cw_serde]
pub struct FinalizeCalldataResponse {
    pub calldata: Binary,
}

#[cw_serde]
pub struct DepositsAllowedResponse {
    pub allows_deposits: bool,
}

#[cw_serde]
pub struct EscrowedBalanceResponse {
    pub token: Option<Addr>,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ExitProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_deposits: u64,
    pub total_withdrawals: u64,
}
