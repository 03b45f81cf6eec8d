//! Gateway entry messages issued by collaborators.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128, Uint256};

/// Deposit request forwarded by the router.
#[cw_serde]
pub struct OutboundTransferMsg {
    /// Home token being bridged (CW20 contract address)
    pub token: String,
    /// Remote address credited with any unused submission fee
    pub refund_to: String,
    /// Recipient on the remote chain (0x-prefixed hex)
    pub to: String,
    /// Amount to escrow
    pub amount: Uint128,
    /// Gas limit for the remote finalize call
    pub max_gas: u64,
    /// Gas price bid for the remote finalize call
    pub gas_price_bid: Uint128,
    /// `abi.encode(address from, bytes abi.encode(uint256 maxSubmissionCost, bytes extraData))`
    pub data: Binary,
}

/// Withdrawal delivered by the messenger on behalf of the remote gateway.
#[cw_serde]
pub struct FinalizeInboundTransferMsg {
    /// Home token to release (CW20 contract address)
    pub token: String,
    /// Sender on the remote chain (0x-prefixed hex)
    pub from: String,
    /// Home-chain recipient
    pub to: String,
    /// Amount to release
    pub amount: Uint128,
    /// Correlation id assigned by the remote side
    pub exit_num: Uint256,
}
