//! Crosschain messenger interface.
//!
//! The messenger owns sequence-number assignment. A dispatch either returns a
//! sequence number in its execute response data or fails the whole transaction.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128, Uint256};

#[cw_serde]
pub enum MessengerExecuteMsg {
    /// Queue a message for the remote chain.
    ///
    /// Native funds attached to the call are the message value. The messenger
    /// replies with [`DispatchResponse`] as JSON execute data.
    DispatchMessage {
        /// Remote contract the message is addressed to (0x-prefixed hex)
        target: String,
        /// Remote address credited with any unused submission fee
        refund_to: String,
        /// Home-chain account on whose behalf the message is sent
        from: String,
        /// Value forwarded to `target` on the remote chain
        remote_call_value: Uint128,
        /// Maximum fee for submitting the message on the remote chain
        max_submission_cost: Uint256,
        /// Gas limit for executing the message on the remote chain
        max_gas: u64,
        /// Gas price bid for executing the message on the remote chain
        gas_price_bid: Uint128,
        /// ABI-encoded call delivered to `target`
        calldata: Binary,
    },
}

/// Execute response data of [`MessengerExecuteMsg::DispatchMessage`].
#[cw_serde]
pub struct DispatchResponse {
    /// Globally increasing identifier assigned to the dispatched message
    pub sequence_number: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum MessengerQueryMsg {
    /// Remote sender of the inbound message currently being delivered.
    #[returns(OriginatorResponse)]
    CurrentMessageOriginator {},
}

#[cw_serde]
pub struct OriginatorResponse {
    /// `None` when no inbound message is being delivered
    pub originator: Option<String>,
}
