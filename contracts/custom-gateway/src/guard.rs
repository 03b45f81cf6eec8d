//! Authorization predicates.
//!
//! Each check fails with `Unauthorized` before any state is touched.

use cosmwasm_std::{Addr, QuerierWrapper};

use common::{MessengerQueryMsg, OriginatorResponse};

use crate::error::ContractError;
use crate::state::{Config, GatewayConfiguration};

/// Caller must be the current owner.
pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Caller must be the router fixed at instantiation.
pub fn ensure_router(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.router {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Call must be a message delivered by the messenger whose remote originator
/// is the configured counterpart gateway.
///
/// An unconfigured gateway has no counterpart, so every inbound call fails.
pub fn ensure_counterpart(
    querier: &QuerierWrapper,
    config: &Config,
    gateway: Option<&GatewayConfiguration>,
    sender: &Addr,
) -> Result<(), ContractError> {
    let gateway = gateway.ok_or(ContractError::Unauthorized)?;

    if *sender != config.messenger {
        return Err(ContractError::Unauthorized);
    }

    let response: OriginatorResponse = querier.query_wasm_smart(
        config.messenger.to_string(),
        &MessengerQueryMsg::CurrentMessageOriginator {},
    )?;

    match response.originator {
        Some(originator) if originator.eq_ignore_ascii_case(&gateway.remote_gateway) => Ok(()),
        _ => Err(ContractError::Unauthorized),
    }
}
