//! Gateway configuration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::address_codec::normalize_evm_address;
use crate::error::ContractError;
use crate::guard::ensure_owner;
use crate::state::{GatewayConfiguration, ALLOWS_DEPOSITS, CONFIG, GATEWAY};

/// Bind home token, remote token and counterpart gateway, then open deposits.
///
/// A second call is always rejected, whatever its arguments.
pub fn execute_configure(
    deps: DepsMut,
    info: MessageInfo,
    home_token: String,
    remote_token: String,
    remote_gateway: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if GATEWAY.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyConfigured);
    }

    let home_token = deps.api.addr_validate(&home_token)?;
    let remote_token =
        normalize_evm_address(&remote_token).map_err(|e| ContractError::InvalidAddress {
            reason: format!("remote_token: {}", e),
        })?;
    let remote_gateway =
        normalize_evm_address(&remote_gateway).map_err(|e| ContractError::InvalidAddress {
            reason: format!("remote_gateway: {}", e),
        })?;

    let gateway = GatewayConfiguration {
        home_token,
        remote_token,
        remote_gateway,
    };
    GATEWAY.save(deps.storage, &gateway)?;
    ALLOWS_DEPOSITS.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("action", "configure")
        .add_attribute("home_token", gateway.home_token)
        .add_attribute("remote_token", gateway.remote_token)
        .add_attribute("remote_gateway", gateway.remote_gateway))
}

/// Reopen deposits. Only meaningful once a token pair is bound.
pub fn execute_enable_deposits(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if GATEWAY.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NotConfigured);
    }

    ALLOWS_DEPOSITS.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("action", "enable_deposits"))
}

/// Pause new deposits. Withdrawals are unaffected.
pub fn execute_disable_deposits(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    ALLOWS_DEPOSITS.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("action", "disable_deposits"))
}
