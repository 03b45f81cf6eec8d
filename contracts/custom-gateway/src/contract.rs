//! Custom Gateway Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and submessage replies
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::address_codec::validate_prefix;
use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_cancel_owner_proposal, execute_configure,
    execute_disable_deposits, execute_enable_deposits, execute_finalize_inbound_transfer,
    execute_outbound_transfer, execute_propose_owner, reply_dispatch, reply_escrow,
    reply_release,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_counterpart_gateway, query_deposits_allowed, query_escrowed_balance,
    query_exit_processed, query_finalize_calldata, query_owner, query_remote_token, query_stats,
};
use crate::state::{
    Config, Stats, ALLOWS_DEPOSITS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DISPATCH_REPLY_ID,
    ESCROWED, ESCROW_REPLY_ID, RELEASE_REPLY_ID, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let router = deps.api.addr_validate(&msg.router)?;
    let messenger = deps.api.addr_validate(&msg.messenger)?;
    validate_prefix(&msg.bech32_prefix).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;

    let config = Config {
        owner,
        router,
        messenger,
        bech32_prefix: msg.bech32_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    // Deposits open on the first successful Configure
    ALLOWS_DEPOSITS.save(deps.storage, &false)?;
    ESCROWED.save(deps.storage, &Uint128::zero())?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("router", config.router)
        .add_attribute("messenger", config.messenger)
        .add_attribute("bech32_prefix", config.bech32_prefix))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Configuration
        ExecuteMsg::Configure {
            home_token,
            remote_token,
            remote_gateway,
        } => execute_configure(deps, info, home_token, remote_token, remote_gateway),
        ExecuteMsg::EnableDeposits {} => execute_enable_deposits(deps, info),
        ExecuteMsg::DisableDeposits {} => execute_disable_deposits(deps, info),

        // Transfers
        ExecuteMsg::OutboundTransfer(transfer) => {
            execute_outbound_transfer(deps, env, info, transfer)
        }
        ExecuteMsg::FinalizeInboundTransfer(transfer) => {
            execute_finalize_inbound_transfer(deps, info, transfer)
        }

        // Ownership
        ExecuteMsg::ProposeOwner { new_owner } => {
            execute_propose_owner(deps, env, info, new_owner)
        }
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        ESCROW_REPLY_ID => reply_escrow(reply),
        DISPATCH_REPLY_ID => reply_dispatch(deps, reply),
        RELEASE_REPLY_ID => reply_release(reply),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::RemoteTokenAddress { home_token } => {
            to_json_binary(&query_remote_token(deps, home_token)?)
        }
        QueryMsg::CounterpartGateway {} => to_json_binary(&query_counterpart_gateway(deps)?),
        QueryMsg::FinalizeCalldata {
            token,
            from,
            to,
            amount,
            extra_data,
        } => to_json_binary(&query_finalize_calldata(
            token, from, to, amount, extra_data,
        )?),
        QueryMsg::DepositsAllowed {} => to_json_binary(&query_deposits_allowed(deps)?),
        QueryMsg::EscrowedBalance {} => to_json_binary(&query_escrowed_balance(deps)?),
        QueryMsg::ExitProcessed { exit_num } => {
            to_json_binary(&query_exit_processed(deps, exit_num)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
