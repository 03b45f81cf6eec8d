//! Inbound transfer handlers (withdrawal from the remote chain).
//!
//! Not gated by the deposit toggle: withdrawals stay honorable while new
//! deposits are paused.

use cosmwasm_std::{
    to_json_binary, DepsMut, Event, MessageInfo, Reply, Response, StdError, SubMsg, SubMsgResult,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::FinalizeInboundTransferMsg;

use crate::error::ContractError;
use crate::guard::ensure_counterpart;
use crate::state::{CONFIG, ESCROWED, GATEWAY, PROCESSED_EXITS, RELEASE_REPLY_ID, STATS};

/// Release escrowed tokens to `to`.
pub fn execute_finalize_inbound_transfer(
    deps: DepsMut,
    info: MessageInfo,
    msg: FinalizeInboundTransferMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let gateway = GATEWAY.may_load(deps.storage)?;
    ensure_counterpart(&deps.querier, &config, gateway.as_ref(), &info.sender)?;
    let gateway = gateway.ok_or(ContractError::NotConfigured)?;

    if msg.token != gateway.home_token.as_str() {
        return Err(ContractError::UnsupportedToken { token: msg.token });
    }

    if msg.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let to = deps.api.addr_validate(&msg.to)?;

    // Local replay guard, independent of the messenger's own
    let exit_key = msg.exit_num.to_be_bytes();
    if PROCESSED_EXITS.has(deps.storage, &exit_key) {
        return Err(ContractError::ExitAlreadyProcessed {
            exit_num: msg.exit_num,
        });
    }
    PROCESSED_EXITS.save(deps.storage, &exit_key, &true)?;

    ESCROWED.update(deps.storage, |escrowed| {
        escrowed
            .checked_sub(msg.amount)
            .map_err(|e| ContractError::ReleaseFailed {
                reason: e.to_string(),
            })
    })?;

    STATS.update(deps.storage, |mut stats| -> Result<_, StdError> {
        stats.total_withdrawals += 1;
        Ok(stats)
    })?;

    let release = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: gateway.home_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: to.to_string(),
                amount: msg.amount,
            })?,
            funds: vec![],
        },
        RELEASE_REPLY_ID,
    );

    let event = Event::new("withdrawal_finalized")
        .add_attribute("home_token", gateway.home_token)
        .add_attribute("from", msg.from)
        .add_attribute("to", to)
        .add_attribute("exit_num", msg.exit_num.to_string())
        .add_attribute("amount", msg.amount.to_string());

    Ok(Response::new()
        .add_submessage(release)
        .add_attribute("action", "finalize_inbound_transfer")
        .add_event(event))
}

/// The CW20 refused to release escrowed tokens.
pub fn reply_release(reply: Reply) -> Result<Response, ContractError> {
    match reply.result {
        SubMsgResult::Err(reason) => Err(ContractError::ReleaseFailed { reason }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}
