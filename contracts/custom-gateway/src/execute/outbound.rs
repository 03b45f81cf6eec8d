//! Outbound transfer handlers (deposit to the remote chain).
//!
//! A deposit is one transaction made of two submessages executed in order:
//! 1. CW20 `TransferFrom` pulling `amount` from the depositor into escrow
//! 2. Messenger `DispatchMessage` carrying the finalize calldata
//!
//! The dispatch reply reads the sequence number, emits `deposit_initiated`
//! and returns the sequence number as response data. Any failure reverts
//! the whole transaction, escrow included.

use cosmwasm_std::{
    from_json, to_json_binary, Binary, DepsMut, Env, Event, MessageInfo, Reply, Response,
    StdError, SubMsg, SubMsgResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_utils::parse_execute_response_data;

use common::{DispatchResponse, MessengerExecuteMsg, OutboundTransferMsg};

use crate::address_codec::{normalize_evm_address, parse_evm_address};
use crate::codec::{
    decode_outbound_data, finalize_inbound_transfer_calldata, home_address, home_token_address,
};
use crate::error::ContractError;
use crate::guard::ensure_router;
use crate::state::{
    PendingDeposit, ALLOWS_DEPOSITS, CONFIG, DISPATCH_REPLY_ID, ESCROWED, ESCROW_REPLY_ID,
    GATEWAY, PENDING_DEPOSIT, STATS,
};

/// Router-initiated deposit.
pub fn execute_outbound_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: OutboundTransferMsg,
) -> Result<Response, ContractError> {
    if !ALLOWS_DEPOSITS.load(deps.storage)? {
        return Err(ContractError::DepositsDisabled);
    }

    let config = CONFIG.load(deps.storage)?;
    ensure_router(&config, &info.sender)?;

    let gateway = GATEWAY
        .may_load(deps.storage)?
        .ok_or(ContractError::NotConfigured)?;
    if msg.token != gateway.home_token.as_str() {
        return Err(ContractError::UnsupportedToken { token: msg.token });
    }

    let outbound = decode_outbound_data(&msg.data, &config.bech32_prefix)?;
    if !outbound.extra_data.is_empty() {
        return Err(ContractError::ExtraDataDisabled);
    }

    if msg.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let from = deps.api.addr_validate(&outbound.from)?;
    let to = normalize_evm_address(&msg.to).map_err(|e| ContractError::InvalidAddress {
        reason: format!("to: {}", e),
    })?;
    let refund_to =
        normalize_evm_address(&msg.refund_to).map_err(|e| ContractError::InvalidAddress {
            reason: format!("refund_to: {}", e),
        })?;

    let calldata = finalize_inbound_transfer_calldata(
        home_token_address(gateway.home_token.as_str()),
        home_address(from.as_str())?,
        parse_evm_address(&to)?,
        msg.amount,
        &[],
    );

    ESCROWED.update(deps.storage, |escrowed| -> Result<_, ContractError> {
        Ok(escrowed.checked_add(msg.amount).map_err(StdError::from)?)
    })?;
    PENDING_DEPOSIT.save(
        deps.storage,
        &PendingDeposit {
            home_token: gateway.home_token.clone(),
            from: from.clone(),
            to: to.clone(),
            amount: msg.amount,
        },
    )?;

    let escrow = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: gateway.home_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: from.to_string(),
                recipient: env.contract.address.to_string(),
                amount: msg.amount,
            })?,
            funds: vec![],
        },
        ESCROW_REPLY_ID,
    );

    let dispatch = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: config.messenger.to_string(),
            msg: to_json_binary(&MessengerExecuteMsg::DispatchMessage {
                target: gateway.remote_gateway.clone(),
                refund_to,
                from: from.to_string(),
                remote_call_value: Uint128::zero(),
                max_submission_cost: outbound.max_submission_cost,
                max_gas: msg.max_gas,
                gas_price_bid: msg.gas_price_bid,
                calldata: Binary::from(calldata),
            })?,
            funds: info.funds,
        },
        DISPATCH_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(escrow)
        .add_submessage(dispatch)
        .add_attribute("action", "outbound_transfer")
        .add_attribute("token", gateway.home_token)
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", msg.amount.to_string()))
}

/// The CW20 refused to move the deposit into escrow.
pub fn reply_escrow(reply: Reply) -> Result<Response, ContractError> {
    match reply.result {
        SubMsgResult::Err(reason) => Err(ContractError::EscrowFailed { reason }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

/// The messenger accepted the message; finish the deposit.
pub fn reply_dispatch(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let response = reply
        .result
        .into_result()
        .map_err(|reason| ContractError::DispatchFailed { reason })?;

    let data = response.data.ok_or(ContractError::MissingDispatchData)?;
    let execute_data = parse_execute_response_data(&data)
        .map_err(|e| ContractError::malformed(format!("dispatch response: {}", e)))?
        .data
        .ok_or(ContractError::MissingDispatchData)?;
    let dispatched: DispatchResponse = from_json(&execute_data)?;

    let pending = PENDING_DEPOSIT.load(deps.storage)?;
    PENDING_DEPOSIT.remove(deps.storage);

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_deposits += 1;
        Ok(stats)
    })?;

    let event = Event::new("deposit_initiated")
        .add_attribute("home_token", pending.home_token)
        .add_attribute("from", pending.from)
        .add_attribute("to", pending.to)
        .add_attribute("sequence_number", dispatched.sequence_number.to_string())
        .add_attribute("amount", pending.amount.to_string());

    Ok(Response::new()
        .add_event(event)
        .set_data(to_json_binary(&dispatched.sequence_number)?))
}
