//! Query handlers for the custom gateway contract.

use cosmwasm_std::{Binary, Deps, StdResult, Uint128, Uint256};

use crate::codec::build_finalize_calldata;
use crate::msg::{
    ConfigResponse, CounterpartGatewayResponse, DepositsAllowedResponse, EscrowedBalanceResponse,
    ExitProcessedResponse, FinalizeCalldataResponse, OwnerResponse, RemoteTokenResponse,
    StatsResponse,
};
use crate::state::{
    ALLOWS_DEPOSITS, CONFIG, ESCROWED, GATEWAY, PENDING_OWNER, PROCESSED_EXITS, STATS,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let gateway = GATEWAY.may_load(deps.storage)?;
    let allows_deposits = ALLOWS_DEPOSITS.load(deps.storage)?;

    Ok(ConfigResponse {
        owner: config.owner,
        router: config.router,
        messenger: config.messenger,
        bech32_prefix: config.bech32_prefix,
        home_token: gateway.as_ref().map(|g| g.home_token.clone()),
        remote_token: gateway.as_ref().map(|g| g.remote_token.clone()),
        remote_gateway: gateway.map(|g| g.remote_gateway),
        allows_deposits,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let pending = PENDING_OWNER.may_load(deps.storage)?;

    Ok(OwnerResponse {
        owner: config.owner,
        pending_owner: pending.as_ref().map(|p| p.new_address.clone()),
        execute_after: pending.map(|p| p.execute_after),
    })
}

/// Remote token paired with `home_token`, if it is the one this gateway serves.
pub fn query_remote_token(deps: Deps, home_token: String) -> StdResult<RemoteTokenResponse> {
    let remote_token = GATEWAY
        .may_load(deps.storage)?
        .filter(|g| g.home_token.as_str() == home_token)
        .map(|g| g.remote_token);

    Ok(RemoteTokenResponse { remote_token })
}

pub fn query_counterpart_gateway(deps: Deps) -> StdResult<CounterpartGatewayResponse> {
    Ok(CounterpartGatewayResponse {
        remote_gateway: GATEWAY.may_load(deps.storage)?.map(|g| g.remote_gateway),
    })
}

/// Pure: reads no state.
pub fn query_finalize_calldata(
    token: String,
    from: String,
    to: String,
    amount: Uint128,
    extra_data: Binary,
) -> StdResult<FinalizeCalldataResponse> {
    let calldata = build_finalize_calldata(&token, &from, &to, amount, &extra_data)?;
    Ok(FinalizeCalldataResponse {
        calldata: Binary::from(calldata),
    })
}

pub fn query_deposits_allowed(deps: Deps) -> StdResult<DepositsAllowedResponse> {
    Ok(DepositsAllowedResponse {
        allows_deposits: ALLOWS_DEPOSITS.load(deps.storage)?,
    })
}

pub fn query_escrowed_balance(deps: Deps) -> StdResult<EscrowedBalanceResponse> {
    Ok(EscrowedBalanceResponse {
        token: GATEWAY.may_load(deps.storage)?.map(|g| g.home_token),
        amount: ESCROWED.load(deps.storage)?,
    })
}

pub fn query_exit_processed(deps: Deps, exit_num: Uint256) -> StdResult<ExitProcessedResponse> {
    Ok(ExitProcessedResponse {
        processed: PROCESSED_EXITS.has(deps.storage, &exit_num.to_be_bytes()),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_deposits: stats.total_deposits,
        total_withdrawals: stats.total_withdrawals,
    })
}
