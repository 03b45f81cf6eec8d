//! Ownership handover.
//!
//! The owner nominates a successor; the successor claims the role once
//! `OWNER_TIMELOCK_DURATION` has elapsed. Until then the owner can withdraw
//! or replace the nomination. Router, messenger and the token pair are not
//! affected by a handover.

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, StdResult};

use crate::error::ContractError;
use crate::guard::ensure_owner;
use crate::state::{PendingOwner, CONFIG, OWNER_TIMELOCK_DURATION, PENDING_OWNER};

pub fn execute_propose_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let candidate = deps.api.addr_validate(&new_owner)?;
    if candidate == config.owner {
        return Err(ContractError::InvalidAddress {
            reason: "new owner is already the owner".to_string(),
        });
    }

    let replaced = PENDING_OWNER.may_load(deps.storage)?;
    let nomination = PendingOwner {
        new_address: candidate,
        execute_after: env.block.time.plus_seconds(OWNER_TIMELOCK_DURATION),
    };
    PENDING_OWNER.save(deps.storage, &nomination)?;

    let mut event = Event::new("ownership_proposed")
        .add_attribute("owner", config.owner)
        .add_attribute("candidate", nomination.new_address.as_str())
        .add_attribute(
            "execute_after",
            nomination.execute_after.seconds().to_string(),
        );
    if let Some(replaced) = replaced {
        event = event.add_attribute("replaced_candidate", replaced.new_address);
    }

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_event(event))
}

pub fn execute_accept_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let nomination = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;
    if info.sender != nomination.new_address {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let remaining_seconds = nomination
        .execute_after
        .seconds()
        .saturating_sub(env.block.time.seconds());
    if remaining_seconds > 0 {
        return Err(ContractError::TimelockNotExpired { remaining_seconds });
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous_owner = std::mem::replace(&mut config.owner, nomination.new_address);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous_owner)
                .add_attribute("new_owner", config.owner),
        ))
}

pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let withdrawn = take_nomination(deps)?.ok_or(ContractError::NoPendingOwner)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_owner_proposal")
        .add_event(
            Event::new("ownership_proposal_cancelled")
                .add_attribute("candidate", withdrawn.new_address),
        ))
}

fn take_nomination(deps: DepsMut) -> StdResult<Option<PendingOwner>> {
    let nomination = PENDING_OWNER.may_load(deps.storage)?;
    PENDING_OWNER.remove(deps.storage);
    Ok(nomination)
}
