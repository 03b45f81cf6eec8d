//! Shared cw-multi-test setup: a CW20 token, a mock crosschain messenger and
//! the gateway, wired together and configured.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, Uint256, WasmMsg,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::{DispatchResponse, FinalizeInboundTransferMsg, OriginatorResponse};
use custom_gateway::address_codec::encode_bech32_address;
use custom_gateway::encode_outbound_data;
use custom_gateway::msg::{ExecuteMsg, InstantiateMsg, OutboundTransferMsg};

pub const PREFIX: &str = "terra";
pub const REMOTE_TOKEN: &str = "0x55d398326f99059ff775485246999027b3197955";
pub const REMOTE_GATEWAY: &str = "0x1234567890abcdef1234567890abcdef12345678";
pub const REMOTE_ALICE: &str = "0x00000000000000000000000000000000000a11ce";
pub const INITIAL_BALANCE: u128 = 1_000_000;

// ============================================================================
// Mock Messenger
// ============================================================================

#[cw_serde]
pub enum MockMessengerExecuteMsg {
    DispatchMessage {
        target: String,
        refund_to: String,
        from: String,
        remote_call_value: Uint128,
        max_submission_cost: Uint256,
        max_gas: u64,
        gas_price_bid: Uint128,
        calldata: Binary,
    },
    /// Deliver a remote message to `gateway` as if sent by `originator`
    Deliver {
        originator: String,
        gateway: String,
        transfer: FinalizeInboundTransferMsg,
    },
    /// Forward a call to `gateway` with no remote originator attached
    Relay {
        gateway: String,
        transfer: FinalizeInboundTransferMsg,
    },
    /// End of a delivery; the originator is only visible while it runs
    ClearOriginator {},
    /// Make every following dispatch fail
    Halt {},
}

#[cw_serde]
pub enum MockMessengerQueryMsg {
    CurrentMessageOriginator {},
    LastDispatch {},
}

#[cw_serde]
pub struct RecordedDispatch {
    pub sequence_number: u64,
    pub target: String,
    pub refund_to: String,
    pub from: String,
    pub max_submission_cost: Uint256,
    pub max_gas: u64,
    pub gas_price_bid: Uint128,
    pub calldata: Binary,
    pub funds: Vec<Coin>,
}

const SEQUENCE: Item<u64> = Item::new("sequence");
const ORIGINATOR: Item<String> = Item::new("originator");
const HALTED: Item<bool> = Item::new("halted");
const LAST_DISPATCH: Item<RecordedDispatch> = Item::new("last_dispatch");

fn messenger_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn messenger_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: MockMessengerExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockMessengerExecuteMsg::DispatchMessage {
            target,
            refund_to,
            from,
            max_submission_cost,
            max_gas,
            gas_price_bid,
            calldata,
            ..
        } => {
            if HALTED.may_load(deps.storage)?.unwrap_or(false) {
                return Err(StdError::generic_err("messenger halted"));
            }
            let sequence_number = SEQUENCE.may_load(deps.storage)?.unwrap_or(0) + 1;
            SEQUENCE.save(deps.storage, &sequence_number)?;
            LAST_DISPATCH.save(
                deps.storage,
                &RecordedDispatch {
                    sequence_number,
                    target,
                    refund_to,
                    from,
                    max_submission_cost,
                    max_gas,
                    gas_price_bid,
                    calldata,
                    funds: info.funds,
                },
            )?;
            Ok(Response::new().set_data(to_json_binary(&DispatchResponse { sequence_number })?))
        }
        MockMessengerExecuteMsg::Deliver {
            originator,
            gateway,
            transfer,
        } => {
            ORIGINATOR.save(deps.storage, &originator)?;
            Ok(Response::new()
                .add_message(finalize_call(gateway, transfer)?)
                .add_message(WasmMsg::Execute {
                    contract_addr: env.contract.address.to_string(),
                    msg: to_json_binary(&MockMessengerExecuteMsg::ClearOriginator {})?,
                    funds: vec![],
                }))
        }
        MockMessengerExecuteMsg::Relay { gateway, transfer } => {
            Ok(Response::new().add_message(finalize_call(gateway, transfer)?))
        }
        MockMessengerExecuteMsg::ClearOriginator {} => {
            if info.sender != env.contract.address {
                return Err(StdError::generic_err("only the messenger clears"));
            }
            ORIGINATOR.remove(deps.storage);
            Ok(Response::new())
        }
        MockMessengerExecuteMsg::Halt {} => {
            HALTED.save(deps.storage, &true)?;
            Ok(Response::new())
        }
    }
}

fn finalize_call(gateway: String, transfer: FinalizeInboundTransferMsg) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: gateway,
        msg: to_json_binary(&ExecuteMsg::FinalizeInboundTransfer(transfer))?,
        funds: vec![],
    })
}

fn messenger_query(deps: Deps, _env: Env, msg: MockMessengerQueryMsg) -> StdResult<Binary> {
    match msg {
        MockMessengerQueryMsg::CurrentMessageOriginator {} => to_json_binary(&OriginatorResponse {
            originator: ORIGINATOR.may_load(deps.storage)?,
        }),
        MockMessengerQueryMsg::LastDispatch {} => {
            to_json_binary(&LAST_DISPATCH.may_load(deps.storage)?)
        }
    }
}

fn contract_messenger() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        messenger_execute,
        messenger_instantiate,
        messenger_query,
    ))
}

// ============================================================================
// Gateway & Token
// ============================================================================

fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        custom_gateway::contract::execute,
        custom_gateway::contract::instantiate,
        custom_gateway::contract::query,
    )
    .with_reply(custom_gateway::contract::reply)
    .with_migrate(custom_gateway::contract::migrate);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// Bech32 home-chain account derived from a seed byte
pub fn home_addr(seed: u8) -> Addr {
    Addr::unchecked(encode_bech32_address(&[seed; 20], PREFIX).unwrap())
}

pub struct TestEnv {
    pub app: App,
    pub gateway: Addr,
    pub token: Addr,
    pub messenger: Addr,
    pub owner: Addr,
    pub router: Addr,
    pub alice: Addr,
    pub bob: Addr,
}

/// Gateway instantiated but not configured; alice holds tokens.
pub fn setup_unconfigured() -> TestEnv {
    let mut app = App::default();

    let owner = home_addr(1);
    let router = home_addr(2);
    let alice = home_addr(3);
    let bob = home_addr(4);

    app.init_modules(|router_mod, _, storage| {
        router_mod
            .bank
            .init_balance(storage, &router, coins(10_000_000_000, "uluna"))
            .unwrap();
    });

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Home Token".to_string(),
                symbol: "HOME".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: alice.to_string(),
                    amount: Uint128::new(INITIAL_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "home-token",
            None,
        )
        .unwrap();

    let messenger_code = app.store_code(contract_messenger());
    let messenger = app
        .instantiate_contract(
            messenger_code,
            owner.clone(),
            &Empty {},
            &[],
            "messenger",
            None,
        )
        .unwrap();

    let gateway_code = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                router: router.to_string(),
                messenger: messenger.to_string(),
                bech32_prefix: PREFIX.to_string(),
            },
            &[],
            "custom-gateway",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        gateway,
        token,
        messenger,
        owner,
        router,
        alice,
        bob,
    }
}

/// Gateway configured for the CW20 and alice has approved the gateway.
pub fn setup() -> TestEnv {
    let mut env = setup_unconfigured();

    env.app
        .execute_contract(
            env.owner.clone(),
            env.gateway.clone(),
            &ExecuteMsg::Configure {
                home_token: env.token.to_string(),
                remote_token: REMOTE_TOKEN.to_string(),
                remote_gateway: REMOTE_GATEWAY.to_string(),
            },
            &[],
        )
        .unwrap();

    approve(&mut env, INITIAL_BALANCE);
    env
}

pub fn approve(env: &mut TestEnv, amount: u128) {
    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: env.gateway.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
}

/// Outbound transfer as the router would forward it for `from`
pub fn outbound_msg(env: &TestEnv, from: &Addr, amount: u128, extra_data: &[u8]) -> ExecuteMsg {
    let data = encode_outbound_data(from.as_str(), Uint256::from(1_000u128), extra_data).unwrap();
    ExecuteMsg::OutboundTransfer(OutboundTransferMsg {
        token: env.token.to_string(),
        refund_to: REMOTE_ALICE.to_string(),
        to: REMOTE_ALICE.to_string(),
        amount: Uint128::new(amount),
        max_gas: 300_000,
        gas_price_bid: Uint128::new(1_000_000_000),
        data: Binary::from(data),
    })
}

/// Router deposits `amount` for alice
pub fn deposit(env: &mut TestEnv, amount: u128) -> anyhow::Result<AppResponse> {
    let msg = outbound_msg(env, &env.alice, amount, &[]);
    env.app
        .execute_contract(env.router.clone(), env.gateway.clone(), &msg, &[])
}

/// Messenger delivers a withdrawal from `originator`
pub fn deliver(
    env: &mut TestEnv,
    originator: &str,
    to: &Addr,
    amount: u128,
    exit_num: u128,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        Addr::unchecked("relayer"),
        env.messenger.clone(),
        &MockMessengerExecuteMsg::Deliver {
            originator: originator.to_string(),
            gateway: env.gateway.to_string(),
            transfer: FinalizeInboundTransferMsg {
                token: env.token.to_string(),
                from: REMOTE_ALICE.to_string(),
                to: to.to_string(),
                amount: Uint128::new(amount),
                exit_num: Uint256::from(exit_num),
            },
        },
        &[],
    )
}

pub fn balance(env: &TestEnv, addr: &Addr) -> u128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

pub fn current_originator(env: &TestEnv) -> Option<String> {
    let res: OriginatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &MockMessengerQueryMsg::CurrentMessageOriginator {},
        )
        .unwrap();
    res.originator
}

pub fn last_dispatch(env: &TestEnv) -> Option<RecordedDispatch> {
    env.app
        .wrap()
        .query_wasm_smart(&env.messenger, &MockMessengerQueryMsg::LastDispatch {})
        .unwrap()
}

/// Attribute of a custom event emitted by the gateway
pub fn event_attr(res: &AppResponse, event: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == format!("wasm-{}", event))
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
