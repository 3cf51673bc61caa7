use access_control::{HasRoleResponse, RoleMembersResponse, RoleResponse, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_burn, execute_send, execute_transfer, query_balance, query_token_info,
};
use cw20_base::msg::InstantiateMsg as BaseInstantiateMsg;
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::ROLES;

const CONTRACT_NAME: &str = "crates.io:my-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // Minting goes through the role registry, so cw20-base gets no minter.
    let base_msg = BaseInstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: msg.initial_balances,
        mint: None,
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info.clone(), base_msg)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ROLES.grant_unchecked(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.grant_unchecked(deps.storage, MINTER_ROLE, &info.sender)?;

    let token_info = TOKEN_INFO.load(deps.storage)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("total_supply", token_info.total_supply.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            ensure_balance(deps.as_ref(), &info.sender, amount, ContractError::TransferExceedsBalance)?;
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Burn { amount } => {
            ensure_balance(deps.as_ref(), &info.sender, amount, ContractError::BurnExceedsBalance)?;
            Ok(execute_burn(deps, env, info, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => {
            ensure_balance(deps.as_ref(), &info.sender, amount, ContractError::TransferExceedsBalance)?;
            Ok(execute_send(deps, env, info, contract, amount, msg)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            let owner_addr = deps.api.addr_validate(&owner)?;
            ensure_allowance(deps.as_ref(), &owner_addr, &info.sender, amount)?;
            ensure_balance(deps.as_ref(), &owner_addr, amount, ContractError::TransferExceedsBalance)?;
            Ok(execute_transfer_from(deps, env, info, owner, recipient, amount)?)
        }
        ExecuteMsg::BurnFrom { owner, amount } => {
            let owner_addr = deps.api.addr_validate(&owner)?;
            ensure_allowance(deps.as_ref(), &owner_addr, &info.sender, amount)?;
            ensure_balance(deps.as_ref(), &owner_addr, amount, ContractError::BurnExceedsBalance)?;
            Ok(execute_burn_from(deps, env, info, owner, amount)?)
        }
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::GrantRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            let granted = ROLES.grant(deps.storage, &info.sender, &role, &account)?;
            Ok(role_response("grant_role", &role, &account, granted))
        }
        ExecuteMsg::RevokeRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            let revoked = ROLES.revoke(deps.storage, &info.sender, &role, &account)?;
            Ok(role_response("revoke_role", &role, &account, revoked))
        }
        ExecuteMsg::RenounceRole { role } => {
            let renounced = ROLES.renounce(deps.storage, &info.sender, &role);
            Ok(role_response("renounce_role", &role, &info.sender, renounced))
        }
    }
}

/// Minting is gated on `MINTER_ROLE` instead of cw20-base's single minter.
fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, MINTER_ROLE, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let rcpt_addr = deps.api.addr_validate(&recipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    BALANCES.update(
        deps.storage,
        &rcpt_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender.to_string())
        .add_attribute("to", rcpt_addr.to_string())
        .add_attribute("amount", amount.to_string()))
}

fn ensure_balance(
    deps: Deps,
    owner: &Addr,
    amount: Uint128,
    err: ContractError,
) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(deps.storage, owner)?.unwrap_or_default();
    if balance < amount {
        return Err(err);
    }
    Ok(())
}

fn ensure_allowance(
    deps: Deps,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let allowance = query_allowance(deps, owner.to_string(), spender.to_string())?;
    if allowance.allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

fn role_response(action: &str, role: &str, account: &Addr, changed: bool) -> Response {
    Response::new()
        .add_attribute("action", action)
        .add_attribute("role", role)
        .add_attribute("account", account.to_string())
        .add_attribute("changed", changed.to_string())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::HasRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            to_json_binary(&HasRoleResponse {
                has_role: ROLES.has_role(deps.storage, &role, &account),
            })
        }
        QueryMsg::MinterRole {} => to_json_binary(&RoleResponse {
            role: MINTER_ROLE.to_string(),
        }),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => {
            let start = start_after
                .map(|addr| deps.api.addr_validate(&addr))
                .transpose()?;
            let members = ROLES.members(deps.storage, &role, start.as_ref(), limit)?;
            to_json_binary(&RoleMembersResponse { role, members })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
