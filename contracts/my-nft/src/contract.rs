use access_control::{HasRoleResponse, RoleMembersResponse, RoleResponse, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{CollectionInfo, TokenInfo, COLLECTION_INFO, ROLES, TOKENS, TOKEN_COUNT};

const CONTRACT_NAME: &str = "crates.io:my-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    COLLECTION_INFO.save(
        deps.storage,
        &CollectionInfo {
            name: msg.name,
            symbol: msg.symbol,
        },
    )?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    ROLES.grant_unchecked(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.grant_unchecked(deps.storage, MINTER_ROLE, &info.sender)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            token_id,
            owner,
            token_uri,
        } => execute_mint(deps, info, token_id, owner, token_uri),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::Approve { spender, token_id } => {
            execute_approve(deps, info, spender, token_id)
        }
        ExecuteMsg::Revoke { spender, token_id } => execute_revoke(deps, info, spender, token_id),
        ExecuteMsg::Burn { token_id } => execute_burn(deps, info, token_id),
        ExecuteMsg::GrantRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            let granted = ROLES.grant(deps.storage, &info.sender, &role, &account)?;
            Ok(Response::new()
                .add_attribute("action", "grant_role")
                .add_attribute("role", role)
                .add_attribute("account", account.to_string())
                .add_attribute("changed", granted.to_string()))
        }
        ExecuteMsg::RevokeRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            let revoked = ROLES.revoke(deps.storage, &info.sender, &role, &account)?;
            Ok(Response::new()
                .add_attribute("action", "revoke_role")
                .add_attribute("role", role)
                .add_attribute("account", account.to_string())
                .add_attribute("changed", revoked.to_string()))
        }
        ExecuteMsg::RenounceRole { role } => {
            let renounced = ROLES.renounce(deps.storage, &info.sender, &role);
            Ok(Response::new()
                .add_attribute("action", "renounce_role")
                .add_attribute("role", role)
                .add_attribute("account", info.sender.to_string())
                .add_attribute("changed", renounced.to_string()))
        }
    }
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
    owner: String,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, MINTER_ROLE, &info.sender)?;

    let owner = deps.api.addr_validate(&owner)?;
    let token = TokenInfo {
        owner: owner.clone(),
        approvals: vec![],
        token_uri,
    };
    TOKENS.update(deps.storage, &token_id, |existing| match existing {
        Some(_) => Err(ContractError::Claimed),
        None => Ok(token),
    })?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender.to_string())
        .add_attribute("owner", owner.to_string())
        .add_attribute("token_id", token_id))
}

fn execute_transfer_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;
    if !token.can_operate(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    token.owner = recipient.clone();
    token.approvals.clear();
    TOKENS.save(deps.storage, &token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("token_id", token_id))
}

fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;
    if token.owner != info.sender {
        return Err(ContractError::Unauthorized);
    }

    let spender = deps.api.addr_validate(&spender)?;
    if !token.approvals.contains(&spender) {
        token.approvals.push(spender.clone());
        TOKENS.save(deps.storage, &token_id, &token)?;
    }

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("spender", spender.to_string())
        .add_attribute("token_id", token_id))
}

fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;
    if token.owner != info.sender {
        return Err(ContractError::Unauthorized);
    }

    let spender = deps.api.addr_validate(&spender)?;
    let before = token.approvals.len();
    token.approvals.retain(|approved| *approved != spender);
    if token.approvals.len() == before {
        return Err(ContractError::ApprovalNotFound {
            spender: spender.to_string(),
        });
    }
    TOKENS.save(deps.storage, &token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("spender", spender.to_string())
        .add_attribute("token_id", token_id))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let token = load_token(deps.as_ref(), &token_id)?;
    if !token.can_operate(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    TOKENS.remove(deps.storage, &token_id);
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> {
        Ok(count.saturating_sub(1))
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("owner", token.owner.to_string())
        .add_attribute("token_id", token_id))
}

fn load_token(deps: Deps, token_id: &str) -> Result<TokenInfo, ContractError> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.to_string(),
        })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { token_id, .. } => {
            to_json_binary(&crate::query::query_owner_of(deps, token_id)?)
        }
        QueryMsg::NftInfo { token_id } => {
            to_json_binary(&crate::query::query_nft_info(deps, token_id)?)
        }
        QueryMsg::NumTokens {} => to_json_binary(&crate::query::query_num_tokens(deps)?),
        QueryMsg::ContractInfo {} => to_json_binary(&crate::query::query_contract_info(deps)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&crate::query::query_tokens(
            deps,
            owner,
            start_after,
            limit,
        )?),
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
