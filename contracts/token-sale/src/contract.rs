use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, WITHDRAWABLE};

const CONTRACT_NAME: &str = "crates.io:token-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.ratio == 0 {
        return Err(ContractError::InvalidRatio);
    }
    if msg.price.is_zero() {
        return Err(ContractError::InvalidPrice);
    }

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let config = Config {
        owner,
        token_address: deps.api.addr_validate(&msg.token_address)?,
        nft_address: deps.api.addr_validate(&msg.nft_address)?,
        ratio: msg.ratio,
        price: msg.price,
        native_denom: msg.native_denom,
    };

    CONFIG.save(deps.storage, &config)?;
    WITHDRAWABLE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("token_address", config.token_address.to_string())
        .add_attribute("nft_address", config.nft_address.to_string())
        .add_attribute("ratio", config.ratio.to_string())
        .add_attribute("price", config.price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BuyTokens {} => {
            crate::execute::buy_tokens::execute_buy_tokens(deps, env, info)
        }
        ExecuteMsg::BurnTokens { amount } => {
            crate::execute::burn_tokens::execute_burn_tokens(deps, env, info, amount)
        }
        ExecuteMsg::BuyNft { token_id } => {
            crate::execute::buy_nft::execute_buy_nft(deps, env, info, token_id)
        }
        ExecuteMsg::BurnNft { token_id } => {
            crate::execute::burn_nft::execute_burn_nft(deps, env, info, token_id)
        }
        ExecuteMsg::Withdraw { amount } => {
            crate::execute::withdraw::execute_withdraw(deps, env, info, amount)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            crate::execute::ownership::execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => {
            crate::execute::ownership::execute_accept_ownership(deps, info)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Ratio {} => to_json_binary(&crate::query::query_ratio(deps)?),
        QueryMsg::TokenAddress {} => to_json_binary(&crate::query::query_token_address(deps)?),
        QueryMsg::NftAddress {} => to_json_binary(&crate::query::query_nft_address(deps)?),
        QueryMsg::Price {} => to_json_binary(&crate::query::query_price(deps)?),
        QueryMsg::WithdrawableAmount {} => {
            to_json_binary(&crate::query::query_withdrawable_amount(deps)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&crate::query::query_ownership(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
