use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    AddressResponse, ConfigResponse, OwnershipResponse, PriceResponse, RatioResponse,
    WithdrawableAmountResponse,
};
use crate::state::{CONFIG, PENDING_OWNER, WITHDRAWABLE};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token_address: config.token_address,
        nft_address: config.nft_address,
        ratio: config.ratio,
        price: config.price,
        native_denom: config.native_denom,
    })
}

pub fn query_ratio(deps: Deps) -> StdResult<RatioResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RatioResponse {
        ratio: config.ratio,
    })
}

pub fn query_token_address(deps: Deps) -> StdResult<AddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AddressResponse {
        address: config.token_address,
    })
}

pub fn query_nft_address(deps: Deps) -> StdResult<AddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AddressResponse {
        address: config.nft_address,
    })
}

pub fn query_price(deps: Deps) -> StdResult<PriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PriceResponse {
        price: config.price,
    })
}

pub fn query_withdrawable_amount(deps: Deps) -> StdResult<WithdrawableAmountResponse> {
    let amount = WITHDRAWABLE.may_load(deps.storage)?.unwrap_or_default();
    Ok(WithdrawableAmountResponse { amount })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: config.owner,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}
