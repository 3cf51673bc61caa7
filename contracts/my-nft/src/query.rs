use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;
use cw_utils::Expiration;

use crate::msg::{
    Approval, ContractInfoResponse, NftInfoResponse, NumTokensResponse, OwnerOfResponse,
    TokensResponse,
};
use crate::state::{COLLECTION_INFO, TOKENS, TOKEN_COUNT};

pub fn query_owner_of(deps: Deps, token_id: String) -> StdResult<OwnerOfResponse> {
    let token = TOKENS.load(deps.storage, &token_id)?;
    Ok(OwnerOfResponse {
        owner: token.owner.to_string(),
        approvals: token
            .approvals
            .into_iter()
            .map(|spender| Approval {
                spender: spender.to_string(),
                expires: Expiration::Never {},
            })
            .collect(),
    })
}

pub fn query_nft_info(deps: Deps, token_id: String) -> StdResult<NftInfoResponse> {
    let token = TOKENS.load(deps.storage, &token_id)?;
    Ok(NftInfoResponse {
        token_uri: token.token_uri,
    })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<NumTokensResponse> {
    let count = TOKEN_COUNT.may_load(deps.storage)?.unwrap_or_default();
    Ok(NumTokensResponse { count })
}

pub fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let info = COLLECTION_INFO.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: info.name,
        symbol: info.symbol,
    })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .filter_map(|item| {
            let (token_id, token) = item.ok()?;
            if token.owner == owner {
                Some(token_id)
            } else {
                None
            }
        })
        .take(limit)
        .collect();

    Ok(TokensResponse { tokens })
}
