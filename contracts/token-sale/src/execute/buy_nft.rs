use cosmwasm_std::{
    to_json_binary, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{NftExecuteMsg, NftOwnerResponse, NftQueryMsg};
use crate::state::{CONFIG, SOLD, WITHDRAWABLE};

/// Charges `price` payment tokens, mints item `token_id` to the sender and
/// credits half of the price to the owner pool.
pub fn execute_buy_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    // An existing owner means the item was already sold
    let existing: StdResult<NftOwnerResponse> = deps.querier.query_wasm_smart(
        config.nft_address.to_string(),
        &NftQueryMsg::OwnerOf {
            token_id: token_id.clone(),
            include_expired: None,
        },
    );
    match existing {
        Ok(_) => return Err(ContractError::ItemAlreadyOwned { token_id }),
        Err(err) if is_missing_item(&err) => {}
        Err(err) => return Err(err.into()),
    }
    SOLD.save(deps.storage, &token_id, &Empty {})?;

    let share = config.pool_share();
    let pool = WITHDRAWABLE.update(deps.storage, |pool| -> StdResult<Uint128> {
        Ok(pool.checked_add(share)?)
    })?;

    let payment_msg = WasmMsg::Execute {
        contract_addr: config.token_address.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount: config.price,
        })?,
        funds: vec![],
    };
    let mint_msg = WasmMsg::Execute {
        contract_addr: config.nft_address.to_string(),
        msg: to_json_binary(&NftExecuteMsg::Mint {
            token_id: token_id.clone(),
            owner: info.sender.to_string(),
            token_uri: None,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payment_msg)
        .add_message(mint_msg)
        .add_attribute("action", "token_sale.nft_bought")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("token_id", token_id)
        .add_attribute("price", config.price.to_string())
        .add_attribute("pool", pool.to_string()))
}

/// The collection answered, but had no such item. System errors and
/// unreadable responses are not treated as a missing item.
fn is_missing_item(err: &StdError) -> bool {
    match err {
        StdError::GenericErr { msg, .. } => {
            msg.starts_with("Querier contract error") && msg.to_lowercase().contains("not found")
        }
        _ => false,
    }
}
