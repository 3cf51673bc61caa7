use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{NftExecuteMsg, NftOwnerResponse, NftQueryMsg};
use crate::state::{CONFIG, SOLD};

/// Burns an item owned by the sender and refunds the part of the price that
/// stayed as contract balance. The owner pool is not touched.
pub fn execute_burn_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let item: NftOwnerResponse = deps
        .querier
        .query_wasm_smart(
            config.nft_address.to_string(),
            &NftQueryMsg::OwnerOf {
                token_id: token_id.clone(),
                include_expired: None,
            },
        )
        .map_err(|_| ContractError::ItemNotFound {
            token_id: token_id.clone(),
        })?;
    if item.owner != info.sender.as_str() {
        return Err(ContractError::NotItemOwner { token_id });
    }

    if !SOLD.has(deps.storage, &token_id) {
        return Err(ContractError::ItemNotSold { token_id });
    }
    SOLD.remove(deps.storage, &token_id);

    let refund = config.refund_share();

    // The collection checks that this contract was approved for the item
    let burn_msg = WasmMsg::Execute {
        contract_addr: config.nft_address.to_string(),
        msg: to_json_binary(&NftExecuteMsg::Burn {
            token_id: token_id.clone(),
        })?,
        funds: vec![],
    };
    let refund_msg = WasmMsg::Execute {
        contract_addr: config.token_address.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: refund,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_message(refund_msg)
        .add_attribute("action", "token_sale.nft_burned")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("token_id", token_id)
        .add_attribute("refund", refund.to_string()))
}
