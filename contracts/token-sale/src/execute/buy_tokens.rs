use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::state::CONFIG;

/// Sender attaches native coin and receives `sent * ratio` freshly minted
/// payment tokens. The native coin stays in the contract as burn reserve.
pub fn execute_buy_tokens(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let paid = must_pay(&info, &config.native_denom)?;
    let minted = paid.checked_mul(Uint128::from(config.ratio))?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: config.token_address.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: minted,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "token_sale.tokens_bought")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("minted", minted.to_string()))
}
