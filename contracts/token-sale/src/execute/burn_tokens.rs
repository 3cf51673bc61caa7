use cosmwasm_std::{
    coins, to_json_binary, BankMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::state::CONFIG;

/// Burns `amount` payment tokens from the sender through its allowance and
/// pays back `amount / ratio` native coin. Allowance and balance are enforced
/// by the token contract; a failure there reverts the whole call.
pub fn execute_burn_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let refund = amount.checked_div(Uint128::from(config.ratio))?;
    if refund.is_zero() {
        return Err(ContractError::ZeroOutput {
            ratio: config.ratio,
        });
    }

    let reserve = deps
        .querier
        .query_balance(env.contract.address.to_string(), &config.native_denom)?;
    if reserve.amount < refund {
        return Err(ContractError::InsufficientReserve {
            available: reserve.amount.to_string(),
            requested: refund.to_string(),
        });
    }

    let burn_msg = WasmMsg::Execute {
        contract_addr: config.token_address.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    let refund_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(refund.u128(), &config.native_denom),
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_message(refund_msg)
        .add_attribute("action", "token_sale.tokens_burned")
        .add_attribute("burner", info.sender.to_string())
        .add_attribute("burned", amount.to_string())
        .add_attribute("refund", refund.to_string()))
}
