use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::state::{CONFIG, WITHDRAWABLE};

/// Owner-only: pay out payment tokens from the pool. `None` drains it.
pub fn execute_withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let pool = WITHDRAWABLE.load(deps.storage)?;
    let amount = amount.unwrap_or(pool);
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }
    if amount > pool {
        return Err(ContractError::InsufficientPool {
            available: pool.to_string(),
            requested: amount.to_string(),
        });
    }

    let remaining = pool - amount;
    WITHDRAWABLE.save(deps.storage, &remaining)?;

    let transfer_msg = WasmMsg::Execute {
        contract_addr: config.token_address.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: config.owner.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "token_sale.withdraw")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("pool", remaining.to_string()))
}
