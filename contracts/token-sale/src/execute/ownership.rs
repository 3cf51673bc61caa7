use cosmwasm_std::{DepsMut, MessageInfo, Response};
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::state::{CONFIG, PENDING_OWNER};

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let pending = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("action", "token_sale.ownership_proposed")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("pending_owner", pending.to_string()))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;
    if info.sender != pending {
        return Err(ContractError::Unauthorized);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.owner, pending);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "token_sale.ownership_accepted")
        .add_attribute("previous_owner", previous.to_string())
        .add_attribute("owner", config.owner.to_string()))
}
