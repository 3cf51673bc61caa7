#[cfg(test)]
pub mod helpers {
    use std::collections::HashMap;

    use cosmwasm_std::testing::{
        mock_dependencies_with_balance, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
        MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{
        coins, from_json, to_json_binary, Coin, ContractResult, Env, OwnedDeps, Response,
        SystemError, SystemResult, Uint128, WasmQuery,
    };

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;

    pub const OWNER: &str = "owner";
    pub const BUYER: &str = "buyer";
    pub const RANDOM_USER: &str = "random_user";
    pub const TOKEN_CW20: &str = "payment_token";
    pub const NFT_CONTRACT: &str = "item_nft";
    pub const DENOM: &str = "uaxm";
    pub const RATIO: u64 = 2;
    pub const PRICE: u128 = 20_000;
    pub const RESERVE: u128 = 1_000_000;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            ratio: RATIO,
            price: Uint128::new(PRICE),
            token_address: TOKEN_CW20.to_string(),
            nft_address: NFT_CONTRACT.to_string(),
            native_denom: DENOM.to_string(),
            owner: None,
        }
    }

    /// Contract starts with `RESERVE` native coin and an empty item collection.
    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies_with_balance(&coins(RESERVE, DENOM));
        let env = mock_env();
        let info = mock_info(OWNER, &[]);

        let res = instantiate(deps.as_mut(), env.clone(), info, default_instantiate_msg()).unwrap();
        assert_eq!(res.attributes.len(), 6);

        (deps, env)
    }

    pub fn set_reserve(deps: &mut MockDeps, amount: u128) {
        deps.querier
            .update_balance(MOCK_CONTRACT_ADDR, coins(amount, DENOM));
    }

    /// Serve `OwnerOf` queries on the item collection from a fixed table.
    pub fn set_item_owners(deps: &mut MockDeps, owners: &[(&str, &str)]) {
        let owners: HashMap<String, String> = owners
            .iter()
            .map(|(token_id, owner)| (token_id.to_string(), owner.to_string()))
            .collect();

        deps.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } if contract_addr == NFT_CONTRACT => {
                let NftQueryMsg::OwnerOf { token_id, .. } = from_json(msg).unwrap();
                match owners.get(&token_id) {
                    Some(owner) => SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&NftOwnerResponse {
                            owner: owner.clone(),
                        })
                        .unwrap(),
                    )),
                    None => SystemResult::Ok(ContractResult::Err(format!(
                        "Token not found: {token_id}"
                    ))),
                }
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "wasm".to_string(),
            }),
        });
    }

    pub fn buy_tokens(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        funds: &[Coin],
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, funds);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::BuyTokens {})
    }

    pub fn burn_tokens(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: u128,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::BurnTokens {
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn buy_nft(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        token_id: &str,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::BuyNft {
                token_id: token_id.to_string(),
            },
        )
    }

    pub fn burn_nft(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        token_id: &str,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::BurnNft {
                token_id: token_id.to_string(),
            },
        )
    }

    pub fn withdraw(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: Option<u128>,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::Withdraw {
                amount: amount.map(Uint128::new),
            },
        )
    }

    pub fn query_config(deps: &MockDeps, env: &Env) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_withdrawable(deps: &MockDeps, env: &Env) -> Uint128 {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::WithdrawableAmount {}).unwrap();
        let res: WithdrawableAmountResponse = from_json(&res).unwrap();
        res.amount
    }

    pub fn query_ownership(deps: &MockDeps, env: &Env) -> OwnershipResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Ownership {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn has_attribute(res: &Response, key: &str, value: &str) -> bool {
        res.attributes.iter().any(|a| a.key == key && a.value == value)
    }
}
