use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};

use flatfees::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::error::ContractError;
use crate::{execute, query};

pub const CONTRACT_NAME: &str = "crates.io:flatfees";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let authority = deps.api.addr_validate(&msg.authority)?;
    execute::init(deps, authority, msg.genesis)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateParams {
            params,
        } => execute::update_params(deps, info.sender, params),
        ExecuteMsg::UpdateConversionFactor {
            conversion_factor,
        } => execute::update_conversion_factor(deps, info.sender, conversion_factor),
        ExecuteMsg::UpdateMsgFees {
            to_set,
            to_unset,
        } => execute::update_msg_fees(deps, info.sender, to_set, to_unset),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Params {} => Ok(to_json_binary(&query::params(deps)?)?),
        QueryMsg::MsgFee {
            msg_type_url,
            do_not_convert,
        } => Ok(to_json_binary(&query::msg_fee(deps, msg_type_url, do_not_convert)?)?),
        QueryMsg::MsgFees {
            start_after,
            limit,
            do_not_convert,
        } => Ok(to_json_binary(&query::msg_fees(deps, start_after, limit, do_not_convert)?)?),
        QueryMsg::CalculateMsgCost {
            msgs,
        } => Ok(to_json_binary(&query::calculate_msg_cost_of(deps, msgs)?)?),
        QueryMsg::ExportGenesis {} => Ok(to_json_binary(&query::export_genesis(deps)?)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let cw2::ContractVersion {
        contract,
        version,
    } = cw2::get_contract_version(deps.storage)?;

    if contract != CONTRACT_NAME {
        return Err(ContractError::incorrect_contract_name(CONTRACT_NAME, contract));
    }

    // no release so far has changed the storage layout
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "flatfees/migrate")
        .add_attribute("from_version", version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
