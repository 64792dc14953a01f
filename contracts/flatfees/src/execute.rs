use cosmwasm_std::{Addr, DepsMut, Response};

use flatfees::{ConversionFactor, GenesisState, MsgFee, Params};

use crate::{
    error::ContractError,
    helpers::{assert_authority, validate_msg_fees_update},
    state::*,
};

/// Import the genesis state. Nothing is stored unless the whole state is valid.
pub fn init(
    deps: DepsMut,
    authority: Addr,
    genesis: GenesisState,
) -> Result<Response, ContractError> {
    genesis.validate()?;

    AUTHORITY.save(deps.storage, &authority)?;
    PARAMS.save(deps.storage, &genesis.params)?;

    for msg_fee in &genesis.msg_fees {
        set_msg_fee(deps.storage, msg_fee)?;
    }

    Ok(Response::new()
        .add_attribute("action", "flatfees/init")
        .add_attribute("authority", authority)
        .add_attribute("default_cost", genesis.params.default_cost.to_string())
        .add_attribute("conversion_factor", genesis.params.conversion_factor.to_string())
        .add_attribute("msg_fees", genesis.msg_fees.len().to_string()))
}

pub fn update_params(
    deps: DepsMut,
    sender: Addr,
    params: Params,
) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &sender)?;

    params.validate()?;
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "flatfees/update_params")
        .add_attribute("default_cost", params.default_cost.to_string())
        .add_attribute("conversion_factor", params.conversion_factor.to_string()))
}

pub fn update_conversion_factor(
    deps: DepsMut,
    sender: Addr,
    conversion_factor: ConversionFactor,
) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &sender)?;

    // the new factor must still be compatible with the default cost
    let mut params = PARAMS.load(deps.storage)?;
    params.conversion_factor = conversion_factor;
    params.validate()?;
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "flatfees/update_conversion_factor")
        .add_attribute("conversion_factor", params.conversion_factor.to_string()))
}

pub fn update_msg_fees(
    deps: DepsMut,
    sender: Addr,
    to_set: Vec<MsgFee>,
    to_unset: Vec<String>,
) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &sender)?;

    validate_msg_fees_update(&to_set, &to_unset)?;

    // make sure every removal can succeed before writing anything
    for msg_type_url in &to_unset {
        assert_msg_fee_exists(deps.storage, msg_type_url)?;
    }

    for msg_fee in &to_set {
        set_msg_fee(deps.storage, msg_fee)?;
    }

    for msg_type_url in &to_unset {
        remove_msg_fee(deps.storage, msg_type_url);
    }

    Ok(Response::new()
        .add_attribute("action", "flatfees/update_msg_fees")
        .add_attribute(
            "msg_fees_set",
            to_set.iter().map(|msg_fee| msg_fee.to_string()).collect::<Vec<_>>().join(";"),
        )
        .add_attribute("msg_fees_unset", to_unset.join(",")))
}
