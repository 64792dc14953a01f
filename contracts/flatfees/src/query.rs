use cosmwasm_std::{Coins, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use flatfees::msg::{CalculateMsgCostResponse, MsgFeeResponse, MsgFeesResponse, ParamsResponse};
use flatfees::{validate_msg_type_url, GenesisState, MsgFee, TxMsg};

use crate::cost::calculate_msg_cost;
use crate::error::ContractError;
use crate::expand::{expand_msgs, JsonMsgDecoder};
use crate::state::*;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub fn params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = PARAMS.load(deps.storage)?;
    Ok(ParamsResponse {
        params,
    })
}

/// The fee for a msg type. A msg type with no entry costs the default.
pub fn msg_fee(
    deps: Deps,
    msg_type_url: String,
    do_not_convert: bool,
) -> Result<MsgFeeResponse, ContractError> {
    validate_msg_type_url(&msg_type_url)?;

    let params = PARAMS.load(deps.storage)?;
    let msg_fee = match get_msg_fee(deps.storage, &msg_type_url)? {
        Some(msg_fee) => msg_fee,
        None => MsgFee::new(msg_type_url, params.default_cost_coins()),
    };

    let msg_fee = if do_not_convert {
        msg_fee
    } else {
        params.conversion_factor.convert_msg_fee(&msg_fee)?
    };

    Ok(MsgFeeResponse {
        msg_fee,
    })
}

pub fn msg_fees(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
    do_not_convert: bool,
) -> StdResult<MsgFeesResponse> {
    let start = start_after.map(|url| Bound::ExclusiveRaw(url.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let params = PARAMS.load(deps.storage)?;

    let msg_fees = MSG_FEES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, msg_fee) = item?;
            if do_not_convert {
                Ok(msg_fee)
            } else {
                params.conversion_factor.convert_msg_fee(&msg_fee)
            }
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MsgFeesResponse {
        msg_fees,
    })
}

/// Expand the messages, then price all of them.
pub fn calculate_msg_cost_of(
    deps: Deps,
    msgs: Vec<TxMsg>,
) -> Result<CalculateMsgCostResponse, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let all_msgs = expand_msgs(&JsonMsgDecoder, &msgs)?;
    let cost = calculate_msg_cost(deps.storage, &params, &all_msgs)?;

    let mut total = Coins::default();
    for coin in cost.up_front.iter().chain(cost.on_success.iter()) {
        total.add(coin.clone())?;
    }

    Ok(CalculateMsgCostResponse {
        total: total.into_vec(),
        up_front: cost.up_front,
        on_success: cost.on_success,
    })
}

/// The current state, in a form that can be fed back into `instantiate`.
pub fn export_genesis(deps: Deps) -> StdResult<GenesisState> {
    Ok(GenesisState {
        params: PARAMS.load(deps.storage)?,
        msg_fees: all_msg_fees(deps.storage)?,
    })
}
