use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use flatfees::{MsgFee, Params};

use crate::error::ContractError;

/// The only account allowed to update the params and the fee table
pub const AUTHORITY: Item<Addr> = Item::new("authority");

/// Default cost and conversion factor
pub const PARAMS: Item<Params> = Item::new("params");

/// The fee table: msg fees, indexed by msg type url.
/// A msg type that isn't here is charged the default cost.
pub const MSG_FEES: Map<&str, MsgFee> = Map::new("msg_fees");

/// Look up the fee table entry for a msg type, if there is one.
pub fn get_msg_fee(store: &dyn Storage, msg_type_url: &str) -> StdResult<Option<MsgFee>> {
    MSG_FEES.may_load(store, msg_type_url)
}

/// Insert or replace a fee table entry.
pub fn set_msg_fee(store: &mut dyn Storage, msg_fee: &MsgFee) -> StdResult<()> {
    MSG_FEES.save(store, &msg_fee.msg_type_url, msg_fee)
}

/// Errors if the fee table has no entry for the msg type.
pub fn assert_msg_fee_exists(store: &dyn Storage, msg_type_url: &str) -> Result<(), ContractError> {
    if !MSG_FEES.has(store, msg_type_url) {
        return Err(ContractError::msg_fee_not_found(msg_type_url));
    }

    Ok(())
}

/// Delete a fee table entry, if there is one.
pub fn remove_msg_fee(store: &mut dyn Storage, msg_type_url: &str) {
    MSG_FEES.remove(store, msg_type_url);
}

/// The whole fee table, in ascending order of msg type url.
pub fn all_msg_fees(store: &dyn Storage) -> StdResult<Vec<MsgFee>> {
    MSG_FEES
        .range(store, None, None, Order::Ascending)
        .map(|item| item.map(|(_, msg_fee)| msg_fee))
        .collect()
}
