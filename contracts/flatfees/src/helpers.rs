use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Storage};

use flatfees::{validate_msg_type_url, MsgFee, ValidationError};

use crate::error::ContractError;
use crate::state::AUTHORITY;

/// Assert that the sender is the authority.
pub fn assert_authority(store: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let authority = AUTHORITY.load(store)?;

    if *sender != authority {
        return Err(ContractError::unauthorized(authority, sender.as_str()));
    }

    Ok(())
}

/// Check a request to update the fee table, before anything is written.
///
/// The request must not be empty, every entry must be valid, and each msg type url can only appear
/// once across both lists.
pub fn validate_msg_fees_update(
    to_set: &[MsgFee],
    to_unset: &[String],
) -> Result<(), ValidationError> {
    if to_set.is_empty() && to_unset.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    // msg type url => where it was first seen
    let mut seen: BTreeMap<&str, String> = BTreeMap::new();

    for (i, msg_fee) in to_set.iter().enumerate() {
        let field = format!("to_set[{}]", i);
        msg_fee.validate().map_err(|err| ValidationError::field(&field, err))?;

        if let Some(first) = seen.insert(&msg_fee.msg_type_url, field.clone()) {
            return Err(ValidationError::duplicate_msg_type_url(
                &msg_fee.msg_type_url,
                first,
                field,
            ));
        }
    }

    for (i, msg_type_url) in to_unset.iter().enumerate() {
        let field = format!("to_unset[{}]", i);
        validate_msg_type_url(msg_type_url).map_err(|err| ValidationError::field(&field, err))?;

        if let Some(first) = seen.insert(msg_type_url, field.clone()) {
            return Err(ValidationError::duplicate_msg_type_url(msg_type_url, first, field));
        }
    }

    Ok(())
}
