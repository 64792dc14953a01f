use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;

use crate::{is_zero_cost, stringify_coins, validate_cost, ValidationError};

/// The maximum length, in bytes, of a msg type url
pub const MAX_MSG_TYPE_URL_LEN: usize = 160;

/// The flat fee charged for a specific type of message
#[cw_serde]
pub struct MsgFee {
    /// The type url of the message this fee applies to, e.g. `/cosmos.bank.v1beta1.MsgSend`
    pub msg_type_url: String,
    /// The cost of the message, in the fee definition denom(s).
    /// An empty cost means the message is free.
    pub cost: Vec<Coin>,
}

impl fmt::Display for MsgFee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let url: &str = if self.msg_type_url.is_empty() {
            "\"\""
        } else {
            &self.msg_type_url
        };
        if self.cost.is_empty() {
            write!(f, "{}=<free>", url)
        } else {
            write!(f, "{}={}", url, stringify_coins(&self.cost))
        }
    }
}

impl MsgFee {
    /// Create a new msg fee. The cost is sorted by denom.
    pub fn new(msg_type_url: impl Into<String>, mut cost: Vec<Coin>) -> Self {
        cost.sort_by(|a, b| a.denom.cmp(&b.denom));
        MsgFee {
            msg_type_url: msg_type_url.into(),
            cost,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_msg_type_url(&self.msg_type_url)?;

        validate_cost(&self.cost).map_err(|err| {
            ValidationError::field(
                format!("{} cost {:?}", self.msg_type_url, stringify_coins(&self.cost)),
                err,
            )
        })
    }

    /// Whether this message is explicitly free
    pub fn is_free(&self) -> bool {
        is_zero_cost(&self.cost)
    }
}

pub fn validate_msg_type_url(msg_type_url: &str) -> Result<(), ValidationError> {
    if msg_type_url.is_empty() {
        return Err(ValidationError::EmptyMsgTypeUrl);
    }

    if msg_type_url.len() > MAX_MSG_TYPE_URL_LEN {
        return Err(ValidationError::msg_type_url_too_long(msg_type_url, MAX_MSG_TYPE_URL_LEN));
    }

    Ok(())
}
