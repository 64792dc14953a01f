use cosmwasm_std::StdError;
use thiserror::Error;

use flatfees::ValidationError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("unauthorized: expected authority {expected}, got {found}")]
    Unauthorized {
        expected: String,
        found: String,
    },

    #[error("cannot remove msg fee for {msg_type_url:?}: msg fee does not exist")]
    MsgFeeNotFound {
        msg_type_url: String,
    },

    #[error("could not expand sub-messages: max depth exceeded")]
    MaxDepthExceeded,

    #[error(
        "could not extract sub-messages from {container}: could not unpack a {type_url:?}: \
         {reason}"
    )]
    Decode {
        container: String,
        type_url: String,
        reason: String,
    },

    #[error("incorrect contract name: expecting {expected}, found {found}")]
    IncorrectContractName {
        expected: String,
        found: String,
    },
}

impl ContractError {
    pub fn unauthorized(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ContractError::Unauthorized {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn msg_fee_not_found(msg_type_url: impl Into<String>) -> Self {
        ContractError::MsgFeeNotFound {
            msg_type_url: msg_type_url.into(),
        }
    }

    pub fn decode(
        container: impl Into<String>,
        type_url: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ContractError::Decode {
            container: container.into(),
            type_url: type_url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn incorrect_contract_name(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ContractError::IncorrectContractName {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
