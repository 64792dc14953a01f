use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("msg type url cannot be empty")]
    EmptyMsgTypeUrl,

    #[error("msg type url {url:?} length ({len}) exceeds max length ({max})")]
    MsgTypeUrlTooLong {
        url: String,
        len: usize,
        max: usize,
    },

    #[error("invalid denom: {denom:?}")]
    InvalidDenom {
        denom: String,
    },

    #[error("amount cannot be zero")]
    ZeroAmount,

    #[error("denoms must be sorted and unique, found {found:?} after {previous:?}")]
    UnsortedDenoms {
        previous: String,
        found: String,
    },

    #[error(
        "definition amount {definition:?} and converted amount {converted:?} cannot have \
         different amounts when the denoms are the same"
    )]
    SameDenomDifferentAmounts {
        definition: String,
        converted: String,
    },

    #[error(
        "default cost denom {default_denom:?} does not equal conversion factor definition amount \
         denom {definition_denom:?}"
    )]
    DefaultCostDenomMismatch {
        default_denom: String,
        definition_denom: String,
    },

    #[error("duplicate msg type url {msg_type_url:?} found in {first} and {second}")]
    DuplicateMsgTypeUrl {
        msg_type_url: String,
        first: String,
        second: String,
    },

    #[error("at least one entry to set or unset must be provided")]
    EmptyUpdate,

    #[error("invalid {field}: {source}")]
    Field {
        field: String,
        source: Box<ValidationError>,
    },

    #[error("{}", join_errors(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Wrap an error with the name of the thing that failed validation
    pub fn field(field: impl Into<String>, source: ValidationError) -> Self {
        ValidationError::Field {
            field: field.into(),
            source: Box::new(source),
        }
    }

    pub fn msg_type_url_too_long(url: &str, max: usize) -> Self {
        ValidationError::MsgTypeUrlTooLong {
            url: abbreviate(url),
            len: url.len(),
            max,
        }
    }

    pub fn duplicate_msg_type_url(
        msg_type_url: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        ValidationError::DuplicateMsgTypeUrl {
            msg_type_url: msg_type_url.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

fn join_errors(errs: &[ValidationError]) -> String {
    errs.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n")
}

/// Shorten a long identifier to its first and last five characters
fn abbreviate(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 13 {
        return s.to_string();
    }
    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}...{}", head, tail)
}
