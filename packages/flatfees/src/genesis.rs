use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_schema::cw_serde;

use crate::{MsgFee, Params, ValidationError};

#[cw_serde]
pub struct GenesisState {
    pub params: Params,
    pub msg_fees: Vec<MsgFee>,
}

impl GenesisState {
    pub fn new_default(fee_denom: impl Into<String>) -> Self {
        GenesisState {
            params: Params::new_default(fee_denom),
            msg_fees: vec![],
        }
    }

    /// Validate the params and every msg fee, reporting all problems found rather than only the
    /// first one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errs = vec![];

        if let Err(err) = self.params.validate() {
            errs.push(ValidationError::field("flatfees params", err));
        }

        // msg type url => index where it was first seen
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        // only report each duplicate once
        let mut reported = BTreeSet::new();

        for (i, msg_fee) in self.msg_fees.iter().enumerate() {
            if let Err(err) = msg_fee.validate() {
                errs.push(ValidationError::field(format!("msg_fees[{}]", i), err));
            }

            let url = msg_fee.msg_type_url.as_str();
            match seen.get(url).copied() {
                Some(first) => {
                    if reported.insert(url) {
                        errs.push(ValidationError::duplicate_msg_type_url(
                            url,
                            format!("msg_fees[{}]", first),
                            format!("msg_fees[{}]", i),
                        ));
                    }
                },
                None => {
                    seen.insert(url, i);
                },
            }
        }

        match errs.len() {
            0 => Ok(()),
            1 => Err(errs.remove(0)),
            _ => Err(ValidationError::Multiple(errs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;
    use crate::ConversionFactor;

    fn bad_params() -> Params {
        Params {
            default_cost: coin(100, "banana"),
            conversion_factor: ConversionFactor {
                definition_amount: coin(10, "apple"),
                converted_amount: coin(10, "banana"),
            },
        }
    }

    #[test]
    fn default_genesis_is_valid() {
        let state = GenesisState::new_default("pineapple");
        assert_eq!(state.validate(), Ok(()));
        assert!(state.msg_fees.is_empty());
    }

    #[test]
    fn invalid_params() {
        let state = GenesisState {
            params: bad_params(),
            msg_fees: vec![],
        };
        assert_eq!(
            state.validate().unwrap_err().to_string(),
            "invalid flatfees params: default cost denom \"banana\" does not equal conversion \
             factor definition amount denom \"apple\"",
        );
    }

    #[test]
    fn duplicate_msg_fee() {
        let state = GenesisState {
            params: Params::new_default("stake"),
            msg_fees: vec![
                MsgFee::new("thething", vec![]),
                MsgFee::new("thething", vec![coin(1, "banana")]),
            ],
        };
        assert_eq!(
            state.validate(),
            Err(ValidationError::duplicate_msg_type_url("thething", "msg_fees[0]", "msg_fees[1]")),
        );
    }

    #[test]
    fn multiple_errors() {
        let state = GenesisState {
            params: bad_params(),
            msg_fees: vec![
                MsgFee::new("thingzero", vec![coin(99, "banana")]),
                MsgFee::new("thingone", vec![]),
                MsgFee::new("thingtwo", vec![coin(4, "x")]),
                MsgFee::new("thingzero", vec![coin(99, "banana")]),
                MsgFee::new("thingfour", vec![coin(21, "pear")]),
                MsgFee::new("thingzero", vec![coin(99, "banana")]),
            ],
        };

        let expected = [
            "invalid flatfees params: default cost denom \"banana\" does not equal conversion \
             factor definition amount denom \"apple\"",
            "invalid msg_fees[2]: invalid thingtwo cost \"4x\": invalid denom: \"x\"",
            "duplicate msg type url \"thingzero\" found in msg_fees[0] and msg_fees[3]",
        ]
        .join("\n");
        assert_eq!(state.validate().unwrap_err().to_string(), expected);
    }
}
