use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;

use crate::{validate_coin, ConversionFactor, ValidationError};

/// The denom that costs are defined in, unless configured otherwise
pub const DEFAULT_FEE_DEFINITION_DENOM: &str = "musd";

#[cw_serde]
pub struct Params {
    /// The cost of a message that has no entry in the fee table.
    /// Must be in the conversion factor's definition denom.
    pub default_cost: Coin,
    /// How costs are converted into the denom actually collected
    pub conversion_factor: ConversionFactor,
}

impl Params {
    /// Default params: a message costs 1musd, and 1musd is collected as 1 `fee_denom`.
    pub fn new_default(fee_denom: impl Into<String>) -> Self {
        Params {
            default_cost: Coin::new(1, DEFAULT_FEE_DEFINITION_DENOM),
            conversion_factor: ConversionFactor {
                definition_amount: Coin::new(1, DEFAULT_FEE_DEFINITION_DENOM),
                converted_amount: Coin::new(1, fee_denom),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // a zero default cost is allowed; it makes unlisted messages free
        validate_coin(&self.default_cost, true).map_err(|err| {
            ValidationError::field(format!("default cost {:?}", self.default_cost.to_string()), err)
        })?;

        self.conversion_factor
            .validate()
            .map_err(|err| ValidationError::field("conversion factor", err))?;

        if self.default_cost.denom != self.conversion_factor.definition_amount.denom {
            return Err(ValidationError::DefaultCostDenomMismatch {
                default_denom: self.default_cost.denom.clone(),
                definition_denom: self.conversion_factor.definition_amount.denom.clone(),
            });
        }

        Ok(())
    }

    /// The default cost as a list of coins; empty if the default cost is zero.
    pub fn default_cost_coins(&self) -> Vec<Coin> {
        if self.default_cost.amount.is_zero() {
            vec![]
        } else {
            vec![self.default_cost.clone()]
        }
    }
}
