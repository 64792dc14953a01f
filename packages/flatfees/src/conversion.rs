use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Coins, StdResult, Uint128, Uint256};

use crate::{validate_coin, MsgFee, ValidationError};

/// The rate at which a price defined in one denom is converted into the denom actually collected.
///
/// A coin worth `definition_amount` is converted into `converted_amount`.
#[cw_serde]
pub struct ConversionFactor {
    /// The amount, in the definition denom, that `converted_amount` is equal to
    pub definition_amount: Coin,
    /// The amount, in the collected denom, that `definition_amount` is equal to
    pub converted_amount: Coin,
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}=>{}", self.definition_amount, self.converted_amount)
    }
}

impl ConversionFactor {
    /// A factor that changes nothing: one `denom` is worth one `denom`.
    pub fn identity(denom: impl Into<String>) -> Self {
        let coin = Coin::new(1, denom);
        ConversionFactor {
            definition_amount: coin.clone(),
            converted_amount: coin,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coin(&self.definition_amount, false).map_err(|err| {
            let field = format!("definition amount {:?}", self.definition_amount.to_string());
            ValidationError::field(field, err)
        })?;

        validate_coin(&self.converted_amount, false).map_err(|err| {
            let field = format!("converted amount {:?}", self.converted_amount.to_string());
            ValidationError::field(field, err)
        })?;

        if self.definition_amount.denom == self.converted_amount.denom
            && self.definition_amount.amount != self.converted_amount.amount
        {
            return Err(ValidationError::SameDenomDifferentAmounts {
                definition: self.definition_amount.to_string(),
                converted: self.converted_amount.to_string(),
            });
        }

        Ok(())
    }

    /// Convert a coin in the definition denom into the converted denom, rounding up.
    ///
    /// Coins in any other denom are returned unchanged. Errors only if the converted amount does
    /// not fit into a `Uint128`.
    pub fn convert_coin(&self, coin: &Coin) -> StdResult<Coin> {
        if coin.denom != self.definition_amount.denom {
            return Ok(coin.clone());
        }

        if self.definition_amount.amount == self.converted_amount.amount {
            return Ok(Coin {
                denom: self.converted_amount.denom.clone(),
                amount: coin.amount,
            });
        }

        let top = coin.amount.full_mul(self.converted_amount.amount);
        let bot = Uint256::from(self.definition_amount.amount);

        let mut amount = top / bot;
        if !(top % bot).is_zero() {
            amount += Uint256::one();
        }

        Ok(Coin {
            denom: self.converted_amount.denom.clone(),
            amount: Uint128::try_from(amount)?,
        })
    }

    /// Convert each coin, then add up any coins that end up in the same denom.
    ///
    /// The result is sorted by denom and contains no zero amounts.
    pub fn convert_coins(&self, coins: &[Coin]) -> StdResult<Vec<Coin>> {
        let mut converted = Coins::default();
        for coin in coins {
            converted.add(self.convert_coin(coin)?)?;
        }
        Ok(converted.into_vec())
    }

    /// Convert a msg fee's cost, keeping its msg type url.
    pub fn convert_msg_fee(&self, msg_fee: &MsgFee) -> StdResult<MsgFee> {
        Ok(MsgFee {
            msg_type_url: msg_fee.msg_type_url.clone(),
            cost: self.convert_coins(&msg_fee.cost)?,
        })
    }
}
