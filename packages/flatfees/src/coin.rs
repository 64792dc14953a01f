use cosmwasm_std::Coin;

use crate::ValidationError;

/// A denom must start with a letter, followed by 2 to 127 letters, digits or one of `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidDenom {
        denom: denom.to_string(),
    };

    if denom.len() < 3 || denom.len() > 128 {
        return Err(invalid());
    }

    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => (),
        _ => return Err(invalid()),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Check the coin's denom, and, unless `allow_zero`, that its amount is positive.
pub fn validate_coin(coin: &Coin, allow_zero: bool) -> Result<(), ValidationError> {
    validate_denom(&coin.denom)?;

    if !allow_zero && coin.amount.is_zero() {
        return Err(ValidationError::ZeroAmount);
    }

    Ok(())
}

/// A cost is a list of positive coins, sorted by denom, with each denom appearing at most once.
/// An empty cost is valid; it means "free".
pub fn validate_cost(cost: &[Coin]) -> Result<(), ValidationError> {
    for coin in cost {
        validate_coin(coin, false)?;
    }

    for pair in cost.windows(2) {
        if pair[0].denom >= pair[1].denom {
            return Err(ValidationError::UnsortedDenoms {
                previous: pair[0].denom.clone(),
                found: pair[1].denom.clone(),
            });
        }
    }

    Ok(())
}

/// Casting a slice of coins to a string, e.g. `10banana,3cherry`
pub fn stringify_coins(coins: &[Coin]) -> String {
    coins.iter().map(|coin| coin.to_string()).collect::<Vec<_>>().join(",")
}

/// A cost is zero if it has no coins, or all of its coins have zero amounts.
pub fn is_zero_cost(cost: &[Coin]) -> bool {
    cost.iter().all(|coin| coin.amount.is_zero())
}
