use cosmwasm_std::{Coin, Coins, Storage};

use flatfees::msg::MsgCost;
use flatfees::{Params, TxMsg};

use crate::error::ContractError;
use crate::state::get_msg_fee;

/// Calculate the up-front and on-success costs of the provided messages.
///
/// The up-front cost is collected whether or not the transaction succeeds; the on-success cost is
/// collected only if it does. The total cost is the sum of the two.
///
/// The messages are priced as given; expand them first so that the messages inside containers are
/// priced too.
pub fn calculate_msg_cost(
    store: &dyn Storage,
    params: &Params,
    msgs: &[TxMsg],
) -> Result<MsgCost, ContractError> {
    let default_cost = params.conversion_factor.convert_coin(&params.default_cost)?;

    let mut up_front = Coins::default();
    let mut on_success = Coins::default();

    for msg in msgs {
        let msg_fee = get_msg_fee(store, msg.type_url())?;
        match msg_fee {
            // no entry in the fee table, charge the default
            None => up_front.add(default_cost.clone())?,
            // explicitly free
            Some(msg_fee) if msg_fee.is_free() => (),
            Some(msg_fee) => {
                let msg_cost = params.conversion_factor.convert_coins(&msg_fee.cost)?;
                let (new_up_front, new_on_success) = split_msg_cost(msg_cost, &default_cost);
                for coin in new_up_front {
                    up_front.add(coin)?;
                }
                for coin in new_on_success {
                    on_success.add(coin)?;
                }
            },
        }
    }

    Ok(MsgCost {
        up_front: up_front.into_vec(),
        on_success: on_success.into_vec(),
    })
}

/// Split a message's cost into the parts to collect up-front and upon success.
///
/// At most the default cost is collected up-front for each message. Anything above it, and
/// anything in a denom other than the default's, is collected only upon success.
pub fn split_msg_cost(msg_cost: Vec<Coin>, default_cost: &Coin) -> (Vec<Coin>, Vec<Coin>) {
    let mut up_front = vec![];
    let mut on_success = vec![];

    for coin in msg_cost {
        if coin.denom != default_cost.denom {
            on_success.push(coin);
        } else if coin.amount <= default_cost.amount {
            up_front.push(coin);
        } else {
            on_success.push(Coin {
                denom: coin.denom,
                amount: coin.amount - default_cost.amount,
            });
            up_front.push(default_cost.clone());
        }
    }

    (up_front, on_success)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;

    #[test]
    fn splitting() {
        let default_cost = coin(25, "cherry");

        // other denom: all on success
        let (up_front, on_success) = split_msg_cost(vec![coin(104, "plum")], &default_cost);
        assert_eq!(up_front, vec![]);
        assert_eq!(on_success, vec![coin(104, "plum")]);

        // less than the default
        let (up_front, on_success) = split_msg_cost(vec![coin(15, "cherry")], &default_cost);
        assert_eq!(up_front, vec![coin(15, "cherry")]);
        assert_eq!(on_success, vec![]);

        // exactly the default
        let (up_front, on_success) = split_msg_cost(vec![coin(25, "cherry")], &default_cost);
        assert_eq!(up_front, vec![coin(25, "cherry")]);
        assert_eq!(on_success, vec![]);

        // more than the default
        let (up_front, on_success) = split_msg_cost(vec![coin(30, "cherry")], &default_cost);
        assert_eq!(up_front, vec![coin(25, "cherry")]);
        assert_eq!(on_success, vec![coin(5, "cherry")]);

        // mixed
        let (up_front, on_success) =
            split_msg_cost(vec![coin(40, "cherry"), coin(3, "plum")], &default_cost);
        assert_eq!(up_front, vec![coin(25, "cherry")]);
        assert_eq!(on_success, vec![coin(15, "cherry"), coin(3, "plum")]);
    }

    #[test]
    fn splitting_against_a_zero_default() {
        let (up_front, on_success) = split_msg_cost(vec![coin(7, "cherry")], &coin(0, "cherry"));
        assert_eq!(up_front, vec![coin(0, "cherry")]);
        assert_eq!(on_success, vec![coin(7, "cherry")]);
    }
}
