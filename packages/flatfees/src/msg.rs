use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Empty};

use crate::{ConversionFactor, GenesisState, MsgFee, Params, TxMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// The only account allowed to change the params and the fee table, typically the
    /// governance module account
    pub authority: String,
    /// Initial params and fee table
    pub genesis: GenesisState,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the params. Only callable by the authority.
    UpdateParams {
        params: Params,
    },
    /// Replace only the conversion factor. Only callable by the authority.
    UpdateConversionFactor {
        conversion_factor: ConversionFactor,
    },
    /// Add, change, or remove entries in the fee table. Only callable by the authority.
    ///
    /// A msg type url may appear at most once across both lists.
    UpdateMsgFees {
        to_set: Vec<MsgFee>,
        to_unset: Vec<String>,
    },
}

pub type MigrateMsg = Empty;

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The current params
    #[returns(ParamsResponse)]
    Params {},
    /// The fee of a msg type. If the fee table has no entry for it, the default cost is returned.
    #[returns(MsgFeeResponse)]
    MsgFee {
        msg_type_url: String,
        /// Return the cost as defined, instead of in the denom that is collected
        #[serde(default)]
        do_not_convert: bool,
    },
    /// Enumerate the fee table
    #[returns(MsgFeesResponse)]
    MsgFees {
        start_after: Option<String>,
        limit: Option<u32>,
        #[serde(default)]
        do_not_convert: bool,
    },
    /// How much it would cost to run the given messages, including any messages they contain
    #[returns(CalculateMsgCostResponse)]
    CalculateMsgCost {
        msgs: Vec<TxMsg>,
    },
    /// The params and full fee table, in the same shape as the genesis state
    #[returns(GenesisState)]
    ExportGenesis {},
}

#[cw_serde]
pub struct ParamsResponse {
    pub params: Params,
}

#[cw_serde]
pub struct MsgFeeResponse {
    pub msg_fee: MsgFee,
}

#[cw_serde]
pub struct MsgFeesResponse {
    pub msg_fees: Vec<MsgFee>,
}

/// The up-front and on-success costs of a set of messages
#[cw_serde]
#[derive(Default)]
pub struct MsgCost {
    /// Collected whether or not the transaction succeeds
    pub up_front: Vec<Coin>,
    /// Collected only if the transaction succeeds
    pub on_success: Vec<Coin>,
}

#[cw_serde]
pub struct CalculateMsgCostResponse {
    /// `up_front` plus `on_success`
    pub total: Vec<Coin>,
    pub up_front: Vec<Coin>,
    pub on_success: Vec<Coin>,
}
