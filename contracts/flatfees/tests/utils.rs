#![allow(dead_code)]

use cosmwasm_std::testing::{mock_dependencies, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{coin, to_json_binary, Addr, Empty, OwnedDeps};

use flatfees::{ConversionFactor, GenesisState, MsgFee, PackedMsg, Params, TxMsg};
use flatfees_contract::execute;

pub const GOV: &str = "governance";

pub const MSG_VOTE: &str = "/cosmos.gov.v1.MsgVote";
pub const MSG_DEPOSIT: &str = "/cosmos.gov.v1.MsgDeposit";
pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";

/// A message costs 10banana by default, and 2banana is collected as 5cherry.
pub fn mock_params() -> Params {
    Params {
        default_cost: coin(10, "banana"),
        conversion_factor: ConversionFactor {
            definition_amount: coin(2, "banana"),
            converted_amount: coin(5, "cherry"),
        },
    }
}

pub fn setup_test() -> OwnedDeps<MockStorage, MockApi, MockQuerier, Empty> {
    setup_test_with_fees(vec![])
}

pub fn setup_test_with_fees(
    msg_fees: Vec<MsgFee>,
) -> OwnedDeps<MockStorage, MockApi, MockQuerier, Empty> {
    let mut deps = mock_dependencies();

    execute::init(
        deps.as_mut(),
        Addr::unchecked(GOV),
        GenesisState {
            params: mock_params(),
            msg_fees,
        },
    )
    .unwrap();

    deps
}

pub fn vote() -> TxMsg {
    TxMsg::plain(MSG_VOTE)
}

pub fn deposit() -> TxMsg {
    TxMsg::plain(MSG_DEPOSIT)
}

/// Pack a message the way a client would send it: encoded, not yet decoded
pub fn encoded(msg: &TxMsg) -> PackedMsg {
    PackedMsg::Encoded {
        type_url: msg.type_url().to_string(),
        value: to_json_binary(msg).unwrap(),
    }
}

pub fn exec(msgs: Vec<PackedMsg>) -> TxMsg {
    TxMsg::AuthzExec {
        grantee: "grantee".to_string(),
        msgs,
    }
}

pub fn proposal(messages: Vec<PackedMsg>) -> TxMsg {
    TxMsg::SubmitProposal {
        proposer: "proposer".to_string(),
        messages,
        metadata: String::new(),
    }
}

pub fn trigger(actions: Vec<PackedMsg>) -> TxMsg {
    TxMsg::CreateTrigger {
        authority: "creator".to_string(),
        actions,
    }
}

/// A proposal nested `depth` levels deep; the innermost one carries `end_msgs`.
/// A depth of 1 is a single proposal carrying `end_msgs`.
pub fn nested_proposal(depth: usize, end_msgs: Vec<PackedMsg>) -> TxMsg {
    if depth > 1 {
        proposal(vec![nested_proposal(depth - 1, end_msgs).into()])
    } else {
        proposal(end_msgs)
    }
}

pub fn type_urls(msgs: &[TxMsg]) -> Vec<&str> {
    msgs.iter().map(|msg| msg.type_url()).collect()
}
