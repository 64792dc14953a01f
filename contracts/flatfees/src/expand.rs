use cosmwasm_std::{from_json, Binary, StdError, StdResult};

use flatfees::{PackedMsg, TxMsg};

use crate::error::ContractError;

/// How many levels of nested containers are unpacked before giving up
pub const MAX_UNPACK_DEPTH: i32 = 10;

/// Turns an encoded message back into a `TxMsg`.
pub trait MsgDecoder {
    fn decode(&self, type_url: &str, value: &Binary) -> StdResult<TxMsg>;
}

/// Decodes messages from their JSON encoding.
pub struct JsonMsgDecoder;

impl MsgDecoder for JsonMsgDecoder {
    fn decode(&self, type_url: &str, value: &Binary) -> StdResult<TxMsg> {
        let msg: TxMsg = from_json(value)?;

        if msg.type_url() != type_url {
            return Err(StdError::generic_err(format!(
                "could not cast {} as {}",
                msg.type_url(),
                type_url
            )));
        }

        Ok(msg)
    }
}

/// Return all of the provided messages, each one immediately followed by the messages it carries
/// (and the ones those carry, and so on).
///
/// Only containers whose messages run as part of the same transaction are unpacked: authz exec,
/// gov proposal submission, and trigger creation. A group proposal's messages run later, upon a
/// separate exec, so they are charged then.
pub fn expand_msgs(decoder: &dyn MsgDecoder, msgs: &[TxMsg]) -> Result<Vec<TxMsg>, ContractError> {
    expand_msgs_to_depth(decoder, msgs, MAX_UNPACK_DEPTH)
}

fn expand_msgs_to_depth(
    decoder: &dyn MsgDecoder,
    msgs: &[TxMsg],
    depth_left: i32,
) -> Result<Vec<TxMsg>, ContractError> {
    if depth_left < 0 {
        return Err(ContractError::MaxDepthExceeded);
    }

    let mut expanded = Vec::with_capacity(msgs.len());
    for msg in msgs {
        expanded.push(msg.clone());

        let packed = match msg {
            TxMsg::AuthzExec {
                msgs: exec_msgs,
                ..
            } => exec_msgs,
            TxMsg::SubmitProposal {
                messages,
                ..
            } => messages,
            TxMsg::CreateTrigger {
                actions,
                ..
            } => actions,
            // a group proposal's messages are charged when the proposal is executed
            TxMsg::GroupSubmitProposal {
                ..
            }
            | TxMsg::Plain {
                ..
            } => continue,
        };

        let sub_msgs = unpack_msgs(decoder, msg.type_url(), packed)?;
        expanded.extend(expand_msgs_to_depth(decoder, &sub_msgs, depth_left - 1)?);
    }

    Ok(expanded)
}

/// Resolve each packed message, using the already-decoded value when there is one.
fn unpack_msgs(
    decoder: &dyn MsgDecoder,
    container: &str,
    packed: &[PackedMsg],
) -> Result<Vec<TxMsg>, ContractError> {
    packed
        .iter()
        .map(|packed_msg| match packed_msg {
            PackedMsg::Resolved(msg) => Ok(msg.as_ref().clone()),
            PackedMsg::Encoded {
                type_url,
                value,
            } => decoder
                .decode(type_url, value)
                .map_err(|err| ContractError::decode(container, type_url, err)),
        })
        .collect()
}
