use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

pub const MSG_EXEC_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgExec";
pub const MSG_SUBMIT_PROPOSAL_TYPE_URL: &str = "/cosmos.gov.v1.MsgSubmitProposal";
pub const MSG_CREATE_TRIGGER_TYPE_URL: &str = "/provenance.trigger.v1.MsgCreateTriggerRequest";
pub const MSG_GROUP_SUBMIT_PROPOSAL_TYPE_URL: &str = "/cosmos.group.v1.MsgSubmitProposal";

/// A message inside a transaction, as far as fee calculation is concerned.
///
/// Messages that carry other messages have their own variants. Everything else is `Plain`, which
/// is identified only by its type url.
#[cw_serde]
pub enum TxMsg {
    /// Executes `msgs` right away on behalf of their granters.
    AuthzExec {
        grantee: String,
        msgs: Vec<PackedMsg>,
    },
    /// Submits a governance proposal that executes `messages` if it passes.
    SubmitProposal {
        proposer: String,
        messages: Vec<PackedMsg>,
        metadata: String,
    },
    /// Creates a trigger that runs `actions` once its event fires.
    CreateTrigger {
        authority: String,
        actions: Vec<PackedMsg>,
    },
    /// Submits a group proposal. Its messages only run upon a later, separate exec message.
    GroupSubmitProposal {
        group_policy_address: String,
        proposers: Vec<String>,
        messages: Vec<PackedMsg>,
    },
    /// Any message that carries no other messages
    Plain {
        type_url: String,
        value: Binary,
    },
}

impl TxMsg {
    /// A message with the given type url and an empty body
    pub fn plain(type_url: impl Into<String>) -> Self {
        TxMsg::Plain {
            type_url: type_url.into(),
            value: Binary::default(),
        }
    }

    /// The msg type url, which is the key into the fee table
    pub fn type_url(&self) -> &str {
        match self {
            TxMsg::AuthzExec {
                ..
            } => MSG_EXEC_TYPE_URL,
            TxMsg::SubmitProposal {
                ..
            } => MSG_SUBMIT_PROPOSAL_TYPE_URL,
            TxMsg::CreateTrigger {
                ..
            } => MSG_CREATE_TRIGGER_TYPE_URL,
            TxMsg::GroupSubmitProposal {
                ..
            } => MSG_GROUP_SUBMIT_PROPOSAL_TYPE_URL,
            TxMsg::Plain {
                type_url,
                ..
            } => type_url,
        }
    }
}

/// A message embedded in another message.
///
/// It is either still encoded, or has already been decoded. Decoding is deferred until someone
/// needs the actual message.
#[cw_serde]
pub enum PackedMsg {
    Encoded {
        type_url: String,
        value: Binary,
    },
    Resolved(Box<TxMsg>),
}

impl PackedMsg {
    /// The type url the packed message claims to be, without decoding it
    pub fn type_url(&self) -> &str {
        match self {
            PackedMsg::Encoded {
                type_url,
                ..
            } => type_url,
            PackedMsg::Resolved(msg) => msg.type_url(),
        }
    }
}

impl From<TxMsg> for PackedMsg {
    fn from(msg: TxMsg) -> Self {
        PackedMsg::Resolved(Box::new(msg))
    }
}
