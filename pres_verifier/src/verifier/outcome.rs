use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::verifier::messages::PresVerifyMsg;

/// The final verdict on a presentation, created once per pipeline invocation
/// and discarded by the caller after use.
///
/// The wire form is string-typed for compatibility with existing consumers:
/// `verified` serializes as `"true"`/`"false"` and `verified_msgs` as a list
/// of `CODE::<detail>` strings, or `null` when nothing was reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub verified: bool,
    pub messages: Vec<PresVerifyMsg>,
}

impl VerificationOutcome {
    pub fn has_value_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|msg| matches!(msg, PresVerifyMsg::ValueError(_)))
    }
}

impl Serialize for VerificationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VerificationOutcome", 2)?;
        state.serialize_field("verified", if self.verified { "true" } else { "false" })?;
        if self.messages.is_empty() {
            state.serialize_field("verified_msgs", &None::<Vec<String>>)?;
        } else {
            state.serialize_field("verified_msgs", &self.messages)?;
        }
        state.end()
    }
}
