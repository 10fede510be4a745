use std::fmt;

use serde::{Serialize, Serializer};

/// Everything the pipeline has to say about a presentation, as a closed
/// tagged union. Internal code matches on the variants; the stable wire
/// strings (`CODE` or `CODE::<detail>`) only exist at the serialization
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresVerifyMsg {
    /// A referent of a non-revocable credential carried a non-revocation
    /// interval; the interval was dropped.
    RemovedReferentNonRevocInterval(String),
    /// The request-level non-revocation interval was dropped for one or more
    /// non-revocable credentials.
    RemovedGlobalNonRevocInterval,
    /// A valid non-revocation timestamp falls outside the requested interval.
    TimestampOutsideNonRevocInterval(String),
    /// The holder chose not to disclose the attribute behind this referent.
    UnrevealedAttributesPresent(String),
    /// Pre-validation failure. Always fatal.
    ValueError(String),
    /// The proof backend raised an error. Always fatal.
    VerifyError(String),
}

impl PresVerifyMsg {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RemovedReferentNonRevocInterval(_) => "RMV_RFNT_NRI",
            Self::RemovedGlobalNonRevocInterval => "RMV_GLB_NRI",
            Self::TimestampOutsideNonRevocInterval(_) => "TS_OUT_NRI",
            Self::UnrevealedAttributesPresent(_) => "UNRVL_ATTR",
            Self::ValueError(_) => "VALUE_ERROR",
            Self::VerifyError(_) => "VERIFY_ERROR",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::RemovedGlobalNonRevocInterval => None,
            Self::RemovedReferentNonRevocInterval(detail)
            | Self::TimestampOutsideNonRevocInterval(detail)
            | Self::UnrevealedAttributesPresent(detail)
            | Self::ValueError(detail)
            | Self::VerifyError(detail) => Some(detail),
        }
    }

    /// Fatal messages force `verified = false` and, for pre-validation
    /// errors, suppress the crypto call entirely.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ValueError(_) | Self::VerifyError(_))
    }
}

impl fmt::Display for PresVerifyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}::{}", self.code(), detail),
            None => write!(f, "{}", self.code()),
        }
    }
}

impl Serialize for PresVerifyMsg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            PresVerifyMsg::RemovedReferentNonRevocInterval("18_uuid".into()).to_string(),
            "RMV_RFNT_NRI::18_uuid"
        );
        assert_eq!(
            PresVerifyMsg::RemovedGlobalNonRevocInterval.to_string(),
            "RMV_GLB_NRI"
        );
        assert_eq!(
            PresVerifyMsg::TimestampOutsideNonRevocInterval("18_uuid".into()).to_string(),
            "TS_OUT_NRI::18_uuid"
        );
        assert_eq!(
            PresVerifyMsg::UnrevealedAttributesPresent("19_uuid".into()).to_string(),
            "UNRVL_ATTR::19_uuid"
        );
        assert_eq!(
            PresVerifyMsg::ValueError("Encoded representation mismatch for 'Preferred Name'".into())
                .to_string(),
            "VALUE_ERROR::Encoded representation mismatch for 'Preferred Name'"
        );
        assert_eq!(
            PresVerifyMsg::VerifyError("proof malformed".into()).to_string(),
            "VERIFY_ERROR::proof malformed"
        );
    }

    #[test]
    fn only_error_classes_are_fatal() {
        assert!(PresVerifyMsg::ValueError(String::new()).is_fatal());
        assert!(PresVerifyMsg::VerifyError(String::new()).is_fatal());
        assert!(!PresVerifyMsg::RemovedGlobalNonRevocInterval.is_fatal());
        assert!(!PresVerifyMsg::RemovedReferentNonRevocInterval(String::new()).is_fatal());
        assert!(!PresVerifyMsg::TimestampOutsideNonRevocInterval(String::new()).is_fatal());
        assert!(!PresVerifyMsg::UnrevealedAttributesPresent(String::new()).is_fatal());
    }

    #[test]
    fn serializes_as_wire_string() {
        let json =
            serde_json::to_string(&PresVerifyMsg::TimestampOutsideNonRevocInterval("a".into()))
                .unwrap();
        assert_eq!(json, "\"TS_OUT_NRI::a\"");
    }
}
