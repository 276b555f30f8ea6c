use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy for the evaluation pipeline.
///
/// Malformed input is rejected at the boundary (`EmptyField`, `TooShort`,
/// `OutOfRange`), weight invariants are enforced at mutation time
/// (`WeightOverflow`), and a below-floor confidence only becomes an error
/// when an operation tries to *act* on the evaluation (`GateRejected`);
/// evaluating a low-confidence player is a normal, flagged result.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("{kind} weights would total {total}%, exceeding 100%")]
    WeightOverflow { kind: &'static str, total: u32 },

    #[error("sync blocked: confidence {confidence:.0}% is below the {floor:.0}% floor")]
    GateRejected { confidence: f32, floor: f32 },

    #[error("player not found: {id}")]
    PlayerNotFound { id: Uuid },

    #[error("sandbox has no pending changes")]
    SandboxUnmodified,

    #[error("unsupported schema version: {found} (expected {expected})")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Whether the caller can recover by correcting input and retrying.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CoreError::Serialization(_))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_rejected_message_names_floor() {
        let err = CoreError::GateRejected { confidence: 54.0, floor: 60.0 };
        let msg = err.to_string();
        assert!(msg.contains("54"), "message should carry the confidence: {}", msg);
        assert!(msg.contains("60"), "message should carry the floor: {}", msg);
    }

    #[test]
    fn test_bad_json_maps_to_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.is_recoverable());
    }
}
