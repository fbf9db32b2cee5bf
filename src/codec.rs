//! Pluggable encoding strategy for cached values.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Codec failure.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CodecError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

/// Converts objects to and from their stored byte representation.
///
/// Injected at cache construction; there is no default encoding.
/// Implementations can be swapped for different formats (JSON, mock, etc.)
pub trait Codec: Send + Sync {
    /// Encode `value` into the bytes that will be written to the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the codec cannot represent `value`.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode previously stored bytes into a value.
    ///
    /// # Errors
    ///
    /// Returns an error when `bytes` are not a valid encoding of `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// JSON codec over `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError(e.into()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Waypoint {
        label: String,
        sequence: u32,
    }

    #[test]
    fn test_json_round_trip() {
        let value = Waypoint {
            label: "alpha".to_string(),
            sequence: 7,
        };

        let bytes = JsonCodec.encode(&value).unwrap();
        let decoded: Waypoint = JsonCodec.decode(&bytes).unwrap();

        assert_eq!(decoded, value);
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        let result: Result<Waypoint, _> = JsonCodec.decode(b"not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_rejects_unrepresentable_value() {
        // JSON object keys must be strings; tuple keys cannot be encoded.
        let mut unrepresentable: HashMap<(u32, u32), u32> = HashMap::new();
        unrepresentable.insert((1, 2), 3);

        assert!(JsonCodec.encode(&unrepresentable).is_err());
    }
}
