//! # Call-Data Encoding
//!
//! ABI encoding for the ledger contract's recording functions. This is the
//! wire format an external signer submits verbatim; the core only ever
//! constructs it, never decodes it.
//!
//! Two entry points mirror the contract surface:
//!
//! - `recordEvent(string,string,uint256,string,bytes32)`
//! - `recordEventBatch(string[],string[],uint256[],string[],bytes32[])`

use sha3::{Digest as _, Keccak256};
use shared_types::Digest;

use super::entities::FlightEvent;

/// Function signature for single-event recording.
pub const RECORD_EVENT_SIG: &str = "recordEvent(string,string,uint256,string,bytes32)";

/// Function signature for batch recording.
pub const RECORD_EVENT_BATCH_SIG: &str =
    "recordEventBatch(string[],string[],uint256[],string[],bytes32[])";

/// First 4 bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn word_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn pad_to_word(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    let rem = out.len() % 32;
    if rem != 0 {
        out.resize(out.len() + (32 - rem), 0);
    }
    out
}

/// One argument to an ABI call.
enum AbiValue {
    Uint(u64),
    FixedBytes(Digest),
    Str(String),
    UintArray(Vec<u64>),
    FixedBytesArray(Vec<Digest>),
    StrArray(Vec<String>),
}

impl AbiValue {
    fn is_dynamic(&self) -> bool {
        matches!(
            self,
            Self::Str(_) | Self::UintArray(_) | Self::FixedBytesArray(_) | Self::StrArray(_)
        )
    }

    fn encode_static(&self) -> [u8; 32] {
        match self {
            Self::Uint(v) => word_u64(*v),
            Self::FixedBytes(b) => *b,
            // Dynamic values go through encode_tail; the head slot holds
            // their offset, written by encode_call
            _ => [0u8; 32],
        }
    }

    fn encode_tail(&self) -> Vec<u8> {
        match self {
            Self::Uint(_) | Self::FixedBytes(_) => Vec::new(),
            Self::Str(s) => encode_bytes_tail(s.as_bytes()),
            Self::UintArray(values) => {
                let mut out = word_u64(values.len() as u64).to_vec();
                for v in values {
                    out.extend_from_slice(&word_u64(*v));
                }
                out
            }
            Self::FixedBytesArray(values) => {
                let mut out = word_u64(values.len() as u64).to_vec();
                for v in values {
                    out.extend_from_slice(v);
                }
                out
            }
            Self::StrArray(items) => {
                // Array of dynamic elements: length word, then an inner
                // head of offsets relative to the start of that head,
                // then the element tails
                let mut out = word_u64(items.len() as u64).to_vec();
                let head_len = items.len() * 32;
                let mut tails: Vec<u8> = Vec::new();
                for item in items {
                    out.extend_from_slice(&word_u64((head_len + tails.len()) as u64));
                    tails.extend(encode_bytes_tail(item.as_bytes()));
                }
                out.extend(tails);
                out
            }
        }
    }
}

fn encode_bytes_tail(bytes: &[u8]) -> Vec<u8> {
    let mut out = word_u64(bytes.len() as u64).to_vec();
    out.extend(pad_to_word(bytes));
    out
}

fn encode_call(signature: &str, args: &[AbiValue]) -> Vec<u8> {
    let head_len = args.len() * 32;
    let mut head: Vec<u8> = Vec::with_capacity(head_len);
    let mut tail: Vec<u8> = Vec::new();

    for arg in args {
        if arg.is_dynamic() {
            head.extend_from_slice(&word_u64((head_len + tail.len()) as u64));
            tail.extend(arg.encode_tail());
        } else {
            head.extend_from_slice(&arg.encode_static());
        }
    }

    let mut out = selector(signature).to_vec();
    out.extend(head);
    out.extend(tail);
    out
}

/// Encode a `recordEvent` call for one event tuple.
pub fn record_event_call(
    flight_id: &str,
    event_type: &str,
    timestamp: u64,
    actor: &str,
    digest: &Digest,
) -> Vec<u8> {
    encode_call(
        RECORD_EVENT_SIG,
        &[
            AbiValue::Str(flight_id.to_string()),
            AbiValue::Str(event_type.to_string()),
            AbiValue::Uint(timestamp),
            AbiValue::Str(actor.to_string()),
            AbiValue::FixedBytes(*digest),
        ],
    )
}

/// Encode a `recordEventBatch` call for a set of events, columnar layout.
pub fn record_event_batch_call(events: &[FlightEvent]) -> Vec<u8> {
    encode_call(
        RECORD_EVENT_BATCH_SIG,
        &[
            AbiValue::StrArray(events.iter().map(|e| e.flight_id.clone()).collect()),
            AbiValue::StrArray(events.iter().map(|e| e.event_type.clone()).collect()),
            AbiValue::UintArray(events.iter().map(|e| e.timestamp).collect()),
            AbiValue::StrArray(events.iter().map(|e| e.actor.clone()).collect()),
            AbiValue::FixedBytesArray(events.iter().map(|e| e.digest).collect()),
        ],
    )
}
