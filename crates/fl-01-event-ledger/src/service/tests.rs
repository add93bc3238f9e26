//! # Event Ledger Service Tests

use super::*;
use crate::adapters::{
    BincodeEntrySerializer, FileBackedKVStore, InMemoryKVStore, SystemTimeSource,
    TickingBlockSource,
};
use crate::ports::inbound::{EventLedgerApi, InsertRequest};

fn make_service(
) -> EventLedgerService<InMemoryKVStore, SystemTimeSource, TickingBlockSource, BincodeEntrySerializer>
{
    EventLedgerService::new_in_memory(LedgerConfig::default()).unwrap()
}

fn file_backed(
    path: &std::path::Path,
    starting_block: u64,
) -> Result<
    EventLedgerService<FileBackedKVStore, SystemTimeSource, TickingBlockSource, BincodeEntrySerializer>,
    LedgerError,
> {
    EventLedgerService::new(
        LedgerDependencies {
            kv_store: FileBackedKVStore::new(path),
            time_source: SystemTimeSource,
            block_source: TickingBlockSource::starting_at(starting_block),
            serializer: BincodeEntrySerializer,
        },
        LedgerConfig::default(),
    )
}

fn digest(seed: u8) -> Digest {
    [seed; 32]
}

#[test]
fn test_insert_and_read_back() {
    let mut ledger = make_service();

    let index = ledger
        .insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", digest(1))
        .unwrap();
    assert_eq!(index, 0);

    let entry = ledger.get_by_index(0).unwrap();
    assert_eq!(entry.flight_id, "UA123");
    assert_eq!(entry.event_type, "DEPARTURE");
    assert_eq!(entry.timestamp, 1_700_000_000);
    assert_eq!(entry.actor, "ATC");
    assert_eq!(entry.digest, digest(1));
    assert_eq!(entry.anchored_at_block, 1);
}

#[test]
fn test_duplicate_digest_rejected_length_unchanged() {
    let mut ledger = make_service();

    ledger
        .insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", digest(1))
        .unwrap();

    // Identical tuple again: rejected, ledger length unchanged
    let result = ledger.insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", digest(1));
    assert!(matches!(
        result,
        Err(LedgerError::DuplicateDigest {
            existing_index: 0,
            ..
        })
    ));
    assert_eq!(ledger.total_events(), 1);

    // Same digest under a different flight is still a duplicate:
    // uniqueness is global, not per-flight
    let result = ledger.insert("LH400", "ARRIVAL", 1_700_000_500, "PILOT", digest(1));
    assert!(result.unwrap_err().is_duplicate());
    assert_eq!(ledger.total_events(), 1);
    assert_eq!(ledger.get_flight_event_count("LH400"), 0);
}

#[test]
fn test_index_monotonicity_across_flights() {
    let mut ledger = make_service();

    // Indices are global insertion positions regardless of flight grouping
    assert_eq!(
        ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap(),
        0
    );
    assert_eq!(
        ledger.insert("LH400", "SCHEDULED", 101, "SYSTEM", digest(2)).unwrap(),
        1
    );
    assert_eq!(
        ledger.insert("UA123", "BOARDING_OPEN", 102, "GATE_AGENT", digest(3)).unwrap(),
        2
    );
    assert_eq!(ledger.total_events(), 3);
}

#[test]
fn test_append_only_prior_entries_unchanged() {
    let mut ledger = make_service();

    ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap();
    let before = ledger.get_by_index(0).unwrap();

    for seed in 2..10u8 {
        ledger
            .insert("UA123", "STATE_UPDATE", 100 + seed as u64, "SYSTEM", digest(seed))
            .unwrap();
    }

    // Read-after-write equality holds for the first index
    let after = ledger.get_by_index(0).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_per_flight_ordering() {
    let mut ledger = make_service();

    ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap();
    ledger.insert("LH400", "SCHEDULED", 101, "SYSTEM", digest(2)).unwrap();
    ledger.insert("UA123", "PUSHBACK", 102, "GROUND_CREW", digest(3)).unwrap();
    ledger.insert("UA123", "TAKEOFF", 103, "ATC", digest(4)).unwrap();

    assert_eq!(ledger.get_indices_for_flight("UA123"), vec![0, 2, 3]);
    assert_eq!(ledger.get_indices_for_flight("LH400"), vec![1]);
    assert!(ledger.get_indices_for_flight("XX000").is_empty());
}

#[test]
fn test_get_range_window_and_clamp() {
    let mut ledger = make_service();

    for seed in 1..=5u8 {
        ledger
            .insert("UA123", "STATE_UPDATE", 100 + seed as u64, "SYSTEM", digest(seed))
            .unwrap();
    }
    assert_eq!(ledger.get_flight_event_count("UA123"), 5);

    // Window of positions 1..3 in insertion order
    let window = ledger.get_range("UA123", 1, 2).unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].digest, digest(2));
    assert_eq!(window[1].digest, digest(3));

    // start + count past the end clamps to the available length
    let tail = ledger.get_range("UA123", 3, 10).unwrap();
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[1].digest, digest(5));
}

#[test]
fn test_get_range_start_out_of_bounds() {
    let mut ledger = make_service();

    for seed in 1..=5u8 {
        ledger
            .insert("UA123", "STATE_UPDATE", 100 + seed as u64, "SYSTEM", digest(seed))
            .unwrap();
    }

    let result = ledger.get_range("UA123", 10, 1);
    assert!(matches!(
        result,
        Err(LedgerError::RangeOutOfBounds {
            start: 10,
            available: 5,
            ..
        })
    ));

    // start == len is also out of bounds
    assert!(ledger.get_range("UA123", 5, 1).is_err());
}

#[test]
fn test_validation_has_no_partial_effects() {
    let mut ledger = make_service();

    assert!(ledger.insert("", "DEPARTURE", 100, "ATC", digest(1)).is_err());
    assert!(ledger.insert("UA123", "", 100, "ATC", digest(1)).is_err());
    assert!(ledger.insert("UA123", "DEPARTURE", 0, "ATC", digest(1)).is_err());
    assert!(ledger
        .insert("UA123", "DEPARTURE", 100, "ATC", shared_types::ZERO_DIGEST)
        .is_err());

    assert_eq!(ledger.total_events(), 0);
    assert!(ledger.get_indices_for_flight("UA123").is_empty());
    assert!(!ledger.digest_exists(&digest(1)));
}

#[test]
fn test_digest_exists() {
    let mut ledger = make_service();
    assert!(!ledger.digest_exists(&digest(1)));

    ledger.insert("UA123", "DEPARTURE", 100, "ATC", digest(1)).unwrap();
    assert!(ledger.digest_exists(&digest(1)));
    assert!(!ledger.digest_exists(&digest(2)));
}

#[test]
fn test_batch_is_best_effort_per_item() {
    let mut ledger = make_service();

    ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap();

    let requests = vec![
        InsertRequest {
            flight_id: "UA123".to_string(),
            event_type: "PUSHBACK".to_string(),
            timestamp: 101,
            actor: "GROUND_CREW".to_string(),
            digest: digest(2),
        },
        // Already anchored: skipped, not fatal
        InsertRequest {
            flight_id: "UA123".to_string(),
            event_type: "SCHEDULED".to_string(),
            timestamp: 100,
            actor: "SYSTEM".to_string(),
            digest: digest(1),
        },
        InsertRequest {
            flight_id: "UA123".to_string(),
            event_type: "TAKEOFF".to_string(),
            timestamp: 102,
            actor: "ATC".to_string(),
            digest: digest(3),
        },
    ];

    let results = ledger.insert_batch(requests);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Ok(1));
    assert!(results[1].as_ref().unwrap_err().is_duplicate());
    assert_eq!(results[2], Ok(2));
    assert_eq!(ledger.total_events(), 3);
}

#[test]
fn test_entry_not_found() {
    let ledger = make_service();
    assert!(matches!(
        ledger.get_by_index(0),
        Err(LedgerError::EntryNotFound { index: 0 })
    ));
}

#[test]
fn test_state_rebuilt_from_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.bin");

    {
        let mut ledger = file_backed(&path, 1).unwrap();
        ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap();
        ledger.insert("UA123", "TAKEOFF", 101, "ATC", digest(2)).unwrap();
        ledger.insert("LH400", "SCHEDULED", 102, "SYSTEM", digest(3)).unwrap();
    }

    // Reopen: indices, digest set, and entry count must all survive
    let mut reopened = file_backed(&path, 4).unwrap();

    assert_eq!(reopened.total_events(), 3);
    assert_eq!(reopened.get_indices_for_flight("UA123"), vec![0, 1]);
    assert!(reopened.digest_exists(&digest(2)));

    // Dedup still holds across restarts
    assert!(reopened
        .insert("UA123", "TAKEOFF", 101, "ATC", digest(2))
        .unwrap_err()
        .is_duplicate());

    // And new insertions continue the index sequence
    let index = reopened.insert("LH400", "ARRIVAL", 103, "PILOT", digest(4)).unwrap();
    assert_eq!(index, 3);
}

#[test]
fn test_storage_failure_leaves_no_phantom_entry() {
    let dir = tempfile::tempdir().unwrap();
    // The store's parent is a regular file, so the batch write must fail
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let mut ledger = file_backed(&blocker.join("ledger.bin"), 1).unwrap();

    let err = ledger
        .insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1))
        .unwrap_err();
    assert!(matches!(err, LedgerError::StorageFailure { .. }));

    // The rejected insertion must not be readable at its would-be index,
    // and its digest stays free for a later successful attempt
    assert_eq!(ledger.total_events(), 0);
    assert!(matches!(
        ledger.get_by_index(0).unwrap_err(),
        LedgerError::EntryNotFound { .. }
    ));
    assert!(!ledger.digest_exists(&digest(1)));
}

#[test]
fn test_corrupt_metadata_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.bin");

    {
        let mut ledger = file_backed(&path, 1).unwrap();
        ledger.insert("UA123", "SCHEDULED", 100, "SYSTEM", digest(1)).unwrap();
        ledger.insert("UA123", "TAKEOFF", 101, "ATC", digest(2)).unwrap();
    }

    // Clobber the metadata record behind the service's back
    {
        let mut store = FileBackedKVStore::new(&path);
        store.put(&KeyPrefix::metadata_key(), b"not metadata").unwrap();
    }

    // A store that exists but cannot be decoded must refuse to open:
    // silently starting from zero would re-issue index 0 over entry #0
    // and make anchored digests insertable again.
    let result = file_backed(&path, 3);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::SerializationFailure { .. }
    ));
}

#[test]
fn test_non_utf8_flight_key_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.bin");

    {
        let mut store = FileBackedKVStore::new(&path);
        let mut key = KeyPrefix::FLIGHT.to_vec();
        key.extend_from_slice(&[0xFF, 0xFE]);
        store.put(&key, b"whatever").unwrap();
    }

    let result = file_backed(&path, 1);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::SerializationFailure { .. }
    ));
}
