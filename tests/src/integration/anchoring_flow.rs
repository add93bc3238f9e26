//! # Anchoring Flow Integration Tests
//!
//! Exercises the full reconciliation protocol across both crates:
//!
//! 1. An event is created off-chain and its digest fixed
//! 2. The preparer issues an unsigned descriptor
//! 3. An external signer (simulated here) submits; the Event Store inserts
//! 4. The reconciler records the outcome
//! 5. The chain reader independently verifies the anchor
//!
//! The ledger does not gate who writes; scenarios below also cover two
//! submitters racing on the same digest, where the loser resolves through
//! cross-reference confirmation instead of failing.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fl_01_event_ledger::EventLedgerApi;
    use fl_02_anchoring::{
        AnchorConfig, AnchorError, AnchorStatus, ChainReader, ConfirmationReconciler,
        EventAssembler, FixedGasEstimator, InMemoryEventRepository, NewEvent,
        TransactionPreparer, UnsignedDescriptor,
    };
    use shared_bus::InMemoryEventBus;
    use shared_types::BlockNumber;

    use crate::integration::ledger_client::{shared_ledger, InProcessLedgerClient, SharedLedger};

    struct Harness {
        ledger: SharedLedger,
        assembler: EventAssembler<Arc<InMemoryEventRepository>>,
        preparer: TransactionPreparer<Arc<InMemoryEventRepository>, FixedGasEstimator>,
        reconciler: ConfirmationReconciler<Arc<InMemoryEventRepository>, InProcessLedgerClient>,
        reader: ChainReader<InProcessLedgerClient>,
    }

    fn make_harness() -> Harness {
        let ledger = shared_ledger();
        let repository = Arc::new(InMemoryEventRepository::new());
        let bus: Arc<InMemoryEventBus> = Arc::new(InMemoryEventBus::new());
        let config = AnchorConfig::for_contract("0xledger");
        let client = InProcessLedgerClient::new(ledger.clone());

        Harness {
            assembler: EventAssembler::new(repository.clone()),
            preparer: TransactionPreparer::new(
                repository.clone(),
                FixedGasEstimator::new(100_000),
                config.clone(),
                bus.clone(),
            ),
            reconciler: ConfirmationReconciler::new(repository, client.clone(), bus),
            reader: ChainReader::new(client, &config),
            ledger,
        }
    }

    fn departure(flight_id: &str, gate: &str) -> NewEvent {
        NewEvent {
            flight_id: flight_id.to_string(),
            event_type: "DEPARTURE".to_string(),
            timestamp: 1_700_000_000,
            actor: "ATC".to_string(),
            payload: serde_json::json!({ "gate": gate }),
        }
    }

    /// Simulate the external signer executing a prepared descriptor: the
    /// ledger contract runs the recorded tuple and assigns an index.
    async fn submit(
        harness: &Harness,
        event: &fl_02_anchoring::FlightEvent,
        _descriptor: &UnsignedDescriptor,
    ) -> (u64, BlockNumber) {
        let mut ledger = harness.ledger.write().await;
        let index = ledger
            .insert(
                &event.flight_id,
                &event.event_type,
                event.timestamp,
                &event.actor,
                event.digest,
            )
            .unwrap();
        let block = ledger.get_by_index(index).unwrap().anchored_at_block;
        (index, block)
    }

    #[tokio::test]
    async fn test_full_anchor_lifecycle() {
        let harness = make_harness();

        let event = harness
            .assembler
            .create_event(departure("UA123", "B12"))
            .await
            .unwrap();

        let descriptor = harness.preparer.prepare(event.id).await.unwrap();
        assert_eq!(descriptor.to, "0xledger");
        assert_eq!(descriptor.gas_limit, 120_000);

        // Not yet on-chain: verification is an honest negative
        assert!(!harness.reader.verify_event(&event).await.unwrap());

        let (index, block) = submit(&harness, &event, &descriptor).await;
        assert_eq!(index, 0);

        let confirmed = harness
            .reconciler
            .confirm(event.id, "0xdeadbeef", block)
            .await
            .unwrap();
        assert_eq!(confirmed.anchor_status, AnchorStatus::Confirmed);

        // Independent audit: chain state backs the confirmed record
        assert!(harness.reader.verify_event(&confirmed).await.unwrap());
        let entries = harness.reader.read_events("UA123").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].digest, event.digest);

        let listed = harness
            .assembler
            .events_with_verification("UA123", &harness.reader)
            .await
            .unwrap();
        assert_eq!(listed[0].chain_verified, Some(true));
    }

    #[tokio::test]
    async fn test_failed_submission_allows_fresh_cycle() {
        let harness = make_harness();
        let event = harness
            .assembler
            .create_event(departure("UA123", "B12"))
            .await
            .unwrap();

        harness.preparer.prepare(event.id).await.unwrap();
        let failed = harness
            .reconciler
            .fail(event.id, "user declined in wallet")
            .await
            .unwrap();
        assert_eq!(failed.anchor_status, AnchorStatus::Failed);

        // A fresh preparation cycle re-validates state and succeeds
        let descriptor = harness.preparer.prepare(event.id).await.unwrap();
        let (_, block) = submit(&harness, &event, &descriptor).await;
        harness
            .reconciler
            .confirm(event.id, "0xretry", block)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_racing_submitters_resolve_by_cross_reference() {
        let harness = make_harness();

        // Two independent off-chain records of the same logical event
        // end up with equal digests
        let ours = harness
            .assembler
            .create_event(departure("UA123", "B12"))
            .await
            .unwrap();
        let theirs = harness
            .assembler
            .create_event(departure("UA123", "B12"))
            .await
            .unwrap();
        assert_eq!(ours.digest, theirs.digest);

        let our_descriptor = harness.preparer.prepare(ours.id).await.unwrap();
        harness.preparer.prepare(theirs.id).await.unwrap();

        // Their submission lands first; ours is rejected by the ledger
        let (_, block) = submit(&harness, &theirs, &our_descriptor).await;
        harness
            .reconciler
            .confirm(theirs.id, "0xtheirs", block)
            .await
            .unwrap();
        {
            let mut ledger = harness.ledger.write().await;
            let second = ledger.insert(
                &ours.flight_id,
                &ours.event_type,
                ours.timestamp,
                &ours.actor,
                ours.digest,
            );
            assert!(second.unwrap_err().is_duplicate());
            assert_eq!(ledger.total_events(), 1);
        }

        // The duplicate is benign: cross-reference confirms our record
        // against the anchor they created, with no tx ref of our own
        let confirmed = harness
            .reconciler
            .confirm_by_cross_reference(ours.id)
            .await
            .unwrap();
        assert_eq!(confirmed.anchor_status, AnchorStatus::Confirmed);
        let anchor_ref = confirmed.anchor_ref.unwrap();
        assert_eq!(anchor_ref.tx_ref, None);
        assert_eq!(anchor_ref.block_number, block);

        // Both records verify against the single ledger entry
        assert!(harness.reader.verify_event(&ours).await.unwrap());
        assert!(harness.reader.verify_event(&theirs).await.unwrap());
    }

    #[tokio::test]
    async fn test_prepare_guard_across_services() {
        let harness = make_harness();
        let event = harness
            .assembler
            .create_event(departure("UA123", "B12"))
            .await
            .unwrap();

        let descriptor = harness.preparer.prepare(event.id).await.unwrap();

        // Concurrent preparation attempt is rejected while Pending
        assert!(matches!(
            harness.preparer.prepare(event.id).await,
            Err(AnchorError::InvalidState { .. })
        ));

        // After confirmation the answer changes to AlreadyAnchored
        let (_, block) = submit(&harness, &event, &descriptor).await;
        harness
            .reconciler
            .confirm(event.id, "0xabc", block)
            .await
            .unwrap();
        assert!(matches!(
            harness.preparer.prepare(event.id).await,
            Err(AnchorError::AlreadyAnchored(_))
        ));
    }

    #[tokio::test]
    async fn test_reader_stats_track_ledger_growth() {
        let harness = make_harness();

        let stats = harness.reader.stats().await.unwrap();
        assert_eq!(stats.total_events, 0);

        for gate in ["B12", "C3", "D7"] {
            let event = harness
                .assembler
                .create_event(departure("UA123", gate))
                .await
                .unwrap();
            let descriptor = harness.preparer.prepare(event.id).await.unwrap();
            submit(&harness, &event, &descriptor).await;
        }

        let stats = harness.reader.stats().await.unwrap();
        assert_eq!(stats.total_events, 3);
        assert!(stats.latest_block >= 3);
    }
}
