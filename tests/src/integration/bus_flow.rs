//! # Bus Choreography Integration Tests
//!
//! Verifies the notification contract across the shared bus: insertion
//! notifications from the Event Store, lifecycle announcements from the
//! anchoring services, and topic filtering between the two.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::timeout;

    use fl_01_event_ledger::adapters::{
        BincodeEntrySerializer, InMemoryKVStore, SystemTimeSource, TickingBlockSource,
    };
    use fl_01_event_ledger::bus::LedgerBusAdapter;
    use fl_01_event_ledger::{EventLedgerService, LedgerConfig};
    use fl_02_anchoring::{
        AnchorConfig, EventAssembler, FixedGasEstimator, InMemoryEventRepository, NewEvent,
        TransactionPreparer,
    };
    use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, LedgerEvent};

    fn make_bus_adapter(
        bus: Arc<InMemoryEventBus>,
    ) -> LedgerBusAdapter<InMemoryKVStore, SystemTimeSource, TickingBlockSource, BincodeEntrySerializer>
    {
        LedgerBusAdapter::new(
            EventLedgerService::new_in_memory(LedgerConfig::default()).unwrap(),
            bus,
        )
    }

    async fn next_event(
        subscription: &mut shared_bus::Subscription,
    ) -> LedgerEvent {
        timeout(Duration::from_millis(100), subscription.recv())
            .await
            .expect("timeout waiting for event")
            .expect("bus closed")
    }

    #[tokio::test]
    async fn test_insertion_notification_carries_full_tuple() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut watcher = bus.subscribe(EventFilter::topics(vec![EventTopic::EventLedger]));
        let mut ledger = make_bus_adapter(bus);

        let index = ledger
            .insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", [5u8; 32])
            .await
            .unwrap();

        match next_event(&mut watcher).await {
            LedgerEvent::EventRecorded {
                index: notified,
                flight_id,
                event_type,
                timestamp,
                digest,
                block_number,
            } => {
                assert_eq!(notified, index);
                assert_eq!(flight_id, "UA123");
                assert_eq!(event_type, "DEPARTURE");
                assert_eq!(timestamp, 1_700_000_000);
                assert_eq!(digest, [5u8; 32]);
                assert!(block_number > 0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_topic_filter_separates_subsystems() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut ledger_only = bus.subscribe(EventFilter::topics(vec![EventTopic::EventLedger]));
        let mut anchoring_only = bus.subscribe(EventFilter::topics(vec![EventTopic::Anchoring]));

        // Anchoring side announces a descriptor
        let repository = Arc::new(InMemoryEventRepository::new());
        let assembler = EventAssembler::new(repository.clone());
        let preparer = TransactionPreparer::new(
            repository,
            FixedGasEstimator::new(100_000),
            AnchorConfig::for_contract("0xledger"),
            bus.clone(),
        );
        let event = assembler
            .create_event(NewEvent {
                flight_id: "UA123".to_string(),
                event_type: "DEPARTURE".to_string(),
                timestamp: 1_700_000_000,
                actor: "ATC".to_string(),
                payload: serde_json::json!({ "gate": "B12" }),
            })
            .await
            .unwrap();
        let descriptor = preparer.prepare(event.id).await.unwrap();

        // Ledger side records an insertion
        let mut ledger = make_bus_adapter(bus);
        ledger
            .insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", event.digest)
            .await
            .unwrap();

        // Each subscriber sees only its own topic
        match next_event(&mut anchoring_only).await {
            LedgerEvent::DescriptorIssued {
                event_id,
                gas_limit,
                correlation_id,
            } => {
                assert_eq!(event_id, event.id);
                assert_eq!(gas_limit, descriptor.gas_limit);
                assert!(!correlation_id.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(
            next_event(&mut ledger_only).await,
            LedgerEvent::EventRecorded { .. }
        ));
        assert!(anchoring_only.try_recv().unwrap().is_none());
        assert!(ledger_only.try_recv().unwrap().is_none());
    }
}
