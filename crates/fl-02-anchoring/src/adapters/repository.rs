//! In-memory event repository.
//!
//! Reference implementation of the persistence collaborator; production
//! deployments put a database behind the same port.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use shared_types::EventId;
use tokio::sync::RwLock;

use crate::domain::entities::FlightEvent;
use crate::domain::errors::AnchorError;
use crate::ports::outbound::EventRepository;

/// Event repository backed by a `HashMap` under an async `RwLock`.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<EventId, FlightEvent>>,
    next_id: AtomicU64,
}

impl InMemoryEventRepository {
    /// Empty repository; ids start at 1.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn load(&self, id: EventId) -> Result<FlightEvent, AnchorError> {
        self.events
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AnchorError::EventNotFound(id))
    }

    async fn save(&self, event: FlightEvent) -> Result<(), AnchorError> {
        self.events.write().await.insert(event.id, event);
        Ok(())
    }

    async fn next_id(&self) -> EventId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn events_for_flight(&self, flight_id: &str) -> Result<Vec<FlightEvent>, AnchorError> {
        let events = self.events.read().await;
        let mut matching: Vec<FlightEvent> = events
            .values()
            .filter(|e| e.flight_id == flight_id)
            .cloned()
            .collect();
        matching.sort_by_key(|e| e.id);
        Ok(matching)
    }
}
