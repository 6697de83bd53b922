use async_trait::async_trait;
use chrono::{DateTime, Utc};
use registry::{Collection, Entity, EntityClient, RegistryError, Repository};
use std::sync::Arc;
use tokio::sync::RwLock;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u64,
    title: String,
    open: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    open: Option<bool>,
}

impl Entity for Ticket {
    type Id = u64;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    const KIND: &'static str = "ticket";

    fn from_create(id: u64, params: TicketCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: params.title,
            open: true,
            created_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn apply_update(&mut self, update: TicketUpdate) {
        if let Some(open) = update.open {
            self.open = open;
        }
    }
}

// --- Minimal store and client ---

#[derive(Clone, Default)]
struct TicketStore {
    tickets: Arc<RwLock<Collection<Ticket>>>,
}

#[async_trait]
impl Repository<Ticket> for TicketStore {
    async fn create(&self, params: TicketCreate) -> Ticket {
        self.tickets.write().await.insert(params, Utc::now())
    }

    async fn get(&self, id: u64) -> Option<Ticket> {
        self.tickets.read().await.get(&id).cloned()
    }

    async fn list(&self) -> Vec<Ticket> {
        self.tickets.read().await.snapshot()
    }

    async fn update(&self, id: u64, update: TicketUpdate) -> Result<Ticket, RegistryError> {
        self.tickets.write().await.update(&id, update)
    }

    async fn delete(&self, id: u64) -> Result<Ticket, RegistryError> {
        self.tickets.write().await.remove(&id)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TicketError {
    #[error("missing: {0}")]
    Missing(String),
}

impl From<RegistryError> for TicketError {
    fn from(e: RegistryError) -> Self {
        TicketError::Missing(e.to_string())
    }
}

struct TicketClient {
    store: TicketStore,
}

impl EntityClient<Ticket> for TicketClient {
    type Error = TicketError;

    fn repository(&self) -> &dyn Repository<Ticket> {
        &self.store
    }
}

fn ticket(title: &str) -> TicketCreate {
    TicketCreate {
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_client_defaults_over_repository() {
    let store = TicketStore::default();
    let client = TicketClient {
        store: store.clone(),
    };

    let first = store.create(ticket("broken build")).await;
    let second = store.create(ticket("flaky test")).await;
    assert_eq!((first.id, second.id), (1, 2));

    assert_eq!(client.get(1).await, Some(first.clone()));
    assert_eq!(client.require(2).await, Ok(second.clone()));
    assert_eq!(
        client.require(3).await,
        Err(TicketError::Missing("ticket not found: 3".into()))
    );

    let mut all = client.list().await;
    all.sort_by_key(|t| t.id);
    assert_eq!(all, vec![first.clone(), second]);

    assert_eq!(client.delete(1).await, Ok(first));
    assert!(client.get(1).await.is_none());
    assert!(client.delete(1).await.is_err());

    let third = store.create(ticket("docs typo")).await;
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_update_through_repository() {
    let store = TicketStore::default();
    let created = store.create(ticket("outage")).await;

    let closed = store
        .update(created.id, TicketUpdate { open: Some(false) })
        .await
        .expect("ticket should exist");
    assert!(!closed.open);
    assert_eq!(closed.title, "outage");
    assert_eq!(closed.created_at, created.created_at);

    let err = store
        .update(99, TicketUpdate { open: None })
        .await
        .unwrap_err();
    assert_eq!(err, RegistryError::not_found("ticket", 99));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_share_one_counter() {
    let store = TicketStore::default();

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(ticket(&format!("ticket {i}"))).await.id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("task panicked"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
}
