use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Ordering of ids is creation order, so queries come back oldest first.
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type UpdateParams: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: Display + Debug + Clone + Send + Sync + 'static;

    /// Construct the full entity from the allocated id and the creation params.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, update: Self::UpdateParams) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action. On error the entity must be left
    /// as it was before the call.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Errors produced by the framework itself, or passed through from an entity hook.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Entity(E),
}

/// Id allocator handed to [`ResourceActor::new`]. Yields 1, 2, 3, ...
pub fn id_sequence<I: From<u64> + 'static>() -> impl Fn() -> I + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || I::from(counter.fetch_add(1, Ordering::SeqCst))
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Predicate used by [`ResourceRequest::Query`].
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        params: T::UpdateParams,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    Query {
        filter: Filter<T>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    /// All-or-nothing batch of actions across several entities.
    Transact {
        ops: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        let entity = std::any::type_name::<T>();
        info!(entity, "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }
        info!(entity, "ResourceActor stopped");
    }

    fn handle(&mut self, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                let _ = respond_to.send(self.create(params));
            }
            ResourceRequest::Get { id, respond_to } => {
                let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
            }
            ResourceRequest::Update { id, params, respond_to } => {
                let _ = respond_to.send(self.update(id, params));
            }
            ResourceRequest::Delete { id, respond_to } => {
                let _ = respond_to.send(self.delete(id));
            }
            ResourceRequest::Action { id, action, respond_to } => {
                let result = match self.store.get_mut(&id) {
                    Some(item) => item.handle_action(action).map_err(FrameworkError::Entity),
                    None => Err(FrameworkError::NotFound(id.to_string())),
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Query { filter, respond_to } => {
                let items = self.store.values().filter(|item| filter(item)).cloned().collect();
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::Transact { ops, respond_to } => {
                let _ = respond_to.send(self.transact(ops));
            }
        }
    }

    fn create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError<T::Error>> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Entity)?;
        item.on_create().map_err(FrameworkError::Entity)?;
        self.store.insert(id.clone(), item);
        debug!(%id, "Item created");
        Ok(id)
    }

    fn update(&mut self, id: T::Id, params: T::UpdateParams) -> Result<T, FrameworkError<T::Error>> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        // Hooks work on a copy so a rejected update leaves the stored item intact.
        let mut updated = item.clone();
        updated.on_update(params).map_err(FrameworkError::Entity)?;
        *item = updated.clone();
        Ok(updated)
    }

    fn delete(&mut self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Entity)?;
        self.store.remove(&id);
        debug!(%id, "Item deleted");
        Ok(())
    }

    /// Applies every action to staged copies. The store only sees the result
    /// if all of them succeed.
    fn transact(
        &mut self,
        ops: Vec<(T::Id, T::Action)>,
    ) -> Result<Vec<T::ActionResult>, FrameworkError<T::Error>> {
        let mut staged: BTreeMap<T::Id, T> = BTreeMap::new();
        let mut results = Vec::with_capacity(ops.len());

        for (id, action) in ops {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match self.store.get(&id) {
                    Some(current) => entry.insert(current.clone()),
                    None => {
                        warn!(%id, "Transaction aborted, item not found");
                        return Err(FrameworkError::NotFound(id.to_string()));
                    }
                },
            };
            match item.handle_action(action) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(%id, error = %e, "Transaction aborted");
                    return Err(FrameworkError::Entity(e));
                }
            }
        }

        debug!(count = staged.len(), "Transaction committed");
        self.store.extend(staged);
        Ok(results)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Not derived: cloning only touches the sender.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, params: T::UpdateParams) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, params, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn query(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError<T::Error>> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::Query { filter, respond_to }).await
    }

    pub async fn transact(
        &self,
        ops: Vec<(T::Id, T::Action)>,
    ) -> Result<Vec<T::ActionResult>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Transact { ops, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u64,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Take(u32),
    }

    impl Entity for Counter {
        type Id = u64;
        type CreateParams = CounterCreate;
        type UpdateParams = u32;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = String;

        fn from_create_params(id: u64, params: CounterCreate) -> Result<Self, String> {
            Ok(Self { id, value: params.value })
        }

        fn on_update(&mut self, value: u32) -> Result<(), String> {
            if value > 100 {
                return Err("too large".to_string());
            }
            self.value = value;
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, String> {
            match action {
                CounterAction::Take(n) if n <= self.value => {
                    self.value -= n;
                    Ok(self.value)
                }
                CounterAction::Take(n) => Err(format!("cannot take {} from {}", n, self.value)),
            }
        }
    }

    fn spawn_counters() -> ResourceClient<Counter> {
        let (actor, client) = ResourceActor::new(10, id_sequence::<u64>());
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_crud_and_actions() {
        let client = spawn_counters();

        let id = client.create(CounterCreate { value: 5 }).await.unwrap();
        assert_eq!(client.perform_action(id, CounterAction::Take(2)).await.unwrap(), 3);

        let err = client.perform_action(id, CounterAction::Take(9)).await.unwrap_err();
        assert_eq!(err, FrameworkError::Entity("cannot take 9 from 3".to_string()));

        assert!(client.update(id, 500).await.is_err());
        assert_eq!(client.get(id).await.unwrap().unwrap().value, 3);

        client.delete(id).await.unwrap();
        assert_eq!(client.get(id).await.unwrap(), None);
        assert_eq!(client.delete(id).await.unwrap_err(), FrameworkError::NotFound("1".to_string()));
    }

    #[tokio::test]
    async fn test_query_returns_creation_order() {
        let client = spawn_counters();
        for value in [7, 1, 9, 4] {
            client.create(CounterCreate { value }).await.unwrap();
        }

        let big: Vec<u32> = client.query(|c| c.value > 3).await.unwrap().into_iter().map(|c| c.value).collect();
        assert_eq!(big, vec![7, 9, 4]);
    }

    #[tokio::test]
    async fn test_transact_is_all_or_nothing() {
        let client = spawn_counters();
        let a = client.create(CounterCreate { value: 5 }).await.unwrap();
        let b = client.create(CounterCreate { value: 1 }).await.unwrap();

        let err = client
            .transact(vec![(a, CounterAction::Take(2)), (b, CounterAction::Take(3))])
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Entity(_)));
        assert_eq!(client.get(a).await.unwrap().unwrap().value, 5);
        assert_eq!(client.get(b).await.unwrap().unwrap().value, 1);

        let missing = client.transact(vec![(a, CounterAction::Take(1)), (99, CounterAction::Take(1))]).await;
        assert_eq!(missing.unwrap_err(), FrameworkError::NotFound("99".to_string()));
        assert_eq!(client.get(a).await.unwrap().unwrap().value, 5);

        let results = client
            .transact(vec![(a, CounterAction::Take(2)), (b, CounterAction::Take(1)), (a, CounterAction::Take(3))])
            .await
            .unwrap();
        assert_eq!(results, vec![3, 0, 0]);
        assert_eq!(client.get(a).await.unwrap().unwrap().value, 0);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Counter>::new(1, || 1);
        drop(actor);
        assert_eq!(client.get(1).await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
