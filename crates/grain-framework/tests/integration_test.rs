use async_trait::async_trait;
use grain_framework::tracing::setup_tracing;
use grain_framework::{
    ActorEntity, ActorHost, DeactivationReason, FrameworkError, MemoryStore, PersistentState,
    ResourceClient, RuntimeOptions, StateStore, StorageError,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

// --- Test Grain ---

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Tally {
    count: i64,
}

#[derive(Debug)]
enum CounterAction {
    Bump,
    Hold(Duration),
}

#[derive(Debug, thiserror::Error)]
enum CounterError {
    #[error("Negative count: {0}")]
    Negative(i64),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Default)]
struct Recorder {
    activations: AtomicUsize,
    deactivations: Mutex<Vec<(String, DeactivationReason)>>,
}

impl Recorder {
    fn activations(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }

    fn deactivations(&self) -> Vec<(String, DeactivationReason)> {
        self.deactivations.lock().unwrap().clone()
    }
}

struct Counter {
    recorder: Option<Arc<Recorder>>,
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = String;
    type State = Tally;
    type Action = CounterAction;
    type ActionResult = i64;
    type Context = Arc<Recorder>;
    type Error = CounterError;

    const KIND: &'static str = "counter";

    fn new_activation(_id: &String) -> Self {
        Counter { recorder: None }
    }

    async fn on_activate(
        &mut self,
        _id: &String,
        _state: &mut PersistentState<Tally>,
        ctx: &Arc<Recorder>,
    ) -> Result<(), CounterError> {
        ctx.activations.fetch_add(1, Ordering::SeqCst);
        self.recorder = Some(ctx.clone());
        Ok(())
    }

    fn on_set(&self, _id: &String, state: &Tally) -> Result<(), CounterError> {
        if state.count < 0 {
            return Err(CounterError::Negative(state.count));
        }
        Ok(())
    }

    async fn on_deactivate(&mut self, id: &String, reason: DeactivationReason) {
        if let Some(recorder) = &self.recorder {
            recorder.deactivations.lock().unwrap().push((id.clone(), reason));
        }
    }

    async fn handle_action(
        &mut self,
        _id: &String,
        action: CounterAction,
        state: &mut PersistentState<Tally>,
        _ctx: &Arc<Recorder>,
    ) -> Result<i64, CounterError> {
        match action {
            CounterAction::Bump => {
                let mut next = state.get().cloned().unwrap_or_default();
                // Yield between read and write so interleaving would lose updates.
                tokio::task::yield_now().await;
                next.count += 1;
                state.set(next.clone()).await?;
                Ok(next.count)
            }
            CounterAction::Hold(duration) => {
                tokio::time::sleep(duration).await;
                Ok(state.get().map(|t| t.count).unwrap_or_default())
            }
        }
    }
}

/// Fails to load one poisoned key; everything else goes to an inner memory store.
#[derive(Debug, Default)]
struct FlakyStore {
    inner: MemoryStore,
}

#[async_trait]
impl StateStore for FlakyStore {
    async fn load(&self, kind: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if key == "broken" {
            return Err(StorageError::Backend("disk on fire".into()));
        }
        self.inner.load(kind, key).await
    }
    async fn save(&self, kind: &str, key: &str, blob: Vec<u8>) -> Result<(), StorageError> {
        self.inner.save(kind, key, blob).await
    }
    async fn clear(&self, kind: &str, key: &str) -> Result<(), StorageError> {
        self.inner.clear(kind, key).await
    }
}

fn start(
    store: Arc<dyn StateStore>,
    options: RuntimeOptions,
) -> (ResourceClient<Counter>, Arc<Recorder>, JoinHandle<()>) {
    setup_tracing();
    let recorder = Arc::new(Recorder::default());
    let (host, client) = ActorHost::<Counter>::new(store, options);
    let handle = tokio::spawn(host.run(recorder.clone()));
    (client, recorder, handle)
}

// --- Tests ---

#[tokio::test]
async fn test_get_set_clear_roundtrip() {
    let store = MemoryStore::new();
    let (client, _recorder, handle) = start(Arc::new(store.clone()), RuntimeOptions::default());

    assert_eq!(client.get("a".into()).await.unwrap(), None);

    client.set("a".into(), Tally { count: 7 }).await.unwrap();
    assert_eq!(client.get("a".into()).await.unwrap(), Some(Tally { count: 7 }));
    assert!(store.contains("counter", "a"));

    client.clear("a".into()).await.unwrap();
    assert_eq!(client.get("a".into()).await.unwrap(), None);
    assert!(!store.contains("counter", "a"));

    // Clearing absent state succeeds.
    client.clear("a".into()).await.unwrap();

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_set_leaves_state_untouched() {
    let (client, _recorder, handle) =
        start(Arc::new(MemoryStore::new()), RuntimeOptions::default());
    client.set("a".into(), Tally { count: 2 }).await.unwrap();

    let err = client
        .set("a".into(), Tally { count: -1 })
        .await
        .unwrap_err();

    assert!(matches!(
        err.entity_error::<CounterError>(),
        Some(CounterError::Negative(-1))
    ));
    assert_eq!(client.get("a".into()).await.unwrap(), Some(Tally { count: 2 }));

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_requests_for_one_key_are_serialized() {
    let (client, _recorder, handle) =
        start(Arc::new(MemoryStore::new()), RuntimeOptions::default());

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.perform_action("hot".into(), CounterAction::Bump).await
        }));
    }
    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.unwrap().unwrap());
    }
    results.sort_unstable();

    assert_eq!(results, (1..=50).collect::<Vec<i64>>());
    assert_eq!(
        client.get("hot".into()).await.unwrap(),
        Some(Tally { count: 50 })
    );

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_distinct_keys_run_in_parallel() {
    let (client, _recorder, handle) =
        start(Arc::new(MemoryStore::new()), RuntimeOptions::default());

    let busy = client.clone();
    let hold = tokio::spawn(async move {
        busy.perform_action("slow".into(), CounterAction::Hold(Duration::from_secs(5)))
            .await
    });
    tokio::task::yield_now().await;

    let started = tokio::time::Instant::now();
    client.set("fast".into(), Tally { count: 1 }).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(!hold.is_finished());

    assert_eq!(hold.await.unwrap().unwrap(), 0);
    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_idle_activation_is_evicted_and_rehydrated() {
    let options = RuntimeOptions::default().with_idle_timeout(Duration::from_secs(60));
    let (client, recorder, handle) = start(Arc::new(MemoryStore::new()), options);

    client.set("a".into(), Tally { count: 3 }).await.unwrap();
    assert_eq!(client.active_count(), 1);
    assert_eq!(recorder.activations(), 1);

    tokio::time::sleep(Duration::from_secs(61)).await;

    assert_eq!(client.active_count(), 0);
    assert_eq!(
        recorder.deactivations(),
        vec![("a".to_string(), DeactivationReason::IdleTimeout)]
    );

    // The next request activates a fresh instance from persisted state.
    assert_eq!(client.get("a".into()).await.unwrap(), Some(Tally { count: 3 }));
    assert_eq!(recorder.activations(), 2);

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_busy_activation_is_not_evicted() {
    let options = RuntimeOptions::default().with_idle_timeout(Duration::from_secs(60));
    let (client, recorder, handle) = start(Arc::new(MemoryStore::new()), options);

    for _ in 0..5 {
        client
            .perform_action("a".into(), CounterAction::Bump)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    }

    assert_eq!(recorder.activations(), 1);
    assert!(recorder.deactivations().is_empty());

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_state_survives_host_restart() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());

    let (client, _recorder, handle) = start(store.clone(), RuntimeOptions::default());
    client
        .perform_action("a".into(), CounterAction::Bump)
        .await
        .unwrap();
    client.shutdown();
    handle.await.unwrap();

    let (client, _recorder, handle) = start(store, RuntimeOptions::default());
    assert_eq!(client.get("a".into()).await.unwrap(), Some(Tally { count: 1 }));
    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_shutdown_deactivates_and_refuses_new_requests() {
    let (client, recorder, handle) =
        start(Arc::new(MemoryStore::new()), RuntimeOptions::default());
    client.set("a".into(), Tally { count: 1 }).await.unwrap();
    client.set("b".into(), Tally { count: 2 }).await.unwrap();

    client.shutdown();
    handle.await.unwrap();

    let mut reasons = recorder.deactivations();
    reasons.sort_by(|l, r| l.0.cmp(&r.0));
    assert_eq!(
        reasons,
        vec![
            ("a".to_string(), DeactivationReason::Shutdown),
            ("b".to_string(), DeactivationReason::Shutdown),
        ]
    );
    assert!(matches!(
        client.get("a".into()).await,
        Err(FrameworkError::ActorClosed)
    ));
}

#[tokio::test]
async fn test_failed_activation_is_reported_and_isolated() {
    let (client, recorder, handle) = start(Arc::new(FlakyStore::default()), RuntimeOptions::default());

    let err = client.get("broken".into()).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Activation(StorageError::Backend(_))));
    // Activation is retried per request, so the error repeats instead of sticking.
    assert!(matches!(
        client.get("broken".into()).await,
        Err(FrameworkError::Activation(_))
    ));

    client.set("fine".into(), Tally { count: 1 }).await.unwrap();
    assert_eq!(recorder.activations(), 1);

    client.shutdown();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_call_timeout_does_not_cancel_the_request() {
    let options = RuntimeOptions::default().with_call_timeout(Duration::from_secs(1));
    let (client, _recorder, handle) = start(Arc::new(MemoryStore::new()), options);
    client.set("a".into(), Tally { count: 4 }).await.unwrap();

    let err = client
        .perform_action("a".into(), CounterAction::Hold(Duration::from_secs(10)))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::Timeout(_)));

    // The held request still runs to completion; the grain keeps serving afterwards.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(
        client
            .perform_action("a".into(), CounterAction::Bump)
            .await
            .unwrap(),
        5
    );

    client.shutdown();
    handle.await.unwrap();
}
