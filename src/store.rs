//! File-persisted document store.
//!
//! Documents are schemaless JSON values addressed by `(collection, doc_id)`.
//! Each collection lives in `<root>/<collection>.json` and is rewritten
//! atomically on every mutation. Typed shapes are enforced one layer up, in
//! [`crate::catalog`]. Subscribers get a [`ChangeEvent`] per mutation;
//! dropping the [`Subscription`] handle tears the registration down. There
//! is no replay on resubscription.

use serde_json::Value;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub enum StoreError {
    NotFound,
    NotAnObject,
    NotANumber,
    Corrupt(String),
    Io(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => f.write_str("document not found"),
            StoreError::NotAnObject => f.write_str("document is not a JSON object"),
            StoreError::NotANumber => f.write_str("counter field is not a number"),
            StoreError::Corrupt(name) => write!(f, "corrupt collection file: {name}"),
            StoreError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Set,
    Updated,
    Deleted,
}

/// Snapshot notification delivered to collection subscribers.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub collection: String,
    pub doc_id: String,
    pub kind: ChangeKind,
}

/// Live registration against one collection. Dropping it unsubscribes.
pub struct Subscription {
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Next change, skipping over anything dropped while the subscriber
    /// lagged. `None` once the store itself is gone.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    root: PathBuf,
    collections: Mutex<HashMap<String, BTreeMap<String, Value>>>,
    senders: Mutex<HashMap<String, broadcast::Sender<ChangeEvent>>>,
    id_counter: AtomicU64,
}

impl Store {
    /// Load every `<collection>.json` under `root`, creating the directory
    /// if needed.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root).map_err(StoreError::Io)?;
        let mut collections = HashMap::new();
        for entry in fs::read_dir(root).map_err(StoreError::Io)? {
            let entry = entry.map_err(StoreError::Io)?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let raw = fs::read_to_string(&path).map_err(StoreError::Io)?;
            let docs: BTreeMap<String, Value> = serde_json::from_str(&raw)
                .map_err(|_| StoreError::Corrupt(name.to_string()))?;
            collections.insert(name.to_string(), docs);
        }
        Ok(Self {
            inner: Arc::new(StoreInner {
                root: root.to_path_buf(),
                collections: Mutex::new(collections),
                senders: Mutex::new(HashMap::new()),
                id_counter: AtomicU64::new(0),
            }),
        })
    }

    pub fn get(&self, collection: &str, doc_id: &str) -> Option<Value> {
        let collections = self.lock_collections();
        collections
            .get(collection)
            .and_then(|docs| docs.get(doc_id))
            .cloned()
    }

    pub fn list(&self, collection: &str) -> Vec<(String, Value)> {
        let collections = self.lock_collections();
        collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Collection-level equality filter on one top-level field.
    pub fn query_eq(&self, collection: &str, field: &str, expected: &Value) -> Vec<(String, Value)> {
        let collections = self.lock_collections();
        collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, doc)| doc.get(field) == Some(expected))
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Overwrite the full document, creating it if absent.
    pub fn set(&self, collection: &str, doc_id: &str, value: Value) -> Result<(), StoreError> {
        let mut collections = self.lock_collections();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(doc_id.to_string(), value);
        self.flush(&collections, collection)?;
        drop(collections);
        self.notify(collection, doc_id, ChangeKind::Set);
        Ok(())
    }

    /// Shallow-merge top-level fields into an existing document.
    pub fn update(&self, collection: &str, doc_id: &str, patch: Value) -> Result<(), StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::NotAnObject);
        };
        let mut collections = self.lock_collections();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(doc_id))
            .ok_or(StoreError::NotFound)?;
        let Value::Object(fields) = doc else {
            return Err(StoreError::NotAnObject);
        };
        for (key, value) in patch {
            fields.insert(key, value);
        }
        self.flush(&collections, collection)?;
        drop(collections);
        self.notify(collection, doc_id, ChangeKind::Updated);
        Ok(())
    }

    /// Delete a document. Deleting a missing document is a no-op.
    pub fn delete(&self, collection: &str, doc_id: &str) -> Result<(), StoreError> {
        let mut collections = self.lock_collections();
        let existed = collections
            .get_mut(collection)
            .map(|docs| docs.remove(doc_id).is_some())
            .unwrap_or(false);
        if !existed {
            return Ok(());
        }
        self.flush(&collections, collection)?;
        drop(collections);
        self.notify(collection, doc_id, ChangeKind::Deleted);
        Ok(())
    }

    /// Append a document under a generated timestamp-derived id.
    pub fn add(&self, collection: &str, value: Value) -> Result<String, StoreError> {
        let doc_id = self.allocate_id();
        self.set(collection, &doc_id, value)?;
        Ok(doc_id)
    }

    /// Atomically add `delta` to a numeric field, creating the field at
    /// zero when absent. The document itself must exist.
    pub fn increment(
        &self,
        collection: &str,
        doc_id: &str,
        field: &str,
        delta: i64,
    ) -> Result<i64, StoreError> {
        let mut collections = self.lock_collections();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(doc_id))
            .ok_or(StoreError::NotFound)?;
        let Value::Object(fields) = doc else {
            return Err(StoreError::NotAnObject);
        };
        let current = match fields.get(field) {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n.as_i64().ok_or(StoreError::NotANumber)?,
            Some(_) => return Err(StoreError::NotANumber),
        };
        let next = current + delta;
        fields.insert(field.to_string(), Value::from(next));
        self.flush(&collections, collection)?;
        drop(collections);
        self.notify(collection, doc_id, ChangeKind::Updated);
        Ok(next)
    }

    pub fn subscribe(&self, collection: &str) -> Subscription {
        let mut senders = self.inner.senders.lock().expect("store senders lock");
        let sender = senders
            .entry(collection.to_string())
            .or_insert_with(|| broadcast::channel(EVENT_CHANNEL_CAPACITY).0);
        Subscription {
            receiver: sender.subscribe(),
        }
    }

    pub fn allocate_id(&self) -> String {
        let millis = (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64;
        let serial = self.inner.id_counter.fetch_add(1, Ordering::Relaxed);
        format!("{millis}-{serial}")
    }

    fn lock_collections(&self) -> std::sync::MutexGuard<'_, HashMap<String, BTreeMap<String, Value>>> {
        self.inner.collections.lock().expect("store collections lock")
    }

    fn flush(
        &self,
        collections: &HashMap<String, BTreeMap<String, Value>>,
        collection: &str,
    ) -> Result<(), StoreError> {
        let empty = BTreeMap::new();
        let docs = collections.get(collection).unwrap_or(&empty);
        let serialized = serde_json::to_string_pretty(docs)
            .map_err(|_| StoreError::Corrupt(collection.to_string()))?;
        let target = self.inner.root.join(format!("{collection}.json"));
        atomic_write(&target, serialized.as_bytes()).map_err(StoreError::Io)
    }

    fn notify(&self, collection: &str, doc_id: &str, kind: ChangeKind) {
        let senders = self.inner.senders.lock().expect("store senders lock");
        if let Some(sender) = senders.get(collection) {
            // Errors only mean nobody is listening right now.
            let _ = sender.send(ChangeEvent {
                collection: collection.to_string(),
                doc_id: doc_id.to_string(),
                kind,
            });
        }
    }
}

fn atomic_write(target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = target.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, target)
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store(test_name: &str) -> (Store, PathBuf) {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("furqan-store-{test_name}-{nanos}"));
        let store = Store::open(&root).expect("open store");
        (store, root)
    }

    #[test]
    fn set_and_get__should_round_trip_documents() {
        // Given
        let (store, root) = temp_store("set-get");

        // When
        store
            .set("programs", "p1", json!({"category": "Quran"}))
            .expect("set");

        // Then
        assert_eq!(
            store.get("programs", "p1"),
            Some(json!({"category": "Quran"}))
        );
        assert_eq!(store.get("programs", "missing"), None);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn update__should_merge_top_level_fields() {
        // Given
        let (store, root) = temp_store("update");
        store
            .set("users", "u1", json!({"role": "Student", "avatar": ""}))
            .expect("set");

        // When
        store
            .update("users", "u1", json!({"avatar": "owl"}))
            .expect("update");

        // Then
        assert_eq!(
            store.get("users", "u1"),
            Some(json!({"role": "Student", "avatar": "owl"}))
        );

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn update__should_fail_for_missing_document() {
        // Given
        let (store, root) = temp_store("update-missing");

        // When
        let result = store.update("users", "nobody", json!({"avatar": "owl"}));

        // Then
        assert!(matches!(result, Err(StoreError::NotFound)));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn delete__should_be_a_noop_for_missing_documents() {
        // Given
        let (store, root) = temp_store("delete");
        store.set("programs", "p1", json!({})).expect("set");

        // When / Then
        store.delete("programs", "p1").expect("delete");
        store.delete("programs", "p1").expect("second delete");
        assert_eq!(store.get("programs", "p1"), None);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn add__should_generate_unique_ids() {
        // Given
        let (store, root) = temp_store("add");

        // When
        let first = store.add("aid_requests", json!({"n": 1})).expect("add");
        let second = store.add("aid_requests", json!({"n": 2})).expect("add");

        // Then
        assert_ne!(first, second);
        assert_eq!(store.list("aid_requests").len(), 2);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn query_eq__should_filter_on_field_equality() {
        // Given
        let (store, root) = temp_store("query");
        store
            .set("users", "u1", json!({"role": "Volunteer"}))
            .expect("set");
        store
            .set("users", "u2", json!({"role": "Student"}))
            .expect("set");
        store
            .set("users", "u3", json!({"role": "Volunteer"}))
            .expect("set");

        // When
        let volunteers = store.query_eq("users", "role", &json!("Volunteer"));

        // Then
        let ids: Vec<&str> = volunteers.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u3"]);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn increment__should_adjust_counters_symmetrically() {
        // Given
        let (store, root) = temp_store("increment");
        store
            .set("stats", "global", json!({"programCount": 0}))
            .expect("set");

        // When / Then
        assert_eq!(store.increment("stats", "global", "programCount", 1).expect("inc"), 1);
        assert_eq!(store.increment("stats", "global", "programCount", 1).expect("inc"), 2);
        assert_eq!(store.increment("stats", "global", "programCount", -1).expect("dec"), 1);
        assert_eq!(
            store.increment("stats", "global", "visitorCount", 1).expect("new field"),
            1
        );
        assert!(matches!(
            store.increment("stats", "missing", "programCount", 1),
            Err(StoreError::NotFound)
        ));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn open__should_reload_persisted_collections() {
        // Given
        let (store, root) = temp_store("reload");
        store
            .set("content", "settings", json!({"logo": "x"}))
            .expect("set");
        drop(store);

        // When
        let reopened = Store::open(&root).expect("reopen");

        // Then
        assert_eq!(
            reopened.get("content", "settings"),
            Some(json!({"logo": "x"}))
        );

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn subscribe__should_deliver_change_events() {
        // Given
        let (store, root) = temp_store("subscribe");
        let mut subscription = store.subscribe("activities");

        // When
        store.set("activities", "a1", json!({})).expect("set");
        store.delete("activities", "a1").expect("delete");

        // Then
        let first = subscription.recv().await.expect("first event");
        assert_eq!(first.doc_id, "a1");
        assert_eq!(first.kind, ChangeKind::Set);
        let second = subscription.recv().await.expect("second event");
        assert_eq!(second.kind, ChangeKind::Deleted);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn subscribe__should_not_deliver_other_collections() {
        // Given
        let (store, root) = temp_store("subscribe-scope");
        let mut stats = store.subscribe("stats");

        // When
        store.set("programs", "p1", json!({})).expect("set");
        store.set("stats", "global", json!({})).expect("set");

        // Then
        let event = stats.recv().await.expect("stats event");
        assert_eq!(event.collection, "stats");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
