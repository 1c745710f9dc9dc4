// Rust guideline compliant 2026-02-09

//! In-memory storage and remote doubles for store tests.

#![allow(dead_code)]

use async_trait::async_trait;
use dohas_app::{AppError, ChallengeStore, ContentStorage, InitialState, RemoteSource};
use dohas_core::{Challenge, Language};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Key-value storage held in memory, with switchable failures.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn put(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn put_challenges(&self, language: Language, challenges: &[Challenge]) {
        self.put(
            &language.storage_key(),
            &serde_json::to_string(challenges).unwrap(),
        );
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ContentStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> dohas_core::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(dohas_core::Error::Storage("read refused".to_string()));
        }
        Ok(self.raw(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> dohas_core::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(dohas_core::Error::Storage("disk full".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.put(key, value);
        Ok(())
    }
}

/// What the scripted remote answers for one language.
#[derive(Clone)]
pub enum Reply {
    Data(Vec<Challenge>),
    Null,
    Fail(String),
}

/// Remote source answering from a per-language script.
#[derive(Default)]
pub struct ScriptedRemote {
    replies: Mutex<HashMap<Language, Reply>>,
    pub calls: AtomicUsize,
}

impl ScriptedRemote {
    pub fn reply(&self, language: Language, reply: Reply) {
        self.replies.lock().unwrap().insert(language, reply);
    }
}

#[async_trait]
impl RemoteSource for ScriptedRemote {
    async fn fetch(&self, language: Language) -> dohas_app::Result<Option<Vec<Challenge>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().get(&language).cloned();
        match reply {
            Some(Reply::Data(data)) => Ok(Some(data)),
            Some(Reply::Null) | None => Ok(None),
            Some(Reply::Fail(message)) => Err(AppError::Remote { language, message }),
        }
    }
}

pub type TestStore = ChallengeStore<Arc<MemoryStorage>, Arc<ScriptedRemote>>;

/// Builds a store over fresh doubles, returning handles to both.
pub fn store_with(initial: InitialState) -> (TestStore, Arc<MemoryStorage>, Arc<ScriptedRemote>) {
    let storage = Arc::new(MemoryStorage::default());
    let remote = Arc::new(ScriptedRemote::default());
    let store = ChallengeStore::new(
        Arc::clone(&storage),
        Arc::clone(&remote),
        InitialState {
            seed: Some(7),
            ..initial
        },
    );
    (store, storage, remote)
}

/// A small dataset whose titles carry `tag` so refreshed data is recognisable.
pub fn dataset(tag: &str) -> Vec<Challenge> {
    vec![
        Challenge::new(1, format!("{tag} one"))
            .with_doha(1, "a1", "b1")
            .with_doha(2, "a2", "b2"),
        Challenge::new(2, format!("{tag} two"))
            .with_doha(3, "a3", "b3")
            .with_doha(4, "a4", "b4"),
        Challenge::new(3, format!("{tag} three")).with_doha(5, "a5", "b5"),
    ]
}

pub fn ids(challenges: &[Challenge]) -> Vec<u32> {
    challenges.iter().map(|c| c.id).collect()
}
