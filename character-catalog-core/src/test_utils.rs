//! Test helper module
//!
//! Provides a scripted `CharacterSource` and record factories. Compiled for
//! this crate's unit tests and, behind the `test-utils` feature, for the
//! integration tests and downstream crates.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use character_catalog_provider::{CatalogError, CharacterSource, Result};
use tokio::sync::Notify;

use crate::types::{Character, CharacterPage, CharacterStatus};

// ===== MockCharacterSource =====

/// Replays queued responses in order; an empty queue yields an empty page.
///
/// A gated source parks every fetch until [`release`](Self::release) is called.
pub struct MockCharacterSource {
    responses: Mutex<VecDeque<Result<CharacterPage>>>,
    requested: Mutex<Vec<u32>>,
    calls: AtomicUsize,
    called: Notify,
    gate: Option<Notify>,
}

impl Default for MockCharacterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCharacterSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requested: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            called: Notify::new(),
            gate: None,
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new()
        }
    }

    /// Source that replays `responses` in order.
    pub fn with_responses(responses: Vec<Result<CharacterPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::new()
        }
    }

    /// Gated source that replays `responses` in order.
    pub fn gated_with_responses(responses: Vec<Result<CharacterPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::gated()
        }
    }

    pub fn push_page(&self, page: CharacterPage) {
        lock(&self.responses).push_back(Ok(page));
    }

    pub fn push_error(&self, error: CatalogError) {
        lock(&self.responses).push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        lock(&self.requested).clone()
    }

    /// Resolve once a fetch has started.
    pub async fn wait_until_called(&self) {
        self.called.notified().await;
    }

    /// Let one parked fetch continue.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl CharacterSource for MockCharacterSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.requested).push(page);
        self.called.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(CharacterPage::default()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== Factories =====

pub fn character(id: u32, name: &str) -> Character {
    character_with_status(id, name, CharacterStatus::Alive)
}

pub fn character_with_status(id: u32, name: &str, status: CharacterStatus) -> Character {
    Character {
        id,
        name: name.to_string(),
        status,
        species: "Human".to_string(),
        image: format!("https://example.test/avatar/{id}.jpeg"),
    }
}

pub fn page_of(results: Vec<Character>) -> CharacterPage {
    CharacterPage {
        info: None,
        results,
    }
}

pub fn network_error() -> CatalogError {
    CatalogError::NetworkError {
        source_name: "mock".to_string(),
        detail: "connection reset".to_string(),
    }
}
