//! Testing utilities for the brew workspace
//!
//! Shared fixtures, a controllable clock and instrumented key-value backends.

#![allow(missing_docs)]

use brew_model::{
    CupSize, DrinkType, Order, Person, PersonOrder, RunCupSize, RunDrink, MILK_OPTIONS,
};
use brew_persist::{KeyValueStore, MemoryStore, PersistenceAdapter, StorageError};
use brew_store::Clock;
use chrono::{DateTime, Duration, Local, TimeZone};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

// ----------------------------------------------------------------------
// Clock
// ----------------------------------------------------------------------

/// Clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    /// Local noon on the given date
    pub fn at_noon(year: i32, month: u32, day: u32) -> Arc<Self> {
        Self::new(local_noon(year, month, day))
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

pub fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap()
}

// ----------------------------------------------------------------------
// Backends
// ----------------------------------------------------------------------

/// Backend whose every operation fails
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Backend(format!("get {key}: unavailable")))
    }

    fn set(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Backend(format!("set {key}: unavailable")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend(format!("remove {key}: unavailable")))
    }
}

/// In-memory backend that counts writes per key
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: Mutex<HashMap<String, usize>>,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self, key: &str) -> usize {
        self.writes.lock().get(key).copied().unwrap_or(0)
    }

    pub fn total_writes(&self) -> usize {
        self.writes.lock().values().sum()
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        *self.writes.lock().entry(key.to_string()).or_default() += 1;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Adapter sharing `backend`, so the test can keep inspecting it
pub fn adapter_over<S: KeyValueStore>(backend: &Arc<S>) -> PersistenceAdapter {
    PersistenceAdapter::from_shared(Arc::clone(backend) as Arc<dyn KeyValueStore>)
}

// ----------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------

pub fn person(name: &str) -> Person {
    Person::new(name).unwrap()
}

pub fn latte_large() -> Order {
    Order::new()
        .with_drink(DrinkType::Latte)
        .with_size(CupSize::Large)
}

pub fn run_order(name: &str) -> PersonOrder {
    PersonOrder::new(name, RunDrink::Coffee, RunCupSize::Medium, MILK_OPTIONS[3], 1)
}

pub fn run_order_with(name: &str, drink: RunDrink, size: RunCupSize) -> PersonOrder {
    PersonOrder::new(name, drink, size, MILK_OPTIONS[2], 0)
}
