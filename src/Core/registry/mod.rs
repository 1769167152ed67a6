use crate::Core::handle::{NativeHandle, Opaque};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
mod builder;
mod debug;
mod getters;

pub use builder::RegistryBuilder;

// Use parking_lot's Mutex for better performance
use parking_lot::Mutex;

/// Wrappers are interned per concrete type, so two wrapper types over the
/// same address never collide.
type Key = (TypeId, usize);
type Entry = Weak<dyn Any + Send + Sync>;

lazy_static::lazy_static! {
    static ref GLOBAL_REGISTRY: OpaqueRegistry = RegistryBuilder::new().build();
}

/// The process-wide registry used by mirror accessors.
pub fn global() -> &'static OpaqueRegistry {
    &GLOBAL_REGISTRY
}

struct Table {
    map: HashMap<Key, Entry>,
    /// Table size that triggers the next sweep of dead entries.
    sweep_at: usize,
    sweep_threshold: usize,
}

/// Address → wrapper interning table.
///
/// Holds only weak references: a wrapper lives exactly as long as somebody
/// holds an `Arc` to it. Dead entries are replaced on the next lookup of the
/// same address, or swept once the table grows past the sweep threshold.
///
/// Lookup and insert happen under one lock, so two threads resolving the same
/// address always get the same wrapper.
pub struct OpaqueRegistry {
    table: Mutex<Table>,
    hits: AtomicU64,
    misses: AtomicU64,
    sweeps: AtomicU64,
}

impl OpaqueRegistry {
    pub(crate) fn with_config(initial_capacity: usize, sweep_threshold: usize) -> Self {
        Self {
            table: Mutex::new(Table {
                map: HashMap::with_capacity(initial_capacity),
                sweep_at: sweep_threshold,
                sweep_threshold,
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            sweeps: AtomicU64::new(0),
        }
    }

    /// Resolve `handle` to its wrapper, creating a non-owning one if no live
    /// wrapper is registered. A null handle resolves to `None`.
    pub fn get<T: Opaque>(&self, handle: NativeHandle) -> Option<Arc<T>> {
        if handle.is_null() {
            return None;
        }
        let key = (TypeId::of::<T>(), handle.addr());

        let mut table = self.table.lock();
        if let Some(existing) = live::<T>(&table, &key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(type_name = T::TYPE_NAME, addr = handle.addr(), "opaque registry hit");
            return Some(existing);
        }

        let wrapper = Arc::new(T::from_handle(handle));
        self.insert_locked(&mut table, key, &wrapper);
        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(type_name = T::TYPE_NAME, addr = handle.addr(), "opaque registry insert");
        Some(wrapper)
    }

    /// Resolve `handle` only if a live wrapper already exists.
    pub fn lookup<T: Opaque>(&self, handle: NativeHandle) -> Option<Arc<T>> {
        if handle.is_null() {
            return None;
        }
        let table = self.table.lock();
        live::<T>(&table, &(TypeId::of::<T>(), handle.addr()))
    }

    /// Adopt a wrapper built elsewhere.
    ///
    /// If a live wrapper for the same address is already registered, that one
    /// wins and is returned; `wrapper` is not registered. Wrappers over a null
    /// handle are returned untouched.
    pub fn register<T: Opaque>(&self, wrapper: Arc<T>) -> Arc<T> {
        let handle = wrapper.handle();
        if handle.is_null() {
            return wrapper;
        }
        let key = (TypeId::of::<T>(), handle.addr());

        let mut table = self.table.lock();
        if let Some(existing) = live::<T>(&table, &key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return existing;
        }
        self.insert_locked(&mut table, key, &wrapper);
        self.misses.fetch_add(1, Ordering::Relaxed);
        wrapper
    }

    /// Drop the entry for `handle`, live or not. Needed when the native side
    /// frees the object and the address may be handed out again.
    pub fn forget<T: Opaque>(&self, handle: NativeHandle) -> bool {
        let removed = self
            .table
            .lock()
            .map
            .remove(&(TypeId::of::<T>(), handle.addr()))
            .is_some();
        if removed {
            tracing::debug!(type_name = T::TYPE_NAME, addr = handle.addr(), "opaque registry forget");
        }
        removed
    }

    /// Remove every entry whose wrapper has been dropped. Returns how many were removed.
    pub fn purge(&self) -> usize {
        let mut table = self.table.lock();
        self.sweep_locked(&mut table)
    }

    fn insert_locked<T: Opaque>(&self, table: &mut Table, key: Key, wrapper: &Arc<T>) {
        let entry: Entry = Arc::<T>::downgrade(wrapper);
        table.map.insert(key, entry);
        if table.map.len() >= table.sweep_at {
            self.sweep_locked(table);
        }
    }

    fn sweep_locked(&self, table: &mut Table) -> usize {
        let before = table.map.len();
        table.map.retain(|_, entry| entry.strong_count() > 0);
        let removed = before - table.map.len();

        // Grow the trigger with the live set so a table full of live wrappers
        // is not rescanned on every insert.
        table.sweep_at = table.sweep_threshold.max(table.map.len() * 2);
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            removed,
            remaining = table.map.len(),
            next_sweep_at = table.sweep_at,
            "opaque registry sweep"
        );
        removed
    }
}

impl Default for OpaqueRegistry {
    fn default() -> Self {
        RegistryBuilder::new().build()
    }
}

fn live<T: Opaque>(table: &Table, key: &Key) -> Option<Arc<T>> {
    let strong = table.map.get(key)?.upgrade()?;
    strong.downcast::<T>().ok()
}
