use anyhow::anyhow;
use reminder_service_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

pub fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow!("Inmemory collection lock was poisoned"))
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    Ok(collection.iter().filter(|e| compare(e)).cloned().collect())
}

/// Replaces the stored value with the same id. Returns false when no
/// such value exists.
pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<bool> {
    let mut collection = lock(collection)?;
    match collection.iter_mut().find(|e| e.id() == val.id()) {
        Some(stored) => {
            *stored = val.clone();
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn delete<T: Entity>(val_id: ID, collection: &Mutex<Vec<T>>) -> anyhow::Result<Option<T>> {
    let mut collection = lock(collection)?;
    let position = collection.iter().position(|e| e.id() == val_id);
    Ok(position.map(|i| collection.remove(i)))
}

/// One past the largest stored id. Once the largest possible id is taken
/// the smallest unused positive id is handed out instead.
pub fn next_id<T: Entity>(collection: &[T]) -> anyhow::Result<ID> {
    let max_id = collection.iter().map(|e| e.id()).max().unwrap_or(0);
    if let Some(id) = max_id.checked_add(1) {
        return Ok(id);
    }
    (1..ID::MAX)
        .find(|id| collection.iter().all(|e| e.id() != *id))
        .ok_or_else(|| anyhow!("No unused ids left"))
}
