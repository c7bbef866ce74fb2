//! Type aliases for commonly used complex types.
//!
//! Gives short, meaningful names to the shared-state and callback types used
//! by the event bus and listener adapters.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polyedit_core::types::*;
//!
//! // Instead of: Arc<Mutex<Vec<EditorEvent>>>
//! let log: ThreadSafeVec<EditorEvent> = thread_safe_vec();
//! ```

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>> / Arc<RwLock<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe vector for cross-thread collection management.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// A thread-safe deque for bounded history buffers.
pub type ThreadSafeDeque<T> = Arc<Mutex<VecDeque<T>>>;

/// A thread-safe reader-writer hash map.
///
/// Use when reads greatly outnumber writes, e.g. subscription tables that are
/// read on every publish and written only on subscribe/unsubscribe.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A callback that receives a single parameter.
pub type DataCallback<T> = Box<dyn Fn(T) + Send + Sync>;

/// A callback that receives two parameters.
pub type DataCallback2<T, U> = Box<dyn Fn(T, U) + Send + Sync>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Create a new empty `ThreadSafeVec<T>`.
#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Create a new empty `ThreadSafeDeque<T>`.
#[inline]
pub fn thread_safe_deque<T>() -> ThreadSafeDeque<T> {
    Arc::new(Mutex::new(VecDeque::new()))
}

/// Create a new empty `ThreadSafeRwMap<K, V>`.
#[inline]
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}
