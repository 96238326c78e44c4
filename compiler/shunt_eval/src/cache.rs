//! Memoization of binary operations.
//!
//! Keys hold the operator and the exact bit patterns of both operands, so
//! `0.0` and `-0.0` (and distinct NaN payloads) never collide. Only
//! multiplication is looked up in both operand orders; every other operator,
//! addition included, is keyed in the order written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shunt_lexer::Operator;

/// Canonical key of one binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationKey {
    op: Operator,
    lhs: u64,
    rhs: u64,
}

impl OperationKey {
    /// Key for `lhs op rhs` in written order.
    pub fn new(op: Operator, lhs: f64, rhs: f64) -> Self {
        Self {
            op,
            lhs: lhs.to_bits(),
            rhs: rhs.to_bits(),
        }
    }

    /// The same operation with operands swapped.
    pub fn reversed(self) -> Self {
        Self {
            op: self.op,
            lhs: self.rhs,
            rhs: self.lhs,
        }
    }
}

/// Storage for previously computed binary operations.
///
/// Implementations never evict; a cache lives as long as its owner decides.
pub trait OperationCache {
    /// The stored result for `key`, if any.
    fn lookup(&mut self, key: &OperationKey) -> Option<f64>;
    /// Remember `value` as the result for `key`.
    fn store(&mut self, key: OperationKey, value: f64);
}

/// Compute `lhs op rhs`, consulting and filling `cache`.
pub fn memoized(cache: &mut dyn OperationCache, op: Operator, lhs: f64, rhs: f64) -> f64 {
    let key = OperationKey::new(op, lhs, rhs);
    if let Some(value) = cache.lookup(&key) {
        log::trace!("cache hit for {lhs:?} {op} {rhs:?}");
        return value;
    }
    if op.is_commutative() {
        if let Some(value) = cache.lookup(&key.reversed()) {
            log::trace!("cache hit for {rhs:?} {op} {lhs:?}");
            return value;
        }
    }

    let value = op.apply_binary(lhs, rhs);
    cache.store(key, value);
    if op.is_commutative() {
        cache.store(key.reversed(), value);
    }
    value
}

/// A cache that remembers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uncached;

impl OperationCache for Uncached {
    fn lookup(&mut self, _key: &OperationKey) -> Option<f64> {
        None
    }

    fn store(&mut self, _key: OperationKey, _value: f64) {}
}

/// Single-owner cache.
#[derive(Debug, Default, Clone)]
pub struct EvaluationCache {
    entries: HashMap<OperationKey, f64>,
}

impl EvaluationCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. A product counts twice, once per order.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read an entry without going through [`OperationCache`].
    pub fn get(&self, key: &OperationKey) -> Option<f64> {
        self.entries.get(key).copied()
    }
}

impl OperationCache for EvaluationCache {
    fn lookup(&mut self, key: &OperationKey) -> Option<f64> {
        self.get(key)
    }

    fn store(&mut self, key: OperationKey, value: f64) {
        self.entries.insert(key, value);
    }
}

/// Lock-protected cache shared between threads.
///
/// Clones share the same entries; give each worker its own clone.
#[derive(Debug, Default, Clone)]
pub struct SharedEvaluationCache {
    entries: Arc<Mutex<HashMap<OperationKey, f64>>>,
}

impl SharedEvaluationCache {
    /// An empty cache with a single handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys across all handles.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // a poisoned map still holds valid entries, values are plain f64s
    fn entries(&self) -> MutexGuard<'_, HashMap<OperationKey, f64>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OperationCache for SharedEvaluationCache {
    fn lookup(&mut self, key: &OperationKey) -> Option<f64> {
        self.entries().get(key).copied()
    }

    fn store(&mut self, key: OperationKey, value: f64) {
        self.entries().insert(key, value);
    }
}
