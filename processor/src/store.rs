use witcalc_core::{Felt, ONE, ZERO};

use crate::errors::EvalError;

// SIGNAL STORE
// ================================================================================================

/// Flat array of every signal value of a circuit instance.
///
/// The length is fixed when the instance is created. Slot 0 is reserved and
/// holds the constant `1`; every component owns a disjoint contiguous
/// subrange starting at its `signal_start`, so an absolute index is always
/// `signal_start + local_offset`. Signals are written by the single active
/// `run` on the call stack; there is no concurrent access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalStore {
    values: Vec<Felt>,
}

impl SignalStore {
    /// Allocates a store of `total_signals` slots, all zero except the
    /// reserved constant-one slot.
    pub fn new(total_signals: usize) -> Self {
        let mut values = vec![ZERO; total_signals];
        if let Some(first) = values.first_mut() {
            *first = ONE;
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the signal at an absolute index.
    ///
    /// # Errors
    /// Returns [`EvalError::SignalOutOfRange`] if the index falls outside the
    /// instance's allocated range.
    pub fn read(&self, index: usize) -> Result<Felt, EvalError> {
        self.values.get(index).copied().ok_or(EvalError::SignalOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Writes the signal at an absolute index.
    ///
    /// # Errors
    /// Returns [`EvalError::SignalOutOfRange`] if the index falls outside the
    /// instance's allocated range.
    pub fn write(&mut self, index: usize, value: Felt) -> Result<(), EvalError> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(EvalError::SignalOutOfRange { index, len }),
        }
    }

    pub fn as_slice(&self) -> &[Felt] {
        &self.values
    }

    /// Consumes the store into the raw witness values.
    pub fn into_values(self) -> Vec<Felt> {
        self.values
    }
}

// CONSTANTS POOL
// ================================================================================================

/// Immutable ordered table of the field-element literals referenced by
/// template bodies, loaded once before evaluation begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantsPool {
    values: Vec<Felt>,
}

impl ConstantsPool {
    /// Loads the pool from a descriptor's literal table.
    pub fn load(literals: &[u64]) -> Self {
        Self {
            values: literals.iter().map(|&value| Felt::new(value)).collect(),
        }
    }

    /// Returns the constant at `index`.
    ///
    /// # Panics
    /// Panics if `index` is outside the table. Constant indices are emitted by
    /// the circuit generator together with the table itself and are trusted.
    pub fn get(&self, index: usize) -> Felt {
        self.values[index]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_slot_holds_one() {
        let store = SignalStore::new(4);
        assert_eq!(store.read(0).unwrap(), ONE);
        assert_eq!(store.read(3).unwrap(), ZERO);
    }

    #[test]
    fn out_of_range_access_is_reported() {
        let mut store = SignalStore::new(4);
        assert!(matches!(
            store.read(4),
            Err(EvalError::SignalOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            store.write(9, ONE),
            Err(EvalError::SignalOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn constants_load_in_pool_order() {
        let pool = ConstantsPool::load(&[0, 1, 256]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(0), ZERO);
        assert_eq!(pool.get(1), ONE);
        assert_eq!(pool.get(2), Felt::new(256));
    }
}
