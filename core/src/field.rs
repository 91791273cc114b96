//! Prime-field arithmetic underlying all witness computation.
//!
//! Every signal, constant, and intermediate value is an element of the 64-bit
//! Goldilocks field (modulus 2^64 - 2^32 + 1). The basic ring operations
//! (`+`, `-`, `*`, unary `-`) come from the backend's operator impls; this
//! module adds the operations circuit bodies need on top of them: checked
//! division, field-valued comparison predicates, bitwise reinterpretation of
//! the canonical representative, and the integer escape hatch used for shift
//! amounts and similar small quantities.
//!
//! The field has no total ordering. [`lt`] and the bitwise operations are
//! defined over the canonical integer representative and are only meaningful
//! for values well below the modulus, which is the only way generated circuit
//! code uses them.

use winter_math::{FieldElement, StarkField, fields::f64::BaseElement};

// CONSTANTS
// ================================================================================================

/// An element of the prime field all witness values live in.
pub type Felt = BaseElement;

/// The additive identity.
pub const ZERO: Felt = Felt::ZERO;

/// The multiplicative identity.
pub const ONE: Felt = Felt::ONE;

/// Exclusive upper bound on canonical representatives accepted by [`to_int`].
///
/// Circuit bodies only cast values that act as indices, shift amounts, or
/// loop-derived counters; anything at or above this bound indicates the value
/// was never a small integer to begin with.
pub const INT_CAST_BOUND: u64 = 1 << 32;

// FIELD ERROR
// ================================================================================================

/// Context-free failures of individual field operations.
///
/// These carry no information about where in a circuit the operation ran;
/// the evaluation engine wraps them with component context at its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("division by the additive identity")]
    DivisionByZero,
    #[error("field value {0} is too large to be cast to a machine integer")]
    IntCastOverflow(u64),
}

// OPERATIONS
// ================================================================================================

/// Field division via inverse-multiply.
///
/// # Errors
/// Returns [`FieldError::DivisionByZero`] if `b` is the additive identity.
/// The backend defines `inv(0) == 0`, so the check must happen here.
pub fn div(a: Felt, b: Felt) -> Result<Felt, FieldError> {
    if b == ZERO {
        return Err(FieldError::DivisionByZero);
    }
    Ok(a * b.inv())
}

/// Equality as a field value: `1` if `a == b`, `0` otherwise.
pub fn eq(a: Felt, b: Felt) -> Felt {
    if a == b { ONE } else { ZERO }
}

/// Inequality as a field value: `1` if `a != b`, `0` otherwise.
pub fn neq(a: Felt, b: Felt) -> Felt {
    if a == b { ZERO } else { ONE }
}

/// Less-than over canonical representatives, as a field value.
///
/// Only meaningful for values in the small range documented on
/// [`INT_CAST_BOUND`]; generated code uses it for counters and bounds, never
/// for general field comparisons.
pub fn lt(a: Felt, b: Felt) -> Felt {
    if a.as_int() < b.as_int() { ONE } else { ZERO }
}

/// Nonzero test.
pub fn is_true(a: Felt) -> bool {
    a != ZERO
}

/// Casts the canonical representative to a machine integer.
///
/// # Errors
/// Returns [`FieldError::IntCastOverflow`] if the representative is at or
/// above [`INT_CAST_BOUND`].
pub fn to_int(a: Felt) -> Result<u64, FieldError> {
    let value = a.as_int();
    if value >= INT_CAST_BOUND {
        return Err(FieldError::IntCastOverflow(value));
    }
    Ok(value)
}

/// Logical right shift of the canonical representative.
///
/// Shift amounts of 64 or more yield zero.
///
/// # Errors
/// Returns an error if `shift` is not a small integer (see [`to_int`]).
pub fn shr(a: Felt, shift: Felt) -> Result<Felt, FieldError> {
    let shift = to_int(shift)?;
    if shift >= u64::BITS as u64 {
        return Ok(ZERO);
    }
    Ok(Felt::new(a.as_int() >> shift))
}

/// Bitwise AND of the canonical representatives.
pub fn band(a: Felt, b: Felt) -> Felt {
    Felt::new(a.as_int() & b.as_int())
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn div_by_zero_is_an_error() {
        assert_eq!(div(Felt::new(7), ZERO), Err(FieldError::DivisionByZero));
        assert_eq!(div(ZERO, ZERO), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn lt_on_small_representatives() {
        assert_eq!(lt(Felt::new(3), Felt::new(5)), ONE);
        assert_eq!(lt(Felt::new(5), Felt::new(3)), ZERO);
        assert_eq!(lt(Felt::new(5), Felt::new(5)), ZERO);
    }

    #[test]
    fn shr_and_band_reinterpret_the_representative() {
        let v = Felt::new(0b1011_0100);
        assert_eq!(shr(v, Felt::new(2)).unwrap(), Felt::new(0b10_1101));
        assert_eq!(shr(v, Felt::new(64)).unwrap(), ZERO);
        assert_eq!(band(v, ONE), ZERO);
        assert_eq!(band(shr(v, Felt::new(2)).unwrap(), ONE), ONE);
    }

    #[test]
    fn to_int_respects_the_cast_bound() {
        assert_eq!(to_int(Felt::new(123)), Ok(123));
        let big = Felt::new(INT_CAST_BOUND);
        assert_eq!(to_int(big), Err(FieldError::IntCastOverflow(INT_CAST_BOUND)));
    }

    fn any_felt() -> impl Strategy<Value = Felt> {
        any::<u64>().prop_map(Felt::new)
    }

    proptest! {
        #[test]
        fn mul_of_div_roundtrips(a in any_felt(), b in any_felt()) {
            prop_assume!(b != ZERO);
            prop_assert_eq!(div(a, b).unwrap() * b, a);
        }

        #[test]
        fn additive_inverse_cancels(a in any_felt()) {
            prop_assert_eq!(a + (-a), ZERO);
        }

        #[test]
        fn eq_is_reflexive(a in any_felt()) {
            prop_assert_eq!(eq(a, a), ONE);
            prop_assert_eq!(neq(a, a), ZERO);
        }
    }
}
