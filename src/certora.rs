use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` correctly computes the wrapping sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let a: i64 = nondet();
    let b: i64 = nondet();
    let result = add(a, b);
    cvlr_assert_eq!(result, a.wrapping_add(b));
}

/// Verifies that `add` is commutative.
#[rule]
pub fn rule_add_commutes() {
    let a: i64 = nondet();
    let b: i64 = nondet();
    cvlr_assert_eq!(add(a, b), add(b, a));
}

/// Verifies that zero is the identity element of `add`.
#[rule]
pub fn rule_add_zero_identity() {
    let a: i64 = nondet();
    cvlr_assert_eq!(add(a, 0), a);
    cvlr_assert_eq!(add(0, a), a);
}
