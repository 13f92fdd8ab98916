//! Multiply/divide assignment search
//!
//! Given N exponent vectors and a target vector, find the assignments of a
//! sign to each input (+1 multiply, -1 divide) such that the signed sum of
//! the inputs equals the target component-wise.
//!
//! This is done the brute-force way: all 2^N assignments are tried. The
//! argument cap keeps that at most 65536 candidates, and trying them all is
//! what lets the search prove that an answer is unique.

use std::fmt;

/// Upper bound on the number of inputs to [`solve`]
pub const MAX_ARGUMENTS: usize = 16;

/// What to do with one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Multiply,
    Divide,
}

impl Sign {
    fn coefficient(self) -> i32 {
        match self {
            Sign::Multiply => 1,
            Sign::Divide => -1,
        }
    }
}

/// One sign per input, packed as bits (set = multiply)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    bits: u32,
    len: usize,
}

impl Assignment {
    /// Sign of input `idx`
    pub fn sign(&self, idx: usize) -> Sign {
        if self.bits & (1 << idx) != 0 {
            Sign::Multiply
        } else {
            Sign::Divide
        }
    }

    /// Signs of all inputs, in input order
    pub fn signs(&self) -> impl Iterator<Item = Sign> + '_ {
        (0..self.len).map(move |i| self.sign(i))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sign in self.signs() {
            match sign {
                Sign::Multiply => write!(f, "*")?,
                Sign::Divide => write!(f, "/")?,
            }
        }
        Ok(())
    }
}

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solution {
    /// Exactly one assignment reproduces the target
    Unique(Assignment),
    /// No assignment reproduces the target
    Impossible,
    /// More than one assignment reproduces the target
    Ambiguous,
}

/// Search every sign assignment of `inputs` for ones that sum to `target`.
///
/// Every input must have the same length as `target`, and there may be at
/// most [`MAX_ARGUMENTS`] inputs; callers validate both.
pub fn solve(inputs: &[&[i32]], target: &[i32]) -> Solution {
    let n = inputs.len();
    debug_assert!(n <= MAX_ARGUMENTS, "solve: too many inputs");
    debug_assert!(inputs.iter().all(|v| v.len() == target.len()));

    let mut residual = vec![0i32; target.len()];
    let mut found: Option<Assignment> = None;

    for bits in 0u32..(1u32 << n) {
        let candidate = Assignment { bits, len: n };
        residual.copy_from_slice(target);
        for (i, vec) in inputs.iter().enumerate() {
            let mul = candidate.sign(i).coefficient();
            for (r, &v) in residual.iter_mut().zip(vec.iter()) {
                *r -= v * mul;
            }
        }
        if residual.iter().any(|&r| r != 0) {
            continue;
        }
        if found.is_some() {
            return Solution::Ambiguous;
        }
        found = Some(candidate);
    }

    match found {
        Some(assignment) => Solution::Unique(assignment),
        None => Solution::Impossible,
    }
}
