//! Exponent-vector monomials.
//!
//! A monomial stores one exponent per variable with trailing zero exponents
//! trimmed, so two monomials are structurally equal exactly when they are
//! mathematically equal. Exponents live inline for up to eight variables.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Inline storage for exponent vectors.
type Exponents = SmallVec<[u32; 8]>;

/// A monomial x_0^e_0 * x_1^e_1 * ... with trailing zero exponents trimmed.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    exponents: Exponents,
}

impl Monomial {
    /// Creates a monomial from exponents, trimming trailing zeros.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self::trimmed(exps.iter().copied().collect())
    }

    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial x_i.
    #[must_use]
    pub fn var(i: usize) -> Self {
        let mut exponents: Exponents = SmallVec::from_elem(0, i + 1);
        exponents[i] = 1;
        Self { exponents }
    }

    fn trimmed(mut exponents: Exponents) -> Self {
        while exponents.last() == Some(&0) {
            exponents.pop();
        }
        Self { exponents }
    }

    /// Returns the exponent of variable i (zero past the stored length).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the significant exponents (no trailing zeros).
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the number of significant variables: one past the last
    /// variable with a nonzero exponent.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.exponents.iter().map(|&e| u64::from(e)).sum()
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Multiplies two monomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.num_vars().max(other.num_vars());
        let exponents = (0..n)
            .map(|i| self.exponent(i) + other.exponent(i))
            .collect();
        // No trimming needed: the top exponent of the longer factor survives.
        Self { exponents }
    }

    /// Divides this monomial by another, if divisible.
    ///
    /// Returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }

        let exponents = (0..self.num_vars())
            .map(|i| self.exponent(i) - other.exponent(i))
            .collect();
        Some(Self::trimmed(exponents))
    }

    /// Checks if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.num_vars() > self.num_vars() {
            return false;
        }
        other
            .exponents
            .iter()
            .zip(&self.exponents)
            .all(|(d, e)| d <= e)
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let n = self.num_vars().max(other.num_vars());
        let exponents = (0..n)
            .map(|i| self.exponent(i).max(other.exponent(i)))
            .collect();
        Self { exponents }
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let n = self.num_vars().min(other.num_vars());
        let exponents = (0..n)
            .map(|i| self.exponent(i).min(other.exponent(i)))
            .collect();
        Self::trimmed(exponents)
    }
}

/// Returns the display name of variable i.
pub(crate) fn var_name(i: usize) -> String {
    const NAMES: [char; 6] = ['x', 'y', 'z', 'w', 'u', 'v'];
    NAMES
        .get(i)
        .map_or_else(|| format!("x{i}"), char::to_string)
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "{}", var_name(i))?;
            } else {
                write!(f, "{}^{e}", var_name(i))?;
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({self})")
    }
}

/// Compares two monomials lexicographically.
///
/// Missing trailing exponents count as zero, so a monomial that extends
/// another with nonzero exponents is the larger one.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    let n = a.num_vars().max(b.num_vars());
    for i in 0..n {
        match a.exponent(i).cmp(&b.exponent(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    // First compare total degree
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Then compare in reverse order, reversed
    let n = a.num_vars().max(b.num_vars());
    for i in (0..n).rev() {
        match b.exponent(i).cmp(&a.exponent(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
