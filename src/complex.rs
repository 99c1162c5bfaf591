#![cfg(feature = "complex")]
//! A complex number element type ordered by magnitude.

use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

/// A complex number `re + im·i`.
///
/// # Ordering
/// Values compare by [`magnitude`](Complex::magnitude) first, then by real part, then by
/// imaginary part. Two values are equal exactly when both parts are equal, which the
/// imaginary tiebreak keeps consistent with the ordering (`3 + 4i` and `3 - 4i` share a
/// magnitude and a real part, yet differ).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Draws both parts uniformly from `[min, max)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Self {
        Self::new(rng.gen_range(min..max), rng.gen_range(min..max))
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.magnitude().partial_cmp(&other.magnitude())? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.re.partial_cmp(&other.re)? {
            Ordering::Equal => self.im.partial_cmp(&other.im),
            ord => Some(ord),
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Display for Complex {
    /// Renders as `(re + im i)`, or `(re - |im| i)` for a negative imaginary part.
    /// A precision flag applies to both parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        match f.precision() {
            Some(p) => write!(f, "({:.p$} {sign} {:.p$}i)", self.re, self.im.abs()),
            None => write!(f, "({} {sign} {}i)", self.re, self.im.abs()),
        }
    }
}
