use std::ops::Add;

use crate::dom::Diagnostics;

/// Returns `current_count + increment`.
///
/// No validation is performed; the result is whatever `Add` produces for `T`.
///
/// ```
/// # use kinetic::counter::increment_counter;
/// assert_eq!(increment_counter(5, 3), 8);
/// assert_eq!(increment_counter(0.5, 0.25), 0.75);
/// ```
pub fn increment_counter<T: Add<Output = T>>(current_count: T, increment: T) -> T {
    current_count + increment
}

/// A counter owned by whatever composes the page, starting at zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Writes the current value to `out`, increments it by one, then writes the
    /// updated value.
    pub fn log_and_increment<D: Diagnostics + ?Sized>(&mut self, out: &D) {
        out.log(&format!("Global counter before increment: {}", self.value));
        self.value = increment_counter(self.value, 1);
        out.log(&format!("Global counter after increment: {}", self.value));
    }
}
