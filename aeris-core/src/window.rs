//! Fixed-Size Trailing Window for Gas-Resistance Samples
//!
//! ## Overview
//!
//! The baseline estimator needs the most recent N accepted gas-resistance
//! readings, with older readings silently discarded. This module provides a
//! circular (ring) buffer sized at compile time through const generics, so
//! the warm-up phase runs with zero heap allocation.
//!
//! ## Design Rationale
//!
//! A circular buffer gives constant-time operations in fixed memory:
//! - O(1) insertion (overwrites oldest when full)
//! - O(n) iteration in arrival order, oldest first
//! - Zero heap allocations
//!
//! When full, a push automatically discards the oldest entry rather than
//! returning an error - during burn-in, recent readings are strictly more
//! valuable than old ones because the heater is still settling.
//!
//! ### Memory Layout
//!
//! ```text
//! SampleWindow<5> after 7 pushes (a..g):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  f  │  g  │  c  │  d  │  e  │   write_pos = 2
//! └─────┴─────┴─────┴─────┴─────┘
//! Logical (arrival) order: c, d, e, f, g
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use aeris_core::window::SampleWindow;
//!
//! let mut window: SampleWindow<50> = SampleWindow::new();
//! window.push(120_000.0);
//! window.push(121_500.0);
//!
//! assert_eq!(window.len(), 2);
//! assert_eq!(window.mean(), Some(120_750.0));
//! ```

/// Fixed-size circular buffer of gas-resistance samples (Ohms)
///
/// ## Type Parameter
///
/// - `N`: Maximum number of samples retained, fixed at compile time.
///
/// ## Internal Invariants
///
/// - `write_pos < N` (next write position is always valid)
/// - `len <= N` (never claim more items than capacity)
/// - Iteration yields samples in arrival order, oldest first
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    /// Storage array; `None` marks slots not yet written
    data: [Option<f32>; N],

    /// Index where the next write will occur, wraps at N
    write_pos: usize,

    /// Current number of valid samples, saturates at N
    len: usize,
}

impl<const N: usize> SampleWindow<N> {
    /// Creates a new empty window
    ///
    /// This is a const function, allowing creation in static contexts.
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a sample, evicting the oldest when the window is full
    pub fn push(&mut self, sample_ohms: f32) {
        self.data[self.write_pos] = Some(sample_ohms);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Get number of retained samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the window is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Arithmetic mean of the retained samples
    ///
    /// Averages over however many samples were actually collected - a
    /// half-full window divides by its real length, never by N. Returns
    /// `None` for an empty window; the mean of nothing is not zero.
    pub fn mean(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let sum: f32 = self.iter().sum();
        Some(sum / self.len as f32)
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> SampleWindowIter<'_, N> {
        SampleWindowIter {
            window: self,
            index: 0,
        }
    }

    /// Gets a sample by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the window is not yet full, logical and physical indices match.
    /// When full, the oldest element sits at `write_pos`, so the physical
    /// position is `(write_pos + index) % N`.
    fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index]
    }
}

/// Iterator over window contents, oldest first
pub struct SampleWindowIter<'a, const N: usize> {
    window: &'a SampleWindow<N>,
    index: usize,
}

impl<const N: usize> Iterator for SampleWindowIter<'_, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.window.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window() {
        let window: SampleWindow<5> = SampleWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.mean(), None);
    }

    #[test]
    fn push_and_average() {
        let mut window = SampleWindow::<5>::new();

        window.push(100.0);
        window.push(200.0);
        window.push(300.0);

        assert_eq!(window.len(), 3);
        assert_eq!(window.mean(), Some(200.0));
    }

    #[test]
    fn fifo_eviction() {
        let mut window = SampleWindow::<3>::new();

        for i in 0..5 {
            window.push(i as f32);
        }

        // Should only have 3 items: the most recent, in arrival order
        assert_eq!(window.len(), 3);
        assert!(window.is_full());

        let values: Vec<f32> = window.iter().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn mean_divides_by_actual_count() {
        let mut window = SampleWindow::<50>::new();

        // Only 2 of 50 slots used; mean must divide by 2, not 50
        window.push(10.0);
        window.push(30.0);

        assert_eq!(window.mean(), Some(20.0));
    }

    #[test]
    fn mean_over_full_window_tracks_eviction() {
        let mut window = SampleWindow::<2>::new();

        window.push(1.0);
        window.push(3.0);
        window.push(5.0); // evicts 1.0

        assert_eq!(window.mean(), Some(4.0));
    }
}
