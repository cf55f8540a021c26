//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Accumulation of values over disjoint half-open ranges.

use crate::result::{AccumulatorError, AccumulatorResult};
use crate::segment::Segment;
use log::{debug, trace};
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A `RangeAccumulator` tracks a sequence of non-overlapping segments sorted by `begin`,
/// each carrying the sum of every value inserted over its positions.
///
/// Inserting a range that partially overlaps stored segments splits them so that the
/// overlapping part carries the combined value while the rest keeps its old value.
/// Adjacent segments with equal values are never merged.
///
/// # Examples
///
/// ```rust
/// use rangesum::RangeAccumulator;
///
/// let mut acc = RangeAccumulator::new();
///
/// acc.insert(10, 20, 1);
/// acc.insert(15, 25, 2);
///
/// // Results in: [10..15) 1, [15..20) 3, [20..25) 2
/// assert_eq!(acc.len(), 3);
/// assert_eq!(acc.at(17).unwrap(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RangeAccumulator<T> {
    segments: Vec<Segment<T>>,
}

impl<T> Default for RangeAccumulator<T> {
    fn default() -> Self {
        RangeAccumulator {
            segments: Vec::new(),
        }
    }
}

impl<T> RangeAccumulator<T> {
    /// Creates an empty `RangeAccumulator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segment is stored.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Removes every stored segment.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// The stored segments in ascending order.
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Iterates over the stored segments in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<T>> {
        self.segments.iter()
    }
}

impl<T> RangeAccumulator<T>
where
    T: Copy + Add<Output = T> + PartialOrd + Zero,
{
    /// Adds `value` over the half-open range `[begin, end)`.
    ///
    /// `end` is first floored to `1` as `Segment::new` does. A request that still covers
    /// no position afterwards (`begin >= end`) is ignored.
    ///
    /// The stored segments are walked once from the front. Segments lying entirely before
    /// the request are left alone, the segments it touches are replaced by their split
    /// fragments plus fresh segments for any gaps, and the replacement is spliced back
    /// where the walk stopped, so the sequence stays sorted without a separate sort.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesum::RangeAccumulator;
    ///
    /// let mut acc = RangeAccumulator::new();
    /// acc.insert(3, 6, 5);
    /// acc.insert(4, 5, 6);
    /// assert_eq!(acc.to_string(), "(3,4,5)\n(4,5,11)\n(5,6,5)");
    /// ```
    pub fn insert(&mut self, begin: usize, end: usize, value: T) {
        let request = Segment::new(begin, end, value);
        if request.is_empty() {
            debug!("Ignoring zero-width insert [{}..{})", request.begin, request.end);
            return;
        }
        let Segment { begin, end, .. } = request;

        let first = self
            .segments
            .iter()
            .position(|segment| segment.end > begin)
            .unwrap_or(self.segments.len());

        let mut fragments = Vec::new();
        let mut cursor = begin;
        let mut last = first;

        for current in self.segments[first..]
            .iter()
            .take_while(|segment| segment.begin < end)
        {
            // Gap before this segment
            if cursor < current.begin {
                fragments.push(Segment::new(cursor, current.begin, value));
                cursor = current.begin;
            }
            // Untouched head of the segment
            if cursor > current.begin {
                fragments.push(Segment::new(current.begin, cursor, current.value));
            }
            fragments.push(Segment::new(
                cursor,
                current.end.min(end),
                current.value + value,
            ));
            // Untouched tail of the segment
            if end < current.end {
                fragments.push(Segment::new(end, current.end, current.value));
            }
            cursor = current.end;
            last += 1;
        }

        if cursor < end {
            fragments.push(Segment::new(cursor, end, value));
        }

        trace!(
            "Insert [{begin}..{end}) replaced {} segment(s) at {first} with {} fragment(s)",
            last - first,
            fragments.len()
        );
        self.segments.splice(first..last, fragments);
    }

    /// Adds a prebuilt segment, equivalent to `insert(segment.begin, segment.end, segment.value)`.
    pub fn add(&mut self, segment: Segment<T>) {
        self.insert(segment.begin, segment.end, segment.value);
    }

    /// Returns the value in effect at `position`, or `None` if no segment covers it.
    pub fn get(&self, position: usize) -> Option<T> {
        self.segments
            .iter()
            .take_while(|segment| segment.begin <= position)
            .find(|segment| segment.contains(position))
            .map(|segment| segment.value)
    }

    /// Returns the value in effect at `position`.
    ///
    /// Fails with [`AccumulatorError::OutOfRange`] if no segment covers `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesum::{AccumulatorError, RangeAccumulator};
    ///
    /// let mut acc = RangeAccumulator::new();
    /// acc.insert(4, 10, 5);
    /// assert_eq!(acc.at(4).unwrap(), 5);
    /// assert!(matches!(acc.at(10), Err(AccumulatorError::OutOfRange { position: 10 })));
    /// ```
    pub fn at(&self, position: usize) -> AccumulatorResult<T> {
        self.get(position)
            .ok_or(AccumulatorError::OutOfRange { position })
    }

    /// Returns the largest stored value.
    ///
    /// The scan starts from zero, so an empty accumulator and one whose values are all
    /// zero or negative both report zero. Use [`is_empty`](Self::is_empty) to tell an
    /// empty accumulator apart.
    pub fn max_value(&self) -> T {
        self.segments.iter().fold(T::zero(), |max, segment| {
            if segment.value > max {
                segment.value
            } else {
                max
            }
        })
    }
}

impl<T> AddAssign<Segment<T>> for RangeAccumulator<T>
where
    T: Copy + Add<Output = T> + PartialOrd + Zero,
{
    fn add_assign(&mut self, segment: Segment<T>) {
        self.add(segment);
    }
}

impl<T> Extend<Segment<T>> for RangeAccumulator<T>
where
    T: Copy + Add<Output = T> + PartialOrd + Zero,
{
    fn extend<I: IntoIterator<Item = Segment<T>>>(&mut self, iter: I) {
        for segment in iter {
            self.add(segment);
        }
    }
}

impl<T> FromIterator<Segment<T>> for RangeAccumulator<T>
where
    T: Copy + Add<Output = T> + PartialOrd + Zero,
{
    fn from_iter<I: IntoIterator<Item = Segment<T>>>(iter: I) -> Self {
        let mut acc = RangeAccumulator::new();
        acc.extend(iter);
        acc
    }
}

impl<'a, T> IntoIterator for &'a RangeAccumulator<T> {
    type Item = &'a Segment<T>;
    type IntoIter = std::slice::Iter<'a, Segment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<T: fmt::Display> fmt::Display for RangeAccumulator<T> {
    /// One `(begin,end,value)` per line in ascending order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
