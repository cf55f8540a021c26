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

//! The value-bearing interval record stored by a `RangeAccumulator`.

use crate::result::{AccumulatorError, AccumulatorResult};
use num_traits::{NumCast, ToPrimitive, Zero};
use std::fmt;
use std::ops::Range;

/// A half-open interval `[begin, end)` carrying an accumulated value.
///
/// # Examples
///
/// ```rust
/// use rangesum::Segment;
///
/// let segment = Segment::new(4, 10, 5);
/// assert_eq!(segment.range(), 4..10);
/// assert_eq!(segment.to_string(), "(4,10,5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment<T> {
    /// First position covered by the segment.
    pub begin: usize,
    /// First position past the end of the segment.
    pub end: usize,
    /// Value in effect at every covered position.
    pub value: T,
}

impl<T> Segment<T> {
    /// Creates a new segment.
    ///
    /// `end` is floored to `1` regardless of `begin`, so `Segment::new(0, 0, v)` covers
    /// position `0`. A `begin` past the clamped `end` is kept as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesum::Segment;
    ///
    /// assert_eq!(Segment::new(0, 0, 7).end, 1);
    /// assert_eq!(Segment::new(5, 0, 7).end, 1);
    /// ```
    pub fn new(begin: usize, end: usize, value: T) -> Self {
        Segment {
            begin,
            end: end.max(1),
            value,
        }
    }

    /// Returns the covered positions as a `Range`.
    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// Returns `true` if `position` lies within `[begin, end)`.
    pub fn contains(&self, position: usize) -> bool {
        self.begin <= position && position < self.end
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns `true` if the segment covers no position.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: NumCast> Segment<T> {
    /// Creates a segment from a value of a different numeric type.
    ///
    /// Float to integer conversion truncates toward zero. Values that cannot be
    /// represented in `T` (NaN, overflow) are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesum::Segment;
    ///
    /// let segment = Segment::<i32>::from_value(1, 10, 5.6_f64).unwrap();
    /// assert_eq!(segment.value, 5);
    /// ```
    pub fn from_value<U>(begin: usize, end: usize, value: U) -> AccumulatorResult<Self>
    where
        U: ToPrimitive + fmt::Display + Copy,
    {
        Ok(Segment::new(begin, end, cast_value(value)?))
    }
}

impl<T: ToPrimitive + fmt::Display + Copy> Segment<T> {
    /// Converts this segment to another value type.
    ///
    /// `begin` and `end` are copied unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesum::Segment;
    ///
    /// let narrow = Segment::new(1, 10, 5.5_f64).convert::<i64>().unwrap();
    /// assert_eq!(narrow, Segment::new(1, 10, 5));
    /// ```
    pub fn convert<U: NumCast>(&self) -> AccumulatorResult<Segment<U>> {
        Ok(Segment {
            begin: self.begin,
            end: self.end,
            value: cast_value(self.value)?,
        })
    }
}

fn cast_value<U, T>(value: U) -> AccumulatorResult<T>
where
    U: ToPrimitive + fmt::Display + Copy,
    T: NumCast,
{
    T::from(value).ok_or_else(|| AccumulatorError::ValueConversion {
        value: value.to_string(),
        target: std::any::type_name::<T>(),
    })
}

impl<T: Zero> Default for Segment<T> {
    fn default() -> Self {
        Segment {
            begin: 0,
            end: 1,
            value: T::zero(),
        }
    }
}

impl<T> From<(usize, usize, T)> for Segment<T> {
    fn from((begin, end, value): (usize, usize, T)) -> Self {
        Segment::new(begin, end, value)
    }
}

impl<T: fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.begin, self.end, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let segment = Segment::<i32>::default();
        assert_eq!(segment.begin, 0);
        assert_eq!(segment.end, 1);
        assert_eq!(segment.value, 0);
    }

    #[test]
    fn test_end_clamp_is_absolute() {
        assert_eq!(Segment::new(0, 0, 1).range(), 0..1);
        // The floor is 1, not begin + 1.
        assert_eq!(Segment::new(7, 0, 1).range(), 7..1);
        assert_eq!(Segment::new(7, 3, 1).range(), 7..3);
        assert!(Segment::new(7, 3, 1).is_empty());
    }

    #[test]
    fn test_from_value_truncates() {
        let segment = Segment::<i32>::from_value(1, 10, 5.6_f64).unwrap();
        assert_eq!(segment, Segment::new(1, 10, 5));

        let segment = Segment::<i32>::from_value(1, 10, 5.7_f32).unwrap();
        assert_eq!(segment.value, 5);
    }

    #[test]
    fn test_from_value_rejects_unrepresentable() {
        let err = Segment::<u8>::from_value(0, 1, 300).unwrap_err();
        assert!(matches!(
            err,
            AccumulatorError::ValueConversion { ref value, target: "u8" } if value == "300"
        ));
        assert!(Segment::<i32>::from_value(0, 1, f64::NAN).is_err());
    }

    #[test]
    fn test_convert_widening() {
        let narrow = Segment::new(1, 10, 5_i32);
        let wide = narrow.convert::<f64>().unwrap();
        assert_eq!(wide.begin, narrow.begin);
        assert_eq!(wide.end, narrow.end);
        assert!((wide.value - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_through_integer() {
        let wide = Segment::<i32>::from_value(2, 12, 4.2_f64)
            .unwrap()
            .convert::<f64>()
            .unwrap();
        assert!((wide.value - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_keeps_bounds_verbatim() {
        let raw = Segment {
            begin: 3,
            end: 0,
            value: 1.5_f64,
        };
        let converted = raw.convert::<i32>().unwrap();
        assert_eq!((converted.begin, converted.end, converted.value), (3, 0, 1));
    }

    #[test]
    fn test_contains() {
        let segment = Segment::new(4, 10, 5);
        assert!(!segment.contains(3));
        assert!(segment.contains(4));
        assert!(segment.contains(9));
        assert!(!segment.contains(10));
        assert_eq!(segment.len(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Segment::new(1, 4, 7).to_string(), "(1,4,7)");
        assert_eq!(Segment::new(1, 4, 2.5).to_string(), "(1,4,2.5)");
    }
}
