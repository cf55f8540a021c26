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

//! # Rangesum
//!
//! A Rust library for accumulating numeric values over half-open integer ranges. Each
//! insertion adds its value to every position in `[begin, end)`; the accumulator keeps a
//! compact, sorted sequence of disjoint segments describing the resulting piecewise-constant
//! sum.
//!
//! ## Key Features
//!
//! - **Additive Overlap**: Overlapping insertions add their values together rather than replacing them
//! - **Disjoint Segments**: Stored segments never overlap and are always sorted by `begin`
//! - **Generic Values**: Works with any `Copy` numeric type implementing `Add` and `num_traits::Zero`
//! - **Explicit Conversion**: Segments convert between value types through `Segment::convert`
//! - **Line Input**: `load` feeds `begin end value` text straight into an accumulator
//!
//! ## Usage Examples
//!
//! ### Basic Accumulation
//!
//! ```rust
//! use rangesum::RangeAccumulator;
//!
//! let mut acc = RangeAccumulator::new();
//!
//! acc.insert(3, 6, 5);
//! acc.insert(2, 7, 6);
//!
//! assert_eq!(acc.len(), 3);
//! assert_eq!(acc.at(2).unwrap(), 6);
//! assert_eq!(acc.at(4).unwrap(), 11);
//! assert_eq!(acc.at(6).unwrap(), 6);
//! assert!(acc.at(7).is_err());
//! ```
//!
//! ### Textual Dump
//!
//! ```rust
//! use rangesum::RangeAccumulator;
//!
//! let mut acc = RangeAccumulator::new();
//! acc.insert(8, 10, 5);
//! acc.insert(5, 7, 6);
//! acc.insert(1, 4, 7);
//!
//! assert_eq!(acc.to_string(), "(1,4,7)\n(5,7,6)\n(8,10,5)");
//! ```
//!
//! ## Range Bounds
//!
//! Ranges are half-open. The end of a range is floored to `1` independent of its beginning,
//! so `insert(0, 0, v)` covers position `0`. A request that covers no position after this
//! clamp is ignored.
//!
//! ## Error Handling
//!
//! Operations return `AccumulatorResult<T>` which can contain the following errors:
//!
//! - `AccumulatorError::OutOfRange`: No segment covers the requested position
//! - `AccumulatorError::ValueConversion`: A value does not fit the target value type
//! - `AccumulatorError::Parse`: A line of triple input is malformed
//! - `AccumulatorError::Io`: Reading triple input failed
//!
//! ## Thread Safety
//!
//! `RangeAccumulator` has no internal synchronization. It is `Send` and `Sync` whenever its
//! value type is, and concurrent writers must be serialized by the caller.
//!
//! ## Performance Considerations
//!
//! - Segments are stored in a `Vec`; insertion and lookup are linear in the segment count
//! - Adjacent segments with equal values are not merged
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod accumulator;
mod input;
mod result;
mod segment;

pub use self::accumulator::RangeAccumulator;
pub use self::input::{load, parse_triple, read_triples};
pub use self::result::{AccumulatorError, AccumulatorResult};
pub use self::segment::Segment;
