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

//! Error types and results for the rangesum library.

use thiserror::Error;

/// A specialized Result type for rangesum operations.
pub type AccumulatorResult<T> = Result<T, AccumulatorError>;

/// Errors that can occur during rangesum operations.
#[derive(Debug, Error)]
pub enum AccumulatorError {
    /// No stored segment covers the requested position.
    #[error("No segment at pos {position}")]
    OutOfRange {
        /// The position that was looked up.
        position: usize,
    },
    /// A value could not be represented in the target value type.
    #[error("Value {value} cannot be represented as {target}")]
    ValueConversion {
        /// Rendering of the offending value.
        value: String,
        /// Name of the target value type.
        target: &'static str,
    },
    /// A line of triple input could not be parsed.
    #[error("Line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// Reading triple input failed.
    #[error("I/O error while reading input")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = AccumulatorError::OutOfRange { position: 12 };
        assert_eq!(err.to_string(), "No segment at pos 12");
    }

    #[test]
    fn test_parse_message() {
        let err = AccumulatorError::Parse {
            line: 3,
            reason: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: expected 3 fields, found 2");
    }

    #[test]
    fn test_io_error_converts() {
        fn fail() -> AccumulatorResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))?;
            Ok(())
        }
        assert!(matches!(fail(), Err(AccumulatorError::Io(_))));
    }
}
