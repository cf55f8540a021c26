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

//! Reading `begin end value` triples from line-oriented text.
//!
//! Each line holds three whitespace-separated fields. Blank lines and lines starting
//! with `#` are skipped.

use crate::accumulator::RangeAccumulator;
use crate::result::{AccumulatorError, AccumulatorResult};
use log::debug;
use num_traits::Zero;
use std::io::BufRead;
use std::ops::Add;
use std::str::FromStr;

/// Parses a single line into a `(begin, end, value)` triple.
///
/// Returns `Ok(None)` for blank and comment lines. `line_no` is only used for error
/// reporting.
///
/// # Examples
///
/// ```rust
/// use rangesum::parse_triple;
///
/// assert_eq!(parse_triple::<i64>("4 10 5", 1).unwrap(), Some((4, 10, 5)));
/// assert_eq!(parse_triple::<i64>("   ", 2).unwrap(), None);
/// assert!(parse_triple::<i64>("4 10", 3).is_err());
/// ```
pub fn parse_triple<T: FromStr>(
    line: &str,
    line_no: usize,
) -> AccumulatorResult<Option<(usize, usize, T)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [begin, end, value] = fields[..] else {
        return Err(AccumulatorError::Parse {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let invalid = |name: &str, field: &str| AccumulatorError::Parse {
        line: line_no,
        reason: format!("invalid {name} `{field}`"),
    };
    let begin = begin.parse().map_err(|_| invalid("begin", begin))?;
    let end = end.parse().map_err(|_| invalid("end", end))?;
    let value = value.parse().map_err(|_| invalid("value", value))?;
    Ok(Some((begin, end, value)))
}

/// Iterates over the triples in `reader`, skipping blank and comment lines.
pub fn read_triples<T: FromStr, R: BufRead>(
    reader: R,
) -> impl Iterator<Item = AccumulatorResult<(usize, usize, T)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) => parse_triple(&line, index + 1).transpose(),
            Err(err) => Some(Err(AccumulatorError::Io(err))),
        })
}

/// Feeds every triple in `reader` into `acc`, returning how many were applied.
///
/// Stops at the first malformed line; triples before it remain applied.
///
/// # Examples
///
/// ```rust
/// use rangesum::{load, RangeAccumulator};
///
/// let mut acc = RangeAccumulator::<i64>::new();
/// let applied = load("3 6 5\n# comment\n2 7 6\n".as_bytes(), &mut acc).unwrap();
/// assert_eq!(applied, 2);
/// assert_eq!(acc.at(4).unwrap(), 11);
/// ```
pub fn load<T, R>(reader: R, acc: &mut RangeAccumulator<T>) -> AccumulatorResult<usize>
where
    T: FromStr + Copy + Add<Output = T> + PartialOrd + Zero,
    R: BufRead,
{
    let mut applied = 0;
    for triple in read_triples(reader) {
        let (begin, end, value) = triple?;
        acc.insert(begin, end, value);
        applied += 1;
    }
    debug!("Loaded {applied} triple(s) into {} segment(s)", acc.len());
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(
            parse_triple::<i64>("  1\t4   7 ", 1).unwrap(),
            Some((1, 4, 7))
        );
        assert_eq!(parse_triple::<f64>("1 4 2.5", 1).unwrap(), Some((1, 4, 2.5)));
    }

    #[test]
    fn test_parse_skips_blank_and_comment() {
        assert_eq!(parse_triple::<i64>("", 1).unwrap(), None);
        assert_eq!(parse_triple::<i64>("# begin end value", 1).unwrap(), None);
    }

    #[test]
    fn test_parse_field_count() {
        let err = parse_triple::<i64>("1 2 3 4", 9).unwrap_err();
        assert_eq!(err.to_string(), "Line 9: expected 3 fields, found 4");
    }

    #[test]
    fn test_parse_invalid_field() {
        let err = parse_triple::<i64>("1 -2 3", 4).unwrap_err();
        assert_eq!(err.to_string(), "Line 4: invalid end `-2`");

        let err = parse_triple::<i64>("1 2 x", 5).unwrap_err();
        assert_eq!(err.to_string(), "Line 5: invalid value `x`");
    }

    #[test]
    fn test_read_triples_line_numbers() {
        let input = "8 10 5\n\n5 7 oops\n";
        let results: Vec<_> = read_triples::<i64, _>(input.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &(8, 10, 5));
        assert!(matches!(
            results[1],
            Err(AccumulatorError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_load_out_of_order() {
        let mut acc = RangeAccumulator::<i64>::new();
        let applied = load("8 10 5\n5 7 6\n1 4 7\n".as_bytes(), &mut acc).unwrap();
        assert_eq!(applied, 3);
        assert_eq!(acc.to_string(), "(1,4,7)\n(5,7,6)\n(8,10,5)");
    }

    #[test]
    fn test_load_stops_on_error() {
        let mut acc = RangeAccumulator::<i64>::new();
        let result = load("1 4 7\nbad\n5 7 6\n".as_bytes(), &mut acc);
        assert!(matches!(result, Err(AccumulatorError::Parse { line: 2, .. })));
        assert_eq!(acc.len(), 1);
    }
}
