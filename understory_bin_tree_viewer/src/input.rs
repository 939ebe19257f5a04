// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading the integer sequence.

use std::fs;

use crate::config::InputSource;
use crate::error::ViewerError;

/// The sample tree shown when no input is given.
///
/// Eight nodes rooted at 50; the last three sentinels close the open right slots.
pub(crate) const SAMPLE_SEQUENCE: &[i64] = &[
    50, 30, 20, 10, 5, -1, -1, 15, -1, -1, 35, 25, -1, -1, -1, -1, -1,
];

/// Split `text` into integers.
///
/// Values may be separated by commas, whitespace, or both. Everything after a
/// `#` on a line is ignored.
pub(crate) fn parse_sequence(text: &str) -> Result<Vec<i64>, ViewerError> {
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(code, _)| code);
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse().map_err(|_| ViewerError::InvalidInteger {
                token: token.to_owned(),
                line: i + 1,
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Produce the sequence named by `source`.
pub(crate) fn load(source: &InputSource) -> Result<Vec<i64>, ViewerError> {
    match source {
        InputSource::Sample => Ok(SAMPLE_SEQUENCE.to_vec()),
        InputSource::Inline(text) => parse_sequence(text),
        InputSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| ViewerError::Io {
                path: path.clone(),
                source,
            })?;
            log::debug!("read {} bytes from {}", text.len(), path.display());
            parse_sequence(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_bin_tree::{Sentinel, deserialize, flatten};

    #[test]
    fn separators() {
        assert_eq!(
            parse_sequence("1, 2 -1,-1\n\t3  -1 ,-1").unwrap(),
            vec![1, 2, -1, -1, 3, -1, -1]
        );
        assert_eq!(parse_sequence("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_sequence(" , ,\n").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn comments() {
        let text = "# root\n1 # left follows\n-1 -1\n";
        assert_eq!(parse_sequence(text).unwrap(), vec![1, -1, -1]);
    }

    #[test]
    fn bad_token_reports_line() {
        match parse_sequence("1 2\n3 x4\n") {
            Err(ViewerError::InvalidInteger { token, line }) => {
                assert_eq!(token, "x4");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn sample_is_complete() {
        let out = deserialize(SAMPLE_SEQUENCE, Sentinel::default()).unwrap();
        assert_eq!(out.consumed, SAMPLE_SEQUENCE.len());
        let flat = flatten(out.tree);
        let values: Vec<i64> = flat.iter().map(|n| n.value).collect();
        assert_eq!(values, [50, 30, 20, 10, 35, 5, 15, 25]);
    }

    #[test]
    fn missing_file() {
        let source = InputSource::File("/nonexistent/understory/tree.txt".into());
        assert!(matches!(load(&source), Err(ViewerError::Io { .. })));
    }

    #[test]
    fn inline_and_sample() {
        assert_eq!(
            load(&InputSource::Inline("4 -1 -1".into())).unwrap(),
            vec![4, -1, -1]
        );
        assert_eq!(load(&InputSource::Sample).unwrap(), SAMPLE_SEQUENCE);
    }
}
