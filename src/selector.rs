use std::fmt;

/// Failure kinds for a selection string. All of them abort the whole
/// selection; no action runs on a string that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    InvalidCharacter(char),
    MultipleHyphens,
    NumberFormat(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidCharacter(c) => write!(
                f,
                "unexpected character '{}', selections may only contain indexes \
                 (digits), range delimiters (commas) and range compositors (hyphens)",
                c
            ),
            SelectionError::MultipleHyphens => write!(
                f,
                "only one hyphen is permitted per range \
                 (the input is a list of comma separated ranges)"
            ),
            SelectionError::NumberFormat(s) => {
                write!(f, "'{}' is not a representable index", s)
            }
        }
    }
}

/// Per-token scanner state. A token is one comma-separated unit of the
/// selection string: either a bare index or a `start-end` range.
#[derive(Clone, Copy)]
enum TokenState {
    /// Nothing seen yet in the current token.
    Empty,
    /// A digit run before any hyphen: the range start (or a bare index).
    Start(usize),
    /// A hyphen was seen; the token is now range-open.
    Open(Option<usize>),
    /// A digit run after the hyphen: an explicit range end.
    End(Option<usize>, usize),
}

/// Parse a selection string like `"1-3,5"` into the ordered sequence of
/// zero-based indices it names.
///
/// `item_count` only supplies the default end bound for open ranges
/// (`"3-"`, `"-"`); emitted indices are NOT checked against it, resolving
/// them is the caller's job. Duplicates and ordering are preserved exactly
/// as the ranges expand left to right.
///
/// An input that is empty after whitespace removal selects everything,
/// same as a bare `"-"`.
pub fn parse(raw: &str, item_count: usize) -> Result<Vec<usize>, SelectionError> {
    let input: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(bad) = input
        .chars()
        .find(|c| !c.is_ascii_digit() && *c != ',' && *c != '-')
    {
        return Err(SelectionError::InvalidCharacter(bad));
    }

    let mut indices = Vec::new();

    if input.is_empty() {
        flush(TokenState::Open(None), item_count, &mut indices);
        return Ok(indices);
    }

    let bytes = input.as_bytes();
    let mut state = TokenState::Empty;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'0'..=b'9' => {
                let run_start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                let run = &input[run_start..pos];
                let value: usize = run
                    .parse()
                    .map_err(|_| SelectionError::NumberFormat(run.to_string()))?;
                // Digit runs are maximal, so a run never follows another run
                // directly; only the hyphen decides which bound it sets.
                state = match state {
                    TokenState::Empty | TokenState::Start(_) => TokenState::Start(value),
                    TokenState::Open(start) | TokenState::End(start, _) => {
                        TokenState::End(start, value)
                    }
                };
            }
            b'-' => {
                state = match state {
                    TokenState::Empty => TokenState::Open(None),
                    TokenState::Start(start) => TokenState::Open(Some(start)),
                    TokenState::Open(_) | TokenState::End(..) => {
                        return Err(SelectionError::MultipleHyphens);
                    }
                };
                pos += 1;
            }
            // only ',' remains after the character-class pass
            _ => {
                flush(state, item_count, &mut indices);
                state = TokenState::Empty;
                pos += 1;
            }
        }
    }

    if !input.ends_with(',') {
        flush(state, item_count, &mut indices);
    }

    Ok(indices)
}

fn flush(state: TokenState, item_count: usize, out: &mut Vec<usize>) {
    let (start, end) = match state {
        // an empty token is a bare index with the default start
        TokenState::Empty => {
            out.push(0);
            return;
        }
        TokenState::Start(n) => {
            out.push(n);
            return;
        }
        TokenState::Open(start) => {
            let Some(end) = item_count.checked_sub(1) else {
                // no items, nothing for the default bound to cover
                return;
            };
            (start.unwrap_or(0), end)
        }
        TokenState::End(start, end) => (start.unwrap_or(0), end),
    };

    // start > end expands to nothing, the loop never wraps
    out.extend(start..=end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_index() {
        assert_eq!(parse("0", 1).unwrap(), vec![0]);
        assert_eq!(parse("7", 3).unwrap(), vec![7]);
    }

    #[test]
    fn simple_range() {
        assert_eq!(parse("1-3", 10).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn comma_separated_indices() {
        assert_eq!(parse("1,3,5", 10).unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn mixed_range_and_index() {
        assert_eq!(parse("1-3,5", 10).unwrap(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn bare_hyphen_selects_everything() {
        assert_eq!(parse("-", 4).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn open_ended_range_runs_to_last_item() {
        assert_eq!(parse("2-", 5).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn open_started_range_starts_at_zero() {
        assert_eq!(parse("-2", 5).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_selects_everything() {
        assert_eq!(parse("", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse("  \t ", 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_with_no_items_selects_nothing() {
        assert_eq!(parse("", 0).unwrap(), Vec::<usize>::new());
        assert_eq!(parse("-", 0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn whitespace_is_stripped_anywhere() {
        assert_eq!(parse(" 1 - 3 , 5 ", 10).unwrap(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn inverted_range_expands_to_nothing() {
        assert_eq!(parse("5-2", 10).unwrap(), Vec::<usize>::new());
        assert_eq!(parse("5-2,1", 10).unwrap(), vec![1]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(parse("2,1-3", 10).unwrap(), vec![2, 1, 2, 3]);
        assert_eq!(parse("3,3,3", 10).unwrap(), vec![3, 3, 3]);
    }

    #[test]
    fn trailing_comma_does_not_flush_twice() {
        assert_eq!(parse("1,", 10).unwrap(), vec![1]);
        assert_eq!(parse("1-3,", 10).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_token_is_the_default_bare_index() {
        assert_eq!(parse(",", 10).unwrap(), vec![0]);
        assert_eq!(parse("1,,2", 10).unwrap(), vec![1, 0, 2]);
    }

    #[test]
    fn indices_beyond_item_count_pass_through() {
        // bounds are the caller's responsibility
        assert_eq!(parse("9", 2).unwrap(), vec![9]);
        assert_eq!(parse("8-9", 2).unwrap(), vec![8, 9]);
    }

    #[test]
    fn double_hyphen_is_rejected() {
        assert_eq!(parse("1--2", 10), Err(SelectionError::MultipleHyphens));
        assert_eq!(parse("--", 10), Err(SelectionError::MultipleHyphens));
        assert_eq!(parse("1-2-3", 10), Err(SelectionError::MultipleHyphens));
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert_eq!(parse("1;2", 10), Err(SelectionError::InvalidCharacter(';')));
        assert_eq!(parse("a", 10), Err(SelectionError::InvalidCharacter('a')));
        assert_eq!(
            parse("1.5", 10),
            Err(SelectionError::InvalidCharacter('.'))
        );
    }

    #[test]
    fn hyphen_error_wins_over_later_flushes() {
        // the scan stops at the second hyphen, nothing is emitted
        assert_eq!(parse("1,2--3", 10), Err(SelectionError::MultipleHyphens));
    }

    #[test]
    fn oversized_number_is_a_format_error() {
        let huge = "9".repeat(40);
        assert_eq!(
            parse(&huge, 10),
            Err(SelectionError::NumberFormat(huge.clone()))
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse("0,2-4,2", 6).unwrap();
        let second = parse("0,2-4,2", 6).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 2, 3, 4, 2]);
    }
}
