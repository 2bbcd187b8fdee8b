use tracing::debug;

use crate::delimiter::DelimiterSet;
use crate::error::{SumError, SumResult};
use crate::header::{extract_header, Header};

/// Values above this bound are parsed and sign-checked but left out of the
/// sum; the bound itself is included.
pub const UPPER_BOUND: i64 = 1000;

/// Sums a delimiter-separated list of integers.
///
/// The input may open with a `//` delimiter-declaration header (see
/// [`crate::header`]); without one, the separators are comma and newline.
/// Fails with [`SumError::NegativesNotAllowed`] listing every negative
/// value, in order of appearance, when any parsed number is negative.
///
/// Pure and stateless: the delimiter set is rebuilt per call and two calls
/// with the same input always agree.
#[tracing::instrument(level = "debug", skip(input))]
pub fn sum(input: &str) -> SumResult<i64> {
    if input.is_empty() {
        return Ok(0);
    }

    let (delimiters, numbers) = match extract_header(input)? {
        Some(Header { tokens, numbers }) => (DelimiterSet::with_declared(tokens)?, numbers),
        None => (DelimiterSet::new()?, input),
    };
    debug!(tokens = ?delimiters.tokens(), "effective delimiter set");

    let values = parse_values(&delimiters, numbers)?;

    let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
    if !negatives.is_empty() {
        let error = SumError::NegativesNotAllowed(negatives);
        tracing::error!("{}", error);
        return Err(error);
    }

    Ok(values.into_iter().filter(|v| *v <= UPPER_BOUND).sum())
}

/// Splits the number sequence and parses each fragment as a base-10 signed
/// integer. Empty fragments from adjacent delimiters are skipped; any other
/// unparsable fragment is an error.
fn parse_values(delimiters: &DelimiterSet, numbers: &str) -> SumResult<Vec<i64>> {
    delimiters
        .split(numbers)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            fragment.parse::<i64>().map_err(|_| SumError::InvalidNumber {
                token: fragment.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(sum("").unwrap(), 0);
    }

    #[test]
    fn test_default_delimiters() {
        assert_eq!(sum("1\n2,3").unwrap(), 6);
    }

    #[test]
    fn test_declared_delimiter_keeps_defaults() {
        assert_eq!(sum("//;\n1;2,3\n4").unwrap(), 10);
    }

    #[test]
    fn test_negatives_collected_in_order() {
        assert_eq!(
            sum("1,-2,-3").unwrap_err(),
            SumError::NegativesNotAllowed(vec![-2, -3])
        );
    }

    #[test]
    fn test_upper_bound_inclusive() {
        assert_eq!(sum("1000,1001,2").unwrap(), 1002);
    }

    #[test]
    fn test_invalid_fragment() {
        assert_eq!(
            sum("1,abc").unwrap_err(),
            SumError::InvalidNumber {
                token: "abc".to_string()
            }
        );
    }
}
