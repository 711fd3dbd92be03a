//! # Text input for vectors and matrices
//!
//! Whitespace-delimited reading into pre-shaped containers; the caller constructs a vector or
//! matrix of the expected shape and fills it from a token stream, typically
//! `str::split_whitespace` over console, file or buffer contents. Writing goes through the
//! `Display` implementations on the types themselves, which produce a compatible token layout.
use std::fmt::Display;
use std::str::FromStr;

use crate::io::error::ReadError;
use crate::matrix::TriangularMatrix;
use crate::vector::OffsetVector;

pub mod error;

impl<T> OffsetVector<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Fill this vector from a whitespace-delimited token stream.
    ///
    /// The first `start_index` tokens stand for the unstored prefix: they are parsed and
    /// discarded. The following `size - start_index` tokens populate the storage in logical
    /// order. Exactly `size` tokens are consumed on success.
    ///
    /// # Arguments
    ///
    /// * `tokens`: Token source, e.g. `str::split_whitespace`.
    ///
    /// # Return value
    ///
    /// Nothing, or a `ReadError` if the stream ends early or a token fails to parse. The vector
    /// contents are unspecified after a failed read.
    pub fn read_tokens<'a>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<(), ReadError> {
        let start_index = self.start_index();
        for position in 0..start_index {
            let _: T = parse_token(tokens, position)?;
        }
        for (offset, element) in self.iter_mut().enumerate() {
            *element = parse_token(tokens, start_index + offset)?;
        }

        Ok(())
    }
}

impl<T> TriangularMatrix<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Fill this matrix from a whitespace-delimited token stream, row by row.
    ///
    /// Each row consumes as many tokens as its own [`OffsetVector::read_tokens`] does, so a
    /// proper triangular matrix of dimension `n` consumes `n * n` tokens.
    ///
    /// # Return value
    ///
    /// Nothing, or a `ReadError::Row` wrapping the failing row's error.
    pub fn read_tokens<'a>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<(), ReadError> {
        for (row, vector) in self.rows_mut().enumerate() {
            vector.read_tokens(tokens)
                .map_err(|source| ReadError::Row { row, source: Box::new(source), })?;
        }

        Ok(())
    }
}

/// Take the next token and parse it, mapping both failure modes to a `ReadError`.
fn parse_token<'a, T>(
    tokens: &mut impl Iterator<Item = &'a str>,
    position: usize,
) -> Result<T, ReadError>
where
    T: FromStr,
    T::Err: Display,
{
    let token = tokens.next().ok_or(ReadError::UnexpectedEnd { position, })?;
    token.parse().map_err(|error: T::Err| ReadError::Token {
        position,
        description: format!("could not parse {:?}: {}", token, error),
    })
}

#[cfg(test)]
mod test {
    use crate::io::error::ReadError;
    use crate::matrix::TriangularMatrix;
    use crate::vector::OffsetVector;

    #[test]
    fn read_skips_the_placeholder_prefix() {
        let mut v = OffsetVector::<i32>::new(4, 2).unwrap();
        let mut tokens = "0 0 7 8".split_whitespace();

        v.read_tokens(&mut tokens).unwrap();
        assert_eq!(v, OffsetVector::from_parts(2, vec![7, 8]).unwrap());
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn read_reports_a_short_stream() {
        let mut v = OffsetVector::<i32>::new(3, 0).unwrap();
        let result = v.read_tokens(&mut "1 2".split_whitespace());

        assert!(matches!(result, Err(ReadError::UnexpectedEnd { position: 2 })));
    }

    #[test]
    fn read_reports_a_malformed_token() {
        let mut v = OffsetVector::<i32>::new(3, 0).unwrap();
        let result = v.read_tokens(&mut "1 x 3".split_whitespace());

        assert!(matches!(result, Err(ReadError::Token { position: 1, .. })));
    }

    #[test]
    fn read_parses_the_discarded_prefix() {
        // Placeholder tokens still have to be valid elements, as in the output format.
        let mut v = OffsetVector::<i32>::new(3, 1).unwrap();
        let result = v.read_tokens(&mut "x 2 3".split_whitespace());

        assert!(matches!(result, Err(ReadError::Token { position: 0, .. })));
    }

    #[test]
    fn matrix_read_wraps_the_failing_row() {
        let mut m = TriangularMatrix::<i32>::new(2).unwrap();
        let result = m.read_tokens(&mut "1 2 0".split_whitespace());

        assert!(matches!(
            result,
            Err(ReadError::Row { row: 1, ref source })
                if matches!(**source, ReadError::UnexpectedEnd { position: 1 })
        ));
    }

    #[test]
    fn matrix_read_consumes_rows_in_order() {
        let mut m = TriangularMatrix::<i32>::new(2).unwrap();
        m.read_tokens(&mut "1 2 0 3".split_whitespace()).unwrap();

        assert_eq!(m[0][0], 1);
        assert_eq!(m[0][1], 2);
        assert_eq!(m[1][1], 3);
    }
}
