//! # Text round trips
//!
//! Integration tests completely external from the crate: write a container out through
//! `Display`, read the text back into a fresh container of the same shape, and compare.
use offset_linalg::{OffsetVector, TriangularMatrix};

#[test]
fn vector_round_trip() {
    let mut original = OffsetVector::<i32>::new(6, 2).unwrap();
    for i in 2..6 {
        original[i] = (i * i) as i32 - 7;
    }

    let text = original.to_string();
    let mut read_back = OffsetVector::<i32>::new(6, 2).unwrap();
    read_back.read_tokens(&mut text.split_whitespace()).unwrap();

    assert_eq!(read_back, original);
}

#[test]
fn vector_output_is_fixed_width() {
    let v = OffsetVector::from_parts(1, vec![-3, 1234]).unwrap();

    assert_eq!(v.to_string(), "0         -3        1234      ");
}

#[test]
fn matrix_round_trip() {
    let mut original = TriangularMatrix::<i64>::new(4).unwrap();
    for i in 0..4 {
        for j in i..4 {
            original[i][j] = (10 * i + j) as i64;
        }
    }

    let text = original.to_string();
    let mut read_back = TriangularMatrix::<i64>::new(4).unwrap();
    read_back.read_tokens(&mut text.split_whitespace()).unwrap();

    assert_eq!(read_back, original);
}

#[test]
fn matrix_output_has_one_line_per_row() {
    let m = TriangularMatrix::<i32>::new(3).unwrap();
    let text = m.to_string();

    assert_eq!(text.lines().count(), 3);
    for line in text.lines() {
        assert_eq!(line.split_whitespace().count(), 3);
    }
}

#[test]
fn containers_share_one_token_stream() {
    // A vector and a matrix written back to back read back in the same order.
    let mut vector = OffsetVector::<i32>::new(3, 1).unwrap();
    vector[1] = 5;
    vector[2] = 6;
    let mut matrix = TriangularMatrix::<i32>::new(2).unwrap();
    matrix[0][0] = 7;
    matrix[1][1] = 8;

    let text = format!("{}\n{}", vector, matrix);
    let mut tokens = text.split_whitespace();

    let mut vector_back = OffsetVector::<i32>::new(3, 1).unwrap();
    vector_back.read_tokens(&mut tokens).unwrap();
    let mut matrix_back = TriangularMatrix::<i32>::new(2).unwrap();
    matrix_back.read_tokens(&mut tokens).unwrap();

    assert_eq!(vector_back, vector);
    assert_eq!(matrix_back, matrix);
    assert_eq!(tokens.next(), None);
}
