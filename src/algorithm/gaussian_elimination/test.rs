use std::cell::RefCell;

use crate::algorithm::gaussian_elimination::{ColumnObserver, GaussianElimination};
use crate::data::linear_algebra::matrix::Matrix;
use crate::frac;

fn matrix(text: &str) -> Matrix<i64> {
    text.parse().unwrap()
}

/// Eliminate, returning the notified columns.
fn eliminate(m: &mut Matrix<i64>) -> Vec<usize> {
    let mut columns = Vec::new();
    m.eliminate_observed(|column: usize, _: &Matrix<i64>| columns.push(column));
    columns
}

#[test]
fn two_by_two() {
    let mut m = matrix("3 2 -3; -2 8 4");
    assert_eq!(eliminate(&mut m), vec![0, 1]);
    assert_eq!(m, matrix("1 0 -8/7; 0 1 3/14"));
}

#[test]
fn unique_solution() {
    let mut m = matrix("1 1 2 9; 2 4 -3 1; 3 6 -5 0");
    assert_eq!(eliminate(&mut m), vec![0, 1, 2]);
    assert_eq!(m, matrix("1 0 0 1; 0 1 0 2; 0 0 1 3"));
}

#[test]
fn upper_triangular() {
    let mut m = matrix("1 2 3 4; 0 1 5 6; 0 0 1 7");
    assert_eq!(eliminate(&mut m), vec![0, 1, 2]);
    assert_eq!(m, matrix("1 0 0 41; 0 1 0 -29; 0 0 1 7"));
}

#[test]
fn already_reduced() {
    let original = matrix("1 0 0 4 -1; 0 1 0 2 6; 0 0 1 3 2");
    let mut m = original.clone();
    assert_eq!(eliminate(&mut m), vec![0, 1, 2]);
    assert_eq!(m, original);
}

#[test]
fn swap_and_skip() {
    let mut m = matrix("0 0 -2 0 7 12; 2 4 -10 6 12 28; 2 4 -5 6 -5 -1");
    assert_eq!(eliminate(&mut m), vec![0, 2]);
    assert_eq!(m, matrix("1 2 0 3 -11 -15; 0 0 0 0 1/5 2/5; 0 0 1 0 -17/5 -29/5"));
}

#[test]
fn zero_column_is_skipped() {
    let original = matrix("0 1 8 0 0 4; 0 0 0 1 0 3; 0 0 0 0 1 1");
    let mut m = original.clone();
    assert!(eliminate(&mut m).is_empty());
    assert_eq!(m, original);
}

#[test]
fn no_pivot_at_or_below_diagonal() {
    let original = matrix("1 0 0 0; 0 1 2 0; 0 0 0 1");
    let mut m = original.clone();
    assert_eq!(eliminate(&mut m), vec![0, 1]);
    assert_eq!(m, original);

    let original = matrix("1 2 3 4 1; 0 0 1 -1 1; 0 0 0 1 4");
    let mut m = original.clone();
    assert_eq!(eliminate(&mut m), vec![0]);
    assert_eq!(m, original);
}

#[test]
fn zero_row_is_untouched() {
    let original = matrix("1 6 0 0 4 -2; 0 0 1 0 3 1; 0 0 0 1 5 2; 0 0 0 0 0 0");
    let mut m = original.clone();
    let columns = eliminate(&mut m);

    assert_eq!(columns, vec![0]);
    assert!(!columns.contains(&1));
    assert_eq!(m.row(3), original.row(3));
    assert_eq!(m, original);
}

#[test]
fn observer_sees_swapped_rows() {
    let mut m = matrix("0 1 2; 1 1 3");
    let mut snapshots = Vec::new();
    m.eliminate_observed(|column: usize, state: &Matrix<i64>| snapshots.push((column, state.clone())));

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0], (0, matrix("1 1 3; 0 1 2")));
    assert_eq!(snapshots[1], (1, matrix("1 0 1; 0 1 2")));
    assert_eq!(m, snapshots[1].1);
}

#[test]
fn more_equations_than_variables() {
    let mut m = matrix("1 1 3; 1 -1 1; 2 0 4");
    assert_eq!(eliminate(&mut m), vec![0, 1]);
    assert_eq!(m, matrix("1 0 2; 0 1 1; 0 0 0"));
}

#[test]
fn inconsistent_system() {
    let mut m = matrix("1 1 1; 1 1 2");
    assert_eq!(eliminate(&mut m), vec![0]);
    assert_eq!(m, matrix("1 1 1; 0 0 1"));
}

#[test]
fn degenerate_dimensions() {
    let mut m = Matrix::<i64>::new(0, 3);
    assert!(eliminate(&mut m).is_empty());

    let mut m = Matrix::<i64>::from_rows(vec![vec![5], vec![3]]).unwrap();
    assert!(eliminate(&mut m).is_empty());
    assert_eq!(m[(0, 0)], frac!(5));

    let mut m = Matrix::<i64>::square(3);
    assert!(eliminate(&mut m).is_empty());
    assert_eq!(m, Matrix::square(3));
}

#[test]
fn idempotent() {
    for text in &[
        "3 2 -3; -2 8 4",
        "1 1 2 9; 2 4 -3 1; 3 6 -5 0",
        "0 0 -2 0 7 12; 2 4 -10 6 12 28; 2 4 -5 6 -5 -1",
        "3 5 1 2 1; 2 -4 3 7 2; 4 14 -1 -3 0; 13 7 9 20 7",
    ] {
        let mut once = matrix(text);
        once.eliminate();
        let mut twice = once.clone();
        twice.eliminate();
        assert_eq!(once, twice, "{}", text);
    }
}

#[test]
fn pivot_columns_are_unit_vectors() {
    let mut m = matrix("3 5 1 2 1; 2 -4 3 7 2; 4 14 -1 -3 0; 13 7 9 20 7");
    for column in eliminate(&mut m) {
        for row in 0..m.nr_rows() {
            let expected = if row == column { frac!(1) } else { frac!(0) };
            assert_eq!(m[(row, column)], expected);
        }
    }
}

#[test]
fn observers_in_registration_order() {
    let log = RefCell::new(Vec::new());
    let mut m = matrix("2 0 4; 0 3 3");

    GaussianElimination::new()
        .on_column_eliminated(|column: usize, _: &Matrix<i64>| log.borrow_mut().push(("first", column)))
        .on_column_eliminated(|column: usize, _: &Matrix<i64>| log.borrow_mut().push(("second", column)))
        .run(&mut m);

    assert_eq!(
        log.into_inner(),
        vec![("first", 0), ("second", 0), ("first", 1), ("second", 1)],
    );
    assert_eq!(m, matrix("1 0 2; 0 1 1"));
}

struct Counter {
    count: usize,
}

impl ColumnObserver<i64> for Counter {
    fn column_eliminated(&mut self, _column: usize, matrix: &Matrix<i64>) {
        assert!(self.count < matrix.nr_rows().min(matrix.nr_variables()));
        self.count += 1;
    }
}

#[test]
fn observer_implementation() {
    let mut counter = Counter { count: 0 };
    let mut m = matrix("1 1 2 9; 2 4 -3 1; 3 6 -5 0");
    m.eliminate_observed(|column: usize, state: &Matrix<i64>| counter.column_eliminated(column, state));
    assert_eq!(counter.count, 3);
}
