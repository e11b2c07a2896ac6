//! # Gauss-Jordan elimination
//!
//! Brings an augmented matrix into reduced row echelon form using exact row operations. Progress
//! is reported to [`ColumnObserver`]s after every column that received a pivot.
use log::{debug, info, trace};
use num::Zero;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::FractionInteger;

/// Gets notified after a column has been eliminated.
///
/// Notifications happen synchronously, in ascending column order, at most once per column and
/// only for columns that received a pivot. The matrix is passed in its state right after the
/// column's row operations.
pub trait ColumnObserver<I> {
    fn column_eliminated(&mut self, column: usize, matrix: &Matrix<I>);
}

impl<I, F> ColumnObserver<I> for F
where
    F: FnMut(usize, &Matrix<I>),
{
    fn column_eliminated(&mut self, column: usize, matrix: &Matrix<I>) {
        self(column, matrix)
    }
}

/// Runs the elimination and forwards progress to the registered observers.
///
/// ```
/// use rust_gauss::{GaussianElimination, Matrix};
///
/// let mut matrix: Matrix<i32> = "0 1 2; 1 1 3".parse().unwrap();
/// let mut columns = Vec::new();
/// GaussianElimination::new()
///     .on_column_eliminated(|column: usize, _: &Matrix<i32>| columns.push(column))
///     .run(&mut matrix);
///
/// assert_eq!(columns, vec![0, 1]);
/// assert_eq!(matrix, "1 0 1; 0 1 2".parse().unwrap());
/// ```
pub struct GaussianElimination<'a, I> {
    observers: Vec<Box<dyn ColumnObserver<I> + 'a>>,
}

impl<'a, I: FractionInteger> GaussianElimination<'a, I> {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Register an observer, notified after observers registered earlier.
    pub fn on_column_eliminated(mut self, observer: impl ColumnObserver<I> + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Reduce `matrix` in place.
    ///
    /// For each index `rc` below both the number of variables and the number of rows:
    ///
    /// 1. if column `rc` is zero everywhere, it is skipped;
    /// 2. if `(rc, rc)` is zero, row `rc` is swapped with the first row below it that has a
    ///    nonzero value in column `rc`; without such a row, the column is skipped;
    /// 3. row `rc` is divided by the pivot `(rc, rc)`;
    /// 4. multiples of row `rc` are added to all other rows to zero out the rest of column `rc`;
    /// 5. observers are notified.
    ///
    /// Row index and column index move in lockstep: a skipped column also skips its row as a
    /// pivot row. Rank deficient systems might therefore be reduced less far than a textbook
    /// reduced row echelon form.
    pub fn run(&mut self, matrix: &mut Matrix<I>) {
        let nr_rows = matrix.nr_rows();
        let nr_pivots = matrix.nr_variables().min(nr_rows);
        info!(
            "gaussian_elimination::run(), {} equation(s) in {} variable(s)",
            nr_rows,
            matrix.nr_variables(),
        );

        for rc in 0..nr_pivots {
            if (0..nr_rows).all(|row| matrix[(row, rc)].is_zero()) {
                debug!("Column {} is zero, skipping", rc);
                continue;
            }

            if matrix[(rc, rc)].is_zero() {
                match (rc + 1..nr_rows).find(|&row| !matrix[(row, rc)].is_zero()) {
                    Some(row) => {
                        trace!("Swapping rows {} and {}", rc, row);
                        matrix.swap_rows(rc, row);
                    }
                    None => {
                        debug!("Column {} has no pivot at or below row {}, skipping", rc, rc);
                        continue;
                    }
                }
            }

            let inverse = match matrix[(rc, rc)].reciprocal() {
                Some(inverse) => inverse,
                None => continue,
            };
            matrix.scale_row(rc, inverse);

            for row in (0..nr_rows).filter(|&row| row != rc) {
                let value = matrix[(row, rc)];
                if !value.is_zero() {
                    matrix.add_scaled_row(row, -value, rc);
                }
            }

            debug!("Column {} eliminated", rc);
            for observer in &mut self.observers {
                observer.column_eliminated(rc, matrix);
            }
        }
    }
}

impl<'a, I: FractionInteger> Default for GaussianElimination<'a, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: FractionInteger> Matrix<I> {
    /// Reduce this matrix in place, see [`GaussianElimination::run`].
    pub fn eliminate(&mut self) {
        GaussianElimination::new().run(self);
    }

    /// Reduce this matrix in place, notifying `observer` after each eliminated column.
    pub fn eliminate_observed(&mut self, observer: impl ColumnObserver<I>) {
        GaussianElimination::new().on_column_eliminated(observer).run(self);
    }
}

#[cfg(test)]
mod test;
