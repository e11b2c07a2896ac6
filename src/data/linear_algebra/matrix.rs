//! # Augmented matrices
//!
//! A system of `m` linear equations in `n` variables is stored as an `m x (n + 1)` matrix, the
//! last column holding the right-hand side.
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;
use num::Zero;

use crate::data::linear_algebra::MatrixError;
use crate::data::number_types::format::NumberFormat;
use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::traits::FractionInteger;

/// Shape of an augmented matrix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dimensions {
    /// Number of equations.
    pub rows: usize,
    /// Number of variables plus one for the right-hand side.
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, variables: usize) -> Self {
        Self { rows, columns: variables + 1 }
    }

    pub fn variables(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense augmented matrix of fractions, stored row major.
///
/// The dimensions are fixed at construction, only the values change. Indexing is by
/// `(row, column)`; indices out of range panic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Matrix<I> {
    dimensions: Dimensions,
    values: Vec<Fraction<I>>,
}

impl<I: FractionInteger> Matrix<I> {
    /// All zero system of `rows` equations in `variables` variables.
    pub fn new(rows: usize, variables: usize) -> Self {
        let dimensions = Dimensions::new(rows, variables);

        Self {
            dimensions,
            values: vec![Fraction::zero(); dimensions.len()],
        }
    }

    /// As many equations as variables.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Take ownership of a row major buffer.
    pub fn from_raw(dimensions: Dimensions, values: Vec<Fraction<I>>) -> Result<Self, MatrixError> {
        if values.len() != dimensions.len() {
            return Err(MatrixError::DimensionMismatch {
                rows: dimensions.rows,
                columns: dimensions.columns,
                expected: dimensions.len(),
                actual: values.len(),
            });
        }

        Ok(Self { dimensions, values })
    }

    /// Collect rows of anything convertible into a fraction, such as plain integers.
    ///
    /// All rows need to have the same length; that length is the number of columns, including the
    /// right-hand side.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, MatrixError>
    where
        R: IntoIterator<Item = T>,
        T: Into<Fraction<I>>,
    {
        let mut values: Vec<Fraction<I>> = Vec::new();
        let mut nr_rows = 0;
        let mut nr_columns = None;

        for (row_index, row) in rows.into_iter().enumerate() {
            let before = values.len();
            values.extend(row.into_iter().map(Into::into));
            let length = values.len() - before;

            match nr_columns {
                None => nr_columns = Some(length),
                Some(expected) if expected != length => {
                    return Err(MatrixError::RaggedRow { row: row_index, expected, actual: length });
                }
                Some(_) => {}
            }
            nr_rows += 1;
        }

        let dimensions = Dimensions { rows: nr_rows, columns: nr_columns.unwrap_or(0) };
        Self::from_raw(dimensions, values)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn nr_rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn nr_equations(&self) -> usize {
        self.nr_rows()
    }

    pub fn nr_columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn nr_variables(&self) -> usize {
        self.dimensions.variables()
    }

    pub fn get(&self, row: usize, column: usize) -> Fraction<I> {
        self[(row, column)]
    }

    pub fn set(&mut self, row: usize, column: usize, value: Fraction<I>) {
        self[(row, column)] = value;
    }

    pub fn row(&self, row: usize) -> &[Fraction<I>] {
        let start = row * self.nr_columns();
        &self.values[start..start + self.nr_columns()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Fraction<I>]> + '_ {
        (0..self.nr_rows()).map(move |row| self.row(row))
    }

    /// Values in row major order.
    pub fn values(&self) -> &[Fraction<I>] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Fraction<I>> {
        self.values
    }

    /// Exchange two rows.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        debug_assert!(first < self.nr_rows() && second < self.nr_rows());

        let columns = self.nr_columns();
        for column in 0..columns {
            self.values.swap(first * columns + column, second * columns + column);
        }
    }

    /// Multiply every value in a row by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: Fraction<I>) {
        let start = row * self.nr_columns();
        let end = start + self.nr_columns();
        for value in &mut self.values[start..end] {
            *value *= factor;
        }
    }

    /// Add `factor` times row `source` to row `destination`.
    pub fn add_scaled_row(&mut self, destination: usize, factor: Fraction<I>, source: usize) {
        for column in 0..self.nr_columns() {
            let value = self[(source, column)];
            self[(destination, column)] += factor * value;
        }
    }

    /// Table of all values with the digit grouping of `format`.
    ///
    /// Values are right aligned to the widest one, the right-hand side is separated by a bar:
    ///
    /// ```text
    /// ---          ---
    /// | 1  0  0  | 1 |
    /// | 0  1  0  | 2 |
    /// | 0  0  1  | 3 |
    /// ---          ---
    /// ```
    pub fn render(&self, format: NumberFormat) -> String {
        let cells = self
            .rows()
            .map(|row| row.iter().map(|value| value.display(format).to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = cells.iter().flatten().map(|cell| cell.chars().count()).max().unwrap_or(0);
        let variables = self.nr_variables();

        let ruler = format!("---{}---", " ".repeat(((width + 2) * self.nr_columns()).saturating_sub(2)));
        let lines = cells.iter().map(|row| {
            let inner = row
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let bar = if column == variables { "| " } else { "" };
                    format!("{}{:>width$}", bar, cell, width = width)
                })
                .join("  ");
            format!("| {} |", inner)
        });

        std::iter::once(ruler.clone())
            .chain(lines)
            .chain(std::iter::once(ruler))
            .join("\n")
    }
}

impl<I> Index<(usize, usize)> for Matrix<I> {
    type Output = Fraction<I>;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(column < self.dimensions.columns);

        &self.values[row * self.dimensions.columns + column]
    }
}

impl<I> IndexMut<(usize, usize)> for Matrix<I> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(column < self.dimensions.columns);

        &mut self.values[row * self.dimensions.columns + column]
    }
}

impl<I: FractionInteger> fmt::Display for Matrix<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(NumberFormat::INVARIANT))
    }
}

impl<I: FractionInteger> FromStr for Matrix<I> {
    type Err = MatrixError;

    /// Rows separated by `;` or newlines, values by whitespace, e.g. `"1 2 3; 4 5/2 -6"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows = text
            .split(|c: char| c == ';' || c == '\n')
            .filter(|row| !row.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(|(column, cell)| {
                        cell.parse::<Fraction<I>>()
                            .map_err(|source| MatrixError::Parse { row, column, source })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }

        Self::from_rows(rows)
    }
}
