//! Dense matrices over a field.
//!
//! Blocks of morphisms in a skeletal semisimple category are small, so a
//! row-major dense layout with exact Gauss-Jordan elimination is all that is
//! needed.

use std::ops::{Add, Index, IndexMut, Sub};

use drinfeld_rings::traits::{Field, Ring};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Creates a matrix from its rows.
    ///
    /// `num_cols` is needed to shape matrices with no rows.
    ///
    /// # Panics
    ///
    /// Panics if a row does not have `num_cols` entries.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>, num_cols: usize) -> Self {
        let num_rows = rows.len();
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            assert_eq!(row.len(), num_cols, "ragged row");
            data.extend(row);
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// The matrix with a single non-zero entry `value` at (row, col).
    #[must_use]
    pub fn unit(num_rows: usize, num_cols: usize, row: usize, col: usize, value: R) -> Self {
        let mut m = Self::zeros(num_rows, num_cols);
        m[(row, col)] = value;
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[R] {
        &self.data
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Matrix-matrix product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows, "inner dimensions differ");

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for k in 0..self.num_cols {
                let a = &self[(i, k)];
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.num_cols {
                    let b = &other[(k, j)];
                    if !b.is_zero() {
                        result[(i, j)] = result[(i, j)].clone() + a.clone() * b.clone();
                    }
                }
            }
        }
        result
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self.data.iter().map(|v| v.clone() * scalar.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Kronecker product: entry ((i, k), (j, l)) is `self[i, j] * other[k, l]`.
    #[must_use]
    pub fn kronecker(&self, other: &Self) -> Self {
        let rows = self.num_rows * other.num_rows;
        let cols = self.num_cols * other.num_cols;
        let mut result = Self::zeros(rows, cols);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                let a = &self[(i, j)];
                if a.is_zero() {
                    continue;
                }
                for k in 0..other.num_rows {
                    for l in 0..other.num_cols {
                        result[(i * other.num_rows + k, j * other.num_cols + l)] =
                            a.clone() * other[(k, l)].clone();
                    }
                }
            }
        }
        result
    }

    /// Copies `block` into this matrix with its top-left corner at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit.
    pub fn set_block(&mut self, row: usize, col: usize, block: &Self) {
        assert!(row + block.num_rows <= self.num_rows, "block exceeds rows");
        assert!(col + block.num_cols <= self.num_cols, "block exceeds columns");
        for i in 0..block.num_rows {
            for j in 0..block.num_cols {
                self[(row + i, col + j)] = block[(i, j)].clone();
            }
        }
    }

    /// Trace of a square matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn trace(&self) -> R {
        assert!(self.is_square(), "trace of a non-square matrix");
        (0..self.num_rows).fold(R::zero(), |acc, i| acc + self[(i, i)].clone())
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.num_cols {
            self.data.swap(i * self.num_cols + k, j * self.num_cols + k);
        }
    }

    /// row[target] -= factor * row[source]
    fn eliminate(&mut self, target: usize, source: usize, factor: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone();
            if !val.is_zero() {
                self[(target, k)] = self[(target, k)].clone() - factor.clone() * val;
            }
        }
    }

    fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Reduced row echelon form via Gauss-Jordan elimination.
    ///
    /// Returns the reduced matrix together with the pivot column of each
    /// non-zero row; the rank is the number of pivots.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }
            let Some(found) = (pivot_row..m.num_rows).find(|&r| !m[(r, col)].is_zero()) else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            if let Some(inv) = m[(pivot_row, col)].inv() {
                m.scale_row(pivot_row, &inv);
            }

            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, col)].is_zero() {
                    let factor = m[(row, col)].clone();
                    m.eliminate(row, pivot_row, &factor);
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        (m, pivots)
    }

    /// Rank of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }

    /// Inverse of a square matrix, or `None` if it is singular.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        assert!(self.is_square(), "inverse of a non-square matrix");
        let n = self.num_rows;

        let mut aug = Self::zeros(n, 2 * n);
        aug.set_block(0, 0, self);
        aug.set_block(0, n, &Self::identity(n));

        let (reduced, pivots) = aug.rref();
        if pivots.len() < n || pivots.iter().any(|&p| p >= n) {
            return None;
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = reduced[(i, n + j)].clone();
            }
        }
        Some(inv)
    }

    /// Basis of the kernel {x : self * x = 0}.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vec<R>> {
        let (reduced, pivots) = self.rref();
        let mut basis = Vec::new();

        for free in (0..self.num_cols).filter(|c| !pivots.contains(c)) {
            let mut v = vec![R::zero(); self.num_cols];
            v[free] = R::one();
            for (row, &pivot) in pivots.iter().enumerate() {
                v[pivot] = -reduced[(row, free)].clone();
            }
            basis.push(v);
        }

        basis
    }
}

/// Row-reduced basis of the span of `vectors`, each of length `len`.
///
/// The result is the non-zero rows of the RREF, so two spanning sets of the
/// same subspace yield identical bases.
#[must_use]
pub fn row_reduced_basis<R: Field>(vectors: Vec<Vec<R>>, len: usize) -> Vec<Vec<R>> {
    let (reduced, pivots) = DenseMatrix::from_rows(vectors, len).rref();
    (0..pivots.len()).map(|r| reduced.row(r).to_vec()).collect()
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drinfeld_rings::Q;
    use proptest::prelude::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn mat(rows: &[&[i64]]) -> DenseMatrix<Q> {
        let cols = rows.first().map_or(0, |r| r.len());
        DenseMatrix::from_rows(
            rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect(),
            cols,
        )
    }

    #[test]
    fn test_mm() {
        let a = mat(&[&[1, 2], &[3, 4]]);
        let b = mat(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.mm(&b), mat(&[&[19, 22], &[43, 50]]));
    }

    #[test]
    fn test_empty_shapes() {
        let a: DenseMatrix<Q> = DenseMatrix::zeros(0, 3);
        let b: DenseMatrix<Q> = DenseMatrix::zeros(3, 2);
        let c = a.mm(&b);
        assert_eq!((c.num_rows(), c.num_cols()), (0, 2));

        let d: DenseMatrix<Q> = DenseMatrix::zeros(2, 0);
        let e: DenseMatrix<Q> = DenseMatrix::zeros(0, 2);
        assert!(d.mm(&e).is_zero());
        assert_eq!(DenseMatrix::<Q>::identity(0).inverse(), Some(DenseMatrix::zeros(0, 0)));
    }

    #[test]
    fn test_kronecker() {
        let a = mat(&[&[1, 2]]);
        let b = mat(&[&[0, 1], &[1, 0]]);
        assert_eq!(a.kronecker(&b), mat(&[&[0, 1, 0, 2], &[1, 0, 2, 0]]));
    }

    #[test]
    fn test_inverse() {
        let m = mat(&[&[4, 7], &[2, 6]]);
        let inv = m.inverse().unwrap();
        assert_eq!(m.mm(&inv), DenseMatrix::identity(2));
        assert!(mat(&[&[1, 2], &[2, 4]]).inverse().is_none());
    }

    #[test]
    fn test_rank_and_null_space() {
        let m = mat(&[&[1, 2, 3], &[2, 4, 6]]);
        assert_eq!(m.rank(), 1);
        let null = m.null_space();
        assert_eq!(null.len(), 2);
        for v in &null {
            let col = DenseMatrix::from_rows(v.iter().map(|x| vec![x.clone()]).collect(), 1);
            assert!(m.mm(&col).is_zero());
        }
    }

    #[test]
    fn test_row_reduced_basis_is_canonical() {
        let a = row_reduced_basis(vec![vec![q(1), q(1)], vec![q(2), q(2)]], 2);
        let b = row_reduced_basis(vec![vec![q(3), q(3)]], 2);
        assert_eq!(a, b);
        assert_eq!(a, vec![vec![q(1), q(1)]]);
    }

    proptest! {
        #[test]
        fn invertible_triangular_roundtrip(a in 1i64..9, b in -9i64..9, c in 1i64..9) {
            let m = mat(&[&[a, b], &[0, c]]);
            let inv = m.inverse().unwrap();
            prop_assert_eq!(inv.mm(&m), DenseMatrix::identity(2));
        }
    }
}
