//! Finite groups given by a multiplication table.

use std::ops::Range;

use crate::error::CategoryError;

/// A finite group on the elements `0..order`, with identity 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FiniteGroup {
    order: usize,
    /// `table[g * order + h]` is g·h.
    table: Vec<usize>,
    inverses: Vec<usize>,
}

impl FiniteGroup {
    /// The cyclic group Z/n, with g·h = (g + h) mod n.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn cyclic(n: usize) -> Self {
        assert!(n > 0, "a group has at least one element");
        let table = (0..n * n).map(|i| (i / n + i % n) % n).collect();
        let inverses = (0..n).map(|g| (n - g) % n).collect();
        Self {
            order: n,
            table,
            inverses,
        }
    }

    /// The trivial group.
    #[must_use]
    pub fn trivial() -> Self {
        Self::cyclic(1)
    }

    /// Builds a group from its multiplication table, `rows[g][h]` = g·h.
    ///
    /// Element 0 must be the identity.
    ///
    /// # Errors
    ///
    /// Returns `NotAGroup` when the table is not square, has an out of range
    /// entry, 0 is not the identity, some element has no inverse, or the
    /// product is not associative.
    pub fn from_table(rows: &[Vec<usize>]) -> Result<Self, CategoryError> {
        let n = rows.len();
        let fail = |reason: String| Err(CategoryError::NotAGroup { reason });

        if n == 0 {
            return fail("empty table".into());
        }
        if let Some(g) = rows.iter().position(|r| r.len() != n) {
            return fail(format!("row {g} has length {}, expected {n}", rows[g].len()));
        }
        if rows.iter().flatten().any(|&x| x >= n) {
            return fail("entry out of range".into());
        }

        let table: Vec<usize> = rows.iter().flatten().copied().collect();
        let mul = |g: usize, h: usize| table[g * n + h];

        if let Some(g) = (0..n).find(|&g| mul(0, g) != g || mul(g, 0) != g) {
            return fail(format!("0 is not the identity for {g}"));
        }

        let mut inverses = Vec::with_capacity(n);
        for g in 0..n {
            match (0..n).find(|&h| mul(g, h) == 0 && mul(h, g) == 0) {
                Some(h) => inverses.push(h),
                None => return fail(format!("{g} has no inverse")),
            }
        }

        for g in 0..n {
            for h in 0..n {
                for k in 0..n {
                    if mul(mul(g, h), k) != mul(g, mul(h, k)) {
                        return fail(format!("({g}·{h})·{k} != {g}·({h}·{k})"));
                    }
                }
            }
        }

        Ok(Self {
            order: n,
            table,
            inverses,
        })
    }

    /// The direct product `self × other`; the pair (a, b) is
    /// `a * other.order() + b`.
    #[must_use]
    pub fn direct_product(&self, other: &Self) -> Self {
        let m = other.order;
        let n = self.order * m;
        let table = (0..n * n)
            .map(|i| {
                let (x, y) = (i / n, i % n);
                self.mul(x / m, y / m) * m + other.mul(x % m, y % m)
            })
            .collect();
        let inverses = (0..n)
            .map(|x| self.inv(x / m) * m + other.inv(x % m))
            .collect();
        Self {
            order: n,
            table,
            inverses,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The product g·h.
    #[must_use]
    pub fn mul(&self, g: usize, h: usize) -> usize {
        self.table[g * self.order + h]
    }

    /// The inverse of g.
    #[must_use]
    pub fn inv(&self, g: usize) -> usize {
        self.inverses[g]
    }

    /// The identity element.
    #[must_use]
    pub fn identity(&self) -> usize {
        0
    }

    /// All elements in index order.
    #[must_use]
    pub fn elements(&self) -> Range<usize> {
        0..self.order
    }

    /// Returns true if g·h = h·g for all g, h.
    #[must_use]
    pub fn is_abelian(&self) -> bool {
        self.elements()
            .all(|g| self.elements().all(|h| self.mul(g, h) == self.mul(h, g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic() {
        let z3 = FiniteGroup::cyclic(3);
        assert_eq!(z3.order(), 3);
        assert_eq!(z3.mul(2, 2), 1);
        assert_eq!(z3.inv(1), 2);
        assert_eq!(z3.inv(0), 0);
        assert!(z3.is_abelian());
    }

    #[test]
    fn test_from_table_matches_cyclic() {
        let rows = vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]];
        assert_eq!(FiniteGroup::from_table(&rows).unwrap(), FiniteGroup::cyclic(3));
    }

    #[test]
    fn test_s3_is_not_abelian() {
        // S3 with 0 = id, 1, 2 = rotations, 3, 4, 5 = reflections
        let rows = vec![
            vec![0, 1, 2, 3, 4, 5],
            vec![1, 2, 0, 4, 5, 3],
            vec![2, 0, 1, 5, 3, 4],
            vec![3, 5, 4, 0, 2, 1],
            vec![4, 3, 5, 1, 0, 2],
            vec![5, 4, 3, 2, 1, 0],
        ];
        let s3 = FiniteGroup::from_table(&rows).unwrap();
        assert!(!s3.is_abelian());
        assert_eq!(s3.inv(1), 2);
        assert_eq!(s3.inv(4), 4);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(FiniteGroup::from_table(&[]).is_err());
        assert!(FiniteGroup::from_table(&[vec![0, 1], vec![1]]).is_err());
        assert!(FiniteGroup::from_table(&[vec![0, 2], vec![1, 0]]).is_err());
        // 1 is not the identity column
        assert!(FiniteGroup::from_table(&[vec![1, 0], vec![0, 1]]).is_err());
        // x·x = x for x = 1: no inverse
        assert!(FiniteGroup::from_table(&[vec![0, 1], vec![1, 1]]).is_err());
    }

    #[test]
    fn test_rejects_non_associative_loop() {
        // a Latin square with identity 0 that is not associative
        let rows = vec![
            vec![0, 1, 2, 3, 4],
            vec![1, 0, 3, 4, 2],
            vec![2, 4, 0, 1, 3],
            vec![3, 2, 4, 0, 1],
            vec![4, 3, 1, 2, 0],
        ];
        assert!(matches!(
            FiniteGroup::from_table(&rows),
            Err(CategoryError::NotAGroup { .. })
        ));
    }

    #[test]
    fn test_direct_product() {
        let klein = FiniteGroup::cyclic(2).direct_product(&FiniteGroup::cyclic(2));
        assert_eq!(klein.order(), 4);
        assert!(klein.elements().all(|g| klein.mul(g, g) == 0));
        assert_eq!(klein.mul(1, 2), 3);
    }
}
