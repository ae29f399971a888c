//! Vec_G^ω: finite-dimensional G-graded vector spaces.
//!
//! Objects are skeletal: an object is the multiplicity of each simple δ_g.
//! A morphism is one dense block per group element, block g mapping the
//! degree g part of the domain to the degree g part of the codomain (rows
//! index the codomain).
//!
//! The degree k part of X⊗Y is ⊕_g X_g ⊗ Y_{g⁻¹k}, laid out in increasing
//! g, and within one summand the X index is the slow one. The associator
//! acts on δ_g⊗δ_h⊗δ_l by the scalar ω(g, h, l).

use drinfeld_linalg::DenseMatrix;
use drinfeld_rings::traits::{Field, Ring};

use crate::error::CategoryError;
use crate::group::FiniteGroup;
use crate::traits::{DirectSum, TensorCategory};

/// A G-graded vector space, by the dimension of each homogeneous part.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GradedObject {
    dims: Vec<usize>,
}

impl GradedObject {
    /// The object with `dims[g]` copies of δ_g.
    #[must_use]
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Multiplicity of δ_g.
    #[must_use]
    pub fn dim_at(&self, g: usize) -> usize {
        self.dims[g]
    }

    /// All multiplicities, indexed by group element.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total dimension of the underlying vector space.
    #[must_use]
    pub fn total_dim(&self) -> usize {
        self.dims.iter().sum()
    }

    /// Returns true for the zero object.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dims.iter().all(|&d| d == 0)
    }
}

/// A degree-preserving linear map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GradedMorphism<K> {
    domain: GradedObject,
    codomain: GradedObject,
    blocks: Vec<DenseMatrix<K>>,
}

impl<K: Ring> GradedMorphism<K> {
    /// Builds a morphism from its blocks.
    ///
    /// # Panics
    ///
    /// Panics if a block has the wrong shape.
    #[must_use]
    pub fn new(domain: GradedObject, codomain: GradedObject, blocks: Vec<DenseMatrix<K>>) -> Self {
        assert_eq!(blocks.len(), domain.dims.len(), "one block per group element");
        for (g, b) in blocks.iter().enumerate() {
            assert_eq!(
                (b.num_rows(), b.num_cols()),
                (codomain.dims[g], domain.dims[g]),
                "block {g} has the wrong shape"
            );
        }
        Self {
            domain,
            codomain,
            blocks,
        }
    }

    fn zero(domain: &GradedObject, codomain: &GradedObject) -> Self {
        let blocks = domain
            .dims
            .iter()
            .zip(&codomain.dims)
            .map(|(&c, &r)| DenseMatrix::zeros(r, c))
            .collect();
        Self {
            domain: domain.clone(),
            codomain: codomain.clone(),
            blocks,
        }
    }

    fn identity(x: &GradedObject) -> Self {
        Self {
            domain: x.clone(),
            codomain: x.clone(),
            blocks: x.dims.iter().map(|&d| DenseMatrix::identity(d)).collect(),
        }
    }

    /// Source object.
    #[must_use]
    pub fn domain(&self) -> &GradedObject {
        &self.domain
    }

    /// Target object.
    #[must_use]
    pub fn codomain(&self) -> &GradedObject {
        &self.codomain
    }

    /// The block acting on degree g.
    #[must_use]
    pub fn block(&self, g: usize) -> &DenseMatrix<K> {
        &self.blocks[g]
    }

    /// Returns true if every block is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(DenseMatrix::is_zero)
    }
}

/// Vec_G^ω over the field K, with the trivial pivotal structure.
///
/// Every simple δ_g is invertible with dual δ_{g⁻¹} and dimension 1.
#[derive(Clone, Debug)]
pub struct GradedVectorSpaces<K> {
    group: FiniteGroup,
    /// ω(g, h, l) at `(g * n + h) * n + l`.
    omega: Vec<K>,
    omega_inv: Vec<K>,
}

impl<K: Field + Send + Sync> GradedVectorSpaces<K> {
    /// Vec_G with the trivial associator.
    #[must_use]
    pub fn new(group: FiniteGroup) -> Self {
        let n = group.order();
        Self {
            group,
            omega: vec![K::one(); n * n * n],
            omega_inv: vec![K::one(); n * n * n],
        }
    }

    /// Vec_G^ω for a 3-cocycle given pointwise.
    ///
    /// # Errors
    ///
    /// Returns `NotACocycle` when ω vanishes somewhere, is not normalized
    /// (ω = 1 whenever an argument is the identity), or violates
    /// ω(gh, k, l) ω(g, h, kl) = ω(g, h, k) ω(g, hk, l) ω(h, k, l).
    pub fn with_cocycle<W>(group: FiniteGroup, omega: W) -> Result<Self, CategoryError>
    where
        W: Fn(usize, usize, usize) -> K,
    {
        let n = group.order();
        let mut values = Vec::with_capacity(n * n * n);
        let mut inverses = Vec::with_capacity(n * n * n);
        for g in 0..n {
            for h in 0..n {
                for l in 0..n {
                    let w = omega(g, h, l);
                    let Some(inv) = w.inv() else {
                        return Err(CategoryError::NotACocycle {
                            reason: format!("ω({g}, {h}, {l}) = 0"),
                        });
                    };
                    if (g == 0 || h == 0 || l == 0) && !w.is_one() {
                        return Err(CategoryError::NotACocycle {
                            reason: format!("ω({g}, {h}, {l}) = {w:?} with an identity argument"),
                        });
                    }
                    values.push(w);
                    inverses.push(inv);
                }
            }
        }

        let cat = Self {
            group,
            omega: values,
            omega_inv: inverses,
        };
        cat.check_cocycle()?;
        Ok(cat)
    }

    fn check_cocycle(&self) -> Result<(), CategoryError> {
        let grp = &self.group;
        for g in grp.elements() {
            for h in grp.elements() {
                for k in grp.elements() {
                    for l in grp.elements() {
                        let lhs = self.omega(grp.mul(g, h), k, l).clone()
                            * self.omega(g, h, grp.mul(k, l)).clone();
                        let rhs = self.omega(g, h, k).clone()
                            * self.omega(g, grp.mul(h, k), l).clone()
                            * self.omega(h, k, l).clone();
                        if lhs != rhs {
                            return Err(CategoryError::NotACocycle {
                                reason: format!("coboundary of ω is not 1 at ({g}, {h}, {k}, {l})"),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The grading group.
    #[must_use]
    pub fn group(&self) -> &FiniteGroup {
        &self.group
    }

    /// ω(g, h, l).
    #[must_use]
    pub fn omega(&self, g: usize, h: usize, l: usize) -> &K {
        &self.omega[self.omega_index(g, h, l)]
    }

    fn omega_index(&self, g: usize, h: usize, l: usize) -> usize {
        let n = self.group.order();
        (g * n + h) * n + l
    }

    /// The simple object δ_g.
    #[must_use]
    pub fn simple(&self, g: usize) -> GradedObject {
        let mut dims = vec![0; self.group.order()];
        dims[g] = 1;
        GradedObject::new(dims)
    }

    /// The object ⊕_g δ_g^{mults[g]}.
    ///
    /// # Panics
    ///
    /// Panics if `mults` does not have one entry per group element.
    #[must_use]
    pub fn object(&self, mults: &[usize]) -> GradedObject {
        assert_eq!(mults.len(), self.group.order(), "one multiplicity per group element");
        GradedObject::new(mults.to_vec())
    }

    /// `offsets[k][g]`: first index of X_g ⊗ Y_{g⁻¹k} inside (X⊗Y)_k.
    fn tensor_offsets(&self, x: &GradedObject, y: &GradedObject) -> Vec<Vec<usize>> {
        let grp = &self.group;
        grp.elements()
            .map(|k| {
                let mut start = 0;
                grp.elements()
                    .map(|g| {
                        let here = start;
                        start += x.dims[g] * y.dims[grp.mul(grp.inv(g), k)];
                        here
                    })
                    .collect()
            })
            .collect()
    }

    /// The associator or its inverse: `inverse` transposes the placement and
    /// uses ω⁻¹.
    fn associator_impl(
        &self,
        x: &GradedObject,
        y: &GradedObject,
        z: &GradedObject,
        inverse: bool,
    ) -> GradedMorphism<K> {
        let grp = &self.group;
        let xy = self.tensor(x, y);
        let yz = self.tensor(y, z);
        let left = self.tensor(&xy, z);
        let right = self.tensor(x, &yz);

        let off_xy = self.tensor_offsets(x, y);
        let off_yz = self.tensor_offsets(y, z);
        let off_xy_z = self.tensor_offsets(&xy, z);
        let off_x_yz = self.tensor_offsets(x, &yz);

        let (domain, codomain) = if inverse {
            (right.clone(), left.clone())
        } else {
            (left.clone(), right.clone())
        };
        let mut result = GradedMorphism::zero(&domain, &codomain);

        for k in grp.elements() {
            for g in grp.elements() {
                for h in grp.elements() {
                    let u = grp.mul(g, h);
                    let l = grp.mul(grp.inv(u), k);
                    let v = grp.mul(h, l);
                    let (dx, dy, dz) = (x.dims[g], y.dims[h], z.dims[l]);
                    if dx * dy * dz == 0 {
                        continue;
                    }

                    let idx = self.omega_index(g, h, l);
                    let scalar = if inverse {
                        &self.omega_inv[idx]
                    } else {
                        &self.omega[idx]
                    };

                    for a in 0..dx {
                        for b in 0..dy {
                            for c in 0..dz {
                                let src = off_xy_z[k][u] + (off_xy[u][g] + a * dy + b) * dz + c;
                                let dst =
                                    off_x_yz[k][g] + a * yz.dims[v] + off_yz[v][h] + b * dz + c;
                                let (row, col) = if inverse { (src, dst) } else { (dst, src) };
                                result.blocks[k][(row, col)] = scalar.clone();
                            }
                        }
                    }
                }
            }
        }
        result
    }

    /// Positions (index in (X⊗X*)_e) pairing each basis vector of X with
    /// its dual.
    fn pairing_positions(
        &self,
        x: &GradedObject,
        offsets: &[Vec<usize>],
        dual_first: bool,
    ) -> Vec<(usize, usize)> {
        let grp = &self.group;
        let e = grp.identity();
        let mut positions = Vec::new();
        for first in grp.elements() {
            // degree of the X factor
            let g = if dual_first { grp.inv(first) } else { first };
            let d = x.dims[g];
            for a in 0..d {
                positions.push((g, offsets[e][first] + a * d + a));
            }
        }
        positions
    }
}

impl<K: Field + Send + Sync> TensorCategory for GradedVectorSpaces<K> {
    type Scalar = K;
    type Object = GradedObject;
    type Morphism = GradedMorphism<K>;

    fn is_semisimple(&self) -> bool {
        true
    }

    fn simples(&self) -> Vec<GradedObject> {
        self.group.elements().map(|g| self.simple(g)).collect()
    }

    fn one(&self) -> GradedObject {
        self.simple(self.group.identity())
    }

    fn zero(&self) -> GradedObject {
        GradedObject::new(vec![0; self.group.order()])
    }

    fn direct_sum(
        &self,
        x: &GradedObject,
        y: &GradedObject,
    ) -> DirectSum<GradedObject, GradedMorphism<K>> {
        let sum = GradedObject::new(x.dims.iter().zip(&y.dims).map(|(a, b)| a + b).collect());

        let mut incl_x = GradedMorphism::zero(x, &sum);
        let mut incl_y = GradedMorphism::zero(y, &sum);
        for g in self.group.elements() {
            let (dx, dy) = (x.dims[g], y.dims[g]);
            incl_x.blocks[g].set_block(0, 0, &DenseMatrix::identity(dx));
            incl_y.blocks[g].set_block(dx, 0, &DenseMatrix::identity(dy));
        }
        let transpose = |f: &GradedMorphism<K>| GradedMorphism {
            domain: f.codomain.clone(),
            codomain: f.domain.clone(),
            blocks: f.blocks.iter().map(DenseMatrix::transpose).collect(),
        };
        let projections = [transpose(&incl_x), transpose(&incl_y)];

        DirectSum {
            object: sum,
            inclusions: [incl_x, incl_y],
            projections,
        }
    }

    fn tensor(&self, x: &GradedObject, y: &GradedObject) -> GradedObject {
        let grp = &self.group;
        let dims = grp
            .elements()
            .map(|k| {
                grp.elements()
                    .map(|g| x.dims[g] * y.dims[grp.mul(grp.inv(g), k)])
                    .sum()
            })
            .collect();
        GradedObject::new(dims)
    }

    fn tensor_morphisms(&self, f: &GradedMorphism<K>, g: &GradedMorphism<K>) -> GradedMorphism<K> {
        let grp = &self.group;
        let domain = self.tensor(&f.domain, &g.domain);
        let codomain = self.tensor(&f.codomain, &g.codomain);
        let dom_off = self.tensor_offsets(&f.domain, &g.domain);
        let cod_off = self.tensor_offsets(&f.codomain, &g.codomain);

        let mut result = GradedMorphism::zero(&domain, &codomain);
        for k in grp.elements() {
            for a in grp.elements() {
                let b = grp.mul(grp.inv(a), k);
                let block = f.blocks[a].kronecker(&g.blocks[b]);
                if block.num_rows() > 0 && block.num_cols() > 0 {
                    result.blocks[k].set_block(cod_off[k][a], dom_off[k][a], &block);
                }
            }
        }
        result
    }

    fn dual(&self, x: &GradedObject) -> GradedObject {
        GradedObject::new(self.group.elements().map(|g| x.dims[self.group.inv(g)]).collect())
    }

    fn associator(
        &self,
        x: &GradedObject,
        y: &GradedObject,
        z: &GradedObject,
    ) -> GradedMorphism<K> {
        self.associator_impl(x, y, z, false)
    }

    fn associator_inverse(
        &self,
        x: &GradedObject,
        y: &GradedObject,
        z: &GradedObject,
    ) -> GradedMorphism<K> {
        self.associator_impl(x, y, z, true)
    }

    // ω is normalized, so the unitors are identities on the underlying
    // graded spaces
    fn left_unitor(&self, x: &GradedObject) -> GradedMorphism<K> {
        let mut f = GradedMorphism::identity(x);
        f.domain = self.tensor(&self.one(), x);
        f
    }

    fn left_unitor_inverse(&self, x: &GradedObject) -> GradedMorphism<K> {
        let mut f = GradedMorphism::identity(x);
        f.codomain = self.tensor(&self.one(), x);
        f
    }

    fn right_unitor(&self, x: &GradedObject) -> GradedMorphism<K> {
        let mut f = GradedMorphism::identity(x);
        f.domain = self.tensor(x, &self.one());
        f
    }

    fn right_unitor_inverse(&self, x: &GradedObject) -> GradedMorphism<K> {
        let mut f = GradedMorphism::identity(x);
        f.codomain = self.tensor(x, &self.one());
        f
    }

    fn ev(&self, x: &GradedObject) -> GradedMorphism<K> {
        let x_dual = self.dual(x);
        let source = self.tensor(&x_dual, x);
        let offsets = self.tensor_offsets(&x_dual, x);
        let e = self.group.identity();

        let mut f = GradedMorphism::zero(&source, &self.one());
        for (g, col) in self.pairing_positions(x, &offsets, true) {
            let g_inv = self.group.inv(g);
            f.blocks[e][(0, col)] = self.omega_inv[self.omega_index(g, g_inv, g)].clone();
        }
        f
    }

    fn coev(&self, x: &GradedObject) -> GradedMorphism<K> {
        let x_dual = self.dual(x);
        let target = self.tensor(x, &x_dual);
        let offsets = self.tensor_offsets(x, &x_dual);
        let e = self.group.identity();

        let mut f = GradedMorphism::zero(&self.one(), &target);
        for (_, row) in self.pairing_positions(x, &offsets, false) {
            f.blocks[e][(row, 0)] = K::one();
        }
        f
    }

    fn pivotal_ev(&self, x: &GradedObject) -> GradedMorphism<K> {
        let x_dual = self.dual(x);
        let source = self.tensor(x, &x_dual);
        let offsets = self.tensor_offsets(x, &x_dual);
        let e = self.group.identity();

        let mut f = GradedMorphism::zero(&source, &self.one());
        for (_, col) in self.pairing_positions(x, &offsets, false) {
            f.blocks[e][(0, col)] = K::one();
        }
        f
    }

    fn id(&self, x: &GradedObject) -> GradedMorphism<K> {
        GradedMorphism::identity(x)
    }

    fn zero_morphism(&self, x: &GradedObject, y: &GradedObject) -> GradedMorphism<K> {
        GradedMorphism::zero(x, y)
    }

    fn compose(&self, f: &GradedMorphism<K>, g: &GradedMorphism<K>) -> GradedMorphism<K> {
        assert_eq!(f.codomain, g.domain, "composing non-composable morphisms");
        GradedMorphism {
            domain: f.domain.clone(),
            codomain: g.codomain.clone(),
            blocks: f.blocks.iter().zip(&g.blocks).map(|(a, b)| b.mm(a)).collect(),
        }
    }

    fn add(&self, f: &GradedMorphism<K>, g: &GradedMorphism<K>) -> GradedMorphism<K> {
        assert_eq!(
            (&f.domain, &f.codomain),
            (&g.domain, &g.codomain),
            "adding morphisms between different objects"
        );
        GradedMorphism {
            domain: f.domain.clone(),
            codomain: f.codomain.clone(),
            blocks: f.blocks.iter().zip(&g.blocks).map(|(a, b)| a + b).collect(),
        }
    }

    fn scale(&self, f: &GradedMorphism<K>, c: &K) -> GradedMorphism<K> {
        GradedMorphism {
            domain: f.domain.clone(),
            codomain: f.codomain.clone(),
            blocks: f.blocks.iter().map(|b| b.scale(c)).collect(),
        }
    }

    fn inverse(&self, f: &GradedMorphism<K>) -> Option<GradedMorphism<K>> {
        if f.domain.dims != f.codomain.dims {
            return None;
        }
        let blocks = f
            .blocks
            .iter()
            .map(DenseMatrix::inverse)
            .collect::<Option<Vec<_>>>()?;
        Some(GradedMorphism {
            domain: f.codomain.clone(),
            codomain: f.domain.clone(),
            blocks,
        })
    }

    fn domain(&self, f: &GradedMorphism<K>) -> GradedObject {
        f.domain.clone()
    }

    fn codomain(&self, f: &GradedMorphism<K>) -> GradedObject {
        f.codomain.clone()
    }

    fn hom_basis(&self, x: &GradedObject, y: &GradedObject) -> Vec<GradedMorphism<K>> {
        let mut basis = Vec::new();
        for g in self.group.elements() {
            for r in 0..y.dims[g] {
                for c in 0..x.dims[g] {
                    let mut f = GradedMorphism::zero(x, y);
                    f.blocks[g][(r, c)] = K::one();
                    basis.push(f);
                }
            }
        }
        basis
    }

    fn coordinates(&self, f: &GradedMorphism<K>) -> Vec<K> {
        f.blocks
            .iter()
            .flat_map(|b| b.entries().iter().cloned())
            .collect()
    }

    fn is_isomorphic(&self, x: &GradedObject, y: &GradedObject) -> bool {
        x.dims == y.dims
    }
}
