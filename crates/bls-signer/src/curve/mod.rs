//! The pairing-friendly curve the signer runs on.
//!
//! Group arithmetic comes from arkworks; this module only fixes which groups play the role of
//! G1 and G2, how their points are laid out as affine coordinates, and how a group-tagged
//! [`Point`] behaves when operands come from different groups.

use crate::{BLSError, BlsResult};

use ark_ec::{
    models::short_weierstrass::{Affine, Projective, SWCurveConfig},
    pairing::{Pairing, PairingOutput},
    CurveConfig, CurveGroup, Group as _,
};
use ark_ff::{Field, PrimeField};
use num_bigint::BigUint;
use zeroize::Zeroize;

use std::fmt::{self, Debug, Display};

/// Scalar field of a curve system
pub type Scalar<C> = <<C as CurveSystem>::G1Config as CurveConfig>::ScalarField;
/// G1 in projective form
pub type G1<C> = Projective<<C as CurveSystem>::G1Config>;
/// G2 in projective form
pub type G2<C> = Projective<<C as CurveSystem>::G2Config>;
/// Pairing target group
pub type Gt<C> = PairingOutput<<C as CurveSystem>::Engine>;

/// A pairing-friendly curve with two short Weierstrass groups of the same prime order.
pub trait CurveSystem: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    /// Parameters of G1
    type G1Config: SWCurveConfig;
    /// Parameters of G2
    type G2Config: SWCurveConfig<ScalarField = <Self::G1Config as CurveConfig>::ScalarField>;
    /// The pairing over G1 x G2
    type Engine: Pairing<
        ScalarField = <Self::G1Config as CurveConfig>::ScalarField,
        G1 = Projective<Self::G1Config>,
        G1Affine = Affine<Self::G1Config>,
        G2 = Projective<Self::G2Config>,
        G2Affine = Affine<Self::G2Config>,
    >;

    /// Name used on the command line and in logs
    const NAME: &'static str;

    /// The fixed G1 generator
    fn g1() -> G1<Self> {
        G1::<Self>::generator()
    }

    /// The fixed G2 generator
    fn g2() -> G2<Self> {
        G2::<Self>::generator()
    }

    /// Order of G1 (and G2); secret keys live in `[0, group_order)`
    fn group_order() -> BigUint {
        <Scalar<Self> as PrimeField>::MODULUS.into()
    }

    /// Converts an integer to a scalar, rejecting anything outside `[0, group_order)`
    fn scalar_from_biguint(n: &BigUint) -> BlsResult<Scalar<Self>> {
        if *n >= Self::group_order() {
            return Err(BLSError::ParseError(format!(
                "scalar is not below the {} group order",
                Self::NAME
            )));
        }
        let mut bytes = n.to_bytes_le();
        let scalar = Scalar::<Self>::from_le_bytes_mod_order(&bytes);
        bytes.zeroize();
        Ok(scalar)
    }

    /// Bilinear pairing
    fn pairing(p: &G1<Self>, q: &G2<Self>) -> Gt<Self> {
        Self::Engine::pairing(p.into_affine(), q.into_affine())
    }
}

/// The alt_bn128 (BN254) curve, as used by the EVM precompiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AltBn128;

impl CurveSystem for AltBn128 {
    type G1Config = ark_bn254::g1::Config;
    type G2Config = ark_bn254::g2::Config;
    type Engine = ark_bn254::Bn254;

    const NAME: &'static str = "bn254";
}

/// BLS12-377
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub struct Bls12_377;

impl CurveSystem for Bls12_377 {
    type G1Config = ark_bls12_377::g1::Config;
    type G2Config = ark_bls12_377::g2::Config;
    type Engine = ark_bls12_377::Bls12_377;

    const NAME: &'static str = "bls12-377";
}

/// Which of the two source groups a point belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// First source group
    G1,
    /// Second source group
    G2,
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::G1 => write!(f, "G1"),
            Group::G2 => write!(f, "G2"),
        }
    }
}

/// A point of either source group. Operations that need a particular group check the tag
/// and fail with [`BLSError::GroupMismatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point<C: CurveSystem> {
    /// A G1 element
    G1(G1<C>),
    /// A G2 element
    G2(G2<C>),
}

impl<C: CurveSystem> Point<C> {
    /// The group this point lives in
    pub fn group(&self) -> Group {
        match self {
            Point::G1(_) => Group::G1,
            Point::G2(_) => Group::G2,
        }
    }

    /// Scalar multiplication
    pub fn mul(&self, scalar: &Scalar<C>) -> Point<C> {
        match self {
            Point::G1(p) => Point::G1(*p * scalar),
            Point::G2(p) => Point::G2(*p * scalar),
        }
    }

    /// Scalar multiplication by an arbitrary integer. Both generators have prime order equal
    /// to the group order, so reducing first gives the same point as the unreduced product.
    pub fn mul_biguint(&self, n: &BigUint) -> Point<C> {
        self.mul(&Scalar::<C>::from(n.clone()))
    }

    /// Group addition
    pub fn add(&self, other: &Point<C>) -> BlsResult<Point<C>> {
        match (self, other) {
            (Point::G1(a), Point::G1(b)) => Ok(Point::G1(*a + b)),
            (Point::G2(a), Point::G2(b)) => Ok(Point::G2(*a + b)),
            (a, b) => Err(BLSError::GroupMismatch {
                expected: a.group(),
                found: b.group(),
            }),
        }
    }

    /// Affine coordinates as integers: `[x, y]` for G1, `[x1, x0, y1, y0]` for G2
    /// (extension components highest degree first). The identity is all zeros.
    pub fn to_affine_coords(&self) -> Vec<BigUint> {
        match self {
            Point::G1(p) => affine_coords(&p.into_affine()),
            Point::G2(p) => affine_coords(&p.into_affine()),
        }
    }

    /// Returns the G1 element, or a mismatch error
    pub fn into_g1(self) -> BlsResult<G1<C>> {
        match self {
            Point::G1(p) => Ok(p),
            Point::G2(_) => Err(BLSError::GroupMismatch {
                expected: Group::G1,
                found: Group::G2,
            }),
        }
    }

    /// Returns the G2 element, or a mismatch error
    pub fn into_g2(self) -> BlsResult<G2<C>> {
        match self {
            Point::G2(p) => Ok(p),
            Point::G1(_) => Err(BLSError::GroupMismatch {
                expected: Group::G2,
                found: Group::G1,
            }),
        }
    }
}

/// Pairs a G1 point with a G2 point
pub fn pair<C: CurveSystem>(p: &Point<C>, q: &Point<C>) -> BlsResult<Gt<C>> {
    let p = p.clone().into_g1()?;
    let q = q.clone().into_g2()?;
    Ok(C::pairing(&p, &q))
}

pub(crate) fn affine_coords<P: SWCurveConfig>(p: &Affine<P>) -> Vec<BigUint> {
    let degree = P::BaseField::extension_degree() as usize;
    if p.infinity {
        return vec![BigUint::from(0u8); 2 * degree];
    }
    let mut coords = Vec::with_capacity(2 * degree);
    for c in [&p.x, &p.y] {
        let mut components = c
            .to_base_prime_field_elements()
            .map(Into::into)
            .collect::<Vec<BigUint>>();
        components.reverse();
        coords.extend(components);
    }
    coords
}
