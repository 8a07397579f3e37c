//! Decimal text encoding of scalars and points, as found in key files and on the command line.

use crate::curve::{CurveSystem, Scalar, G1, G2};
use crate::{BLSError, BlsResult};

use ark_ec::models::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Field, PrimeField, Zero};
use num_bigint::BigUint;
use zeroize::Zeroize;

/// Parses a base-10 unsigned integer. Only ASCII digits are accepted.
pub fn parse_decimal(s: &str) -> BlsResult<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BLSError::ParseError(format!(
            "\"{}\" is not a decimal integer",
            s
        )));
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| BLSError::ParseError(format!("\"{}\" is not a decimal integer", s)))
}

/// Renders a scalar in base 10. The intermediate integer is wiped.
pub fn scalar_to_decimal<C: CurveSystem>(scalar: &Scalar<C>) -> String {
    let mut n: BigUint = (*scalar).into();
    let decimal = n.to_str_radix(10);
    n.zeroize();
    decimal
}

/// Parses a base-10 scalar, rejecting values at or above the group order. Scalars are
/// secret keys, so neither the input nor the intermediate integer ends up in the error.
pub fn scalar_from_decimal<C: CurveSystem>(s: &str) -> BlsResult<Scalar<C>> {
    let mut n = parse_decimal(s)
        .map_err(|_| BLSError::ParseError("secret key is not a decimal integer".to_string()))?;
    let scalar = C::scalar_from_biguint(&n);
    n.zeroize();
    scalar
}

/// Renders coordinates in base 10
pub fn coords_to_decimal(coords: &[BigUint]) -> Vec<String> {
    coords.iter().map(|c| c.to_str_radix(10)).collect()
}

/// Builds a G1 point from `[x, y]`
pub fn g1_from_coords<C: CurveSystem>(coords: &[&str]) -> BlsResult<G1<C>> {
    Ok(affine_from_coords::<C::G1Config>(coords)?.into())
}

/// Builds a G2 point from `[x1, x0, y1, y0]`
pub fn g2_from_coords<C: CurveSystem>(coords: &[&str]) -> BlsResult<G2<C>> {
    Ok(affine_from_coords::<C::G2Config>(coords)?.into())
}

fn prime_field_from_decimal<F: PrimeField>(s: &str) -> BlsResult<F> {
    let n = parse_decimal(s)?;
    let element = F::from(n.clone());
    let round_trip: BigUint = element.into();
    if round_trip != n {
        return Err(BLSError::ParseError(format!(
            "{} is not a canonical field element",
            n
        )));
    }
    Ok(element)
}

fn field_from_components<F: Field>(components: &[&str]) -> BlsResult<F> {
    // highest degree first on the wire, arkworks wants c0 first
    let elems = components
        .iter()
        .rev()
        .map(|c| prime_field_from_decimal::<F::BasePrimeField>(c))
        .collect::<BlsResult<Vec<_>>>()?;
    F::from_base_prime_field_elems(&elems)
        .ok_or_else(|| BLSError::ParseError("wrong number of field components".to_string()))
}

/// Inverse of [`Point::to_affine_coords`](crate::curve::Point::to_affine_coords). The point
/// must be on the curve and in the prime order subgroup; all zeros is the identity.
fn affine_from_coords<P: SWCurveConfig>(coords: &[&str]) -> BlsResult<Affine<P>> {
    let degree = P::BaseField::extension_degree() as usize;
    if coords.len() != 2 * degree {
        return Err(BLSError::ParseError(format!(
            "expected {} coordinates, got {}",
            2 * degree,
            coords.len()
        )));
    }
    let x = field_from_components::<P::BaseField>(&coords[..degree])?;
    let y = field_from_components::<P::BaseField>(&coords[degree..])?;
    if x.is_zero() && y.is_zero() {
        return Ok(Affine::identity());
    }
    let point = Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(BLSError::ParseError("point is not on the curve".to_string()));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BLSError::ParseError(
            "point is not in the prime order subgroup".to_string(),
        ));
    }
    Ok(point)
}
