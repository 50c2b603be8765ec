/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants for secp256k1: `y^2 = x^3 + 7` over `F_p`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{thread_rng, Rng};

use crate::field::*;
use crate::hashes::h_bytes;
use crate::types::*;

///The constant term of the curve equation.
pub const CURVE_B: u32 = 7;

pub(crate) fn parse_constant(hex: &str) -> BigUint {
    return BigUint::parse_bytes(hex.as_bytes(), 16)
        .expect("Invalid curve constant");
}

lazy_static! {
    ///The field prime `p = 2^256 - 2^32 - 977`.
    pub static ref FIELD_MODULUS: BigUint = parse_constant(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    ///The order `n` of the group generated by `G`.
    pub static ref CURVE_ORDER: BigUint = parse_constant(
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    ///The basepoint of the elliptic curve.
    pub static ref G_POINT: Point = Point::new(
        FieldElement::reduce(&parse_constant(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")),
        FieldElement::reduce(&parse_constant(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"))
    );

    static ref SQRT_EXPONENT: BigUint = (&*FIELD_MODULUS + 1u32) >> 2;
}

fn fadd(a: &BigUint, b: &BigUint) -> BigUint { add_mod(a, b, &FIELD_MODULUS) }
fn fsub(a: &BigUint, b: &BigUint) -> BigUint { sub_mod(a, b, &FIELD_MODULUS) }
fn fmul(a: &BigUint, b: &BigUint) -> BigUint { mul_mod(a, b, &FIELD_MODULUS) }

///`x^3 + 7 mod p`
pub(crate) fn curve_rhs(x: &BigUint) -> BigUint {
    let x_cube = pow_mod(x, &BigUint::from(3u32), &FIELD_MODULUS);
    return fadd(&x_cube, &BigUint::from(CURVE_B));
}

///Check whether `(x, y)` satisfies `y^2 = x^3 + 7 (mod p)`.
pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
    let y = y.as_biguint();
    return fmul(y, y) == curve_rhs(x.as_biguint())
}

///A point in Jacobian coordinates `(X, Y, Z)`, representing the affine point `(X/Z^2, Y/Z^3)`.
///`Z = 0` is the point at infinity.
#[derive(Debug, Clone)]
pub struct ProjectivePoint {
    x: BigUint,
    y: BigUint,
    z: BigUint

} impl ProjectivePoint {
    pub fn identity() -> Self {
        return Self{x: BigUint::one(), y: BigUint::one(), z: BigUint::zero()}
    }

    pub fn generator() -> Self {
        return Self::from(&*G_POINT)
    }

    pub fn is_identity(&self) -> bool {
        return self.z.is_zero()
    }

    ///Convert back to affine coordinates, or `None` for the point at infinity.
    pub fn to_affine(&self) -> Option<Point> {
        if self.is_identity() {
            return None
        }
        let z_inv = inv_mod(&self.z, &FIELD_MODULUS);
        let z_inv_2 = fmul(&z_inv, &z_inv);
        let z_inv_3 = fmul(&z_inv_2, &z_inv);
        return Some(Point::new(
            FieldElement::reduce(&fmul(&self.x, &z_inv_2)),
            FieldElement::reduce(&fmul(&self.y, &z_inv_3))
        ))
    }

    pub fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity()
        }
        //S = 4XY^2, M = 3X^2
        let y_2 = fmul(&self.y, &self.y);
        let s = fmul(&BigUint::from(4u32), &fmul(&self.x, &y_2));
        let m = fmul(&BigUint::from(3u32), &fmul(&self.x, &self.x));

        let x = fsub(&fmul(&m, &m), &fadd(&s, &s));
        let y = fsub(
            &fmul(&m, &fsub(&s, &x)),
            &fmul(&BigUint::from(8u32), &fmul(&y_2, &y_2))
        );
        let z = fmul(&BigUint::from(2u32), &fmul(&self.y, &self.z));
        return Self{x, y, z}
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone()
        }
        if other.is_identity() {
            return self.clone()
        }
        let z1_2 = fmul(&self.z, &self.z);
        let z2_2 = fmul(&other.z, &other.z);
        let u1 = fmul(&self.x, &z2_2);
        let u2 = fmul(&other.x, &z1_2);
        let s1 = fmul(&self.y, &fmul(&other.z, &z2_2));
        let s2 = fmul(&other.y, &fmul(&self.z, &z1_2));

        if u1 == u2 {
            return match s1 == s2 {
                true => self.double(),
                false => Self::identity()
            }
        }

        let h = fsub(&u2, &u1);
        let r = fsub(&s2, &s1);
        let h_2 = fmul(&h, &h);
        let h_3 = fmul(&h_2, &h);
        let u1_h_2 = fmul(&u1, &h_2);

        let x = fsub(&fsub(&fmul(&r, &r), &h_3), &fadd(&u1_h_2, &u1_h_2));
        let y = fsub(&fmul(&r, &fsub(&u1_h_2, &x)), &fmul(&s1, &h_3));
        let z = fmul(&h, &fmul(&self.z, &other.z));
        return Self{x, y, z}
    }

    pub fn neg(&self) -> Self {
        return Self{x: self.x.clone(), y: neg_mod(&self.y, &FIELD_MODULUS), z: self.z.clone()}
    }

    ///Variable-time double-and-add.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let k = scalar.as_biguint();
        let mut result = Self::identity();
        for i in (0..k.bits()).rev() {
            result = result.double();
            if k.bit(i) {
                result = result.add(self);
            }
        }
        return result
    }

    ///Collapse to a short identifier, see `points_to_identifier`.
    ///The point at infinity collapses to `Identifier::ZERO`.
    pub fn to_identifier(&self) -> Identifier {
        return match self.to_affine() {
            Some(point) => points_to_identifier(&point),
            None => Identifier::ZERO
        }
    }

} impl From<&Point> for ProjectivePoint {
    fn from(point: &Point) -> Self {
        return Self{
            x: point.x.as_biguint().clone(),
            y: point.y.as_biguint().clone(),
            z: BigUint::one()
        }
    }

} impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        return self.to_affine() == other.to_affine()
    }

} impl Eq for ProjectivePoint {}

///Collapse a point to a 20 byte identifier:
///the last 20 bytes of `keccak256(x || y)`, the same derivation as an account address.
pub fn points_to_identifier(point: &Point) -> Identifier {
    let digest = h_bytes(&point.to_bytes());
    let mut id = [0u8; 20];
    id.copy_from_slice(&digest[12..]);
    return Identifier(id)
}

///`k1 * G + k2 * P` as a full point. `P` is assumed to be on the curve.
pub(crate) fn mul_add(k1: &Scalar, point: &Point, k2: &Scalar) -> ProjectivePoint {
    let left = ProjectivePoint::generator().mul(k1);
    let right = ProjectivePoint::from(point).mul(k2);
    return left.add(&right)
}

///Compute `response * G + challenge * P` and collapse the result to an identifier.
///
///Returns `None` only if `P` is not on the curve.
pub fn sbmul_add_smul(response: &Scalar, point: &Point, challenge: &Scalar) -> Option<Identifier> {
    if !point.is_on_curve() {
        return None
    }
    return Some(mul_add(response, point, challenge).to_identifier())
}

///Lift an x-coordinate to the curve point with the given y parity (`true` for odd).
pub fn lift_x(x: &FieldElement, odd: bool) -> Option<Point> {
    let rhs = curve_rhs(x.as_biguint());
    let y = pow_mod(&rhs, &SQRT_EXPONENT, &FIELD_MODULUS);
    if fmul(&y, &y) != rhs {
        return None
    }
    let y = match y.bit(0) == odd {
        true => y,
        false => neg_mod(&y, &FIELD_MODULUS)
    };
    return Some(Point::new(x.clone(), FieldElement::reduce(&y)))
}

///Public key recovery from an ECDSA-style signature `(msg, parity, r, s)`:
///`r^-1 * (s * R - msg * G)`, where `R` is the point with x-coordinate `r` and the given parity.
///
///Choosing `msg = -response * x`, `r = x`, `s = challenge * x` (all mod `n`) and the parity of `y`
///recovers exactly `response * G + challenge * (x, y)`.
pub fn recover_point(msg: &Scalar, odd: bool, r: &Scalar, s: &Scalar) -> Option<Point> {
    if r.as_biguint().is_zero() || s.as_biguint().is_zero() {
        return None
    }
    let big_r = lift_x(&FieldElement::reduce(r.as_biguint()), odd)?;
    let r_inv = inv_mod(r.as_biguint(), &CURVE_ORDER);

    let u1 = Scalar::reduce(&mul_mod(&neg_mod(msg.as_biguint(), &CURVE_ORDER), &r_inv, &CURVE_ORDER));
    let u2 = Scalar::reduce(&mul_mod(s.as_biguint(), &r_inv, &CURVE_ORDER));
    return mul_add(&u1, &big_r, &u2).to_affine()
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random point on the curve
pub fn random_point() -> Point {
    return ProjectivePoint::generator().mul(&random_scalar()).to_affine()
        .expect("Random scalar was zero");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(hex: &str) -> FieldElement {
        FieldElement::reduce(&parse_constant(hex))
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(G_POINT.is_on_curve());
        assert!(!Point::new(G_POINT.x.clone(), FieldElement::from(1)).is_on_curve());
        assert!(!Point::new(FieldElement::zero(), FieldElement::zero()).is_on_curve());
    }

    #[test]
    fn small_multiples() {
        let g = ProjectivePoint::generator();
        let two_g = g.mul(&Scalar::from(2)).to_affine().unwrap();
        assert_eq!(two_g, Point::new(
            fe("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
            fe("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
        ));
        assert_eq!(g.double(), g.add(&g));
        assert_eq!(g.add(&g.neg()), ProjectivePoint::identity());
        assert!(g.mul(&Scalar::zero()).is_identity());

        //n - 1 times G is -G
        let n_minus_one = Scalar::reduce(&(&*CURVE_ORDER - 1u32));
        assert_eq!(g.mul(&n_minus_one), g.neg());
    }

    #[test]
    fn mul_add_matches_reference() {
        //7G + 3(2G) = 13G
        let two_g = ProjectivePoint::generator().mul(&Scalar::from(2)).to_affine().unwrap();
        let expected = Point::new(
            fe("f28773c2d975288bc7d1d205c3748651b075fbc6610e58cddeeddf8f19405aa8"),
            fe("ab0902e8d880a89758212eb65cdaf473a1a06da521fa91f29b5cb52db03ed81")
        );
        assert_eq!(mul_add(&Scalar::from(7), &two_g, &Scalar::from(3)).to_affine(), Some(expected.clone()));
        assert_eq!(ProjectivePoint::generator().mul(&Scalar::from(13)).to_affine(), Some(expected));
    }

    #[test]
    fn identifier_of_generator_is_the_address_of_key_one() {
        let id = points_to_identifier(&G_POINT);
        assert_eq!(id.to_string(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
        assert_eq!(ProjectivePoint::identity().to_identifier(), Identifier::ZERO);
    }

    #[test]
    fn lift_x_recovers_both_parities() {
        let g = &*G_POINT;
        let odd = g.y.as_biguint().bit(0);
        assert_eq!(lift_x(&g.x, odd).as_ref(), Some(g));
        let other = lift_x(&g.x, !odd).unwrap();
        assert_eq!(ProjectivePoint::from(&other), ProjectivePoint::generator().neg());
        //x = 5 gives 132, which is not a square mod p
        assert!(lift_x(&FieldElement::from(5), false).is_none());
    }

    #[test]
    fn sbmul_add_smul_agrees_with_recovery() {
        for _ in 0..4 {
            let point = random_point();
            let response = random_scalar();
            let challenge = random_scalar();

            let x = Scalar::reduce(point.x.as_biguint());
            let msg = Scalar::reduce(&mul_mod(
                &neg_mod(response.as_biguint(), &CURVE_ORDER), x.as_biguint(), &CURVE_ORDER));
            let s = Scalar::reduce(&mul_mod(challenge.as_biguint(), x.as_biguint(), &CURVE_ORDER));
            let recovered = recover_point(&msg, point.y.as_biguint().bit(0), &x, &s).unwrap();

            assert_eq!(sbmul_add_smul(&response, &point, &challenge), Some(points_to_identifier(&recovered)));
        }
    }

    #[test]
    fn sbmul_add_smul_rejects_points_off_curve() {
        let bad = Point::new(FieldElement::from(1), FieldElement::from(1));
        assert!(sbmul_add_smul(&Scalar::one(), &bad, &Scalar::one()).is_none());
    }
}
