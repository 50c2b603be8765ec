/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Serialize, Deserialize};

use crate::curve::{FIELD_MODULUS, CURVE_ORDER, is_on_curve};
use crate::errors::{SerializationError, SignatureError};

///Minimum number of members in a ring.
pub const MIN_RING_SIZE: usize = 2;

///A signed message digest.
///It is never interpreted, only hashed into the first challenge.
pub type Message = [u8; 32];

///A tag which scopes linkability: key images only coincide for the same signer under the same tag.
pub type LinkTag = [u8; 32];

///Big-endian, left-padded 32 byte encoding.
pub(crate) fn to_bytes_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    return out
}

///An integer modulo the group order `n`.
///
///Used for responses, challenges, and the seed of a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn zero() -> Self {
        return Self(BigUint::zero())
    }

    pub fn one() -> Self {
        return Self(BigUint::one())
    }

    ///Reduce an arbitrary integer modulo `n`.
    pub fn reduce(value: &BigUint) -> Self {
        return Self(value % &*CURVE_ORDER)
    }

    ///Interpret 32 big-endian bytes as an integer and reduce it modulo `n`.
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        return Self::reduce(&BigUint::from_bytes_be(&bytes))
    }

    ///Interpret 64 big-endian bytes as an integer and reduce it modulo `n`.
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        return Self::reduce(&BigUint::from_bytes_be(bytes))
    }

    ///Returns `None` unless the big-endian integer is already below `n`.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Option<Self> {
        return Self::try_from(BigUint::from_bytes_be(&bytes)).ok()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        return to_bytes_32(&self.0)
    }

    pub fn as_biguint(&self) -> &BigUint {
        return &self.0
    }

} impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        return Self::reduce(&BigUint::from(value))
    }

} impl TryFrom<BigUint> for Scalar {
    type Error = SerializationError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if value >= *CURVE_ORDER {
            return Err(SerializationError::DecodingError)
        }
        return Ok(Self(value))
    }

} impl From<Scalar> for BigUint {
    fn from(scalar: Scalar) -> Self {
        return scalar.0
    }
}

///An integer modulo the field prime `p`: a point coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        return Self(BigUint::zero())
    }

    ///Reduce an arbitrary integer modulo `p`.
    pub fn reduce(value: &BigUint) -> Self {
        return Self(value % &*FIELD_MODULUS)
    }

    ///Interpret 32 big-endian bytes as an integer and reduce it modulo `p`.
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        return Self::reduce(&BigUint::from_bytes_be(&bytes))
    }

    ///Returns `None` unless the big-endian integer is already below `p`.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Option<Self> {
        return Self::try_from(BigUint::from_bytes_be(&bytes)).ok()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        return to_bytes_32(&self.0)
    }

    pub fn as_biguint(&self) -> &BigUint {
        return &self.0
    }

} impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        return Self::reduce(&BigUint::from(value))
    }

} impl TryFrom<BigUint> for FieldElement {
    type Error = SerializationError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if value >= *FIELD_MODULUS {
            return Err(SerializationError::DecodingError)
        }
        return Ok(Self(value))
    }

} impl From<FieldElement> for BigUint {
    fn from(element: FieldElement) -> Self {
        return element.0
    }
}

///An affine coordinate pair.
///
///Construction does not check the curve equation; anything received from outside
///is validated with `is_on_curve` before it is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement

} impl Point {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        return Self{x, y}
    }

    pub fn is_on_curve(&self) -> bool {
        return is_on_curve(&self.x, &self.y)
    }

    ///`x || y`, each 32 bytes big-endian.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x.to_bytes());
        out[32..].copy_from_slice(&self.y.to_bytes());
        return out
    }
}

///A short, collision-resistant stand-in for a point:
///the last 20 bytes of the Keccak-256 hash of its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier(pub [u8; 20]);

impl Identifier {
    ///The identifier of the point at infinity.
    pub const ZERO: Identifier = Identifier([0u8; 20]);

} impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        return Ok(())
    }
}

///A Ring represents the public keys of a ring signature,
///flattened into `x0, y0, x1, y1, ...`.
///
///This is a wrapper type for `Vec<FieldElement>`.
///The internal `Vec` can be accessed with `ring.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring(pub Vec<FieldElement>);

impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Flattens a list of public keys into a ring.
    pub fn from_points(points: &[Point]) -> Self {
        let mut ring = Self::new();
        for point in points {
            ring.push(point.clone());
        }
        return ring
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, point: Point) {
        self.0.push(point.x);
        self.0.push(point.y);
    }

    ///The number of members, ie. half the number of coordinates.
    pub fn size(&self) -> usize {
        return self.0.len() / 2
    }

    ///Decode the ring into its members.
    ///
    ///Fails if the encoding has an odd length or fewer than `MIN_RING_SIZE` members,
    ///or if any member is not on the curve.
    pub fn members(&self) -> Result<Vec<Point>, SignatureError> {
        let len = self.0.len();
        if len % 2 != 0 || len < 2 * MIN_RING_SIZE {
            return Err(SignatureError::MalformedRing { len })
        }

        let mut members = Vec::with_capacity(len / 2);
        for (index, coordinates) in self.0.chunks_exact(2).enumerate() {
            let point = Point::new(coordinates[0].clone(), coordinates[1].clone());
            if !point.is_on_curve() {
                return Err(SignatureError::PointNotOnCurve { index })
            }
            members.push(point);
        }
        return Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::G_POINT;

    #[test]
    fn scalar_reduction() {
        let n_bytes = to_bytes_32(&CURVE_ORDER);
        assert_eq!(Scalar::from_bytes_mod_order(n_bytes), Scalar::zero());
        assert!(Scalar::from_canonical_bytes(n_bytes).is_none());
        assert_eq!(Scalar::from(5).to_bytes()[31], 5);
        assert!(Scalar::try_from(CURVE_ORDER.clone() - 1u32).is_ok());

        let p_bytes = to_bytes_32(&FIELD_MODULUS);
        assert_eq!(FieldElement::from_bytes_mod_order(p_bytes), FieldElement::zero());
        assert!(FieldElement::from_canonical_bytes(p_bytes).is_none());
    }

    #[test]
    fn ring_shape() {
        let g = G_POINT.clone();
        assert_eq!(Ring::new().members(), Err(SignatureError::MalformedRing { len: 0 }));
        assert_eq!(Ring::from_points(&[g.clone()]).members(), Err(SignatureError::MalformedRing { len: 2 }));

        let mut odd = Ring::from_points(&[g.clone(), g.clone()]);
        odd.0.push(FieldElement::from(1));
        assert_eq!(odd.members(), Err(SignatureError::MalformedRing { len: 5 }));

        let ring = Ring::from_points(&[g.clone(), g.clone()]);
        assert_eq!(ring.size(), 2);
        assert_eq!(ring.members().unwrap(), vec![g.clone(), g.clone()]);

        let bad = Ring::from_points(&[g.clone(), Point::new(g.x.clone(), FieldElement::from(1))]);
        assert_eq!(bad.members(), Err(SignatureError::PointNotOnCurve { index: 1 }));
    }

    #[test]
    fn identifier_display() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xab;
        bytes[19] = 0x01;
        assert_eq!(Identifier(bytes).to_string(), "0xab00000000000000000000000000000000000001");
    }
}
