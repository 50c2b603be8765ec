/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Hash to curve with Icart's method, checked against prover-supplied witnesses.
//!
//! For `u = hash + added_number` Icart's map sets `v = -u^3 / 6` and
//! `x = (v^2 - 7 - u^6 / 27)^(1/3) + u^2 / 3`, `y = u * x + v`.
//! Since `p = 1 (mod 3)` not every field element is a cube, and cubes have three roots,
//! so the prover bumps `added_number` until the radicand is a cube and supplies the root.
//! The verifier only checks these witnesses.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::curve::{FIELD_MODULUS, parse_constant};
use crate::errors::HashToCurveError;
use crate::field::*;
use crate::types::{FieldElement, Point};

///Added numbers must be strictly below this bound.
pub const MAX_ADDED_NUMBER: u64 = 256;

lazy_static! {
    pub(crate) static ref INV_3: BigUint = inv_mod(&BigUint::from(3u32), &FIELD_MODULUS);
    pub(crate) static ref INV_6: BigUint = inv_mod(&BigUint::from(6u32), &FIELD_MODULUS);
    pub(crate) static ref INV_27: BigUint = inv_mod(&BigUint::from(27u32), &FIELD_MODULUS);

    ///A primitive cube root of unity `ω` in `F_p`.
    pub static ref CUBE_ROOT_OF_UNITY: FieldElement = FieldElement::reduce(&parse_constant(
        "7ae96a2b657c07106e64479eac3434e99cf0497512f58995c1396c28719501ee"));

    static ref CUBIC_RESIDUE_EXPONENT: BigUint = (&*FIELD_MODULUS - 1u32) / 3u32;
}

fn fmul(a: &BigUint, b: &BigUint) -> BigUint { mul_mod(a, b, &FIELD_MODULUS) }

///The radicand of Icart's map for `a = 0, b = 7`: `(u^3 / 6)^2 - 7 - u^6 / 27`.
pub fn icart_radicand(u: &FieldElement) -> FieldElement {
    let u = u.as_biguint();
    let u_cube = pow_mod(u, &BigUint::from(3u32), &FIELD_MODULUS);
    let v = fmul(&u_cube, &INV_6);
    let u_six = fmul(&u_cube, &u_cube);

    let radicand = sub_mod(
        &sub_mod(&fmul(&v, &v), &BigUint::from(7u32), &FIELD_MODULUS),
        &fmul(&u_six, &INV_27),
        &FIELD_MODULUS
    );
    return FieldElement::reduce(&radicand)
}

///Whether `value` has a cube root in `F_p`.
pub fn is_cubic_residue(value: &FieldElement) -> bool {
    let value = value.as_biguint();
    return value.is_zero() || pow_mod(value, &CUBIC_RESIDUE_EXPONENT, &FIELD_MODULUS) == BigUint::from(1u32)
}

///Whether `root` is the least of `root`, `root * ω` and `root * ω^2`.
pub fn is_canonical_cube_root(root: &FieldElement) -> bool {
    let root = root.as_biguint();
    let omega = CUBE_ROOT_OF_UNITY.as_biguint();
    let first = fmul(root, omega);
    let second = fmul(&first, omega);
    return *root <= first && *root <= second
}

///Map `hash + added_number` onto the curve, given a cube root of the Icart radicand.
///
///Fails if `cube_root_witness^3` is not the radicand. Any root works: the result is on the curve either way.
pub fn hash_to_curve(
    hash: &FieldElement, added_number: &FieldElement, cube_root_witness: &FieldElement
) -> Result<Point, HashToCurveError> {
    let u = add_mod(hash.as_biguint(), added_number.as_biguint(), &FIELD_MODULUS);
    let u_field = FieldElement::reduce(&u);

    let witness = cube_root_witness.as_biguint();
    let witness_cube = pow_mod(witness, &BigUint::from(3u32), &FIELD_MODULUS);
    if witness_cube != *icart_radicand(&u_field).as_biguint() {
        return Err(HashToCurveError::InvalidCubeRoot)
    }

    let u_cube = pow_mod(&u, &BigUint::from(3u32), &FIELD_MODULUS);
    let x = add_mod(witness, &fmul(&fmul(&u, &u), &INV_3), &FIELD_MODULUS);
    let y = sub_mod(&fmul(&x, &u), &fmul(&u_cube, &INV_6), &FIELD_MODULUS);
    return Ok(Point::new(FieldElement::reduce(&x), FieldElement::reduce(&y)))
}

///`hash_to_curve`, additionally requiring the one witness pair an honest prover would find:
///the smallest added number whose radicand is a cube, and the least of its three cube roots.
///
///This makes the resulting point a function of `hash` alone.
pub fn canonical_hash_to_curve(
    hash: &FieldElement, added_number: &FieldElement, cube_root_witness: &FieldElement
) -> Result<Point, HashToCurveError> {
    let added = match added_number.as_biguint().to_u64() {
        Some(added) if added < MAX_ADDED_NUMBER => added,
        _ => return Err(HashToCurveError::AddedNumberTooLarge)
    };

    for smaller in 0..added {
        let u = FieldElement::reduce(&add_mod(hash.as_biguint(), &BigUint::from(smaller), &FIELD_MODULUS));
        if is_cubic_residue(&icart_radicand(&u)) {
            return Err(HashToCurveError::NonMinimalAddedNumber)
        }
    }

    let point = hash_to_curve(hash, added_number, cube_root_witness)?;
    if !is_canonical_cube_root(cube_root_witness) {
        return Err(HashToCurveError::NonCanonicalCubeRoot)
    }
    return Ok(point)
}
