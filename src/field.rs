/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Modular arithmetic over a prime modulus.
//!
//! These are used both for the base field of secp256k1 (modulus `p`)
//! and for its scalar field (modulus `n`).
//! Every result is normalized into `[0, m)`, and inputs outside of that range are reduced first.
//! None of these functions fail, with the exception of a zero modulus, which is a programming error.

use num_bigint::BigUint;
use num_traits::Zero;

///`(a + b) mod m`
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return ((a % m) + (b % m)) % m;
}

///`(a - b) mod m`
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return ((a % m) + m - (b % m)) % m;
}

///`-a mod m`
pub fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    return sub_mod(&BigUint::zero(), a, m);
}

///`(a * b) mod m`
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return ((a % m) * (b % m)) % m;
}

///`base^exp mod m`, by square-and-multiply.
pub fn pow_mod(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    return (base % m).modpow(exp, m);
}

///Multiplicative inverse through Fermat's little theorem: `a^(m-2) mod m`.
///
///`m` must be prime. The inverse of zero is not checked for, and comes out as zero.
pub fn inv_mod(a: &BigUint, m: &BigUint) -> BigUint {
    return pow_mod(a, &(m - 2u32), m);
}
