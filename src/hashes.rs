/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use num_bigint::BigUint;
use sha3::{
    Keccak256,
    Digest
};
use crate::types::{FieldElement, Scalar};

///Hash bytes to bytes, domain separated.
///The domain is appended to the message.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::default();
    hasher.update(msg);
    hasher.update(domain);
    return hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length");
}

///Hash bytes to a field element, domain separated.
pub fn domain_h_field(msg: &[u8], domain: &[u8]) -> FieldElement {
    return FieldElement::reduce(&BigUint::from_bytes_be(&domain_h_bytes(msg, domain)));
}

///Hash bytes to bytes with Keccak-256.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::default();
    hasher.update(msg);
    return hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length");
}

///Hash bytes to a scalar: the big-endian digest reduced modulo `n`.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(h_bytes(msg));
}
