/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use super::signature_utils::*;

///A (non-linkable) ring signature over secp256k1.
///
///Proves that one of the ring's public keys signed the message,
///without revealing which one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSignature {
    ///The claimed first challenge `c_0`; the chain must close back onto it.
    pub seed: Scalar,
    ///One response per ring member, in ring order.
    pub responses: Vec<Scalar>

} impl RingSignature {
    pub fn new(seed: Scalar, responses: Vec<Scalar>) -> Self {
        return Self{seed, responses}
    }

    ///Check this signature against a ring and a message.
    ///
    ///Returns `Ok(false)` if the signature does not verify,
    ///or `Err(SignatureError)` if the signature or ring are malformed.
    pub fn verify(&self, ring: &Ring, msg: &Message) -> Result<bool, SignatureError> {
        return verify_ring_signature(msg, ring, &self.responses, &self.seed)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingSignature {}

///Verify a ring signature.
///
///Starting from `seed`, each member `i` turns the current challenge `c` into
///`keccak256(id(responses[i] * G + c * ring[i])) mod n`, with the message prepended for member 0 only.
///The signature is valid iff the challenge after the last member equals `seed`.
///
///Fails (rather than returning `false`) if the ring encoding is malformed,
///the number of responses does not match, or a ring member is not on the curve.
pub fn verify_ring_signature(
    message: &Message, ring: &Ring, responses: &[Scalar], seed: &Scalar
) -> Result<bool, SignatureError> {
    return log_outcome("ring", verify_internal(message, ring, responses, seed))
}

fn verify_internal(
    message: &Message, ring: &Ring, responses: &[Scalar], seed: &Scalar
) -> Result<bool, SignatureError> {
    let members = ring_members(ring, responses)?;

    //travel around the ring
    let mut challenge = seed.clone();
    for (index, (member, response)) in members.iter().zip(responses).enumerate() {
        let id = mul_add(response, member, &challenge).to_identifier();
        challenge = next_challenge(index, &[&message[..]], &[&id.0[..]]);
        trace!(index, "challenge chain step");
    }

    //check if we end up back where we started
    return Ok(challenge == *seed)
}
