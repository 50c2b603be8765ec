/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///Decode the ring and check that there is exactly one response per member.
pub(crate) fn ring_members(ring: &Ring, responses: &[Scalar]) -> Result<Vec<Point>, SignatureError> {
    let members = ring.members()?;
    if responses.len() != members.len() {
        return Err(SignatureError::ResponseCountMismatch {
            members: members.len(),
            responses: responses.len()
        })
    }
    return Ok(members)
}

///Hash the next challenge of the chain.
///
///`first` (the message, and for linkable signatures the link tag) is only mixed in
///when leaving member 0.
pub(crate) fn next_challenge(index: usize, first: &[&[u8]], parts: &[&[u8]]) -> Scalar {
    let mut preimage: Vec<u8> = Vec::new();
    if index == 0 {
        preimage.extend(first.concat());
    }
    preimage.extend(parts.concat());
    return h_scalar(&preimage)
}

///Log the outcome of a verification and pass it through.
pub(crate) fn log_outcome(
    kind: &'static str, result: Result<bool, SignatureError>
) -> Result<bool, SignatureError> {
    match &result {
        Ok(valid) => debug!(kind, valid, "verified ring signature"),
        Err(err) => debug!(kind, %err, "rejected malformed ring signature")
    }
    return result
}
