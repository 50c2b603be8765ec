/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Ring signature verification.
//!
//!Given a ring of public keys, a message, one response per member and a seed,
//!check that the challenge chain closes, which proves that some member of the ring
//!signed the message without revealing which one.
//!The linkable variant additionally carries a key image,
//!which is identical for two signatures made by the same key under the same link tag.
//!
//!Only verification is provided.

mod ring;
mod linkable;
mod signature_utils;

pub use ring::{RingSignature, verify_ring_signature};
pub use linkable::{
    LinkabilityWitness,
    LinkableRingSignature,
    verify_linkable_ring_signature,
    is_linked
};
