/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use super::signature_utils::*;

///Auxiliary per-member data of a linkable signature.
///
///The verifier checks these values rather than deriving them:
///the hash-to-curve witnesses because cube roots are not cheap to find,
///and the two points because the chain needs their sum as a full point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkabilityWitness {
    ///Smallest `a` such that `hash(P, link) + a` has a cube Icart radicand.
    pub added_number: FieldElement,
    ///The canonical cube root of that radicand.
    pub cube_root_witness: FieldElement,
    ///`response * H`, where `H` is the member's hash-to-curve point.
    pub ec_hash: Point,
    ///`challenge * key_image`, for the challenge entering this member.
    pub key_image_challenge: Point

} impl LinkabilityWitness {
    ///Number of field words per witness in the flat encoding.
    pub const WORDS: usize = 6;

    ///Flatten into `added_number, cube_root_witness, ec_hash.x, ec_hash.y, key_image_challenge.x, key_image_challenge.y`.
    pub fn to_words(&self) -> [FieldElement; 6] {
        return [
            self.added_number.clone(),
            self.cube_root_witness.clone(),
            self.ec_hash.x.clone(),
            self.ec_hash.y.clone(),
            self.key_image_challenge.x.clone(),
            self.key_image_challenge.y.clone()
        ]
    }

    ///Decode a flat sequence of witnesses, see `to_words`.
    pub fn from_words(words: &[FieldElement]) -> Result<Vec<Self>, SerializationError> {
        if words.len() % Self::WORDS != 0 {
            return Err(SerializationError::DecodingError)
        }
        return Ok(words.chunks_exact(Self::WORDS).map(|w| Self{
            added_number: w[0].clone(),
            cube_root_witness: w[1].clone(),
            ec_hash: Point::new(w[2].clone(), w[3].clone()),
            key_image_challenge: Point::new(w[4].clone(), w[5].clone())
        }).collect())
    }
}

///A linkable ring signature over secp256k1.
///
///LSAG-style: besides the usual chain over `response * G + challenge * P`,
///every member also contributes `response * H(P) + challenge * key_image`.
///Two signatures by the same key under the same link tag carry the same key image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkableRingSignature {
    pub seed: Scalar,
    pub responses: Vec<Scalar>,
    ///Scope of linkability.
    pub link: LinkTag,
    pub key_image: Point,
    pub witnesses: Vec<LinkabilityWitness>

} impl LinkableRingSignature {
    ///Check this signature against a ring and a message.
    ///
    ///Returns `Ok(false)` if the signature does not verify,
    ///or `Err(SignatureError)` if the signature or ring are malformed.
    pub fn verify(&self, ring: &Ring, msg: &Message) -> Result<bool, SignatureError> {
        return verify_linkable_ring_signature(
            msg,
            ring,
            &self.responses,
            &self.seed,
            &self.link,
            &self.key_image,
            &self.witnesses
        )
    }

    ///A short value derived from the key image.
    ///Equal tags under the same link tag mean the same signer.
    pub fn linkage_tag(&self) -> Identifier {
        return points_to_identifier(&self.key_image)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for LinkableRingSignature {}

///Whether two linkable signatures were made with the same key under the same link tag.
///
///This says nothing about validity: verify both signatures first.
pub fn is_linked(first: &LinkableRingSignature, second: &LinkableRingSignature) -> bool {
    return first.link == second.link && first.key_image == second.key_image
}

///Check the linkability witness of member `index` and return `response * H + challenge * key_image`.
fn check_linkability_witness(
    index: usize,
    member: &Point,
    response: &Scalar,
    challenge: &Scalar,
    link: &LinkTag,
    key_image: &Point,
    witness: &LinkabilityWitness
) -> Result<ProjectivePoint, SignatureError> {
    if !witness.ec_hash.is_on_curve() || !witness.key_image_challenge.is_on_curve() {
        return Err(SignatureError::WitnessPointNotOnCurve { index })
    }

    let hash = domain_h_field(&member.to_bytes(), link);
    let h = canonical_hash_to_curve(&hash, &witness.added_number, &witness.cube_root_witness)
        .map_err(|reason| SignatureError::InvalidHashToCurveWitness { index, reason })?;

    //0 * G + response * H
    let ec_hash = mul_add(&Scalar::zero(), &h, response);
    if ec_hash.to_identifier() != points_to_identifier(&witness.ec_hash) {
        return Err(SignatureError::LinkabilityWitnessMismatch { index, witness: WitnessPoint::EcHash })
    }

    //0 * G + challenge * key_image
    let key_image_challenge = mul_add(&Scalar::zero(), key_image, challenge);
    if key_image_challenge.to_identifier() != points_to_identifier(&witness.key_image_challenge) {
        return Err(SignatureError::LinkabilityWitnessMismatch { index, witness: WitnessPoint::KeyImageChallenge })
    }

    return Ok(ProjectivePoint::from(&witness.ec_hash).add(&ProjectivePoint::from(&witness.key_image_challenge)))
}

///Verify a linkable ring signature.
///
///Each member `i` turns the current challenge `c` into
///`keccak256(id(responses[i] * G + c * P_i) || id(responses[i] * H_i + c * key_image)) mod n`,
///where `H_i` is the hash-to-curve point of `P_i` under `link`.
///The message and link tag are prepended for member 0 only.
///
///Fails (rather than returning `false`) on any malformed input:
///ring shape, response or witness counts, points off the curve, or an invalid witness.
pub fn verify_linkable_ring_signature(
    message: &Message,
    ring: &Ring,
    responses: &[Scalar],
    seed: &Scalar,
    link: &LinkTag,
    signer_key_image: &Point,
    linkability_witnesses: &[LinkabilityWitness]
) -> Result<bool, SignatureError> {
    return log_outcome("linkable", verify_internal(
        message, ring, responses, seed, link, signer_key_image, linkability_witnesses))
}

fn verify_internal(
    message: &Message,
    ring: &Ring,
    responses: &[Scalar],
    seed: &Scalar,
    link: &LinkTag,
    key_image: &Point,
    witnesses: &[LinkabilityWitness]
) -> Result<bool, SignatureError> {
    let members = ring_members(ring, responses)?;
    if witnesses.len() != members.len() {
        return Err(SignatureError::WitnessCountMismatch {
            members: members.len(),
            witnesses: witnesses.len()
        })
    }
    if !key_image.is_on_curve() {
        return Err(SignatureError::KeyImageNotOnCurve)
    }

    //travel around the ring
    let mut challenge = seed.clone();
    for (index, member) in members.iter().enumerate() {
        let response = &responses[index];
        let link_point = check_linkability_witness(
            index, member, response, &challenge, link, key_image, &witnesses[index])?;

        let left = mul_add(response, member, &challenge).to_identifier();
        let right = link_point.to_identifier();
        challenge = next_challenge(index, &[&message[..], &link[..]], &[&left.0[..], &right.0[..]]);
        trace!(index, "linkable challenge chain step");
    }

    //check if we end up back where we started
    return Ok(challenge == *seed)
}
