// SPDX short identifier: Unlicense

//! A reference signer, used to produce signatures for the verifier under test.

#![allow(dead_code)]

use num_bigint::BigUint;

use secp256k1_ringsig::{
    common::*,
    field::{mul_mod, pow_mod, sub_mod},
    hashes::{domain_h_field, h_scalar},
    hash_to_curve::*,
    signature::{LinkabilityWitness, LinkableRingSignature, RingSignature}
};

///Parse a hex field element.
pub fn fe(hex: &str) -> FieldElement {
    return FieldElement::try_from(BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()).unwrap()
}

///Parse a hex scalar.
pub fn sc(hex: &str) -> Scalar {
    return Scalar::try_from(BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()).unwrap()
}

pub fn public_key(secret: &Scalar) -> Point {
    return ProjectivePoint::generator().mul(secret).to_affine().unwrap()
}

///Random private keys and the ring of their public keys.
pub fn random_ring(size: usize) -> (Vec<Scalar>, Ring) {
    let secrets: Vec<Scalar> = (0..size).map(|_| random_scalar()).collect();
    let points: Vec<Point> = secrets.iter().map(public_key).collect();
    return (secrets, Ring::from_points(&points))
}

///`alpha - challenge * secret mod n`
fn close_ring(alpha: &Scalar, challenge: &Scalar, secret: &Scalar) -> Scalar {
    let n = &*CURVE_ORDER;
    return Scalar::reduce(&sub_mod(
        alpha.as_biguint(),
        &mul_mod(challenge.as_biguint(), secret.as_biguint(), n),
        n
    ))
}

fn mul_add(k1: &Scalar, point: &Point, k2: &Scalar) -> ProjectivePoint {
    return ProjectivePoint::generator().mul(k1).add(&ProjectivePoint::from(point).mul(k2))
}

pub fn sign(message: &Message, ring: &Ring, secret: &Scalar, signer: usize) -> RingSignature {
    let members = ring.members().unwrap();
    let k = members.len();

    let step = |index: usize, point: &ProjectivePoint| -> Scalar {
        let id = point.to_identifier();
        return match index {
            0 => h_scalar(&[&message[..], &id.0[..]].concat()),
            _ => h_scalar(&id.0)
        }
    };

    let alpha = random_scalar();
    let mut responses = vec![Scalar::zero(); k];
    let mut challenges = vec![Scalar::zero(); k];

    challenges[(signer + 1) % k] = step(signer, &ProjectivePoint::generator().mul(&alpha));
    let mut i = (signer + 1) % k;
    while i != signer {
        responses[i] = random_scalar();
        challenges[(i + 1) % k] = step(i, &mul_add(&responses[i], &members[i], &challenges[i]));
        i = (i + 1) % k;
    }
    responses[signer] = close_ring(&alpha, &challenges[signer], secret);

    return RingSignature::new(challenges[0].clone(), responses)
}

///The added number and canonical cube root an honest prover supplies for `hash`.
pub fn find_witness(hash: &FieldElement) -> (FieldElement, FieldElement) {
    let p = &*FIELD_MODULUS;
    let exponent = (p + 2u32) / 9u32;
    let omega = CUBE_ROOT_OF_UNITY.as_biguint();

    for added in 0..MAX_ADDED_NUMBER {
        let u = FieldElement::reduce(&(hash.as_biguint() + added));
        let radicand = icart_radicand(&u);
        if !is_cubic_residue(&radicand) {
            continue
        }
        let root = pow_mod(radicand.as_biguint(), &exponent, p);
        let first = mul_mod(&root, omega, p);
        let second = mul_mod(&first, omega, p);
        let canonical = root.min(first).min(second);
        return (FieldElement::from(added), FieldElement::reduce(&canonical))
    }
    panic!("no cube found below MAX_ADDED_NUMBER");
}

///The hash-to-curve point of a public key under a link tag.
pub fn key_image_base(public: &Point, link: &LinkTag) -> Point {
    let hash = domain_h_field(&public.to_bytes(), link);
    let (added, root) = find_witness(&hash);
    return hash_to_curve(&hash, &added, &root).unwrap()
}

pub fn key_image(secret: &Scalar, link: &LinkTag) -> Point {
    let base = key_image_base(&public_key(secret), link);
    return ProjectivePoint::from(&base).mul(secret).to_affine().unwrap()
}

fn linkable_step(message: &Message, link: &LinkTag, index: usize, left: &ProjectivePoint, right: &ProjectivePoint) -> Scalar {
    let left = left.to_identifier();
    let right = right.to_identifier();
    return match index {
        0 => h_scalar(&[&message[..], &link[..], &left.0[..], &right.0[..]].concat()),
        _ => h_scalar(&[&left.0[..], &right.0[..]].concat())
    }
}

fn witness_for(base: &Point, key_image: &Point, response: &Scalar, challenge: &Scalar, link: &LinkTag, member: &Point) -> LinkabilityWitness {
    let hash = domain_h_field(&member.to_bytes(), link);
    let (added_number, cube_root_witness) = find_witness(&hash);
    return LinkabilityWitness {
        added_number,
        cube_root_witness,
        ec_hash: ProjectivePoint::from(base).mul(response).to_affine().unwrap(),
        key_image_challenge: ProjectivePoint::from(key_image).mul(challenge).to_affine().unwrap()
    }
}

pub fn sign_linkable(
    message: &Message, ring: &Ring, secret: &Scalar, signer: usize, link: &LinkTag
) -> LinkableRingSignature {
    let members = ring.members().unwrap();
    let k = members.len();
    let bases: Vec<Point> = members.iter().map(|member| key_image_base(member, link)).collect();
    let key_image = ProjectivePoint::from(&bases[signer]).mul(secret).to_affine().unwrap();

    let alpha = random_scalar();
    let mut responses = vec![Scalar::zero(); k];
    let mut challenges = vec![Scalar::zero(); k];

    challenges[(signer + 1) % k] = linkable_step(
        message, link, signer,
        &ProjectivePoint::generator().mul(&alpha),
        &ProjectivePoint::from(&bases[signer]).mul(&alpha)
    );
    let mut i = (signer + 1) % k;
    while i != signer {
        responses[i] = random_scalar();
        let right = ProjectivePoint::from(&bases[i]).mul(&responses[i])
            .add(&ProjectivePoint::from(&key_image).mul(&challenges[i]));
        challenges[(i + 1) % k] = linkable_step(
            message, link, i, &mul_add(&responses[i], &members[i], &challenges[i]), &right);
        i = (i + 1) % k;
    }
    responses[signer] = close_ring(&alpha, &challenges[signer], secret);

    let witnesses = (0..k).map(|i| witness_for(
        &bases[i], &key_image, &responses[i], &challenges[i], link, &members[i]
    )).collect();

    return LinkableRingSignature {
        seed: challenges[0].clone(),
        responses,
        link: *link,
        key_image,
        witnesses
    }
}

///Recompute every witness by walking the chain from the seed, as an honest prover would
///for whatever message, seed and responses the signature now holds.
///The result has consistent witnesses, so verification can only succeed or return `false`.
pub fn rederive_witnesses(signature: &mut LinkableRingSignature, ring: &Ring, message: &Message) {
    let members = ring.members().unwrap();
    let mut challenge = signature.seed.clone();
    for (i, member) in members.iter().enumerate() {
        let base = key_image_base(member, &signature.link);
        let witness = witness_for(
            &base, &signature.key_image, &signature.responses[i], &challenge, &signature.link, member);
        let right = ProjectivePoint::from(&witness.ec_hash)
            .add(&ProjectivePoint::from(&witness.key_image_challenge));
        challenge = linkable_step(
            message, &signature.link, i,
            &mul_add(&signature.responses[i], member, &challenge), &right);
        signature.witnesses[i] = witness;
    }
}
