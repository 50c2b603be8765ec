/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Hash-to-curve witness errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashToCurveError {
    ///The cube root witness does not satisfy the cubic identity.
    InvalidCubeRoot,
    ///The cube root witness is valid, but is not the least of its three conjugates.
    NonCanonicalCubeRoot,
    ///The added number is not below `MAX_ADDED_NUMBER`.
    AddedNumberTooLarge,
    ///A smaller added number already yields a cube.
    NonMinimalAddedNumber,

} impl Display for HashToCurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidCubeRoot => "Invalid cube root witness.",
            Self::NonCanonicalCubeRoot => "Cube root witness is not canonical.",
            Self::AddedNumberTooLarge => "Added number is too large.",
            Self::NonMinimalAddedNumber => "Added number is not minimal."
        })
    }

} impl Error for HashToCurveError {}

///Which of the two linkability witness points failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessPoint {
    ///`response * H`, where `H` is the member's hash-to-curve point.
    EcHash,
    ///`challenge * key_image`.
    KeyImageChallenge,
}

///Ring signature errors.
///
///Every variant describes a malformed proof or malformed parameters.
///A well-formed signature which simply does not verify is reported as `Ok(false)`,
///never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The flat ring encoding has an odd length, or describes fewer than `MIN_RING_SIZE` members.
    MalformedRing { len: usize },
    ///The number of responses differs from the number of ring members.
    ResponseCountMismatch { members: usize, responses: usize },
    ///The number of linkability witnesses differs from the number of ring members.
    WitnessCountMismatch { members: usize, witnesses: usize },
    ///Ring member `index` does not satisfy the curve equation.
    PointNotOnCurve { index: usize },
    ///The signer's key image does not satisfy the curve equation.
    KeyImageNotOnCurve,
    ///A point supplied in the linkability witness of member `index` is not on the curve.
    WitnessPointNotOnCurve { index: usize },
    ///The hash-to-curve witness (added number and cube root) of member `index` is invalid.
    InvalidHashToCurveWitness { index: usize, reason: HashToCurveError },
    ///A linkability witness point of member `index` does not match the recomputed point.
    LinkabilityWitnessMismatch { index: usize, witness: WitnessPoint },

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRing { len } =>
                write!(f, "Malformed ring: {len} coordinates."),
            Self::ResponseCountMismatch { members, responses } =>
                write!(f, "Ring has {members} members but {responses} responses were given."),
            Self::WitnessCountMismatch { members, witnesses } =>
                write!(f, "Ring has {members} members but {witnesses} linkability witnesses were given."),
            Self::PointNotOnCurve { index } =>
                write!(f, "Ring member {index} is not on the curve."),
            Self::KeyImageNotOnCurve =>
                write!(f, "The key image is not on the curve."),
            Self::WitnessPointNotOnCurve { index } =>
                write!(f, "A witness point of ring member {index} is not on the curve."),
            Self::InvalidHashToCurveWitness { index, reason } =>
                write!(f, "Ring member {index}: {reason}"),
            Self::LinkabilityWitnessMismatch { index, witness } =>
                write!(f, "Linkability witness {witness:?} of ring member {index} does not match."),
        }
    }

} impl Error for SignatureError {}
