/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use serde::{
    Serialize,
    Deserialize,
};
pub use crate::errors::SerializationError;

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`) bytes
///for the signature and ring types in this crate.
///
///Deserialization rejects scalars and coordinates which are not reduced.
///It does not check that points are on the curve; verification does that.
#[cfg(feature = "to_bytes")]
pub trait ToBytes<'a>: Sized + Serialize + Deserialize<'a> {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return bincode::serialize(self)
            .map_err(|_| SerializationError::EncodingError)
    }

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, SerializationError> {
        return bincode::deserialize(bytes)
            .map_err(|_| SerializationError::DecodingError)
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for crate::types::Ring {}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for crate::types::Point {}
