//! Local persistence handle.
//!
//! Records are grouped into named collections and keyed by a numeric id.
//! Values are `pot`-encoded. The handle is passed explicitly to whatever
//! needs it; there is no global context.

mod sled;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

pub use self::sled::SledDb as Database;

pub type Key = u64;

pub trait Identifiable {
    fn get_id(&self) -> Key;
}

pub trait Collectable {
    fn get_collection_name() -> &'static str;
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let t: T = pot::from_slice(bytes)?;
    Ok(t)
}

pub fn encode<T: Serialize>(item: &T) -> Result<Vec<u8>> {
    let bytes = pot::to_vec(item)?;
    Ok(bytes)
}

/// Keys are stored big-endian so that collection iteration follows numeric
/// order.
pub(crate) fn key_bytes(key: Key) -> [u8; 8] {
    key.to_be_bytes()
}
