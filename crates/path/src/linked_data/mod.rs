pub use cid::Cid;

#[derive(Debug, thiserror::Error)]
pub enum CidError {
    #[error("invalid cid: {0}")]
    Invalid(#[from] cid::Error),
}

/// Decode a textual content identifier.
pub fn decode_cid(s: &str) -> Result<Cid, CidError> {
    Ok(Cid::try_from(s)?)
}

/// Decode a raw binary content identifier.
///  This never goes through the textual grammar.
pub fn decode_cid_bytes(b: &[u8]) -> Result<Cid, CidError> {
    Ok(Cid::try_from(b)?)
}

pub fn is_valid_cid_str(s: &str) -> bool {
    Cid::try_from(s).is_ok()
}

pub fn is_valid_cid_bytes(b: &[u8]) -> bool {
    Cid::try_from(b).is_ok()
}
