use thiserror::Error;

/// Added to every certification ID before it is put in a URL, so that
/// consecutive certificates don't get consecutive links.
pub const ID_OFFSET: u64 = 20_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Certification ID is not a number: {0:?}")]
    NotNumeric(String),

    #[error("Certification ID {0} is below the minimum encoded value")]
    BelowOffset(u128),

    #[error("Certification ID {0} is out of range")]
    OutOfRange(u128),
}

/// Hex-encode the UTF-8 bytes of `text` (lowercase, no `0x` prefix).
pub fn to_hex(text: &str) -> String {
    hex::encode(text)
}

/// Decode a hex string (optional `0x`, any case) back into text.
pub fn from_hex(encoded: &str) -> Result<String, CodecError> {
    let digits = encoded.strip_prefix("0x").unwrap_or(encoded);
    let bytes = hex::decode(digits)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

/// Encode a numeric certification ID for use in a certificate URL.
///
/// The URL carries the hex of the decimal digits of `id + ID_OFFSET + 1`,
/// e.g. `42` becomes `0x3230303030303433` ("20000043").
pub fn encode_certification_id(id: u64) -> String {
    // u128 keeps the shift lossless for every u64 ID.
    let shifted = u128::from(id) + u128::from(ID_OFFSET) + 1;
    format!("0x{}", to_hex(&shifted.to_string()))
}

/// Inverse of [`encode_certification_id`].
pub fn decode_certification_id(encoded: &str) -> Result<u64, CodecError> {
    let text = from_hex(encoded)?;
    let value: u128 = text
        .trim()
        .parse()
        .map_err(|_| CodecError::NotNumeric(text.clone()))?;

    if value <= u128::from(ID_OFFSET) {
        return Err(CodecError::BelowOffset(value));
    }

    let id = value - u128::from(ID_OFFSET) - 1;
    u64::try_from(id).map_err(|_| CodecError::OutOfRange(value))
}

/// Strip the `0x` prefix and zero padding from a 32-byte ledger word,
/// leaving an even number of hex digits.
pub fn strip_word_padding(word: &str) -> String {
    let digits = word.strip_prefix("0x").unwrap_or(word);
    let trimmed = digits.trim_start_matches('0');

    if trimmed.len() % 2 == 1 {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Decode a name stored as a zero-padded word on the ledger.
pub fn decode_ledger_name(word: &str) -> Result<String, CodecError> {
    from_hex(&strip_word_padding(word))
}
