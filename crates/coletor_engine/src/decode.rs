use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}")]
    DecodeFailure { encoding: String },
}

/// Transcode BOM-marked input to plain UTF-8 without the BOM.
///
/// Unmarked bytes are returned untouched so the JSON parser reports any
/// problem with them.
pub fn normalize_to_utf8(bytes: &[u8]) -> Result<Cow<'_, [u8]>, DecodeError> {
    let Some((encoding, bom_len)) = Encoding::for_bom(bytes) else {
        return Ok(Cow::Borrowed(bytes));
    };
    let body = &bytes[bom_len..];
    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(body));
    }

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(Cow::Owned(text.into_owned().into_bytes()))
}
