use crate::alphabet::Alphabet;
use crate::codec::{decode, encode};
use crate::error::{DecodeError, EncodeError};

/// Appends an encoded secret to carrier text.
///
/// The carrier is copied verbatim and never inspected; a carrier that
/// already ends in alphabet digits (for example the output of a previous
/// `hide`) is accepted as-is. There is no delimiter and no embedded length:
/// the caller must remember the secret length in characters to get it back.
///
/// Returned length is `carrier + 2 * secret` in characters.
pub fn hide(carrier: &str, secret: &str, alphabet: &Alphabet) -> Result<String, EncodeError> {
    let encoded = encode(secret, alphabet)?;
    let mut combined = String::with_capacity(carrier.len() + encoded.len());
    combined.push_str(carrier);
    combined.push_str(&encoded);
    Ok(combined)
}

/// Extracts a hidden secret of known length from the tail of `combined`.
///
/// Takes the trailing `2 * secret_length` characters and decodes them; the
/// leading carrier portion is neither checked nor returned. Callers who want
/// the clean carrier slice it off themselves.
///
/// # Errors
///
/// [`DecodeError::InsufficientLength`] when the text is shorter than the
/// encoded secret would be; decode failures propagate unchanged.
pub fn reveal(
    combined: &str,
    secret_length: usize,
    alphabet: &Alphabet,
) -> Result<String, DecodeError> {
    let available = combined.chars().count();

    // 2 * secret_length can exceed usize; no text is ever long enough then.
    let Some(needed) = secret_length.checked_mul(2) else {
        return Err(DecodeError::InsufficientLength {
            needed: usize::MAX,
            available,
        });
    };

    if available < needed {
        return Err(DecodeError::InsufficientLength { needed, available });
    }

    let tail: String = combined
        .chars()
        .skip(available - needed)
        .collect();

    decode(&tail, alphabet)
}
