use crate::alphabet::Alphabet;
use crate::error::{DecodeError, EncodeError};

/// Encodes text as a string of invisible digits.
///
/// Each input character becomes exactly two alphabet digits: the high digit
/// `n / 16` followed by the low digit `n % 16`. Only code points up to
/// U+00FF fit this scheme; anything higher is rejected with
/// [`EncodeError::UnencodableCharacter`] rather than silently wrapping.
///
/// Output length is always twice the input length in characters; empty input
/// encodes to the empty string.
pub fn encode(text: &str, alphabet: &Alphabet) -> Result<String, EncodeError> {
    // Two digits per char, up to 3 bytes per digit in UTF-8.
    let mut result = String::with_capacity(text.len() * 6);

    for (position, c) in text.chars().enumerate() {
        let n = c as u32;
        let high = n / 16;
        let low = n % 16;

        let (Some(high_char), Some(low_char)) = (
            u8::try_from(high).ok().and_then(|d| alphabet.digit_char(d)),
            alphabet.digit_char(low as u8),
        ) else {
            return Err(EncodeError::UnencodableCharacter { char: c, position });
        };

        result.push(high_char);
        result.push(low_char);
    }

    Ok(result)
}

/// Decodes a string of invisible digits back into text.
///
/// The input must have even length in characters and consist solely of
/// alphabet digits. Each pair `(high, low)` reconstructs the code point
/// `high * 16 + low`, which is always in U+0000..=U+00FF.
///
/// # Errors
///
/// [`DecodeError::InvalidLength`] for odd-length input,
/// [`DecodeError::InvalidSymbol`] for the first character not in the
/// alphabet.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    let chars: Vec<char> = encoded.chars().collect();

    if chars.len() % 2 != 0 {
        return Err(DecodeError::InvalidLength {
            actual: chars.len(),
        });
    }

    let mut result = String::with_capacity(chars.len() / 2);

    for (pair_index, pair) in chars.chunks_exact(2).enumerate() {
        let high = alphabet
            .digit_value(pair[0])
            .ok_or_else(|| DecodeError::invalid_symbol(pair[0], pair_index * 2, encoded))?;
        let low = alphabet
            .digit_value(pair[1])
            .ok_or_else(|| DecodeError::invalid_symbol(pair[1], pair_index * 2 + 1, encoded))?;

        // high and low are both <= 15, so the value fits a byte.
        result.push(char::from(high * 16 + low));
    }

    Ok(result)
}
