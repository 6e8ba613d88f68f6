use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of digits in every alphabet: the codec is strictly base-16.
pub const ALPHABET_SIZE: usize = 16;

/// The canonical "ghost" digit table, in wire order.
///
/// Zero-width space, zero-width non-joiner, zero-width joiner, word joiner,
/// the invisible operators U+2061..U+2064, the deprecated formatting block
/// U+206A..U+206F, the BOM (as ZWNBSP), and the interlinear annotation
/// anchor. This exact table in this exact order is the interoperability
/// contract: two implementations only agree on encoded text if their tables
/// are byte-identical.
pub const GHOST_DIGITS: [char; ALPHABET_SIZE] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}',
    '\u{2061}', '\u{2062}', '\u{2063}', '\u{2064}',
    '\u{206A}', '\u{206B}', '\u{206C}', '\u{206D}',
    '\u{206E}', '\u{206F}', '\u{FEFF}', '\u{FFF9}',
];

/// A base-16 digit alphabet: an ordered, duplicate-free set of exactly 16
/// characters, with forward (digit value to character) and reverse
/// (character to digit value) lookup.
///
/// Alphabets are immutable once constructed and safe to share across threads
/// without synchronization.
#[derive(Debug, Clone)]
pub struct Alphabet {
    digits: [char; ALPHABET_SIZE],
    char_to_value: HashMap<char, u8>,
}

impl Alphabet {
    /// Creates an alphabet from exactly 16 characters in digit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 16 characters or
    /// contains duplicates.
    pub fn new(chars: Vec<char>) -> Result<Self, String> {
        let digits: [char; ALPHABET_SIZE] = chars.try_into().map_err(|v: Vec<char>| {
            format!(
                "Alphabet must have exactly {} characters, got {}",
                ALPHABET_SIZE,
                v.len()
            )
        })?;

        let mut char_to_value = HashMap::with_capacity(ALPHABET_SIZE);
        for (i, &c) in digits.iter().enumerate() {
            if char_to_value.insert(c, i as u8).is_some() {
                return Err(format!(
                    "Duplicate character in alphabet: U+{:04X}",
                    c as u32
                ));
            }
        }

        Ok(Alphabet {
            digits,
            char_to_value,
        })
    }

    /// Creates an alphabet from a 16-character string.
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// The canonical invisible alphabet ([`GHOST_DIGITS`]).
    ///
    /// The table and its reverse lookup are built once per process and
    /// cloned per call.
    pub fn ghost() -> Self {
        static GHOST: LazyLock<Alphabet> = LazyLock::new(|| {
            // The constant table is well-formed; construction cannot fail.
            match Alphabet::new(GHOST_DIGITS.to_vec()) {
                Ok(alphabet) => alphabet,
                Err(_) => unreachable!("GHOST_DIGITS is a valid alphabet"),
            }
        });

        GHOST.clone()
    }

    /// Maps a digit value (0-15) to its character.
    ///
    /// Returns `None` if the value is out of range.
    pub fn digit_char(&self, value: u8) -> Option<char> {
        self.digits.get(value as usize).copied()
    }

    /// Maps a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn digit_value(&self, c: char) -> Option<u8> {
        self.char_to_value.get(&c).copied()
    }

    /// Returns true if the character is one of the 16 digits.
    pub fn contains(&self, c: char) -> bool {
        self.char_to_value.contains_key(&c)
    }

    /// The digits in order, as a slice.
    pub fn digits(&self) -> &[char] {
        &self.digits
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ghost()
    }
}
