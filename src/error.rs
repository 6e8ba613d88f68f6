use std::fmt;

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The input contains a character above U+00FF, which does not fit a
    /// single high/low digit pair
    UnencodableCharacter { char: char, position: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            EncodeError::UnencodableCharacter { char: c, position } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m character '{}' (U+{:04X}) at position {} cannot be encoded",
                        c, *c as u32, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: character '{}' (U+{:04X}) at position {} cannot be encoded",
                        c, *c as u32, position
                    )?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m only code points up to U+00FF fit a two-digit pair"
                    )?;
                } else {
                    write!(f, "hint: only code points up to U+00FF fit a two-digit pair")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur during decoding or revealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The encoded input has odd length and cannot be split into digit pairs
    InvalidLength { actual: usize },
    /// The input contains a character that is not one of the 16 digits
    InvalidSymbol {
        char: char,
        position: usize,
        input: String,
    },
    /// `reveal` was asked for more trailing digits than the text contains
    InsufficientLength { needed: usize, available: usize },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context.
    pub fn invalid_symbol(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs (by characters; digits are multi-byte UTF-8)
        let display_input: String = input.chars().take(60).collect();

        DecodeError::InvalidSymbol {
            char: c,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidLength { actual } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid length for decode")?;
                } else {
                    writeln!(f, "error: invalid length for decode")?;
                }
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} characters, expected an even count",
                    actual
                )?;
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m every encoded character is exactly two digits; check for truncation"
                    )?;
                } else {
                    write!(
                        f,
                        "hint: every encoded character is exactly two digits; check for truncation"
                    )?;
                }
                Ok(())
            }
            DecodeError::InvalidSymbol {
                char: c,
                position,
                input,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid symbol U+{:04X} at position {}",
                        *c as u32, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid symbol U+{:04X} at position {}",
                        *c as u32, position
                    )?;
                }
                writeln!(f)?;

                // Show the input with a caret pointing at the error position.
                // The characters are invisible, so render them as codepoints.
                let tokens: Vec<String> = input
                    .chars()
                    .map(|ch| format!("U+{:04X}", ch as u32))
                    .collect();
                writeln!(f, "  {}", tokens.join(" "))?;
                if *position < tokens.len() {
                    let caret_offset: usize =
                        tokens[..*position].iter().map(|t| t.len() + 1).sum();
                    write!(f, "  {}", " ".repeat(caret_offset))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m the input contains a character outside the 16-digit alphabet; was it produced with a different alphabet?"
                    )?;
                } else {
                    write!(
                        f,
                        "hint: the input contains a character outside the 16-digit alphabet; was it produced with a different alphabet?"
                    )?;
                }
                Ok(())
            }
            DecodeError::InsufficientLength { needed, available } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m not enough trailing digits to reveal")?;
                } else {
                    writeln!(f, "error: not enough trailing digits to reveal")?;
                }
                writeln!(f)?;
                writeln!(
                    f,
                    "  need {} trailing characters, text has {}",
                    needed, available
                )?;
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m the secret length is tracked by the caller; check it matches what was hidden"
                    )?;
                } else {
                    write!(
                        f,
                        "hint: the secret length is tracked by the caller; check it matches what was hidden"
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`ghostcipher --list`\x1b[0m to see all alphabets"
            )?;
        } else {
            write!(f, "      run `ghostcipher --list` to see all alphabets")?;
        }

        Ok(())
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    if available.is_empty() {
        return None;
    }

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for alphabet_name in available {
        let distance = levenshtein_distance(name, alphabet_name);

        // Only suggest small edit distances (typos, not different names)
        let threshold = if name.len() < 5 { 2 } else { 3 };

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(alphabet_name.clone());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("ghost", "ghost"), 0);
        assert_eq!(levenshtein_distance("ghost", "gost"), 1);
        assert_eq!(levenshtein_distance("tags", "tag"), 1);
        assert_eq!(levenshtein_distance("", "ghost"), 5);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "ghost".to_string(),
            "variation".to_string(),
            "tags".to_string(),
        ];

        assert_eq!(
            find_closest_alphabet("gohst", &names),
            Some("ghost".to_string())
        );
        assert_eq!(
            find_closest_alphabet("variatoin", &names),
            Some("variation".to_string())
        );
        assert_eq!(find_closest_alphabet("base64", &names), None);
    }

    #[test]
    fn test_invalid_symbol_display_no_color() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::invalid_symbol('a', 2, "\u{200B}\u{200C}a\u{200C}");
        let display = format!("{}", err);

        assert!(display.contains("invalid symbol U+0061 at position 2"));
        assert!(display.contains("U+200B U+200C U+0061 U+200C"));
        // Caret sits under the third token: two 7-column tokens before it.
        assert!(display.contains(&format!("  {}^", " ".repeat(14))));
        assert!(display.contains("hint:"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_insufficient_length_display() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::InsufficientLength {
            needed: 20,
            available: 5,
        };
        let display = format!("{}", err);

        assert!(display.contains("need 20 trailing characters"));
        assert!(display.contains("text has 5"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_alphabet_not_found_display() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = AlphabetNotFoundError::new("gohst", Some("ghost".to_string()));
        let display = format!("{}", err);

        assert!(display.contains("alphabet 'gohst' not found"));
        assert!(display.contains("did you mean 'ghost'?"));
        assert!(display.contains("ghostcipher --list"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }
}
