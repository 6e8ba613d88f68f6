//! Invisible-ink text codec.
//!
//! Encodes text as pairs of zero-width Unicode characters drawn from a
//! 16-entry digit alphabet, and hides the result in plain sight by appending
//! it to ordinary carrier text. The scheme is exactly reversible for code
//! points up to U+00FF and makes no confidentiality or integrity claims:
//! the output is invisible, not secret.
//!
//! # Example
//!
//! ```
//! use ghostcipher::{Alphabet, hide, reveal};
//!
//! let alphabet = Alphabet::ghost();
//! let combined = hide("Nothing to see here.", "secret", &alphabet).unwrap();
//! assert_eq!(reveal(&combined, 6, &alphabet).unwrap(), "secret");
//! ```

mod alphabet;
mod codec;
mod config;
mod error;
mod stego;

pub mod prelude;

pub use alphabet::{ALPHABET_SIZE, Alphabet, GHOST_DIGITS};
pub use codec::{decode, encode};
pub use config::{AlphabetConfig, AlphabetRegistry, Settings};
pub use error::{AlphabetNotFoundError, DecodeError, EncodeError};
pub use stego::{hide, reveal};
