//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use ghostcipher::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let alphabet = registry.alphabet("ghost").unwrap();
//! let encoded = encode("hi", &alphabet).unwrap();
//! assert_eq!(decode(&encoded, &alphabet).unwrap(), "hi");
//! ```

pub use crate::{
    Alphabet,
    AlphabetNotFoundError,
    AlphabetRegistry,

    DecodeError,
    EncodeError,

    // Core codec
    decode,
    encode,
    // Steganographic layer
    hide,
    reveal,
};
