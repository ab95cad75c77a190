//! # Inline Parsing
//!
//! Two-phase conversion of an inline message into a chain:
//!
//! 1. **`scanner`** cuts the message at every loose `[PREFIX:...]` match.
//! 2. **`grammar`** checks each run against the strict tag grammar; runs that
//!    fail are kept as text, the rest are decoded by **`parser`**.
//!
//! Both phases are single forward passes over bytes via **`cursor`**.
//! **`notation`** owns the delimiters and the configurable prefix.

pub mod cursor;
pub mod grammar;
pub mod notation;
pub mod parser;
pub mod scanner;

pub use notation::{Notation, default_notation};
pub use parser::{decode_code, parse_chain, parse_chain_or_default};
