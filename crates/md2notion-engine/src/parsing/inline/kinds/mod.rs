//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` runs; raw zone that suppresses other parsing
//! - **`Link`**: `[label](destination "title")`
//! - **`Emphasis`**: `*`, `_` and `~~` delimiter runs with flanking rules
//! - **`Autolink`**: bare `http(s)://` URLs
//! - **`Escape`**: backslash escapes of ASCII punctuation
//!
//! The parser calls these; it never hardcodes delimiter bytes itself.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use autolink::Autolink;
pub use code_span::{CodeSpan, TickRuns};
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::{Link, LinkIndex, LinkMatch};
