//! Theme system providing palette colors, typography, and layout dimensions.
//!
//! Themes support multiple variants (e.g., dark and light modes) with a
//! consistent set of semantic color tokens and size scales. Components never
//! read the theme global directly while deriving styles; they receive a
//! [`ThemeTokens`] view resolved once per render.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod tokens;
pub use tokens::*;
