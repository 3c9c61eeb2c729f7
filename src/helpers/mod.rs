//! Helper functions for building page markup

mod html;
mod url;

pub use html::*;
pub use url::*;
