//! 4Phones Validation Core
//!
//! Pure Rust rules for the register and contact forms, plus the small amount of
//! state behind the page effects. Used natively in tests and by the WASM bindings
//! in the browser.

pub mod config;
pub mod effects;
pub mod email;
pub mod form;
pub mod password;
pub mod rules;
pub mod string;

pub use config::*;
pub use effects::*;
pub use email::*;
pub use form::*;
pub use password::*;
pub use rules::*;
pub use string::*;
