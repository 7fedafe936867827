//! Registration Validation Core
//!
//! Pure rule functions shared by the server-side form, the CLI and the WASM
//! client. Nothing here knows about field names or user-facing messages;
//! the form crate maps each rule to its field and message.

pub mod email;
pub mod file;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use file::*;
pub use password::*;
pub use phone::*;
pub use string::*;
