//! PPL language server
//!
//! Hover documentation for the HP Prime Programming Language (PPL):
//!
//! - A compile-time registry mapping each PPL keyword to its structured
//!   documentation record (syntax, example, description)
//! - A markdown renderer for the records
//! - A hover provider and a minimal stdio Language Server exposing them

pub mod docs;
pub mod error;
pub mod hover;
pub mod server;

pub use error::{Result, ServerError};
pub use server::PplLanguageServer;
