//! Typed bearer tokens: claims payloads, token kinds, and the signing service.

pub mod claims;
pub mod service;

pub use claims::*;
pub use service::*;
