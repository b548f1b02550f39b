//! Authentication and request-rate protection core for the NourishSA food-donation
//! platform: stateless JWT issuance/verification, password hashing and strength policy,
//! and sliding-window rate limiting, composed by the surrounding HTTP handlers.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod obs;
pub mod password;
pub mod rate_limit;
pub mod token;
pub mod validate;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
	};

	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}
