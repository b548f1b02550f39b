//! Password hashing, strength policy, and random credential generation.

pub mod hasher;
pub mod policy;
pub mod random;

pub use hasher::*;
pub use policy::*;
pub use random::*;
