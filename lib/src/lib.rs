#![cfg_attr(not(test), no_std)]

pub mod codec;
pub mod errors;
pub mod transition;
pub mod types;
pub mod validation;


pub use errors::{ErrorKind, EventError};
pub use transition::{apply, check_invariants};
pub use types::*;

/// Note every creating transaction must carry.
pub const PROVENANCE_NOTE: &[u8] = b"eventmarketer:uv1";

// Call ABI
pub const BOOK_TAG: &[u8] = b"book";
pub const SELL_TAG: &[u8] = b"sell";
pub const CREATE_ARG_COUNT: u32 = 5;
pub const BOOK_ARG_COUNT: u32 = 3;
pub const SELL_ARG_COUNT: u32 = 2;

/// A lease travels as exactly one control call plus one payment.
pub const LEASE_GROUP_SIZE: u32 = 2;

pub const MAX_FIELD_LENGTH: u32 = 128;

// Instance storage TTL, in ledgers (~5 s each).
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 1_036_800; // ~60 days
