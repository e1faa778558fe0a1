//! Screen logic layer
//!
//! Owns widget state and decides what selected keys mean.
//! NO imports from frontend/.

pub mod name_entry;

pub use name_entry::{EntryOutcome, NameEntry};
