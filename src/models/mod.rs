//! Data models for the contact list.
//!
//! `Contact` is what the store holds and the API returns; `ContactInput`
//! is what callers send on create and update.

pub mod contact;

pub use contact::{Contact, ContactInput};
