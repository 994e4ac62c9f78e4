//! Shared domain logic for the submission lookup app.
//!
//! Everything in this crate is target-agnostic: the Yew frontend compiles it
//! to wasm, the unit tests run it natively.

pub mod config;
pub mod error;
pub mod image;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod photo;
pub mod store;
