//! Route group handlers.
//!
//! Each submodule owns one mount point and exposes a `router()`; the
//! composition layer in [crate::setup::routes] nests them by prefix and
//! knows nothing about their internals.

pub mod auth;
pub mod cart;
pub mod health;
pub mod items;
pub mod orders;
pub mod payments;
pub mod upload;
