//! Data models for the TDX web API.
//!
//! This module contains the login bodies, the ticket search body, and the
//! summary views the tools render for tickets, forms and feed entries.

mod auth;
mod feed;
mod form;
mod ticket;

pub use auth::*;
pub use feed::*;
pub use form::*;
pub use ticket::*;
