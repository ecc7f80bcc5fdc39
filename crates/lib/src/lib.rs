//! Typed client for the Intercom REST API: contacts, conversations, and segments.
//!
//! Each resource family has a repository trait (the transport seam) and a service that
//! builds queries and payloads before handing them to it. [`HttpClient`] implements every
//! repository over HTTPS; tests substitute in-memory doubles.

pub mod actor;
pub mod address;
pub mod client;
pub mod config;
pub mod contact;
pub mod conversation;
mod de;
pub mod error;
pub mod http;
pub mod page;
pub mod segment;

pub use actor::{Admin, User};
pub use address::{AddressKind, MessageAddress, MessagePerson};
pub use client::Intercom;
pub use error::{Error, Result};
pub use http::HttpClient;
pub use page::PageParams;
