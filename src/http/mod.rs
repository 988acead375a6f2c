//! HTTP listener.
//!
//! Plain HTTP only. The listener runs until the process is terminated.

mod server;

pub use server::{bind_addr, serve, start_server, ServerError};
