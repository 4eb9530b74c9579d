//! Action functions: the use-case entry points of the state layer
//!
//! Each action composes a [`ServerApi`](crate::client::ServerApi) client
//! with the [`Store`](crate::store::Store): dispatch a started change,
//! issue the request, then dispatch exactly one terminal batch (a
//! received+success pair, or a failure plus a log entry). Failures are
//! absorbed into store state and never returned to the caller.

pub mod channels;
pub mod errors;
pub mod files;
pub mod general;
pub mod users;

pub(crate) mod helpers;
