//! Query and command services.
//!
//! The query service owns the cache-aside read path; the command service
//! owns writes, cache invalidation, and event publishing. Both receive
//! their store/cache/bus collaborators as injected handles.

pub mod command;
pub mod query;

pub use command::CommandService;
pub use query::QueryService;
