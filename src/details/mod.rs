//! Item details subsystem.
//!
//! # Data Flow
//! ```text
//! GET /items/{itemId}/subitems/{subitemId}
//!     → http handler (extract named path segments)
//!     → resolver.rs (substitute sentinel, shape response)
//!     → DetailsResponse (serialized as JSON)
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure function: no state, no I/O, safe to call concurrently
//! - Absent parameters become the numeric sentinel `-1`; empty strings are kept
//! - Metadata is created once at startup and shared read-only

pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{DetailsResponse, Metadata, ParamValue, SENTINEL};
