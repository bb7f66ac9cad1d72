//! Core domain for issue-ops.
//!
//! This crate turns GitHub event content into the text appended to repository
//! files: collection-index records from issue-form submissions, and README
//! lines from pizza orders. Infrastructure crates supply the event content and
//! implement [`RecordSink`]; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`GitHubLogin`, `InvocationId`) |
//! | [`collection`] | Issue-form parsing and collection-index rendering |
//! | [`order`] | Order records, amount derivation, README line rendering |
//! | [`sink`] | The `RecordSink` port and the two use cases |
//! | [`errors`] | Domain and sink error types |

pub mod collection;
pub mod errors;
pub mod identifiers;
pub mod order;
pub mod sink;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use collection::{normalise_header, split_lines, CollectionField, CollectionIndexEntry};
pub use errors::{FormsError, SinkError};
pub use identifiers::{GitHubLogin, InvocationId};
pub use order::{render_order_line, OrderAmount, OrderRecord};
pub use sink::{index_collection, record_order, RecordSink};
