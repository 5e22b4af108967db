//! Generic paged query engine.
//!
//! Turns a flat query descriptor (`page`, `take`, `orderby`, `direction` and
//! `where__<field>` / `like__<field>` filters) into one fetch + count round-trip against a
//! collection and wraps the result in the uniform `Page` envelope.
//!
//! # Pieces
//!
//! - `descriptor` - Parses a descriptor into a `NormalizedFilter` and `SortClause`
//! - `collection` - Per-collection schema of filterable/sortable fields and its fallback sort
//! - `source` - The `PageSource` storage seam and its SeaORM implementation
//! - `executor` - `get_paged_results`, the entry point used by every repository
//! - `registry` - Name-addressed, type-erased collections for generic browsing
//!
//! # Flow
//!
//! 1. Controller validates `page`/`take` into a `PageRequest`
//! 2. Repository calls `get_paged_results` with its `EntitySource`
//! 3. Executor parses the descriptor and computes the offset
//! 4. Source resolves fields against the collection schema, then fetches and counts inside
//!    one transaction
//! 5. Executor assembles `Page { data, info }`

pub mod collection;
pub mod descriptor;
pub mod executor;
pub mod registry;
pub mod source;

pub use collection::{Collection, FieldKind};
pub use executor::get_paged_results;
pub use registry::CollectionRegistry;
pub use source::{EntitySource, Json, Models, PageQuery, PageSource, Projection};

#[cfg(test)]
mod test;
