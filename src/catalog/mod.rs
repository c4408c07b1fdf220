//! Destination catalog: records, slug codec, and the validated store.
//!
//! The catalog is static input data supplied by a content source (TOML
//! feed or the builtin campus set). Destination names are the primary key;
//! their encoded slugs define the address scheme.

pub mod destination;
pub mod slug;
mod store;

pub use destination::Destination;
pub use store::DestinationCatalog;
