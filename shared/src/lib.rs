//! jfrog-shared - scaffolding shared by the JFrog Terraform provider family
//!
//! The pieces every provider repeats: the loosely-typed value and state
//! types, schema model, payload↔state packing, attribute predicates,
//! provider/resource lifecycle scaffolding, and the field validators run
//! during plan.

// Core modules
pub mod error;
pub mod schema;
pub mod types;

// State conversion
pub mod packer;
pub mod predicate;
pub mod unpacker;

// Lifecycle scaffolding
pub mod util;

// Validation
pub mod validator;

// Helper modules
pub mod logging;
pub mod testutil;

// Re-exports for convenience
pub use error::{Result, SharedError};
pub use logging::init_logging;
pub use predicate::AttributePredicate;
pub use schema::{Attribute, AttributeBuilder, AttributeType, Schema, SchemaBuilder};
pub use types::{
    AttributePath, Config, Diagnostic, Diagnostics, Dynamic, ResourceState,
};
pub use unpacker::Identifiable;
pub use util::provider::{JFrogProvider, Provider};
pub use util::resource::{JFrogResource, Resource};
pub use util::ProviderMetadata;
