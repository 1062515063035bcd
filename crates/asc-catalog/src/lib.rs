//! ASC Capability Catalog
//!
//! Typed vocabulary shared by every stage of the coordination pipeline.
//!
//! # Core Concepts
//!
//! - [`Skill`]: A capability tag a task may require and a role may satisfy
//! - [`AgentRole`]: A typed category of agent (coordinator, deep reasoner, ...)
//! - [`CapabilityCatalog`]: Fixed, ordered mapping from role to skills
//!
//! The catalog is built once and shared by reference. There is no API for
//! mutating it after construction.
//!
//! # Example
//!
//! ```rust
//! use asc_catalog::{AgentRole, CapabilityCatalog, Skill};
//!
//! let catalog = CapabilityCatalog::shared();
//! assert_eq!(catalog.first_role_with(Skill::Analysis, &[]), Some(AgentRole::Tot));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod role;
mod skill;

pub use catalog::{CapabilityCatalog, CatalogEntry};
pub use error::ParseLabelError;
pub use role::AgentRole;
pub use skill::Skill;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
