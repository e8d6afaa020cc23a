//! Module for the types defining the fixture domain: semantic-model templates, the items generated from them,
//! and the identifiers linking parents to children.

mod id;
mod registry;
mod template;

pub(crate) use id::IdGenerator;
pub use registry::SemanticModel;
pub(crate) use template::{ModelTemplate, generate_batch};

/// Prefix shared by all generated identifiers
pub(crate) const ID_PREFIX: &str = "urn:uuid:";

/// Path of the manufacturer name inside a batch record, as a JSON pointer
pub(crate) const MANUFACTURER_NAME_POINTER: &str = "/partTypeInformation/nameAtManufacturer";
