//! Module materializing main items, relationship items and batch records from the registry skeletons.

use serde_json::Value;

use crate::domain::{
    IdGenerator,
    registry::{BATCH_ID_KEY, batch_skeleton},
};

/// Immutable description of a singleLevel semantic model.
///
/// The skeletons are never mutated: every generated item starts as a deep copy.
#[derive(Debug, Clone)]
pub(crate) struct ModelTemplate {
    pub(crate) name: &'static str,
    pub(crate) main_item: Value,
    pub(crate) relationship_item: Value,
    pub(crate) main_item_id_key: &'static str,
    pub(crate) relationships_key: &'static str,
    pub(crate) relationship_item_id_key: &'static str,
    pub(crate) id_prefix: &'static str,
}

impl ModelTemplate {
    /// Generates a main item with the given `id`.
    ///
    /// With `num_relationships > 0`, the relationships array is filled with that many relationship items,
    /// each carrying a freshly generated identifier. Otherwise the skeleton's (empty) array is kept.
    pub(crate) fn generate_main_item(
        &self,
        num_relationships: usize,
        id: &str,
        ids: &mut IdGenerator,
    ) -> Value {
        let mut item = self.main_item.clone();
        item[self.main_item_id_key] = Value::from(id);

        if num_relationships > 0 {
            let relationships = (0..num_relationships)
                .map(|_| self.generate_relationship_item(ids))
                .collect();
            item[self.relationships_key] = Value::Array(relationships);
        }

        item
    }

    pub(crate) fn generate_relationship_item(&self, ids: &mut IdGenerator) -> Value {
        let mut item = self.relationship_item.clone();
        item[self.relationship_item_id_key] = Value::from(ids.next_id(self.id_prefix));
        item
    }

    /// The identifiers of the relationship items of a main item generated from this template
    pub(crate) fn relationship_ids<'a>(&self, main_item: &'a Value) -> Vec<&'a str> {
        main_item[self.relationships_key]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item[self.relationship_item_id_key].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Camel-cased name used in file names, e.g. `bom-as-built-3.0.0` becomes `BomAsBuilt-3.0.0`.
    ///
    /// The version part stays separated by a dash for readability.
    pub(crate) fn display_name(&self) -> String {
        let mut parts: Vec<String> = self.name.split('-').map(capitalize).collect();
        let version = parts.pop().unwrap_or_default();
        format!("{}-{version}", parts.concat())
    }

    /// `singleLevel` + display name, the prefix of main item file names and the default directory name
    pub(crate) fn full_name(&self) -> String {
        format!("singleLevel{}", self.display_name())
    }
}

/// Generates the batch record paired with the main item carrying `id`.
pub(crate) fn generate_batch(id: &str) -> Value {
    let mut batch = batch_skeleton();
    batch[BATCH_ID_KEY] = Value::from(id);
    batch
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
