//! Module for the depth-first walk expanding a semantic model into a tree of fixture files.

use serde_json::Value;
use tracing::trace;

use crate::{
    Error,
    domain::{IdGenerator, MANUFACTURER_NAME_POINTER, ModelTemplate, generate_batch},
    engine::suffix::SuffixCounters,
    output::{FixtureSink, TestCodeFormat},
};

/// Settings of one fixture tree.
#[derive(Debug)]
pub(crate) struct TreeBuilder<'a> {
    template: &'a ModelTemplate,
    file_prefix: String,
    num_relationships: usize,
    max_depth: usize,
    format: &'a TestCodeFormat,
}

/// Outcome of a walk.
#[derive(Debug)]
pub(crate) struct TreeSummary {
    pub(crate) root_id: String,
    pub(crate) nodes: usize,
    pub(crate) declarations: Vec<String>,
    pub(crate) calls: Vec<String>,
}

/// State threaded through the recursion
struct Walk<'s, S> {
    sink: &'s mut S,
    ids: IdGenerator,
    suffixes: SuffixCounters,
    nodes: usize,
    declarations: Vec<String>,
    calls: Vec<String>,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(
        template: &'a ModelTemplate,
        num_relationships: usize,
        max_depth: usize,
        format: &'a TestCodeFormat,
    ) -> Self {
        Self {
            template,
            file_prefix: template.full_name(),
            num_relationships,
            max_depth,
            format,
        }
    }

    /// Generates the whole tree into `sink`, starting with a fresh root identifier at depth 0.
    ///
    /// Nodes at depth `max_depth` are written without relationships, so the deepest files carry the
    /// level `max_depth + 1` in their names.
    pub(crate) fn build(
        &self,
        sink: &mut impl FixtureSink,
        ids: IdGenerator,
    ) -> Result<TreeSummary, Error> {
        let mut walk = Walk {
            sink,
            ids,
            suffixes: SuffixCounters::default(),
            nodes: 0,
            declarations: Vec::new(),
            calls: Vec::new(),
        };

        let root_id = walk.ids.next_id(self.template.id_prefix);
        self.visit(&mut walk, 0, &root_id)?;

        Ok(TreeSummary {
            root_id,
            nodes: walk.nodes,
            declarations: walk.declarations,
            calls: walk.calls,
        })
    }

    fn visit<S: FixtureSink>(
        &self,
        walk: &mut Walk<'_, S>,
        depth: usize,
        id: &str,
    ) -> Result<(), Error> {
        let suffix = walk.suffixes.get(depth)?;
        let level = depth + 1;

        let batch_file = format!("batch_{level}_{suffix}.json");
        let main_item_file = format!("{}_{level}_{suffix}.json", self.file_prefix);

        let stop = depth >= self.max_depth;
        let num_relationships = if stop { 0 } else { self.num_relationships };

        let batch = generate_batch(id);
        let main_item = self
            .template
            .generate_main_item(num_relationships, id, &mut walk.ids);

        walk.sink.write_json(&batch_file, &batch)?;
        walk.sink.write_json(&main_item_file, &main_item)?;
        walk.nodes += 1;
        trace!(level, suffix, id, "node written");

        if stop {
            return Ok(());
        }

        let variable = self.format.variable_name(level, suffix);
        let manufacturer_name = batch
            .pointer(MANUFACTURER_NAME_POINTER)
            .and_then(Value::as_str)
            .unwrap_or_default();
        let directory = walk.sink.directory_label();
        let call = self.format.call(
            &variable,
            manufacturer_name,
            &format!("{directory}/{batch_file}"),
            &format!("{directory}/{main_item_file}"),
        );
        walk.declarations.push(self.format.declaration(&variable, id));
        walk.calls.push(call);

        let child_ids: Vec<String> = self
            .template
            .relationship_ids(&main_item)
            .into_iter()
            .map(str::to_owned)
            .collect();

        walk.suffixes.initialize(depth + 1)?;
        for child_id in &child_ids {
            self.visit(walk, depth + 1, child_id)?;
            walk.suffixes.increment(depth + 1)?;
        }

        Ok(())
    }
}
