//! Graphviz DOT output and engine invocation
//!
//! `DotGraph` is a `GraphSink` that accumulates DOT statements.
//! `GraphvizRenderer` pipes the DOT source into an external engine binary
//! on stdin and lets the engine write the image.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use famtree_core_types::PersonId;

use super::graph::{build_graph, EdgeLabel, GraphSink};
use crate::document::writer::atomic_write;
use crate::errors::{io_error, FamilyTreeError, Result};
use crate::ops::Store;
use crate::traversal::WalkGuard;
use crate::{log_op_end, log_op_error, log_op_start};

const COMMENT: &str = "Family Tree";

/// Default image file written by `GraphvizRenderer::render_default`
pub const DEFAULT_IMAGE_FILE: &str = "family_tree.png";

/// DOT digraph built through the `GraphSink` interface
#[derive(Debug, Clone, Default)]
pub struct DotGraph {
    seen: HashSet<PersonId>,
    nodes: Vec<String>,
    edges: Vec<String>,
}

impl DotGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// DOT source text
    pub fn source(&self) -> String {
        let mut out = format!("// {}\ndigraph {{\n", COMMENT);
        for line in self.nodes.iter().chain(self.edges.iter()) {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}

impl GraphSink for DotGraph {
    fn add_node(&mut self, id: &PersonId, label: &str) {
        if self.seen.insert(*id) {
            self.nodes
                .push(format!("\"{}\" [label=\"{}\"]", id, escape(label)));
        }
    }

    fn add_edge(&mut self, from: &PersonId, to: &PersonId, label: EdgeLabel) {
        self.edges
            .push(format!("\"{}\" -> \"{}\" [label={}]", from, to, label));
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the family reachable from `root` as DOT source
///
/// # Errors
/// * `PersonNotFound` - If `root` or a reachable person doesn't exist
/// * `CycleDetected` - If guarded and a person is their own ancestor
pub fn render_dot(store: &Store, root: &PersonId, guard: WalkGuard) -> Result<String> {
    let mut graph = DotGraph::new();
    build_graph(store, root, guard, &mut graph)?;
    Ok(graph.source())
}

/// Write DOT source for the family reachable from `root` to `target`
///
/// # Errors
/// * `PersonNotFound` / `CycleDetected` - As for `render_dot`
/// * `Io` - If the file cannot be written
pub fn write_dot(store: &Store, root: &PersonId, guard: WalkGuard, target: &Path) -> Result<()> {
    let source = render_dot(store, root, guard)?;
    atomic_write(target, source.as_bytes())
}

/// External Graphviz engine settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizRenderer {
    /// Engine binary, looked up on `PATH` unless absolute
    pub engine: String,
    /// Output format passed as `-T{format}`
    pub format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            engine: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Render the family reachable from `root` to `output`
    ///
    /// Parent directories of `output` are created as needed.
    ///
    /// # Errors
    /// * `PersonNotFound` / `CycleDetected` - As for `render_dot`
    /// * `Io` - If the output directory cannot be created
    /// * `RenderEngine` - If the engine cannot be started or exits non-zero
    pub fn render(
        &self,
        store: &Store,
        root: &PersonId,
        guard: WalkGuard,
        output: &Path,
    ) -> Result<()> {
        log_op_start!(
            "render_graphviz",
            person_id = %root,
            engine = %self.engine,
            path = %output.display()
        );
        let start = Instant::now();

        let result = render_dot(store, root, guard).and_then(|source| self.run(&source, output));
        if let Err(e) = &result {
            log_op_error!(
                "render_graphviz",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return result;
        }

        log_op_end!(
            "render_graphviz",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %output.display()
        );
        Ok(())
    }

    /// Render to `family_tree.png` (or the format's equivalent) in `dir`
    ///
    /// # Errors
    /// Same as `render`.
    pub fn render_default(
        &self,
        store: &Store,
        root: &PersonId,
        guard: WalkGuard,
        dir: &Path,
    ) -> Result<PathBuf> {
        let output = dir.join(DEFAULT_IMAGE_FILE).with_extension(&self.format);
        self.render(store, root, guard, &output)?;
        Ok(output)
    }

    fn run(&self, source: &str, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", e))?;
        }

        let mut child = Command::new(&self.engine)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FamilyTreeError::RenderEngine {
                message: format!("failed to start '{}': {}", self.engine, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| FamilyTreeError::RenderEngine {
                    message: format!("failed to write to '{}': {}", self.engine, e),
                })?;
        }

        let result = child
            .wait_with_output()
            .map_err(|e| FamilyTreeError::RenderEngine {
                message: format!("failed to wait for '{}': {}", self.engine, e),
            })?;

        if !result.status.success() {
            return Err(FamilyTreeError::RenderEngine {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.engine,
                    result.status,
                    String::from_utf8_lossy(&result.stderr).trim()
                ),
            });
        }

        Ok(())
    }
}
