use std::io::{self, Write};

use tracing::warn;

use super::{ConfigTree, format_key};

/// Depth at which rendering stops descending unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A node the renderer could not print normally.
///
/// Diagnostics are written inline and collected; they never abort the pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDiagnostic {
    /// The node's variant matched no rendering rule
    UnrenderableValue {
        /// Key the node was rendered under (empty for sequence elements)
        key: String,
        /// Depth of the node
        depth: usize,
        /// Raw textual form of the value
        raw: String,
        /// Type description of the value
        type_name: String,
    },
    /// The node sits deeper than the configured limit and was skipped
    DepthExceeded {
        /// Key the node was rendered under
        key: String,
        /// Depth of the node
        depth: usize,
        /// Configured limit
        limit: usize,
    },
}

/// Renders a [`ConfigTree`] as indented, human-readable text.
///
/// Line rules:
/// - scalars print `<indent><Key>: <value>`, floats truncated toward zero
/// - mappings print a blank line and a `<Key>` header (when keyed), then
///   their entries in ascending key order one level deeper, then a blank line
/// - a `handlers` sequence of scalars prints inline as `<Key>: [ a,b ]`
/// - other sequences print a header like mappings, then each element
///   unkeyed one level deeper
#[derive(Debug, Clone)]
pub struct Renderer {
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Renderer {
    /// Creates a renderer that will not descend below `max_depth`.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Writes `tree` under `key` starting at `depth`.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        tree: &ConfigTree,
        key: &str,
        depth: usize,
    ) -> io::Result<Vec<RenderDiagnostic>> {
        let mut pass = RenderPass {
            out,
            max_depth: self.max_depth,
            diagnostics: Vec::new(),
        };

        pass.node(tree, key, depth)?;
        Ok(pass.diagnostics)
    }

    /// Renders into a string, returning the text and any diagnostics.
    pub fn render_to_string(
        &self,
        tree: &ConfigTree,
        key: &str,
        depth: usize,
    ) -> (String, Vec<RenderDiagnostic>) {
        let mut buffer = Vec::new();
        let diagnostics = self
            .render(&mut buffer, tree, key, depth)
            .unwrap_or_default();

        (String::from_utf8_lossy(&buffer).into_owned(), diagnostics)
    }
}

struct RenderPass<'a, W: Write> {
    out: &'a mut W,
    max_depth: usize,
    diagnostics: Vec<RenderDiagnostic>,
}

impl<W: Write> RenderPass<'_, W> {
    fn node(&mut self, tree: &ConfigTree, key: &str, depth: usize) -> io::Result<()> {
        let indent = "  ".repeat(depth);

        if depth > self.max_depth {
            return self.depth_exceeded(&indent, key, depth);
        }

        match tree {
            ConfigTree::String(s) => writeln!(self.out, "{indent}{}: {s}", format_key(key)),
            ConfigTree::Integer(i) => writeln!(self.out, "{indent}{}: {i}", format_key(key)),
            ConfigTree::Float(f) => {
                writeln!(self.out, "{indent}{}: {}", format_key(key), *f as i128)
            }
            ConfigTree::Null => writeln!(self.out, "{indent}{}: null", format_key(key)),
            ConfigTree::Mapping(entries) => self.mapping(entries, &indent, key, depth),
            ConfigTree::Sequence(items) => self.sequence(items, &indent, key, depth),
            ConfigTree::Unknown { raw, type_name } => {
                self.unrenderable(&indent, key, depth, raw, type_name)
            }
        }
    }

    fn header(&mut self, indent: &str, key: &str) -> io::Result<()> {
        if key.is_empty() {
            return Ok(());
        }

        writeln!(self.out)?;
        writeln!(self.out, "{indent}{}", format_key(key))
    }

    fn mapping(
        &mut self,
        entries: &[(String, ConfigTree)],
        indent: &str,
        key: &str,
        depth: usize,
    ) -> io::Result<()> {
        self.header(indent, key)?;

        let mut sorted: Vec<&(String, ConfigTree)> = entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        for (child_key, child) in sorted {
            self.node(child, child_key, depth + 1)?;
        }

        writeln!(self.out)
    }

    fn sequence(
        &mut self,
        items: &[ConfigTree],
        indent: &str,
        key: &str,
        depth: usize,
    ) -> io::Result<()> {
        if key == "handlers" {
            let inline: Option<Vec<String>> = items.iter().map(ConfigTree::scalar_text).collect();

            if let Some(values) = inline {
                return writeln!(
                    self.out,
                    "{indent}{}: [ {} ]",
                    format_key(key),
                    values.join(",")
                );
            }
        }

        self.header(indent, key)?;

        for item in items {
            self.node(item, "", depth + 1)?;
        }

        Ok(())
    }

    fn unrenderable(
        &mut self,
        indent: &str,
        key: &str,
        depth: usize,
        raw: &str,
        type_name: &str,
    ) -> io::Result<()> {
        warn!(key, depth, type_name, "unrenderable value");

        writeln!(self.out, "{indent}! unrenderable value for '{}'", format_key(key))?;
        writeln!(self.out, "{indent}  {raw} ({type_name})")?;

        self.diagnostics.push(RenderDiagnostic::UnrenderableValue {
            key: key.to_string(),
            depth,
            raw: raw.to_string(),
            type_name: type_name.to_string(),
        });
        Ok(())
    }

    fn depth_exceeded(&mut self, indent: &str, key: &str, depth: usize) -> io::Result<()> {
        warn!(key, depth, limit = self.max_depth, "render depth limit exceeded");

        writeln!(
            self.out,
            "{indent}! depth limit {} exceeded at '{}'",
            self.max_depth,
            format_key(key)
        )?;

        self.diagnostics.push(RenderDiagnostic::DepthExceeded {
            key: key.to_string(),
            depth,
            limit: self.max_depth,
        });
        Ok(())
    }
}
