//! Recursive tree rendering
//!
//! This module provides `TreeRenderer`, which walks a directory subtree
//! depth-first and writes one line per entry to a `WriteColor` sink. The
//! root's own name is never printed; only descendants appear. All glyph
//! state is carried in the accumulated prefix string, which is extended by
//! value on every descent, so one subtree's rendering can never observe
//! another branch's state.

use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::Result;
use crate::listing::{Entry, read_entries};

/// Corner glyph for the last entry of a sibling group.
const CORNER_LAST: &str = "└───";
/// Corner glyph for every other entry.
const CORNER_MID: &str = "├───";
/// Prefix segment beneath an ancestor that was not last in its group.
const CONTINUATION: &str = "│\t";
/// Prefix segment beneath an ancestor that was last.
const INDENT: &str = "\t";

/// Format a file's byte count for display.
///
/// Zero renders as the token `empty`; anything else as the decimal digits
/// followed by `b`. No KB/MB conversion.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        "empty".to_string()
    } else {
        format!("{bytes}b")
    }
}

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Show regular files as well as directories.
    pub include_files: bool,
    /// Style directory names on the sink.
    pub use_color: bool,
}

/// Renderer for streaming tree output.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the subtree rooted at `path` to `out`.
    ///
    /// Any listing failure aborts the whole render and propagates; lines
    /// already written to the sink stay written. An empty root renders
    /// nothing at all.
    pub fn render<W: WriteColor>(&self, path: &Path, out: &mut W) -> Result<()> {
        self.render_dir(path, "", out)
    }

    fn render_dir<W: WriteColor>(&self, path: &Path, prefix: &str, out: &mut W) -> Result<()> {
        let entries = read_entries(path, self.config.include_files)?;

        let count = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == count;
            self.write_line(entry, prefix, is_last, out)?;

            if entry.is_dir {
                // The callee gets its own extension of the prefix; this
                // frame's copy stays untouched for the next sibling.
                let child_prefix = if is_last {
                    format!("{prefix}{INDENT}")
                } else {
                    format!("{prefix}{CONTINUATION}")
                };
                self.render_dir(&path.join(&entry.name), &child_prefix, out)?;
            }
        }

        Ok(())
    }

    fn write_line<W: WriteColor>(
        &self,
        entry: &Entry,
        prefix: &str,
        is_last: bool,
        out: &mut W,
    ) -> Result<()> {
        let corner = if is_last { CORNER_LAST } else { CORNER_MID };
        write!(out, "{prefix}{corner}")?;

        if entry.is_dir {
            if self.config.use_color {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", entry.name)?;
            if self.config.use_color {
                out.reset()?;
            }
            writeln!(out)?;
        } else {
            writeln!(out, "{} ({})", entry.name, format_size(entry.size))?;
        }

        Ok(())
    }
}
