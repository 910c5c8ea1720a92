//! Loading steering files and navigating the parsed tree.

use crate::error::{Result, SteerDiffError};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw steering file contents, kept alive so parsed trees can borrow from it.
#[derive(Debug, Clone)]
pub struct SteeringFile {
    path: PathBuf,
    text: String,
}

impl SteeringFile {
    /// Read a steering file from disk.
    ///
    /// # Returns
    ///
    /// * `Ok(SteeringFile)` - File contents were read
    /// * `Err(SteerDiffError::Parse)` - File is missing or unreadable
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading steering file");

        let text = std::fs::read_to_string(path).map_err(|e| SteerDiffError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self::from_text(path, text))
    }

    /// Wrap already-loaded text; `path` is only used for error messages.
    pub fn from_text<P: AsRef<Path>>(path: P, text: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            text: text.into(),
        }
    }

    /// Path the contents were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the contents as XML. A `<!DOCTYPE>` declaration is accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(SteeringTree)` - Well-formed document
    /// * `Err(SteerDiffError::Parse)` - Malformed markup, with the parser's message
    pub fn parse(&self) -> Result<SteeringTree<'_>> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(&self.text, options).map_err(|e| {
            SteerDiffError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        debug!(
            path = %self.path.display(),
            root = document.root_element().tag_name().name(),
            "parsed steering file"
        );

        Ok(SteeringTree { document })
    }
}

/// A parsed, read-only steering document.
#[derive(Debug)]
pub struct SteeringTree<'input> {
    document: Document<'input>,
}

impl<'input> SteeringTree<'input> {
    /// Direct children of the root element with the given tag.
    pub fn top_level<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        children(self.document.root_element(), tag)
    }

    /// `<parameter>` nodes of every top-level `<global>` block, in document order.
    pub fn global_parameter_nodes(&self) -> impl Iterator<Item = Node<'_, 'input>> + '_ {
        self.top_level("global")
            .flat_map(|global| children(global, "parameter"))
    }

    /// Direct `tag` children of every `<execute>` section, in document order.
    pub fn execute_nodes<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        self.top_level("execute")
            .flat_map(move |execute| children(execute, tag))
    }
}

/// Element children of `node` named `tag`.
pub(super) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(tag))
}
