//! In-memory file-system tree: folders own ordered children, files are leaves.
//!
//! Only [`Folder`] can hold children. Its `add`/`remove` are infallible, so code
//! holding a `Folder` cannot misuse the tree. The uniform [`Node`] type keeps a
//! runtime capability check for the same operations and rejects leaves with
//! [`DomainError::UnsupportedOperation`].

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Depth increment per tree level when rendering.
pub const INDENT_STEP: usize = 2;

/// Character repeated `depth` times in front of every rendered line.
pub const INDENT_CHAR: char = '-';

/// Plain text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLeaf {
    name: String,
    size_kb: u64,
}

impl TextLeaf {
    pub fn new(name: impl Into<String>, size_kb: u64) -> Self {
        Self {
            name: name.into(),
            size_kb,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_kb(&self) -> u64 {
        self.size_kb
    }
}

/// Image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLeaf {
    name: String,
    size_kb: u64,
}

impl ImageLeaf {
    pub fn new(name: impl Into<String>, size_kb: u64) -> Self {
        Self {
            name: name.into(),
            size_kb,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_kb(&self) -> u64 {
        self.size_kb
    }
}

/// Composite node owning its children in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    children: Vec<Node>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Appends `child` after the existing children. Duplicates are kept.
    pub fn add(&mut self, child: impl Into<Node>) {
        let child = child.into();
        debug!(parent = %self.name, child = %child.name(), "add child");
        self.children.push(child);
    }

    /// Builder-style variant of [`Folder::add`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    /// Removes the first child equal to `child`.
    ///
    /// Returns whether a child was removed; an absent child leaves the folder
    /// untouched.
    pub fn remove(&mut self, child: &Node) -> bool {
        match self.children.iter().position(|c| c == child) {
            Some(pos) => {
                debug!(parent = %self.name, child = %child.name(), pos, "remove child");
                self.children.remove(pos);
                true
            }
            None => {
                debug!(parent = %self.name, child = %child.name(), "child not present");
                false
            }
        }
    }
}

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Image,
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Text => write!(f, "text"),
            NodeKind::Image => write!(f, "image"),
            NodeKind::Folder => write!(f, "folder"),
        }
    }
}

/// Any node of the tree, for uniform storage and traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextLeaf),
    Image(ImageLeaf),
    Folder(Folder),
}

impl From<TextLeaf> for Node {
    fn from(leaf: TextLeaf) -> Self {
        Node::Text(leaf)
    }
}

impl From<ImageLeaf> for Node {
    fn from(leaf: ImageLeaf) -> Self {
        Node::Image(leaf)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Text(leaf) => leaf.name(),
            Node::Image(leaf) => leaf.name(),
            Node::Folder(folder) => folder.name(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Image(_) => NodeKind::Image,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Children in insertion order. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => folder.children(),
            Node::Text(_) | Node::Image(_) => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Appends `child` to a folder; leaves reject the call.
    pub fn add_child(&mut self, child: impl Into<Node>) -> DomainResult<()> {
        match self {
            Node::Folder(folder) => {
                folder.add(child);
                Ok(())
            }
            leaf => Err(leaf.unsupported("add child")),
        }
    }

    /// Removes the first child equal to `child` from a folder; leaves reject the call.
    ///
    /// Removing a child the folder does not contain succeeds without changes.
    pub fn remove_child(&mut self, child: &Node) -> DomainResult<()> {
        match self {
            Node::Folder(folder) => {
                folder.remove(child);
                Ok(())
            }
            leaf => Err(leaf.unsupported("remove child")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> DomainError {
        debug!(node = %self.name(), operation, "rejected mutation on leaf");
        DomainError::UnsupportedOperation {
            operation,
            name: self.name().to_string(),
        }
    }

    /// Own size for leaves, recursive total for folders.
    pub fn size_kb(&self) -> u64 {
        match self {
            Node::Text(leaf) => leaf.size_kb(),
            Node::Image(leaf) => leaf.size_kb(),
            Node::Folder(folder) => folder.children().iter().map(Node::size_kb).sum(),
        }
    }

    /// Number of levels in this subtree; a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Names of all leaf nodes, left to right.
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| !node.is_composite())
            .map(|(_, node)| node.name().to_string())
            .collect()
    }

    /// Pre-order traversal yielding `(level, node)`, where `self` is level 0.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter {
            stack: vec![(0, self)],
        }
    }

    /// Human-readable label including sizes.
    pub fn label(&self) -> String {
        match self {
            Node::Text(leaf) => format!("{} ({} KB)", leaf.name(), leaf.size_kb()),
            Node::Image(leaf) => format!("{} ({} KB, image)", leaf.name(), leaf.size_kb()),
            Node::Folder(folder) => format!("[{}] (Total: {} KB)", folder.name(), self.size_kb()),
        }
    }

    /// One line per node: `depth` indent characters followed by the node name.
    ///
    /// A folder emits its own line first, then each child at `depth + INDENT_STEP`.
    #[instrument(level = "trace", skip(self), fields(node = %self.name()))]
    pub fn render_lines(&self, depth: usize) -> Vec<String> {
        self.iter()
            .map(|(level, node)| render_line(depth + level * INDENT_STEP, node))
            .collect()
    }

    /// [`Node::render_lines`] joined with newlines.
    pub fn render(&self, depth: usize) -> String {
        self.iter()
            .map(|(level, node)| render_line(depth + level * INDENT_STEP, node))
            .join("\n")
    }
}

fn render_line(depth: usize, node: &Node) -> String {
    format!("{}{}", INDENT_CHAR.to_string().repeat(depth), node.name())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub struct NodeIter<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}
