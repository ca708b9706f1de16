//! Object explorer schema tree.
//!
//! The tree is seeded once at start-up and only the open/closed state of
//! folders ever changes. Nodes live in an arena indexed by id so a toggle is
//! a hash lookup instead of a full traversal.

mod seed;

use std::collections::HashMap;

use crate::error::ConsoleError;

pub use seed::default_schema;

/// Kind of explorer node. Only folders carry an open flag and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder { open: bool },
    Table,
    View,
    Procedure,
}

impl NodeKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, NodeKind::Folder { .. })
    }
}

/// Owned tree form used to seed and export the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn folder(id: &str, name: &str, open: bool, children: Vec<SchemaNode>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: NodeKind::Folder { open },
            children,
        }
    }

    pub fn table(id: &str, name: &str) -> Self {
        Self::leaf(id, name, NodeKind::Table)
    }

    pub fn view(id: &str, name: &str) -> Self {
        Self::leaf(id, name, NodeKind::View)
    }

    pub fn procedure(id: &str, name: &str) -> Self {
        Self::leaf(id, name, NodeKind::Procedure)
    }

    fn leaf(id: &str, name: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct ArenaNode {
    id: String,
    name: String,
    kind: NodeKind,
    children: Vec<usize>,
}

/// A node as seen by the explorer: resolved name, kind and nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub kind: NodeKind,
    pub depth: usize,
}

/// Arena-backed schema tree.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    nodes: Vec<ArenaNode>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl SchemaTree {
    /// Builds the arena from owned nodes.
    ///
    /// Fails on duplicate ids, and on non-folder nodes that carry children.
    pub fn new(roots: Vec<SchemaNode>) -> Result<Self, ConsoleError> {
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            index: HashMap::new(),
        };
        for root in roots {
            let idx = tree.insert(root)?;
            tree.roots.push(idx);
        }
        Ok(tree)
    }

    fn insert(&mut self, node: SchemaNode) -> Result<usize, ConsoleError> {
        if self.index.contains_key(&node.id) {
            return Err(ConsoleError::InvalidSchema(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
        if !node.kind.is_folder() && !node.children.is_empty() {
            return Err(ConsoleError::InvalidSchema(format!(
                "node '{}' is not a folder but has children",
                node.id
            )));
        }
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(ArenaNode {
            id: node.id,
            name: node.name,
            kind: node.kind,
            children: Vec::new(),
        });
        let mut children = Vec::with_capacity(node.children.len());
        for child in node.children {
            children.push(self.insert(child)?);
        }
        self.nodes[idx].children = children;
        Ok(idx)
    }

    /// Inverts the open flag of the folder with `id`.
    ///
    /// Returns `false` (tree unchanged) if no node has that id or the node is
    /// not a folder.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(&idx) = self.index.get(id) else {
            return false;
        };
        match &mut self.nodes[idx].kind {
            NodeKind::Folder { open } => {
                *open = !*open;
                true
            }
            _ => false,
        }
    }

    /// Open state of a folder; `None` for unknown ids and non-folders.
    pub fn is_open(&self, id: &str) -> Option<bool> {
        let idx = *self.index.get(id)?;
        match self.nodes[idx].kind {
            NodeKind::Folder { open } => Some(open),
            _ => None,
        }
    }

    /// Kind and display name of the node with `id`.
    pub fn lookup(&self, id: &str) -> Option<(NodeKind, &str)> {
        let idx = *self.index.get(id)?;
        let node = &self.nodes[idx];
        Some((node.kind, node.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first list of nodes whose ancestors are all open.
    pub fn visible(&self) -> Vec<VisibleNode<'_>> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&i| (i, 0)).collect();
        while let Some((idx, depth)) = stack.pop() {
            let node = &self.nodes[idx];
            out.push(VisibleNode {
                id: &node.id,
                name: &node.name,
                kind: node.kind,
                depth,
            });
            if let NodeKind::Folder { open: true } = node.kind {
                stack.extend(node.children.iter().rev().map(|&c| (c, depth + 1)));
            }
        }
        out
    }

    /// Exports the tree back to its owned form.
    pub fn to_nodes(&self) -> Vec<SchemaNode> {
        self.roots.iter().map(|&idx| self.export(idx)).collect()
    }

    fn export(&self, idx: usize) -> SchemaNode {
        let node = &self.nodes[idx];
        SchemaNode {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            children: node.children.iter().map(|&c| self.export(c)).collect(),
        }
    }
}
