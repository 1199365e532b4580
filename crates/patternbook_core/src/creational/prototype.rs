//! Prototype clone over a file-tree model.
//!
//! # Responsibility
//! - Deep-clone a folder hierarchy, marking every cloned node by name.
//!
//! The node set is closed (files and folders), so the hierarchy is a
//! tagged enum instead of a clone-trait object graph.

/// A node in the prototype hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File {
        name: String,
    },
    Folder {
        name: String,
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a leaf file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self::File { name: name.into() }
    }

    /// Creates a folder node with the given children.
    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    /// Name of this node.
    pub fn name(&self) -> &str {
        match self {
            Self::File { name } | Self::Folder { name, .. } => name,
        }
    }

    /// Clones the whole hierarchy, appending `_clone` to every name.
    ///
    /// The clone shares no state with the original; mutating one never
    /// affects the other.
    pub fn deep_clone(&self) -> Node {
        match self {
            Self::File { name } => Self::File {
                name: format!("{name}_clone"),
            },
            Self::Folder { name, children } => Self::Folder {
                name: format!("{name}_clone"),
                children: children.iter().map(Node::deep_clone).collect(),
            },
        }
    }

    /// Renders the hierarchy as an indented listing, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.name());
        out.push('\n');
        if let Self::Folder { children, .. } = self {
            for child in children {
                child.render_into(out, depth + 1);
            }
        }
    }
}
