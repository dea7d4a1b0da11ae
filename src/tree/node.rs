//! Virtual filesystem node types

/// Name of the root directory, which is the path separator itself.
pub const ROOT_NAME: &str = "/";

/// How a file's stored payload is encoded in the tree source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportEncoding {
    /// Payload is the literal text.
    #[default]
    None,
    /// Payload is base64 text wrapping arbitrary bytes.
    Base64,
}

impl TransportEncoding {
    /// Parse an `encoding` attribute. Anything but `base64` means plain text.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("base64") => TransportEncoding::Base64,
            _ => TransportEncoding::None,
        }
    }
}

/// File leaf: stored payload plus its transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content: String,
    pub encoding: TransportEncoding,
}

impl File {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        encoding: TransportEncoding,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            encoding,
        }
    }
}

/// Directory node. Children keep declaration order for stable listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    children: Vec<Node>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Empty root directory.
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a child, replacing any sibling with the same name.
    ///
    /// The replacement takes the position of the sibling it displaces.
    /// Returns the displaced node, if any.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        match self.children.iter().position(|c| c.name() == node.name()) {
            Some(idx) => Some(std::mem::replace(&mut self.children[idx], node)),
            None => {
                self.children.push(node);
                None
            }
        }
    }

    /// Total number of nodes below this directory.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                Node::Directory(d) => 1 + d.descendant_count(),
                Node::File(_) => 1,
            })
            .sum()
    }
}

/// Owned tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(d) => &d.name,
            Node::File(f) => &f.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Directory(d) => NodeRef::Directory(d),
            Node::File(f) => NodeRef::File(f),
        }
    }
}

/// Borrowed view of a node, as produced by path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Directory(&'a Directory),
    File(&'a File),
}

impl<'a> NodeRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Directory(d) => &d.name,
            NodeRef::File(f) => &f.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, NodeRef::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, NodeRef::File(_))
    }

    pub fn as_directory(&self) -> Option<&'a Directory> {
        match self {
            NodeRef::Directory(d) => Some(d),
            NodeRef::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&'a File> {
        match self {
            NodeRef::File(f) => Some(f),
            NodeRef::Directory(_) => None,
        }
    }
}
