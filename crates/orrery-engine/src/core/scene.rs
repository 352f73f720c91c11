use crate::api::types::NodeId;
use crate::components::node::Node;

/// Arena of scene nodes addressed by `NodeId`.
///
/// Parents are always spawned before their children, so a single forward pass
/// over the arena computes every world transform. Nodes are never removed.
pub struct Scene {
    nodes: Vec<Node>,
    /// Set when a local transform changes, cleared after propagate.
    dirty: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            dirty: false,
        }
    }

    /// Add a root node.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        self.insert(node, None)
    }

    /// Add a node under `parent`. Falls back to a root if `parent` is unknown.
    pub fn spawn_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        if parent.index() >= self.nodes.len() {
            log::warn!("spawn_child: unknown parent {:?}, spawning as root", parent);
            return self.insert(node, None);
        }
        let id = self.insert(node, Some(parent));
        self.nodes[parent.index()].children.push(id);
        id
    }

    fn insert(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.id = id;
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        self.dirty = true;
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Mutable access. Call `mark_dirty` after changing a local transform.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute world transforms from local transforms.
    pub fn propagate(&mut self) {
        if !self.dirty {
            return;
        }
        for i in 0..self.nodes.len() {
            let local = self.nodes[i].local.matrix();
            let world = match self.nodes[i].parent {
                Some(p) => self.nodes[p.index()].world * local,
                None => local,
            };
            self.nodes[i].world = world;
        }
        self.dirty = false;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
