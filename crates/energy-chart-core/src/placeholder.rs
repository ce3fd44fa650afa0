// File: crates/energy-chart-core/src/placeholder.rs
// Summary: The page container a chart renders into, plus an in-memory implementation.

use crate::geometry::Point;
use crate::text::{FixedTextMeasure, TextMeasure, TextSize, TextStyle};

/// Handle to a node inserted into a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Absolutely positioned text element, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub text: String,
    pub style: TextStyle,
    pub left: f32,
    pub top: f32,
}

impl Overlay {
    pub fn new(text: impl Into<String>, style: TextStyle, left: f32, top: f32) -> Self {
        Self { text: text.into(), style, left, top }
    }
}

/// Child of a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Surface { width: u32, height: u32 },
    Overlay(Overlay),
}

/// The container element a chart is rendered into. Exposes its current
/// pixel size, can have its content replaced and accepts absolutely
/// positioned overlay elements after the drawing surface.
pub trait Placeholder {
    /// Current rendered `(width, height)`; may be zero or negative when hidden.
    fn size(&self) -> (i32, i32);
    /// Page position of the drawing surface's top-left corner.
    fn position(&self) -> Point;
    /// Remove every child.
    fn clear(&mut self);
    /// Append a drawing surface node of the given size.
    fn attach_surface(&mut self, width: u32, height: u32) -> NodeId;
    fn insert_overlay(&mut self, overlay: Overlay) -> NodeId;
    /// Remove a node; returns whether it existed.
    fn remove(&mut self, id: NodeId) -> bool;
    /// Rendered extent of an overlay node.
    fn extent(&self, id: NodeId) -> Option<TextSize>;
    fn overlays(&self) -> Vec<(NodeId, Overlay)>;
}

/// Headless placeholder holding its children in insertion order.
pub struct MemoryPlaceholder {
    width: i32,
    height: i32,
    position: Point,
    children: Vec<(NodeId, Node)>,
    next_id: u64,
    measure: Box<dyn TextMeasure>,
}

impl MemoryPlaceholder {
    /// A placeholder at the page origin measuring text with [`FixedTextMeasure`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_measure(width, height, Box::new(FixedTextMeasure::default()))
    }

    pub fn with_measure(width: i32, height: i32, measure: Box<dyn TextMeasure>) -> Self {
        Self { width, height, position: Point::default(), children: Vec::new(), next_id: 0, measure }
    }

    pub fn at(mut self, left: f32, top: f32) -> Self {
        self.position = Point::new(left, top);
        self
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().map(|(_, n)| n)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Overlays carrying the given style class.
    pub fn overlays_with_class(&self, class: &str) -> Vec<&Overlay> {
        self.children
            .iter()
            .filter_map(|(_, n)| match n {
                Node::Overlay(o) if o.style.has_class(class) => Some(o),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.children.push((id, node));
        id
    }
}

impl Placeholder for MemoryPlaceholder {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn position(&self) -> Point {
        self.position
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn attach_surface(&mut self, width: u32, height: u32) -> NodeId {
        self.push(Node::Surface { width, height })
    }

    fn insert_overlay(&mut self, overlay: Overlay) -> NodeId {
        self.push(Node::Overlay(overlay))
    }

    fn remove(&mut self, id: NodeId) -> bool {
        let before = self.children.len();
        self.children.retain(|(nid, _)| *nid != id);
        self.children.len() != before
    }

    fn extent(&self, id: NodeId) -> Option<TextSize> {
        self.children.iter().find(|(nid, _)| *nid == id).and_then(|(_, n)| match n {
            Node::Overlay(o) => Some(self.measure.measure(&o.text, &o.style)),
            Node::Surface { width, height } => Some(TextSize { width: *width as f32, height: *height as f32 }),
        })
    }

    fn overlays(&self) -> Vec<(NodeId, Overlay)> {
        self.children
            .iter()
            .filter_map(|(id, n)| match n {
                Node::Overlay(o) => Some((*id, o.clone())),
                Node::Surface { .. } => None,
            })
            .collect()
    }
}
