use crate::data::Member;

/// A member that survived visibility resolution, tagged with the generation it
/// is displayed at. `display_generation` equals the stored generation in the
/// unfocused view and is renumbered from 1 when a focus root is active.
#[derive(Debug, Clone)]
pub struct VisibleMember {
    pub member: Member,
    pub display_generation: u32,
    pub is_highlighted: bool,
    pub is_collapsed: bool,
    pub has_children: bool,
}

impl VisibleMember {
    pub fn id(&self) -> &str {
        &self.member.id
    }
}

/// Commands the renderer may offer for a node. Layout decides which commands
/// apply; it never executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction {
    Select,
    ToggleCollapse,
    Edit,
    Delete,
}

impl NodeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeAction::Select => "select",
            NodeAction::ToggleCollapse => "toggleCollapse",
            NodeAction::Edit => "edit",
            NodeAction::Delete => "delete",
        }
    }
}

/// A visible member with final coordinates. `x`/`y` are the node's top-left
/// corner in the renderer's coordinate space.
#[derive(Debug, Clone)]
pub struct PositionedNode {
    pub member: VisibleMember,
    pub x: f32,
    pub y: f32,
    pub actions: Vec<NodeAction>,
}

impl PositionedNode {
    pub fn id(&self) -> &str {
        self.member.id()
    }
}

/// Parent-to-child relation between two visible members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Output of one layout pass. Recomputed from scratch on every call; nothing
/// is carried between invocations.
#[derive(Debug, Clone)]
pub struct TreeLayout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub width: f32,
    pub height: f32,
}

impl TreeLayout {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}
