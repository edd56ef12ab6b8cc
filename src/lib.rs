#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod layout;
pub mod layout_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ConfigError, LayoutConfig, ViewportConfig, load_config};
pub use data::{Gender, Member, load_members, parse_members};
pub use layout::{
    Edge, NodeAction, PositionedNode, TreeLayout, VisibleMember, compute_ancestors,
    compute_descendants, layout_tree,
};
