use crate::config::load_config;
use crate::data::{Member, parse_members};
use crate::layout::{compute_ancestors, layout_tree};
use crate::layout_dump::{LayoutDump, write_layout_json};
use anyhow::Result;
use clap::Parser;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kintree", version, about = "Deterministic family-tree layout engine")]
pub struct Args {
    /// Member data JSON file, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout JSON file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Restrict the view to this member's descendant subtree
    #[arg(short = 'f', long = "focus")]
    pub focus: Option<String>,

    /// Lay out the renumbered ancestor chain of this member instead
    #[arg(long = "ancestors", conflicts_with = "focus")]
    pub ancestors: Option<String>,

    /// Highlight members whose name contains this string
    #[arg(short = 's', long = "search", default_value = "")]
    pub search: String,

    /// Collapse a member's descendants (repeatable)
    #[arg(long = "collapse")]
    pub collapse: Vec<String>,

    /// Layout config JSON/JSON5 file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Viewport width the base generation is centered in
    #[arg(short = 'w', long = "viewportWidth")]
    pub viewport_width: Option<f32>,

    /// Offer edit/delete actions on every node
    #[arg(long = "edit")]
    pub edit: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.viewport_width {
        config.viewport.width = width;
    }

    let input = read_input(args.input.as_deref())?;
    let members = parse_members(&input)?;

    let working: Vec<Member> = match args.ancestors.as_deref() {
        Some(id) => {
            let chain = compute_ancestors(id, &members, 1);
            if chain.is_empty() {
                return Err(anyhow::anyhow!("member not found: {id}"));
            }
            chain
        }
        None => members,
    };

    let collapsed: HashMap<String, bool> = args
        .collapse
        .iter()
        .map(|id| (id.clone(), true))
        .collect();

    let layout = layout_tree(
        &working,
        &args.search,
        &collapsed,
        args.focus.as_deref(),
        &config.layout,
        args.edit,
        config.viewport.width,
    );
    let dump = LayoutDump::from_layout(&layout);
    write_layout_json(&dump, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
