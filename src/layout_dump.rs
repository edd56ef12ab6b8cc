use crate::layout::TreeLayout;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub name: String,
    pub generation: u32,
    pub x: f32,
    pub y: f32,
    pub is_highlighted: bool,
    pub is_collapsed: bool,
    pub has_children: bool,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDump {
    pub source: String,
    pub target: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &TreeLayout) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id().to_string(),
                name: node.member.member.name.clone(),
                generation: node.member.display_generation,
                x: node.x,
                y: node.y,
                is_highlighted: node.member.is_highlighted,
                is_collapsed: node.member.is_collapsed,
                has_children: node.member.has_children,
                actions: node
                    .actions
                    .iter()
                    .map(|action| action.as_str().to_string())
                    .collect(),
            })
            .collect();
        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();
        Self {
            nodes,
            edges,
            width: layout.width,
            height: layout.height,
        }
    }
}

pub fn write_layout_json(dump: &LayoutDump, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
