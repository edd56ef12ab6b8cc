use std::collections::{HashMap, HashSet};
use std::path::Path;

use kintree::{LayoutConfig, Member, TreeLayout, layout_tree, load_members};

fn fixture(name: &str) -> Vec<Member> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_members(&path).unwrap_or_else(|err| panic!("{name}: {err}"))
}

fn default_layout(members: &[Member]) -> TreeLayout {
    layout_tree(
        members,
        "",
        &HashMap::new(),
        None,
        &LayoutConfig::default(),
        false,
        1200.0,
    )
}

fn assert_layout_invariants(layout: &TreeLayout, fixture_name: &str) {
    let config = LayoutConfig::default();
    let ids: HashSet<&str> = layout.nodes.iter().map(|n| n.id()).collect();
    assert_eq!(
        ids.len(),
        layout.nodes.len(),
        "{fixture_name}: duplicate node ids"
    );

    for node in &layout.nodes {
        let expected = (node.member.display_generation - 1) as f32 * config.generation_spacing;
        assert_eq!(node.y, expected, "{fixture_name}: y off for {}", node.id());
        assert!(node.x.is_finite(), "{fixture_name}: non-finite x");
        assert!(
            !node.actions.is_empty(),
            "{fixture_name}: node without actions"
        );
    }

    for edge in &layout.edges {
        assert!(
            ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()),
            "{fixture_name}: dangling edge {} -> {}",
            edge.source,
            edge.target
        );
        let target = layout
            .nodes
            .iter()
            .find(|n| n.id() == edge.target)
            .unwrap();
        assert!(
            target.member.member.parents.contains(&edge.source),
            "{fixture_name}: edge without parent relation"
        );
    }
}

#[test]
fn all_fixtures_satisfy_layout_invariants() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = ["three_generations.json", "blended.json", "deep_chain.json"];
    for name in candidates {
        let members = fixture(name);
        let layout = default_layout(&members);
        assert_eq!(layout.nodes.len(), members.len(), "{name}: node count");
        assert_layout_invariants(&layout, name);

        let rerun = default_layout(&members);
        for (a, b) in layout.nodes.iter().zip(&rerun.nodes) {
            assert_eq!(a.id(), b.id(), "{name}: unstable order");
            assert_eq!((a.x, a.y), (b.x, b.y), "{name}: unstable positions");
        }
    }
}

#[test]
fn spouses_sit_next_to_each_other() {
    let members = fixture("three_generations.json");
    let layout = default_layout(&members);
    let config = LayoutConfig::default();
    let x_of = |id: &str| layout.nodes.iter().find(|n| n.id() == id).unwrap().x;
    assert_eq!(
        (x_of("henrik") - x_of("greta")).abs(),
        config.node_width + config.member_spacing
    );
}

#[test]
fn collapse_prunes_a_whole_branch() {
    let members = fixture("three_generations.json");
    let collapsed = HashMap::from([("paula".to_string(), true)]);
    let layout = layout_tree(
        &members,
        "",
        &collapsed,
        None,
        &LayoutConfig::default(),
        false,
        1200.0,
    );
    let ids: HashSet<&str> = layout.nodes.iter().map(|n| n.id()).collect();
    assert!(ids.contains("paula"));
    assert!(!ids.contains("cora"));
    assert!(!ids.contains("carl"));
    assert!(ids.contains("gus"));
    assert_layout_invariants(&layout, "three_generations.json (collapsed)");
}

#[test]
fn focus_renumbers_from_one() {
    let members = fixture("blended.json");
    let layout = layout_tree(
        &members,
        "",
        &HashMap::new(),
        Some("dan"),
        &LayoutConfig::default(),
        false,
        1200.0,
    );
    let ids: HashSet<&str> = layout.nodes.iter().map(|n| n.id()).collect();
    assert_eq!(ids, HashSet::from(["dan", "gio"]));
    let dan = layout.nodes.iter().find(|n| n.id() == "dan").unwrap();
    assert_eq!(dan.member.display_generation, 1);
    assert_eq!(dan.y, 0.0);
}

#[test]
fn search_marks_only_matching_nodes() {
    let members = fixture("blended.json");
    let layout = layout_tree(
        &members,
        "reyes",
        &HashMap::new(),
        None,
        &LayoutConfig::default(),
        false,
        1200.0,
    );
    let misses: Vec<&str> = layout
        .nodes
        .iter()
        .filter(|n| !n.member.is_highlighted)
        .map(|n| n.id())
        .collect();
    assert_eq!(misses, vec!["celia"]);
}

#[test]
fn deep_chain_stays_in_one_column() {
    let members = fixture("deep_chain.json");
    let layout = default_layout(&members);
    let first_x = layout.nodes[0].x;
    for node in &layout.nodes {
        assert!(
            (node.x - first_x).abs() < 1e-3,
            "chain drifted at {}",
            node.id()
        );
    }
    assert_eq!(layout.edges.len(), members.len() - 1);
}
