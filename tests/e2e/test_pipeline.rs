//! End-to-end tests for the full layout pipeline.
//!
//! Each scenario feeds a small catalog and recommended set through
//! `build_skill_tree` / `build_staged_tree` and checks the resulting node
//! and edge lists as a renderer would consume them.

use skilltree_layout::{
    Course, LayoutConfig, SkillTree, StageGroup, build_skill_tree, build_staged_tree,
};

fn course(id: &str, prereqs: &[&str], skills: &[&str]) -> Course {
    Course::new(
        id,
        prereqs.iter().map(|s| s.to_string()).collect(),
        skills.iter().map(|s| s.to_string()).collect(),
    )
}

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn layer_of(tree: &SkillTree, id: &str) -> usize {
    tree.node(id).unwrap_or_else(|| panic!("missing node {id}")).layer
}

fn edge_ids(tree: &SkillTree) -> Vec<&str> {
    tree.edges.iter().map(|e| e.id.as_str()).collect()
}

// ─── Scenario: acyclic chain ─────────────────────────────────────────────────

#[test]
fn test_acyclic_chain_layers_and_edges() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &["s2"]),
        course("c", &["s1", "s2"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b", "c"]), &[]);

    assert_eq!(tree.nodes.len(), 3);
    assert_eq!(layer_of(&tree, "a"), 0);
    assert_eq!(layer_of(&tree, "b"), 1);
    assert_eq!(layer_of(&tree, "c"), 2);
    assert_eq!(edge_ids(&tree), vec!["a-b", "a-c", "b-c"]);
}

// ─── Scenario: two-course cycle ──────────────────────────────────────────────

#[test]
fn test_two_course_cycle_terminates() {
    let catalog = vec![
        course("x", &["sy"], &["sx"]),
        course("y", &["sx"], &["sy"]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["x", "y"]), &[]);

    // The traversal breaks the cycle at the first on-path revisit: the
    // revisited course counts as depth 0 there, then finalizes normally
    // from its own frame, so the pair settles at layers 1 and 2.
    assert_eq!(tree.nodes.len(), 2);
    assert_eq!(layer_of(&tree, "y"), 1);
    assert_eq!(layer_of(&tree, "x"), 2);
    // Both directions of the mutual dependency survive as edges.
    let mut edges = edge_ids(&tree);
    edges.sort();
    assert_eq!(edges, vec!["x-y", "y-x"]);
}

// ─── Scenario: orphan prerequisite ───────────────────────────────────────────

#[test]
fn test_orphan_prerequisite_layer_zero_no_incoming_edge() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("d", &["s9"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "d"]), &[]);

    assert_eq!(layer_of(&tree, "d"), 0);
    assert!(tree.edges.iter().all(|e| e.target != "d"));
}

// ─── Scenario: duplicate-skill edge collapse ─────────────────────────────────

#[test]
fn test_duplicate_skill_edges_collapse() {
    let catalog = vec![
        course("p", &[], &["s1", "s2"]),
        course("q", &["s1", "s2"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["p", "q"]), &[]);

    assert_eq!(tree.edges.len(), 1);
    assert_eq!(tree.edges[0].id, "p-q");
    assert_eq!(tree.edges[0].skills, vec!["s1", "s2"]);
}

// ─── Totality and filtering ──────────────────────────────────────────────────

#[test]
fn test_every_participant_appears_exactly_once() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &[]),
        course("outside", &[], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b", "ghost"]), &[]);

    let mut node_ids: Vec<&str> = tree.nodes.iter().map(|n| n.id.as_str()).collect();
    node_ids.sort();
    assert_eq!(node_ids, vec!["a", "b"]);
}

#[test]
fn test_empty_recommended_set_yields_empty_tree() {
    let catalog = vec![course("a", &[], &[])];
    let tree = build_skill_tree(&catalog, &[], &[]);
    assert!(tree.nodes.is_empty());
    assert!(tree.edges.is_empty());
}

#[test]
fn test_no_self_edges_ever() {
    let catalog = vec![
        course("a", &["s1"], &["s1", "s2"]),
        course("b", &["s2"], &["s1"]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b"]), &[]);
    assert!(tree.edges.iter().all(|e| e.source != e.target));
}

// ─── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn test_idempotent_identical_output() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &["s2"]),
        course("c", &["s2"], &[]),
    ];
    let first = build_skill_tree(&catalog, &ids(&["a", "b", "c"]), &ids(&["a"]));
    let second = build_skill_tree(&catalog, &ids(&["a", "b", "c"]), &ids(&["a"]));
    assert_eq!(first, second);
}

#[test]
fn test_recommended_permutation_changes_nothing() {
    // Participants are ordered by catalog iteration everywhere, so even
    // within-layer positions are invariant under permutation.
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &[], &["s1"]),
        course("c", &["s1"], &[]),
    ];
    let forward = build_skill_tree(&catalog, &ids(&["a", "b", "c"]), &[]);
    let shuffled = build_skill_tree(&catalog, &ids(&["c", "b", "a"]), &[]);
    assert_eq!(forward, shuffled);
}

// ─── Completed flags ─────────────────────────────────────────────────────────

#[test]
fn test_completed_flags_follow_input_set() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b"]), &ids(&["a"]));
    assert!(tree.node("a").unwrap().completed);
    assert!(!tree.node("b").unwrap().completed);
}

// ─── Grid geometry ───────────────────────────────────────────────────────────

#[test]
fn test_rows_centered_per_layer() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &[], &["s1"]),
        course("c", &["s1"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b", "c"]), &[]);
    let config = LayoutConfig::default();

    // Layer 0 row: two nodes, symmetric around x = 0.
    let a = tree.node("a").unwrap();
    let b = tree.node("b").unwrap();
    assert_eq!(a.y, 0.0);
    assert_eq!(b.y, 0.0);
    assert_eq!(a.x + config.node_width, -b.x);

    // Layer 1 row: one centered node.
    let c = tree.node("c").unwrap();
    assert_eq!(c.y, config.layer_height);
    assert_eq!(c.x, -config.node_width / 2.0);
}

// ─── Staged contract ─────────────────────────────────────────────────────────

#[test]
fn test_staged_plan_layers_from_stage_numbers() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &[]),
        course("c", &[], &[]),
    ];
    // Stage numbers contradict the dependency order on purpose.
    let stages = vec![
        StageGroup::new(2, vec!["a".to_string()]),
        StageGroup::new(1, vec!["b".to_string(), "c".to_string()]),
    ];
    let tree = build_staged_tree(&catalog, &stages, &[]);

    assert_eq!(layer_of(&tree, "a"), 2);
    assert_eq!(layer_of(&tree, "b"), 1);
    assert_eq!(layer_of(&tree, "c"), 1);
    // Edges still come from skill links, independent of stage grouping.
    assert_eq!(edge_ids(&tree), vec!["a-b"]);
}

#[test]
fn test_staged_plan_drops_unknown_ids() {
    let catalog = vec![course("a", &[], &[])];
    let stages = vec![StageGroup::new(1, vec!["a".to_string(), "ghost".to_string()])];
    let tree = build_staged_tree(&catalog, &stages, &[]);
    assert_eq!(tree.nodes.len(), 1);
    assert_eq!(tree.nodes[0].id, "a");
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn test_tree_serializes_to_renderer_shape() {
    let catalog = vec![
        course("a", &[], &["s1"]),
        course("b", &["s1"], &[]),
    ];
    let tree = build_skill_tree(&catalog, &ids(&["a", "b"]), &ids(&["a"]));
    let json = serde_json::to_value(&tree).unwrap();

    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["id"], "a");
    assert_eq!(nodes[0]["completed"], true);
    assert_eq!(nodes[0]["course"]["course_id"], "a");

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["id"], "a-b");
    assert_eq!(edges[0]["source"], "a");
    assert_eq!(edges[0]["target"], "b");
    assert_eq!(edges[0]["skills"][0], "s1");
}
