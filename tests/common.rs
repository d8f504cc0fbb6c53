//! Common test utilities for building models, catalogs and editors.
use pipegraph::prelude::*;
use std::collections::HashSet;

/// A model with a reproducible id stream.
#[allow(dead_code)]
pub fn seeded_model() -> GraphModel {
    GraphModel::with_seed(42)
}

/// A dataset collection holding exactly `keys`.
#[allow(dead_code)]
pub fn datasets(keys: &[&str]) -> DatasetCollection {
    keys.iter().copied().collect()
}

/// The palette used throughout the editor tests.
#[allow(dead_code)]
pub fn palette() -> ProcessPalette {
    ProcessPalette::new(["subset", "aggregate", "regrid"])
}

/// An editor over [`palette`] with the given datasets and seeded ids.
#[allow(dead_code)]
pub fn editor_with(keys: &[&str]) -> WorkflowEditor {
    let config = EditorConfig {
        id_seed: Some(7),
        ..EditorConfig::default()
    };
    WorkflowEditor::builder(palette())
        .with_datasets(datasets(keys))
        .with_config(config)
        .build()
}

/// Places a node through the drag-and-drop gesture and returns its id.
#[allow(dead_code)]
pub fn place(editor: &mut WorkflowEditor, process: &str, x: f64, y: f64) -> NodeId {
    editor.drag_start(process).expect("process is in the palette");
    editor
        .pointer_over_canvas(x, y)
        .expect("placement was armed")
}

/// Labels of a candidate list, in order.
#[allow(dead_code)]
pub fn labels(items: &[InputItem]) -> Vec<String> {
    items.iter().map(InputItem::display).collect()
}

/// The link set implied by node inputs, computed independently of `links()`.
#[allow(dead_code)]
pub fn expected_links(model: &GraphModel) -> HashSet<(NodeId, NodeId)> {
    let mut expected = HashSet::new();
    for dst in model.nodes() {
        for input in dst.inputs() {
            if let InputItem::Node(src) = input {
                expected.insert((src.id.clone(), dst.id().clone()));
            }
        }
    }
    expected
}

/// Asserts every structural invariant of the model.
#[allow(dead_code)]
pub fn assert_model_invariants(model: &GraphModel) {
    let derived: HashSet<(NodeId, NodeId)> = model.links().iter().map(Link::key).collect();
    assert_eq!(derived, expected_links(model), "derived links drifted");
    assert_eq!(
        derived.len(),
        model.links().len(),
        "links() produced a duplicate pair"
    );

    let ids: HashSet<&NodeId> = model.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids.len(), model.len(), "node ids are not unique");

    for node in model.nodes() {
        assert!(
            !node.is_fed_by(node.id()),
            "node {} feeds itself",
            node.display()
        );
        let labels: HashSet<String> = node.inputs().iter().map(InputItem::display).collect();
        assert_eq!(
            labels.len(),
            node.inputs().len(),
            "node {} has a duplicate input",
            node.display()
        );
    }
}

/// Asserts that the scene holds exactly one shape per node and per derived link.
#[allow(dead_code)]
pub fn assert_scene_matches(model: &GraphModel, scene: &Scene) {
    assert_eq!(scene.node_count(), model.len());
    for node in model.nodes() {
        let shape = scene.node(node.id()).expect("node has a shape");
        assert_eq!(shape.position, node.position());
        assert_eq!(shape.label, node.process());
    }

    let links = model.links();
    assert_eq!(scene.link_count(), links.len());
    for link in &links {
        let shape = scene.link(&link.src, &link.dst).expect("link has a shape");
        let src = model.node(&link.src).expect("source exists");
        let dst = model.node(&link.dst).expect("destination exists");
        assert_eq!(shape.from, src.position());
        assert_eq!(shape.to, dst.position());
    }
}
