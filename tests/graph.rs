//! Tests for the graph model: node creation, inputs and derived links.
mod common;
use common::*;
use pipegraph::prelude::*;

#[test]
fn test_add_node_generates_fresh_ids() {
    let mut model = GraphModel::new();

    let n1 = model.add_node("subset", 10.0, 20.0).clone();
    assert_eq!(n1.display(), format!("subset-{}", n1.id()));
    assert_eq!(n1.position(), Point::new(10.0, 20.0));
    assert!(n1.inputs().is_empty());

    let n2 = model.add_node("subset", 30.0, 40.0).clone();
    assert_ne!(n1.id(), n2.id());
    assert_eq!(n2.process(), "subset");
    assert_eq!(model.len(), 2);
}

#[test]
fn test_ids_are_unique_across_many_nodes() {
    let mut model = seeded_model();
    for i in 0..200 {
        model.add_node("regrid", i as f64, 0.0);
    }
    assert_model_invariants(&model);
}

#[test]
fn test_seeded_models_repeat_their_ids() {
    let mut a = GraphModel::with_seed(3);
    let mut b = GraphModel::with_seed(3);
    let id_a = a.add_node("subset", 0.0, 0.0).id().clone();
    let id_b = b.add_node("aggregate", 5.0, 5.0).id().clone();
    assert_eq!(id_a, id_b);
}

#[test]
fn test_display_label_is_stable() {
    let mut model = seeded_model();
    let id = model.add_node("subset", 0.0, 0.0).id().clone();
    let before = model.node(&id).unwrap().display();

    model.update_position(&id, 300.0, 400.0);
    model.add_input(&id, InputItem::dataset("tas"));

    assert_eq!(model.node(&id).unwrap().display(), before);
}

#[test]
fn test_add_node_input_creates_link() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();
    let b = model.add_node("aggregate", 100.0, 0.0).id().clone();

    assert!(model.add_input(&b, InputItem::Node(a.clone())));

    let links = model.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].src, a.id);
    assert_eq!(links[0].dst, b);
    assert!(model.has_link(&a.id, &b));
    assert!(!model.has_link(&b, &a.id));
    assert_model_invariants(&model);
}

#[test]
fn test_dataset_input_creates_no_link() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).id().clone();

    assert!(model.add_input(&a, InputItem::dataset("tas")));
    assert!(model.links().is_empty());
    assert_eq!(model.node(&a).unwrap().inputs().len(), 1);
}

#[test]
fn test_self_input_is_ignored() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();

    assert!(!model.add_input(&a.id, InputItem::Node(a.clone())));
    assert!(model.node(&a.id).unwrap().inputs().is_empty());
    assert!(model.links().is_empty());
}

#[test]
fn test_add_input_is_idempotent() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();
    let b = model.add_node("aggregate", 0.0, 0.0).id().clone();

    model.add_input(&b, InputItem::Node(a.clone()));
    model.add_input(&b, InputItem::dataset("pr"));
    let once = model.node(&b).unwrap().inputs().to_vec();

    assert!(!model.add_input(&b, InputItem::Node(a)));
    assert!(!model.add_input(&b, InputItem::dataset("pr")));
    assert_eq!(model.node(&b).unwrap().inputs(), once.as_slice());
    assert_eq!(model.links().len(), 1);
}

#[test]
fn test_add_input_ignores_unknown_target_and_foreign_nodes() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).id().clone();

    assert!(!model.add_input(&NodeId::new("missing"), InputItem::dataset("tas")));

    let foreign = NodeRef {
        id: NodeId::new("elsewhere"),
        process: "regrid".to_string(),
    };
    assert!(!model.add_input(&a, InputItem::Node(foreign)));
    assert!(model.links().is_empty());
}

#[test]
fn test_node_input_uses_the_stored_process_label() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();
    let b = model.add_node("aggregate", 100.0, 0.0).id().clone();
    let relabelled = NodeRef {
        id: a.id.clone(),
        process: "bogus".to_string(),
    };

    assert!(model.add_input(&b, InputItem::Node(a.clone())));
    assert!(!model.add_input(&b, InputItem::Node(relabelled.clone())));
    assert_eq!(model.links().len(), 1);
    assert_model_invariants(&model);

    assert!(model.remove_input(&b, &InputItem::Node(a.clone())));
    assert!(!model.has_link(&a.id, &b));
    assert!(model.links().is_empty());

    // A wrong process name alone still names a real node; it is stored as that node.
    assert!(model.add_input(&b, InputItem::Node(relabelled)));
    assert_eq!(model.node(&b).unwrap().inputs(), &[InputItem::Node(a.clone())]);
    assert_eq!(labels(model.node(&b).unwrap().inputs()), vec![a.display()]);
    assert_model_invariants(&model);
}

#[test]
fn test_remove_input_drops_link() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();
    let b = model.add_node("aggregate", 0.0, 0.0).id().clone();
    model.add_input(&b, InputItem::Node(a.clone()));
    model.add_input(&b, InputItem::dataset("tas"));

    assert!(model.remove_input(&b, &InputItem::Node(a.clone())));
    assert!(model.links().is_empty());
    assert_eq!(labels(model.node(&b).unwrap().inputs()), vec!["tas"]);

    // Removing again is a no-op.
    assert!(!model.remove_input(&b, &InputItem::Node(a)));
    assert_model_invariants(&model);
}

#[test]
fn test_links_follow_node_then_input_order() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).to_ref();
    let b = model.add_node("regrid", 0.0, 0.0).to_ref();
    let c = model.add_node("aggregate", 0.0, 0.0).id().clone();

    model.add_input(&c, InputItem::Node(b.clone()));
    model.add_input(&c, InputItem::Node(a.clone()));
    model.add_input(&b.id, InputItem::Node(a.clone()));

    let keys: Vec<_> = model.links().iter().map(Link::key).collect();
    assert_eq!(
        keys,
        vec![
            (a.id.clone(), b.id.clone()),
            (b.id.clone(), c.clone()),
            (a.id.clone(), c.clone()),
        ]
    );
}

#[test]
fn test_update_position_and_reset() {
    let mut model = seeded_model();
    let a = model.add_node("subset", 0.0, 0.0).id().clone();

    assert!(model.update_position(&a, 15.5, -4.0));
    assert_eq!(model.node(&a).unwrap().position(), Point::new(15.5, -4.0));
    assert!(!model.update_position(&NodeId::new("missing"), 1.0, 1.0));

    model.reset();
    assert!(model.is_empty());
    assert!(model.links().is_empty());
}
