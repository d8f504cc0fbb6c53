//! Property tests: random input edits never break the link or scene invariants.
mod common;
use common::*;
use pipegraph::prelude::*;
use proptest::prelude::*;

const NODE_COUNT: usize = 5;
const DATASETS: [&str; 3] = ["tas", "pr", "huss"];

#[derive(Debug, Clone)]
enum Edit {
    Add { target: usize, item: usize },
    Remove { target: usize, item: usize },
    Move { target: usize, dx: i32, dy: i32 },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    let item = 0..(NODE_COUNT + DATASETS.len());
    prop_oneof![
        (0..NODE_COUNT, item.clone()).prop_map(|(target, item)| Edit::Add { target, item }),
        (0..NODE_COUNT, item).prop_map(|(target, item)| Edit::Remove { target, item }),
        (0..NODE_COUNT, -50i32..50, -50i32..50)
            .prop_map(|(target, dx, dy)| Edit::Move { target, dx, dy }),
    ]
}

fn build_model() -> (GraphModel, Vec<NodeRef>) {
    let mut model = seeded_model();
    let refs: Vec<NodeRef> = (0..NODE_COUNT)
        .map(|i| model.add_node("subset", (i * 100) as f64, 0.0).to_ref())
        .collect();
    (model, refs)
}

fn item_for(refs: &[NodeRef], index: usize) -> InputItem {
    if index < refs.len() {
        InputItem::Node(refs[index].clone())
    } else {
        InputItem::dataset(DATASETS[index - refs.len()])
    }
}

proptest! {
    #[test]
    fn prop_links_always_match_inputs(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let (mut model, refs) = build_model();
        let mut scene = Scene::new();
        RenderSync::reconcile(&model, &mut scene);

        for edit in edits {
            match edit {
                Edit::Add { target, item } => {
                    model.add_input(&refs[target].id, item_for(&refs, item));
                }
                Edit::Remove { target, item } => {
                    model.remove_input(&refs[target].id, &item_for(&refs, item));
                }
                Edit::Move { target, dx, dy } => {
                    let at = model.node(&refs[target].id).unwrap().position();
                    model.update_position(&refs[target].id, at.x + dx as f64, at.y + dy as f64);
                }
            }
            assert_model_invariants(&model);
            RenderSync::reconcile(&model, &mut scene);
            assert_scene_matches(&model, &scene);
        }
    }

    #[test]
    fn prop_add_input_is_idempotent(
        edits in prop::collection::vec(edit_strategy(), 0..30),
        target in 0..NODE_COUNT,
        item in 0..(NODE_COUNT + DATASETS.len()),
    ) {
        let (mut model, refs) = build_model();
        for edit in edits {
            if let Edit::Add { target, item } = edit {
                model.add_input(&refs[target].id, item_for(&refs, item));
            }
        }

        model.add_input(&refs[target].id, item_for(&refs, item));
        let once = model.node(&refs[target].id).unwrap().inputs().to_vec();
        model.add_input(&refs[target].id, item_for(&refs, item));
        let twice = model.node(&refs[target].id).unwrap().inputs().to_vec();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_self_input_is_never_added(target in 0..NODE_COUNT) {
        let (mut model, refs) = build_model();
        prop_assert!(!model.add_input(&refs[target].id, InputItem::Node(refs[target].clone())));
        prop_assert!(model.links().is_empty());
    }

    #[test]
    fn prop_candidates_never_contain_current_inputs(
        edits in prop::collection::vec(edit_strategy(), 0..40),
        selected in 0..NODE_COUNT,
    ) {
        let (mut model, refs) = build_model();
        for edit in edits {
            if let Edit::Add { target, item } = edit {
                model.add_input(&refs[target].id, item_for(&refs, item));
            }
        }

        let catalog = datasets(&DATASETS);
        let node = model.node(&refs[selected].id).unwrap();
        let candidates = CandidateInputResolver::resolve(&model, node.id(), &catalog);
        for candidate in &candidates {
            prop_assert!(!node.has_input_labelled(&candidate.display()));
            if let Some(id) = candidate.node_id() {
                prop_assert_ne!(id, node.id());
                prop_assert!(!model.has_link(node.id(), id));
            }
        }
    }
}
