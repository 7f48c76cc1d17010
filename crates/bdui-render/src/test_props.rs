#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bdui_protocol::{ActionDescriptor, ActionMap, DynamicValue, ValueMap, ViewNode};
    use parking_lot::Mutex;
    use proptest::{collection, prelude::*, sample};

    use crate::{ActionSink, NodeType, ViewMapper};

    const NODE_TYPES: &[&str] = &[
        "contentView",
        "stackView",
        "label",
        "imageView",
        "button",
        "serviceCard",
        "carousel",
        "",
    ];

    const CONTENT_KEYS: &[&str] = &[
        "text",
        "type",
        "alignment",
        "isLoading",
        "height",
        "width",
        "axis",
        "spacing",
        "padding",
        "imageName",
        "tintColor",
        "backgroundColor",
        "title",
        "subtitle",
        "iconName",
    ];

    const TITLES: &[&str] = &["Pay", "Go", "Refresh", ""];

    #[derive(Default)]
    struct Taps {
        seen: Mutex<Vec<ActionDescriptor>>,
    }

    impl ActionSink for Taps {
        fn handle_action(&self, action: &ActionDescriptor) {
            self.seen.lock().push(action.clone());
        }
    }

    // Content values are deliberately loosely typed so mismatches get exercised.
    fn arb_value() -> impl Strategy<Value = DynamicValue> {
        prop_oneof![
            any::<bool>().prop_map(DynamicValue::Bool),
            (-100i64..100).prop_map(DynamicValue::Int),
            (-100.0f64..100.0).prop_map(DynamicValue::Float),
            sample::select(TITLES).prop_map(|s| DynamicValue::String(s.to_string())),
            "[a-zA-Z]{0,8}".prop_map(DynamicValue::String),
        ]
    }

    fn arb_content() -> impl Strategy<Value = ValueMap> {
        collection::btree_map(
            sample::select(CONTENT_KEYS).prop_map(str::to_string),
            arb_value(),
            0..5,
        )
    }

    fn arb_actions() -> impl Strategy<Value = Option<ActionMap>> {
        proptest::option::of(collection::btree_map(
            sample::select(TITLES).prop_map(str::to_string),
            "[a-z]{1,8}".prop_map(|kind| ActionDescriptor::new(kind)),
            0..3,
        ))
    }

    fn arb_leaf() -> impl Strategy<Value = ViewNode> {
        (
            sample::select(NODE_TYPES),
            proptest::option::of(arb_content()),
            arb_actions(),
        )
            .prop_map(|(kind, content, actions)| ViewNode {
                kind: kind.to_string(),
                content,
                subviews: None,
                actions,
            })
    }

    fn arb_tree() -> impl Strategy<Value = ViewNode> {
        arb_leaf().prop_recursive(4, 32, 4, |inner| {
            (arb_leaf(), proptest::option::of(collection::vec(inner, 0..4))).prop_map(
                |(mut node, subviews)| {
                    node.subviews = subviews;
                    node
                },
            )
        })
    }

    fn unknown_nodes(node: &ViewNode) -> usize {
        usize::from(NodeType::from_wire(&node.kind).is_none())
            + node.children().iter().map(unknown_nodes).sum::<usize>()
    }

    proptest! {
        #[test]
        fn mapping_preserves_node_count(tree in arb_tree()) {
            let widget = ViewMapper::detached().map(&tree);
            prop_assert_eq!(widget.node_count(), tree.node_count());
            prop_assert_eq!(widget.placeholder_count(), unknown_nodes(&tree));
        }

        #[test]
        fn each_bound_tap_dispatches_once(tree in arb_tree()) {
            let taps = Arc::new(Taps::default());
            let sink: Arc<dyn ActionSink> = taps.clone();
            let widget = ViewMapper::new(&sink).map(&tree);
            let buttons = widget.buttons();
            let bound = buttons.iter().filter(|b| b.on_tap.is_some()).count();
            let tapped = buttons.iter().filter(|b| b.tap()).count();
            prop_assert_eq!(tapped, bound);
            prop_assert_eq!(taps.seen.lock().len(), bound);
        }
    }
}
