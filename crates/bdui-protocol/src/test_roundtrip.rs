#[cfg(test)]
mod tests {
    use proptest::{collection, prelude::*, sample};

    use crate::{
        Action, ActionDescriptor, ActionMap, DecodePolicy, DynamicValue, ValueMap, ViewNode,
    };

    const NODE_TYPES: &[&str] = &[
        "contentView",
        "stackView",
        "label",
        "imageView",
        "button",
        "serviceCard",
        "widgetXYZ",
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

    fn arb_scalar() -> impl Strategy<Value = DynamicValue> {
        prop_oneof![
            any::<bool>().prop_map(DynamicValue::Bool),
            any::<i64>().prop_map(DynamicValue::Int),
            // Quarter steps keep floats exactly representable through text.
            (-4_000_000i32..4_000_000).prop_map(|n| DynamicValue::Float(f64::from(n) / 4.0)),
            "[a-zA-Z0-9 ]{0,12}".prop_map(DynamicValue::String),
        ]
    }

    fn arb_content() -> impl Strategy<Value = ValueMap> {
        collection::btree_map(
            sample::select(CONTENT_KEYS).prop_map(str::to_string),
            arb_scalar(),
            0..5,
        )
    }

    fn arb_action() -> impl Strategy<Value = ActionDescriptor> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(|s| Action::Navigate { screen: s }.to_descriptor()),
            Just(Action::Reload.to_descriptor()),
            Just(Action::Dismiss.to_descriptor()),
            ("[a-z ]{0,8}", "[a-z ]{0,8}").prop_map(|(title, message)| {
                Action::ShowAlert { title, message }.to_descriptor()
            }),
            "[a-z]{1,8}".prop_map(|kind| ActionDescriptor::new(kind)),
        ]
    }

    fn arb_actions() -> impl Strategy<Value = Option<ActionMap>> {
        proptest::option::of(collection::btree_map("[A-Za-z ]{0,6}", arb_action(), 0..3))
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

    proptest! {
        #[test]
        fn wire_bytes_round_trip(tree in arb_tree()) {
            let bytes = tree.to_json_vec().unwrap();
            let back = ViewNode::from_slice(&bytes, DecodePolicy::Strict).unwrap();
            prop_assert_eq!(back, tree);
        }

        #[test]
        fn dynamic_value_round_trip(tree in arb_tree()) {
            let back = ViewNode::parse(&tree.to_value()).unwrap();
            prop_assert_eq!(back.node_count(), tree.node_count());
            prop_assert_eq!(back, tree);
        }
    }
}
