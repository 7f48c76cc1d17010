#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bdui_protocol::{ActionDescriptor, ActionMap, DecodePolicy, ViewNode};
    use parking_lot::Mutex;

    use crate::{
        ActionSink, Attachment, ViewMapper, WidgetKind, effective_actions,
        tokens::{Axis, ButtonVariant, Color, LabelVariant, Spacing, StackAlignment},
    };

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<ActionDescriptor>>,
    }

    impl ActionSink for Recorder {
        fn handle_action(&self, action: &ActionDescriptor) {
            self.seen.lock().push(action.clone());
        }
    }

    fn recorder() -> (Arc<Recorder>, ViewMapper) {
        let rec = Arc::new(Recorder::default());
        let sink: Arc<dyn ActionSink> = rec.clone();
        (rec, ViewMapper::new(&sink))
    }

    fn doc(json: &str) -> ViewNode {
        ViewNode::from_slice(json.as_bytes(), DecodePolicy::Lenient).unwrap()
    }

    fn navigate(screen: &str) -> ActionDescriptor {
        ActionDescriptor::new("navigate").with_payload("screen", screen)
    }

    #[test]
    fn end_to_end_stack_label_button() {
        let (rec, mapper) = recorder();
        let tree = mapper.map(&doc(
            r#"{"type":"stackView","content":{"axis":"vertical"},
                "subviews":[{"type":"label","content":{"text":"Hi"}},
                            {"type":"button","content":{"text":"Go"}}],
                "actions":{"Go":{"type":"dismiss"}}}"#,
        ));

        let WidgetKind::Stack(stack) = &tree.kind else {
            panic!("expected stack, got {}", tree.kind);
        };
        assert_eq!(stack.axis, Axis::Vertical);
        assert_eq!(tree.children.len(), 2);
        match &tree.children[0].kind {
            WidgetKind::Label(l) => assert_eq!(l.text, "Hi"),
            other => panic!("expected label, got {other}"),
        }
        assert_eq!(tree.children[1].attachment, Attachment::Arranged);

        let go = tree.find_button("Go").unwrap();
        assert!(go.tap());
        let seen = rec.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, "dismiss");
    }

    #[test]
    fn node_count_survives_unknown_types() {
        let node = doc(
            r#"{"type":"widgetXYZ","subviews":[
                {"type":"label","content":{"text":"a"}},
                {"type":"mystery","subviews":[{"type":"label"},{"type":"???"}]},
                {"type":"serviceCard"}]}"#,
        );
        let tree = ViewMapper::detached().map(&node);
        assert_eq!(tree.node_count(), node.node_count());
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.placeholder_count(), 3);
    }

    #[test]
    fn unknown_type_keeps_siblings() {
        let tree = ViewMapper::detached().map(&doc(
            r#"{"type":"stackView","subviews":[
                {"type":"widgetXYZ"},
                {"type":"label","content":{"text":"after"}}]}"#,
        ));
        match &tree.children[0].kind {
            WidgetKind::Placeholder(p) => assert_eq!(p.node_type, "widgetXYZ"),
            other => panic!("expected placeholder, got {other}"),
        }
        match &tree.children[1].kind {
            WidgetKind::Label(l) => assert_eq!(l.text, "after"),
            other => panic!("expected label, got {other}"),
        }
    }

    #[test]
    fn parent_actions_win() {
        let x = ActionDescriptor::new("reload");
        let y = ActionDescriptor::new("dismiss");
        let child = ViewNode::new("button")
            .with_content("text", "B")
            .with_action("B", y);
        let parent = ViewNode::new("stackView")
            .with_action("A", x.clone())
            .with_subview(child.clone());

        let inherited = effective_actions(None, &parent);
        let for_child = effective_actions(inherited, &child).unwrap();
        let mut want = ActionMap::new();
        want.insert("A".into(), x);
        assert_eq!(for_child, &want);

        // The child's own "B" binding is shadowed, so its button stays unbound.
        let tree = ViewMapper::detached().map(&parent);
        assert!(tree.find_button("B").unwrap().on_tap.is_none());
    }

    #[test]
    fn child_actions_apply_without_parent_map() {
        let y = ActionDescriptor::new("dismiss");
        let child = ViewNode::new("button")
            .with_content("text", "B")
            .with_action("B", y.clone());
        let parent = ViewNode::new("contentView").with_subview(child.clone());

        let inherited = effective_actions(None, &parent);
        assert!(inherited.is_none());
        let for_child = effective_actions(inherited, &child).unwrap();
        assert_eq!(for_child.get("B"), Some(&y));

        let (rec, mapper) = recorder();
        let tree = mapper.map(&parent);
        assert_eq!(tree.children[0].attachment, Attachment::FillParent);
        assert!(tree.find_button("B").unwrap().tap());
        assert_eq!(rec.seen.lock().as_slice(), &[y]);
    }

    #[test]
    fn pay_button_binds_by_title() {
        let (rec, mapper) = recorder();
        let node = ViewNode::new("stackView")
            .with_action("Pay", navigate("balance"))
            .with_subview(ViewNode::new("button").with_content("text", "Pay"));
        let tree = mapper.map(&node);
        assert!(tree.find_button("Pay").unwrap().tap());
        assert_eq!(rec.seen.lock().as_slice(), &[navigate("balance")]);
    }

    #[test]
    fn pay_button_without_matching_key_is_inert() {
        let (rec, mapper) = recorder();
        let node = ViewNode::new("stackView")
            .with_action("Send", navigate("balance"))
            .with_subview(ViewNode::new("button").with_content("text", "Pay"));
        let tree = mapper.map(&node);
        let pay = tree.find_button("Pay").unwrap();
        assert!(pay.on_tap.is_none());
        assert!(!pay.tap());
        assert!(rec.seen.lock().is_empty());
    }

    #[test]
    fn button_without_content_has_no_title() {
        let node = ViewNode::new("button").with_action("", ActionDescriptor::new("reload"));
        let tree = ViewMapper::detached().map(&node);
        match &tree.kind {
            WidgetKind::Button(b) => {
                assert_eq!(b.title, None);
                assert!(b.on_tap.is_none());
            }
            other => panic!("expected button, got {other}"),
        }
    }

    #[test]
    fn tap_after_sink_dropped_is_noop() {
        let (rec, mapper) = recorder();
        let node = ViewNode::new("button")
            .with_content("text", "Go")
            .with_action("Go", ActionDescriptor::new("dismiss"));
        let tree = mapper.map(&node);
        drop(rec);
        assert!(!tree.find_button("Go").unwrap().tap());
    }

    #[test]
    fn content_tokens_and_fallbacks() {
        let tree = ViewMapper::detached().map(&doc(
            r#"{"type":"contentView","content":{"backgroundColor":"mauve"},"subviews":[
                {"type":"stackView","content":{"axis":"horizontal","spacing":"xLarge",
                    "alignment":"center","padding":"enormous"}},
                {"type":"label","content":{"text":"t","type":"caption","alignment":"right"}},
                {"type":"imageView","content":{"imageName":"star","tintColor":"primary","width":24,"height":12.5}},
                {"type":"button","content":{"text":"x","type":"secondary","isLoading":true,"height":"tall"}}]}"#,
        ));
        match &tree.kind {
            WidgetKind::Container(c) => assert_eq!(c.background, Some(Color::Black)),
            other => panic!("expected container, got {other}"),
        }
        match &tree.children[0].kind {
            WidgetKind::Stack(s) => {
                assert_eq!(s.axis, Axis::Horizontal);
                assert_eq!(s.spacing, Spacing::XLarge);
                assert_eq!(s.alignment, StackAlignment::Center);
                assert_eq!(s.padding, Some(Spacing::Medium));
            }
            other => panic!("expected stack, got {other}"),
        }
        match &tree.children[1].kind {
            WidgetKind::Label(l) => assert_eq!(l.variant, LabelVariant::Caption),
            other => panic!("expected label, got {other}"),
        }
        match &tree.children[2].kind {
            WidgetKind::Image(i) => {
                assert_eq!(i.name.as_deref(), Some("star"));
                assert_eq!(i.tint, Some(Color::Primary));
                assert_eq!(i.width, Some(24.0));
                assert_eq!(i.height, Some(12.5));
            }
            other => panic!("expected image, got {other}"),
        }
        match &tree.children[3].kind {
            WidgetKind::Button(b) => {
                assert_eq!(b.variant, ButtonVariant::Secondary);
                assert!(b.loading);
                assert_eq!(b.height, None);
            }
            other => panic!("expected button, got {other}"),
        }
    }

    #[test]
    fn service_card_reads_content() {
        let tree = ViewMapper::detached().map(&doc(
            r#"{"type":"serviceCard","content":{"title":"Cards","subtitle":"Manage","iconName":"creditcard"}}"#,
        ));
        match &tree.kind {
            WidgetKind::ServiceCard(c) => {
                assert_eq!(c.title, "Cards");
                assert_eq!(c.subtitle, "Manage");
                assert_eq!(c.icon, "creditcard");
            }
            other => panic!("expected card, got {other}"),
        }
    }

    #[test]
    fn outline_shows_bindings() {
        let tree = ViewMapper::detached().map(&doc(
            r#"{"type":"stackView","subviews":[{"type":"button","content":{"text":"Go"}}],
                "actions":{"Go":{"type":"dismiss"}}}"#,
        ));
        assert_eq!(
            tree.outline(),
            "stack vertical spacing=medium align=fill\n  button \"Go\" primary -> dismiss\n"
        );
    }
}
