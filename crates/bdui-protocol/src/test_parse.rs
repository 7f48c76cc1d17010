#[cfg(test)]
mod tests {
    use crate::{ActionDescriptor, ActionKind, DecodePolicy, DynamicValue, Error, ViewNode};

    fn parse(src: &str) -> Result<ViewNode, Error> {
        ViewNode::from_slice(src.as_bytes(), DecodePolicy::Lenient)
    }

    fn schema_path(err: Error) -> String {
        match err {
            Error::Schema { path, .. } => path,
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_node() {
        let node = parse(r#"{"type": "label"}"#).unwrap();
        assert_eq!(node.kind, "label");
        assert!(node.content.is_none());
        assert!(node.subviews.is_none());
        assert!(node.actions.is_none());
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_full_document() {
        let node = parse(
            r#"{
                "type": "stackView",
                "content": {"axis": "vertical", "spacing": "large"},
                "subviews": [
                    {"type": "label", "content": {"text": "Hi"}},
                    {"type": "button", "content": {"text": "Go", "height": 48}},
                    {"type": "contentView", "subviews": [{"type": "widgetXYZ"}]}
                ],
                "actions": {
                    "Go": {"type": "navigate", "payload": {"screen": "balance"}},
                    "Close": {"type": "dismiss"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(node.node_count(), 5);
        assert_eq!(node.action_count(), 2);
        assert_eq!(node.children()[1].kind, "button");
        assert_eq!(
            node.content_value("spacing").and_then(|v| v.as_str()),
            Some("large")
        );
        let actions = node.actions.as_ref().unwrap();
        assert_eq!(actions["Go"].action_kind(), Some(ActionKind::Navigate));
        assert_eq!(actions["Go"].payload_str("screen"), Some("balance"));
        assert!(actions["Close"].payload.is_none());
    }

    #[test]
    fn test_missing_type() {
        let err = parse(r#"{"content": {}}"#).unwrap_err();
        assert_eq!(schema_path(err), "$.type");
    }

    #[test]
    fn test_type_must_be_string() {
        let err = parse(r#"{"type": 3}"#).unwrap_err();
        match err {
            Error::Schema { path, message } => {
                assert_eq!(path, "$.type");
                assert!(message.contains("integer"), "{message}");
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn test_empty_type_rejected() {
        let err = parse(r#"{"type": ""}"#).unwrap_err();
        assert_eq!(schema_path(err), "$.type");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = parse(r#"[{"type": "label"}]"#).unwrap_err();
        assert_eq!(schema_path(err), "$");
        let err = parse("null").unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_nested_missing_type_points_at_child() {
        let err = parse(
            r#"{"type": "stackView", "subviews": [{"type": "label"}, {"content": {}}]}"#,
        )
        .unwrap_err();
        assert_eq!(schema_path(err), "$.subviews[1].type");
    }

    #[test]
    fn test_wrong_envelope_shapes() {
        let err = parse(r#"{"type": "stackView", "subviews": {}}"#).unwrap_err();
        assert_eq!(schema_path(err), "$.subviews");
        let err = parse(r#"{"type": "label", "content": "text"}"#).unwrap_err();
        assert_eq!(schema_path(err), "$.content");
        let err = parse(r#"{"type": "label", "actions": []}"#).unwrap_err();
        assert_eq!(schema_path(err), "$.actions");
    }

    #[test]
    fn test_one_bad_action_fails_whole_document() {
        let err = parse(
            r#"{
                "type": "stackView",
                "subviews": [{
                    "type": "button",
                    "actions": {
                        "Ok": {"type": "dismiss"},
                        "Pay now": {"payload": {"screen": "balance"}}
                    }
                }]
            }"#,
        )
        .unwrap_err();
        assert_eq!(schema_path(err), r#"$.subviews[0].actions["Pay now"].type"#);
    }

    #[test]
    fn test_action_payload_must_be_object() {
        let err = parse(r#"{"type": "button", "actions": {"Go": {"type": "navigate", "payload": 1}}}"#)
            .unwrap_err();
        assert_eq!(schema_path(err), "$.actions.Go.payload");
    }

    #[test]
    fn test_unknown_action_type_still_parses() {
        let node = parse(r#"{"type": "button", "actions": {"X": {"type": "frobnicate"}}}"#).unwrap();
        let actions = node.actions.unwrap();
        assert_eq!(actions["X"].kind, "frobnicate");
        assert_eq!(actions["X"].action_kind(), None);
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let node = ViewNode::from_slice(
            br#"{"type": "label", "content": null, "subviews": null, "actions": null}"#,
            DecodePolicy::Preserve,
        )
        .unwrap();
        assert!(node.content.is_none());
        assert!(node.subviews.is_none());
        assert!(node.actions.is_none());
    }

    #[test]
    fn test_unknown_envelope_fields_ignored() {
        let node = parse(r#"{"type": "label", "id": "x", "style": {"a": 1}}"#).unwrap();
        assert_eq!(node, ViewNode::new("label"));
    }

    #[test]
    fn test_strict_policy_rejects_null_content() {
        let src = br#"{"type": "label", "content": {"text": null}}"#;
        let lenient = ViewNode::from_slice(src, DecodePolicy::Lenient).unwrap();
        assert!(lenient.content.unwrap().is_empty());
        let err = ViewNode::from_slice(src, DecodePolicy::Strict).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_malformed_bytes() {
        let err = parse(r#"{"type": "label""#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_wire_encoding_matches_value_encoding() {
        let node = ViewNode::new("stackView")
            .with_subview(ViewNode::new("button").with_content("text", "Pay"))
            .with_action(
                "Pay",
                ActionDescriptor::new("navigate").with_payload("screen", "balance"),
            );
        let bytes = node.to_json_vec().unwrap();
        let decoded = DynamicValue::decode(&bytes, DecodePolicy::Strict).unwrap();
        assert_eq!(decoded, node.to_value());
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("null"));
        assert!(text.contains(r#""payload":{"screen":"balance"}"#));
    }
}
