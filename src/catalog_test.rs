use super::*;

// =============================================================
// Built-in catalog
// =============================================================

#[test]
fn default_catalog_is_valid() {
    assert!(Catalog::default().validate().is_ok());
}

#[test]
fn default_catalog_has_three_of_each() {
    let catalog = Catalog::default();
    assert_eq!(catalog.prompts.len(), 3);
    assert_eq!(catalog.faqs.len(), 3);
    assert_eq!(catalog.recent_questions.len(), 3);
    assert_eq!(catalog.keyword_replies.len(), 3);
}

#[test]
fn default_keyword_order_is_scholarship_canteen_parking() {
    let keywords: Vec<_> = Catalog::default()
        .keyword_replies
        .into_iter()
        .map(|k| k.keyword)
        .collect();
    assert_eq!(keywords, ["scholarship", "canteen", "parking"]);
}

#[test]
fn prompt_by_id_finds_support_prompt() {
    let catalog = Catalog::default();
    let prompt = catalog.prompt_by_id(3).expect("prompt 3");
    assert_eq!(prompt.text, "Contact support");
    assert!(catalog.prompt_by_id(42).is_none());
}

// =============================================================
// JSON loading
// =============================================================

#[test]
fn partial_document_keeps_builtin_sections() {
    let catalog = Catalog::from_json_str(
        r#"{ "prompts": [ { "id": 7, "text": "Ping", "answer": "Pong" } ] }"#,
    )
    .unwrap();
    assert_eq!(catalog.prompts.len(), 1);
    assert_eq!(catalog.prompts[0].answer, "Pong");
    assert_eq!(catalog.faqs, Catalog::default().faqs);
    assert_eq!(catalog.fallback_reply, FALLBACK_REPLY);
}

#[test]
fn duplicate_prompt_ids_are_rejected() {
    let err = Catalog::from_json_str(
        r#"{ "prompts": [
            { "id": 1, "text": "A", "answer": "a" },
            { "id": 1, "text": "B", "answer": "b" }
        ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, WidgetError::DuplicatePromptId { id: 1 }));
    assert!(err.is_validation());
}

#[test]
fn blank_keyword_is_rejected() {
    let err = Catalog::from_json_str(
        r#"{ "keyword_replies": [ { "keyword": "  ", "reply": "x" } ] }"#,
    )
    .unwrap_err();
    assert!(
        matches!(err, WidgetError::EmptyField { ref field_name } if field_name == "keyword_replies.keyword")
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Catalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, WidgetError::CatalogParse(_)));
    assert!(!err.is_validation());
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Catalog::from_path("/definitely/not/here/catalog.json").unwrap_err();
    assert!(matches!(err, WidgetError::CatalogRead { .. }));
}
