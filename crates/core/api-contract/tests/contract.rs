use api_contract::{ListEnvelope, NextLink, ResourceRef};

#[test]
fn list_envelope_serializes_camel_case() {
    let envelope = ListEnvelope {
        results: vec![ResourceRef {
            href: "http://localhost:8080/api/doors/DOOR-001".to_string(),
            name: "Main Entrance".to_string(),
        }],
        href: "http://localhost:8080/api/doors?top=1&skip=0".to_string(),
        next: Some(NextLink {
            href: "http://localhost:8080/api/doors?top=1&skip=1".to_string(),
        }),
        total_results: 12,
    };
    let value = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(value["totalResults"], 12);
    assert_eq!(value["results"][0]["name"], "Main Entrance");
    assert!(value["next"]["href"].as_str().unwrap().contains("skip=1"));
}

#[test]
fn list_envelope_omits_next_on_last_page() {
    let envelope = ListEnvelope::<ResourceRef> {
        results: Vec::new(),
        href: "http://localhost:8080/api/doors?top=10&skip=10".to_string(),
        next: None,
        total_results: 10,
    };
    let value = serde_json::to_value(&envelope).expect("serialize");
    assert!(value.get("next").is_none());
}
