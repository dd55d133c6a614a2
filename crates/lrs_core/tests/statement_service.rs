use lrs_core::{
    ConversionError, ConversionService, InMemoryEventRepository, PageRequest, Statement,
    StatementFilter, StatementService, StatementServiceError,
};
use serde_json::json;

fn service() -> StatementService<InMemoryEventRepository> {
    StatementService::new(InMemoryEventRepository::new(), ConversionService::standard())
}

fn statement(id: &str, minute: u32, actor: &str, course: &str) -> Statement {
    serde_json::from_value(json!({
        "id": id,
        "timestamp": format!("2024-03-01T09:{minute:02}:00Z"),
        "actor": { "mbox": actor },
        "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" },
        "object": {
            "id": "http://example.com/lesson/1",
            "definition": { "name": { "en": "Lesson 1" } }
        },
        "context": {
            "contextActivities": { "grouping": [{ "id": course }] }
        }
    }))
    .expect("statement fixture should deserialize")
}

#[test]
fn saved_statement_reads_back_as_xapi() {
    let service = service();
    let source = statement("s-1", 5, "mailto:a@example.com", "course-1");

    let id = service.save_statement("tenant-a", &source).unwrap();
    assert_eq!(id, "s-1");

    let loaded = service
        .get_statement("tenant-a", "s-1")
        .unwrap()
        .expect("statement stored");
    assert_eq!(loaded.id, "s-1");
    assert_eq!(loaded.timestamp.as_deref(), Some("2024-03-01T09:05:00.000Z"));
    assert_eq!(loaded.verb, source.verb);
    assert_eq!(
        loaded.actor.as_ref().and_then(|actor| actor.mbox.as_deref()),
        Some("mailto:a@example.com")
    );
    assert_eq!(
        loaded
            .object
            .as_ref()
            .and_then(|object| object.definition.as_ref())
            .and_then(|definition| definition.name.as_ref())
            .and_then(|name| name.get("en"))
            .map(String::as_str),
        Some("Lesson 1")
    );

    assert!(service.get_statement("tenant-b", "s-1").unwrap().is_none());
}

#[test]
fn list_statements_selects_lookup_from_filter() {
    let service = service();
    let fixtures = [
        statement("s-1", 1, "mailto:a@example.com", "course-1"),
        statement("s-2", 2, "mailto:b@example.com", "course-1"),
        statement("s-3", 3, "mailto:a@example.com", "course-2"),
    ];
    for fixture in &fixtures {
        service.save_statement("tenant-a", fixture).unwrap();
    }

    let list = |group_id: Option<&str>, actor_id: Option<&str>| -> Vec<String> {
        let filter = StatementFilter {
            group_id: group_id.map(str::to_string),
            actor_id: actor_id.map(str::to_string),
        };
        service
            .list_statements("tenant-a", &filter, PageRequest::default())
            .unwrap()
            .items
            .into_iter()
            .map(|statement| statement.id)
            .collect()
    };

    assert_eq!(list(None, None), vec!["s-3", "s-2", "s-1"]);
    assert_eq!(list(Some("course-1"), None), vec!["s-2", "s-1"]);
    assert_eq!(list(None, Some("mailto:a@example.com")), vec!["s-3", "s-1"]);
    assert_eq!(
        list(Some("course-1"), Some("mailto:a@example.com")),
        vec!["s-1"]
    );
}

#[test]
fn conversion_failure_is_reported_and_nothing_is_stored() {
    let service = service();
    let mut bad = statement("s-1", 1, "mailto:a@example.com", "course-1");
    bad.timestamp = Some("not a time".to_string());

    let err = service
        .save_statement("tenant-a", &bad)
        .expect_err("bad timestamp must fail");
    assert!(matches!(
        err,
        StatementServiceError::Conversion(ConversionError::MalformedTimestamp { .. })
    ));
    assert_eq!(service.repo().count("tenant-a").unwrap(), 0);
}
