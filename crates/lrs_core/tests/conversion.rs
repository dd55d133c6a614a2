use chrono::{Duration, TimeZone, Utc};
use lrs_core::convert::actor::{HOMEPAGE_EXTENSION, SCHEME_ACCOUNT, SCHEME_MBOX};
use lrs_core::{
    Action, ConversionError, ConversionService, Entity, EntityType, Event, EventType, Group,
    Statement, VocabularyTables,
};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn statement(value: serde_json::Value) -> Statement {
    serde_json::from_value(value).expect("statement fixture should deserialize")
}

#[test]
fn action_verb_round_trip_is_stable_for_every_mapped_action() {
    let tables = VocabularyTables::standard();
    for action in tables.mapped_actions() {
        let verb = tables
            .verb_for_action(action)
            .expect("mapped action should have a verb");
        let back = tables
            .action_for_verb(verb)
            .expect("verb should map back to an action");
        assert_eq!(
            tables.verb_for_action(back),
            Some(verb),
            "unstable round trip for {action}"
        );
    }
}

#[test]
fn completed_verb_only_statement_becomes_assignable_event() {
    let service = ConversionService::standard();
    let before = Utc::now();
    let event = service
        .from_xapi(&statement(json!({
            "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" }
        })))
        .unwrap();
    let after = Utc::now();

    assert_eq!(
        event.action.as_deref(),
        Some("http://adlnet.gov/expapi/verbs/completed")
    );
    assert_eq!(event.kind, "http://purl.imsglobal.org/caliper/v1/AssignableEvent");
    assert!(event.event_time >= before && event.event_time <= after);
    assert!(event.created_at >= before && event.created_at <= after + Duration::seconds(1));
    assert!(event.actor.is_none());
    assert!(event.object.is_none());
    assert!(event.group.is_none());
    assert!(event.generated.is_none());
    assert!(event.target.is_none());
}

#[test]
fn mailbox_only_actor_keeps_mailbox_scheme() {
    let service = ConversionService::standard();
    let event = service
        .from_xapi(&statement(json!({
            "actor": { "mbox": "mailto:a@example.com", "name": "A" },
            "verb": { "id": "http://adlnet.gov/expapi/verbs/experienced" }
        })))
        .unwrap();

    let actor = event.actor.expect("actor");
    assert_eq!(actor.kind.as_deref(), Some(SCHEME_MBOX));
    assert_eq!(actor.id.as_deref(), Some("mailto:a@example.com"));
    assert_eq!(actor.name.as_deref(), Some("A"));
}

#[test]
fn account_actor_round_trips_name_and_home_page() {
    let service = ConversionService::standard();
    let event = service
        .from_xapi(&statement(json!({
            "id": "6690e6c9-3ef0-4ed3-8b37-7f3964730bee",
            "actor": {
                "account": { "name": "alice", "homePage": "http://school.example/" }
            },
            "verb": { "id": "http://adlnet.gov/expapi/verbs/attempted" }
        })))
        .unwrap();

    let actor = event.actor.as_ref().expect("actor");
    assert_eq!(actor.kind.as_deref(), Some(SCHEME_ACCOUNT));
    assert_eq!(actor.id.as_deref(), Some("alice"));
    assert_eq!(
        actor.extensions.get(HOMEPAGE_EXTENSION).map(String::as_str),
        Some("http://school.example/")
    );

    let back = service.to_xapi(&event).unwrap();
    let account = back
        .actor
        .and_then(|actor| actor.account)
        .expect("account restored");
    assert_eq!(account.name.as_deref(), Some("alice"));
    assert_eq!(account.home_page.as_deref(), Some("http://school.example/"));
}

#[test]
fn grouping_with_single_parent_builds_sub_organization() {
    let service = ConversionService::standard();
    let event = service
        .from_xapi(&statement(json!({
            "verb": { "id": "http://adlnet.gov/expapi/verbs/launched" },
            "context": {
                "contextActivities": {
                    "grouping": [{ "id": "course-1" }],
                    "parent": [{
                        "id": "org-1",
                        "definition": { "type": "organization" }
                    }]
                }
            }
        })))
        .unwrap();

    let group = event.group.expect("group");
    assert_eq!(group.id, "course-1");
    let parent = group.sub_organization_of.expect("parent link");
    assert_eq!(parent.id, "org-1");
    assert_eq!(parent.kind.as_deref(), Some("organization"));
}

#[test]
fn unknown_verb_passes_through_as_generic_event() {
    let service = ConversionService::standard();
    let event = service
        .from_xapi(&statement(json!({
            "verb": { "id": "http://example.com/verbs/juggled" }
        })))
        .unwrap();

    assert_eq!(event.action.as_deref(), Some("http://example.com/verbs/juggled"));
    assert_eq!(event.kind, EventType::Event.as_str());
}

#[test]
fn malformed_object_extension_key_fails_whole_call() {
    let service = ConversionService::standard();
    let mut object = Entity::with_id("http://example.com/activities/1");
    object
        .extensions
        .insert("not an iri".to_string(), "x".to_string());
    let mut event = Event::new("e-1", EventType::Event.as_str(), Utc::now());
    event.object = Some(object);

    let err = service.to_xapi(&event).expect_err("relative key must fail");
    assert!(matches!(
        err,
        ConversionError::MalformedIdentifier { ref key, .. } if key == "not an iri"
    ));
}

#[test]
fn extension_key_with_space_is_rejected_not_rewritten() {
    let service = ConversionService::standard();
    let mut object = Entity::with_id("http://example.com/activities/1");
    object
        .extensions
        .insert("http://example.com/a b".to_string(), "x".to_string());
    let mut event = Event::new("e-1", EventType::Event.as_str(), Utc::now());
    event.object = Some(object);

    let err = service.to_xapi(&event).expect_err("key with space must fail");
    assert!(matches!(
        err,
        ConversionError::MalformedIdentifier { ref key, .. } if key == "http://example.com/a b"
    ));
}

#[test]
fn malformed_group_extension_key_fails_whole_call() {
    let service = ConversionService::standard();
    let mut group = Group::with_id("course-1");
    group
        .extensions
        .insert("http://example.com/term <2024>".to_string(), "spring".to_string());
    let mut event = Event::new("e-1", EventType::Event.as_str(), Utc::now());
    event.group = Some(group);

    let err = service.to_xapi(&event).expect_err("bad group key must fail");
    assert_eq!(err.code(), "malformed_identifier");
}

#[test]
fn valid_extension_keys_come_back_verbatim() {
    let service = ConversionService::standard();
    let mut object = Entity::with_id("http://example.com/activities/1");
    for key in ["http:example", "http://example.com", "urn:example:ext:1"] {
        object.extensions.insert(key.to_string(), "x".to_string());
    }
    let mut event = Event::new("e-1", EventType::Event.as_str(), Utc::now());
    event.object = Some(object);

    let statement = service.to_xapi(&event).unwrap();
    let value = serde_json::to_value(&statement).unwrap();
    let extensions = value["object"]["definition"]["extensions"]
        .as_object()
        .expect("extensions object");
    let mut keys: Vec<&str> = extensions.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["http://example.com", "http:example", "urn:example:ext:1"]);
}

#[test]
fn statement_with_malformed_extension_key_does_not_deserialize() {
    let parsed = serde_json::from_value::<Statement>(json!({
        "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" },
        "result": { "extensions": { "http://example.com/a b": 1 } }
    }));
    assert!(parsed.is_err());
}

#[test]
fn iso_8601_timestamp_variants_are_accepted() {
    let service = ConversionService::standard();
    let cases = [
        ("2015-06-01T10:00Z", Utc.with_ymd_and_hms(2015, 6, 1, 10, 0, 0).unwrap()),
        ("2015-06-01T12:00+02:00", Utc.with_ymd_and_hms(2015, 6, 1, 10, 0, 0).unwrap()),
        ("2015-06-01T10:00:00+0200", Utc.with_ymd_and_hms(2015, 6, 1, 8, 0, 0).unwrap()),
        ("2015-06-01", Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()),
    ];

    for (raw, expected) in cases {
        let event = service
            .from_xapi(&statement(json!({
                "timestamp": raw,
                "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" }
            })))
            .unwrap_or_else(|err| panic!("`{raw}` should parse: {err}"));
        assert_eq!(event.event_time, expected, "timestamp `{raw}`");
    }
}

#[test]
fn malformed_timestamp_fails_whole_call() {
    let service = ConversionService::standard();
    let err = service
        .from_xapi(&statement(json!({
            "timestamp": "last tuesday",
            "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" }
        })))
        .expect_err("garbage timestamp must fail");
    assert_eq!(err.code(), "malformed_timestamp");
}

#[test]
fn full_statement_converts_and_comes_back_asymmetrically() {
    let service = ConversionService::standard();
    let source = statement(json!({
        "id": "fd41c918-b88b-4b20-a0a5-a4c32391aaa0",
        "timestamp": "2015-06-01T12:00:00+02:00",
        "actor": { "openid": "http://openid.example/alice", "name": "Alice" },
        "verb": {
            "id": "http://adlnet.gov/expapi/verbs/scored",
            "display": { "en-US": "scored" }
        },
        "object": {
            "id": "http://example.com/quiz/1",
            "objectType": "Activity",
            "definition": {
                "type": "http://adlnet.gov/expapi/activities/assessment",
                "name": { "en-US": "Quiz 1" },
                "description": { "de": "Test", "en": "Quiz" },
                "extensions": { "http://example.com/ext/max": 10 }
            }
        },
        "result": {
            "extensions": { "http://example.com/ext/score": 0.8 }
        },
        "context": {
            "contextActivities": {
                "grouping": [{
                    "id": "http://example.com/course/1",
                    "definition": {
                        "type": "http://adlnet.gov/expapi/activities/course",
                        "name": { "en": "Course 1" }
                    }
                }]
            },
            "extensions": { "http://example.com/ext/term": "spring" }
        }
    }));

    let event = service.from_xapi(&source).unwrap();
    assert_eq!(event.id, "fd41c918-b88b-4b20-a0a5-a4c32391aaa0");
    assert_eq!(event.event_time, Utc.with_ymd_and_hms(2015, 6, 1, 10, 0, 0).unwrap());
    assert_eq!(event.kind, EventType::Outcome.as_str());

    let object = event.object.as_ref().expect("object");
    assert_eq!(
        object.kind.as_deref(),
        Some("http://adlnet.gov/expapi/activities/assessment")
    );
    assert_eq!(object.name.as_deref(), Some("Quiz 1"));
    assert_eq!(object.description.as_deref(), Some("Quiz"));
    assert_eq!(
        object.extensions.get("http://example.com/ext/max").map(String::as_str),
        Some("10")
    );

    let group = event.group.as_ref().expect("group");
    assert_eq!(group.kind.as_deref(), Some(EntityType::CourseSection.as_str()));
    assert_eq!(
        group.extensions.get("http://example.com/ext/term").map(String::as_str),
        Some("spring")
    );

    let back = service.to_xapi(&event).unwrap();
    assert_eq!(back.id, source.id);
    assert_eq!(back.timestamp.as_deref(), Some("2015-06-01T10:00:00.000Z"));
    assert_eq!(
        back.verb.as_ref().map(|verb| verb.id.as_str()),
        Some("http://adlnet.gov/expapi/verbs/scored")
    );
    assert_eq!(back.verb.as_ref().and_then(|verb| verb.display.as_ref()), None);
    assert_eq!(
        back.actor.as_ref().and_then(|actor| actor.openid.as_deref()),
        Some("http://openid.example/alice")
    );

    let object = back.object.as_ref().expect("object");
    let definition = object.definition.as_ref().expect("definition");
    assert_eq!(
        definition.kind.as_deref(),
        Some("http://adlnet.gov/expapi/activities/assessment")
    );

    let grouping = back
        .context
        .as_ref()
        .and_then(|context| context.context_activities.as_ref())
        .and_then(|activities| activities.grouping.as_ref())
        .expect("grouping");
    assert_eq!(grouping.len(), 1);
    assert_eq!(grouping[0].id, "http://example.com/course/1");
    assert!(grouping[0].definition.is_none());

    let result = serde_json::to_value(back.result.as_ref().expect("result")).unwrap();
    assert_eq!(
        result,
        json!({ "extensions": { "http://example.com/ext/score": "0.8" } })
    );
}

#[test]
fn event_serializes_with_caliper_field_names() {
    let service = ConversionService::standard();
    let event = service
        .from_xapi(&statement(json!({
            "id": "s-1",
            "timestamp": "2015-06-01T10:00:00Z",
            "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" }
        })))
        .unwrap();

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["@context"], json!("http://purl.imsglobal.org/ctx/caliper/v1/Context"));
    assert_eq!(
        value["@type"],
        json!("http://purl.imsglobal.org/caliper/v1/AssignableEvent")
    );
    assert_eq!(value["eventTime"], json!("2015-06-01T10:00:00Z"));
    assert!(value.get("dateCreated").is_some());
    assert!(value.get("generated").is_none());

    let decoded: Event = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn media_activity_type_maps_to_media_object() {
    let tables = VocabularyTables::standard();
    assert_eq!(
        tables.type_for_activity_type("http://adlnet.gov/expapi/activities/media"),
        Some(EntityType::MediaObject)
    );
    assert_eq!(
        tables.activity_type_for_type(EntityType::MediaObject),
        Some("http://adlnet.gov/expapi/activities/media")
    );
    assert_eq!(tables.activity_type_for_type(EntityType::DigitalResource), None);
    assert_eq!(
        tables.event_type_for_action(Action::Completed),
        Some(EventType::Assignable)
    );
}

#[test]
fn shared_converter_is_usable_across_threads() {
    let service = ConversionService::new(Arc::new(VocabularyTables::standard()));
    let handles: Vec<_> = (0..4)
        .map(|index| {
            let service = service.clone();
            thread::spawn(move || {
                let source = statement(json!({
                    "id": format!("s-{index}"),
                    "verb": { "id": "http://adlnet.gov/expapi/verbs/completed" }
                }));
                service.from_xapi(&source).map(|event| event.id)
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let id = handle
            .join()
            .expect("worker should not panic")
            .expect("conversion should succeed");
        assert_eq!(id, format!("s-{index}"));
    }
}
