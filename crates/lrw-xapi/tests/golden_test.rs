use lrw_core::config::ConversionConfig;
use lrw_core::constants::{DEFAULT_XAPI_VERB, MOODLE_LOGSTORE_EXTENSION};
use lrw_core::errors::ConversionError;
use lrw_core::models::{AgentKind, Event, Statement};
use lrw_xapi::XapiConverter;
use serde_json::json;
use test_fixtures::load_fixture;

fn converter() -> XapiConverter {
    XapiConverter::with_defaults().unwrap()
}

fn convert(fixture: &str) -> Event {
    let statement: Statement = load_fixture(fixture);
    converter().from_xapi(&statement).unwrap()
}

#[test]
fn sakai_statement_with_site_parent() {
    let event = convert("statements/sakai_site_parent.json");

    assert_eq!(event.event_time.to_rfc3339(), "2021-05-01T12:00:00+00:00");
    assert_eq!(event.action.as_deref(), Some("Graded"));
    assert_eq!(event.context, "GradeEvent");

    let actor = event.actor.unwrap();
    assert_eq!(actor.kind(), Some(AgentKind::Mailbox));
    assert_eq!(actor.id.as_deref(), Some("mailto:jane.doe@example.edu"));
    assert_eq!(actor.name.as_deref(), Some("Jane Doe"));

    let object = event.object.unwrap();
    assert_eq!(
        object.type_.as_deref(),
        Some("http://adlnet.gov/expapi/activities/assessment")
    );
    assert_eq!(object.name.as_deref(), Some("Midterm"));
    assert_eq!(object.description.as_deref(), Some("Examen de mi-session"));

    let generated = event.generated.unwrap();
    assert_eq!(generated.score, Some(0.85));
    assert_eq!(generated.extensions["http://example.edu/xapi/attempt"], "2");

    let group = event.group.unwrap();
    assert_eq!(group.id.as_deref(), Some("42"));
    assert_eq!(group.type_.as_deref(), Some("CourseSection"));
}

#[test]
fn learning_locker_statement_with_single_grouping() {
    let event = convert("statements/learning_locker_single_grouping.json");

    assert_eq!(event.action.as_deref(), Some("Viewed"));
    assert_eq!(event.context, "Event");

    let actor = event.actor.unwrap();
    assert_eq!(actor.kind(), Some(AgentKind::Account));
    assert_eq!(actor.id.as_deref(), Some("sstudent"));
    assert_eq!(actor.extensions["HOMEPAGE"], "https://moodle.example.edu");

    let object = event.object.unwrap();
    assert_eq!(object.type_.as_deref(), Some("WebPage"));
    assert_eq!(object.name.as_deref(), Some("Week 1 reading"));

    let group = event.group.unwrap();
    assert_eq!(group.id.as_deref(), Some("17"));
    assert_eq!(group.type_.as_deref(), Some("CourseSection"));
    assert_eq!(group.name.as_deref(), Some("Example Moodle"));
    let log_row: serde_json::Value =
        serde_json::from_str(&group.extensions[MOODLE_LOGSTORE_EXTENSION]).unwrap();
    assert_eq!(log_row["courseid"], json!("17"));
    assert!(group.sub_organization_of.is_none());
}

#[test]
fn moodle_statement_with_multiple_groupings() {
    let event = convert("statements/moodle_multi_grouping.json");

    assert_eq!(event.action.as_deref(), Some("Completed"));
    assert_eq!(event.context, "AssignableEvent");
    assert_eq!(
        event.event_time.to_rfc3339(),
        "2021-05-02T08:30:15.250+00:00"
    );
    assert_eq!(event.actor.unwrap().kind(), Some(AgentKind::OpenId));

    let group = event.group.unwrap();
    assert_eq!(group.id.as_deref(), Some("17"));
    assert_eq!(group.type_.as_deref(), Some("CourseSection"));
    assert_eq!(group.name.as_deref(), Some("Biology 101"));

    let parent = group.sub_organization_of.unwrap();
    assert_eq!(
        parent.id.as_deref(),
        Some("https://moodle.example.edu/course/index.php?categoryid=3")
    );
    assert_eq!(parent.type_.as_deref(), Some("CourseOffering"));
    assert_eq!(parent.name.as_deref(), Some("Sciences"));
}

#[test]
fn home_page_only_account_with_unregistered_verb() {
    let c = converter();
    let statement: Statement = load_fixture("statements/account_actor.json");
    let event = c.from_xapi(&statement).unwrap();

    assert_eq!(
        event.action.as_deref(),
        Some("http://example.com/verbs/pondered")
    );
    let actor = event.actor.as_ref().unwrap();
    assert_eq!(actor.id.as_deref(), Some("https://lms.example.edu/users/7"));
    assert_eq!(actor.kind(), Some(AgentKind::Account));
    assert!(actor.extensions.is_empty());
    assert_eq!(
        event.object.as_ref().unwrap().type_.as_deref(),
        Some("DigitalResource")
    );

    let back = c.to_xapi(&event).unwrap();
    assert_eq!(back.verb.unwrap().id, DEFAULT_XAPI_VERB);
    let account = back.actor.unwrap().account.unwrap();
    assert_eq!(account.name.as_deref(), Some("https://lms.example.edu/users/7"));
    assert_eq!(account.home_page, None);
}

#[test]
fn graded_event_back_to_statement() {
    let event: Event = load_fixture("events/graded_event.json");
    let statement = converter().to_xapi(&event).unwrap();

    assert_eq!(
        statement.id.as_deref(),
        Some("urn:uuid:3a9f0e62-8b1c-4d7e-a5f4-0c6b2d8e1f37")
    );
    assert_eq!(statement.timestamp.as_deref(), Some("2021-05-01T12:00:00Z"));
    assert_eq!(
        statement.verb.unwrap().id,
        "http://adlnet.gov/expapi/verbs/scored"
    );

    let account = statement.actor.unwrap().account.unwrap();
    assert_eq!(account.name.as_deref(), Some("jdoe"));
    assert_eq!(account.home_page.as_deref(), Some("https://lms.example.edu"));

    let definition = statement.object.unwrap().definition.unwrap();
    assert_eq!(
        definition.type_.as_deref(),
        Some("http://adlnet.gov/expapi/activities/course")
    );
    assert_eq!(definition.name["en"], "Essay");
    assert_eq!(
        definition.extensions.keys().collect::<Vec<_>>(),
        ["http://example.edu/xapi/weight"]
    );

    // Score only, no extensions: nothing to carry back.
    assert!(statement.result.is_none());

    let activities = statement.context.unwrap().context_activities.unwrap();
    assert!(activities.parent.is_empty());
    assert_eq!(activities.grouping.len(), 1);
    assert_eq!(activities.grouping[0].id.as_deref(), Some("42"));
}

#[test]
fn graded_event_fails_in_strict_mode() {
    let event: Event = load_fixture("events/graded_event.json");
    let strict = XapiConverter::new(ConversionConfig {
        strict_extension_keys: true,
        ..ConversionConfig::default()
    })
    .unwrap();
    assert!(matches!(
        strict.to_xapi(&event),
        Err(ConversionError::MalformedExtensionKey { .. })
    ));
}
