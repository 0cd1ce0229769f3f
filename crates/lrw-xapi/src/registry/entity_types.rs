//! Canonical entity type <-> xAPI activity type IRI.
//!
//! `DigitalResource` is intentionally absent: it shares the media IRI with
//! `MediaObject`, and only one of them can own it.

use lrw_core::models::EntityType;

pub const ACTIVITY_ENTITY_TYPES: &[(EntityType, &str)] = &[
    (EntityType::Annotation, "http://risc-inc.com/annotator/activities/highlight"),
    (EntityType::CourseSection, "http://adlnet.gov/expapi/activities/course"),
    (EntityType::Group, "http://activitystrea.ms/schema/1.0/group"),
    (EntityType::LearningObjective, "http://adlnet.gov/expapi/activities/objective"),
    (EntityType::Person, "http://activitystrea.ms/schema/1.0/person"),
    (EntityType::Organization, "http://activitystrea.ms/schema/1.0/organization"),
    (EntityType::SoftwareApplication, "http://activitystrea.ms/schema/1.0/application"),
    (EntityType::MediaObject, "http://adlnet.gov/expapi/activities/media"),
    (EntityType::WebPage, "http://activitystrea.ms/schema/1.0/page"),
];
