//! Shared constants for the learning record warehouse.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON-LD context stamped on every Caliper entity the converter builds.
pub const CALIPER_JSONLD_CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1p1";

/// Verb emitted when an event action has no registered xAPI verb.
pub const DEFAULT_XAPI_VERB: &str = "http://adlnet.gov/expapi/verbs/experienced";

/// Agent extension key holding an xAPI account home page.
pub const HOMEPAGE_EXTENSION: &str = "HOMEPAGE";

/// Language tag preferred when a language map has more than one entry.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Entity type of the Caliper result generated from an xAPI result.
pub const RESULT_ENTITY_TYPE: &str = "Result";

/// Substring identifying a Sakai site parent activity.
pub const SITE_PARENT_MARKER: &str = "portal/site";

/// Learning Locker context extension carrying the Moodle log row.
pub const MOODLE_LOGSTORE_EXTENSION: &str =
    "http://lrs.learninglocker.net/define/extensions/moodle_logstore_standard_log";

/// Key of the course id inside the Moodle log row extension.
pub const MOODLE_LOGSTORE_COURSE_ID: &str = "courseid";

/// Activity type of a Moodle course grouping.
pub const MOODLE_COURSE_TYPE: &str = "http://lrs.learninglocker.net/define/type/moodle/course";

/// Activity definition extension carrying the Moodle course record.
pub const MOODLE_COURSE_EXTENSION: &str =
    "http://lrs.learninglocker.net/define/extensions/moodle_course";

/// Key of the course id inside the Moodle course record extension.
pub const MOODLE_COURSE_ID: &str = "id";
