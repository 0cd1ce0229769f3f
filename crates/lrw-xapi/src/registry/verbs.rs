//! Canonical action <-> xAPI verb IRI.

use lrw_core::models::Action;

pub const VERB_ACTIONS: &[(Action, &str)] = &[
    (Action::Abandoned, "https://w3id.org/xapi/adl/verbs/abandoned"),
    (Action::Attached, "http://activitystrea.ms/schema/1.0/attach"),
    (Action::Bookmarked, "http://id.tincanapi.com/verb/bookmarked"),
    (Action::Commented, "http://adlnet.gov/expapi/verbs/commented"),
    (Action::Completed, "http://adlnet.gov/expapi/verbs/completed"),
    (Action::Disliked, "http://activitystrea.ms/schema/1.0/dislike"),
    (Action::Graded, "http://adlnet.gov/expapi/verbs/scored"),
    (Action::Liked, "http://activitystrea.ms/schema/1.0/like"),
    (Action::LoggedIn, "https://brindlewaye.com/xAPITerms/verbs/loggedin/"),
    (Action::LoggedOut, "https://brindlewaye.com/xAPITerms/verbs/loggedout/"),
    (Action::Paused, "http://id.tincanapi.com/verb/paused"),
    (Action::Questioned, "http://adlnet.gov/expapi/verbs/asked"),
    (Action::Replied, "http://adlnet.gov/expapi/verbs/responded"),
    (Action::Resumed, "http://adlnet.gov/expapi/verbs/resumed"),
    (Action::Reviewed, "http://id.tincanapi.com/verb/reviewed"),
    (Action::Searched, "http://activitystrea.ms/schema/1.0/search"),
    (Action::Shared, "http://activitystrea.ms/schema/1.0/share"),
    (Action::Skipped, "http://id.tincanapi.com/verb/skipped"),
    (Action::Started, "http://activitystrea.ms/schema/1.0/start"),
    (Action::Submitted, "http://activitystrea.ms/schema/1.0/submit"),
    (Action::Tagged, "http://activitystrea.ms/schema/1.0/tag"),
    (Action::Viewed, "http://id.tincanapi.com/verb/viewed"),
];
