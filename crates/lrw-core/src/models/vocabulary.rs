//! Closed vocabularies shared by statements and events.
//!
//! Each vocabulary is a fieldless enum with a canonical string. Parsing
//! accepts exactly the canonical string; anything else is `None` and callers
//! decide whether to pass the raw value through.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Parse a canonical string.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_vocabulary!(
    /// Caliper actions the warehouse knows how to classify.
    Action {
        Abandoned => "Abandoned",
        Activated => "Activated",
        Attached => "Attached",
        Bookmarked => "Bookmarked",
        ChangedResolution => "ChangedResolution",
        ChangedSize => "ChangedSize",
        ChangedVolume => "ChangedVolume",
        Classified => "Classified",
        ClosedPopout => "ClosedPopout",
        Commented => "Commented",
        Completed => "Completed",
        Deactivated => "Deactivated",
        Described => "Described",
        Disliked => "Disliked",
        DisabledClosedCaptioning => "DisabledClosedCaptioning",
        EnabledClosedCaptioning => "EnabledClosedCaptioning",
        Ended => "Ended",
        EnteredFullScreen => "EnteredFullScreen",
        ExitedFullScreen => "ExitedFullScreen",
        ForwardedTo => "ForwardedTo",
        Graded => "Graded",
        Hid => "Hid",
        Highlighted => "Highlighted",
        Identified => "Identified",
        JumpedTo => "JumpedTo",
        Liked => "Liked",
        Linked => "Linked",
        LoggedIn => "LoggedIn",
        LoggedOut => "LoggedOut",
        Muted => "Muted",
        NavigatedTo => "NavigatedTo",
        OpenedPopout => "OpenedPopout",
        Paused => "Paused",
        Questioned => "Questioned",
        Ranked => "Ranked",
        Recommended => "Recommended",
        Replied => "Replied",
        Restarted => "Restarted",
        Resumed => "Resumed",
        Reviewed => "Reviewed",
        Rewound => "Rewound",
        Searched => "Searched",
        Shared => "Shared",
        Showed => "Showed",
        Skipped => "Skipped",
        Started => "Started",
        Submitted => "Submitted",
        Subscribed => "Subscribed",
        Tagged => "Tagged",
        TimedOut => "TimedOut",
        Unmuted => "Unmuted",
        Viewed => "Viewed",
    }
);

define_vocabulary!(
    /// Caliper entity types.
    EntityType {
        Annotation => "Annotation",
        CourseOffering => "CourseOffering",
        CourseSection => "CourseSection",
        DigitalResource => "DigitalResource",
        Group => "Group",
        LearningObjective => "LearningObjective",
        MediaObject => "MediaObject",
        Organization => "Organization",
        Person => "Person",
        SoftwareApplication => "SoftwareApplication",
        WebPage => "WebPage",
    }
);

define_vocabulary!(
    /// Coarse Caliper event kinds.
    EventType {
        Event => "Event",
        AnnotationEvent => "AnnotationEvent",
        AssessmentEvent => "AssessmentEvent",
        AssessmentItemEvent => "AssessmentItemEvent",
        AssignableEvent => "AssignableEvent",
        GradeEvent => "GradeEvent",
        MediaEvent => "MediaEvent",
        NavigationEvent => "NavigationEvent",
        ReadingEvent => "ReadingEvent",
        SessionEvent => "SessionEvent",
    }
);

define_vocabulary!(
    /// Identity strategy of an agent: which xAPI inverse functional identifier
    /// the agent id came from.
    AgentKind {
        OpenId => "http://openid.net/",
        Mailbox => "foaf:mbox",
        Account => "https://github.com/adlnet/xAPI-Spec/blob/master/xAPI.md#agentaccount",
    }
);
