//! Canonical action -> coarse event kind. Many-to-one, consulted only in the
//! statement -> event direction.

use std::collections::HashMap;

use lrw_core::models::{Action, EventType};

pub const ACTION_EVENT_TYPES: &[(Action, EventType)] = &[
    (Action::Abandoned, EventType::AssignableEvent),
    (Action::Activated, EventType::AssignableEvent),
    (Action::Attached, EventType::AnnotationEvent),
    (Action::Bookmarked, EventType::AnnotationEvent),
    (Action::ChangedResolution, EventType::MediaEvent),
    (Action::ChangedSize, EventType::MediaEvent),
    (Action::ChangedVolume, EventType::MediaEvent),
    (Action::Classified, EventType::AnnotationEvent),
    (Action::ClosedPopout, EventType::MediaEvent),
    (Action::Commented, EventType::AnnotationEvent),
    (Action::Completed, EventType::AssignableEvent),
    (Action::Deactivated, EventType::AssignableEvent),
    (Action::Described, EventType::AnnotationEvent),
    (Action::Disliked, EventType::AnnotationEvent),
    (Action::DisabledClosedCaptioning, EventType::MediaEvent),
    (Action::EnabledClosedCaptioning, EventType::MediaEvent),
    (Action::Ended, EventType::MediaEvent),
    (Action::EnteredFullScreen, EventType::MediaEvent),
    (Action::ExitedFullScreen, EventType::MediaEvent),
    (Action::ForwardedTo, EventType::MediaEvent),
    (Action::Graded, EventType::GradeEvent),
    (Action::Hid, EventType::AssignableEvent),
    (Action::Highlighted, EventType::AnnotationEvent),
    (Action::JumpedTo, EventType::MediaEvent),
    (Action::Identified, EventType::AnnotationEvent),
    (Action::Liked, EventType::AnnotationEvent),
    (Action::Linked, EventType::AnnotationEvent),
    (Action::LoggedIn, EventType::SessionEvent),
    (Action::LoggedOut, EventType::SessionEvent),
    (Action::Muted, EventType::MediaEvent),
    (Action::NavigatedTo, EventType::NavigationEvent),
    (Action::OpenedPopout, EventType::MediaEvent),
    (Action::Paused, EventType::MediaEvent),
    (Action::Ranked, EventType::AnnotationEvent),
    (Action::Questioned, EventType::AnnotationEvent),
    (Action::Recommended, EventType::AnnotationEvent),
    (Action::Replied, EventType::AnnotationEvent),
    (Action::Restarted, EventType::AssessmentEvent),
    (Action::Resumed, EventType::MediaEvent),
    (Action::Reviewed, EventType::AssignableEvent),
    (Action::Rewound, EventType::MediaEvent),
    (Action::Searched, EventType::ReadingEvent),
    (Action::Shared, EventType::AnnotationEvent),
    (Action::Showed, EventType::AssignableEvent),
    (Action::Skipped, EventType::AssessmentItemEvent),
    (Action::Started, EventType::Event),
    (Action::Submitted, EventType::Event),
    (Action::Subscribed, EventType::AnnotationEvent),
    (Action::Tagged, EventType::AnnotationEvent),
    (Action::TimedOut, EventType::SessionEvent),
    (Action::Viewed, EventType::Event),
    (Action::Unmuted, EventType::MediaEvent),
];

#[derive(Debug, Clone)]
pub struct EventKindTable {
    kinds: HashMap<Action, EventType>,
}

impl EventKindTable {
    pub fn from_pairs(pairs: &[(Action, EventType)]) -> Self {
        Self {
            kinds: pairs.iter().copied().collect(),
        }
    }

    pub fn get(&self, action: Action) -> Option<EventType> {
        self.kinds.get(&action).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
