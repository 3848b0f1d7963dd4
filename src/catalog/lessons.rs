// SPDX-License-Identifier: MPL-2.0
//! Lessons in the home feed.

/// How demanding a lesson is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Difficulty::Beginner => "difficulty-beginner",
            Difficulty::Intermediate => "difficulty-intermediate",
            Difficulty::Advanced => "difficulty-advanced",
        }
    }
}

/// A short video lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    /// Also the id of the creator's profile.
    pub id: &'static str,
    pub creator: &'static str,
    pub avatar: &'static str,
    pub credibility: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub duration: &'static str,
    pub likes: u64,
    pub comments: u64,
}

pub const FEED: &[Lesson] = &[
    Lesson {
        id: "1",
        creator: "Sarah Chen",
        avatar: "👩‍🔬",
        credibility: "Quantum Physicist, MIT",
        title: "Quantum Superposition Explained",
        subtitle: "Learn how particles exist in multiple states simultaneously",
        category: "Physics",
        difficulty: Difficulty::Intermediate,
        duration: "2:45",
        likes: 12_500,
        comments: 342,
    },
    Lesson {
        id: "2",
        creator: "Michael Torres",
        avatar: "👨‍🏫",
        credibility: "Mathematics Professor, Stanford",
        title: "Solving Quadratic Equations",
        subtitle: "Master the fundamentals with this step-by-step approach",
        category: "Mathematics",
        difficulty: Difficulty::Beginner,
        duration: "3:12",
        likes: 8_300,
        comments: 156,
    },
    Lesson {
        id: "3",
        creator: "Emma Richardson",
        avatar: "👩‍🎓",
        credibility: "Ancient History Scholar, Oxford",
        title: "The Lost Library of Alexandria",
        subtitle: "Uncovering what happened to ancient knowledge",
        category: "History",
        difficulty: Difficulty::Intermediate,
        duration: "4:05",
        likes: 21_700,
        comments: 589,
    },
    Lesson {
        id: "4",
        creator: "Isabella Martinez",
        avatar: "👩‍🎨",
        credibility: "Art Educator, The Met",
        title: "Color Theory Basics",
        subtitle: "Understanding complementary colors and visual harmony",
        category: "Art",
        difficulty: Difficulty::Beginner,
        duration: "2:30",
        likes: 9_800,
        comments: 201,
    },
    Lesson {
        id: "5",
        creator: "James Wilson",
        avatar: "🧠",
        credibility: "Cognitive Neuroscientist, Harvard",
        title: "How Your Brain Learns",
        subtitle: "Five neuroscience-backed methods for effective learning",
        category: "Psychology",
        difficulty: Difficulty::Advanced,
        duration: "3:48",
        likes: 31_200,
        comments: 734,
    },
];

/// Actions offered by a lesson's overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowAction {
    NotInterested,
    Hide,
    BlockCreator,
    Report,
}

impl OverflowAction {
    pub const ALL: [OverflowAction; 4] = [
        OverflowAction::NotInterested,
        OverflowAction::Hide,
        OverflowAction::BlockCreator,
        OverflowAction::Report,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            OverflowAction::NotInterested => "feed-menu-not-interested",
            OverflowAction::Hide => "feed-menu-hide",
            OverflowAction::BlockCreator => "feed-menu-block",
            OverflowAction::Report => "feed-menu-report",
        }
    }

    /// Key of the info toast raised after choosing the action.
    #[must_use]
    pub fn confirmation_key(self) -> &'static str {
        match self {
            OverflowAction::NotInterested => "notification-not-interested",
            OverflowAction::Hide => "notification-video-hidden",
            OverflowAction::BlockCreator => "notification-creator-blocked",
            OverflowAction::Report => "notification-video-reported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_ids_are_unique() {
        let mut ids: Vec<_> = FEED.iter().map(|lesson| lesson.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEED.len());
    }
}
