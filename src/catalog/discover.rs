// SPDX-License-Identifier: MPL-2.0
//! Content of the Discover tab.

/// Subject used by the filter chips and to tag categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    Science,
    Math,
    History,
    Art,
    Technology,
    Language,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Science,
        Subject::Math,
        Subject::History,
        Subject::Art,
        Subject::Technology,
        Subject::Language,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Subject::Science => "subject-science",
            Subject::Math => "subject-math",
            Subject::History => "subject-history",
            Subject::Art => "subject-art",
            Subject::Technology => "subject-technology",
            Subject::Language => "subject-language",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTile {
    pub title: &'static str,
    pub creator: &'static str,
    pub views: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingTopic {
    pub tag: &'static str,
    pub views: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub subject: Subject,
    pub icon: &'static str,
    pub learners: &'static str,
    pub videos: &'static [VideoTile],
}

pub const FOR_YOU: &[VideoTile] = &[
    VideoTile { title: "Quantum Mechanics Explained", creator: "@physicsmaster", views: "2.4M" },
    VideoTile { title: "Calculus in 60 Seconds", creator: "@mathgenius", views: "1.8M" },
    VideoTile { title: "Ancient Rome Secrets", creator: "@historyteacher", views: "3.1M" },
    VideoTile { title: "Renaissance Art Guide", creator: "@arthistorian", views: "1.2M" },
];

pub const TRENDING_TOPICS: &[TrendingTopic] = &[
    TrendingTopic { tag: "QuantumPhysics", views: "2.4M" },
    TrendingTopic { tag: "MathTricks", views: "1.8M" },
    TrendingTopic { tag: "HistoryFacts", views: "3.1M" },
    TrendingTopic { tag: "ArtTutorial", views: "1.2M" },
    TrendingTopic { tag: "CodingBasics", views: "2.9M" },
    TrendingTopic { tag: "ScienceExperiments", views: "1.6M" },
];

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Science",
        subject: Subject::Science,
        icon: "🔬",
        learners: "1.2M",
        videos: &[
            VideoTile { title: "DNA Explained", creator: "@biologybuff", views: "2.1M" },
            VideoTile { title: "Chemistry Basics", creator: "@chemlab", views: "1.8M" },
            VideoTile { title: "Physics Fun", creator: "@physicsmaster", views: "2.5M" },
        ],
    },
    Category {
        name: "Mathematics",
        subject: Subject::Math,
        icon: "📐",
        learners: "890K",
        videos: &[
            VideoTile { title: "Algebra Made Easy", creator: "@mathgenius", views: "1.5M" },
            VideoTile { title: "Geometry Tricks", creator: "@mathmaster", views: "980K" },
            VideoTile { title: "Calculus 101", creator: "@proftorres", views: "1.2M" },
        ],
    },
    Category {
        name: "History",
        subject: Subject::History,
        icon: "📜",
        learners: "756K",
        videos: &[
            VideoTile { title: "World War II", creator: "@historyteacher", views: "3.2M" },
            VideoTile { title: "Ancient Egypt", creator: "@historypro", views: "2.8M" },
            VideoTile { title: "Renaissance Era", creator: "@arthistorian", views: "1.9M" },
        ],
    },
    Category {
        name: "Art",
        subject: Subject::Art,
        icon: "🎨",
        learners: "634K",
        videos: &[
            VideoTile { title: "Watercolor Basics", creator: "@artmaster", views: "1.4M" },
            VideoTile { title: "Drawing Portraits", creator: "@sketchbook", views: "1.1M" },
            VideoTile { title: "Color Theory", creator: "@arthistorian", views: "890K" },
        ],
    },
    Category {
        name: "Technology",
        subject: Subject::Technology,
        icon: "💻",
        learners: "1.5M",
        videos: &[
            VideoTile { title: "Python Basics", creator: "@codeacademy", views: "2.7M" },
            VideoTile { title: "Web Development", creator: "@techguru", views: "2.1M" },
            VideoTile { title: "AI Explained", creator: "@techguru", views: "3.4M" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_videos() {
        assert!(CATEGORIES.iter().all(|category| !category.videos.is_empty()));
    }
}
