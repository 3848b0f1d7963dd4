// SPDX-License-Identifier: MPL-2.0
//! Choices offered while recording, editing and publishing a lesson.

/// Maximum recording length the camera step offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingLimit {
    #[default]
    Short,
    Medium,
    Long,
}

impl RecordingLimit {
    pub const ALL: [RecordingLimit; 3] = [
        RecordingLimit::Short,
        RecordingLimit::Medium,
        RecordingLimit::Long,
    ];

    #[must_use]
    pub fn seconds(self) -> u32 {
        match self {
            RecordingLimit::Short => 15,
            RecordingLimit::Medium => 30,
            RecordingLimit::Long => 180,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RecordingLimit::Short => "15s",
            RecordingLimit::Medium => "30s",
            RecordingLimit::Long => "3m",
        }
    }
}

/// Formats elapsed seconds as `mm:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Tool panels of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTool {
    #[default]
    Trim,
    Effects,
    Text,
    Music,
}

impl EditTool {
    pub const ALL: [EditTool; 4] = [EditTool::Trim, EditTool::Effects, EditTool::Text, EditTool::Music];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            EditTool::Trim => "edit-tool-trim",
            EditTool::Effects => "edit-tool-effects",
            EditTool::Text => "edit-tool-text",
            EditTool::Music => "edit-tool-music",
        }
    }
}

/// Length of the editable clip in seconds.
pub const TIMELINE_SECONDS: u32 = 60;

pub const EFFECTS: &[(&str, &str)] = &[
    ("None", "⚪"),
    ("Vintage", "📷"),
    ("Vibrant", "🌈"),
    ("B&W", "⚫"),
    ("Sunset", "🌅"),
    ("Cool", "❄️"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicTrack {
    pub name: &'static str,
    pub artist: &'static str,
    pub duration: &'static str,
}

pub const MUSIC_TRACKS: &[MusicTrack] = &[
    MusicTrack { name: "Upbeat Learning", artist: "EduTok Music", duration: "2:30" },
    MusicTrack { name: "Focus Flow", artist: "Study Beats", duration: "3:15" },
    MusicTrack { name: "Knowledge Quest", artist: "Brain Wave", duration: "2:45" },
    MusicTrack { name: "Discovery", artist: "Learning Lab", duration: "3:00" },
];

pub const TEXT_STYLES: &[&str] = &["Bold", "Classic", "Modern", "Playful"];

/// A publishing category and its subtopics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub subtopics: &'static [&'static str],
}

pub const LESSON_CATEGORIES: &[LessonCategory] = &[
    LessonCategory {
        name: "Science",
        icon: "🔬",
        subtopics: &["Physics", "Biology", "Chemistry", "Astronomy", "Environmental Science"],
    },
    LessonCategory {
        name: "Mathematics",
        icon: "📐",
        subtopics: &["Algebra", "Geometry", "Calculus", "Statistics", "Trigonometry"],
    },
    LessonCategory {
        name: "History",
        icon: "📜",
        subtopics: &["World History", "American History", "Ancient Civilizations", "Modern History"],
    },
    LessonCategory {
        name: "Art",
        icon: "🎨",
        subtopics: &["Drawing", "Painting", "Digital Art", "Art History", "Sculpture"],
    },
    LessonCategory {
        name: "Technology",
        icon: "💻",
        subtopics: &["Programming", "Web Development", "Data Science", "AI & Machine Learning"],
    },
    LessonCategory {
        name: "Language",
        icon: "🗣",
        subtopics: &["English", "Spanish", "French", "Mandarin", "Grammar"],
    },
];

/// Self-review items shown before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityCheck {
    VideoLength,
    CaptionsEnabled,
    SourceCitation,
}

impl QualityCheck {
    pub const ALL: [QualityCheck; 3] = [
        QualityCheck::VideoLength,
        QualityCheck::CaptionsEnabled,
        QualityCheck::SourceCitation,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            QualityCheck::VideoLength => "quality-video-length",
            QualityCheck::CaptionsEnabled => "quality-captions",
            QualityCheck::SourceCitation => "quality-sources",
        }
    }
}

/// Interests offered during onboarding.
pub const INTERESTS: &[&str] = &[
    "Science",
    "Mathematics",
    "History",
    "Art",
    "Technology",
    "Language",
    "Music",
    "Physics",
    "Chemistry",
    "Biology",
    "Literature",
    "Philosophy",
    "Economics",
    "Psychology",
];

/// Fewest interests a new user has to pick.
pub const MIN_INTERESTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(180), "03:00");
    }

    #[test]
    fn limits_are_increasing() {
        assert!(RecordingLimit::ALL
            .windows(2)
            .all(|pair| pair[0].seconds() < pair[1].seconds()));
    }

    #[test]
    fn there_are_fourteen_interests() {
        assert_eq!(INTERESTS.len(), 14);
    }
}
