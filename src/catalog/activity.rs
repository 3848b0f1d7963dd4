// SPDX-License-Identifier: MPL-2.0
//! Notification inbox.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Like,
    Comment,
    Follow,
    Gift,
    Milestone,
}

impl ActivityKind {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ActivityKind::Like => "♥",
            ActivityKind::Comment => "💬",
            ActivityKind::Follow => "＋",
            ActivityKind::Gift => "🎁",
            ActivityKind::Milestone => "🏆",
        }
    }
}

/// One inbox entry. Owned because entries are marked read in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub actor: String,
    pub avatar: String,
    pub message: String,
    pub when: String,
    pub read: bool,
}

#[must_use]
pub fn sample_inbox() -> Vec<Activity> {
    let seeds = [
        (ActivityKind::Like, "Sarah Chen", "👩‍🔬", "liked your video \"Quantum Physics Explained\"", "5m ago", false),
        (ActivityKind::Comment, "Mike Johnson", "👨‍🎓", "commented: \"This is amazing! Can you make more?\"", "15m ago", false),
        (ActivityKind::Follow, "Emma Davis", "👩‍💻", "started following you", "1h ago", false),
        (ActivityKind::Gift, "Alex Turner", "🧑", "sent you a 👑 Crown (50 tokens)", "2h ago", true),
        (ActivityKind::Milestone, "LearnReel", "🎓", "You reached 10K followers! 🎉", "3h ago", true),
        (ActivityKind::Like, "Lisa Park", "👩", "and 234 others liked your video", "5h ago", true),
        (ActivityKind::Comment, "David Kim", "👨", "replied to your comment", "1d ago", true),
    ];

    seeds
        .into_iter()
        .zip(1u32..)
        .map(|((kind, actor, avatar, message, when, read), id)| Activity {
            id,
            kind,
            actor: actor.to_string(),
            avatar: avatar.to_string(),
            message: message.to_string(),
            when: when.to_string(),
            read,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_inbox_starts_with_three_unread() {
        let inbox = sample_inbox();
        assert_eq!(inbox.len(), 7);
        assert_eq!(inbox.iter().filter(|entry| !entry.read).count(), 3);
    }
}
