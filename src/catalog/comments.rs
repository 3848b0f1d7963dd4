// SPDX-License-Identifier: MPL-2.0
//! Comment threads under a lesson.

/// What a comment contributes to the discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentKind {
    Instructor,
    Question,
    #[default]
    Insight,
}

impl CommentKind {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            CommentKind::Instructor => "comment-kind-instructor",
            CommentKind::Question => "comment-kind-question",
            CommentKind::Insight => "comment-kind-insight",
        }
    }
}

/// A posted comment. Owned so the drawer can edit counters and prepend
/// the user's own comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub avatar: String,
    pub text: String,
    pub helpful: u32,
    pub marked_helpful: bool,
    pub replies: u32,
    pub show_replies: bool,
    pub posted: String,
    pub kind: CommentKind,
    /// Higher is more recent.
    pub sequence: u64,
}

/// The thread every lesson starts with, newest first.
#[must_use]
pub fn sample_thread() -> Vec<Comment> {
    let seeds = [
        (
            "Dr. Sarah Chen",
            "👩‍🔬",
            "Great question! The key concept here is understanding the relationship between variables. Think of it like a see-saw: when one side goes up, the other must come down to maintain balance.",
            243,
            false,
            5,
            "2h ago",
            CommentKind::Instructor,
        ),
        (
            "Mike Johnson",
            "👨‍🎓",
            "Could you explain how this applies to real-world scenarios? I'm having trouble connecting the theory to practice.",
            89,
            true,
            2,
            "5h ago",
            CommentKind::Question,
        ),
        (
            "Emma Davis",
            "👩‍💻",
            "I found it helpful to work through the examples step-by-step rather than trying to understand everything at once. Breaking it down into smaller chunks made a huge difference.",
            156,
            false,
            8,
            "1d ago",
            CommentKind::Insight,
        ),
        (
            "Alex Rivera",
            "🧑‍🎓",
            "At 3:45, you mentioned the formula. Is there a typo in the slide? The exponent seems different from the textbook version.",
            67,
            false,
            1,
            "1d ago",
            CommentKind::Question,
        ),
    ];
    let count = seeds.len() as u64;

    seeds
        .into_iter()
        .zip(1u64..)
        .map(
            |((author, avatar, text, helpful, marked_helpful, replies, posted, kind), id)| {
                Comment {
                    id,
                    author: author.to_string(),
                    avatar: avatar.to_string(),
                    text: text.to_string(),
                    helpful,
                    marked_helpful,
                    replies,
                    show_replies: false,
                    posted: posted.to_string(),
                    kind,
                    sequence: count - id + 1,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_thread_is_newest_first() {
        let thread = sample_thread();
        assert_eq!(thread.len(), 4);
        assert!(thread
            .windows(2)
            .all(|pair| pair[0].sequence > pair[1].sequence));
        assert_eq!(thread[0].kind, CommentKind::Instructor);
    }
}
