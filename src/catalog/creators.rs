// SPDX-License-Identifier: MPL-2.0
//! Creator profiles and the signed-in user's own profile.

use crate::navigation::CreatorId;

/// A lesson listed on a profile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePost {
    pub title: &'static str,
    pub learners_helped: &'static str,
}

/// Another user's public profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorProfile {
    pub name: &'static str,
    pub handle: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
    pub learners: &'static str,
    pub lessons: u32,
    pub posts: &'static [ProfilePost],
}

const SARAH_CHEN: CreatorProfile = CreatorProfile {
    name: "Dr. Sarah Chen",
    handle: "drsarahchen",
    avatar: "👩‍🔬",
    bio: "Quantum Physicist at MIT. Making complex physics concepts accessible to everyone.",
    learners: "12.5K",
    lessons: 48,
    posts: &[
        ProfilePost {
            title: "Quantum Superposition",
            learners_helped: "12.5K",
        },
        ProfilePost {
            title: "Wave-Particle Duality",
            learners_helped: "8.2K",
        },
        ProfilePost {
            title: "Quantum Entanglement",
            learners_helped: "15.3K",
        },
    ],
};

const MICHAEL_TORRES: CreatorProfile = CreatorProfile {
    name: "Prof. Michael Torres Guzman Loera",
    handle: "proftorres",
    avatar: "👨‍🏫",
    bio: "Mathematics Professor at Stanford. Passionate about teaching algebra and calculus.",
    learners: "8.3K",
    lessons: 32,
    posts: &[
        ProfilePost {
            title: "Quadratic Equations",
            learners_helped: "8.3K",
        },
        ProfilePost {
            title: "Calculus Basics",
            learners_helped: "6.1K",
        },
    ],
};

/// Shown for any id without a profile of its own.
pub const DEFAULT_CREATOR: CreatorProfile = CreatorProfile {
    name: "Educational Creator",
    handle: "creator",
    avatar: "🎓",
    bio: "Passionate educator sharing knowledge with the world.",
    learners: "5.2K",
    lessons: 24,
    posts: &[ProfilePost {
        title: "Educational Content",
        learners_helped: "5.2K",
    }],
};

/// Looks up a creator's profile. Missing or unknown ids get
/// [`DEFAULT_CREATOR`].
#[must_use]
pub fn profile_for(id: Option<&CreatorId>) -> &'static CreatorProfile {
    match id.map(CreatorId::as_str) {
        Some("1") => &SARAH_CHEN,
        Some("2") => &MICHAEL_TORRES,
        _ => &DEFAULT_CREATOR,
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnProfile {
    pub name: &'static str,
    pub handle: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
    pub contributions: u32,
    pub helped: &'static str,
    pub learning: u32,
    pub lessons: &'static [ProfilePost],
    pub saved: &'static [ProfilePost],
}

pub const OWN_PROFILE: OwnProfile = OwnProfile {
    name: "Alex Rivera",
    handle: "alexrivera",
    avatar: "🧑‍🎓",
    bio: "Passionate about physics and mathematics. Teaching what I learn, learning what I teach.",
    contributions: 24,
    helped: "2.1K",
    learning: 12,
    lessons: &[
        ProfilePost { title: "Quantum Mechanics Basics", learners_helped: "2.1K" },
        ProfilePost { title: "Calculus Made Simple", learners_helped: "1.8K" },
        ProfilePost { title: "Einstein's Relativity", learners_helped: "2.4K" },
        ProfilePost { title: "Newton's Laws Explained", learners_helped: "1.9K" },
        ProfilePost { title: "Organic Chemistry Fundamentals", learners_helped: "3.2K" },
        ProfilePost { title: "Linear Algebra Explained", learners_helped: "2.7K" },
        ProfilePost { title: "Astrophysics for Beginners", learners_helped: "4.1K" },
        ProfilePost { title: "Statistics Made Easy", learners_helped: "2.3K" },
        ProfilePost { title: "Computer Science Basics", learners_helped: "3.8K" },
        ProfilePost { title: "Trigonometry Essentials", learners_helped: "2.9K" },
        ProfilePost { title: "Thermodynamics Explained", learners_helped: "3.5K" },
    ],
    saved: &[
        ProfilePost { title: "World War II History", learners_helped: "3.2K" },
        ProfilePost { title: "Renaissance Art", learners_helped: "1.9K" },
        ProfilePost { title: "Python Programming", learners_helped: "2.7K" },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_have_their_own_profile() {
        assert_eq!(profile_for(Some(&CreatorId::from("1"))).handle, "drsarahchen");
        assert_eq!(profile_for(Some(&CreatorId::from("2"))).lessons, 32);
    }

    #[test]
    fn unknown_or_missing_id_falls_back_to_default() {
        assert_eq!(profile_for(Some(&CreatorId::from("99"))), &DEFAULT_CREATOR);
        assert_eq!(profile_for(None), &DEFAULT_CREATOR);
    }
}
