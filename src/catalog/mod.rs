// SPDX-License-Identifier: MPL-2.0
//! Static sample content shown by the screens.
//!
//! Nothing here is fetched or stored. Screens copy what they need into their
//! own state (comments, notifications) or read it directly (everything else).
//!
//! # Modules
//!
//! - [`lessons`]: feed lessons and the overflow menu actions
//! - [`comments`]: comment threads under a lesson
//! - [`creators`]: creator profiles and the signed-in user's profile
//! - [`discover`]: trending videos, topics and categories
//! - [`search`]: recent and trending searches, search results
//! - [`activity`]: the notification inbox
//! - [`monetization`]: support tiers, gifts, token wallet and earnings
//! - [`analytics`]: studio and admin dashboard figures
//! - [`authoring`]: choices offered by the create flow and the editor

pub mod activity;
pub mod analytics;
pub mod authoring;
pub mod comments;
pub mod creators;
pub mod discover;
pub mod lessons;
pub mod monetization;
pub mod search;

/// Formats a count the way the sample data does: `2.4M`, `12.5K`, `980`.
#[must_use]
pub fn compact_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M", trim_decimal(value as f64 / 1_000_000.0))
    } else if value >= 1_000 {
        format!("{}K", trim_decimal(value as f64 / 1_000.0))
    } else {
        value.to_string()
    }
}

fn trim_decimal(value: f64) -> String {
    let rounded = format!("{value:.1}");
    rounded
        .strip_suffix(".0")
        .map_or_else(|| rounded.clone(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_count_uses_suffixes() {
        assert_eq!(compact_count(980), "980");
        assert_eq!(compact_count(12_500), "12.5K");
        assert_eq!(compact_count(2_000), "2K");
        assert_eq!(compact_count(2_400_000), "2.4M");
    }
}
