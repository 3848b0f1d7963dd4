// SPDX-License-Identifier: MPL-2.0
//! Figures behind the creator studio and the admin dashboard.
//!
//! Chart series are `(label, value)` pairs in display order.

/// A headline figure with its change over the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label_key: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub glyph: &'static str,
}

// ==========================================================================
// Creator studio
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioRange {
    SevenDays,
    #[default]
    ThirtyDays,
    NinetyDays,
}

impl StudioRange {
    pub const ALL: [StudioRange; 3] = [
        StudioRange::SevenDays,
        StudioRange::ThirtyDays,
        StudioRange::NinetyDays,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StudioRange::SevenDays => "7d",
            StudioRange::ThirtyDays => "30d",
            StudioRange::NinetyDays => "90d",
        }
    }
}

pub const STUDIO_STATS: &[StatCard] = &[
    StatCard { label_key: "studio-total-views", value: "12.4M", change: "+12.5%", glyph: "👁" },
    StatCard { label_key: "studio-followers", value: "234K", change: "+8.3%", glyph: "👥" },
    StatCard { label_key: "studio-engagement", value: "7.8%", change: "+2.1%", glyph: "♥" },
    StatCard { label_key: "studio-watch-time", value: "45.2K hrs", change: "+15.7%", glyph: "⏱" },
];

pub const STUDIO_VIEWS: &[(&str, u64)] = &[
    ("Mon", 12_400),
    ("Tue", 15_800),
    ("Wed", 13_200),
    ("Thu", 18_900),
    ("Fri", 22_100),
    ("Sat", 25_600),
    ("Sun", 21_300),
];

pub const STUDIO_ENGAGEMENT: &[(&str, u64)] = &[
    ("Likes", 45_000),
    ("Comments", 12_000),
    ("Shares", 8_500),
    ("Saves", 15_200),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopVideo {
    pub thumbnail: &'static str,
    pub title: &'static str,
    pub views: &'static str,
    pub likes: &'static str,
    pub engagement: &'static str,
}

pub const STUDIO_TOP_VIDEOS: &[TopVideo] = &[
    TopVideo { thumbnail: "🔬", title: "Quantum Physics Explained", views: "2.3M", likes: "145K", engagement: "8.2%" },
    TopVideo { thumbnail: "🧪", title: "Chemistry Magic Tricks", views: "1.8M", likes: "98K", engagement: "7.5%" },
    TopVideo { thumbnail: "📐", title: "Math Shortcuts", views: "1.5M", likes: "87K", engagement: "6.9%" },
];

/// Teaching insights summarised in Settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeachingInsights {
    pub total_views: &'static str,
    pub avg_engagement: &'static str,
    pub top_video: &'static str,
    pub recent_growth: &'static str,
    pub most_helpful: &'static str,
    pub helped_learners: &'static str,
}

pub const TEACHING_INSIGHTS: TeachingInsights = TeachingInsights {
    total_views: "176K",
    avg_engagement: "4.2%",
    top_video: "Einstein's Relativity",
    recent_growth: "+12%",
    most_helpful: "Calculus Made Simple",
    helped_learners: "2.1K",
};

// ==========================================================================
// Admin dashboard
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Overview,
    Users,
    Content,
    Revenue,
    Reports,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Overview,
        AdminSection::Users,
        AdminSection::Content,
        AdminSection::Revenue,
        AdminSection::Reports,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            AdminSection::Overview => "admin-overview",
            AdminSection::Users => "admin-users",
            AdminSection::Content => "admin-content",
            AdminSection::Revenue => "admin-revenue",
            AdminSection::Reports => "admin-reports",
        }
    }
}

pub const ADMIN_STATS: &[StatCard] = &[
    StatCard { label_key: "admin-total-users", value: "2.4M", change: "+12.5%", glyph: "👥" },
    StatCard { label_key: "admin-active-videos", value: "145K", change: "+8.3%", glyph: "🎬" },
    StatCard { label_key: "admin-revenue-total", value: "$1.2M", change: "+15.7%", glyph: "$" },
    StatCard { label_key: "admin-engagement", value: "8.2%", change: "+2.1%", glyph: "↗" },
];

pub const USER_GROWTH: &[(&str, u64)] = &[
    ("Jan", 180_000),
    ("Feb", 220_000),
    ("Mar", 280_000),
    ("Apr", 350_000),
    ("May", 420_000),
    ("Jun", 490_000),
];

pub const CONTENT_BY_CATEGORY: &[(&str, u64)] = &[
    ("Science", 35_000),
    ("Math", 28_000),
    ("History", 22_000),
    ("Art", 18_000),
    ("Tech", 25_000),
    ("Other", 17_000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueShare {
    pub source: &'static str,
    pub percent: u8,
    pub amount: u64,
}

pub const REVENUE_SHARES: &[RevenueShare] = &[
    RevenueShare { source: "Ads", percent: 45, amount: 540_000 },
    RevenueShare { source: "Gifts", percent: 30, amount: 360_000 },
    RevenueShare { source: "Premium", percent: 15, amount: 180_000 },
    RevenueShare { source: "Sponsored", percent: 10, amount: 120_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
}

impl ReportStatus {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ReportStatus::Pending => "report-status-pending",
            ReportStatus::Investigating => "report-status-investigating",
            ReportStatus::Resolved => "report-status-resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub kind: &'static str,
    pub user: &'static str,
    pub video: &'static str,
    pub status: ReportStatus,
    pub priority: Priority,
}

pub const REPORTS: &[Report] = &[
    Report { kind: "Spam", user: "@spammer123", video: "Misleading Content", status: ReportStatus::Pending, priority: Priority::High },
    Report { kind: "Inappropriate", user: "@badactor", video: "Offensive Video", status: ReportStatus::Resolved, priority: Priority::High },
    Report { kind: "Copyright", user: "@copycat", video: "Stolen Content", status: ReportStatus::Investigating, priority: Priority::Medium },
    Report { kind: "Harassment", user: "@troll456", video: "Bullying Comments", status: ReportStatus::Pending, priority: Priority::High },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopCreator {
    pub rank: u8,
    pub name: &'static str,
    pub handle: &'static str,
    pub followers: &'static str,
    pub videos: u32,
    pub revenue: &'static str,
}

pub const TOP_CREATORS: &[TopCreator] = &[
    TopCreator { rank: 1, name: "Dr. Science", handle: "@drscience", followers: "1.2M", videos: 234, revenue: "$45K" },
    TopCreator { rank: 2, name: "Math Genius", handle: "@mathgenius", followers: "980K", videos: 189, revenue: "$38K" },
    TopCreator { rank: 3, name: "History Pro", handle: "@historypro", followers: "856K", videos: 156, revenue: "$32K" },
    TopCreator { rank: 4, name: "Art Master", handle: "@artmaster", followers: "742K", videos: 198, revenue: "$29K" },
    TopCreator { rank: 5, name: "Tech Guru", handle: "@techguru", followers: "698K", videos: 142, revenue: "$27K" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_shares_sum_to_whole() {
        let total: u32 = REVENUE_SHARES.iter().map(|share| u32::from(share.percent)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn pending_reports_are_counted() {
        let pending = REPORTS
            .iter()
            .filter(|report| report.status == ReportStatus::Pending)
            .count();
        assert_eq!(pending, 2);
    }
}
