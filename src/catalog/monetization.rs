// SPDX-License-Identifier: MPL-2.0
//! Support tiers, gifts, the token wallet and creator earnings.

use chrono::NaiveDate;

/// Token balance shown by the gifting flow and the wallet.
pub const SAMPLE_BALANCE: u32 = 825;

// ==========================================================================
// Support
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportTier {
    pub amount: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub popular: bool,
}

pub const SUPPORT_TIERS: &[SupportTier] = &[
    SupportTier {
        amount: 10,
        label: "Helpful Lesson",
        description: "Show appreciation for quality content",
        emoji: "✨",
        popular: false,
    },
    SupportTier {
        amount: 25,
        label: "Great Teacher",
        description: "Support exceptional teaching",
        emoji: "🌟",
        popular: true,
    },
    SupportTier {
        amount: 50,
        label: "Top Educator",
        description: "Recognize outstanding effort",
        emoji: "🏆",
        popular: false,
    },
    SupportTier {
        amount: 100,
        label: "Master Class",
        description: "Celebrate transformative learning",
        emoji: "👑",
        popular: false,
    },
    SupportTier {
        amount: 250,
        label: "Super Supporter",
        description: "Make a meaningful impact",
        emoji: "💎",
        popular: false,
    },
];

// ==========================================================================
// Gifts
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GiftTier {
    Basic,
    Premium,
    Exclusive,
}

impl GiftTier {
    pub const ALL: [GiftTier; 3] = [GiftTier::Basic, GiftTier::Premium, GiftTier::Exclusive];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            GiftTier::Basic => "gift-tier-basic",
            GiftTier::Premium => "gift-tier-premium",
            GiftTier::Exclusive => "gift-tier-exclusive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gift {
    pub id: u8,
    pub name: &'static str,
    pub icon: &'static str,
    pub cost: u32,
    pub tier: GiftTier,
}

pub const GIFTS: &[Gift] = &[
    Gift { id: 1, name: "Heart", icon: "❤️", cost: 5, tier: GiftTier::Basic },
    Gift { id: 2, name: "Star", icon: "⭐", cost: 10, tier: GiftTier::Basic },
    Gift { id: 3, name: "Sparkle", icon: "✨", cost: 15, tier: GiftTier::Basic },
    Gift { id: 4, name: "Trophy", icon: "🏆", cost: 25, tier: GiftTier::Premium },
    Gift { id: 5, name: "Crown", icon: "👑", cost: 50, tier: GiftTier::Premium },
    Gift { id: 6, name: "Rocket", icon: "🚀", cost: 100, tier: GiftTier::Premium },
    Gift { id: 7, name: "Diamond", icon: "💎", cost: 250, tier: GiftTier::Exclusive },
    Gift { id: 8, name: "Fire", icon: "🔥", cost: 500, tier: GiftTier::Exclusive },
];

#[must_use]
pub fn gift(id: u8) -> Option<&'static Gift> {
    GIFTS.iter().find(|gift| gift.id == id)
}

// ==========================================================================
// Wallet
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPackage {
    pub tokens: u32,
    pub price: &'static str,
    pub bonus: Option<u32>,
    pub popular: bool,
}

pub const TOKEN_PACKAGES: &[TokenPackage] = &[
    TokenPackage { tokens: 100, price: "$0.99", bonus: None, popular: false },
    TokenPackage { tokens: 500, price: "$4.99", bonus: Some(50), popular: true },
    TokenPackage { tokens: 1000, price: "$9.99", bonus: Some(150), popular: false },
    TokenPackage { tokens: 5000, price: "$49.99", bonus: Some(1000), popular: false },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMovement {
    Purchased,
    SentGift,
    ReceivedTip,
}

impl TokenMovement {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TokenMovement::Purchased => "wallet-movement-purchased",
            TokenMovement::SentGift => "wallet-movement-sent-gift",
            TokenMovement::ReceivedTip => "wallet-movement-received-tip",
        }
    }
}

/// A wallet entry. `tokens` is signed: spending is negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransaction {
    pub movement: TokenMovement,
    pub tokens: i64,
    pub date: NaiveDate,
    pub recipient: Option<&'static str>,
}

#[must_use]
pub fn wallet_history() -> Vec<TokenTransaction> {
    [
        (TokenMovement::Purchased, 500, 24, None),
        (TokenMovement::SentGift, -50, 23, Some("@profsmith")),
        (TokenMovement::ReceivedTip, 100, 22, None),
        (TokenMovement::SentGift, -25, 21, Some("@sciencegirl")),
        (TokenMovement::Purchased, 1000, 20, None),
    ]
    .into_iter()
    .filter_map(|(movement, tokens, day, recipient)| {
        Some(TokenTransaction {
            movement,
            tokens,
            date: NaiveDate::from_ymd_opt(2024, 11, day)?,
            recipient,
        })
    })
    .collect()
}

// ==========================================================================
// Earnings
// ==========================================================================

/// Time window of the earnings dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarningsRange {
    Week,
    #[default]
    Month,
    Year,
}

impl EarningsRange {
    pub const ALL: [EarningsRange; 3] = [EarningsRange::Week, EarningsRange::Month, EarningsRange::Year];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            EarningsRange::Week => "range-week",
            EarningsRange::Month => "range-month",
            EarningsRange::Year => "range-year",
        }
    }
}

/// Total balance in cents.
pub const EARNINGS_BALANCE_CENTS: u64 = 852_045;
pub const EARNINGS_GROWTH: &str = "+15.3%";

pub const REVENUE_BREAKDOWN: &[(&str, u64)] = &[
    ("Ads", 2450),
    ("Gifts", 1890),
    ("Tips", 980),
    ("Sponsored", 3200),
];

pub const WEEKLY_EARNINGS: &[(&str, u64)] = &[
    ("W1", 1240),
    ("W2", 1580),
    ("W3", 1320),
    ("W4", 1890),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub source: &'static str,
    pub cents: u64,
    pub date: NaiveDate,
    pub pending: bool,
}

#[must_use]
pub fn payouts() -> Vec<Payout> {
    [
        ("Ad Revenue", 24_580, 24, false),
        ("Gift Received", 12_500, 23, false),
        ("Tip", 5_000, 22, false),
        ("Sponsored Content", 80_000, 21, true),
    ]
    .into_iter()
    .filter_map(|(source, cents, day, pending)| {
        Some(Payout {
            source,
            cents,
            date: NaiveDate::from_ymd_opt(2024, 11, day)?,
            pending,
        })
    })
    .collect()
}

/// Formats cents as dollars with thousands separators: `$8,520.45`.
#[must_use]
pub fn format_dollars(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{:02}", cents % 100)
}

/// Formats a transaction date like `Nov 24, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gifts_cover_every_tier() {
        for tier in GiftTier::ALL {
            assert!(GIFTS.iter().any(|gift| gift.tier == tier));
        }
        assert_eq!(gift(5).map(|gift| gift.cost), Some(50));
        assert!(gift(42).is_none());
    }

    #[test]
    fn wallet_history_is_complete() {
        let history = wallet_history();
        assert_eq!(history.len(), 5);
        assert_eq!(format_date(history[0].date), "Nov 24, 2024");
    }

    #[test]
    fn dollars_are_grouped() {
        assert_eq!(format_dollars(EARNINGS_BALANCE_CENTS), "$8,520.45");
        assert_eq!(format_dollars(5_000), "$50.00");
        assert_eq!(format_dollars(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn exactly_one_pending_payout() {
        assert_eq!(payouts().iter().filter(|payout| payout.pending).count(), 1);
    }
}
