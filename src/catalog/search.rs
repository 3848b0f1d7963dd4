// SPDX-License-Identifier: MPL-2.0
//! Search suggestions and the result pool.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingSearch {
    pub query: &'static str,
    pub searches: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoResult {
    pub title: &'static str,
    pub creator: &'static str,
    pub views: &'static str,
    pub likes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserResult {
    pub name: &'static str,
    pub handle: &'static str,
    pub followers: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicResult {
    pub name: &'static str,
    pub videos: &'static str,
    pub icon: &'static str,
}

pub const RECENT: &[&str] = &["Quantum Physics", "Ancient Rome", "Calculus Tutorial", "Spanish Grammar"];

pub const TRENDING: &[TrendingSearch] = &[
    TrendingSearch { query: "Black Holes Explained", searches: "1.2M" },
    TrendingSearch { query: "World War 2", searches: "980K" },
    TrendingSearch { query: "Linear Algebra", searches: "756K" },
    TrendingSearch { query: "Renaissance Art", searches: "645K" },
];

pub const VIDEOS: &[VideoResult] = &[
    VideoResult {
        title: "Understanding Quantum Mechanics in 60 Seconds",
        creator: "Dr. Sarah Physics",
        views: "2.3M",
        likes: "145K",
    },
    VideoResult {
        title: "Chemical Reactions That Will Blow Your Mind",
        creator: "Chemistry Lab",
        views: "1.8M",
        likes: "98K",
    },
    VideoResult {
        title: "Geometry Tricks You Need to Know",
        creator: "Math Master",
        views: "1.5M",
        likes: "87K",
    },
];

pub const USERS: &[UserResult] = &[
    UserResult { name: "Professor Smith", handle: "@profsmith", followers: "234K" },
    UserResult { name: "Science Girl", handle: "@sciencegirl", followers: "189K" },
    UserResult { name: "Code Academy", handle: "@codeacademy", followers: "456K" },
];

pub const TOPICS: &[TopicResult] = &[
    TopicResult { name: "Physics", videos: "12.3K", icon: "⚛️" },
    TopicResult { name: "Mathematics", videos: "18.7K", icon: "📊" },
    TopicResult { name: "History", videos: "9.4K", icon: "📜" },
];
