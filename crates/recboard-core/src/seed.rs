//! Baked-in starter collection, served when no remote sheet is configured.

use crate::models::category::Category;
use crate::models::recommendation::Recommendation;

struct SeedEntry {
    category: Category,
    recommended_by: &'static str,
    follow_regularly: bool,
    title: &'static str,
    link: &'static str,
    notes: &'static str,
}

const ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        category: Category::Read,
        recommended_by: "Adam Davidson",
        follow_regularly: false,
        title: "Vibe Coding: Building Production-Grade Software With GenAI, Chat, Agents, and Beyond",
        link: "#",
        notes: "Call outs to many folks across the expert network",
    },
    SeedEntry {
        category: Category::Read,
        recommended_by: "Jessica Johnston",
        follow_regularly: false,
        title: "AI Myths series - by Adam Davidson",
        link: "#",
        notes: "A series of fact checks on common fears, myths and viral news stories about AI.",
    },
    SeedEntry {
        category: Category::Read,
        recommended_by: "Jessica Johnston",
        follow_regularly: false,
        title: "2025 AI Adoption Report",
        link: "#",
        notes: "Real evidence on the impact of GenAI investments.",
    },
    SeedEntry {
        category: Category::Read,
        recommended_by: "Jessica Johnston",
        follow_regularly: true,
        title: "One Useful Thing",
        link: "#",
        notes: "Obvi!",
    },
    SeedEntry {
        category: Category::Watch,
        recommended_by: "Jessica Johnston",
        follow_regularly: false,
        title: "How to be Fearless in the Age of AI - Fei Fei Li in conversation w. Reid Hoffman",
        link: "#",
        notes: "A great conversation about her story and what she is building at World Labs.",
    },
    SeedEntry {
        category: Category::Listen,
        recommended_by: "Jessica Johnston",
        follow_regularly: true,
        title: "Feedforward Podcast",
        link: "https://Feedforward.fm",
        notes: "Great conversations from across the year",
    },
    SeedEntry {
        category: Category::Listen,
        recommended_by: "Jessica Johnston",
        follow_regularly: true,
        title: "AI Daily Brief",
        link: "#",
        notes: "A favorite among members and experts",
    },
];

/// The seed collection with ids `"1"` through `"7"`, oldest first.
pub fn recommendations() -> Vec<Recommendation> {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(i, e)| Recommendation {
            id: (i + 1).to_string(),
            category: e.category,
            recommended_by: e.recommended_by.to_string(),
            title: e.title.to_string(),
            link: e.link.to_string(),
            notes: e.notes.to_string(),
            follow_regularly: e.follow_regularly,
            created_at: None,
        })
        .collect()
}
