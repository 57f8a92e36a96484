//! Demo seed content shown on first run, before anything has been persisted.

use crate::board::{Category, Reply, Thread};
use crate::wiki::WikiEntry;
use uuid::Uuid;

const HOUR_MS: u64 = 60 * 60 * 1000;

/// Demo discussion threads, timestamped relative to `now`.
pub fn demo_threads(now: u64) -> Vec<Thread> {
    vec![
        Thread {
            id: Uuid::new_v4(),
            title: "Kinetic vs thermodynamic control in pericyclic reactions".to_string(),
            author: "SpectraSeeker".to_string(),
            category: Category::Organic,
            content: "How do you decide which product dominates in olympiad problems featuring \
                      competing pericyclic pathways? Looking for a structured approach."
                .to_string(),
            created_at: now.saturating_sub(26 * HOUR_MS),
            replies: vec![
                Reply {
                    author: "ReactionMechanic".to_string(),
                    content: "Check activation energies and relative stability. IChO 2019 task 2 \
                              has a great example - free energy diagram is key."
                        .to_string(),
                },
                Reply {
                    author: "ChemCoach".to_string(),
                    content: "Add Hammond postulate reasoning. If temperature is low, favor \
                              kinetic product. Summarize assumptions explicitly in your write-up."
                        .to_string(),
                },
            ],
        },
        Thread {
            id: Uuid::new_v4(),
            title: "Ionic strength adjustments in potentiometric titrations".to_string(),
            author: "LabNotebook".to_string(),
            category: Category::Analytical,
            content: "For USNCO lab practical prep: any tips on when to include ionic strength \
                      adjusters? How do they impact the calculations?"
                .to_string(),
            created_at: now.saturating_sub(72 * HOUR_MS),
            replies: Vec::new(),
        },
    ]
}

/// Demo wiki entries.
pub fn demo_wiki() -> Vec<WikiEntry> {
    vec![
        WikiEntry {
            id: Uuid::new_v4(),
            title: "Buffer capacity derivation".to_string(),
            summary: "Derives the expression beta = 2.303 C_total (Ka [H3O+] / (Ka + [H3O+])^2) \
                      and discusses olympiad-grade approximations for diprotic systems."
                .to_string(),
            tags: vec![
                "acid-base".to_string(),
                "equilibrium".to_string(),
                "analytical".to_string(),
            ],
        },
        WikiEntry {
            id: Uuid::new_v4(),
            title: "Qualitative analysis flowchart".to_string(),
            summary: "Step-by-step procedure for identifying cations in classic group \
                      qualitative analysis including confirmatory tests."
                .to_string(),
            tags: vec!["inorganic".to_string(), "analysis".to_string()],
        },
    ]
}
