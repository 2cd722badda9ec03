//! List Reconciler
//!
//! Classifies cards between two visible subsets so a filter change can be
//! presented as enter/exit transitions instead of a full repaint. Identity
//! is the record slug; list positions shift between selections.
//!
//! Per-card phase machine, advanced only by membership changes:
//!
//! ```text
//! absent -> entering -> present -> leaving -> absent
//!                ^                    |
//!                `----(reappears)-----'
//! ```

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Slugs classified between two visible subsets.
///
/// Each list keeps the order of the subset it was taken from:
/// `entering` and `persisting` follow `next`, `leaving` follows `prev`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub entering: Vec<String>,
    pub leaving: Vec<String>,
    pub persisting: Vec<String>,
}

impl Reconciliation {
    pub fn is_unchanged(&self) -> bool {
        self.entering.is_empty() && self.leaving.is_empty()
    }
}

/// Diff two visible subsets, given as slug sequences.
pub fn diff<'a, P, N>(prev: P, next: N) -> Reconciliation
where
    P: IntoIterator<Item = &'a str>,
    N: IntoIterator<Item = &'a str>,
{
    let prev: Vec<&str> = prev.into_iter().collect();
    let next: Vec<&str> = next.into_iter().collect();
    let prev_set: HashSet<&str> = prev.iter().copied().collect();
    let next_set: HashSet<&str> = next.iter().copied().collect();

    let mut result = Reconciliation::default();
    let mut seen: HashSet<&str> = HashSet::new();
    for slug in &next {
        if !seen.insert(slug) {
            continue;
        }
        if prev_set.contains(slug) {
            result.persisting.push(slug.to_string());
        } else {
            result.entering.push(slug.to_string());
        }
    }

    seen.clear();
    for slug in &prev {
        if seen.insert(slug) && !next_set.contains(slug) {
            result.leaving.push(slug.to_string());
        }
    }

    result
}

/// Presentation phase of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    #[default]
    Absent,
    Entering,
    Present,
    Leaving,
}

impl ViewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPhase::Absent => "absent",
            ViewPhase::Entering => "entering",
            ViewPhase::Present => "present",
            ViewPhase::Leaving => "leaving",
        }
    }

    /// Whether the card still occupies the grid (possibly on its way out).
    pub fn is_mounted(&self) -> bool {
        !matches!(self, ViewPhase::Absent)
    }
}

/// Tracks the visible subset and each card's phase across filter changes.
#[derive(Debug, Clone, Default)]
pub struct ListReconciler {
    visible: Vec<String>,
    phases: HashMap<String, ViewPhase>,
}

impl ListReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugs of the current visible subset.
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn phase(&self, slug: &str) -> ViewPhase {
        self.phases.get(slug).copied().unwrap_or_default()
    }

    /// Move to a new visible subset and advance every card's phase.
    pub fn apply<'a, N>(&mut self, next: N) -> Reconciliation
    where
        N: IntoIterator<Item = &'a str>,
    {
        let next: Vec<String> = next.into_iter().map(str::to_string).collect();
        let change = diff(
            self.visible.iter().map(String::as_str),
            next.iter().map(String::as_str),
        );

        // Cards that finished leaving on the previous change are now gone.
        self.phases.retain(|_, phase| *phase != ViewPhase::Leaving);

        for slug in &change.entering {
            self.phases.insert(slug.clone(), ViewPhase::Entering);
        }
        for slug in &change.persisting {
            self.phases.insert(slug.clone(), ViewPhase::Present);
        }
        for slug in &change.leaving {
            self.phases.insert(slug.clone(), ViewPhase::Leaving);
        }

        self.visible = next;
        change
    }
}
