use crate::errors::ProcessingError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub distance: f64,
}

/// Goal, entries in source order, and their cumulative distance.
///
/// Only [`Dataset::new`] builds one, so `entries` is never empty and
/// `progress` always equals the sum of the entry distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    goal: f64,
    entries: Vec<Entry>,
    progress: f64,
}

impl Dataset {
    pub fn new(goal: f64, entries: Vec<Entry>) -> Result<Self, ProcessingError> {
        if entries.is_empty() {
            return Err(ProcessingError::EmptyPayload);
        }
        if goal.is_nan() || goal <= 0.0 {
            return Err(ProcessingError::NonPositiveGoal(goal));
        }

        let progress = entries.iter().map(|entry| entry.distance).sum();
        Ok(Self {
            goal,
            entries,
            progress,
        })
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

/// Where the display session currently is.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded(Dataset),
    Failed,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Loading => PhaseKind::Loading,
            Phase::Loaded(_) => PhaseKind::Loaded,
            Phase::Failed => PhaseKind::Failed,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Phase::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Idle => "idle",
            PhaseKind::Loading => "loading",
            PhaseKind::Loaded => "loaded",
            PhaseKind::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub goal: f64,
    pub progress: f64,
    pub progress_text: String,
    pub percent: String,
    pub last_ride: String,
    pub longest_ride: f64,
    pub entry_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub phase: PhaseKind,
    pub message: Option<String>,
    pub summary: Option<SummaryResponse>,
    pub bar_width: f64,
    pub checked_at: String,
}
