//! State machine behind the schedules list.
//!
//! The fetched list is the single source of truth; the visible list is
//! always computed from it and the active filter. Every fetch carries a
//! generation number so a late response from a superseded or abandoned
//! fetch can never overwrite newer state.

use chrono::NaiveDate;

use crate::schedule::{apply_filter, bucket_counts, BucketCounts, ScheduleFilter, ScheduleRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<ScheduleRecord>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleViewAction {
    FetchStarted { generation: u64 },
    FetchSucceeded { generation: u64, records: Vec<ScheduleRecord> },
    FetchFailed { generation: u64, message: String },
    FilterChanged(ScheduleFilter),
    /// The view is gone; ignore anything still in flight
    Detached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleView {
    load: LoadState,
    active_filter: ScheduleFilter,
    generation: u64,
    attached: bool,
}

impl Default for ScheduleView {
    fn default() -> Self {
        Self::new(ScheduleFilter::All)
    }
}

impl ScheduleView {
    pub fn new(active_filter: ScheduleFilter) -> Self {
        Self {
            load: LoadState::Loading,
            active_filter,
            generation: 0,
            attached: true,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn active_filter(&self) -> ScheduleFilter {
        self.active_filter
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Every fetched record; empty unless loaded
    pub fn records(&self) -> &[ScheduleRecord] {
        match &self.load {
            LoadState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn visible(&self, today: NaiveDate) -> Vec<&ScheduleRecord> {
        apply_filter(self.records(), self.active_filter, today)
    }

    pub fn counts(&self, today: NaiveDate) -> BucketCounts {
        bucket_counts(self.records(), today)
    }

    fn accepts(&self, generation: u64) -> bool {
        self.attached && generation == self.generation
    }

    /// Apply `action`; returns false when the state is unchanged
    /// (including discarded stale results).
    pub fn reduce(&mut self, action: ScheduleViewAction) -> bool {
        match action {
            ScheduleViewAction::FetchStarted { generation } => {
                if !self.attached || generation <= self.generation {
                    return false;
                }
                self.generation = generation;
                self.load = LoadState::Loading;
                true
            }
            ScheduleViewAction::FetchSucceeded { generation, records } => {
                if !self.accepts(generation) {
                    return false;
                }
                self.load = LoadState::Loaded(records);
                true
            }
            ScheduleViewAction::FetchFailed { generation, message } => {
                if !self.accepts(generation) {
                    return false;
                }
                self.load = LoadState::Failed(message);
                true
            }
            ScheduleViewAction::FilterChanged(filter) => {
                if filter == self.active_filter {
                    return false;
                }
                self.active_filter = filter;
                true
            }
            ScheduleViewAction::Detached => {
                let changed = self.attached;
                self.attached = false;
                changed
            }
        }
    }
}
