use std::collections::HashSet;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::data::fetch::{self, FetchResult};
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::CharacterDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Characters,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Fetched dataset (None until the startup fetch completes).
    pub dataset: Option<CharacterDataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Record ids whose card currently shows the magical-info side.
    pub flipped: HashSet<String>,

    /// Active page.
    pub page: Page,

    /// Error message from a failed fetch, shown in the UI.
    pub error: Option<String>,

    /// Whether the startup fetch is still in flight.
    pub loading: bool,

    /// Channel delivering the fetch result; dropped once consumed.
    fetch_rx: Option<Receiver<FetchResult>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state with the character fetch already started.
    pub fn new() -> Self {
        Self::with_fetch(fetch::spawn_fetch(fetch::CHARACTERS_ENDPOINT))
    }

    /// State wired to an externally created fetch channel.
    pub fn with_fetch(rx: Receiver<FetchResult>) -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            flipped: HashSet::new(),
            page: Page::Overview,
            error: None,
            loading: true,
            fetch_rx: Some(rx),
        }
    }

    /// Drain the fetch channel without blocking. Called once per frame
    /// while the fetch is outstanding.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else { return };
        match rx.try_recv() {
            Ok(Ok(records)) => {
                self.set_dataset(CharacterDataset::from_records(records));
                self.fetch_rx = None;
            }
            Ok(Err(err)) => {
                log::error!("character fetch failed: {err}");
                self.error = Some(err.to_string());
                self.loading = false;
                self.fetch_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Fetch thread died without reporting.
                self.error = Some("character fetch ended unexpectedly".to_string());
                self.loading = false;
                self.fetch_rx = None;
            }
        }
    }

    /// Ingest the fetched dataset and reset the derived view state.
    pub fn set_dataset(&mut self, dataset: CharacterDataset) {
        self.visible_indices = (0..dataset.len()).collect();
        self.criteria = FilterCriteria::default();
        self.flipped.clear();
        self.dataset = Some(dataset);
        self.error = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(&ds.records, &self.criteria);
        }
    }

    /// Drop every constraint back to its "any" default.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    /// Flip a card between its front and magical-info sides.
    pub fn toggle_flip(&mut self, id: &str) {
        if !self.flipped.remove(id) {
            self.flipped.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CharacterRecord;
    use std::sync::mpsc;

    fn dataset() -> CharacterDataset {
        let records = vec![
            CharacterRecord {
                id: "h".to_string(),
                name: "Harry Potter".to_string(),
                house: Some("Gryffindor".to_string()),
                ..CharacterRecord::default()
            },
            CharacterRecord {
                id: "d".to_string(),
                name: "Draco Malfoy".to_string(),
                house: Some("Slytherin".to_string()),
                ..CharacterRecord::default()
            },
        ];
        CharacterDataset::from_records(records)
    }

    fn idle_state() -> AppState {
        let (_tx, rx) = mpsc::channel();
        AppState::with_fetch(rx)
    }

    #[test]
    fn successful_fetch_clears_loading_and_error() {
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::with_fetch(rx);
        assert!(state.loading);

        tx.send(Ok(dataset().records)).unwrap();
        state.poll_fetch();

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn failed_fetch_surfaces_message_and_keeps_list_empty() {
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::with_fetch(rx);

        let err = crate::data::fetch::parse_characters("not json").unwrap_err();
        tx.send(Err(err.into())).unwrap();
        state.poll_fetch();

        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.dataset.is_none());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn refilter_narrows_and_reset_restores() {
        let mut state = idle_state();
        state.set_dataset(dataset());

        state.criteria.house = Some("Slytherin".to_string());
        state.refilter();
        assert_eq!(state.visible_indices, vec![1]);

        state.reset_filters();
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn toggle_flip_round_trips() {
        let mut state = idle_state();
        state.toggle_flip("h");
        assert!(state.flipped.contains("h"));
        state.toggle_flip("h");
        assert!(!state.flipped.contains("h"));
    }
}
