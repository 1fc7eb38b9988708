use std::sync::Arc;

use crate::{
    catalog::{Catalog, Item},
    detail::Detail,
    filter::{filter, Criteria},
    mode::Mode,
    paging::Cursor,
    render::{render, render_more, View},
};

/// Every user-triggered event the browser reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenSearch,
    CancelSearch,
    SubmitSearch(Criteria),
    ShowMore,
    Select(Arc<str>),
    CloseDetail,
    OpenPreferences,
    CancelPreferences,
    SubmitPreferences(Mode),
}

/// Owns the view state (current criteria, match set, cursor, open detail and
/// display mode) and is the only thing that changes it. Each handler runs to
/// completion and pushes the result into a `View`.
pub struct Browser {
    catalog: Arc<Catalog>,
    criteria: Criteria,
    matches: Vec<Arc<Item>>,
    cursor: Cursor,
    detail: Option<Arc<str>>,
    mode: Mode,
}

impl Browser {
    pub fn new(catalog: Arc<Catalog>, mode: Mode) -> Self {
        let matches = catalog.items().to_vec();
        let cursor = Cursor::new(catalog.page_size());
        Self {
            catalog,
            criteria: Criteria::default(),
            matches,
            cursor,
            detail: None,
            mode,
        }
    }

    /// Draws the initial state: the first page of the whole dataset.
    pub fn start(&self, view: &mut dyn View) {
        view.apply_palette(self.mode.palette());
        render(&self.catalog, self.cursor.visible_slice(&self.matches), view);
        view.set_remaining(self.remaining());
        view.set_no_results(self.matches.is_empty());
    }

    pub fn dispatch(&mut self, action: Action, view: &mut dyn View) {
        log::debug!("dispatching {:?}", action);
        match action {
            Action::OpenSearch => view.open_search(&self.criteria),
            Action::CancelSearch => view.close_search(),
            Action::SubmitSearch(criteria) => {
                self.apply_filter(criteria, view);
                view.close_search();
            }
            Action::ShowMore => {
                self.show_more(view);
            }
            Action::Select(id) => {
                self.show_detail(&id, view);
            }
            Action::CloseDetail => self.close_detail(view),
            Action::OpenPreferences => view.open_preferences(self.mode),
            Action::CancelPreferences => view.close_preferences(),
            Action::SubmitPreferences(mode) => {
                self.apply_mode(mode, view);
                view.close_preferences();
            }
        }
    }

    /// Recomputes the match set and redraws from the first page.
    pub fn apply_filter(&mut self, criteria: Criteria, view: &mut dyn View) {
        self.matches = filter(self.catalog.items(), &criteria);
        self.criteria = criteria;
        self.cursor.reset();
        log::debug!(
            "filter matched {} of {} items",
            self.matches.len(),
            self.catalog.items().len()
        );
        render(&self.catalog, self.cursor.visible_slice(&self.matches), view);
        view.set_remaining(self.remaining());
        view.set_no_results(self.matches.is_empty());
    }

    /// Appends the next page. Returns false, touching nothing, when the
    /// whole match set is already shown.
    pub fn show_more(&mut self, view: &mut dyn View) -> bool {
        let next = self.cursor.advance(&self.matches);
        if next.is_empty() {
            return false;
        }
        log::debug!("revealing page {}", self.cursor.page());
        render_more(&self.catalog, next, view);
        view.set_remaining(self.remaining());
        true
    }

    /// Opens the detail panel for `id`. An id missing from the dataset
    /// changes nothing.
    pub fn show_detail(&mut self, id: &str, view: &mut dyn View) -> bool {
        match Detail::lookup(&self.catalog, id) {
            Some(detail) => {
                self.detail = Some(detail.id.clone());
                view.open_detail(detail);
                true
            }
            None => {
                log::debug!("no item with id {:?}", id);
                false
            }
        }
    }

    pub fn close_detail(&mut self, view: &mut dyn View) {
        self.detail = None;
        view.close_detail();
    }

    pub fn apply_mode(&mut self, mode: Mode, view: &mut dyn View) {
        log::debug!("applying {} mode", mode);
        self.mode = mode;
        view.apply_palette(mode.palette());
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn matches(&self) -> &[Arc<Item>] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    pub fn revealed(&self) -> usize {
        self.cursor.revealed(&self.matches)
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining(&self.matches)
    }

    pub fn selected(&self) -> Option<&Arc<str>> {
        self.detail.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
