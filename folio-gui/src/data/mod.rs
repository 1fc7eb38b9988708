mod config;

use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use folio_core::{Choice, Criteria, Detail, Mode, Palette, Preview, View};

pub use crate::data::config::Config;

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub previews: Vector<Arc<Preview>>,
    pub remaining: usize,
    pub no_results: bool,
    pub search: SearchForm,
    pub detail: DetailPanel,
    pub preferences: PreferencesForm,
    #[data(same_fn = "PartialEq::eq")]
    pub palette: Palette,
}

impl AppState {
    pub fn new(mode: Mode) -> Self {
        Self {
            previews: Vector::new(),
            remaining: 0,
            no_results: false,
            search: SearchForm::default(),
            detail: DetailPanel::default(),
            preferences: PreferencesForm {
                open: false,
                theme: mode.into(),
            },
            palette: mode.palette(),
        }
    }
}

impl View for AppState {
    fn replace_items(&mut self, items: Vec<Preview>) {
        self.previews = items.into_iter().map(Arc::new).collect();
    }

    fn append_items(&mut self, items: Vec<Preview>) {
        self.previews.extend(items.into_iter().map(Arc::new));
    }

    fn set_remaining(&mut self, remaining: usize) {
        self.remaining = remaining;
    }

    fn set_no_results(&mut self, visible: bool) {
        self.no_results = visible;
    }

    fn open_detail(&mut self, detail: Detail) {
        self.detail = DetailPanel {
            open: true,
            image: detail.image,
            title: detail.title,
            subtitle: detail.subtitle,
            genres: detail.genres,
            description: detail.description,
        };
    }

    fn close_detail(&mut self) {
        self.detail.open = false;
    }

    fn open_search(&mut self, criteria: &Criteria) {
        self.search.fill(criteria);
        self.search.open = true;
    }

    fn close_search(&mut self) {
        self.search.open = false;
    }

    fn open_preferences(&mut self, mode: Mode) {
        self.preferences.theme = mode.into();
        self.preferences.open = true;
    }

    fn close_preferences(&mut self) {
        self.preferences.open = false;
    }

    fn apply_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

/// Editable copy of the filter. Choices hold a lookup id or `Choice::ANY`.
#[derive(Clone, Data, Lens)]
pub struct SearchForm {
    pub open: bool,
    pub title: String,
    pub author: Arc<str>,
    pub genre: Arc<str>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            author: Choice::ANY.into(),
            genre: Choice::ANY.into(),
        }
    }
}

impl SearchForm {
    fn fill(&mut self, criteria: &Criteria) {
        self.title = criteria.title.clone();
        self.author = criteria.author.as_value().into();
        self.genre = criteria.genre.as_value().into();
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            title: self.title.clone(),
            author: Choice::from_value(&self.author),
            genre: Choice::from_value(&self.genre),
        }
    }
}

#[derive(Clone, Data, Lens)]
pub struct DetailPanel {
    pub open: bool,
    pub image: Arc<str>,
    pub title: Arc<str>,
    pub subtitle: Arc<str>,
    pub genres: Arc<str>,
    pub description: Arc<str>,
}

impl Default for DetailPanel {
    fn default() -> Self {
        let blank: Arc<str> = "".into();
        Self {
            open: false,
            image: blank.clone(),
            title: blank.clone(),
            subtitle: blank.clone(),
            genres: blank.clone(),
            description: blank,
        }
    }
}

#[derive(Clone, Data, Lens)]
pub struct PreferencesForm {
    pub open: bool,
    pub theme: Theme,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Data)]
pub enum Theme {
    Day,
    Night,
}

impl From<Mode> for Theme {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Day => Theme::Day,
            Mode::Night => Theme::Night,
        }
    }
}

impl From<Theme> for Mode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Day => Mode::Day,
            Theme::Night => Mode::Night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(id: &str) -> Preview {
        Preview {
            id: id.into(),
            image: format!("covers/{id}.jpg").into(),
            title: format!("Title {id}").into(),
            author: "Someone".into(),
        }
    }

    #[test]
    fn append_keeps_existing_entries() {
        let mut state = AppState::new(Mode::Day);
        state.replace_items(vec![preview("b1"), preview("b2")]);
        let first = state.previews[0].clone();
        state.append_items(vec![preview("b3")]);

        assert_eq!(state.previews.len(), 3);
        assert!(Arc::ptr_eq(&first, &state.previews[0]));
        assert_eq!(state.previews[2].id.as_ref(), "b3");

        state.replace_items(vec![preview("b9")]);
        assert_eq!(state.previews.len(), 1);
    }

    #[test]
    fn search_form_round_trips_criteria() {
        let mut state = AppState::new(Mode::Day);
        let criteria = Criteria {
            title: "atlas".into(),
            author: Choice::Id("a1".into()),
            genre: Choice::Any,
        };
        state.open_search(&criteria);

        assert!(state.search.open);
        assert_eq!(state.search.genre.as_ref(), Choice::ANY);
        assert_eq!(state.search.criteria(), criteria);
    }

    #[test]
    fn preferences_form_follows_mode() {
        let mut state = AppState::new(Mode::Night);
        assert_eq!(state.preferences.theme, Theme::Night);
        assert_eq!(state.palette, Mode::Night.palette());

        state.open_preferences(Mode::Day);
        assert!(state.preferences.open);
        assert_eq!(Mode::from(state.preferences.theme), Mode::Day);
    }

    #[test]
    fn detail_panel_opens_and_closes() {
        let mut state = AppState::new(Mode::Day);
        state.open_detail(Detail {
            id: "b1".into(),
            image: "covers/b1.jpg".into(),
            title: "Atlas of Clouds".into(),
            subtitle: "Someone (1987)".into(),
            genres: "Poetry".into(),
            description: "Clouds.".into(),
        });
        assert!(state.detail.open);
        assert_eq!(state.detail.subtitle.as_ref(), "Someone (1987)");

        state.close_detail();
        assert!(!state.detail.open);
    }
}
