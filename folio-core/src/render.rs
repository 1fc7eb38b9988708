use std::sync::Arc;

use crate::{
    catalog::{Catalog, Item},
    detail::Detail,
    filter::Criteria,
    mode::{Mode, Palette},
};

/// What a list entry shows: enough to draw it and to open its detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub id: Arc<str>,
    pub image: Arc<str>,
    pub title: Arc<str>,
    pub author: Arc<str>,
}

impl Preview {
    pub fn new(catalog: &Catalog, item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            image: item.image.clone(),
            title: item.title.clone(),
            author: catalog.author_name(item),
        }
    }
}

pub fn previews(catalog: &Catalog, items: &[Arc<Item>]) -> Vec<Preview> {
    items.iter().map(|item| Preview::new(catalog, item)).collect()
}

/// The display the browser draws into. Implemented by the GUI state and by
/// test doubles.
pub trait View {
    /// Drops every displayed entry and shows `items` instead.
    fn replace_items(&mut self, items: Vec<Preview>);

    /// Adds `items` after the displayed entries, leaving those untouched.
    fn append_items(&mut self, items: Vec<Preview>);

    /// Updates the "show more" control. Zero disables it.
    fn set_remaining(&mut self, remaining: usize);

    fn set_no_results(&mut self, visible: bool);

    fn open_detail(&mut self, detail: Detail);

    fn close_detail(&mut self);

    /// Shows the filter form holding the committed `criteria`.
    fn open_search(&mut self, criteria: &Criteria);

    fn close_search(&mut self);

    /// Shows the preferences form holding the active `mode`.
    fn open_preferences(&mut self, mode: Mode);

    fn close_preferences(&mut self);

    fn apply_palette(&mut self, palette: Palette);
}

pub fn render(catalog: &Catalog, items: &[Arc<Item>], view: &mut dyn View) {
    view.replace_items(previews(catalog, items));
}

pub fn render_more(catalog: &Catalog, items: &[Arc<Item>], view: &mut dyn View) {
    if !items.is_empty() {
        view.append_items(previews(catalog, items));
    }
}
