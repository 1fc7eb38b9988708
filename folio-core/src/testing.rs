use std::sync::Arc;

use time::{Date, Month, PrimitiveDateTime, Time};

use crate::{
    catalog::{Catalog, Item, Lookup},
    detail::Detail,
    filter::Criteria,
    mode::{Mode, Palette},
    render::{Preview, View},
};

pub fn item(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Item {
    let date = Date::from_calendar_date(year, Month::June, 15).unwrap();
    Item {
        id: id.into(),
        title: title.into(),
        author: author.into(),
        genres: genres.iter().map(|&genre| genre.into()).collect(),
        image: format!("covers/{id}.jpg").into(),
        published: PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc(),
        description: format!("About {title}.").into(),
    }
}

pub fn lookup(ids: &[&str]) -> Lookup {
    Lookup::new(
        ids.iter()
            .map(|&id| (Arc::from(id), Arc::from(format!("Name {id}").as_str()))),
    )
}

/// `count` items cycling over two authors and three genres.
pub fn numbered_catalog(count: usize, page_size: usize) -> Catalog {
    let items = (0..count)
        .map(|n| {
            let author = if n % 2 == 0 { "a1" } else { "a2" };
            let genre = ["g1", "g2", "g3"][n % 3];
            item(
                &format!("b{n}"),
                &format!("Volume {n}"),
                author,
                &[genre],
                1900 + n as i32,
            )
        })
        .collect();
    Catalog::new(
        items,
        lookup(&["a1", "a2"]),
        lookup(&["g1", "g2", "g3"]),
        page_size,
    )
    .unwrap()
}

pub fn criteria(title: &str) -> Criteria {
    Criteria {
        title: title.into(),
        ..Criteria::default()
    }
}

/// A `View` that keeps what it was told, in order.
#[derive(Default)]
pub struct RecordingView {
    pub items: Vec<Preview>,
    pub replaced: usize,
    pub appended: usize,
    pub remaining: Option<usize>,
    pub no_results: Option<bool>,
    pub detail: Option<Detail>,
    pub search_open: bool,
    pub search_form: Option<Criteria>,
    pub preferences_open: bool,
    pub preferences_form: Option<Mode>,
    pub palette: Option<Palette>,
}

impl View for RecordingView {
    fn replace_items(&mut self, items: Vec<Preview>) {
        self.replaced += 1;
        self.items = items;
    }

    fn append_items(&mut self, items: Vec<Preview>) {
        self.appended += 1;
        self.items.extend(items);
    }

    fn set_remaining(&mut self, remaining: usize) {
        self.remaining = Some(remaining);
    }

    fn set_no_results(&mut self, visible: bool) {
        self.no_results = Some(visible);
    }

    fn open_detail(&mut self, detail: Detail) {
        self.detail = Some(detail);
    }

    fn close_detail(&mut self) {
        self.detail = None;
    }

    fn open_search(&mut self, criteria: &Criteria) {
        self.search_open = true;
        self.search_form = Some(criteria.clone());
    }

    fn close_search(&mut self) {
        self.search_open = false;
    }

    fn open_preferences(&mut self, mode: Mode) {
        self.preferences_open = true;
        self.preferences_form = Some(mode);
    }

    fn close_preferences(&mut self) {
        self.preferences_open = false;
    }

    fn apply_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }
}

/// Dataset document holding one book by "Ada" with the given timestamp.
pub fn single_book_json(published: &str) -> String {
    format!(
        r#"{{
            "authors": {{ "a1": "Ada" }},
            "genres": {{ "g1": "Poetry" }},
            "books": [{{
                "id": "b1",
                "title": "Salt Letters",
                "author": "a1",
                "genres": ["g1"],
                "image": "covers/b1.jpg",
                "published": "{published}",
                "description": "Short, bright chapters."
            }}]
        }}"#
    )
}
