use std::sync::Arc;

use crate::catalog::{Catalog, Item};

/// Content of the detail panel for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    pub id: Arc<str>,
    pub image: Arc<str>,
    pub title: Arc<str>,
    pub subtitle: Arc<str>,
    pub genres: Arc<str>,
    pub description: Arc<str>,
}

impl Detail {
    pub fn new(catalog: &Catalog, item: &Item) -> Self {
        let author = catalog.author_name(item);
        let genres = catalog.genre_names(item);
        Self {
            id: item.id.clone(),
            image: item.image.clone(),
            title: item.title.clone(),
            subtitle: subtitle(&author, item.year()).into(),
            genres: genres.join(", ").into(),
            description: item.description.clone(),
        }
    }

    /// Looks `id` up in the whole dataset, not just the current matches.
    pub fn lookup(catalog: &Catalog, id: &str) -> Option<Self> {
        catalog.get(id).map(|item| Self::new(catalog, item))
    }
}

/// `year` is within 0..=9999 for every item of a loaded catalog.
pub fn subtitle(author: &str, year: i32) -> String {
    format!("{author} ({year:04})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{item, lookup, single_book_json};

    #[test]
    fn subtitle_has_author_and_year() {
        let items = vec![item("b1", "Atlas of Clouds", "a1", &["g1", "g2"], 1987)];
        let catalog =
            Catalog::new(items, lookup(&["a1"]), lookup(&["g1", "g2"]), 36).unwrap();

        let detail = Detail::lookup(&catalog, "b1").unwrap();
        assert_eq!(detail.title.as_ref(), "Atlas of Clouds");
        assert_eq!(detail.subtitle.as_ref(), "Name a1 (1987)");
        assert_eq!(detail.genres.as_ref(), "Name g1, Name g2");
        assert_eq!(detail.description.as_ref(), "About Atlas of Clouds.");
        assert_eq!(detail.image.as_ref(), "covers/b1.jpg");
    }

    #[test]
    fn unknown_id_has_no_detail() {
        let catalog = Catalog::new(vec![], lookup(&[]), lookup(&[]), 36).unwrap();
        assert!(Detail::lookup(&catalog, "b1").is_none());
    }

    #[test]
    fn subtitle_year_follows_utc_across_new_year() {
        let json = single_book_json("2000-01-01T00:30:00+01:00");
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        let detail = Detail::lookup(&catalog, "b1").unwrap();
        assert_eq!(detail.subtitle.as_ref(), "Ada (1999)");
    }

    #[test]
    fn year_is_padded_to_four_digits() {
        assert_eq!(subtitle("Anon", 812), "Anon (0812)");
        assert_eq!(subtitle("Anon", 2021), "Anon (2021)");
    }
}
