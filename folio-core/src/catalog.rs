use std::{
    collections::HashSet,
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
};

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use time::{OffsetDateTime, UtcOffset};

use crate::error::Error;

pub const DEFAULT_PAGE_SIZE: usize = 36;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// One catalog entry. Immutable once loaded, shared as `Arc<Item>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub author: Arc<str>,
    pub genres: Vec<Arc<str>>,
    pub image: Arc<str>,
    #[serde(with = "time::serde::rfc3339")]
    pub published: OffsetDateTime,
    pub description: Arc<str>,
}

impl Item {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|id| id.as_ref() == genre)
    }

    /// Publication year in UTC. An instant whose UTC form is not
    /// representable keeps the year of its own offset.
    pub fn year(&self) -> i32 {
        self.published
            .checked_to_offset(UtcOffset::UTC)
            .unwrap_or(self.published)
            .year()
    }
}

/// Id to display-name table. Keeps the order of the dataset document, so the
/// filter form lists entries the way the dataset author wrote them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookup {
    entries: Vec<(Arc<str>, Arc<str>)>,
}

impl Lookup {
    pub fn new(entries: impl IntoIterator<Item = (Arc<str>, Arc<str>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<str>> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_ref() == id)
            .map(|(_, name)| name)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<str>)> {
        self.entries.iter().map(|(id, name)| (id, name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Lookup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LookupVisitor;

        impl<'de> Visitor<'de> for LookupVisitor {
            type Value = Lookup;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of ids to display names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, name)) = map.next_entry::<Arc<str>, Arc<str>>()? {
                    entries.push((id, name));
                }
                Ok(Lookup { entries })
            }
        }

        deserializer.deserialize_map(LookupVisitor)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default = "default_page_size")]
    books_per_page: usize,
    authors: Lookup,
    genres: Lookup,
    books: Vec<Item>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// The static dataset: items, author and genre lookups and the page size.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
    authors: Lookup,
    genres: Lookup,
    page_size: usize,
}

impl Catalog {
    pub fn new(
        items: Vec<Item>,
        authors: Lookup,
        genres: Lookup,
        page_size: usize,
    ) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::InvalidCatalog("page size must be positive".into()));
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if !authors.contains(&item.author) {
                return Err(Error::InvalidCatalog(format!(
                    "item {} references unknown author {}",
                    item.id, item.author
                )));
            }
            if item.genres.is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "item {} has no genres",
                    item.id
                )));
            }
            if !(0..=9999).contains(&item.year()) {
                return Err(Error::InvalidCatalog(format!(
                    "item {} is published outside years 0000-9999",
                    item.id
                )));
            }
            if let Some(genre) = item.genres.iter().find(|id| !genres.contains(id)) {
                return Err(Error::InvalidCatalog(format!(
                    "item {} references unknown genre {}",
                    item.id, genre
                )));
            }
        }
        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
            authors,
            genres,
            page_size,
        })
    }

    /// The dataset compiled into the library.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        log::info!("loading catalog: {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        let catalog = Self::new(file.books, file.authors, file.genres, file.books_per_page)?;
        log::info!(
            "catalog ready: {} items, {} authors, {} genres",
            catalog.items.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn authors(&self) -> &Lookup {
        &self.authors
    }

    pub fn genres(&self) -> &Lookup {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Finds an item anywhere in the dataset, regardless of any filter.
    pub fn get(&self, id: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id.as_ref() == id)
    }

    pub fn author_name(&self, item: &Item) -> Arc<str> {
        self.authors
            .get(&item.author)
            .cloned()
            .unwrap_or_else(|| "".into())
    }

    pub fn genre_names(&self, item: &Item) -> Vec<Arc<str>> {
        item.genres
            .iter()
            .filter_map(|id| self.genres.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::testing::{item, lookup, single_book_json};

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.items().is_empty());
        assert_eq!(catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn lookup_keeps_document_order() {
        let json = r#"{ "zz": "Last", "aa": "First", "mm": "Middle" }"#;
        let lookup: Lookup = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = lookup.iter().map(|(_, name)| name.as_ref()).collect();
        assert_eq!(names, ["Last", "First", "Middle"]);
        assert_eq!(lookup.get("aa").map(|name| name.as_ref()), Some("First"));
    }

    #[test]
    fn parses_publication_timestamp() {
        let json = r#"{
            "books_per_page": 2,
            "authors": { "a1": "Ada Whitcombe" },
            "genres": { "g1": "Poetry" },
            "books": [{
                "id": "b1",
                "title": "Salt Letters",
                "author": "a1",
                "genres": ["g1"],
                "image": "covers/b1.jpg",
                "published": "1845-01-01T00:00:00.000Z",
                "description": "Short, bright chapters."
            }]
        }"#;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.page_size(), 2);
        let item = catalog.get("b1").unwrap();
        assert_eq!(item.year(), 1845);
        assert_eq!(catalog.author_name(item).as_ref(), "Ada Whitcombe");
        assert_eq!(catalog.genre_names(item), vec![Arc::<str>::from("Poetry")]);
    }

    #[test]
    fn year_is_taken_in_utc() {
        let json = single_book_json("2000-01-01T00:30:00+01:00");
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.get("b1").unwrap().year(), 1999);

        let json = single_book_json("1999-12-31T23:30:00-01:00");
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.get("b1").unwrap().year(), 2000);
    }

    #[test]
    fn rejects_years_before_zero() {
        let json = single_book_json("0000-01-01T00:30:00+01:00");
        let err = Catalog::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));

        let json = single_book_json("0000-01-01T00:30:00Z");
        assert!(Catalog::from_reader(json.as_bytes()).is_ok());
    }

    #[test]
    fn missing_page_size_uses_default() {
        let json = r#"{ "authors": {}, "genres": {}, "books": [] }"#;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let items = vec![
            item("b1", "One", "a1", &["g1"], 2001),
            item("b1", "Two", "a1", &["g1"], 2002),
        ];
        let err = Catalog::new(items, lookup(&["a1"]), lookup(&["g1"]), 36).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_dangling_references() {
        let items = vec![item("b1", "One", "a9", &["g1"], 2001)];
        assert!(Catalog::new(items, lookup(&["a1"]), lookup(&["g1"]), 36).is_err());

        let items = vec![item("b1", "One", "a1", &["g9"], 2001)];
        assert!(Catalog::new(items, lookup(&["a1"]), lookup(&["g1"]), 36).is_err());

        let items = vec![item("b1", "One", "a1", &[], 2001)];
        assert!(Catalog::new(items, lookup(&["a1"]), lookup(&["g1"]), 36).is_err());
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(Catalog::new(vec![], Lookup::default(), Lookup::default(), 0).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "books_per_page": 12, "authors": {{}}, "genres": {{}}, "books": [] }}"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.page_size(), 12);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let err = Catalog::from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }
}
