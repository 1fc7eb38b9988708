use std::sync::Arc;

use crate::catalog::Item;

/// A categorical constraint: either any value, or exactly one id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    Any,
    Id(Arc<str>),
}

impl Choice {
    /// Form value standing for "no constraint".
    pub const ANY: &'static str = "any";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ANY {
            Self::Any
        } else {
            Self::Id(value.into())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::Any => Self::ANY,
            Self::Id(id) => id.as_ref(),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub title: String,
    pub author: Choice,
    pub genre: Choice,
}

impl Criteria {
    /// True when no field constrains the match set.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    pub fn matches(&self, item: &Item) -> bool {
        Matcher::new(self).matches(item)
    }
}

/// Criteria prepared for repeated use over a dataset.
struct Matcher<'a> {
    criteria: &'a Criteria,
    title: Option<String>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a Criteria) -> Self {
        // Blank input disables the title constraint, but non-blank input is
        // matched as typed, surrounding whitespace included.
        let title = if criteria.title.trim().is_empty() {
            None
        } else {
            Some(criteria.title.to_lowercase())
        };
        Self { criteria, title }
    }

    fn matches(&self, item: &Item) -> bool {
        let genre_match = match &self.criteria.genre {
            Choice::Any => true,
            Choice::Id(genre) => item.has_genre(genre),
        };
        let title_match = match &self.title {
            None => true,
            Some(needle) => item.title.to_lowercase().contains(needle.as_str()),
        };
        let author_match = match &self.criteria.author {
            Choice::Any => true,
            Choice::Id(author) => item.author == *author,
        };
        genre_match && title_match && author_match
    }
}

/// Returns the items satisfying every constraint of `criteria`, in dataset
/// order.
pub fn filter(items: &[Arc<Item>], criteria: &Criteria) -> Vec<Arc<Item>> {
    let matcher = Matcher::new(criteria);
    items
        .iter()
        .filter(|item| matcher.matches(item))
        .cloned()
        .collect()
}
