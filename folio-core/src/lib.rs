pub mod browser;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod filter;
pub mod mode;
pub mod paging;
pub mod render;

#[cfg(test)]
mod testing;

pub use crate::{
    browser::{Action, Browser},
    catalog::{Catalog, Item, Lookup},
    detail::Detail,
    error::Error,
    filter::{filter, Choice, Criteria},
    mode::{Mode, Palette, Rgb},
    paging::Cursor,
    render::{Preview, View},
};
