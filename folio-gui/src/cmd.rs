use std::sync::Arc;

use druid::{Selector, WidgetId};

// Widget IDs

pub const WIDGET_SEARCH_INPUT: WidgetId = WidgetId::reserved(1);

// Common

pub const SET_FOCUS: Selector = Selector::new("app.set-focus");

// Search

pub const OPEN_SEARCH: Selector = Selector::new("app.search.open");
pub const CANCEL_SEARCH: Selector = Selector::new("app.search.cancel");
pub const SUBMIT_SEARCH: Selector = Selector::new("app.search.submit");

// List

pub const SHOW_MORE: Selector = Selector::new("app.list.show-more");

// Detail

pub const SHOW_DETAIL: Selector<Arc<str>> = Selector::new("app.detail.show");
pub const CLOSE_DETAIL: Selector = Selector::new("app.detail.close");

// Preferences

pub const OPEN_PREFERENCES: Selector = Selector::new("app.preferences.open");
pub const CANCEL_PREFERENCES: Selector = Selector::new("app.preferences.cancel");
pub const SUBMIT_PREFERENCES: Selector = Selector::new("app.preferences.submit");
