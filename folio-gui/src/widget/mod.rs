pub mod cover;
mod link;
mod theme;

use druid::{Data, Widget};

pub use cover::CoverImage;
pub use link::Link;
pub use theme::ThemeScope;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
