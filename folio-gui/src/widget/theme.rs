use druid::{widget::prelude::*, Data};
use folio_core::Palette;

use crate::ui::theme;

/// Themes its subtree from the palette `select` reads out of the data. The
/// env is rebuilt only when that palette changes.
pub struct ThemeScope<T, W> {
    inner: W,
    select: Box<dyn Fn(&T) -> Palette>,
    themed: Option<(Palette, Env)>,
}

impl<T, W> ThemeScope<T, W> {
    pub fn new(inner: W, select: impl Fn(&T) -> Palette + 'static) -> Self {
        Self {
            inner,
            select: Box::new(select),
            themed: None,
        }
    }

    /// Returns true when the env had to be rebuilt.
    fn refresh(&mut self, data: &T, outer_env: &Env) -> bool {
        let palette = (self.select)(data);
        if let Some((current, _)) = &self.themed {
            if *current == palette {
                return false;
            }
        }
        let mut themed_env = outer_env.clone();
        theme::setup(&mut themed_env, &palette);
        self.themed = Some((palette, themed_env));
        true
    }
}

fn scoped<'a>(themed: &'a Option<(Palette, Env)>, outer_env: &'a Env) -> &'a Env {
    themed.as_ref().map_or(outer_env, |(_, env)| env)
}

impl<T: Data, W: Widget<T>> Widget<T> for ThemeScope<T, W> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner
            .event(ctx, event, data, scoped(&self.themed, env))
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            self.refresh(data, env);
        }
        self.inner
            .lifecycle(ctx, event, data, scoped(&self.themed, env))
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        if self.refresh(data, env) {
            ctx.request_layout();
            ctx.request_paint();
        }
        self.inner
            .update(ctx, old_data, data, scoped(&self.themed, env));
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        self.inner.layout(ctx, bc, data, scoped(&self.themed, env))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.inner.paint(ctx, data, scoped(&self.themed, env));
    }
}
