use std::path::{Path, PathBuf};

use druid::{AppDelegate, Command, DelegateCtx, Env, Handled, ImageBuf, Target};
use folio_core::{Action, Browser};
use threadpool::ThreadPool;

use crate::{cmd, data::AppState, widget::cover};

pub struct Delegate {
    browser: Browser,
    image_root: Option<PathBuf>,
    image_pool: ThreadPool,
}

impl Delegate {
    pub fn new(browser: Browser, image_root: Option<PathBuf>) -> Self {
        const MAX_IMAGE_THREADS: usize = 8;

        Self {
            browser,
            image_root,
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
        }
    }

    fn action(cmd: &Command, data: &AppState) -> Option<Action> {
        if cmd.is(cmd::OPEN_SEARCH) {
            Some(Action::OpenSearch)
        } else if cmd.is(cmd::CANCEL_SEARCH) {
            Some(Action::CancelSearch)
        } else if cmd.is(cmd::SUBMIT_SEARCH) {
            Some(Action::SubmitSearch(data.search.criteria()))
        } else if cmd.is(cmd::SHOW_MORE) {
            Some(Action::ShowMore)
        } else if let Some(id) = cmd.get(cmd::SHOW_DETAIL) {
            Some(Action::Select(id.clone()))
        } else if cmd.is(cmd::CLOSE_DETAIL) {
            Some(Action::CloseDetail)
        } else if cmd.is(cmd::OPEN_PREFERENCES) {
            Some(Action::OpenPreferences)
        } else if cmd.is(cmd::CANCEL_PREFERENCES) {
            Some(Action::CancelPreferences)
        } else if cmd.is(cmd::SUBMIT_PREFERENCES) {
            Some(Action::SubmitPreferences(data.preferences.theme.into()))
        } else {
            None
        }
    }

    fn command_image(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        if let Some(location) = cmd.get(cover::REQUEST_DATA).cloned() {
            let Some(path) = self.resolve_image(&location) else {
                log::debug!("no local image for {location}");
                return Handled::Yes;
            };
            let sink = ctx.get_external_handle();
            self.image_pool.execute(move || match ImageBuf::from_file(&path) {
                Ok(image_buf) => {
                    let payload = cover::ImagePayload {
                        location,
                        image_buf,
                    };
                    if let Err(err) = sink.submit_command(cover::PROVIDE_DATA, payload, target) {
                        log::warn!("failed to deliver image: {err:?}");
                    }
                }
                Err(err) => {
                    log::warn!("failed to decode image {:?}: {err}", path);
                }
            });
            Handled::Yes
        } else {
            Handled::No
        }
    }

    /// Only files on disk are loaded. Relative references resolve against
    /// the dataset's directory.
    fn resolve_image(&self, location: &str) -> Option<PathBuf> {
        let path = Path::new(location);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.image_root.as_ref()?.join(path)
        };
        path.is_file().then_some(path)
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(action) = Self::action(cmd, data) {
            let focus_search = matches!(action, Action::OpenSearch);
            self.browser.dispatch(action, data);
            if focus_search {
                ctx.submit_command(cmd::SET_FOCUS.to(cmd::WIDGET_SEARCH_INPUT));
            }
            Handled::Yes
        } else {
            self.command_image(ctx, target, cmd)
        }
    }
}
