#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)]

mod ambient;
mod cmd;
mod controller;
mod data;
mod delegate;
mod ui;
mod widget;

use std::{process, sync::Arc};

use druid::AppLauncher;
use env_logger::{Builder, Env};
use folio_core::{Browser, Mode};

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
};

const ENV_LOG: &str = "FOLIO_LOG";
const ENV_LOG_STYLE: &str = "FOLIO_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load().unwrap_or_default();

    let catalog = match config.load_catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            log::error!("failed to load catalog: {err}");
            process::exit(1);
        }
    };

    let mode = Mode::from_ambient(ambient::prefers_dark());
    log::info!("starting in {mode} mode");

    let browser = Browser::new(catalog.clone(), mode);
    let mut state = AppState::new(mode);
    browser.start(&mut state);

    let window = ui::main_window(&catalog, &config);
    let delegate = Delegate::new(browser, config.image_root());

    AppLauncher::with_window(window)
        .configure_env(|env, state: &AppState| ui::theme::setup(env, &state.palette))
        .delegate(delegate)
        .launch(state)
        .expect("Application launch");
}
