use std::time::Duration;

use anyhow::Context;

use crate::command::Command;
use crate::config::AppConfig;
use crate::data_source::load_records;
use crate::engine;
use crate::gallery::Gallery;
use crate::identity;
use crate::layout::LayoutKind;
use crate::notifications::{ToastKind, Toasts};
use crate::profile::{self, FileStore, ProfileStore};
use crate::rendering::{HeadlessRenderer, Renderer};

/// Changes to the signed-in profile requested on startup.
#[derive(Debug, Clone, Default)]
pub struct ProfileActions {
    pub sign_in: Option<String>,
    pub sign_out: bool,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub frames_drawn: u64,
    pub final_layout: Option<LayoutKind>,
}

pub fn apply_profile_actions(
    store: &mut impl ProfileStore,
    actions: &ProfileActions,
    toasts: &mut Toasts,
    now: Duration,
) -> anyhow::Result<()> {
    if actions.sign_out {
        profile::sign_out(store)?;
    }

    if let Some(credential) = &actions.sign_in {
        identity::sign_in(store, credential)?;
        toasts.push("Successfully signed in!", ToastKind::Success, now);
    }

    if let Some(locale) = &actions.locale {
        profile::update_locale(store, locale)?;
    }

    match profile::greeting(store)? {
        Some(greeting) => log::info!("Welcome, {}", greeting.name),
        None => log::info!("Not signed in"),
    }

    Ok(())
}

/// Loads the records and plays the configured layout tour on a fixed-step
/// clock, drawing through `renderer`.
pub fn run_with(
    config: &AppConfig,
    actions: &ProfileActions,
    renderer: &mut impl Renderer,
) -> anyhow::Result<RunSummary> {
    // Selector ids are checked before anything moves
    let tour = config
        .tour
        .layouts
        .iter()
        .map(|id| Command::from_selector(id))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid layout tour")?;

    let mut toasts = Toasts::new();
    let mut store = FileStore::open(&config.profile_path)?;
    apply_profile_actions(&mut store, actions, &mut toasts, Duration::ZERO)?;
    for toast in toasts.active() {
        log::info!("[{:?}] {}", toast.kind, toast.message);
    }

    let mut gallery = Gallery::new(config);
    match load_records(&config.data_path) {
        Ok(records) => gallery.load(records, Duration::ZERO)?,
        Err(err) => log::error!("Error loading data: {err:#}"),
    }
    if gallery.scene.is_empty() {
        log::warn!("Nothing to show, the gallery stays empty");
    }

    let step = Duration::from_millis(config.tour.frame_step_ms.max(1));
    let dwell = Duration::from_millis(config.tour.dwell_ms);
    let mut now = Duration::ZERO;
    let mut frames_drawn = 0;

    for command in tour {
        gallery.dispatch(command, now)?;

        let until = now + dwell;
        while now < until {
            now += step;
            if engine::update(&mut gallery, renderer, now) {
                frames_drawn += 1;
            }
            toasts.expire(now);

            if config.tour.realtime {
                std::thread::sleep(step);
            }
        }
    }

    Ok(RunSummary {
        records: gallery.scene.len(),
        frames_drawn,
        final_layout: gallery.active_layout(),
    })
}

pub fn run(config: &AppConfig, actions: &ProfileActions) -> anyhow::Result<RunSummary> {
    let mut renderer = HeadlessRenderer::new(config.viewport.width, config.viewport.height);
    let summary = run_with(config, actions, &mut renderer)?;

    log::info!(
        "Finished tour: {} tiles, {} frames drawn, {} visible in the last frame",
        summary.records,
        summary.frames_drawn,
        renderer.visible_count()
    );
    Ok(summary)
}
