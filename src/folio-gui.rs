//! Portfolio Viewer GUI Application
//!
//! Renders a personal portfolio page with the egui framework:
//! - Wide (side-by-side) and narrow (single column) layouts chosen by window width
//! - Experiences / Projects / Skills accordion with animated panels
//! - Staggered entrance animations on first display
//! - Built-in color themes with a persistent preference
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `presentation/` - Color mapping and applying animation frames to widgets
//! - `io/` - Resume export
//! - `ui/` - Panel and layout rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod presentation;
mod io;
mod app;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use rfolio::{Content, LaunchConfig, ThemeStore};
use ui::panel_manager::PanelManager;

const APP_NAME: &str = "Portfolio Viewer";
const INITIAL_SIZE: [f32; 2] = [1200.0, 800.0];

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();
}

/// Main application entry point that parses options and launches the viewer.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = LaunchConfig::from_args(std::env::args().skip(1))?;
    if config.show_help {
        println!("{}", LaunchConfig::usage());
        return Ok(());
    }

    let (content, content_notice) = resolve_content(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_SIZE)
            .with_min_inner_size([360.0, 480.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, &config, content, content_notice)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start {}: {}", APP_NAME, err))
}

/// Loads the content named on the command line, falling back to the bundled
/// content with a notice when that fails.
fn resolve_content(config: &LaunchConfig) -> anyhow::Result<(Content, Option<String>)> {
    let Some(path) = &config.content_path else {
        return Ok((Content::bundled()?, None));
    };

    match Content::from_path(path) {
        Ok(content) => {
            tracing::info!(
                path = %path.display(),
                experiences = content.experiences().len(),
                projects = content.projects().len(),
                "content loaded"
            );
            Ok((content, None))
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to bundled content");
            Ok((Content::bundled()?, Some(format!("Could not load content: {}", err))))
        }
    }
}

/// The portfolio viewer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` keeps the layout in step with the window and applies interactions
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
}

impl FolioApp {
    /// Creates the viewer with content and theme resolved from options and storage.
    fn new(cc: &eframe::CreationContext, config: &LaunchConfig, content: Content, content_notice: Option<String>) -> Self {
        let mut notices: Vec<String> = content_notice.into_iter().collect();

        let mut theme = match ThemeCoordinator::load_theme_from_storage(cc.storage) {
            Some(stored) => ThemeStore::with_descriptor(stored),
            None => ThemeStore::new(),
        };
        if let Some(name) = &config.theme {
            if let Err(err) = theme.set_named(name) {
                tracing::warn!(error = %err, "ignoring --theme");
                notices.push(err.to_string());
            }
        }

        let selector = config.layout_selector();
        let initial_class = selector.classify(INITIAL_SIZE[0]);
        let mut state = AppState::new(theme, content, selector, initial_class);
        state.reduce_motion = config.reduce_motion;
        if !notices.is_empty() {
            state.set_notice(notices.join("; "));
        }

        Self { state }
    }
}

impl eframe::App for FolioApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, &self.state.theme);
    }

    /// Main update loop:
    /// 1. Apply theme if it changed
    /// 2. Rebuild the layout on a viewport class change
    /// 3. Advance animations
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &mut self.state);
        ApplicationCoordinator::sync_viewport(ctx, &mut self.state);
        ApplicationCoordinator::tick(ctx, &mut self.state);

        let interactions = PanelManager::render_all_panels(ctx, &self.state);
        for interaction in interactions {
            ApplicationCoordinator::handle_interaction(ctx, &mut self.state, interaction);
        }
    }
}
