//! Centralized application state for the portfolio viewer.
//!
//! Composes the view-state components from the library. Each component keeps
//! its own invariants; this struct only wires them together.

use rfolio::{ActiveLayout, Content, LayoutSelector, ThemeStore, ViewportClass};

pub struct AppState {
    /// Current color theme
    pub theme: ThemeStore,

    /// Page content, read-only after startup
    pub content: Content,

    /// Wide/narrow classification
    pub selector: LayoutSelector,

    /// The composition on screen, rebuilt on every viewport class change
    pub layout: ActiveLayout,

    /// One-line message shown under the header (if any)
    pub notice: Option<String>,

    /// Theme revision last pushed into egui visuals
    pub applied_theme_revision: Option<u64>,

    /// Skip animations, showing every element settled
    pub reduce_motion: bool,
}

impl AppState {
    /// Creates state for the given content and theme, starting in `initial_class`.
    pub fn new(theme: ThemeStore, content: Content, selector: LayoutSelector, initial_class: ViewportClass) -> Self {
        let layout = ActiveLayout::build(initial_class, &content);
        Self {
            theme,
            content,
            selector,
            layout,
            notice: None,
            applied_theme_revision: None,
            reduce_motion: false,
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }
}
