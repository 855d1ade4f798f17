//! Process-wide theme state.
//!
//! The store owns the single active [`ThemeDescriptor`]. Reads are free;
//! writes go through [`ThemeStore::set`], [`ThemeStore::set_named`] or
//! [`ThemeStore::toggle`], each of which replaces the whole descriptor and
//! bumps the revision so consumers know to re-derive their styling.

use crate::theme::{catalog, ThemeDescriptor, ThemeError, ThemeManager};

pub struct ThemeStore {
    /// Built-in palettes
    manager: &'static ThemeManager,
    /// Active palette
    current: ThemeDescriptor,
    /// Incremented on every replacement
    revision: u64,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore {
    /// Creates a store holding the default palette.
    pub fn new() -> Self {
        let manager = catalog();
        let current = manager.default_theme().colors;
        Self { manager, current, revision: 0 }
    }

    /// Creates a store starting from a previously saved descriptor.
    pub fn with_descriptor(descriptor: ThemeDescriptor) -> Self {
        Self {
            manager: catalog(),
            current: descriptor,
            revision: 0,
        }
    }

    // ===== Queries =====

    /// Returns the active palette.
    pub fn get(&self) -> &ThemeDescriptor {
        &self.current
    }

    /// Returns the catalog name of the active palette, if it is a built-in one.
    pub fn current_name(&self) -> Option<&str> {
        self.manager.find_by_colors(&self.current).map(|t| t.name.as_str())
    }

    /// Returns the palette catalog.
    pub fn theme_manager(&self) -> &'static ThemeManager {
        self.manager
    }

    /// Returns the number of replacements so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Mutations =====

    /// Replaces the active palette wholesale.
    pub fn set(&mut self, descriptor: ThemeDescriptor) {
        self.current = descriptor;
        self.revision += 1;
        tracing::info!(theme = self.current_name().unwrap_or("custom"), revision = self.revision, "theme changed");
    }

    /// Activates a built-in palette by name.
    pub fn set_named(&mut self, name: &str) -> Result<(), ThemeError> {
        let colors = self
            .manager
            .get_theme(name)
            .map(|t| t.colors)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        self.set(colors);
        Ok(())
    }

    /// Advances to the next built-in palette.
    pub fn toggle(&mut self) {
        let next = self.manager.next_theme_name(self.current_name()).to_string();
        let colors = self.manager.get_theme(&next).map(|t| t.colors).unwrap_or(self.manager.default_theme().colors);
        self.set(colors);
    }
}
