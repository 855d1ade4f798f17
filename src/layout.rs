//! Viewport classification.
//!
//! The selector is a pure function of the viewport width (plus an optional
//! forced class from the launch options). It never holds composition state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width, in logical pixels, at and above which the wide layout is used.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportClass::Wide => write!(f, "wide"),
            ViewportClass::Narrow => write!(f, "narrow"),
        }
    }
}

impl FromStr for ViewportClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wide" => Ok(ViewportClass::Wide),
            "narrow" => Ok(ViewportClass::Narrow),
            other => Err(format!("unknown layout '{}' (expected wide or narrow)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSelector {
    breakpoint: f32,
    forced: Option<ViewportClass>,
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}

impl LayoutSelector {
    pub fn new(breakpoint: f32) -> Self {
        Self { breakpoint, forced: None }
    }

    /// Always selects `class`, whatever the width.
    pub fn forced(class: ViewportClass) -> Self {
        Self { breakpoint: DEFAULT_BREAKPOINT, forced: Some(class) }
    }

    pub fn with_forced(mut self, forced: Option<ViewportClass>) -> Self {
        self.forced = forced;
        self
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    /// Classifies a viewport width.
    pub fn classify(&self, width: f32) -> ViewportClass {
        if let Some(class) = self.forced {
            return class;
        }
        if width >= self.breakpoint {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold() {
        let selector = LayoutSelector::default();
        assert_eq!(selector.classify(1200.0), ViewportClass::Wide);
        assert_eq!(selector.classify(768.0), ViewportClass::Wide);
        assert_eq!(selector.classify(767.9), ViewportClass::Narrow);
        assert_eq!(selector.classify(0.0), ViewportClass::Narrow);
    }

    #[test]
    fn test_forced_class_ignores_width() {
        let selector = LayoutSelector::forced(ViewportClass::Narrow);
        assert_eq!(selector.classify(4000.0), ViewportClass::Narrow);
        let selector = LayoutSelector::new(500.0).with_forced(None);
        assert_eq!(selector.classify(600.0), ViewportClass::Wide);
    }

    #[test]
    fn test_parse_class() {
        assert_eq!("Wide".parse::<ViewportClass>(), Ok(ViewportClass::Wide));
        assert_eq!("narrow".parse::<ViewportClass>(), Ok(ViewportClass::Narrow));
        assert!("tall".parse::<ViewportClass>().is_err());
        assert_eq!(ViewportClass::Narrow.to_string(), "narrow");
    }
}
