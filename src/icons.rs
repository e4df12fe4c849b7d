//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Clipboard affordance icons
#[derive(Debug, Clone)]
pub struct CopyIcons {
    pub copy: &'static str,
    pub copied: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub app_title: &'static str,
    pub date_title: &'static str,
    pub time_title: &'static str,
    pub formats_title: &'static str,
    pub invalid: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub copy: CopyIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                copy: CopyIcons {
                    copy: "📋",
                    copied: "✅",
                },
                ui: UiIcons {
                    app_title: "🕒",
                    date_title: "📅",
                    time_title: "⏰",
                    formats_title: "💬",
                    invalid: "⚠️",
                },
            },
            IconTheme::Unicode => IconSet {
                copy: CopyIcons {
                    copy: "⧉",
                    copied: "✓",
                },
                ui: UiIcons {
                    app_title: "◷",
                    date_title: "▦",
                    time_title: "◔",
                    formats_title: "▶",
                    invalid: "⚠",
                },
            },
            IconTheme::Ascii => IconSet {
                copy: CopyIcons {
                    copy: "[c]",
                    copied: "[+]",
                },
                ui: UiIcons {
                    app_title: "@",
                    date_title: "#",
                    time_title: "T",
                    formats_title: ">",
                    invalid: "!",
                },
            },
        }
    }

    /// Icon for a format row, depending on whether its markup was just copied
    #[must_use]
    pub fn copy_state(&self, copied: bool) -> &'static str {
        let icons = self.icons();
        if copied {
            icons.copy.copied
        } else {
            icons.copy.copy
        }
    }
}
