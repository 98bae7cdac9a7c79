//! Light/dark palettes and the persisted theme choice.
//!
//! Renderers receive a [`Theme`] value at call time instead of reading global
//! style state, so a toggle followed by a full refresh always draws with the
//! new colours.

use serde::{Deserialize, Serialize};

/// The two supported visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Glyph shown on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "🌙",
            ThemeMode::Light => "☀️",
        }
    }
}

/// Resolved colours for one [`ThemeMode`].
///
/// Series colours are `#rrggbb` so an alpha byte can be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub surface: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
    pub error: &'static str,
    /// Temperature line, primary city
    pub accent: &'static str,
    /// Temperature line, compared city
    pub accent_b: &'static str,
    /// Precipitation bars, primary city
    pub accent2: &'static str,
    /// Precipitation bars, compared city
    pub accent2_b: &'static str,
}

impl Theme {
    pub const DARK: Theme = Theme {
        mode: ThemeMode::Dark,
        background: "#0f172a",
        surface: "#1e293b",
        foreground: "#e5e7eb",
        muted: "#94a3b8",
        grid: "#334155",
        error: "#f87171",
        accent: "#60a5fa",
        accent_b: "#f472b6",
        accent2: "#34d399",
        accent2_b: "#fbbf24",
    };

    pub const LIGHT: Theme = Theme {
        mode: ThemeMode::Light,
        background: "#f8fafc",
        surface: "#ffffff",
        foreground: "#1f2937",
        muted: "#64748b",
        grid: "#e2e8f0",
        error: "#b91c1c",
        accent: "#2563eb",
        accent_b: "#db2777",
        accent2: "#059669",
        accent2_b: "#d97706",
    };

    pub fn for_mode(mode: ThemeMode) -> Theme {
        match mode {
            ThemeMode::Dark => Theme::DARK,
            ThemeMode::Light => Theme::LIGHT,
        }
    }

    /// Line colour for the `index`-th city (primary = 0).
    pub fn line_color(&self, index: usize) -> &'static str {
        if index == 0 {
            self.accent
        } else {
            self.accent_b
        }
    }

    /// Bar colour for the `index`-th city (primary = 0).
    pub fn bar_color(&self, index: usize) -> &'static str {
        if index == 0 {
            self.accent2
        } else {
            self.accent2_b
        }
    }
}

/// Append a two-digit hex alpha to a `#rrggbb` colour.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{color}{alpha}")
}

/// Where the chosen theme is remembered between sessions.
pub trait ThemePersistence {
    fn load(&self) -> Option<ThemeMode>;
    fn save(&self, mode: ThemeMode);
}

/// Handle returned by [`ThemeStore::subscribe`].
pub type SubscriberId = usize;

/// Owner of the current theme selection.
///
/// Loads the saved mode on creation (dark when nothing is saved), persists
/// every change and notifies subscribers with the resolved [`Theme`].
pub struct ThemeStore<P: ThemePersistence> {
    persistence: P,
    mode: ThemeMode,
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&Theme)>)>,
    next_id: SubscriberId,
}

impl<P: ThemePersistence> ThemeStore<P> {
    pub fn new(persistence: P) -> Self {
        let mode = persistence.load().unwrap_or_default();
        Self {
            persistence,
            mode,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.mode)
    }

    /// Switch to `mode`. Setting the current mode again is a no-op.
    pub fn set(&mut self, mode: ThemeMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.persistence.save(mode);
        log::info!("theme: switched to {}", mode.as_str());
        let theme = self.theme();
        for (_, subscriber) in &self.subscribers {
            subscriber(&theme);
        }
    }

    /// Flip between dark and light, returning the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&Theme) + 'static) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}
