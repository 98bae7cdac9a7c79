//! Theme persistence in the browser's `localStorage`.

use wxd_chart::{ThemeMode, ThemePersistence};

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// [`ThemePersistence`] over `window.localStorage`.
///
/// Storage can be disabled (private browsing, sandboxed frames); reads then
/// return nothing and writes are dropped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePersistence;

impl LocalStoragePersistence {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemePersistence for LocalStoragePersistence {
    fn load(&self) -> Option<ThemeMode> {
        let raw = Self::storage()?.get_item(THEME_KEY).ok().flatten()?;
        ThemeMode::parse(&raw)
    }

    fn save(&self, mode: ThemeMode) {
        let saved = Self::storage().map(|s| s.set_item(THEME_KEY, mode.as_str()));
        if !matches!(saved, Some(Ok(()))) {
            log::warn!("could not persist theme {}", mode.as_str());
        }
    }
}
