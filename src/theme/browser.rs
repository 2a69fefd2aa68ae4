#[cfg(feature = "hydrate")]
use crate::config::THEME_STORAGE_KEY;

use super::{PreferenceStore, ThemeError, ThemePreference};

/// Theme preference kept in `window.localStorage`.
///
/// Only available in the browser; during server rendering every call
/// reports [`ThemeError::StorageUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .ok_or(ThemeError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| ThemeError::Storage(format!("{e:?}")))?
        .ok_or(ThemeError::StorageUnavailable)
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))?
            .map(|v| v.parse::<ThemePreference>())
            .transpose()
    }

    fn save(&self, pref: ThemePreference) -> Result<(), ThemeError> {
        local_storage()?
            .set_item(THEME_STORAGE_KEY, pref.as_str())
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), ThemeError> {
        local_storage()?
            .remove_item(THEME_STORAGE_KEY)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}

#[cfg(not(feature = "hydrate"))]
impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn save(&self, _pref: ThemePreference) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn clear(&self) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }
}

/// Mirror the effective theme onto the `dark` class of `<html>`.
pub fn apply_to_document(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                log::warn!("couldn't apply theme to document: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use crate::theme::ThemeController;

    #[test]
    fn test_server_side_store_is_unavailable() {
        assert_eq!(
            LocalStorageStore.load(),
            Err(ThemeError::StorageUnavailable)
        );
        let mut controller = ThemeController::new(LocalStorageStore, false);
        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert!(controller.is_dark());
    }
}
