//! Light/dark theme resolution.
//!
//! The effective theme is the stored explicit preference if there is one,
//! otherwise the ambient `prefers-color-scheme` signal. [`ThemeController`]
//! owns both inputs, persists explicit choices through a [`PreferenceStore`]
//! and notifies listeners every time the effective theme is recomputed.

mod browser;

pub use browser::{apply_to_document, LocalStorageStore};

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The explicit preference that flips the given effective theme.
    pub fn opposite_of(dark: bool) -> Self {
        if dark {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Preference storage is unavailable")]
    StorageUnavailable,
    #[error("Preference storage failed: {0}")]
    Storage(String),
    #[error("Unrecognized theme preference: {0}")]
    InvalidPreference(String),
}

/// Durable slot for the explicit theme choice.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError>;
    fn save(&self, pref: ThemePreference) -> Result<(), ThemeError>;
    fn clear(&self) -> Result<(), ThemeError>;
}

/// Effective dark mode for a stored preference and the ambient signal.
pub fn resolve(pref: Option<ThemePreference>, system_dark: bool) -> bool {
    match pref {
        Some(p) => p.is_dark(),
        None => system_dark,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn Fn(bool) + Send + Sync>;

pub struct ThemeController<S> {
    store: S,
    preference: Option<ThemePreference>,
    system_dark: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the persisted preference once. Anything unreadable means
    /// "follow system".
    pub fn new(store: S, system_dark: bool) -> Self {
        let preference = match store.load() {
            Ok(pref) => pref,
            Err(ThemeError::StorageUnavailable) => None,
            Err(e) => {
                log::warn!("ignoring stored theme preference: {e}");
                None
            }
        };
        Self {
            store,
            preference,
            system_dark,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        self.preference
    }

    pub fn system_dark(&self) -> bool {
        self.system_dark
    }

    pub fn is_dark(&self) -> bool {
        resolve(self.preference, self.system_dark)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_system_dark(&mut self, dark: bool) -> bool {
        self.system_dark = dark;
        self.recompute()
    }

    /// Flip the effective theme. The result is always an explicit preference.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = ThemePreference::opposite_of(self.is_dark());
        self.set_preference(Some(next));
        next
    }

    /// Store an explicit preference, or `None` to go back to following the
    /// system. Persistence errors are logged and the in-memory state wins.
    pub fn set_preference(&mut self, pref: Option<ThemePreference>) -> bool {
        self.preference = pref;
        let res = match pref {
            Some(p) => self.store.save(p),
            None => self.store.clear(),
        };
        if let Err(e) = res {
            log::warn!("theme preference not persisted: {e}");
        }
        self.recompute()
    }

    fn recompute(&self) -> bool {
        let dark = self.is_dark();
        log::debug!("effective theme: {}", if dark { "dark" } else { "light" });
        for (_, listener) in &self.listeners {
            listener(dark);
        }
        dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    #[derive(Default, Clone)]
    struct MemoryStore {
        slot: Arc<Mutex<Option<String>>>,
    }

    impl MemoryStore {
        fn with_value(v: &str) -> Self {
            Self {
                slot: Arc::new(Mutex::new(Some(v.to_string()))),
            }
        }

        fn value(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
            self.slot
                .lock()
                .unwrap()
                .as_deref()
                .map(|s| s.parse::<ThemePreference>())
                .transpose()
        }

        fn save(&self, pref: ThemePreference) -> Result<(), ThemeError> {
            *self.slot.lock().unwrap() = Some(pref.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), ThemeError> {
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
            Err(ThemeError::StorageUnavailable)
        }

        fn save(&self, _pref: ThemePreference) -> Result<(), ThemeError> {
            Err(ThemeError::Storage("quota exceeded".to_string()))
        }

        fn clear(&self) -> Result<(), ThemeError> {
            Err(ThemeError::StorageUnavailable)
        }
    }

    #[test]
    fn test_resolve_truth_table() {
        let cases = [
            (Some(ThemePreference::Light), false, false),
            (Some(ThemePreference::Light), true, false),
            (Some(ThemePreference::Dark), false, true),
            (Some(ThemePreference::Dark), true, true),
            (None, false, false),
            (None, true, true),
        ];
        for (pref, system, expected) in cases {
            assert_eq!(resolve(pref, system), expected, "{pref:?} / {system}");
        }
    }

    #[test]
    fn test_preference_parsing() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!(
            "Dark".parse::<ThemePreference>(),
            Err(ThemeError::InvalidPreference("Dark".to_string()))
        );
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn test_startup_reads_stored_preference() {
        let controller = ThemeController::new(MemoryStore::with_value("dark"), false);
        assert_eq!(controller.preference(), Some(ThemePreference::Dark));
        assert!(controller.is_dark());

        let controller = ThemeController::new(MemoryStore::default(), true);
        assert_eq!(controller.preference(), None);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_garbage_in_storage_follows_system() {
        let controller = ThemeController::new(MemoryStore::with_value("purple"), true);
        assert_eq!(controller.preference(), None);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_toggle_always_flips_and_is_explicit() {
        for stored in [None, Some("light"), Some("dark")] {
            for system in [false, true] {
                let store = stored.map(MemoryStore::with_value).unwrap_or_default();
                let mut controller = ThemeController::new(store.clone(), system);
                let before = controller.is_dark();

                let pref = controller.toggle();
                assert_eq!(controller.is_dark(), !before);
                assert_eq!(controller.preference(), Some(pref));
                assert_eq!(store.value().as_deref(), Some(pref.as_str()));

                controller.toggle();
                assert_eq!(controller.is_dark(), before);
                assert!(controller.preference().is_some());
            }
        }
    }

    #[test]
    fn test_explicit_preference_ignores_system_changes() {
        let mut controller = ThemeController::new(MemoryStore::with_value("light"), false);
        assert!(!controller.set_system_dark(true));
        assert!(controller.system_dark());
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_follows_system_changes_without_preference() {
        let mut controller = ThemeController::new(MemoryStore::default(), false);
        assert!(controller.set_system_dark(true));
        assert!(!controller.set_system_dark(false));
        assert!(controller.set_system_dark(true));
    }

    #[test]
    fn test_clearing_preference_removes_key() {
        let store = MemoryStore::with_value("light");
        let mut controller = ThemeController::new(store.clone(), true);
        assert!(!controller.is_dark());

        assert!(controller.set_preference(None));
        assert_eq!(store.value(), None);
        assert_eq!(controller.preference(), None);
    }

    #[test]
    fn test_storage_failures_keep_theme_correct() {
        let mut controller = ThemeController::new(BrokenStore, true);
        assert_eq!(controller.preference(), None);
        assert!(controller.is_dark());

        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert!(!controller.is_dark());
        assert!(controller.set_preference(None));
        assert_eq!(controller.preference(), None);
    }

    #[test]
    fn test_listeners_see_every_recompute() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut controller = ThemeController::new(MemoryStore::default(), false);
        let id = controller.subscribe({
            let seen = seen.clone();
            move |dark| seen.lock().unwrap().push(dark)
        });

        controller.set_system_dark(false);
        controller.set_system_dark(true);
        controller.toggle();
        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);

        assert_eq!(controller.listener_count(), 1);
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        assert_eq!(controller.listener_count(), 0);
        controller.toggle();
        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_unsubscribe_only_removes_one_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = ThemeController::new(MemoryStore::default(), false);
        let first = controller.subscribe({
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });
        controller.subscribe({
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(10, Ordering::SeqCst);
            }
        });

        controller.unsubscribe(first);
        controller.set_system_dark(true);
        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }
}
