use std::ops::Deref;
use std::sync::Arc;

use api::prefs::user_prefs::UserPrefs;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub user_prefs: UserPrefs,
}

/// The stable, non-reactive application state, provided once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(user_prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { user_prefs }))
    }
}
