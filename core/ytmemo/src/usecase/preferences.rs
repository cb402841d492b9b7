//! テーマ・サイドバーの設定変更

use common::error::Error;
use std::sync::Arc;

use crate::domain::{Preferences, Theme};
use crate::ports::outbound::AppStore;

pub struct PreferencesUseCase {
    store: Arc<dyn AppStore>,
}

impl PreferencesUseCase {
    pub fn new(store: Arc<dyn AppStore>) -> Self {
        Self { store }
    }

    pub fn set_theme(&self, prefs: &mut Preferences, theme: Theme) -> Result<(), Error> {
        prefs.theme = theme;
        self.store.save_theme(theme)
    }

    /// 折りたたみ状態を反転して保存し、新しい状態を返す
    pub fn toggle_sidebar(&self, prefs: &mut Preferences) -> Result<bool, Error> {
        prefs.sidebar_collapsed = !prefs.sidebar_collapsed;
        self.store.save_sidebar_collapsed(prefs.sidebar_collapsed)?;
        Ok(prefs.sidebar_collapsed)
    }
}
