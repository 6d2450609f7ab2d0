// src/entity/settings.rs
use serde::{Deserialize, Serialize};

use super::patch;

/// Dashboard-wide settings. There is always exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub site_name: String,
    pub theme_color: String,
    pub items_per_page: u32,
    pub enable_notifications: bool,
    /// Hours
    pub default_task_duration: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Mi Dashboard".to_string(),
            theme_color: "primary".to_string(),
            items_per_page: 5,
            enable_notifications: true,
            default_task_duration: 8,
        }
    }
}

impl Settings {
    pub(crate) fn apply(&mut self, update: SettingsUpdate) {
        patch(&mut self.site_name, update.site_name);
        patch(&mut self.theme_color, update.theme_color);
        patch(&mut self.items_per_page, update.items_per_page);
        patch(&mut self.enable_notifications, update.enable_notifications);
        patch(&mut self.default_task_duration, update.default_task_duration);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub site_name: Option<String>,
    pub theme_color: Option<String>,
    pub items_per_page: Option<u32>,
    pub enable_notifications: Option<bool>,
    pub default_task_duration: Option<u32>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.site_name.is_none()
            && self.theme_color.is_none()
            && self.items_per_page.is_none()
            && self.enable_notifications.is_none()
            && self.default_task_duration.is_none()
    }
}
