// Localized display text, keyed by language code
use crate::domain::error::DashboardError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertTexts {
    pub system_connected: String,
    pub low_battery: String,
    pub leak_detected: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToastText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToastTexts {
    pub snapshot: ToastText,
    pub surface: ToastText,
    pub connection: ToastText,
    pub connection_failed: ToastText,
}

/// Every string the engine renders for one language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub alerts: AlertTexts,
    pub toasts: ToastTexts,
}

fn toast(title: &str, description: &str) -> ToastText {
    ToastText {
        title: title.to_string(),
        description: description.to_string(),
    }
}

impl Catalog {
    pub fn english() -> Self {
        Self {
            alerts: AlertTexts {
                system_connected: "System connected".to_string(),
                low_battery: "Low battery".to_string(),
                leak_detected: "Leak detected!".to_string(),
            },
            toasts: ToastTexts {
                snapshot: toast("Snapshot", "Image captured and saved."),
                surface: toast("Surfacing", "NanoFish is returning to the surface."),
                connection: toast("Connected", "Connected to NanoFish-AP."),
                connection_failed: toast(
                    "Connection failed",
                    "Could not connect to the selected network.",
                ),
            },
        }
    }

    pub fn arabic() -> Self {
        Self {
            alerts: AlertTexts {
                system_connected: "تم توصيل النظام".to_string(),
                low_battery: "البطارية منخفضة".to_string(),
                leak_detected: "تم اكتشاف تسرب!".to_string(),
            },
            toasts: ToastTexts {
                snapshot: toast("لقطة", "تم التقاط الصورة وحفظها."),
                surface: toast("الصعود", "نانوفيش تعود إلى السطح."),
                connection: toast("متصل", "تم الاتصال بـ NanoFish-AP."),
                connection_failed: toast("فشل الاتصال", "تعذر الاتصال بالشبكة المحددة."),
            },
        }
    }
}

/// Read-only lookup table injected into the engine.
#[derive(Debug, Clone)]
pub struct Translations {
    catalogs: HashMap<String, Catalog>,
}

impl Default for Translations {
    fn default() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert("en".to_string(), Catalog::english());
        catalogs.insert("ar".to_string(), Catalog::arabic());
        Self { catalogs }
    }
}

impl Translations {
    /// Built-in catalogs with `extra` layered on top (same code replaces).
    pub fn with_overrides(extra: HashMap<String, Catalog>) -> Self {
        let mut translations = Self::default();
        translations.catalogs.extend(extra);
        translations
    }

    pub fn catalog(&self, code: &str) -> Result<&Catalog, DashboardError> {
        self.catalogs
            .get(code)
            .ok_or_else(|| DashboardError::UnknownLanguage(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.catalogs.contains_key(code)
    }
}

#[cfg(test)]
impl Translations {
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
