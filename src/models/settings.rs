// ============================================================================
// Paramètres de l'application
// ============================================================================
// Sections de réglages (liens et interrupteurs). Rien n'est persisté :
// l'état des interrupteurs vit le temps de la session.
// ============================================================================

use std::collections::HashMap;

/// Version affichée en bas de l'écran des réglages
pub const APP_VERSION_LABEL: &str = "Nucleus v1.0.4 • Build 240";

/// Type d'un item de réglage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Ouvre un sous-écran (simulé), avec une valeur optionnelle affichée
    Link { value: Option<&'static str> },

    /// Interrupteur on/off
    Toggle,
}

/// Un item de réglage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingItem {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: SettingKind,
}

/// Une section de réglages (titre + items)
#[derive(Debug, Clone, Copy)]
pub struct SettingSection {
    pub title: &'static str,
    pub items: &'static [SettingItem],
}

const fn link(id: &'static str, label: &'static str, value: Option<&'static str>) -> SettingItem {
    SettingItem {
        id,
        label,
        kind: SettingKind::Link { value },
    }
}

const fn toggle(id: &'static str, label: &'static str) -> SettingItem {
    SettingItem {
        id,
        label,
        kind: SettingKind::Toggle,
    }
}

pub const SECTIONS: &[SettingSection] = &[
    SettingSection {
        title: "Preferences",
        items: &[
            link("currency", "Currency", Some("USD")),
            link("lang", "Language", Some("English")),
            toggle("notifications", "Notifications"),
        ],
    },
    SettingSection {
        title: "Security",
        items: &[
            toggle("biometrics", "Face ID"),
            link("recovery", "Recovery Phrase", None),
            link("pin", "Change PIN", None),
        ],
    },
    SettingSection {
        title: "Support",
        items: &[
            link("help", "Help Center", None),
            link("twitter", "Follow us", None),
        ],
    },
];

/// Résultat de l'activation d'un item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingAction {
    /// Lien suivi : message à afficher à l'utilisateur
    Navigate(String),

    /// Interrupteur basculé, avec son nouvel état
    Toggled { id: &'static str, enabled: bool },
}

/// État des réglages pour la session
#[derive(Debug, Clone)]
pub struct Settings {
    toggles: HashMap<&'static str, bool>,
}

impl Settings {
    /// Valeurs par défaut : notifications activées, Face ID désactivé
    pub fn new() -> Self {
        let toggles = HashMap::from([("notifications", true), ("biometrics", false)]);
        Self { toggles }
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.toggles.get(id).copied().unwrap_or(false)
    }

    /// Bascule un interrupteur et retourne son nouvel état
    pub fn toggle(&mut self, id: &'static str) -> bool {
        let entry = self.toggles.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Nombre total d'items, toutes sections confondues
    pub fn item_count(&self) -> usize {
        SECTIONS.iter().map(|s| s.items.len()).sum()
    }

    /// Retourne l'item à la position `index` dans la liste aplatie
    pub fn item_at(&self, index: usize) -> Option<&'static SettingItem> {
        SECTIONS.iter().flat_map(|s| s.items.iter()).nth(index)
    }

    /// Active l'item sélectionné (suit le lien ou bascule l'interrupteur)
    pub fn activate(&mut self, index: usize) -> Option<SettingAction> {
        let item = self.item_at(index)?;

        let action = match item.kind {
            SettingKind::Link { .. } => SettingAction::Navigate(format!("Navigating to {}", item.label)),
            SettingKind::Toggle => SettingAction::Toggled {
                id: item.id,
                enabled: self.toggle(item.id),
            },
        };

        Some(action)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggles() {
        let settings = Settings::new();
        assert!(settings.is_enabled("notifications"));
        assert!(!settings.is_enabled("biometrics"));
        assert!(!settings.is_enabled("unknown"));
    }

    #[test]
    fn test_item_navigation() {
        let settings = Settings::new();
        assert_eq!(settings.item_count(), 8);
        assert_eq!(settings.item_at(0).map(|i| i.id), Some("currency"));
        assert_eq!(settings.item_at(3).map(|i| i.id), Some("biometrics"));
        assert_eq!(settings.item_at(7).map(|i| i.id), Some("twitter"));
        assert!(settings.item_at(8).is_none());
    }

    #[test]
    fn test_activate_link() {
        let mut settings = Settings::new();
        assert_eq!(
            settings.activate(1),
            Some(SettingAction::Navigate("Navigating to Language".to_string()))
        );
    }

    #[test]
    fn test_activate_toggle_flips_state() {
        let mut settings = Settings::new();
        assert_eq!(
            settings.activate(2),
            Some(SettingAction::Toggled {
                id: "notifications",
                enabled: false
            })
        );
        assert!(!settings.is_enabled("notifications"));

        settings.activate(3);
        assert!(settings.is_enabled("biometrics"));
    }
}
