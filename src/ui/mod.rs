// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;     // Gestion des événements clavier et du collage
pub mod layout;     // Squelette commun : onglets, contenu, footer
pub mod theme;      // Couleurs et styles

pub mod home;       // Dashboard du portefeuille
pub mod market;     // Classement des cryptomonnaies
pub mod onboarding; // Saisie de l'adresse
pub mod settings;   // Profil et réglages
pub mod swap;       // Simulateur de swap

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use layout::render;
