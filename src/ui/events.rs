// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier, le collage (bracketed paste) et les ticks
// de l'application.
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Texte collé depuis le terminal (bracketed paste)
    Paste(String),

    /// Tick régulier (timers, rafraîchissement de l'affichage)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    /// Délai maximum d'attente d'un événement avant de produire un Tick
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// - poll(tick_rate) : si rien n'arrive, retourne Ok(Event::Tick)
    /// - Seuls les appuis (Press) sont transmis, pas les relâchements
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        let event = match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Paste(text) => Event::Paste(text),
            // Relâchements, resize, souris : simple Tick (l'écran est redessiné)
            _ => Event::Tick,
        };

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

// ============================================================================
// Helpers : identifier les touches
// ============================================================================

fn key_of(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) => Some(key),
        _ => None,
    }
}

fn has_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+C : sortie immédiate, quel que soit l'écran
pub fn is_force_quit_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| has_ctrl(k) && matches!(k.code, KeyCode::Char('c')))
}

/// 'q' : quitter (avec confirmation)
pub fn is_quit_event(event: &Event) -> bool {
    key_of(event)
        .is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q')))
}

pub fn is_escape_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::Esc)
}

pub fn is_enter_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::Enter)
}

pub fn is_backspace_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::Backspace)
}

/// Tab : onglet suivant
pub fn is_next_tab_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::Tab)
}

/// Shift+Tab : onglet précédent
pub fn is_previous_tab_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::BackTab)
}

/// Flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| matches!(k.code, KeyCode::Up | KeyCode::Char('k')))
}

/// Flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| matches!(k.code, KeyCode::Down | KeyCode::Char('j')))
}

/// Flèche gauche ou 'h' (vim)
pub fn is_left_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| matches!(k.code, KeyCode::Left | KeyCode::Char('h')))
}

/// Flèche droite ou 'l' (vim)
pub fn is_right_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| matches!(k.code, KeyCode::Right | KeyCode::Char('l')))
}

/// 'r' : rafraîchir (équivalent du pull-to-refresh)
pub fn is_refresh_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('r')))
}

/// '/' : ouvrir la recherche
pub fn is_search_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| k.code == KeyCode::Char('/'))
}

/// 'f' : inverser le sens du swap
pub fn is_flip_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('f')))
}

/// 'm' : montant maximum
pub fn is_max_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('m')))
}

/// 'c' : afficher l'adresse complète
pub fn is_copy_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('c')))
}

/// 'x' : déconnecter le portefeuille (avec confirmation)
pub fn is_disconnect_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| !has_ctrl(k) && matches!(k.code, KeyCode::Char('x')))
}

/// Ctrl+D : remplir avec le portefeuille de démonstration
pub fn is_demo_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| has_ctrl(k) && matches!(k.code, KeyCode::Char('d')))
}

/// Ctrl+U : effacer la saisie (comme dans un shell)
pub fn is_clear_event(event: &Event) -> bool {
    key_of(event).is_some_and(|k| has_ctrl(k) && matches!(k.code, KeyCode::Char('u')))
}

/// Extrait le caractère d'un événement clavier (sans Ctrl)
pub fn get_char_from_event(event: &Event) -> Option<char> {
    match key_of(event) {
        Some(key) if !has_ctrl(key) => match key.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        },
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_ctrl_shortcuts_are_not_plain_chars() {
        assert!(is_force_quit_event(&ctrl('c')));
        assert!(!is_copy_event(&ctrl('c')));
        assert!(is_copy_event(&key(KeyCode::Char('c'))));

        assert!(is_demo_event(&ctrl('d')));
        assert!(is_clear_event(&ctrl('u')));
        assert_eq!(get_char_from_event(&ctrl('d')), None);
        assert_eq!(get_char_from_event(&key(KeyCode::Char('7'))), Some('7'));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(is_up_event(&key(KeyCode::Up)));
        assert!(is_up_event(&key(KeyCode::Char('k'))));
        assert!(is_down_event(&key(KeyCode::Char('j'))));
        assert!(is_next_tab_event(&key(KeyCode::Tab)));
        assert!(is_previous_tab_event(&key(KeyCode::BackTab)));
        assert!(!is_next_tab_event(&Event::Paste("x".to_string())));
    }
}
