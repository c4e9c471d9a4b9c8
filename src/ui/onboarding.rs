// ============================================================================
// Onboarding - Saisie de l'adresse du portefeuille
// ============================================================================
// Premier écran : marque, accroche, champ d'adresse et bouton de lancement.
// Le bouton n'est actif qu'à partir de 32 caractères.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::wallet::MIN_ADDRESS_LEN;
use crate::ui::{layout, theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = layout::centered(area, 72, 22);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Marque + accroche
            Constraint::Length(3), // Champ d'adresse
            Constraint::Length(3), // Démo / compteur
            Constraint::Length(3), // Bouton
            Constraint::Min(0),    // Raccourcis
        ])
        .split(panel);

    render_branding(frame, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_helper(frame, app, chunks[2]);
    render_launch_button(frame, app, chunks[3]);
    render_shortcuts(frame, chunks[4]);
}

fn render_branding(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "N U C L E U S",
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("The future of", theme::title())),
        Line::from(Span::styled("Solana tracking.", theme::title())),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = !app.address_input.is_empty();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::border_focused()
        } else {
            theme::border()
        });

    let line = if app.address_input.is_empty() {
        Line::from(vec![
            Span::styled("Paste Solana address...", theme::muted()),
            Span::styled("█", Style::default().fg(theme::PRIMARY).add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        // Affiche la fin de la saisie si elle dépasse la largeur du champ
        let visible_width = area.width.saturating_sub(4) as usize;
        let chars: Vec<char> = app.address_input.chars().collect();
        let start = chars.len().saturating_sub(visible_width);
        let visible: String = chars[start..].iter().collect();

        Line::from(vec![
            Span::styled(visible, theme::text()),
            Span::styled("█", Style::default().fg(theme::PRIMARY).add_modifier(Modifier::SLOW_BLINK)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_helper(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.address_input.trim().chars().count();

    let line = if count == 0 {
        Line::from(vec![
            Span::styled("First time? ", theme::muted()),
            Span::styled("[Ctrl+D]", theme::key_hint()),
            Span::styled(" Try a demo wallet", theme::text()),
        ])
    } else if count < MIN_ADDRESS_LEN {
        Line::from(Span::styled(
            format!("{}/{} characters", count, MIN_ADDRESS_LEN),
            theme::muted(),
        ))
    } else {
        Line::from(Span::styled("✓ Address looks good", theme::trend(true)))
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_launch_button(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = app.can_launch();

    let style = if enabled {
        Style::default()
            .fg(theme::TEXT)
            .bg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::muted()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if enabled {
            theme::border_focused()
        } else {
            theme::border()
        });

    let button = Paragraph::new(Line::from(Span::styled("  Launch Dashboard  [Enter]  ", style)))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(button, area);
}

fn render_shortcuts(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled("Read-only • Secure • Non-custodial", theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Ctrl+U]", theme::key_hint()),
            Span::styled(" Clear  ", theme::muted()),
            Span::styled("[Esc]", theme::key_hint()),
            Span::styled(" Quit", theme::muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::ui::layout::render_to_string;

    #[test]
    fn test_empty_onboarding() {
        let app = App::new("Kalki");
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Paste Solana address..."));
        assert!(screen.contains("Try a demo wallet"));
        assert!(screen.contains("Launch Dashboard"));
    }

    #[test]
    fn test_character_counter_and_valid_state() {
        let mut app = App::new("Kalki");
        for c in "9B5Xsz".chars() {
            app.append_address_char(c);
        }
        assert!(render_to_string(&app, 100, 30).contains("6/32 characters"));

        app.use_demo_address();
        assert!(render_to_string(&app, 100, 30).contains("Address looks good"));
    }
}
