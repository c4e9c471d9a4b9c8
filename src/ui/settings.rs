// ============================================================================
// Settings - Profil et réglages
// ============================================================================
// Carte profil, sections de réglages (liens et interrupteurs),
// déconnexion et version de l'application.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::settings::{SettingItem, SettingKind, APP_VERSION_LABEL, SECTIONS};
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Profil
            Constraint::Min(0),    // Sections
            Constraint::Length(2), // Déconnexion + version
        ])
        .split(area);

    render_profile(frame, app, chunks[0]);
    render_sections(frame, app, chunks[1]);
    render_bottom(frame, chunks[2]);
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let address = app
        .address
        .as_ref()
        .map(|a| a.short())
        .unwrap_or_else(|| "No Wallet".to_string());

    let text = vec![
        Line::from(Span::styled(app.display_name.clone(), theme::title())),
        Line::from(vec![
            Span::styled(address, theme::muted()),
            Span::styled("  [c]", theme::key_hint()),
            Span::styled(" Show address", theme::muted()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .title(Span::styled(" Profile ", theme::title()));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Partie droite d'une ligne : valeur du lien ou état de l'interrupteur
fn item_value(app: &App, item: &SettingItem) -> Span<'static> {
    match item.kind {
        SettingKind::Link { value } => {
            Span::styled(format!("{} ›", value.unwrap_or("")), theme::muted())
        }
        SettingKind::Toggle => {
            if app.settings.is_enabled(item.id) {
                Span::styled("[ ON]", theme::trend(true))
            } else {
                Span::styled("[OFF]", theme::muted())
            }
        }
    }
}

/// Lignes de la liste : titres de section, items, séparateurs
///
/// Retourne aussi la ligne de l'item sélectionné, pour que ListState
/// fasse défiler la liste jusqu'à lui sur les petits terminaux.
fn section_rows(app: &App, width: usize) -> (Vec<ListItem<'static>>, usize) {
    let mut rows = Vec::new();
    let mut selected_row = 0;
    // Index dans la liste aplatie de tous les items
    let mut index = 0;

    for section in SECTIONS {
        rows.push(ListItem::new(Line::from(Span::styled(
            section.title.to_uppercase(),
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        ))));

        for item in section.items {
            let selected = index == app.settings_selected;
            if selected {
                selected_row = rows.len();
            }

            let value = item_value(app, item);
            let padding = width.saturating_sub(item.label.chars().count() + value.content.chars().count());

            let label_style = if selected { theme::selected() } else { theme::text() };
            let marker = if selected { "▶ " } else { "  " };

            rows.push(ListItem::new(Line::from(vec![
                Span::styled(marker, theme::key_hint()),
                Span::styled(item.label, label_style),
                Span::raw(" ".repeat(padding)),
                value,
            ])));

            index += 1;
        }

        rows.push(ListItem::new(Line::from("")));
    }

    (rows, selected_row)
}

fn render_sections(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(6) as usize;
    let (rows, selected_row) = section_rows(app, width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    // Le marqueur ▶ tient lieu de surbrillance
    let list = List::new(rows).block(block);
    let mut state = ListState::default().with_selected(Some(selected_row));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_bottom(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled("[x]", theme::key_hint()),
            Span::styled(
                " Disconnect Wallet",
                Style::default().fg(theme::ERROR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(APP_VERSION_LABEL, theme::muted())),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
