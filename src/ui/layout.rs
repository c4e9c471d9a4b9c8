// ============================================================================
// Layout - Squelette commun des écrans
// ============================================================================
// Chaque écran à onglets se compose de :
// - une barre d'onglets en haut (Home / Coins / Swap / Settings)
// - le contenu de l'écran
// - un footer : message, confirmation, ou raccourcis clavier
//
// CONCEPTS RATATUI :
// 1. Layout : découpage de l'espace en zones (Constraint)
// 2. Tabs : widget de barre d'onglets
// 3. Line et Span : texte multi-styles
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Screen, TABS};
use crate::ui::{home, market, onboarding, settings, swap, theme};

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Le compilateur garantit que chaque écran a son rendu
pub fn render(frame: &mut Frame, app: &App) {
    if app.current_screen == Screen::Onboarding {
        onboarding::render(frame, app, frame.size());
        return;
    }

    let chunks = create_layout(frame.size());

    render_tab_bar(frame, app, chunks[0]);

    match app.current_screen {
        Screen::Home => home::render(frame, app, chunks[1]),
        Screen::Market => market::render(frame, app, chunks[1]),
        Screen::Swap => swap::render(frame, app, chunks[1]),
        Screen::Settings => settings::render(frame, app, chunks[1]),
        Screen::Onboarding => {}
    }

    render_footer(frame, app, chunks[2]);
}

/// Crée le layout principal (onglets, contenu, footer)
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Onglets
            Constraint::Min(0),    // Contenu
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Centre une zone de largeur/hauteur fixes dans `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Dessine la barre d'onglets
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TABS
        .iter()
        .map(|screen| Line::from(format!(" {} ", screen.title())))
        .collect();

    let wallet = app
        .address
        .as_ref()
        .map(|a| format!(" {} ", a.short()))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(" NUCLEUS ", theme::key_hint()))
        .title(
            ratatui::widgets::block::Title::from(Span::styled(wallet, theme::muted()))
                .alignment(Alignment::Right),
        );

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.current_screen.tab_index().unwrap_or(0))
        .style(theme::muted())
        .highlight_style(
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", theme::border()));

    frame.render_widget(tabs, area);
}

/// Raccourcis affichés dans le footer selon l'écran
fn shortcuts_for(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut shortcuts = match app.current_screen {
        Screen::Home => vec![("[←→]", "Action"), ("[Enter]", "Open"), ("[r]", "Refresh"), ("[c]", "Address")],
        Screen::Market if app.market.searching => {
            vec![("[Enter]", "Done"), ("[Esc]", "Clear search")]
        }
        Screen::Market => vec![("[↑↓]", "Navigate"), ("[/]", "Search"), ("[r]", "Refresh")],
        Screen::Swap => vec![
            ("[0-9 .]", "Amount"),
            ("[f]", "Flip"),
            ("[m]", "Max"),
            ("[Enter]", "Review"),
        ],
        Screen::Settings => vec![
            ("[↑↓]", "Navigate"),
            ("[Enter]", "Select"),
            ("[x]", "Disconnect"),
        ],
        Screen::Onboarding => vec![],
    };

    if !app.is_searching() {
        shortcuts.push(("[Tab]", "Tabs"));
        shortcuts.push(("[q]", "Quit"));
    }

    shortcuts
}

/// Dessine le footer
///
/// Priorité : confirmation de quit > confirmation de déconnexion >
/// message ponctuel > raccourcis
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    let warning = Style::default()
        .fg(theme::WARNING)
        .add_modifier(Modifier::BOLD);
    let blinking_key = Style::default()
        .fg(theme::ERROR)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);

    let line = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Press ", warning),
            Span::styled("[q]", blinking_key),
            Span::styled(" again to quit, any other key to cancel ⚠", warning),
        ])
    } else if app.is_awaiting_disconnect_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Disconnect wallet? Press ", warning),
            Span::styled("[x]", blinking_key),
            Span::styled(" again to confirm, any other key to cancel ⚠", warning),
        ])
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(message.clone(), theme::text()))
    } else {
        let mut spans = Vec::new();
        for (key, label) in shortcuts_for(app) {
            spans.push(Span::styled(key, theme::key_hint()));
            spans.push(Span::styled(format!(" {}  ", label), theme::muted()));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine l'app dans un terminal virtuel et retourne son contenu texte
#[cfg(test)]
pub(crate) fn render_to_string(app: &App, width: u16, height: u16) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WalletAddress, DEMO_ADDRESS};

    fn app_on(screen: Screen) -> App {
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();
        let mut app = App::with_address(address, "Kalki");
        app.current_screen = screen;
        app
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 60, 10), Rect::new(20, 15, 60, 10));
        assert_eq!(centered(area, 200, 80), area);
    }

    #[test]
    fn test_tab_bar_and_shortcuts() {
        let screen = render_to_string(&app_on(Screen::Market), 110, 30);
        assert!(screen.contains("NUCLEUS"));
        assert!(screen.contains("Coins"));
        assert!(screen.contains("9B5X...Ns6g"));
        assert!(screen.contains("Search"));
    }

    #[test]
    fn test_footer_quit_confirmation() {
        let mut app = app_on(Screen::Home);
        app.request_quit();
        let screen = render_to_string(&app, 110, 30);
        assert!(screen.contains("again to quit"));
    }

    #[test]
    fn test_footer_status_message() {
        let mut app = app_on(Screen::Settings);
        app.set_status("Navigating to Help Center");
        let screen = render_to_string(&app, 110, 30);
        assert!(screen.contains("Navigating to Help Center"));
    }
}
