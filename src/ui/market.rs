// ============================================================================
// Market - Classement des cryptomonnaies
// ============================================================================
// Barre de recherche, en-têtes de colonnes, liste classée par capitalisation.
//
// CONCEPT RATATUI : List + ListState
// - ListState mémorise la sélection et le défilement
// - render_stateful_widget() fait défiler la liste jusqu'à la sélection
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::MarketToken;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Recherche
            Constraint::Length(1), // En-têtes
            Constraint::Min(0),    // Liste
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);
    render_column_header(frame, chunks[1]);
    render_list(frame, app, chunks[2]);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let market = &app.market;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if market.searching {
            theme::border_focused()
        } else {
            theme::border()
        })
        .title(Span::styled(" Market ", theme::title()));

    let mut spans = vec![Span::styled("🔍 ", theme::muted())];
    if market.query.is_empty() && !market.searching {
        spans.push(Span::styled("Search coins... [/]", theme::muted()));
    } else {
        spans.push(Span::styled(market.query.clone(), theme::text()));
    }
    if market.searching {
        spans.push(Span::styled(
            "█",
            Style::default().fg(theme::PRIMARY).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_column_header(frame: &mut Frame, area: Rect) {
    let header = format!(
        "  {:>3}  {:<8} {:<22} {:>16} {:>10} {:>12}",
        "#", "Asset", "", "Price", "24h", "Mkt Cap"
    );
    frame.render_widget(Paragraph::new(Span::styled(header, theme::muted())), area);
}

/// Formate une ligne : rang, symbole, nom, prix, variation, capitalisation
fn format_row(rank: usize, token: &MarketToken) -> Line<'static> {
    let name: String = if token.name.chars().count() > 22 {
        let truncated: String = token.name.chars().take(21).collect();
        format!("{}…", truncated)
    } else {
        token.name.clone()
    };

    Line::from(vec![
        Span::styled(format!("{:>3}  ", rank), theme::muted()),
        Span::styled(
            format!("{:<8} ", token.symbol.to_uppercase()),
            theme::title(),
        ),
        Span::styled(format!("{:<22} ", name), theme::muted()),
        Span::styled(format!("{:>16} ", token.price_label()), theme::text()),
        Span::styled(format!("{:>10} ", token.change_label()), theme::trend(token.is_up())),
        Span::styled(format!("{:>12}", token.market_cap_label()), theme::muted()),
    ])
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let market = &app.market;

    let title = if market.refreshing {
        " refreshing... ".to_string()
    } else {
        market
            .updated_at
            .map(|t| format!(" Updated {} ", t.format("%H:%M:%S")))
            .unwrap_or_default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(title, theme::muted()));

    if market.loading {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Loading market data...", theme::muted())),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let filtered = market.filtered();

    if filtered.is_empty() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("No coins found.", theme::muted())),
        ];
        if let Some(error) = &market.error {
            lines.push(Line::from(Span::styled(format!("⚠ {}", error), theme::trend(false))));
        }
        let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    // Le rang est la position dans la liste filtrée
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(index, token)| ListItem::new(format_row(index + 1, token)))
        .collect();

    let block = match &market.error {
        Some(error) => block.title_bottom(Line::from(Span::styled(
            format!(" ⚠ {} ", error),
            theme::trend(false),
        ))),
        None => block,
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(market.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
