// ============================================================================
// Home - Dashboard du portefeuille
// ============================================================================
// Salutation, valeur nette (solde × prix), actions rapides et actifs.
// ============================================================================

use chrono::Timelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, HOME_ACTIONS};
use crate::models::format::{format_price, group_thousands};
use crate::models::wallet::greeting_for_hour;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Salutation
            Constraint::Length(8), // Carte valeur nette
            Constraint::Length(3), // Actions rapides
            Constraint::Min(4),    // Actifs
        ])
        .split(area);

    render_greeting(frame, app, chunks[0]);
    render_net_worth(frame, app, chunks[1]);
    render_actions(frame, app, chunks[2]);
    render_assets(frame, app, chunks[3]);
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let hour = chrono::Local::now().hour();

    let text = vec![
        Line::from(Span::styled(greeting_for_hour(hour), theme::muted())),
        Line::from(Span::styled(app.display_name.clone(), theme::title())),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Left), area);
}

fn render_net_worth(frame: &mut Frame, app: &App, area: Rect) {
    let home = &app.home;

    let title = if home.refreshing {
        " Net Worth · refreshing... "
    } else {
        " Net Worth "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .title(Span::styled(title, theme::title()));

    let address = app
        .address
        .as_ref()
        .map(|a| a.short())
        .unwrap_or_else(|| "No Wallet".to_string());

    let mut text = vec![
        Line::from(Span::styled(format!("◎ {}", address), theme::muted())),
        Line::from(""),
    ];

    if home.loading {
        text.push(Line::from(Span::styled("Loading balance...", theme::muted())));
    } else {
        let (whole, decimals) = home.portfolio.net_worth_parts();
        text.push(Line::from(vec![
            Span::styled("$", theme::muted()),
            Span::styled(
                group_thousands(&whole),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(".{}", decimals), theme::muted()),
        ]));
    }

    let change_line = match home.portfolio.change_24h {
        Some(change) => {
            let arrow = if change >= 0.0 { "▲" } else { "▼" };
            Line::from(Span::styled(
                format!("{} {:+.2}% (24h)", arrow, change),
                theme::trend(change >= 0.0),
            ))
        }
        None => Line::from(""),
    };
    text.push(change_line);

    if let Some(error) = &home.error {
        text.push(Line::from(Span::styled(format!("⚠ {}", error), theme::trend(false))));
    } else if let Some(updated_at) = home.updated_at {
        text.push(Line::from(Span::styled(
            format!("Updated {}", updated_at.format("%H:%M:%S")),
            theme::muted(),
        )));
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (index, action) in HOME_ACTIONS.iter().enumerate() {
        let selected = index == app.home.selected_action;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if selected {
                theme::border_focused()
            } else {
                theme::border()
            });

        let style = if selected { theme::selected() } else { theme::text() };

        let button = Paragraph::new(Line::from(Span::styled(action.label(), style)))
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(button, chunks[index]);
    }
}

fn render_assets(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(" Your Assets ", theme::title()));

    let portfolio = &app.home.portfolio;

    let lines = if app.home.loading {
        vec![Line::from(Span::styled("Loading...", theme::muted()))]
    } else {
        vec![
            Line::from(vec![
                Span::styled("◎ ", Style::default().fg(theme::SOL)),
                Span::styled(format!("{:<12}", "Solana"), theme::title()),
                Span::styled(
                    format!("{:>16}", format!("{:.4} SOL", portfolio.balance_sol)),
                    theme::text(),
                ),
                Span::styled(
                    format!("{:>16}", format!("${}", format_price(portfolio.net_worth()))),
                    theme::text(),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("${}", format_price(portfolio.price_usd)),
                    theme::muted(),
                ),
            ]),
        ]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
