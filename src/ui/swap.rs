// ============================================================================
// Swap - Simulateur d'échange SOL <-> USDC
// ============================================================================
// Carte "You pay", bouton d'inversion, carte "You receive", infos de taux
// et bouton de revue. Rien n'est envoyé sur le réseau.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::format::format_usd;
use crate::models::{SwapDirection, SwapToken};
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(64),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // You pay
            Constraint::Length(1), // Inversion
            Constraint::Length(5), // You receive
            Constraint::Length(4), // Taux et frais
            Constraint::Length(3), // Review Order
            Constraint::Min(0),
        ])
        .split(panel);

    render_pay_card(frame, app, chunks[0]);
    render_flip_hint(frame, chunks[1]);
    render_receive_card(frame, app, chunks[2]);
    render_info(frame, app, chunks[3]);
    render_review_button(frame, app, chunks[4]);
}

fn token_color(token: SwapToken) -> Color {
    match token {
        SwapToken::Sol => theme::SOL,
        SwapToken::Usdc => theme::USDC,
    }
}

fn token_badge(token: SwapToken) -> Span<'static> {
    Span::styled(
        format!(" ● {} ", token.symbol()),
        Style::default()
            .fg(token_color(token))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_pay_card(frame: &mut Frame, app: &App, area: Rect) {
    let swap = &app.swap;
    let direction = swap.direction();

    let mut header = vec![Span::styled("You pay", theme::muted())];
    if direction == SwapDirection::SolToUsdc {
        if let Some(max) = app.swap_max_balance() {
            header.push(Span::raw("   "));
            header.push(Span::styled(format!("Max {:.2}", max), theme::key_hint()));
            header.push(Span::styled(" [m]", theme::muted()));
        }
    }

    let amount = if swap.pay_amount().is_empty() {
        Span::styled("0", theme::muted())
    } else {
        Span::styled(
            swap.pay_amount().to_string(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )
    };

    let text = vec![
        Line::from(header),
        Line::from(vec![
            token_badge(direction.pay_token()),
            Span::raw("  "),
            amount,
            Span::styled("█", Style::default().fg(theme::PRIMARY).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(Span::styled(
            format!("≈ ${}", format_usd(swap.fiat_estimate())),
            theme::muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused());

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_flip_hint(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("⇅ ", theme::key_hint()),
        Span::styled("[f]", theme::key_hint()),
        Span::styled(" Flip", theme::muted()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_receive_card(frame: &mut Frame, app: &App, area: Rect) {
    let swap = &app.swap;
    let direction = swap.direction();

    let amount = if swap.is_loading_quote() {
        Span::styled("Fetching quote...", theme::muted())
    } else if swap.receive_amount().is_empty() {
        Span::styled("0", theme::muted())
    } else {
        Span::styled(
            swap.receive_amount().to_string(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )
    };

    let text = vec![
        Line::from(Span::styled("You receive", theme::muted())),
        Line::from(vec![token_badge(direction.receive_token()), Span::raw("  "), amount]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled(format!("{:<14}", "Rate"), theme::muted()),
            Span::styled(app.swap.rate_label(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Network Fee"), theme::muted()),
            Span::styled("Free", theme::trend(true)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_review_button(frame: &mut Frame, app: &App, area: Rect) {
    let ready = !app.swap.receive_amount().is_empty() && !app.swap.is_quote_pending();

    let style = if ready {
        Style::default()
            .fg(theme::TEXT)
            .bg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::muted()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if ready {
            theme::border_focused()
        } else {
            theme::border()
        });

    let button = Paragraph::new(Line::from(Span::styled("  Review Order  [Enter]  ", style)))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::app::{App, Screen};
    use crate::models::swap::{QUOTE_DEBOUNCE, QUOTE_LATENCY};
    use crate::models::{WalletAddress, DEMO_ADDRESS};
    use crate::ui::layout::render_to_string;

    fn swap_app() -> App {
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();
        let mut app = App::with_address(address, "Kalki");
        app.show(Screen::Swap);
        app
    }

    #[test]
    fn test_empty_form() {
        let screen = render_to_string(&swap_app(), 100, 34);
        assert!(screen.contains("You pay"));
        assert!(screen.contains("Max 125.45"));
        assert!(screen.contains("1 SOL ≈ 145.20 USDC"));
        assert!(screen.contains("Free"));
        assert!(screen.contains("Review Order"));
    }

    #[test]
    fn test_quote_lifecycle_is_rendered() {
        let mut app = swap_app();
        let start = Instant::now();
        app.swap.push_char('2', start);
        assert!(render_to_string(&app, 100, 34).contains("≈ $290.40"));

        app.tick(start + QUOTE_DEBOUNCE);
        assert!(render_to_string(&app, 100, 34).contains("Fetching quote..."));

        app.tick(start + QUOTE_DEBOUNCE + QUOTE_LATENCY);
        assert!(render_to_string(&app, 100, 34).contains("290.4"));
    }

    #[test]
    fn test_max_badge_hidden_when_paying_usdc() {
        let mut app = swap_app();
        app.swap.flip(Instant::now());
        let screen = render_to_string(&app, 100, 34);
        assert!(!screen.contains("Max 125.45"));
        assert!(screen.contains("USDC"));
    }
}
