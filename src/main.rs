// ============================================================================
// Nucleus - Suivi de portefeuille Solana
// ============================================================================
// Programme TUI : onboarding, dashboard (solde × prix), marché, simulateur
// de swap et réglages.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements, état et rendering
// 3. Worker thread avec son propre runtime tokio pour les appels réseau
// 4. Channels mpsc : App reste possédée par l'event loop, sans Mutex
// ============================================================================

use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use nucleus::api::{CoinGecko, SolanaRpc};
use nucleus::app::{App, AppCommand, AppResult, Screen};
use nucleus::config::Config;
use nucleus::models::wallet::lamports_to_sol;
use nucleus::models::{Portfolio, WalletAddress};
use nucleus::ui::{render, Event, EventHandler};

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans `<log_dir>/nucleus.log.<date>`.
///
/// # Utilisation
/// ```bash
/// tail -f ~/.local/share/nucleus/logs/nucleus.log.*
/// RUST_LOG=nucleus=trace nucleus
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "nucleus.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // Distingue l'UI du worker
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour nucleus, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nucleus=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // La configuration d'abord : elle donne le répertoire de logs
    let config = Config::load()?;

    init_logging(&config.log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        rpc_url = %config.rpc_url,
        price_api_url = %config.price_api_url,
        "Nucleus starting up"
    );

    // Les clients HTTP sont construits avant de passer en mode TUI :
    // une erreur ici s'affiche normalement dans le terminal
    let rpc = SolanaRpc::new(config.rpc_url.clone())?;
    let gecko = CoinGecko::new(config.price_api_url.clone())?;

    let mut app = match config.address.clone() {
        Some(address) => {
            info!(address = %address.short(), "Wallet provided, skipping onboarding");
            App::with_address(address, config.display_name.clone())
        }
        None => App::new(config.display_name.clone()),
    };

    // command : event loop -> worker, result : worker -> event loop
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    info!("Spawning background worker thread");
    spawn_background_worker(command_rx, result_tx, rpc, gecko, config.market_size);

    // Dashboard monté directement : premier chargement du portefeuille
    if app.current_screen == Screen::Home {
        let command = app.show(Screen::Home);
        dispatch(&command_tx, command);
    }

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let events = EventHandler::new(config.tick_rate);

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, &command_tx, &result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Background async worker avec channels
// - Thread séparé qui possède son runtime tokio
// - Reçoit des AppCommand, renvoie des AppResult
// - Les appels réseau ne bloquent jamais l'UI
// ============================================================================

/// Solde puis prix du SOL pour une adresse
async fn load_portfolio(
    rpc: &SolanaRpc,
    gecko: &CoinGecko,
    address: &WalletAddress,
) -> Result<Portfolio> {
    let lamports = rpc
        .get_balance(address)
        .await
        .context("Impossible de récupérer le solde")?;

    let price = gecko
        .sol_price()
        .await
        .context("Impossible de récupérer le prix du SOL")?;

    Ok(Portfolio::new(lamports_to_sol(lamports), price.usd, price.change_24h))
}

/// Worker thread qui exécute les appels réseau en arrière-plan
///
/// Le thread s'arrête quand l'event loop ferme le channel de commandes.
fn spawn_background_worker(
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
    rpc: SolanaRpc,
    gecko: CoinGecko,
    market_size: u32,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = ?e, "Failed to create tokio runtime, worker disabled");
                return;
            }
        };

        info!(rpc_url = %rpc.url(), price_api_url = %gecko.base_url(), "Worker ready");

        while let Ok(command) = command_rx.recv() {
            info!(?command, "Worker received command");

            let result = match command {
                AppCommand::RefreshPortfolio { address } => {
                    match runtime.block_on(load_portfolio(&rpc, &gecko, &address)) {
                        Ok(portfolio) => {
                            info!(
                                address = %address.short(),
                                balance_sol = portfolio.balance_sol,
                                price_usd = portfolio.price_usd,
                                "Portfolio loaded"
                            );
                            AppResult::PortfolioLoaded { address, portfolio }
                        }
                        Err(e) => {
                            error!(address = %address.short(), error = ?e, "Failed to load portfolio");
                            AppResult::PortfolioFailed {
                                address,
                                error: format!("{:#}", e),
                            }
                        }
                    }
                }

                AppCommand::RefreshMarket => match runtime.block_on(gecko.markets(market_size)) {
                    Ok(tokens) => {
                        info!(count = tokens.len(), "Market loaded");
                        AppResult::MarketLoaded { tokens }
                    }
                    Err(e) => {
                        error!(error = ?e, "Failed to load market");
                        AppResult::MarketFailed {
                            error: format!("{:#}", e),
                        }
                    }
                },
            };

            if result_tx.send(result).is_err() {
                break;
            }
        }

        info!("Worker thread exiting (channel closed)");
    });
}

/// Envoie une commande au worker s'il y en a une
fn dispatch(command_tx: &mpsc::Sender<AppCommand>, command: Option<AppCommand>) {
    if let Some(command) = command {
        debug!(?command, "Dispatching command to worker");
        if command_tx.send(command).is_err() {
            error!("Worker thread disconnected, command dropped");
        }
    }
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. Appliquer les résultats du worker
//   1. Dessiner l'interface
//   2. Traiter un événement (ou un Tick après tick_rate)
//   3. Faire avancer les timers (cotation du swap)
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    command_tx: &mpsc::Sender<AppCommand>,
    result_rx: &mpsc::Receiver<AppResult>,
) -> Result<()> {
    let mut worker_alive = true;

    while app.is_running() {
        // 0. RÉSULTATS : non bloquant, on vide tout ce qui est arrivé
        while worker_alive {
            match result_rx.try_recv() {
                Ok(result) => app.apply_result(result),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    error!("Worker thread disconnected!");
                    worker_alive = false;
                }
            }
        }

        // 1. RENDER
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT
        match events.next() {
            Ok(event) => handle_event(app, event, command_tx),
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }

        // 3. UPDATE
        app.tick(Instant::now());
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// CONCEPT RUST : Pattern matching avec guards
// - Les modes de saisie (onboarding, recherche) capturent les caractères
// - Puis les touches globales (quit, onglets)
// - Puis les touches propres à chaque écran
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: Event, command_tx: &mpsc::Sender<AppCommand>) {
    use nucleus::ui::events::{is_escape_event, is_force_quit_event};

    if let Event::Paste(text) = &event {
        handle_paste(app, text);
        return;
    }

    if matches!(event, Event::Tick) {
        return;
    }

    // Ctrl+C : sortie immédiate, quel que soit l'écran
    if is_force_quit_event(&event) {
        info!("User force quit");
        app.quit();
        return;
    }

    if app.current_screen == Screen::Onboarding {
        // Esc quitte directement : 'q' est un caractère d'adresse valide
        if is_escape_event(&event) {
            info!("User quit from onboarding");
            app.quit();
            return;
        }
        handle_onboarding_event(app, &event, command_tx);
        return;
    }

    if app.is_searching() {
        handle_search_event(app, &event);
        return;
    }

    handle_tab_event(app, &event, command_tx);
}

/// Texte collé : adresse sur l'onboarding, requête pendant une recherche
fn handle_paste(app: &mut App, text: &str) {
    if app.current_screen == Screen::Onboarding {
        debug!(len = text.len(), "Address pasted");
        app.paste_address(text);
    } else if app.is_searching() {
        for c in text.chars().filter(|c| !c.is_control()) {
            app.append_search_char(c);
        }
    }
}

fn handle_onboarding_event(app: &mut App, event: &Event, command_tx: &mpsc::Sender<AppCommand>) {
    use nucleus::ui::events::{
        get_char_from_event, is_backspace_event, is_clear_event, is_demo_event, is_enter_event,
    };

    app.status_message = None;

    if is_enter_event(event) {
        if !app.can_launch() {
            return;
        }
        match app.launch() {
            Ok(command) => {
                info!("Wallet connected, opening dashboard");
                dispatch(command_tx, command);
            }
            Err(e) => {
                warn!(error = ?e, "Launch refused");
                app.set_status(format!("{:#}", e));
            }
        }
    } else if is_demo_event(event) {
        debug!("Demo wallet selected");
        app.use_demo_address();
    } else if is_clear_event(event) {
        app.clear_address();
    } else if is_backspace_event(event) {
        app.backspace_address();
    } else if let Some(c) = get_char_from_event(event) {
        app.append_address_char(c);
    }
}

fn handle_search_event(app: &mut App, event: &Event) {
    use nucleus::ui::events::{
        get_char_from_event, is_backspace_event, is_enter_event, is_escape_event,
    };

    if is_enter_event(event) {
        app.stop_search();
    } else if is_escape_event(event) {
        app.clear_search();
    } else if is_backspace_event(event) {
        app.backspace_search();
    } else if let Some(c) = get_char_from_event(event) {
        app.append_search_char(c);
    }
}

/// Touches des écrans à onglets
fn handle_tab_event(app: &mut App, event: &Event, command_tx: &mpsc::Sender<AppCommand>) {
    use nucleus::ui::events::{
        get_char_from_event, is_backspace_event, is_clear_event, is_copy_event,
        is_disconnect_event, is_down_event, is_enter_event, is_escape_event, is_flip_event,
        is_left_event, is_max_event, is_next_tab_event, is_previous_tab_event, is_quit_event,
        is_refresh_event, is_right_event, is_search_event, is_up_event,
    };

    // 'q' : quit confirmation two-step
    if is_quit_event(event) {
        if app.is_awaiting_quit_confirmation() {
            info!("User confirmed quit");
            app.quit();
        } else {
            info!("User requested quit (awaiting confirmation)");
            app.confirm_disconnect = false;
            app.status_message = None;
            app.request_quit();
        }
        return;
    }

    // 'x' sur Settings : déconnexion two-step
    if app.current_screen == Screen::Settings && is_disconnect_event(event) {
        app.confirm_quit = false;
        app.status_message = None;
        if app.request_disconnect() {
            info!("User disconnected wallet");
        } else {
            info!("User requested disconnect (awaiting confirmation)");
        }
        return;
    }

    // Toute autre touche annule les confirmations en cours
    app.cancel_confirmations();

    if is_next_tab_event(event) {
        let command = app.next_tab();
        dispatch(command_tx, command);
        return;
    }
    if is_previous_tab_event(event) {
        let command = app.previous_tab();
        dispatch(command_tx, command);
        return;
    }

    let now = Instant::now();

    match app.current_screen {
        Screen::Home => {
            if is_left_event(event) {
                app.select_previous_action();
            } else if is_right_event(event) {
                app.select_next_action();
            } else if is_enter_event(event) {
                let command = app.activate_home_action();
                dispatch(command_tx, command);
            } else if is_refresh_event(event) {
                debug!("User refreshed portfolio");
                let command = app.start_portfolio_load(true);
                dispatch(command_tx, command);
            } else if is_copy_event(event) {
                app.reveal_address();
            }
        }

        Screen::Market => {
            if is_search_event(event) {
                app.start_search();
            } else if is_escape_event(event) {
                app.clear_search();
            } else if is_up_event(event) {
                app.navigate_up();
            } else if is_down_event(event) {
                app.navigate_down();
            } else if is_refresh_event(event) {
                debug!("User refreshed market");
                let command = app.start_market_load(true);
                dispatch(command_tx, command);
            }
        }

        Screen::Swap => {
            if is_flip_event(event) {
                app.swap.flip(now);
            } else if is_max_event(event) {
                let max = app.swap_max_balance();
                app.swap.fill_max(max, now);
            } else if is_enter_event(event) {
                app.review_swap_order();
            } else if is_backspace_event(event) {
                app.swap.backspace(now);
            } else if is_clear_event(event) {
                app.swap.clear(now);
            } else if let Some(c) = get_char_from_event(event) {
                app.swap.push_char(c, now);
            }
        }

        Screen::Settings => {
            if is_up_event(event) {
                app.navigate_up();
            } else if is_down_event(event) {
                app.navigate_down();
            } else if is_enter_event(event) {
                app.activate_setting();
            } else if is_copy_event(event) {
                app.reveal_address();
            }
        }

        Screen::Onboarding => {}
    }
}

// ============================================================================
// Gestion du terminal
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    // Alternate screen : l'écran précédent est restauré à la sortie
    // Bracketed paste : un collage arrive en un seul Event::Paste
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use nucleus::models::DEMO_ADDRESS;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn demo_app() -> App {
        App::with_address(WalletAddress::parse(DEMO_ADDRESS).unwrap(), "Kalki")
    }

    #[test]
    fn test_onboarding_demo_then_launch() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new("Kalki");

        // 'q' est saisi dans l'adresse, pas interprété comme quit
        handle_event(&mut app, key(KeyCode::Char('q')), &tx);
        assert_eq!(app.address_input, "q");
        assert!(app.is_running());

        handle_event(&mut app, ctrl('d'), &tx);
        handle_event(&mut app, key(KeyCode::Enter), &tx);

        assert_eq!(app.current_screen, Screen::Home);
        assert!(matches!(rx.try_recv(), Ok(AppCommand::RefreshPortfolio { .. })));
    }

    #[test]
    fn test_paste_on_onboarding() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new("Kalki");
        handle_event(&mut app, Event::Paste(format!("{}\n", DEMO_ADDRESS)), &tx);
        assert!(app.can_launch());
    }

    #[test]
    fn test_escape_quits_onboarding() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new("Kalki");
        handle_event(&mut app, key(KeyCode::Esc), &tx);
        assert!(!app.is_running());
    }

    #[test]
    fn test_two_step_quit() {
        let (tx, _rx) = mpsc::channel();
        let mut app = demo_app();

        handle_event(&mut app, key(KeyCode::Char('q')), &tx);
        assert!(app.is_running());
        handle_event(&mut app, key(KeyCode::Char('j')), &tx);
        assert!(!app.is_awaiting_quit_confirmation());

        handle_event(&mut app, key(KeyCode::Char('q')), &tx);
        handle_event(&mut app, key(KeyCode::Char('q')), &tx);
        assert!(!app.is_running());
    }

    #[test]
    fn test_tab_mounts_market() {
        let (tx, rx) = mpsc::channel();
        let mut app = demo_app();
        handle_event(&mut app, key(KeyCode::Tab), &tx);
        assert_eq!(app.current_screen, Screen::Market);
        assert_eq!(rx.try_recv().ok(), Some(AppCommand::RefreshMarket));
    }

    #[test]
    fn test_search_captures_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut app = demo_app();
        app.show(Screen::Market);

        handle_event(&mut app, key(KeyCode::Char('/')), &tx);
        for c in "qj".chars() {
            handle_event(&mut app, key(KeyCode::Char(c)), &tx);
        }
        assert_eq!(app.market.query, "qj");
        assert!(app.is_running());
        assert!(!app.is_awaiting_quit_confirmation());

        handle_event(&mut app, key(KeyCode::Esc), &tx);
        assert!(!app.is_searching());
        assert!(app.market.query.is_empty());
    }

    #[test]
    fn test_swap_typing() {
        let (tx, _rx) = mpsc::channel();
        let mut app = demo_app();
        app.show(Screen::Swap);

        for c in "1.5".chars() {
            handle_event(&mut app, key(KeyCode::Char(c)), &tx);
        }
        assert_eq!(app.swap.pay_amount(), "1.5");

        handle_event(&mut app, key(KeyCode::Char('m')), &tx);
        assert_eq!(app.swap.pay_amount(), "125.45");
    }

    // ========================================
    // Worker : solde puis prix
    // ========================================

    async fn rpc_mock(server: &mut mockito::Server, status: usize, body: &str) -> mockito::Mock {
        server
            .mock("POST", "/")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    async fn price_mock(server: &mut mockito::Server, status: usize, hits: usize) -> mockito::Mock {
        server
            .mock("GET", "/simple/price")
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_body(r#"{"solana":{"usd":146.0,"usd_24h_change":-1.5}}"#)
            .expect(hits)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_load_portfolio_values_balance_at_spot_price() {
        let mut rpc_server = mockito::Server::new_async().await;
        let mut price_server = mockito::Server::new_async().await;
        let balance = rpc_mock(
            &mut rpc_server,
            200,
            r#"{"jsonrpc":"2.0","result":{"context":{"slot":1},"value":2500000000},"id":1}"#,
        )
        .await;
        let price = price_mock(&mut price_server, 200, 1).await;

        let rpc = SolanaRpc::new(rpc_server.url()).unwrap();
        let gecko = CoinGecko::new(price_server.url()).unwrap();
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();

        let portfolio = load_portfolio(&rpc, &gecko, &address).await.unwrap();

        assert_eq!(portfolio.balance_sol, 2.5);
        assert_eq!(portfolio.price_usd, 146.0);
        assert_eq!(portfolio.change_24h, Some(-1.5));
        assert_eq!(portfolio.net_worth(), 2.5 * 146.0);
        balance.assert_async().await;
        price.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_portfolio_stops_when_balance_fails() {
        let mut rpc_server = mockito::Server::new_async().await;
        let mut price_server = mockito::Server::new_async().await;
        let _balance = rpc_mock(&mut rpc_server, 503, "").await;
        // Le prix n'est jamais demandé si le solde échoue
        let price = price_mock(&mut price_server, 200, 0).await;

        let rpc = SolanaRpc::new(rpc_server.url()).unwrap();
        let gecko = CoinGecko::new(price_server.url()).unwrap();
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();

        let err = load_portfolio(&rpc, &gecko, &address).await.unwrap_err();
        assert!(format!("{:#}", err).contains("solde"));
        price.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_portfolio_fails_when_price_fails() {
        let mut rpc_server = mockito::Server::new_async().await;
        let mut price_server = mockito::Server::new_async().await;
        let balance = rpc_mock(
            &mut rpc_server,
            200,
            r#"{"jsonrpc":"2.0","result":{"context":{"slot":1},"value":1000000000},"id":1}"#,
        )
        .await;
        let _price = price_mock(&mut price_server, 500, 1).await;

        let rpc = SolanaRpc::new(rpc_server.url()).unwrap();
        let gecko = CoinGecko::new(price_server.url()).unwrap();
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();

        let err = load_portfolio(&rpc, &gecko, &address).await.unwrap_err();
        assert!(format!("{:#}", err).contains("prix du SOL"));
        balance.assert_async().await;
    }

    #[test]
    fn test_failed_refresh_keeps_previous_values() {
        let mut app = demo_app();
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();
        app.apply_result(AppResult::PortfolioLoaded {
            address: address.clone(),
            portfolio: Portfolio::new(1.0, 100.0, None),
        });

        app.start_portfolio_load(true);
        app.apply_result(AppResult::PortfolioFailed {
            address,
            error: "Impossible de récupérer le prix du SOL".to_string(),
        });

        assert_eq!(app.home.portfolio.net_worth(), 100.0);
        assert!(app.home.error.is_some());
    }

    #[test]
    fn test_settings_disconnect() {
        let (tx, _rx) = mpsc::channel();
        let mut app = demo_app();
        app.show(Screen::Settings);

        handle_event(&mut app, key(KeyCode::Char('x')), &tx);
        assert!(app.is_awaiting_disconnect_confirmation());
        handle_event(&mut app, key(KeyCode::Char('x')), &tx);

        assert_eq!(app.current_screen, Screen::Onboarding);
        assert!(app.address.is_none());
    }
}
