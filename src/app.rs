// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// Chaque écran possède son propre état (onboarding, home, market, swap,
// settings). Les écrans ne partagent ni cache ni données : seule l'adresse
// du portefeuille est commune.
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Les appels réseau sont décrits par des AppCommand, exécutés ailleurs
// ============================================================================

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::models::swap::MOCK_SOL_BALANCE;
use crate::models::{
    filter_tokens, MarketToken, Portfolio, SettingAction, Settings, SwapForm, WalletAddress,
    DEMO_ADDRESS,
};

// ============================================================================
// Enum : Screen
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Saisie de l'adresse du portefeuille
    Onboarding,

    /// Solde et valeur nette
    Home,

    /// Classement des cryptomonnaies
    Market,

    /// Simulateur de swap
    Swap,

    /// Réglages
    Settings,
}

/// Onglets affichés une fois le portefeuille choisi, dans l'ordre
pub const TABS: [Screen; 4] = [Screen::Home, Screen::Market, Screen::Swap, Screen::Settings];

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding => "Welcome",
            Screen::Home => "Home",
            Screen::Market => "Coins",
            Screen::Swap => "Swap",
            Screen::Settings => "Settings",
        }
    }

    /// Position dans la barre d'onglets (None pour l'onboarding)
    pub fn tab_index(&self) -> Option<usize> {
        TABS.iter().position(|s| s == self)
    }
}

// ============================================================================
// Commandes et résultats du worker
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - App décrit le travail réseau à faire (AppCommand)
// - Le worker thread l'exécute et renvoie un AppResult
// - App applique le résultat dans apply_result()
// ============================================================================

/// Commandes envoyées au worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Solde puis prix du SOL pour l'adresse donnée
    RefreshPortfolio { address: WalletAddress },

    /// Classement du marché
    RefreshMarket,
}

/// Résultats renvoyés par le worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppResult {
    PortfolioLoaded {
        address: WalletAddress,
        portfolio: Portfolio,
    },
    PortfolioFailed {
        address: WalletAddress,
        error: String,
    },
    MarketLoaded {
        tokens: Vec<MarketToken>,
    },
    MarketFailed {
        error: String,
    },
}

// ============================================================================
// État par écran
// ============================================================================

/// Actions rapides du dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Send,
    Receive,
    Swap,
    History,
}

pub const HOME_ACTIONS: [HomeAction; 4] = [
    HomeAction::Send,
    HomeAction::Receive,
    HomeAction::Swap,
    HomeAction::History,
];

impl HomeAction {
    pub fn label(&self) -> &'static str {
        match self {
            HomeAction::Send => "Send",
            HomeAction::Receive => "Receive",
            HomeAction::Swap => "Swap",
            HomeAction::History => "History",
        }
    }
}

/// État du dashboard
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub portfolio: Portfolio,

    /// Premier chargement (aucune donnée encore reçue)
    pub loading: bool,

    /// Rafraîchissement demandé par l'utilisateur
    pub refreshing: bool,

    /// true une fois qu'un chargement a été lancé pour l'adresse courante
    pub requested: bool,

    pub error: Option<String>,
    pub updated_at: Option<DateTime<Local>>,
    pub selected_action: usize,
}

/// État de l'écran Market
#[derive(Debug, Clone, Default)]
pub struct MarketState {
    pub tokens: Vec<MarketToken>,
    pub query: String,

    /// Mode saisie de la recherche (toutes les touches vont dans `query`)
    pub searching: bool,

    /// Index dans la liste filtrée
    pub selected: usize,

    pub loading: bool,
    pub refreshing: bool,
    pub requested: bool,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Local>>,
}

impl MarketState {
    /// Tokens correspondant à la recherche courante
    pub fn filtered(&self) -> Vec<&MarketToken> {
        filter_tokens(&self.tokens, &self.query)
    }

    fn clamp_selection(&mut self) {
        let max_index = self.filtered().len().saturating_sub(1);
        self.selected = self.selected.min(max_index);
    }
}

// ============================================================================
// App
// ============================================================================

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Portefeuille suivi (None tant que l'onboarding n'est pas terminé)
    pub address: Option<WalletAddress>,

    /// Nom affiché (dashboard, profil)
    pub display_name: String,

    /// Saisie en cours sur l'écran d'onboarding
    pub address_input: String,

    pub home: HomeState,
    pub market: MarketState,
    pub swap: SwapForm,
    pub settings: Settings,
    pub settings_selected: usize,

    /// Two-step quit : première pression de 'q' => confirmation
    pub confirm_quit: bool,

    /// Two-step disconnect sur l'écran Settings
    pub confirm_disconnect: bool,

    /// Message ponctuel affiché dans le footer (remplace les alertes)
    pub status_message: Option<String>,
}

impl App {
    /// Crée l'application sur l'écran d'onboarding
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            running: true,
            current_screen: Screen::Onboarding,
            address: None,
            display_name: display_name.into(),
            address_input: String::new(),
            home: HomeState::default(),
            market: MarketState::default(),
            swap: SwapForm::new(),
            settings: Settings::new(),
            settings_selected: 0,
            confirm_quit: false,
            confirm_disconnect: false,
            status_message: None,
        }
    }

    /// Crée l'application avec un portefeuille déjà choisi (onboarding sauté)
    pub fn with_address(address: WalletAddress, display_name: impl Into<String>) -> Self {
        let mut app = Self::new(display_name);
        app.address = Some(address);
        app.current_screen = Screen::Home;
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Appelé à chaque itération de l'event loop
    ///
    /// Fait avancer les timers de cotation du swap.
    pub fn tick(&mut self, now: Instant) {
        self.swap.tick(now);
    }

    // ========================================================================
    // Confirmations et messages
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    /// Annule toutes les confirmations en attente et efface le message
    pub fn cancel_confirmations(&mut self) {
        self.confirm_quit = false;
        self.confirm_disconnect = false;
        self.status_message = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    /// Affiche un écran et retourne le chargement à lancer s'il y en a un
    ///
    /// CONCEPT : "mount" d'un écran
    /// - Home : charge le portefeuille la première fois
    /// - Market : charge le classement la première fois
    pub fn show(&mut self, screen: Screen) -> Option<AppCommand> {
        self.current_screen = screen;

        match screen {
            Screen::Home if !self.home.requested => self.start_portfolio_load(false),
            Screen::Market if !self.market.requested => self.start_market_load(false),
            _ => None,
        }
    }

    /// Onglet suivant (cyclique). Sans effet pendant l'onboarding.
    pub fn next_tab(&mut self) -> Option<AppCommand> {
        let index = self.current_screen.tab_index()?;
        self.show(TABS[(index + 1) % TABS.len()])
    }

    /// Onglet précédent (cyclique)
    pub fn previous_tab(&mut self) -> Option<AppCommand> {
        let index = self.current_screen.tab_index()?;
        self.show(TABS[(index + TABS.len() - 1) % TABS.len()])
    }

    // ========================================================================
    // Onboarding
    // ========================================================================

    pub fn append_address_char(&mut self, c: char) {
        if c.is_ascii_alphanumeric() {
            self.address_input.push(c);
        }
    }

    pub fn backspace_address(&mut self) {
        self.address_input.pop();
    }

    pub fn clear_address(&mut self) {
        self.address_input.clear();
    }

    /// Remplit la saisie avec le portefeuille de démonstration
    pub fn use_demo_address(&mut self) {
        self.address_input = DEMO_ADDRESS.to_string();
    }

    /// Colle un texte (bracketed paste) : remplace la saisie
    ///
    /// Même filtre que la frappe : seuls les caractères alphanumériques
    /// ASCII sont conservés.
    pub fn paste_address(&mut self, text: &str) {
        let filtered: String = text.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if !filtered.is_empty() {
            self.address_input = filtered;
        }
    }

    /// Le bouton "Launch Dashboard" est-il actif ?
    pub fn can_launch(&self) -> bool {
        WalletAddress::is_acceptable(&self.address_input)
    }

    /// Valide l'adresse saisie et ouvre le dashboard
    pub fn launch(&mut self) -> anyhow::Result<Option<AppCommand>> {
        let address = WalletAddress::parse(&self.address_input)?;

        self.address = Some(address);
        self.address_input.clear();
        self.home = HomeState::default();
        self.swap = SwapForm::new();

        Ok(self.show(Screen::Home))
    }

    /// Déconnecte le portefeuille et revient à l'onboarding
    pub fn disconnect(&mut self) {
        self.address = None;
        self.home = HomeState::default();
        self.swap = SwapForm::new();
        self.settings_selected = 0;
        self.confirm_disconnect = false;
        self.current_screen = Screen::Onboarding;
    }

    // ========================================================================
    // Home
    // ========================================================================

    /// Lance le chargement du portefeuille
    ///
    /// - `refreshing` : rafraîchissement manuel (les valeurs restent affichées)
    /// - Retourne None sans adresse ou si un rafraîchissement est déjà en cours
    pub fn start_portfolio_load(&mut self, refreshing: bool) -> Option<AppCommand> {
        let address = self.address.clone()?;

        if self.home.refreshing || (self.home.loading && self.home.requested) {
            return None;
        }

        self.home.requested = true;
        self.home.error = None;
        if refreshing {
            self.home.refreshing = true;
        } else {
            self.home.loading = true;
        }

        Some(AppCommand::RefreshPortfolio { address })
    }

    pub fn select_previous_action(&mut self) {
        self.home.selected_action = self.home.selected_action.saturating_sub(1);
    }

    pub fn select_next_action(&mut self) {
        self.home.selected_action = (self.home.selected_action + 1).min(HOME_ACTIONS.len() - 1);
    }

    /// Active l'action rapide sélectionnée
    ///
    /// Swap ouvre l'onglet Swap, les autres ne sont pas encore disponibles.
    pub fn activate_home_action(&mut self) -> Option<AppCommand> {
        let action = HOME_ACTIONS[self.home.selected_action.min(HOME_ACTIONS.len() - 1)];

        match action {
            HomeAction::Swap => self.show(Screen::Swap),
            other => {
                self.set_status(format!("{} feature coming soon!", other.label()));
                None
            }
        }
    }

    /// Montre l'adresse complète (équivalent du "copier" de l'app mobile)
    pub fn reveal_address(&mut self) {
        if let Some(address) = &self.address {
            let message = format!("Address: {}", address);
            self.set_status(message);
        }
    }

    // ========================================================================
    // Market
    // ========================================================================

    pub fn start_market_load(&mut self, refreshing: bool) -> Option<AppCommand> {
        if self.market.refreshing || (self.market.loading && self.market.requested) {
            return None;
        }

        self.market.requested = true;
        self.market.error = None;
        if refreshing {
            self.market.refreshing = true;
        } else {
            self.market.loading = true;
        }

        Some(AppCommand::RefreshMarket)
    }

    pub fn start_search(&mut self) {
        self.market.searching = true;
    }

    pub fn stop_search(&mut self) {
        self.market.searching = false;
    }

    pub fn is_searching(&self) -> bool {
        self.current_screen == Screen::Market && self.market.searching
    }

    pub fn append_search_char(&mut self, c: char) {
        self.market.query.push(c);
        self.market.selected = 0;
    }

    pub fn backspace_search(&mut self) {
        self.market.query.pop();
        self.market.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.market.query.clear();
        self.market.searching = false;
        self.market.selected = 0;
    }

    /// Navigue vers le haut dans la liste courante (market ou settings)
    pub fn navigate_up(&mut self) {
        match self.current_screen {
            Screen::Market => self.market.selected = self.market.selected.saturating_sub(1),
            Screen::Settings => self.settings_selected = self.settings_selected.saturating_sub(1),
            _ => {}
        }
    }

    /// Navigue vers le bas dans la liste courante
    pub fn navigate_down(&mut self) {
        match self.current_screen {
            Screen::Market => {
                self.market.selected += 1;
                self.market.clamp_selection();
            }
            Screen::Settings => {
                let max_index = self.settings.item_count().saturating_sub(1);
                self.settings_selected = (self.settings_selected + 1).min(max_index);
            }
            _ => {}
        }
    }

    // ========================================================================
    // Swap
    // ========================================================================

    /// Solde maximum proposé dans le badge "Max" (mock, uniquement avec un portefeuille)
    pub fn swap_max_balance(&self) -> Option<f64> {
        self.address.as_ref().map(|_| MOCK_SOL_BALANCE)
    }

    /// "Review Order" : aucune transaction n'est envoyée
    pub fn review_swap_order(&mut self) {
        let direction = self.swap.direction();

        if self.swap.receive_amount().is_empty() || self.swap.is_quote_pending() {
            self.set_status("Enter an amount to get a quote");
            return;
        }

        let message = format!(
            "Simulated order: pay {} {} → receive {} {}",
            self.swap.pay_amount(),
            direction.pay_token(),
            self.swap.receive_amount(),
            direction.receive_token()
        );
        self.set_status(message);
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn activate_setting(&mut self) {
        match self.settings.activate(self.settings_selected) {
            Some(SettingAction::Navigate(message)) => self.set_status(message),
            Some(SettingAction::Toggled { id, enabled }) => {
                tracing::debug!(setting = id, enabled, "Setting toggled");
            }
            None => {}
        }
    }

    /// Two-step disconnect : retourne true si le portefeuille a été déconnecté
    pub fn request_disconnect(&mut self) -> bool {
        if self.confirm_disconnect {
            self.disconnect();
            true
        } else {
            self.confirm_disconnect = true;
            false
        }
    }

    pub fn is_awaiting_disconnect_confirmation(&self) -> bool {
        self.confirm_disconnect
    }

    // ========================================================================
    // Résultats du worker
    // ========================================================================

    /// Applique un résultat du worker
    ///
    /// Les résultats concernant une adresse qui n'est plus suivie
    /// (déconnexion entre-temps) sont ignorés.
    pub fn apply_result(&mut self, result: AppResult) {
        match result {
            AppResult::PortfolioLoaded { address, portfolio } => {
                if self.address.as_ref() != Some(&address) {
                    return;
                }
                self.home.portfolio = portfolio;
                self.home.updated_at = Some(Local::now());
                self.home.loading = false;
                self.home.refreshing = false;
            }
            AppResult::PortfolioFailed { address, error } => {
                if self.address.as_ref() != Some(&address) {
                    return;
                }
                self.home.error = Some(error);
                self.home.loading = false;
                self.home.refreshing = false;
            }
            AppResult::MarketLoaded { tokens } => {
                self.market.tokens = tokens;
                self.market.updated_at = Some(Local::now());
                self.market.loading = false;
                self.market.refreshing = false;
                self.market.clamp_selection();
            }
            AppResult::MarketFailed { error } => {
                self.market.error = Some(error);
                self.market.loading = false;
                self.market.refreshing = false;
            }
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
