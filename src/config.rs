// ============================================================================
// Configuration
// ============================================================================
// Arguments de ligne de commande (clap) avec repli sur variables
// d'environnement, puis validation dans une structure Config.
//
// Exemples :
//   nucleus --address 9B5XszUGdMaxCZ7uSQhPzdks5ZQSmWxrmzCSvtJ6Ns6g
//   NUCLEUS_RPC_URL=https://my-rpc.example nucleus
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::api::coingecko::{DEFAULT_MARKET_SIZE, DEFAULT_PRICE_API_URL};
use crate::api::solana::DEFAULT_RPC_URL;
use crate::models::WalletAddress;

/// Arguments bruts de la ligne de commande
#[derive(Parser, Debug, Clone)]
#[command(name = "nucleus")]
#[command(version)]
#[command(about = "Suivi de portefeuille Solana dans le terminal")]
pub struct Args {
    /// Adresse du portefeuille (saute l'écran d'onboarding)
    #[arg(short, long, env = "NUCLEUS_ADDRESS")]
    pub address: Option<String>,

    /// Endpoint JSON-RPC Solana
    #[arg(long, env = "NUCLEUS_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Base de l'API de prix (compatible CoinGecko v3)
    #[arg(long, env = "NUCLEUS_PRICE_API_URL", default_value = DEFAULT_PRICE_API_URL)]
    pub price_api_url: String,

    /// Nom affiché sur le dashboard et le profil
    #[arg(short, long, env = "NUCLEUS_NAME", default_value = "Kalki")]
    pub name: String,

    /// Répertoire des fichiers de logs
    #[arg(long, env = "NUCLEUS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Intervalle entre deux ticks de l'event loop (ms)
    #[arg(long, default_value_t = 250)]
    pub tick_rate_ms: u64,

    /// Nombre de tokens chargés sur l'écran Market
    #[arg(long, default_value_t = DEFAULT_MARKET_SIZE)]
    pub market_size: u32,
}

/// Configuration validée de l'application
#[derive(Debug, Clone)]
pub struct Config {
    pub address: Option<WalletAddress>,
    pub rpc_url: String,
    pub price_api_url: String,
    pub display_name: String,
    pub log_dir: PathBuf,
    pub tick_rate: Duration,
    pub market_size: u32,
}

impl Config {
    /// Valide les arguments et construit la configuration
    pub fn from_args(args: Args) -> Result<Self> {
        let rpc_url = validate_url("rpc-url", &args.rpc_url)?;
        let price_api_url = validate_url("price-api-url", &args.price_api_url)?;

        let address = args
            .address
            .as_deref()
            .map(WalletAddress::parse)
            .transpose()
            .context("Adresse fournie en argument invalide")?;

        if args.tick_rate_ms == 0 {
            bail!("--tick-rate-ms doit être strictement positif");
        }

        if !(1..=250).contains(&args.market_size) {
            bail!("--market-size doit être compris entre 1 et 250 (reçu {})", args.market_size);
        }

        let log_dir = args.log_dir.unwrap_or_else(default_log_dir);

        Ok(Self {
            address,
            rpc_url,
            price_api_url,
            display_name: args.name.trim().to_string(),
            log_dir,
            tick_rate: Duration::from_millis(args.tick_rate_ms),
            market_size: args.market_size,
        })
    }

    /// Parse la ligne de commande du processus puis valide
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }
}

/// Répertoire de logs par défaut
///
/// - Linux : ~/.local/share/nucleus/logs
/// - macOS : ~/Library/Application Support/nucleus/logs
/// - Windows : %LOCALAPPDATA%\nucleus\logs
/// - Repli : ./logs
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("nucleus").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

fn validate_url(name: &str, url: &str) -> Result<String> {
    let url = url.trim();

    if url.is_empty() {
        bail!("--{} ne peut pas être vide", name);
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("--{} doit commencer par http:// ou https:// (reçu {})", name, url);
    }

    Ok(url.to_string())
}
