// ============================================================================
// Module : api
// ============================================================================
// Clients HTTP des deux services publics utilisés par l'application :
// - RPC Solana (solde du portefeuille)
// - CoinGecko (prix spot et classement du marché)
// ============================================================================

pub mod coingecko; // Prix et marché
pub mod solana;    // JSON-RPC getBalance

// Re-export des clients
pub use coingecko::{CoinGecko, SpotPrice};
pub use solana::SolanaRpc;
