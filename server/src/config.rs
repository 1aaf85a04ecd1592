//! Command-line and environment configuration.

use clap::Parser;
use keyward_auth::{TokenConfig, DEFAULT_TOKEN_TTL_MINUTES};
use keyward_crypto::HashParams;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "keyward-server")]
#[command(about = "License key issuance and validation service")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "KEYWARD_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database path, or ":memory:"
    #[arg(long, env = "KEYWARD_DB", default_value = "./storage/storage.db")]
    pub db: PathBuf,

    /// HMAC secret for access tokens
    #[arg(long, env = "JWT_SECRET", default_value = "", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    #[arg(
        long,
        env = "KEYWARD_TOKEN_TTL_MINUTES",
        default_value_t = DEFAULT_TOKEN_TTL_MINUTES,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub token_ttl_minutes: i64,

    /// Argon2 memory cost in KiB
    #[arg(long, default_value_t = HashParams::default().memory_cost)]
    pub hash_memory_kib: u32,

    /// Argon2 iterations
    #[arg(long, default_value_t = HashParams::default().time_cost)]
    pub hash_iterations: u32,

    /// Argon2 lanes
    #[arg(long, default_value_t = HashParams::default().parallelism)]
    pub hash_parallelism: u32,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.jwt_secret.as_bytes())
            .with_ttl(chrono::Duration::minutes(self.token_ttl_minutes))
    }

    pub fn hash_params(&self) -> HashParams {
        HashParams {
            memory_cost: self.hash_memory_kib,
            time_cost: self.hash_iterations,
            parallelism: self.hash_parallelism,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("db", &self.db)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .field("verbose", &self.verbose)
            .finish()
    }
}
