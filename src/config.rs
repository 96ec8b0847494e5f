use std::net::SocketAddr;

use clap::Parser;

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://blackjack-frontend-nf1ad9xdt-kyans-projects-4396b957.vercel.app".to_string(),
        "https://blackjack-game-kyan.vercel.app".to_string(),
    ]
}

#[derive(Parser, Debug, Clone)]
#[command(name = "blackjack-table", about = "Single-table blackjack game server")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind_addr: SocketAddr,

    /// Front-end origins allowed to call the API (comma separated)
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = default_origins()
    )]
    pub allowed_origins: Vec<String>,

    /// Upper bound on concurrently tracked sessions, the default one included
    #[arg(long, env = "MAX_SESSIONS", default_value_t = 64)]
    pub max_sessions: usize,

    /// Fixed shuffle seed, for reproducible games
    #[arg(long, env = "DECK_SEED")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "blackjack-table",
            "--bind-addr",
            "0.0.0.0:9000",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--max-sessions",
            "3",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.max_sessions, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(Config::try_parse_from(["blackjack-table", "--bind-addr", "nowhere"]).is_err());
    }
}
