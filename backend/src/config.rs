use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which `BookStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Records live in process memory and are lost on exit.
    Memory,
    /// Records live in a single `books` table in a SQLite file.
    Sqlite,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
            StoreKind::Sqlite => f.write_str("sqlite"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Bookshelf CRUD HTTP service")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "localhost")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "BOOKSHELF_PORT", default_value_t = 9000)]
    pub port: u16,

    /// Record store backend.
    #[arg(long, env = "BOOKSHELF_STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// SQLite database file, used with `--store sqlite`.
    #[arg(long, env = "BOOKSHELF_DATABASE", default_value = "books.db")]
    pub database: PathBuf,

    /// Value of the `Access-Control-Allow-Origin` response header.
    #[arg(long, env = "BOOKSHELF_CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["bookshelf-api"]).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 9000);
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.database, PathBuf::from("books.db"));
        assert_eq!(config.cors_origin, "*");
    }

    #[test]
    fn selects_sqlite_store() {
        let config = Config::try_parse_from([
            "bookshelf-api",
            "--store",
            "sqlite",
            "--database",
            "/tmp/shelf.db",
            "--port",
            "8080",
        ])
        .unwrap();
        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.database, PathBuf::from("/tmp/shelf.db"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_unknown_store() {
        assert!(Config::try_parse_from(["bookshelf-api", "--store", "redis"]).is_err());
    }
}
