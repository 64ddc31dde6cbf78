use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::router::Router;
use crate::storage::Storage;

/// Command line configuration of `lite-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "lite-server", version, about = "A tiny HTTP/1.1 echo and file server")]
pub struct Config {
    /// Directory read and written by the `/files/` route; without it file reads
    /// get `404 Not Found` and uploads land in the working directory
    #[arg(long, value_name = "PATH", env = "LITE_DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Address to accept connections on
    #[arg(long, value_name = "ADDR", env = "LITE_LISTEN", default_value = "0.0.0.0:4221")]
    pub listen: SocketAddr,
}

impl Config {
    pub fn router(&self) -> Router {
        match &self.directory {
            Some(directory) => Router::with_storage(Storage::new(directory)),
            None => Router::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["lite-server"]).unwrap();

        assert_eq!(config.directory, None);
        assert_eq!(config.listen, "0.0.0.0:4221".parse().unwrap());
        assert!(config.router().storage().is_none());
    }

    #[test]
    fn directory_and_listen() {
        let config =
            Config::try_parse_from(["lite-server", "--directory", "/tmp/data", "--listen", "127.0.0.1:8080"]).unwrap();

        assert_eq!(config.directory.as_deref(), Some(Path::new("/tmp/data")));
        assert_eq!(config.listen, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.router().storage().map(Storage::root), Some(Path::new("/tmp/data")));
    }

    #[test]
    fn rejects_bad_address() {
        assert!(Config::try_parse_from(["lite-server", "--listen", "not-an-address"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
