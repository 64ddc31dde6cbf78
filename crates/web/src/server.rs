use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use lite_http::connection::HttpConnection;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, info_span, warn};

use crate::router::Router;

#[derive(Debug, Default)]
pub struct ServerBuilder {
    router: Option<Router>,
    address: Option<SocketAddr>,
}

impl ServerBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: SocketAddr) -> Self {
        self.address = Some(address);
        self
    }

    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let router = self.router.ok_or(ServerBuildError::MissingRouter)?;
        let address = self.address.ok_or(ServerBuildError::MissingAddress)?;
        Ok(Server { router: Arc::new(router), address })
    }
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("router must be set")]
    MissingRouter,
    #[error("address must be set")]
    MissingAddress,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("can't bind {address}: {source}")]
    Bind { address: SocketAddr, source: io::Error },
}

/// Accepts connections and serves each one on its own task.
#[derive(Debug)]
pub struct Server {
    router: Arc<Router>,
    address: SocketAddr,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        info!(address = %self.address, "start listening");
        let tcp_listener = match TcpListener::bind(self.address).await {
            Ok(tcp_listener) => tcp_listener,
            Err(e) => {
                error!(cause = %e, "bind server error");
                return Err(ServerError::Bind { address: self.address, source: e });
            }
        };

        self.serve(tcp_listener).await;
        Ok(())
    }

    /// Runs the accept loop on an already bound listener.
    ///
    /// A failed accept is logged and skipped; a failing connection never stops
    /// the loop.
    pub async fn serve(self, tcp_listener: TcpListener) {
        loop {
            let (tcp_stream, remote_addr) = match tcp_listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let router = Arc::clone(&self.router);
            let span = info_span!("connection", peer = %remote_addr);

            tokio::spawn(
                async move {
                    let (reader, writer) = tcp_stream.into_split();
                    let connection = HttpConnection::new(reader, writer);
                    match connection.process(router).await {
                        Ok(()) => {
                            info!("finished process, connection shutdown");
                        }
                        Err(e) => {
                            error!("service has error, cause {}, connection shutdown", e);
                        }
                    }
                }
                .instrument(span),
            );
        }
    }
}
