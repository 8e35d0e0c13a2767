//! Static file server for local preview
//!
//! Serves the built Leptos app from `dist/`. Paths that don't name a file fall
//! back to `index.html` so client-side routes (`/swap`) load the app.
//!
//! Configuration comes from the environment:
//! - `SWAP_WEB_ADDR`: listen address (default `127.0.0.1:8080`)
//! - `SWAP_WEB_DIST`: directory to serve (default `dist`)

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";
const INDEX_FILE: &str = "index.html";
/// Idle sockets (browser preconnects) are dropped after this long
const READ_TIMEOUT: Duration = Duration::from_secs(5);
const NOT_FOUND_BODY: &[u8] =
    b"<!DOCTYPE html><html><body><h1>Error: index.html not found</h1></body></html>";

#[derive(Debug, Error)]
enum ConfigError {
    #[error("SWAP_WEB_ADDR must be a socket address like 127.0.0.1:8080, got '{0}'")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
struct ServerConfig {
    addr: SocketAddr,
    dist: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("SWAP_WEB_ADDR").ok(), env::var("SWAP_WEB_DIST").ok())
    }

    fn from_vars(addr: Option<String>, dist: Option<String>) -> Result<Self, ConfigError> {
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;

        Ok(Self {
            addr,
            dist: PathBuf::from(dist.unwrap_or_else(|| DEFAULT_DIST.to_string())),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swap_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(config.addr) {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.addr, e);
            std::process::exit(1);
        }
    };

    info!("Swap preview server running at http://{}", config.addr);
    info!("Serving from {}", config.dist.display());

    serve(listener, config.dist);
}

/// Accept connections forever, one thread per connection.
fn serve(listener: TcpListener, dist: PathBuf) {
    let dist = Arc::new(dist);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let dist = Arc::clone(&dist);
                thread::spawn(move || {
                    if let Err(e) = handle_client(stream, &dist) {
                        warn!("Failed to answer request: {}", e);
                    }
                });
            }
            Err(e) => warn!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, dist: &Path) -> std::io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let request_line = {
        let mut lines = BufReader::new(&mut stream).lines();
        let request_line = match lines.next() {
            Some(Ok(line)) => line,
            _ => {
                warn!("Failed to read request line");
                return Ok(());
            }
        };
        // Drain headers so closing the socket doesn't reset the connection
        for line in lines {
            match line {
                Ok(line) if !line.is_empty() => continue,
                _ => break,
            }
        }
        request_line
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve(dist, target);
    debug!("{} -> {}", target, file_path.display());

    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", content_type(&file_path), body),
        Err(e) => {
            warn!("Cannot read {}: {}", file_path.display(), e);
            ("404 NOT FOUND", "text/html", NOT_FOUND_BODY.to_vec())
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    stream.write_all(headers.as_bytes())?;
    stream.write_all(&body)?;
    stream.flush()
}

/// Map a request target to a file under `dist`, falling back to the index
/// for client-side routes, missing files and directories.
fn resolve(dist: &Path, target: &str) -> PathBuf {
    match request_path(target) {
        Some(relative) => {
            let candidate = dist.join(relative);
            if candidate.is_file() {
                candidate
            } else {
                dist.join(INDEX_FILE)
            }
        }
        None => dist.join(INDEX_FILE),
    }
}

/// Relative file path named by a request target.
///
/// The query string is dropped and the path percent-decoded. Returns `None`
/// for the root and for anything that would leave the served directory.
fn request_path(target: &str) -> Option<PathBuf> {
    let path = target.split_once('?').map_or(target, |(path, _query)| path);
    let decoded = urlencoding::decode(path).ok()?;
    let relative = Path::new(decoded.trim_start_matches('/'));

    if relative.as_os_str().is_empty() {
        return None;
    }
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(relative.to_path_buf())
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn start_server(dist: &Path) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let dist = dist.to_path_buf();
        thread::spawn(move || serve(listener, dist));
        addr
    }

    fn get(addr: SocketAddr, target: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(3))).unwrap();
        write!(stream, "GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", target).unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    fn dist_with_index() -> tempfile::TempDir {
        let dist = tempfile::tempdir().unwrap();
        fs::write(dist.path().join("index.html"), "<html>nuvex</html>").unwrap();
        dist
    }

    #[test]
    fn test_idle_connection_does_not_block_others() {
        let dist = dist_with_index();
        let addr = start_server(dist.path());

        let _idle = TcpStream::connect(addr).unwrap();
        let response = get(addr, "/");

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("<html>nuvex</html>"));
    }

    #[test]
    fn test_serves_existing_file_with_content_type() {
        let dist = dist_with_index();
        fs::write(dist.path().join("eth.svg"), "<svg/>").unwrap();
        let addr = start_server(dist.path());

        let response = get(addr, "/eth.svg");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("Content-Type: image/svg+xml\r\n"));
        assert!(response.contains("Content-Length: 6\r\n"));
        assert!(response.ends_with("<svg/>"));
    }

    #[test]
    fn test_client_route_serves_index() {
        let dist = dist_with_index();
        let addr = start_server(dist.path());

        let response = get(addr, "/swap");
        assert!(response.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(response.ends_with("<html>nuvex</html>"));
    }

    #[test]
    fn test_missing_index_is_404() {
        let dist = tempfile::tempdir().unwrap();
        let addr = start_server(dist.path());

        let response = get(addr, "/");
        assert!(response.starts_with("HTTP/1.1 404 NOT FOUND"));
        assert!(response.ends_with(std::str::from_utf8(NOT_FOUND_BODY).unwrap()));
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist, PathBuf::from("dist"));
    }

    #[test]
    fn test_config_rejects_bad_addr() {
        let err = ServerConfig::from_vars(Some("localhost".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("/"), None);
        assert_eq!(request_path("/?ref=home"), None);
        assert_eq!(request_path("/eth.svg"), Some(PathBuf::from("eth.svg")));
        assert_eq!(request_path("/swap?x=1"), Some(PathBuf::from("swap")));
        assert_eq!(
            request_path("/assets/my%20logo.png"),
            Some(PathBuf::from("assets/my logo.png"))
        );
    }

    #[test]
    fn test_request_path_refuses_traversal() {
        assert_eq!(request_path("/../Cargo.toml"), None);
        assert_eq!(request_path("/assets/%2e%2e/secret"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_index() {
        let dist = Path::new("definitely-missing-dist");
        assert_eq!(resolve(dist, "/swap"), dist.join("index.html"));
        assert_eq!(resolve(dist, "/"), dist.join("index.html"));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("swap_web_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("eth.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
