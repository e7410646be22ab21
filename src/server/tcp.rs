//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio thread.
//!
//! No hay estado mutable compartido entre requests: el router es inmutable
//! y los handlers solo capturan el puerto configurado.

use crate::config::Config;
use crate::handlers;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP de prueba concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Self::build_router(config.port);

        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Construye el router con los endpoints fijos
    ///
    /// Los handlers capturan el puerto configurado; es el único dato que
    /// necesitan y nunca cambia después del arranque.
    fn build_router(port: u16) -> Router {
        let mut router = Router::new();

        router.register("/health", move |req| handlers::health_handler(req, port));
        router.register("/hello", move |req| handlers::hello_handler(req, port));

        router
    }

    /// Arranca el servidor y bloquea aceptando conexiones
    ///
    /// Un fallo de bind (ej: puerto ocupado) se propaga al caller; no hay
    /// reintentos.
    pub fn run(&mut self) -> std::io::Result<()> {
        let address = self.config.address();

        let listener = TcpListener::bind(&address)?;
        self.config.print_endpoints();

        self.listener = Some(listener);
        let listener = self.listener.as_ref().unwrap();

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection_static(stream, router) {
                            eprintln!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("Accept error: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión: lee el request, despacha y escribe la response
    fn handle_connection_static(mut stream: TcpStream, router: Arc<Router>) -> std::io::Result<()> {
        let start = Instant::now();

        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        // El peer cerró sin enviar nada
        if bytes_read == 0 {
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                println!("{} {}", request.method(), request.path());
                router.route(&request)
            }
            Err(e) => {
                eprintln!("Parse error: {}", e);
                Response::error(StatusCode::BadRequest)
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        println!("{} ({:.2}ms)", response.status(), latency.as_secs_f64() * 1000.0);

        Ok(())
    }
}

#[cfg(test)]
mod server_tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    /// Helper: acepta una conexión, la procesa y retorna la respuesta cruda
    fn roundtrip(raw_request: &[u8], port: u16) -> String {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let router = Arc::new(Server::build_router(port));

        let t = thread::spawn({
            let router = Arc::clone(&router);
            move || {
                let (stream, _) = listener.accept().unwrap();
                Server::handle_connection_static(stream, router).unwrap();
            }
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw_request).unwrap();
        client.shutdown(std::net::Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        t.join().unwrap();

        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_handle_connection_hello_ok() {
        let text = roundtrip(b"GET /hello HTTP/1.0\r\n\r\n", 3000);

        assert!(text.contains("200 OK"));
        assert!(text.contains("Content-Type: text/plain"));
        assert!(text.ends_with("Hello from server on port 3000!\n"));
    }

    #[test]
    fn test_handle_connection_health_ok() {
        let text = roundtrip(b"GET /health HTTP/1.0\r\n\r\n", 3000);

        assert!(text.contains("200 OK"));
        assert!(text.contains("Content-Type: application/json"));
        assert!(text.contains("\"status\":\"healthy\""));
        assert!(text.contains("\"port\":3000"));
    }

    #[test]
    fn test_handle_connection_unknown_path() {
        let text = roundtrip(b"GET /foo HTTP/1.0\r\n\r\n", 3000);

        assert!(text.contains("404 Not Found"));
        assert!(text.ends_with("Not Found\n"));
    }

    #[test]
    fn test_handle_connection_post_treated_like_get() {
        let text = roundtrip(b"POST /health HTTP/1.0\r\n\r\n", 3000);

        assert!(text.contains("200 OK"));
        assert!(text.contains("\"status\":\"healthy\""));
    }

    #[test]
    fn test_handle_connection_parse_error() {
        // Bytes no-HTTP disparan error de parseo → 400
        let text = roundtrip(b"\x00\x01\x02\x03garbage", 3000);

        assert!(text.contains("400 Bad Request"));
        assert!(text.ends_with("Bad Request\n"));
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        // Cubre rama bytes_read == 0
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let router = Arc::new(Server::build_router(3000));

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            // No se envía nada desde el peer: el read retorna 0 y la función
            // debe terminar Ok(())
            Server::handle_connection_static(stream, router).unwrap();
        });

        // Cliente que conecta y cierra inmediatamente sin mandar datos
        drop(TcpStream::connect(addr).unwrap());

        t.join().unwrap();
    }
}
