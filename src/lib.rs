//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP de prueba implementado desde cero. Expone dos endpoints
//! fijos (`/health` y `/hello`) y un catch-all 404, escuchando en loopback
//! con puerto configurable. Sirve como backend simulado para probar
//! proxies y health checks.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones a handlers (el dispatcher)
//! - `handlers`: Implementación de los endpoints fijos
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use hello_server::server::Server;
//! use hello_server::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
