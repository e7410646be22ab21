//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en `host:port` (loopback por defecto)
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea requests HTTP
//! 4. Despacha al router y envía la response

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
