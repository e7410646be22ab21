//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP de prueba.
//!
//! Uso: `hello_server [PORT]` (por defecto 3000, siempre en loopback).

use hello_server::config::Config;
use hello_server::server::Server;

fn main() {
    // Crear configuración desde CLI / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
