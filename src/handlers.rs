//! # Handlers de los Endpoints
//! src/handlers.rs
//!
//! Implementación de los endpoints fijos del servidor:
//! - /health: Estado del servidor en JSON (para health checks de proxies)
//! - /hello: Saludo en texto plano
//!
//! Los handlers reciben el puerto configurado como parámetro; el servidor
//! lo captura en closures al registrar las rutas. No hay estado compartido.

use crate::http::{Request, Response, StatusCode};
use chrono::Utc;
use serde::Serialize;

/// Payload JSON del endpoint /health
#[derive(Debug, Serialize)]
struct HealthPayload {
    /// Siempre "healthy": el endpoint solo responde si el proceso vive
    status: &'static str,

    /// Puerto configurado, ecoado tal cual
    port: u16,

    /// Hora actual UTC en formato RFC 3339
    timestamp: String,
}

/// Handler para /health
///
/// Retorna el estado del servidor con el puerto configurado y un timestamp.
/// Como efecto secundario emite una línea de log por consola.
///
/// # Ejemplo de response
/// ```json
/// {
///   "status": "healthy",
///   "port": 3000,
///   "timestamp": "2026-08-31T12:00:00+00:00"
/// }
/// ```
pub fn health_handler(_req: &Request, port: u16) -> Response {
    println!("Health check requested for {}", port);

    let payload = HealthPayload {
        status: "healthy",
        port,
        timestamp: Utc::now().to_rfc3339(),
    };

    match serde_json::to_string(&payload) {
        Ok(body) => Response::json(&body),
        Err(_) => Response::error(StatusCode::InternalServerError),
    }
}

/// Handler para /hello
///
/// Retorna un saludo en texto plano que incluye el puerto configurado.
///
/// # Ejemplo de response
/// ```text
/// Hello from server on port 3000!
/// ```
pub fn hello_handler(_req: &Request, port: u16) -> Response {
    Response::text(&format!("Hello from server on port {}!\n", port))
}
