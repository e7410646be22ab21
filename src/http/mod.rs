//! # Módulo HTTP
//!
//! Este módulo implementa la parte del protocolo HTTP que el servidor de
//! prueba necesita, sin usar librerías de alto nivel. Incluye:
//!
//! - Parsing de requests (request line y headers)
//! - Construcción de responses HTTP
//! - Manejo de status codes
//!
//! El servidor solo consume el path del request: el método se acepta tal
//! cual (GET y no-GET se tratan igual) y los bodies se ignoran.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /health HTTP/1.0\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 13\r\n
//! \r\n
//! {"ok": true}
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
