//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP
//! de forma programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 13\r\n
//! \r\n
//! {"ok": true}
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use hello_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello from server on port 3000!\n");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
        self
    }

    /// Crea una respuesta JSON exitosa (200 OK)
    ///
    /// Automáticamente establece `Content-Type: application/json`.
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::http::Response;
    ///
    /// let response = Response::json(r#"{"status": "healthy"}"#);
    /// ```
    pub fn json(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "application/json")
            .with_body(body)
    }

    /// Crea una respuesta de texto plano exitosa (200 OK)
    ///
    /// Automáticamente establece `Content-Type: text/plain`.
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::http::Response;
    ///
    /// let response = Response::text("Hello from server on port 3000!\n");
    /// ```
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Crea una respuesta de error con body de texto plano
    ///
    /// El body es la reason phrase del status más newline, igual que el
    /// backend original: `Not Found\n`, `Bad Request\n`.
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::NotFound);
    /// assert_eq!(response.body(), b"Not Found\n");
    /// ```
    pub fn error(status: StatusCode) -> Self {
        let body = format!("{}\n", status.reason_phrase());
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(&body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo:
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        // Formato: HTTP/1.0 200 OK\r\n
        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        // Formato: Header-Name: Value\r\n
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
