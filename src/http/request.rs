//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP mínimo desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /health HTTP/1.0\r\n
//! Host: localhost:3000\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path HTTP/1.x`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//!
//! El método se guarda como token opaco: el servidor trata GET y no-GET
//! exactamente igual, así que no hay lista de métodos soportados. El body
//! (si existe) se ignora.

use std::collections::HashMap;

/// Representa un request HTTP parseado
///
/// Solo el path participa en el routing; método, versión y headers se
/// conservan para logging.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP como token opaco (ej: "GET", "POST", "PATCH")
    method: String,

    /// Path de la petición (ej: "/health"), con query string incluida si viene
    path: String,

    /// Headers HTTP (ej: {"Host": "localhost:3000"})
    headers: HashMap<String, String>,

    /// Versión HTTP (ej: "HTTP/1.0")
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Versión HTTP incorrecta (debe ser HTTP/1.0 o HTTP/1.1)
    InvalidHttpVersion(String),

    /// Header malformado
    InvalidHeader(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Buffer conteniendo el request HTTP completo
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use hello_server::http::Request;
    ///
    /// let raw = b"GET /health HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/health");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Convertir a string (validando que sea UTF-8 válido)
        let request_str =
            std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidRequestLine)?;

        if request_str.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Separar por \r\n para obtener líneas
        let lines: Vec<&str> = request_str.split("\r\n").collect();

        // 1. Parsear la request line (primera línea)
        let (method, path, version) = Self::parse_request_line(lines[0])?;

        // 2. Parsear headers (resto de líneas hasta encontrar línea vacía)
        let headers = Self::parse_headers(&lines[1..])?;

        Ok(Request {
            method,
            path,
            headers,
            version,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `METHOD /path HTTP/1.x`. El método se acepta tal cual,
    /// sin validarlo contra una lista.
    fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Debe tener exactamente 3 partes: METHOD PATH VERSION
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = parts[0].to_string();
        let path = parts[1].to_string();

        // Validar versión HTTP
        let version = parts[2].to_string();
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok((method, path, version))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value"
    fn parse_headers(lines: &[&str]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            // Buscar el separador ':'
            if let Some(colon_pos) = line.find(':') {
                let name = line[..colon_pos].trim().to_string();
                let value = line[colon_pos + 1..].trim().to_string();
                headers.insert(name, value);
            } else {
                // Header sin ':' es inválido
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request (token sin validar)
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}
