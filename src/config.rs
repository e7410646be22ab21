//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de prueba con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./hello_server 4000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4000 HTTP_HOST=127.0.0.1 ./hello_server
//! ```

use clap::Parser;

/// Configuración del servidor HTTP de prueba
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Servidor HTTP de prueba con endpoints /health y /hello")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (argumento posicional opcional)
    #[arg(default_value = "3000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (loopback por defecto)
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```rust
    /// use hello_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:3000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Obtiene la URL base del servidor (con slash final)
    ///
    /// # Ejemplo
    /// ```rust
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.base_url(), "http://127.0.0.1:3000/");
    /// ```
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        Ok(())
    }

    /// Imprime las URLs documentadas del servidor
    ///
    /// Se llama una vez al arrancar, después del bind exitoso.
    pub fn print_endpoints(&self) {
        println!("Server running at {}", self.base_url());
        println!("- Health check: {}health", self.base_url());
        println!("- Hello endpoint: {}hello", self.base_url());
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}
