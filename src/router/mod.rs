//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el dispatcher que mapea paths HTTP a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router examina el path del request (comparación exacta) y lo dirige
//! al handler apropiado. Si no hay handler para ese path, retorna el
//! catch-all 404 con body `Not Found\n`. El método HTTP no participa en
//! el matching: GET y no-GET se despachan igual.

use crate::http::{Request, Response, StatusCode};

/// Tipo de función handler
///
/// Un handler recibe un Request y retorna una Response. Usamos closures
/// boxeadas para que los handlers puedan capturar configuración (el puerto).
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Router que mapea paths a handlers
pub struct Router {
    /// Mapa de path → handler
    routes: Vec<(String, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::router::Router;
    /// use hello_server::http::{Request, Response};
    ///
    /// let mut router = Router::new();
    /// let port = 3000;
    /// router.register("/hello", move |_req| {
    ///     Response::text(&format!("Hello from server on port {}!\n", port))
    /// });
    /// ```
    pub fn register<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.routes.push((path.to_string(), Box::new(handler)));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no encuentra un handler para el path, retorna 404 Not Found con
    /// body de texto plano `Not Found\n`.
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::router::Router;
    /// use hello_server::http::Request;
    ///
    /// let router = Router::new();
    /// let raw = b"GET /nope HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    /// let response = router.route(&request);
    /// assert_eq!(response.status().as_u16(), 404);
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        // Buscar handler para este path (match exacto)
        for (route_path, handler) in &self.routes {
            if route_path == path {
                // Encontramos el handler, ejecutarlo
                let mut response = handler(request);
                self.add_common_headers(&mut response);
                return response;
            }
        }

        // No se encontró handler para este path: catch-all 404
        let mut response = Response::error(StatusCode::NotFound);
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", "HelloServer/0.1");
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    fn hello_route(_req: &Request) -> Response {
        Response::text("Hello from server on port 3000!\n")
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new();
        assert_eq!(router.routes.len(), 0);
    }

    #[test]
    fn test_register_route() {
        let mut router = Router::new();
        router.register("/hello", hello_route);

        assert_eq!(router.routes.len(), 1);
    }

    #[test]
    fn test_route_found() {
        let mut router = Router::new();
        router.register("/hello", hello_route);

        let request = parse(b"GET /hello HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"Hello from server on port 3000!\n");
    }

    #[test]
    fn test_route_not_found() {
        let router = Router::new();

        let request = parse(b"GET /nonexistent HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"Not Found\n");
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"text/plain".to_string())
        );
    }

    #[test]
    fn test_route_matching_is_exact() {
        let mut router = Router::new();
        router.register("/hello", hello_route);

        // Un slash de más ya no matchea
        let request = parse(b"GET /hello/ HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_root_is_not_found() {
        let mut router = Router::new();
        router.register("/hello", hello_route);

        let request = parse(b"GET / HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_handler_can_capture_config() {
        let mut router = Router::new();
        let port: u16 = 4000;
        router.register("/hello", move |_req| {
            Response::text(&format!("Hello from server on port {}!\n", port))
        });

        let request = parse(b"GET /hello HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(response.body(), b"Hello from server on port 4000!\n");
    }

    #[test]
    fn test_common_headers_added() {
        let mut router = Router::new();
        router.register("/hello", hello_route);

        let request = parse(b"GET /hello HTTP/1.0\r\n\r\n");
        let response = router.route(&request);

        assert_eq!(
            response.headers().get("Server"),
            Some(&"HelloServer/0.1".to_string())
        );
        assert_eq!(
            response.headers().get("Connection"),
            Some(&"close".to_string())
        );
    }

    #[test]
    fn test_multiple_routes() {
        let mut router = Router::new();
        router.register("/hello", hello_route);
        router.register("/health", |_req| Response::json(r#"{"status":"healthy"}"#));

        let response1 = router.route(&parse(b"GET /hello HTTP/1.0\r\n\r\n"));
        assert_eq!(response1.status(), StatusCode::Ok);

        let response2 = router.route(&parse(b"GET /health HTTP/1.0\r\n\r\n"));
        assert_eq!(response2.status(), StatusCode::Ok);
    }
}
