//! HTTP directory adapter. Implements DirectoryPort against a JSONPlaceholder-style REST API.
//!
//! Endpoints: `GET {base}/users/{id}` and `GET {base}/users/{id}/todos`.

use crate::domain::{Employee, EmployeeId, ReportError, TodoItem};
use crate::ports::DirectoryPort;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// REST adapter for the employee directory.
///
/// No timeouts and no retries: each request blocks until the server answers
/// or the connection fails.
pub struct HttpDirectoryAdapter {
    client: Client,
    base_url: String,
}

impl HttpDirectoryAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g. "https://jsonplaceholder.typicode.com"); trailing slashes are ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employee_url(&self, id: EmployeeId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    fn todos_url(&self, id: EmployeeId) -> String {
        format!("{}/users/{}/todos", self.base_url, id)
    }

    /// Send a GET. Only connection-level failures are errors here; status is left to the caller.
    async fn get(&self, url: &str) -> Result<Response, ReportError> {
        debug!(url, "GET");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))
    }

    /// Read the body as text and decode it, so shape errors stay distinct from transport errors.
    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ReportError> {
        let body = response
            .text()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(url, error = %e, "response body did not match expected shape");
            ReportError::MalformedResponse {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// `/users/{id}` body. Only `name` is required.
#[derive(Deserialize)]
struct UserBody {
    name: String,
}

/// One element of the `/users/{id}/todos` array.
#[derive(Deserialize)]
struct TodoBody {
    title: String,
    completed: bool,
}

#[async_trait::async_trait]
impl DirectoryPort for HttpDirectoryAdapter {
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, ReportError> {
        let url = self.employee_url(id);
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            warn!(employee_id = %id, status = %response.status(), "employee lookup failed");
            return Err(ReportError::NotFound(id.get()));
        }

        let user: UserBody = Self::decode(&url, response).await?;
        info!(employee_id = %id, name = %user.name, "employee fetched");

        Ok(Employee {
            id,
            name: user.name,
        })
    }

    async fn fetch_todos(&self, id: EmployeeId) -> Result<Vec<TodoItem>, ReportError> {
        let url = self.todos_url(id);
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            warn!(employee_id = %id, status = %response.status(), "to-do lookup failed");
            return Err(ReportError::FetchFailure(id.get()));
        }

        let todos: Vec<TodoBody> = Self::decode(&url, response).await?;
        info!(employee_id = %id, items = todos.len(), "to-do list fetched");

        Ok(todos
            .into_iter()
            .map(|t| TodoItem {
                title: t.title,
                completed: t.completed,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    type Route = (&'static str, u16, &'static str);

    /// Minimal HTTP/1.1 responder: matches the request path against `routes`, 404 otherwise.
    async fn serve(routes: Vec<Route>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|(p, _, _)| *p == path)
                        .map(|(_, s, b)| (*s, *b))
                        .unwrap_or((404, "{}"));
                    let response = format!(
                        "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    fn id(n: i64) -> EmployeeId {
        EmployeeId::new(n).unwrap()
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        let adapter = HttpDirectoryAdapter::new("http://example.test//");
        assert_eq!(adapter.base_url(), "http://example.test");
        assert_eq!(adapter.employee_url(id(3)), "http://example.test/users/3");
        assert_eq!(adapter.todos_url(id(3)), "http://example.test/users/3/todos");
    }

    #[tokio::test]
    async fn test_fetch_employee_and_todos() {
        let base = serve(vec![
            (
                "/users/1",
                200,
                r#"{"id": 1, "name": "Leanne Graham", "username": "Bret"}"#,
            ),
            (
                "/users/1/todos",
                200,
                r#"[{"userId": 1, "id": 1, "title": "first", "completed": false},
                    {"userId": 1, "id": 2, "title": "second", "completed": true}]"#,
            ),
        ])
        .await;
        let adapter = HttpDirectoryAdapter::new(base);

        let employee = adapter.fetch_employee(id(1)).await.unwrap();
        assert_eq!(employee.name, "Leanne Graham");
        assert_eq!(employee.id, id(1));

        let todos = adapter.fetch_todos(id(1)).await.unwrap();
        assert_eq!(
            todos,
            vec![TodoItem::new("first", false), TodoItem::new("second", true)]
        );
    }

    #[tokio::test]
    async fn test_employee_non_success_is_not_found() {
        let base = serve(vec![]).await;
        let adapter = HttpDirectoryAdapter::new(base);

        let err = adapter.fetch_employee(id(999999)).await.unwrap_err();
        assert_eq!(err, ReportError::NotFound(999999));
        assert_eq!(err.to_string(), "Employee with ID 999999 not found");
    }

    #[tokio::test]
    async fn test_todos_non_success_is_fetch_failure() {
        let base = serve(vec![("/users/2/todos", 500, "oops")]).await;
        let adapter = HttpDirectoryAdapter::new(base);

        let err = adapter.fetch_todos(id(2)).await.unwrap_err();
        assert_eq!(err, ReportError::FetchFailure(2));
    }

    #[tokio::test]
    async fn test_missing_name_is_malformed() {
        let base = serve(vec![("/users/1", 200, r#"{"id": 1}"#)]).await;
        let adapter = HttpDirectoryAdapter::new(base);

        let err = adapter.fetch_employee(id(1)).await.unwrap_err();
        assert!(
            matches!(err, ReportError::MalformedResponse { ref url, .. } if url.ends_with("/users/1")),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_todos_wrong_shape_is_malformed() {
        let base = serve(vec![
            ("/users/1/todos", 200, r#"{"title": "not a list"}"#),
            ("/users/2/todos", 200, r#"[{"title": "no flag"}]"#),
        ])
        .await;
        let adapter = HttpDirectoryAdapter::new(base);

        for n in [1, 2] {
            let err = adapter.fetch_todos(id(n)).await.unwrap_err();
            assert!(
                matches!(err, ReportError::MalformedResponse { .. }),
                "got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let adapter = HttpDirectoryAdapter::new(format!("http://{}", addr));

        let err = adapter.fetch_employee(id(1)).await.unwrap_err();
        assert!(matches!(err, ReportError::Network(_)), "got {err:?}");
        assert!(err.to_string().starts_with("Failed to connect to API - "));
    }
}
