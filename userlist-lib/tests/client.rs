//! Client tests against a one-shot local HTTP server.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use userlist_lib::UserListClient;
use userlist_lib::error::ApiError;
use userlist_lib::error::Error;
use userlist_lib::model::ItemsPerPage;
use userlist_lib::model::QueryParams;
use userlist_lib::model::SortOrder;

/// Serves exactly one request with a canned response.
///
/// The handle resolves to the JSON body the client sent.
async fn serve_once(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> (String, JoinHandle<serde_json::Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let received = Arc::new(Mutex::new(serde_json::Value::Null));
        let captured = Arc::clone(&received);

        let service = service_fn(move |req: Request<Incoming>| {
            let captured = Arc::clone(&captured);
            async move {
                assert_eq!(req.method(), hyper::Method::POST);
                let bytes = req.into_body().collect().await.unwrap().to_bytes();
                *captured.lock().unwrap() = serde_json::from_slice(&bytes).unwrap();
                tokio::time::sleep(delay).await;
                Ok::<_, Infallible>(
                    Response::builder()
                        .status(status)
                        .header("Content-Type", "application/json")
                        .header("Connection", "close")
                        .body(Full::new(Bytes::from(body)))
                        .unwrap(),
                )
            }
        });

        let _ = http1::Builder::new()
            .serve_connection(TokioIo::new(stream), service)
            .await;

        received.lock().unwrap().clone()
    });

    (url, handle)
}

const OK_BODY: &str = r#"{"data":{
    "getUsers":[
        {"_id":"1","email":"alice@example.com","name":"Alice","age":30,"location":"Oslo"},
        {"_id":"2","email":"alina@example.com","name":"Alina","age":25,"location":"Riga"}
    ],
    "paginationInfo":{"currentPage":2,"hasNextPage":true,"hasPreviousPage":true,"totalPages":3}
}}"#;

fn client(url: &str) -> UserListClient {
    UserListClient::builder()
        .url(url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_all_users_sends_variables() {
    let (url, server) = serve_once(StatusCode::OK, OK_BODY, Duration::ZERO).await;
    let params = QueryParams {
        page: 2,
        limit: ItemsPerPage::Ten,
        search_term: "ali".into(),
        sort_field: "name".into(),
        sort_order: Some(SortOrder::Desc),
    };

    let page = client(&url).get_all_users(&params).await.unwrap();
    assert_eq!(page.users().len(), 2);
    assert_eq!(page.users()[1].email, "alina@example.com");
    assert_eq!(page.pagination().current_page, 2);
    assert_eq!(page.total_pages(), 3);

    let sent = server.await.unwrap();
    assert_eq!(sent["operationName"], "getAllUsers");
    assert!(sent["query"].as_str().unwrap().contains("paginationInfo"));
    let vars = &sent["variables"];
    assert_eq!(vars["page"], 2);
    assert_eq!(vars["limit"], 10);
    assert_eq!(vars["entityType"], "users");
    assert_eq!(vars["searchTerm"], "ali");
    assert_eq!(vars["sortByField"], "name");
    assert_eq!(vars["sortByOrder"], "desc");
}

#[tokio::test]
async fn test_graphql_error_message_surfaces() {
    let (url, server) = serve_once(
        StatusCode::OK,
        r#"{"data":null,"errors":[{"message":"Network error"}]}"#,
        Duration::ZERO,
    )
    .await;

    let err = client(&url)
        .get_all_users(&QueryParams::default())
        .await
        .unwrap_err();
    assert!(err.is_graphql());
    assert_eq!(err.to_string(), "Network error");
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_error_status() {
    let (url, server) =
        serve_once(StatusCode::INTERNAL_SERVER_ERROR, "upstream down", Duration::ZERO).await;

    let err = client(&url)
        .get_all_users(&QueryParams::default())
        .await
        .unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.status_code(), Some(500));
            assert_eq!(api.to_string(), "HTTP 500: upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_timeout() {
    let (url, _server) = serve_once(StatusCode::OK, OK_BODY, Duration::from_secs(2)).await;

    let client = UserListClient::builder()
        .url(&url)
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client
        .get_all_users(&QueryParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Timeout(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&url)
        .get_all_users(&QueryParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Network(_))));
}
