// Shared test helpers: an in-process registry and relay served with axum.
//
// The mock registry knows one operator (7701234567), reports 7702345678 as
// absent, and answers 500 for 7709999999.

// Each test binary uses a different subset
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

pub const KNOWN_INN: &str = "7701234567";
pub const ABSENT_INN: &str = "7702345678";
pub const BROKEN_INN: &str = "7709999999";
pub const KNOWN_RECORD_ID: &str = "77-18-012345";

/// Path of the registry list page on the mock server.
pub const REGISTRY_PATH: &str = "/operators-registry/operators-list/";

/// How long the `/slow` route stalls before answering.
pub const SLOW_RESPONSE: Duration = Duration::from_secs(5);

const SEARCH_HIT: &str = r#"<html><body><table>
  <tr><td>ООО "Ромашка"</td><td>ИНН: 7701234567</td>
      <td><a href="/operators-registry/operators-list/?id=77-18-012345">Подробнее</a></td></tr>
</table></body></html>"#;

const SEARCH_MISS: &str =
    "<html><body><p>По вашему запросу ничего не найдено</p></body></html>";

pub const DETAIL_PAGE: &str = r#"<html><body><table>
  <tr><td>Регистрационный номер</td><td>77-18-012345</td></tr>
  <tr><td>Наименование оператора</td><td>ООО "Ромашка"</td></tr>
  <tr><td>ИНН</td><td>7701234567</td></tr>
  <tr><td>Юридический адрес</td><td>101000, г. Москва, ул. Ленина, д. 1</td></tr>
  <tr><td>Дата регистрации уведомления</td><td>01.02.2018</td></tr>
  <tr><td>ФИО физического лица или наименование юридического лица, ответственных за организацию обработки персональных данных</td><td>Иванов Иван Иванович</td></tr>
  <tr><td>номера их контактных телефонов, почтовые адреса и адреса электронной почты</td><td>тел 89991234567, email: Info@Romashka.ru</td></tr>
</table></body></html>"#;

async fn registry_page(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Html<String>) {
    if let Some(id) = params.get("id") {
        return if id == KNOWN_RECORD_ID {
            (StatusCode::OK, Html(DETAIL_PAGE.to_string()))
        } else {
            (StatusCode::NOT_FOUND, Html(String::new()))
        };
    }

    let inn = params.get("inn").map(String::as_str).unwrap_or("");
    match inn {
        KNOWN_INN => (StatusCode::OK, Html(SEARCH_HIT.to_string())),
        BROKEN_INN => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1>".to_string()),
        ),
        _ => (StatusCode::OK, Html(SEARCH_MISS.to_string())),
    }
}

/// JSON-wrapping relay: echoes the target URL back inside `contents`.
async fn json_relay(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let target = params.get("url").cloned().unwrap_or_default();
    Json(serde_json::json!({
        "contents": format!("<p>relayed {}</p>", target),
        "status": { "http_code": 200 }
    }))
}

/// Starts the mock server and returns its base URL (`http://127.0.0.1:<port>`).
///
/// Routes:
/// - `REGISTRY_PATH`: search and detail pages
/// - `/fail`: always 500
/// - `/empty`: 200 with an empty body
/// - `/get?url=`: JSON envelope relay
/// - `/slow`: answers only after `SLOW_RESPONSE`
pub async fn start_mock_server() -> String {
    let app = Router::new()
        .route(REGISTRY_PATH, get(registry_page))
        .route(
            "/fail",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "relay down") }),
        )
        .route("/empty", get(|| async { "   " }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(SLOW_RESPONSE).await;
                "too late"
            }),
        )
        .route("/get", get(json_relay));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    url
}

/// Registry list page URL on a mock server.
pub fn registry_url(base: &str) -> String {
    format!("{}{}", base, REGISTRY_PATH)
}
