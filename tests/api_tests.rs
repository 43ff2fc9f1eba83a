use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::state::AppState;

// Función helper para crear la app de test con el almacén sembrado
fn create_test_app(demo_credits: i64) -> Router {
    let mut config = EnvironmentConfig::for_tests();
    config.demo_credits = demo_credits;
    vehicle_rental::build_router(AppState::new(config))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn publish_vehicle(app: &Router, price_per_day: i64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/vehicle",
        Some(json!({
            "brand": "Chevrolet",
            "model": "Onix",
            "year": 2023,
            "category": "sedan",
            "price_per_day": price_per_day,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn book_vehicle(app: &Router, vehicle_id: &str, apply_credits: bool) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/booking",
        Some(json!({
            "vehicle_id": vehicle_id,
            "start_date": "2025-08-18",
            "end_date": "2025-08-18",
            "apply_credits": apply_credits,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(0);
    let (status, body) = send(&app, "GET", "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "in_memory");
}

#[tokio::test]
async fn test_reserva_con_creditos_aplica_la_division_del_pago() {
    // credits=150000, price=450000 ⇒ deducción 150000, tarjeta 300000
    let app = create_test_app(150_000);
    let vehicle_id = publish_vehicle(&app, 450_000).await;

    let booking = book_vehicle(&app, &vehicle_id, true).await;
    assert_eq!(booking["total_price"], 450_000);
    assert_eq!(booking["credit_deduction"], 150_000);
    assert_eq!(booking["card_charge"], 300_000);
    assert_eq!(booking["status"], "confirmed");

    let (_, me) = send(&app, "GET", "/api/user/me", None).await;
    assert_eq!(me["credits"], 0);
}

#[tokio::test]
async fn test_cancelacion_reembolsa_el_90_por_ciento_en_creditos() {
    let app = create_test_app(0);
    let vehicle_id = publish_vehicle(&app, 1_900_000).await;
    let booking = book_vehicle(&app, &vehicle_id, false).await;
    let booking_id = booking["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/cancel", booking_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");

    let (_, me) = send(&app, "GET", "/api/user/me", None).await;
    assert_eq!(me["credits"], 1_710_000);

    // Cancelled es terminal: segunda cancelación rechazada
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/cancel", booking_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_ciclo_completo_con_resena_unica() {
    let app = create_test_app(0);
    let vehicle_id = publish_vehicle(&app, 300_000).await;
    let booking = book_vehicle(&app, &vehicle_id, false).await;
    let booking_id = booking["id"].as_str().unwrap().to_string();

    // Reseña antes de finalizar: rechazada
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/review", booking_id),
        Some(json!({ "rating": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Confirmed → InProgress → Finished
    let (status, _) = send(&app, "POST", &format!("/api/booking/{}/start", booking_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) =
        send(&app, "POST", &format!("/api/booking/{}/finish", booking_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "finished");

    // El propietario (usuario demo) recibe sus ganancias
    let (_, me) = send(&app, "GET", "/api/user/me", None).await;
    assert_eq!(me["wallet_balance"], 300_000);

    // Primera reseña aceptada, segunda rechazada
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/review", booking_id),
        Some(json!({ "rating": 4, "comment": "Muy buen carro" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["review"]["rating"], 4);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/review", booking_id),
        Some(json!({ "rating": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Finished es terminal
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/cancel", booking_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_calificacion_invalida_es_error_de_validacion() {
    let app = create_test_app(0);
    let vehicle_id = publish_vehicle(&app, 100_000).await;
    let booking = book_vehicle(&app, &vehicle_id, false).await;
    let booking_id = booking["id"].as_str().unwrap().to_string();
    send(&app, "POST", &format!("/api/booking/{}/finish", booking_id), None).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/booking/{}/review", booking_id),
        Some(json!({ "rating": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_precio_diario_desmedido_se_rechaza() {
    let app = create_test_app(0);

    let (status, body) = send(
        &app,
        "POST",
        "/api/vehicle",
        Some(json!({
            "brand": "Chevrolet",
            "model": "Onix",
            "year": 2023,
            "category": "sedan",
            "price_per_day": 2_000_000_000i64,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_vehiculo_no_disponible_no_se_puede_reservar() {
    let app = create_test_app(0);
    let vehicle_id = publish_vehicle(&app, 100_000).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/vehicle/{}/availability", vehicle_id),
        Some(json!({ "is_available": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/api/booking",
        Some(json!({
            "vehicle_id": vehicle_id,
            "start_date": "2025-08-18",
            "end_date": "2025-08-18",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_historial_de_billetera_registra_los_movimientos() {
    let app = create_test_app(500_000);
    let vehicle_id = publish_vehicle(&app, 300_000).await;
    let booking = book_vehicle(&app, &vehicle_id, true).await;
    let booking_id = booking["id"].as_str().unwrap();

    send(&app, "POST", &format!("/api/booking/{}/cancel", booking_id), None).await;

    let (status, history) = send(&app, "GET", "/api/user/me/wallet-history", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["total"], 2);

    let movements = history["movements"].as_array().unwrap();
    assert!(movements
        .iter()
        .any(|m| m["kind"] == "booking_payment" && m["amount"] == -300_000));
    assert!(movements
        .iter()
        .any(|m| m["kind"] == "cancellation_refund" && m["amount"] == 270_000));
}

#[tokio::test]
async fn test_jpeg_de_6_mb_se_rechaza_con_mensaje_de_tamano() {
    let app = create_test_app(0);
    let six_mb = vec![0u8; 6 * 1024 * 1024];

    let (status, body) = send(
        &app,
        "POST",
        "/api/verification/image",
        Some(json!({
            "file_name": "carro.jpg",
            "mime_type": "image/jpeg",
            "data_base64": BASE64.encode(&six_mb),
            "kind": "vehicle",
        })),
    )
    .await;

    // El rechazo de la compuerta no es un error HTTP: es un estado terminal
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "error");
    assert!(body["message"].as_str().unwrap().contains("5 MB"));
}

#[tokio::test]
async fn test_subida_fail_open_y_descarga_de_la_imagen() {
    // Sin VISION_API_KEY el clasificador no se invoca y la subida se acepta
    let app = create_test_app(0);

    let (status, body) = send(
        &app,
        "POST",
        "/api/verification/image",
        Some(json!({
            "file_name": "carro.png",
            "mime_type": "image/png",
            "data_base64": BASE64.encode(b"contenido de la imagen"),
            "kind": "vehicle",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");

    let url = body["url"].as_str().unwrap();
    let request = Request::builder().uri(url).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
}

#[tokio::test]
async fn test_chequeo_biometrico_marca_al_usuario_verificado() {
    let app = create_test_app(0);

    let upload = |kind: &'static str, name: &'static str| {
        let app = app.clone();
        async move {
            let (_, body) = send(
                &app,
                "POST",
                "/api/verification/image",
                Some(json!({
                    "file_name": name,
                    "mime_type": "image/jpeg",
                    "data_base64": BASE64.encode(name.as_bytes()),
                    "kind": kind,
                })),
            )
            .await;
            body["media_id"].as_str().unwrap().to_string()
        }
    };

    let document_id = upload("document", "cedula.jpg").await;
    let selfie_id = upload("face", "selfie.jpg").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/verification/biometric",
        Some(json!({
            "document_media_id": document_id,
            "selfie_media_id": selfie_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_verified"], true);

    let (_, me) = send(&app, "GET", "/api/user/me", None).await;
    assert_eq!(me["is_verified"], true);
}

#[tokio::test]
async fn test_biometria_con_medios_desconocidos_es_bad_request() {
    let app = create_test_app(0);

    let (status, _) = send(
        &app,
        "POST",
        "/api/verification/biometric",
        Some(json!({
            "document_media_id": "00000000-0000-0000-0000-000000000001",
            "selfie_media_id": "00000000-0000-0000-0000-000000000002",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_busqueda_de_vehiculos_con_filtros() {
    let app = create_test_app(0);
    publish_vehicle(&app, 100_000).await;
    publish_vehicle(&app, 900_000).await;

    let (status, body) = send(&app, "GET", "/api/vehicle?max_price=500000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/vehicle?search=onix", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/vehicle?search=ferrari", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
