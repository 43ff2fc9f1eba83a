use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Alquiler de Vehículos P2P - API en memoria");
    info!("=============================================");

    let config = EnvironmentConfig::from_env();
    if config.vision_api_key.is_none() {
        info!("⚠️ VISION_API_KEY no configurada: las imágenes se aceptan sin clasificar (fail-open)");
    }

    let app_state = AppState::new(config.clone());
    info!("👤 Usuario demo sembrado: {} (créditos: {})", app_state.store.demo_user_id, config.demo_credits);

    let app = vehicle_rental::build_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Publicar vehículo");
    info!("   GET  /api/vehicle - Listar/buscar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id/availability - Cambiar disponibilidad");
    info!("📅 Endpoints - Booking:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Mis reservas");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   POST /api/booking/:id/cancel - Cancelar (reembolso 90% en créditos)");
    info!("   POST /api/booking/:id/start - Iniciar alquiler");
    info!("   POST /api/booking/:id/finish - Finalizar alquiler");
    info!("   POST /api/booking/:id/review - Dejar reseña");
    info!("👤 Endpoints - User:");
    info!("   GET  /api/user/me - Perfil con saldos");
    info!("   GET  /api/user/me/wallet-history - Historial de billetera");
    info!("🖼️ Endpoints - Verification:");
    info!("   POST /api/verification/image - Subir y verificar imagen");
    info!("   GET  /api/verification/image/:id - Obtener imagen aceptada");
    info!("   POST /api/verification/biometric - Chequeo biométrico documento/selfie");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
