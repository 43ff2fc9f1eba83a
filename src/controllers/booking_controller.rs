use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, ReviewRequest};
use crate::dto::ApiResponse;
use crate::models::booking::{Booking, BookingStatus, Review};
use crate::models::user::{CreditMovement, MovementKind};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::ledger::{quote_total, refund_credits, split_payment};
use crate::state::Store;
use crate::utils::errors::{bad_request_error, conflict_error, not_found_error, AppError};
use crate::utils::validation::validate_date_range;

pub struct BookingController {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
    /// Retardo fijo que simula la ida y vuelta del cobro con tarjeta
    payment_delay_ms: u64,
}

impl BookingController {
    pub fn new(store: Store, payment_delay_ms: u64) -> Self {
        Self {
            bookings: BookingRepository::new(store.clone()),
            vehicles: VehicleRepository::new(store.clone()),
            users: UserRepository::new(store),
            payment_delay_ms,
        }
    }

    /// Crear una reserva con división del pago entre créditos y tarjeta.
    ///
    /// No se toma ningún bloqueo de inventario: dos reservas del mismo
    /// vehículo en fechas solapadas son posibles (alcance de un solo
    /// usuario).
    pub async fn create(
        &self,
        renter_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        validate_date_range(request.start_date, request.end_date)
            .map_err(|msg| bad_request_error(&msg))?;

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        if !vehicle.is_available {
            return Err(conflict_error("El vehículo no está disponible"));
        }

        let renter = self
            .users
            .find_by_id(renter_id)
            .await
            .ok_or_else(|| not_found_error("User", &renter_id.to_string()))?;

        let total_price = quote_total(
            vehicle.price_per_day,
            vehicle.discounts.as_ref(),
            request.start_date,
            request.end_date,
        );
        let split = split_payment(renter.credits, total_price, request.apply_credits);

        let booking_id = Uuid::new_v4();
        if split.credit_deduction > 0 {
            let applied = self
                .users
                .deduct_credits(renter_id, split.credit_deduction)
                .await?;
            self.users
                .record_movement(CreditMovement::new(
                    renter_id,
                    -applied,
                    MovementKind::BookingPayment,
                    Some(booking_id),
                ))
                .await;
        }

        // Simula la ida y vuelta del procesador de pagos
        if split.card_charge > 0 && self.payment_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.payment_delay_ms)).await;
        }

        let booking = Booking {
            id: booking_id,
            vehicle_id: vehicle.id,
            renter_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_price,
            credit_deduction: split.credit_deduction,
            card_charge: split.card_charge,
            status: BookingStatus::Confirmed,
            vehicle_snapshot: vehicle.snapshot(),
            review: None,
            created_at: Utc::now(),
        };
        let booking = self.bookings.insert(booking).await;

        log::info!(
            "📅 Reserva {} confirmada: total={} créditos={} tarjeta={}",
            booking.id,
            booking.total_price,
            booking.credit_deduction,
            booking.card_charge
        );

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva confirmada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;
        Ok(booking.into())
    }

    pub async fn list_by_renter(&self, renter_id: Uuid) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.bookings.list_by_renter(renter_id).await;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Cancelar: solo desde Pending/Confirmed. Reembolsa el 90% del
    /// total en créditos; el resto queda como cargo administrativo.
    pub async fn cancel(&self, id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if !booking.status.can_cancel() {
            return Err(conflict_error(
                "Solo se puede cancelar una reserva pendiente o confirmada",
            ));
        }

        let refund = refund_credits(booking.total_price);
        self.users.add_credits(booking.renter_id, refund).await?;
        self.users
            .record_movement(CreditMovement::new(
                booking.renter_id,
                refund,
                MovementKind::CancellationRefund,
                Some(booking.id),
            ))
            .await;

        let booking = self.bookings.set_status(id, BookingStatus::Cancelled).await?;
        log::info!("↩️ Reserva {} cancelada, reembolso en créditos: {}", id, refund);

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva cancelada. El 90% del total fue abonado a tus créditos".to_string(),
        ))
    }

    /// Retiro del vehículo: Confirmed → InProgress
    pub async fn start(&self, id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if !booking.status.can_start() {
            return Err(conflict_error("Solo se puede iniciar una reserva confirmada"));
        }

        let booking = self.bookings.set_status(id, BookingStatus::InProgress).await?;
        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Alquiler iniciado".to_string(),
        ))
    }

    /// Finalizar: solo desde Confirmed/InProgress. Acredita el total a
    /// la billetera del propietario.
    pub async fn finish(&self, id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if !booking.status.can_finish() {
            return Err(conflict_error(
                "Solo se puede finalizar una reserva confirmada o en curso",
            ));
        }

        let owner_id = self
            .vehicles
            .find_by_id(booking.vehicle_id)
            .await
            .map(|v| v.owner_id);
        if let Some(owner_id) = owner_id {
            self.users.add_earnings(owner_id, booking.total_price).await?;
            self.users
                .record_movement(CreditMovement::new(
                    owner_id,
                    booking.total_price,
                    MovementKind::OwnerEarning,
                    Some(booking.id),
                ))
                .await;
        }

        let booking = self.bookings.set_status(id, BookingStatus::Finished).await?;
        log::info!("🏁 Reserva {} finalizada", id);

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Alquiler finalizado exitosamente".to_string(),
        ))
    }

    /// Adjuntar la reseña: una sola vez y solo con la reserva finalizada
    pub async fn attach_review(
        &self,
        id: Uuid,
        request: ReviewRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request.validate()?;

        let booking = self
            .bookings
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if !booking.can_attach_review() {
            return Err(conflict_error(
                "La reseña solo se puede dejar una vez y con el alquiler finalizado",
            ));
        }

        let review = Review {
            rating: request.rating,
            comment: request.comment,
            created_at: Utc::now(),
        };
        let booking = self.bookings.attach_review(id, review).await?;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "¡Gracias por tu reseña!".to_string(),
        ))
    }
}
