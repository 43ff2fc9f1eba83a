//! Aritmética del libro mayor de reservas y créditos
//!
//! Funciones puras sobre montos enteros de moneda. Las invariantes:
//! la deducción de créditos nunca supera el saldo ni el precio, las dos
//! porciones del pago siempre suman el total, y el reembolso por
//! cancelación es exactamente el 90% del total (el resto queda como
//! cargo administrativo).

use chrono::NaiveDate;

use crate::models::vehicle::DiscountTiers;

/// División del pago entre créditos y tarjeta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub credit_deduction: i64,
    pub card_charge: i64,
}

/// Calcular la división del pago.
///
/// `credit_deduction = apply_credits ? min(credits, price) : 0`
/// `card_charge = price - credit_deduction`
pub fn split_payment(credits: i64, price: i64, apply_credits: bool) -> PaymentSplit {
    let credit_deduction = if apply_credits {
        credits.min(price).max(0)
    } else {
        0
    };
    PaymentSplit {
        credit_deduction,
        card_charge: price - credit_deduction,
    }
}

/// Reembolso fijo del 90% al cancelar, en aritmética entera
pub fn refund_credits(total_price: i64) -> i64 {
    total_price * 9 / 10
}

/// Cotizar el total de un alquiler por duración.
///
/// Los campos de descuento por 7/15/30+ días del vehículo se aplican
/// como reducción porcentual entera sobre la mejor escala alcanzada.
/// Un alquiler de un solo día cuesta exactamente `price_per_day`.
pub fn quote_total(
    price_per_day: i64,
    discounts: Option<&DiscountTiers>,
    start: NaiveDate,
    end: NaiveDate,
) -> i64 {
    let days = (end - start).num_days().max(1);
    // Aritmética saturante: un rango de fechas o precio extremo no
    // debe tumbar el proceso
    let base = days.saturating_mul(price_per_day);

    let pct = discounts
        .map(|d| {
            if days >= 30 {
                d.monthly.unwrap_or(0)
            } else if days >= 15 {
                d.biweekly.unwrap_or(0)
            } else if days >= 7 {
                d.weekly.unwrap_or(0)
            } else {
                0
            }
        })
        .unwrap_or(0)
        .min(100) as i64;

    base.saturating_sub(base.saturating_mul(pct) / 100)
}
