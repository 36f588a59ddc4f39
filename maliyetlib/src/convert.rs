//! Конвертация сумм через EUR-pivot по таблице курсов вызывающего.
//! Никакого внешнего состояния: таблица — обычный аргумент.

use rust_decimal::Decimal;

use crate::{
    error::{MaliyetError, Result},
    model::{Currency, RateTable},
};

/// Курс, на который можно делить/умножать. Отсутствие и ноль — ошибка сразу:
/// молча получить 0 или бесконечность в итогах хуже, чем упасть.
fn usable_rate(rates: &RateTable, currency: Currency) -> Result<Decimal> {
    match rates.per_eur(currency) {
        Some(r) if !r.is_zero() => Ok(r),
        _ => Err(MaliyetError::InvalidRate(currency.code().to_string())),
    }
}

/// `from == to` — сумма возвращается как есть, без округления.
/// Иначе: amount / per_eur(from) -> EUR -> * per_eur(to).
pub fn convert(
    amount: Decimal,
    from: Currency,
    to: Currency,
    rates: &RateTable,
) -> Result<Decimal> {
    if from == to {
        return Ok(amount);
    }

    let eur = if from == Currency::Eur {
        amount
    } else {
        amount / usable_rate(rates, from)?
    };

    if to == Currency::Eur {
        Ok(eur)
    } else {
        Ok(eur * usable_rate(rates, to)?)
    }
}
