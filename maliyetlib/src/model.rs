//! Доменные модели — нормализованный слой между формой и хранимыми строками.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MaliyetError, Result};

/// Валюты, по которым бывают курсы. В самом ledger'е валюта остаётся
/// свободным текстом — см. `CostItem::currency`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Try,
    Usd,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Try => "TRY",
            Currency::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = MaliyetError;

    fn try_from(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "TRY" => Ok(Currency::Try),
            "USD" => Ok(Currency::Usd),
            other => Err(MaliyetError::Parse(format!("currency: {other}"))),
        }
    }
}

/// Одна строка затрат. `currency` — строка как в хранимом тексте:
/// битое значение должно доехать до формы как есть, чтобы его было видно.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostItem {
    pub description: String,
    pub currency: String,
    pub amount: Decimal,
}

impl CostItem {
    pub fn new(description: impl Into<String>, currency: Currency, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            currency: currency.code().to_string(),
            amount,
        }
    }
}

/// Три производных показателя проекта, все в EUR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceSummary {
    pub base_price: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}

/// Курсы «единиц валюты за 1 EUR». EUR — фиксированный pivot:
/// для него курс всегда ровно 1, что бы ни прислал источник.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RateTable {
    rates: BTreeMap<Currency, Decimal>,
    /// Дата фида, если источник её сообщил.
    pub as_of: Option<NaiveDate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(try_per_eur: Decimal, usd_per_eur: Decimal) -> Self {
        let mut t = Self::new();
        t.set(Currency::Try, try_per_eur);
        t.set(Currency::Usd, usd_per_eur);
        t
    }

    /// Запись для EUR игнорируется — pivot не перекрывается фидом.
    pub fn set(&mut self, currency: Currency, per_eur: Decimal) {
        if currency != Currency::Eur {
            self.rates.insert(currency, per_eur);
        }
    }

    pub fn per_eur(&self, currency: Currency) -> Option<Decimal> {
        if currency == Currency::Eur {
            return Some(Decimal::ONE);
        }
        self.rates.get(&currency).copied()
    }
}
