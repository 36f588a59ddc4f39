//! costDetails: `"<описание>: <валюта> <сумма>, ..."`.
//! Грамматика без экранирования: описание со `", "` или `": "` внутри
//! round-trip не переживёт — это документированное ограничение хранилища.

use rust_decimal::Decimal;

use crate::{
    convert::convert,
    error::{MaliyetError, Result},
    model::{CostItem, Currency, RateTable},
    traits::FieldCodec,
};

/// Фиксированная метка строки финансирования после закрытия продажи.
pub const FINANCING_LABEL: &str = "Finansman Maliyeti";

pub struct CostDetails;

impl FieldCodec for CostDetails {
    type Value = Vec<CostItem>;

    fn encode(items: &Vec<CostItem>) -> String {
        items
            .iter()
            .map(|it| format!("{}: {} {}", it.description, it.currency, it.amount.normalize()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn decode(s: &str) -> Vec<CostItem> {
        if s.is_empty() {
            return Vec::new();
        }
        s.split(", ").map(decode_item).collect()
    }
}

/// Один кусок `"<описание>: <валюта> <сумма>"`. Всё, что не разобралось,
/// остаётся текстом как есть, сумма подменяется нулём.
fn decode_item(chunk: &str) -> CostItem {
    let (description, rest) = match chunk.split_once(": ") {
        Some(p) => p,
        None => {
            // даже "мусор без двоеточий" должен отрисоваться в форме
            return CostItem {
                description: chunk.to_string(),
                currency: String::new(),
                amount: Decimal::ZERO,
            };
        }
    };

    let (currency, amount_text) = match rest.split_once(' ') {
        Some(p) => p,
        None => (rest, ""),
    };

    CostItem {
        description: description.to_string(),
        currency: currency.to_string(),
        amount: amount_text.parse().unwrap_or(Decimal::ZERO),
    }
}

/// Сумма ledger'а в EUR. Нулевые строки-заготовки недозаполненной формы не
/// трогают таблицу курсов; отрицательные суммы складываются как есть.
pub fn total_in_eur(items: &[CostItem], rates: &RateTable) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for it in items {
        if it.amount.is_zero() {
            continue;
        }
        let currency = Currency::try_from(it.currency.as_str())
            .map_err(|_| MaliyetError::InvalidRate(it.currency.clone()))?;
        total += convert(it.amount, currency, Currency::Eur, rates)?;
    }
    Ok(total)
}

/// Дописывает строку финансирования к уже закодированному полю — обычный
/// encode-append, существующий текст не разбирается.
pub fn append_financing(cost_details: &str, amount: Decimal) -> String {
    let entry = CostDetails::encode(&vec![CostItem::new(FINANCING_LABEL, Currency::Eur, amount)]);
    if cost_details.is_empty() {
        entry
    } else {
        format!("{cost_details}, {entry}")
    }
}
