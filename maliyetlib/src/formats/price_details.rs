//! priceDetails: `"Base price: <a>, Total cost: <b>, Net profit: <c>"`.
//! Читаются и канонические ключи, и турецкие legacy-алиасы; пишется всегда
//! канонический вид в фиксированном порядке.

use regex::Regex;
use rust_decimal::Decimal;

use crate::{model::PriceSummary, traits::FieldCodec};

const BASE_KEYS: [&str; 2] = ["Base price", "Satış Fiyatı"];
const COST_KEYS: [&str; 2] = ["Total cost", "Toplam Maliyet"];
const PROFIT_KEYS: [&str; 2] = ["Net profit", "Net Kâr"];

pub struct PriceDetails;

impl FieldCodec for PriceDetails {
    type Value = PriceSummary;

    fn encode(s: &PriceSummary) -> String {
        format!(
            "Base price: {}, Total cost: {}, Net profit: {}",
            s.base_price.normalize(),
            s.total_cost.normalize(),
            s.net_profit.normalize()
        )
    }

    fn decode(s: &str) -> PriceSummary {
        PriceSummary {
            base_price: find_amount(s, &BASE_KEYS).unwrap_or(Decimal::ZERO),
            total_cost: find_amount(s, &COST_KEYS).unwrap_or(Decimal::ZERO),
            net_profit: find_amount(s, &PROFIT_KEYS).unwrap_or(Decimal::ZERO),
        }
    }
}

/// Толерантный поиск `<ключ>: <число>` по любому из ключей поля.
/// None — ключа в строке нет (или число не влезло в Decimal).
fn find_amount(s: &str, keys: &[&str]) -> Option<Decimal> {
    for key in keys {
        let pat = format!(r"{}\s*:\s*(-?\d+(?:\.\d+)?)", regex::escape(key));
        let re = Regex::new(&pat).ok()?;
        if let Some(caps) = re.captures(s) {
            if let Ok(v) = caps[1].parse() {
                return Some(v);
            }
        }
    }
    None
}

/// Правка уже закодированной сводки без исходного ledger'а: финансирование
/// прибавляется к затратам, прибыль пересчитывается. Если в строке не нашлось
/// ни цены, ни затрат — править нечего, текст возвращается как был.
pub fn amend(s: &str, financing_cost_eur: Decimal) -> String {
    let base = find_amount(s, &BASE_KEYS);
    let cost = find_amount(s, &COST_KEYS);
    if base.is_none() && cost.is_none() {
        return s.to_string();
    }

    let base_price = base.unwrap_or(Decimal::ZERO);
    let total_cost = cost.unwrap_or(Decimal::ZERO) + financing_cost_eur;
    PriceDetails::encode(&PriceSummary {
        base_price,
        total_cost,
        net_profit: base_price - total_cost,
    })
}
