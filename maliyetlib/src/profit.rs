//! Расчёт прибыли: агрегация ledger'а + целевая цена -> сводка.

use rust_decimal::Decimal;

use crate::{
    error::Result,
    formats::cost_details::total_in_eur,
    model::{CostItem, PriceSummary, RateTable},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profit {
    pub total_cost: Decimal,
    pub net_profit: Decimal,
    pub margin_percent: Decimal,
}

/// Маржа считается от затрат: `net_profit / total_cost * 100`; при нулевых
/// затратах — 0. `target_price <= 0` — легальный ввод недозаполненной формы,
/// а не ошибка: прибыль и маржа просто уходят в минус.
pub fn compute(items: &[CostItem], target_price: Decimal, rates: &RateTable) -> Result<Profit> {
    let total_cost = total_in_eur(items, rates)?;
    let net_profit = target_price - total_cost;
    let margin_percent = if total_cost > Decimal::ZERO {
        net_profit / total_cost * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    Ok(Profit {
        total_cost,
        net_profit,
        margin_percent,
    })
}

/// Свежая сводка; инвариант `net_profit == base_price - total_cost`
/// выполняется по построению.
pub fn summarize(
    items: &[CostItem],
    target_price: Decimal,
    rates: &RateTable,
) -> Result<PriceSummary> {
    let p = compute(items, target_price, rates)?;
    Ok(PriceSummary {
        base_price: target_price,
        total_cost: p.total_cost,
        net_profit: p.net_profit,
    })
}
