use maliyetlib::{
    formats::cost_details::total_in_eur,
    model::{CostItem, Currency, RateTable},
    profit,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rates() -> RateTable {
    RateTable::with(dec!(36.4), dec!(1.09))
}

#[test]
fn compute_basic() {
    let items = vec![
        CostItem::new("Makine Alım Bedeli", Currency::Eur, dec!(12000)),
        CostItem::new("Lojistik", Currency::Eur, dec!(500)),
    ];
    let p = profit::compute(&items, dec!(20000), &rates()).expect("compute");
    assert_eq!(p.total_cost, dec!(12500));
    assert_eq!(p.net_profit, dec!(7500));
    assert_eq!(p.margin_percent, dec!(60));
}

#[test]
fn compute_margin_zero_cost() {
    let p = profit::compute(&[], dec!(20000), &rates()).expect("compute");
    assert_eq!(p.total_cost, dec!(0));
    assert_eq!(p.net_profit, dec!(20000));
    assert_eq!(p.margin_percent, dec!(0));
}

#[test]
fn compute_unpriced_form() {
    // целевая цена ещё не введена: прибыль уходит в минус, ошибки нет
    let items = vec![CostItem::new("Gümrük", Currency::Eur, dec!(1000))];
    let p = profit::compute(&items, dec!(0), &rates()).expect("compute");
    assert_eq!(p.net_profit, dec!(-1000));
    assert_eq!(p.margin_percent, dec!(-100));
}

#[test]
fn total_mixed_currencies() {
    let items = vec![
        CostItem::new("Makine", Currency::Usd, dec!(1000)),
        CostItem::new("Nakliye", Currency::Try, dec!(3640)),
    ];
    // 1000/1.09 + 3640/36.4 = 917.43... + 100
    let total = total_in_eur(&items, &rates()).expect("total");
    assert_eq!(total.round_dp(2), dec!(1017.43));
}

#[test]
fn total_is_additive() {
    let a = vec![CostItem::new("Uçak", Currency::Eur, dec!(800))];
    let b = vec![CostItem::new("Otel", Currency::Usd, dec!(545))];
    let mut ab = a.clone();
    ab.extend(b.clone());

    let r = rates();
    let lhs = total_in_eur(&ab, &r).expect("total ab");
    let rhs = total_in_eur(&a, &r).expect("total a") + total_in_eur(&b, &r).expect("total b");
    assert_eq!(lhs, rhs);
}

#[test]
fn total_negative_amount_reduces() {
    // отрицательные суммы не отбрасываются — складываются как есть
    let items = vec![
        CostItem::new("Makine", Currency::Eur, dec!(1000)),
        CostItem::new("İade", Currency::Eur, dec!(-200)),
    ];
    assert_eq!(total_in_eur(&items, &rates()).expect("total"), dec!(800));
}

#[test]
fn total_zero_rows_skip_rate_lookup() {
    // нулевые заготовки формы не требуют ни курса, ни валидной валюты
    let placeholder = CostItem {
        description: "Yeni Kalem".to_string(),
        currency: String::new(),
        amount: Decimal::ZERO,
    };
    assert_eq!(
        total_in_eur(&[placeholder], &RateTable::new()).expect("total"),
        dec!(0)
    );
}

#[test]
fn total_unknown_currency_fails() {
    let items = vec![CostItem {
        description: "Makine".to_string(),
        currency: "GBP".to_string(),
        amount: dec!(100),
    }];
    assert!(total_in_eur(&items, &rates()).is_err());
}

#[test]
fn summarize_invariant_holds() {
    let items = vec![CostItem::new("Makine", Currency::Eur, dec!(12500))];
    let s = profit::summarize(&items, dec!(20000), &rates()).expect("summarize");
    assert_eq!(s.net_profit, s.base_price - s.total_cost);
}
