use maliyetlib::{formats::price_details::PriceDetails, model::PriceSummary, traits::FieldCodec};
use rust_decimal_macros::dec;

#[test]
fn price_encode_fixed_grammar() {
    let s = PriceSummary {
        base_price: dec!(20000),
        total_cost: dec!(12500),
        net_profit: dec!(7500),
    };
    assert_eq!(
        PriceDetails::encode(&s),
        "Base price: 20000, Total cost: 12500, Net profit: 7500"
    );
}

#[test]
fn price_roundtrip() {
    let s = PriceSummary {
        base_price: dec!(17350.5),
        total_cost: dec!(9000.25),
        net_profit: dec!(8350.25),
    };
    assert_eq!(PriceDetails::decode(&PriceDetails::encode(&s)), s);
}

#[test]
fn price_decode_turkish_aliases() {
    // legacy-ключи читаются, отсутствующий третий — ноль
    let s = PriceDetails::decode("Satış Fiyatı: 15000, Toplam Maliyet: 9000");
    assert_eq!(s.base_price, dec!(15000));
    assert_eq!(s.total_cost, dec!(9000));
    assert_eq!(s.net_profit, dec!(0));
}

#[test]
fn price_decode_garbage_is_zeroed() {
    let s = PriceDetails::decode("satış tamamlandı, ödeme bekleniyor");
    assert_eq!(s.base_price, dec!(0));
    assert_eq!(s.total_cost, dec!(0));
    assert_eq!(s.net_profit, dec!(0));
}

#[test]
fn price_decode_negative_profit() {
    let s = PriceDetails::decode("Base price: 10000, Total cost: 12500, Net profit: -2500");
    assert_eq!(s.net_profit, dec!(-2500));
}
