use maliyetlib::{
    formats::{cost_details::CostDetails, price_details::PriceDetails},
    model::{CostItem, Currency, RateTable},
    profit,
    traits::FieldCodec,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: ledger из формы -> две хранимые строки
    let items = vec![
        CostItem::new("Makine Alım Bedeli", Currency::Eur, Decimal::from(12000)),
        CostItem::new("Lojistik", Currency::Usd, Decimal::from(545)),
    ];
    let rates = RateTable::with("36.4".parse()?, "1.09".parse()?);

    let summary = profit::summarize(&items, Decimal::from(20000), &rates)?;
    println!("{}", CostDetails::encode(&items));
    println!("{}", PriceDetails::encode(&summary));
    Ok(())
}
