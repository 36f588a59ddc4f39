//! Загрузка таблицы курсов из CSV-фида: заголовки currency,rate[,date].
//! Политика обновления/устаревания фида — забота источника, не этой либы.

use std::io::BufRead;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::{
    error::{MaliyetError, Result},
    model::{Currency, RateTable},
};

#[derive(serde::Deserialize)]
struct RateRow {
    currency: String,
    rate: String,
    date: Option<String>,
}

impl RateTable {
    pub fn from_csv<R: BufRead>(r: R) -> Result<RateTable> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut table = RateTable::new();

        for rec in rdr.deserialize::<RateRow>() {
            let row = rec?;
            let currency = Currency::try_from(row.currency.as_str())?;
            let rate: Decimal = row
                .rate
                .trim()
                .parse()
                .map_err(|e| MaliyetError::Parse(format!("rate {}: {e}", row.currency)))?;

            // строка про EUR из фида принимается, но значение игнорируется
            table.set(currency, rate);

            if table.as_of.is_none() {
                if let Some(d) = row.date.as_deref() {
                    table.as_of = Some(
                        NaiveDate::parse_from_str(d, "%Y-%m-%d")
                            .map_err(|e| MaliyetError::Parse(format!("date: {e}")))?,
                    );
                }
            }
        }

        Ok(table)
    }
}
