use clap::{Parser, ValueEnum};
use maliyetlib::{
    error::{MaliyetError, Result},
    formats::{
        cost_details::{self, CostDetails},
        price_details::{self, PriceDetails},
    },
    model::RateTable,
    profit,
    traits::FieldCodec,
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Op {
    /// costDetails -> JSON со строками затрат
    DecodeCost,
    /// priceDetails -> JSON со сводкой
    DecodePrice,
    /// costDetails + курсы -> итог в EUR
    Total,
    /// costDetails + курсы + целевая цена -> закодированный priceDetails
    Compute,
    /// priceDetails + финансирование -> правленый priceDetails
    Amend,
    /// costDetails + финансирование -> costDetails со строкой финансирования
    AppendFinancing,
}

#[derive(Parser, Debug)]
#[command(name="maliyet", version, about="Работа с хранимыми полями costDetails/priceDetails")]
struct Cli {
    /// Входной файл с закодированным полем (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Операция
    #[arg(long="op", value_enum)]
    op: Op,

    /// CSV с курсами (currency,rate[,date])
    #[arg(long="rates")]
    rates: Option<String>,

    /// Целевая цена продажи в EUR
    #[arg(long="target-price")]
    target_price: Option<Decimal>,

    /// Финансовые издержки в EUR
    #[arg(long="financing")]
    financing: Option<Decimal>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // reader
    let mut reader: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut field = String::new();
    reader.read_to_string(&mut field)?;
    let field = field.trim_end_matches(&['\r', '\n'][..]);

    let out = match cli.op {
        Op::DecodeCost => serde_json::to_string_pretty(&CostDetails::decode(field))
            .map_err(MaliyetError::from)?,
        Op::DecodePrice => serde_json::to_string_pretty(&PriceDetails::decode(field))
            .map_err(MaliyetError::from)?,
        Op::Total => {
            let rates = load_rates(cli.rates.as_deref())?;
            let items = CostDetails::decode(field);
            cost_details::total_in_eur(&items, &rates)?.normalize().to_string()
        }
        Op::Compute => {
            let rates = load_rates(cli.rates.as_deref())?;
            let target = cli
                .target_price
                .ok_or(MaliyetError::Unsupported("compute needs --target-price"))?;
            let items = CostDetails::decode(field);
            PriceDetails::encode(&profit::summarize(&items, target, &rates)?)
        }
        Op::Amend => {
            let f = cli
                .financing
                .ok_or(MaliyetError::Unsupported("amend needs --financing"))?;
            price_details::amend(field, f)
        }
        Op::AppendFinancing => {
            let f = cli
                .financing
                .ok_or(MaliyetError::Unsupported("append-financing needs --financing"))?;
            cost_details::append_financing(field, f)
        }
    };

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    writeln!(writer, "{out}")?;
    writer.flush().map_err(MaliyetError::from)
}

fn load_rates(path: Option<&str>) -> Result<RateTable> {
    let path = path.ok_or(MaliyetError::Unsupported("operation needs --rates"))?;
    RateTable::from_csv(BufReader::new(File::open(path)?))
}
