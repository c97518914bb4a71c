use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive rate schedule.
///
/// Brackets are expressed as cumulative upper bounds: a row taxes the slice
/// of income between the previous row's bound and `max_income` at
/// `tax_rate`. The final row carries `None` and absorbs everything above the
/// last bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

/// The Thai personal income tax rate schedule.
///
/// | Upper bound (cumulative) | Marginal rate |
/// |--------------------------|---------------|
/// | 150,000                  | 0%            |
/// | 300,000                  | 5%            |
/// | 500,000                  | 10%           |
/// | 750,000                  | 15%           |
/// | 1,000,000                | 20%           |
/// | 2,000,000                | 25%           |
/// | 5,000,000                | 30%           |
/// | open                     | 35%           |
pub fn thai_schedule() -> Vec<TaxBracket> {
    let row = |max: Option<i64>, rate_pct: i64| TaxBracket {
        max_income: max.map(Decimal::from),
        tax_rate: Decimal::new(rate_pct, 2),
    };

    vec![
        row(Some(150_000), 0),
        row(Some(300_000), 5),
        row(Some(500_000), 10),
        row(Some(750_000), 15),
        row(Some(1_000_000), 20),
        row(Some(2_000_000), 25),
        row(Some(5_000_000), 30),
        row(None, 35),
    ]
}
