use chrono::{Months, NaiveDate};

use crate::errors::SummaryError;
use crate::models::{Horizon, PriceTable, SummaryResult};

/// Earliest date kept for `horizon`: the last date in the table minus the
/// horizon's calendar months, clamped to the end of shorter months
/// (2020-03-31 minus one month is 2020-02-29).
///
/// `None` when every row is kept, i.e. for `Horizon::All` or an empty table.
pub fn cutoff(table: &PriceTable, horizon: Horizon) -> Option<NaiveDate> {
    let months = horizon.months()?;
    let max_date = table.max_date()?;
    Some(
        max_date
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Rows inside the horizon window, in table order.
pub fn filter(table: &PriceTable, horizon: Horizon) -> PriceTable {
    match cutoff(table, horizon) {
        Some(date) => table.since(date),
        None => table.clone(),
    }
}

/// Summary statistics for the rows inside `horizon`.
///
/// Change figures compare the last two filtered rows, so fewer than two rows
/// is an error rather than a partial result.
pub fn summarize(table: &PriceTable, horizon: Horizon) -> Result<SummaryResult, SummaryError> {
    let window_start = cutoff(table, horizon);
    let filtered = filter(table, horizon);

    let (previous, latest) = match filtered.points() {
        [.., previous, latest] => (previous, latest),
        rows => return Err(SummaryError::InsufficientData { rows: rows.len() }),
    };

    let latest_close = latest.close;
    let previous_close = previous.close;
    if previous_close == 0.0 {
        return Err(SummaryError::DivisionByZero);
    }

    let absolute_change = latest_close - previous_close;
    let percent_change = absolute_change / previous_close * 100.0;

    let (period_high, period_low) = filtered.points().iter().fold(
        (f64::NEG_INFINITY, f64::INFINITY),
        |(high, low), p| (high.max(p.high), low.min(p.low)),
    );

    Ok(SummaryResult {
        horizon,
        cutoff: window_start,
        filtered_table: filtered,
        latest_close,
        previous_close,
        absolute_change,
        percent_change,
        period_high,
        period_low,
    })
}
