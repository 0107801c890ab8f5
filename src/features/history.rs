use crate::dataset::{Column, Dataset};
use crate::error::DatasetError;

/// `participant_status` value marking an accepted booking.
const ACCEPTED_STATUS: &str = "ACCEPTED";

/// Add a `driver_completed_bookings` column: for each record, the number
/// of that driver's strictly-earlier records with an accepted status.
///
/// The count for a record never includes the record itself, so a record's
/// own outcome can never leak into its feature value. Drivers with no
/// prior records get 0.
///
/// Requires the Str columns `driver_id`, `event_timestamp` and
/// `participant_status`. Timestamps are compared as strings; ISO-8601
/// values in one fixed-width format sort chronologically.
///
/// # Returns
///
/// A new dataset whose rows are sorted by `(driver_id, event_timestamp)`
/// ascending — the caller's row order is not preserved. Records tied on
/// both keys keep their input order (stable sort) and are counted in that
/// order: the first of two tied records does not see the other's
/// acceptance.
pub fn driver_historical_completed_bookings(df: &Dataset) -> Result<Dataset, DatasetError> {
    let driver_ids = df.str_column("driver_id")?;
    let timestamps = df.str_column("event_timestamp")?;
    let statuses = df.str_column("participant_status")?;

    let mut order: Vec<usize> = (0..df.n_rows()).collect();
    order.sort_by(|&a, &b| {
        driver_ids[a]
            .cmp(&driver_ids[b])
            .then_with(|| timestamps[a].cmp(&timestamps[b]))
    });

    // Running per-driver acceptance count over the sorted rows; each row
    // takes the count before its own contribution.
    let mut counts: Vec<Option<i64>> = Vec::with_capacity(order.len());
    let mut current_driver: Option<&str> = None;
    let mut running = 0i64;
    for &row in &order {
        if current_driver != Some(driver_ids[row].as_str()) {
            current_driver = Some(driver_ids[row].as_str());
            running = 0;
        }
        counts.push(Some(running));
        if statuses[row] == ACCEPTED_STATUS {
            running += 1;
        }
    }

    log::debug!(
        "Computed historical acceptance counts for {} rows",
        counts.len()
    );

    let mut out = df.select_rows(&order);
    out.insert_column("driver_completed_bookings", Column::Int(counts))?;
    Ok(out)
}
