//! Feature transforms over driver-booking event datasets.
//!
//! Every transform takes a borrowed dataset and returns a new one with a
//! single derived column appended, so callers never observe mutation of
//! their input. `driver_historical_completed_bookings` additionally
//! returns its rows re-sorted; see that function's contract.
pub mod distance;
pub mod history;
pub mod time;

pub use distance::driver_distance_to_pickup;
pub use history::driver_historical_completed_bookings;
pub use time::hour_of_day;
