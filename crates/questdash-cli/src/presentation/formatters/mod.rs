mod number;
mod time;

pub use number::number_or_dash;
pub use time::{format_date, format_timestamp};
