pub mod aggregate;
pub mod stage_dates;
