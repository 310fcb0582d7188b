mod assembler;
mod export;

pub use assembler::{daily_report, weekly_report};
pub use export::write_csv;
