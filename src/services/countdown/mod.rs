mod error;
mod palette;
mod seeds;
mod service;
mod time_left;

pub use error::CountdownError;
pub use palette::{assign_color, header_gradient, is_palette_color, PALETTE};
pub use seeds::default_counters;
pub use service::CountdownService;
pub use time_left::{
    calculate_time_left, TimeLeft, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
