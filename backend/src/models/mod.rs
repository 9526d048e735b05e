pub mod granularity;
pub mod locale;
pub mod period;

pub use granularity::*;
pub use locale::*;
pub use period::*;
