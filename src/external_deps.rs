pub use chrono::{DateTime, Local, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use num_format::{Locale, ToFormattedString};
pub use once_cell::sync::Lazy as once_lazy;
pub use thiserror::Error;
