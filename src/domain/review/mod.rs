//! Review domain - the normalized review record.

mod record;

pub use record::Review;
