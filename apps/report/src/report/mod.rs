// Employer report view model: narrative analysis, quote feed, data quality,
// and the sparse-data fallback.

pub mod assemble;
pub mod handlers;
pub mod quality;
pub mod quotes;
