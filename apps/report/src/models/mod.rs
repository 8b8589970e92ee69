pub mod audit;
pub mod citation;
pub mod dates;
