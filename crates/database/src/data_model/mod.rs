pub mod journey;
pub mod poi;
