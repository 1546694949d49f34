pub mod card;

pub use card::{crew_card, kpi_card};
