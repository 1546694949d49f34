pub mod classify;
pub mod dates;
pub mod mapping;
pub mod record;
