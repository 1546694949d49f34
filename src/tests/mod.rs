pub mod utils;

mod dates_tests;
mod ingest_tests;
mod mapping_tests;
mod router_tests;
