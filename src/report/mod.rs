pub mod narrative;
