/// Border guide computation from a scaled document.
pub mod compute;
