pub mod analytes;
pub mod models;
pub mod test_selections;
