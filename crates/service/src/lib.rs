pub mod db;
pub mod driver;
pub mod errors;
pub mod test_support;
