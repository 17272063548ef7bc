pub mod db;
pub mod driver;
