pub mod db_init;
pub mod property;
