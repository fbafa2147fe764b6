pub mod store_config;
