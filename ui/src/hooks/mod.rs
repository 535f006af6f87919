pub mod use_connection_checker;
