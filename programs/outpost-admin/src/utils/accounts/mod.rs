pub mod protocol_config;
