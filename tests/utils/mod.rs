#![allow(dead_code)]

pub mod logging;
pub mod rand;

pub const LOCAL_HOST: &str = "127.0.0.1";
pub const MASTER_ADDR: &str = "127.0.0.1:8715,127.0.0.2:8715";
