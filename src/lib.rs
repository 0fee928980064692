pub mod config;
pub mod logging;
pub mod search;
pub mod storage;
pub mod stories;
pub mod ui;
