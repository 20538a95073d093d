pub mod ai;
pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
