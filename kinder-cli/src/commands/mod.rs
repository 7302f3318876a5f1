pub mod config;
pub mod delete;
pub mod month;
pub mod new;
pub mod update;
pub mod upcoming;
