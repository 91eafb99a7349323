#![recursion_limit = "1024"]

pub mod app;
pub mod pages;
pub mod router;

mod console;
