pub mod config;
pub mod latest;
pub mod run;
pub mod window;
