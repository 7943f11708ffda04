pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod viewer;

// Re-export per comodità
pub use formatting::mg_dl_readable;
