//! Startlist file export.

pub mod startlist;

pub use startlist::{RaceExport, export_race, startlist_filename, write_startlist};
