//! CLI subcommand implementations for the vitalis-api binary.

pub mod doctor;
pub mod serve;
pub mod sitemap_cmd;
