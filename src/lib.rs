pub mod api;
pub mod app;
pub mod colors;
pub mod config;
pub mod debounce;
pub mod error;
pub mod ingredients;
pub mod instructions;
pub mod logging;
pub mod models;
pub mod pie_chart;
pub mod recency;
pub mod render;
pub mod search;
pub mod store;
pub mod units;

pub use crate::{
    colors::{color_for, color_map_for},
    ingredients::normalize_ingredients,
    instructions::segment_instructions,
    pie_chart::build_slices,
    search::{highlight, rank},
    units::parse_measure_ml,
};
