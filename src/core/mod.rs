//! Core module: the decision engines and their supporting data model.

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod intent;
pub mod models;
pub mod recommender;
