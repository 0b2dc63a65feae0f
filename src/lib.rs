//! shape2sdf - Generate signed distance fields from 2D polygonal shape descriptions

pub mod config;
pub mod domain;
pub mod error;
pub mod field;
pub mod geometry;
pub mod shapefile;

pub use error::{Error, Result};
