//! Presentational sections of the page. None of them hold state beyond what
//! their markup needs.

pub mod about;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading;
pub mod services;
