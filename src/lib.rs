//! Core of the phones list screen: one remote fetch, local phone-number
//! search over the result, and shared selection/counter state handed to
//! other screens.

pub mod config;
pub mod detail;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod session;
pub mod shared;
