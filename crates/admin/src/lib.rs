//! Backoffice admin library.
//!
//! Storage, repositories and services behind the backoffice dashboard:
//! products, orders and customers persisted in a key-value store, a demo
//! login, dashboard KPIs, and the view state the front ends render.
//!
//! # Layout
//!
//! - [`storage`] - key-value port with memory and file backends
//! - [`db`] - repositories over the persisted collections and the session
//! - [`services`] - login, dashboard KPIs, colour-mode preference
//! - [`filters`] and [`views`] - list filtering and presentation state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod views;
