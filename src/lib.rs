//! Attendance accounting engine.
//!
//! This crate records employee clock-in and clock-out events and reports, per
//! calendar day, how many minutes an employee arrived late and how many minutes
//! they spent away during their assigned shift windows.
//!
//! The accounting itself lives in [`calculation`] and is pure. The [`store`],
//! [`service`] and [`api`] modules wrap it in an in-memory event store and an
//! HTTP interface.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
