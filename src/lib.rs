//! Bank Portal API Library
//!
//! Backend for a small banking portal: validates and persists account-opening
//! interest and contact submissions as append-only JSON flat files, serves a
//! fixed banking reference document and a health probe, and provides loan EMI
//! arithmetic as a pure library function.
//!
//! # Modules
//!
//! - `config`: Environment-driven configuration.
//! - `emi`: Loan EMI computation.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Request payloads, stored records, reference data.
//! - `store`: Flat-file submission store.

pub mod config;
pub mod emi;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
