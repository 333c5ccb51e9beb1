//! # jotasite-domain
//!
//! Pure domain model for the Jota Studio website behaviours.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer
//! - The **carousel** state machine (slide index, autoplay state)
//! - **Service** slugs and records, plus the built-in **catalog**
//! - A small **markup** tree that renderers produce instead of raw strings
//! - The WhatsApp **contact** deep link
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod markup;
pub mod service;
