//! TuranPET Core - Shared domain library.
//!
//! This crate provides everything the site renders that does not touch the network:
//! - the product, blog and location tables bundled with the site
//! - the catalog filter and its selection state
//! - the two-locale string tables and the translator snapshot handed to views
//! - the state machines behind the advice chat and the image visualizer widgets
//!
//! # Architecture
//!
//! The core crate contains only types, tables and pure state transitions - no I/O,
//! no HTTP clients, no async. The `site` crate drives these types from HTTP handlers.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for slugs, prices, locales, categories and chat roles
//! - [`models`] - Content records with their per-locale fallback rules
//! - [`content`] - The embedded content store
//! - [`catalog`] - Category/subcategory filtering
//! - [`i18n`] - Localization store and translator
//! - [`advisor`] - Advice chat transcript state machine
//! - [`visualizer`] - Image generation slot state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod advisor;
pub mod catalog;
pub mod content;
pub mod i18n;
pub mod models;
pub mod types;
pub mod visualizer;

pub use types::*;
