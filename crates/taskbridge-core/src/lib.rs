//! Business logic and port trait definitions for taskbridge.
//!
//! This crate defines the "ports" (tracker and response-channel traits) that
//! the infrastructure layer implements. It depends only on
//! `taskbridge-types` -- never on `taskbridge-infra` or any HTTP crate.

pub mod chat;
pub mod command;
pub mod identity;
pub mod render;
pub mod service;
pub mod tracker;
