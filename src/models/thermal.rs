//! Thermal systems models.
//!
//! This module contains models for networks of heat exchangers.

pub mod hen;
