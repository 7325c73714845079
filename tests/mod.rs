//! Test suite for Taskboard
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
