//! Pathstate Core Types
//!
//! This crate provides the data types produced when a location path is
//! resolved into a navigation state. It includes:
//!
//! - **Navigation state**: The top-level record ([`state::NavigationState`])
//! - **Root views**: Reserved whole-path views ([`view::RootView`])
//! - **GUI panels**: The embedded panel sub-state ([`gui::GuiState`], [`gui::Panel`])
//!
//! The types carry no reference to the parser configuration and are never
//! mutated by the parser once returned.

pub mod gui;
pub mod state;
pub mod view;
