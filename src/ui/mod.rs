// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`studio`] - Tool sidebar, preview, comparison and actions
//!
//! # Shared Infrastructure
//!
//! - [`comparator`] - Before/after split view with a draggable handle
//! - [`components`] - Reusable UI components (checkerboard)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod comparator;
pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod studio;
pub mod styles;
pub mod theming;
pub mod widgets;
