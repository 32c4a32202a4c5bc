// SPDX-License-Identifier: MPL-2.0
//! Reusable view pieces.

pub mod checkerboard;
