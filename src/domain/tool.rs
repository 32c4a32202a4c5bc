// SPDX-License-Identifier: MPL-2.0
//! Retouching tools.
//!
//! [`Tool`] is a closed set: adding a tool means extending the enum, its
//! [`ToolInfo`] table entry and the single exhaustive match in the transform
//! collaborator. Nothing dispatches on free-form strings.

use std::fmt;

/// One selectable AI transformation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Remove overlaid text, captions and watermarks.
    #[default]
    RemoveText,
    /// Cut the subject out and make the background transparent.
    RemoveBackground,
    /// Improve sharpness, lighting and detail.
    Enhance,
    /// Repair scratches, tears and fading of old photographs.
    Restore,
    /// Colorize a black and white photograph.
    Colorize,
    /// Free-text guided edit.
    Edit,
}

/// Static display metadata for a tool.
///
/// Text fields are i18n keys, resolved at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub name_key: &'static str,
    pub icon: char,
    pub call_to_action_key: &'static str,
    pub description_key: &'static str,
    /// Whether the result is shown through the before/after comparator.
    pub compares: bool,
}

impl Tool {
    /// Every tool in display order.
    pub const ALL: [Tool; 6] = [
        Tool::RemoveText,
        Tool::RemoveBackground,
        Tool::Enhance,
        Tool::Restore,
        Tool::Colorize,
        Tool::Edit,
    ];

    /// Stable identifier, used for download file names and logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Tool::RemoveText => "removeText",
            Tool::RemoveBackground => "removeBackground",
            Tool::Enhance => "enhance",
            Tool::Restore => "restore",
            Tool::Colorize => "colorize",
            Tool::Edit => "edit",
        }
    }

    /// Position of the tool in [`Tool::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tool::RemoveText => 0,
            Tool::RemoveBackground => 1,
            Tool::Enhance => 2,
            Tool::Restore => 3,
            Tool::Colorize => 4,
            Tool::Edit => 5,
        }
    }

    #[must_use]
    pub const fn info(self) -> ToolInfo {
        match self {
            Tool::RemoveText => ToolInfo {
                name_key: "tool-remove-text-name",
                icon: '⌫',
                call_to_action_key: "tool-remove-text-cta",
                description_key: "tool-remove-text-description",
                compares: false,
            },
            Tool::RemoveBackground => ToolInfo {
                name_key: "tool-remove-background-name",
                icon: '✂',
                call_to_action_key: "tool-remove-background-cta",
                description_key: "tool-remove-background-description",
                compares: false,
            },
            Tool::Enhance => ToolInfo {
                name_key: "tool-enhance-name",
                icon: '✦',
                call_to_action_key: "tool-enhance-cta",
                description_key: "tool-enhance-description",
                compares: true,
            },
            Tool::Restore => ToolInfo {
                name_key: "tool-restore-name",
                icon: '✚',
                call_to_action_key: "tool-restore-cta",
                description_key: "tool-restore-description",
                compares: true,
            },
            Tool::Colorize => ToolInfo {
                name_key: "tool-colorize-name",
                icon: '◐',
                call_to_action_key: "tool-colorize-cta",
                description_key: "tool-colorize-description",
                compares: true,
            },
            Tool::Edit => ToolInfo {
                name_key: "tool-edit-name",
                icon: '✎',
                call_to_action_key: "tool-edit-cta",
                description_key: "tool-edit-description",
                compares: false,
            },
        }
    }

    /// Whether the result should be shown through the comparator.
    #[must_use]
    pub const fn compares(self) -> bool {
        self.info().compares
    }

    /// Whether this tool takes a free-text instruction.
    #[must_use]
    pub const fn takes_prompt(self) -> bool {
        matches!(self, Tool::Edit)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
