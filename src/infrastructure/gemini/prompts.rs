// SPDX-License-Identifier: MPL-2.0
//! Per-tool instructions sent alongside the image.

use crate::domain::Tool;

/// Builds the text part of a request.
///
/// The edit tool forwards the user's prompt untouched; every other tool has
/// a fixed instruction.
#[must_use]
pub fn instruction(tool: Tool, prompt: Option<&str>) -> String {
    match tool {
        Tool::RemoveText => "Remove all text, captions, logos and watermarks from this image. \
             Reconstruct the covered areas so they blend naturally with their surroundings. \
             Keep everything else unchanged."
            .to_string(),
        Tool::RemoveBackground => "Remove the background of this image and keep only the main \
             subject. Return a PNG with a fully transparent background and clean edges."
            .to_string(),
        Tool::Enhance => "Enhance this image: improve sharpness, lighting, contrast and fine \
             detail while keeping the composition and colors faithful to the original."
            .to_string(),
        Tool::Restore => "Restore this old photograph: repair scratches, tears, stains and \
             fading, reduce noise and recover lost detail without changing the people or scene."
            .to_string(),
        Tool::Colorize => "Colorize this black and white photograph with natural, historically \
             plausible colors. Keep every detail and the framing exactly as they are."
            .to_string(),
        Tool::Edit => prompt.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_forwards_prompt_verbatim() {
        assert_eq!(
            instruction(Tool::Edit, Some("  paint the door red ")),
            "  paint the door red "
        );
    }

    #[test]
    fn fixed_tools_ignore_prompt() {
        for tool in Tool::ALL.into_iter().filter(|t| !t.takes_prompt()) {
            let text = instruction(tool, Some("ignored"));
            assert!(!text.contains("ignored"), "{tool}");
            assert!(!text.is_empty(), "{tool}");
        }
    }

    #[test]
    fn background_removal_asks_for_transparency() {
        assert!(instruction(Tool::RemoveBackground, None).contains("transparent"));
    }
}
