// SPDX-License-Identifier: MPL-2.0
//! Session controller tests.

use super::*;
use crate::domain::Dimensions;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([120, 80, 40, 255]));
    let mut bytes = Vec::new();
    let dynamic = image_rs::DynamicImage::ImageRgba8(image);
    let dynamic = if format == ImageFormat::Jpeg {
        image_rs::DynamicImage::ImageRgb8(dynamic.to_rgb8())
    } else {
        dynamic
    };
    dynamic
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("encode test image");
    bytes
}

fn png(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

fn loaded_session() -> Session {
    let mut session = Session::new();
    session.upload(png(8, 6), "image/png").expect("upload");
    session
}

fn png_result(width: u32, height: u32) -> Result<TransformedImage, TransformError> {
    Ok(TransformedImage {
        bytes: png(width, height),
        mime_type: MimeType::new("image/png"),
    })
}

fn dispatch(session: &mut Session) -> Ticket {
    session.process().expect("dispatch").ticket
}

// =============================================================================
// Upload
// =============================================================================

#[test]
fn new_session_is_idle_and_empty() {
    let session = Session::new();
    assert_eq!(session.status(), &Status::Idle);
    assert!(!session.has_image());
    assert_eq!(session.active_tool(), Tool::RemoveText);
    assert!(session.edit_prompt().is_empty());
    assert_eq!(session.results().count(), 0);
}

#[test]
fn upload_makes_session_ready() {
    let session = loaded_session();
    assert_eq!(session.status(), &Status::Ready);
    let original = session.original().expect("original");
    assert_eq!(original.dimensions(), Dimensions::new(8, 6));
    assert_eq!(
        session.source_mime_type().map(MimeType::as_str),
        Some("image/png")
    );
}

#[test]
fn begin_upload_only_shows_uploading_when_empty() {
    let mut session = Session::new();
    session.begin_upload();
    assert_eq!(session.status(), &Status::Uploading);
    session.cancel_upload();
    assert_eq!(session.status(), &Status::Idle);

    let mut session = loaded_session();
    session.begin_upload();
    assert_eq!(session.status(), &Status::Ready);
}

#[test]
fn only_the_newest_read_is_latest() {
    let mut session = Session::new();
    let first = session.begin_upload();
    let second = session.begin_upload();

    assert!(!session.is_latest_upload(first));
    assert!(session.is_latest_upload(second));
}

#[test]
fn read_started_before_reset_is_not_latest() {
    let mut session = loaded_session();
    let ticket = session.begin_upload();
    session.reset();

    assert!(!session.is_latest_upload(ticket));
    let fresh = session.begin_upload();
    assert!(fresh.sequence > ticket.sequence);
    assert!(session.is_latest_upload(fresh));
}

#[test]
fn upload_invalidates_every_result_and_resets_tool_and_prompt() {
    let mut session = loaded_session();
    for tool in [Tool::Enhance, Tool::Colorize] {
        session.select_tool(tool);
        let ticket = dispatch(&mut session);
        session.complete(ticket, png_result(8, 6));
    }
    session.select_tool(Tool::Edit);
    session.set_edit_prompt("make it blue");
    assert_eq!(session.results().count(), 2);

    session.upload(png(4, 4), "image/png").expect("second upload");

    assert_eq!(session.results().count(), 0);
    assert_eq!(session.active_tool(), Tool::RemoveText);
    assert!(session.edit_prompt().is_empty());
    assert_eq!(session.status(), &Status::Ready);
    assert_eq!(
        session.original().map(EncodedImage::dimensions),
        Some(Dimensions::new(4, 4))
    );
}

#[test]
fn upload_with_non_image_mime_is_rejected_without_change() {
    let mut session = loaded_session();
    session.select_tool(Tool::Restore);
    let before = session.original().map(EncodedImage::id);
    let generation = session.generation();

    let err = session.upload(b"plain text".to_vec(), "text/plain").unwrap_err();

    assert_eq!(err, DecodeError::NotAnImage("text/plain".into()));
    assert_eq!(session.original().map(EncodedImage::id), before);
    assert_eq!(session.active_tool(), Tool::Restore);
    assert_eq!(session.generation(), generation);
    assert_eq!(session.status(), &Status::Ready);
}

#[test]
fn upload_with_undecodable_bytes_is_rejected() {
    let mut session = Session::new();
    session.begin_upload();
    let err = session.upload(vec![0, 1, 2, 3], "image/png").unwrap_err();
    assert!(matches!(err, DecodeError::Unreadable(_)));
    assert_eq!(session.status(), &Status::Idle);
    assert!(!session.has_image());
}

#[test]
fn jpeg_upload_keeps_its_mime_type() {
    let mut session = Session::new();
    session
        .upload(encode(5, 5, ImageFormat::Jpeg), "image/jpeg")
        .expect("jpeg upload");
    assert_eq!(
        session.source_mime_type().map(MimeType::as_str),
        Some("image/jpeg")
    );
}

// =============================================================================
// Tool isolation
// =============================================================================

#[test]
fn results_are_cached_per_tool() {
    let mut session = loaded_session();

    session.select_tool(Tool::Enhance);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));
    let enhanced = session.current_result().map(EncodedImage::id);
    assert!(enhanced.is_some());

    session.select_tool(Tool::Restore);
    assert!(session.current_result().is_none());
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));

    session.select_tool(Tool::Enhance);
    assert_eq!(session.current_result().map(EncodedImage::id), enhanced);
}

#[test]
fn select_tool_never_touches_results_or_status() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    for tool in Tool::ALL {
        session.select_tool(tool);
        assert!(session.is_processing());
    }
    assert_eq!(ticket.tool, Tool::RemoveText);
}

#[test]
fn reprocessing_clears_only_the_active_slot() {
    let mut session = loaded_session();
    session.select_tool(Tool::Colorize);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));
    session.select_tool(Tool::Enhance);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));

    session.select_tool(Tool::Colorize);
    let _ticket = dispatch(&mut session);

    assert!(session.result_for(Tool::Colorize).is_none());
    assert!(session.result_for(Tool::Enhance).is_some());
}

// =============================================================================
// Captured identity & races
// =============================================================================

#[test]
fn result_lands_in_dispatching_tool_after_switch() {
    let mut session = loaded_session();
    session.select_tool(Tool::RemoveBackground);
    let ticket = dispatch(&mut session);

    session.select_tool(Tool::Enhance);
    let completion = session.complete(ticket, png_result(8, 6));

    assert!(matches!(
        completion,
        Completion::Stored {
            tool: Tool::RemoveBackground,
            ..
        }
    ));
    assert!(session.result_for(Tool::RemoveBackground).is_some());
    assert!(session.result_for(Tool::Enhance).is_none());
    assert_eq!(session.active_tool(), Tool::Enhance);
    assert_eq!(session.status(), &Status::Ready);
}

#[test]
fn process_is_single_flight() {
    let mut session = loaded_session();
    let first = dispatch(&mut session);

    session.select_tool(Tool::Enhance);
    assert_eq!(session.process().unwrap_err(), ProcessRejection::Busy);
    assert_eq!(session.status(), &Status::Processing);

    session.complete(first, png_result(8, 6));
    assert!(session.process().is_ok());
}

#[test]
fn completion_after_reset_is_ignored() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);

    session.reset();
    let completion = session.complete(ticket, png_result(8, 6));

    assert_eq!(completion, Completion::Stale);
    assert_eq!(session.status(), &Status::Idle);
    assert!(!session.has_image());
    assert_eq!(session.results().count(), 0);
}

#[test]
fn completion_after_new_upload_is_ignored() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);

    session.upload(png(3, 3), "image/png").expect("upload");
    assert_eq!(session.status(), &Status::Ready);

    let completion = session.complete(ticket, png_result(8, 6));
    assert_eq!(completion, Completion::Stale);
    assert!(session.result_for(Tool::RemoveText).is_none());
    assert!(session.process().is_ok());
}

#[test]
fn failure_after_reset_is_ignored_too() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    session.reset();

    let completion = session.complete(ticket, Err(TransformError::NoImage));
    assert_eq!(completion, Completion::Stale);
    assert_eq!(session.status(), &Status::Idle);
}

#[test]
fn failure_sets_errored_and_keeps_other_results() {
    let mut session = loaded_session();
    session.select_tool(Tool::Enhance);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));

    session.select_tool(Tool::Restore);
    let ticket = dispatch(&mut session);
    let completion = session.complete(
        ticket,
        Err(TransformError::Api {
            status: 503,
            message: "overloaded".into(),
        }),
    );

    let Completion::Failed { tool, error } = completion else {
        panic!("expected failure");
    };
    assert_eq!(tool, Tool::Restore);
    assert_eq!(
        error,
        TransformError::Api {
            status: 503,
            message: "overloaded".into(),
        }
    );
    assert_eq!(session.status().error(), Some(&error));
    assert!(session.result_for(Tool::Enhance).is_some());
    assert!(session.result_for(Tool::Restore).is_none());
}

#[test]
fn errored_session_can_process_again() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    session.complete(ticket, Err(TransformError::NoImage));
    assert!(matches!(session.status(), Status::Errored(_)));

    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));
    assert_eq!(session.status(), &Status::Ready);
    assert!(session.current_result().is_some());
}

#[test]
fn unusable_result_becomes_error() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    let completion = session.complete(
        ticket,
        Ok(TransformedImage {
            bytes: b"not an image".to_vec(),
            mime_type: MimeType::new("image/png"),
        }),
    );
    assert!(matches!(completion, Completion::Failed { .. }));
    assert!(session.current_result().is_none());
}

#[test]
fn result_without_mime_type_is_sniffed() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    session.complete(
        ticket,
        Ok(TransformedImage {
            bytes: png(2, 2),
            mime_type: MimeType::new(""),
        }),
    );
    let result = session.current_result().expect("result");
    assert_eq!(result.mime_type().as_str(), "image/png");
    assert_eq!(result.dimensions(), Dimensions::new(2, 2));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn process_without_image_is_rejected() {
    let mut session = Session::new();
    assert_eq!(
        session.process().unwrap_err(),
        ProcessRejection::Invalid(ValidationError::NoImage)
    );
    assert_eq!(session.status(), &Status::Idle);
}

#[test]
fn edit_requires_non_blank_prompt() {
    let mut session = loaded_session();
    session.select_tool(Tool::Edit);

    for prompt in ["", "   ", "\n\t"] {
        session.set_edit_prompt(prompt);
        assert_eq!(
            session.process().unwrap_err(),
            ProcessRejection::Invalid(ValidationError::EmptyPrompt)
        );
        assert_eq!(session.status(), &Status::Ready);
    }
}

#[test]
fn edit_prompt_is_sent_verbatim() {
    let mut session = loaded_session();
    session.select_tool(Tool::Edit);
    session.set_edit_prompt("  add a hat  ");

    let dispatch = session.process().expect("dispatch");
    assert_eq!(dispatch.request.prompt.as_deref(), Some("  add a hat  "));
    assert_eq!(dispatch.request.tool, Tool::Edit);
}

#[test]
fn other_tools_send_no_prompt() {
    let mut session = loaded_session();
    session.set_edit_prompt("ignored");
    session.select_tool(Tool::Colorize);

    let dispatch = session.process().expect("dispatch");
    assert!(dispatch.request.prompt.is_none());
    assert_eq!(dispatch.request.mime_type.as_str(), "image/png");
    assert_eq!(
        &*dispatch.request.image,
        &**session.original().expect("original").bytes()
    );
}

// =============================================================================
// Comparison & download
// =============================================================================

#[test]
fn comparison_only_for_comparing_tools() {
    let mut session = loaded_session();
    for tool in Tool::ALL {
        session.select_tool(tool);
        let ticket = dispatch(&mut session);
        session.complete(ticket, png_result(8, 6));
    }

    for tool in Tool::ALL {
        session.select_tool(tool);
        assert_eq!(session.comparison().is_some(), tool.compares(), "{tool}");
    }
}

#[test]
fn comparison_pairs_original_with_active_result() {
    let mut session = loaded_session();
    session.select_tool(Tool::Restore);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));

    let (before, after) = session.comparison().expect("comparison");
    assert_eq!(Some(before.id()), session.original().map(EncodedImage::id));
    assert_eq!(
        Some(after.id()),
        session.result_for(Tool::Restore).map(EncodedImage::id)
    );
}

#[test]
fn download_is_named_after_active_tool() {
    let mut session = loaded_session();
    assert!(session.download().is_none());

    session.select_tool(Tool::Colorize);
    let ticket = dispatch(&mut session);
    session.complete(ticket, png_result(8, 6));

    let download = session.download().expect("download");
    assert_eq!(download.file_name, "colorize-resultado.png");
    assert!(!download.bytes.is_empty());
}

#[test]
fn download_extension_follows_result_mime() {
    let mut session = loaded_session();
    let ticket = dispatch(&mut session);
    session.complete(
        ticket,
        Ok(TransformedImage {
            bytes: encode(4, 4, ImageFormat::Jpeg),
            mime_type: MimeType::new("image/jpeg"),
        }),
    );
    let download = session.download().expect("download");
    assert_eq!(download.file_name, "removeText-resultado.jpeg");
}

#[test]
fn reset_returns_to_initial_state() {
    let mut session = loaded_session();
    session.select_tool(Tool::Edit);
    session.set_edit_prompt("sky");
    let generation = session.generation();

    session.reset();

    assert_eq!(session.status(), &Status::Idle);
    assert!(!session.has_image());
    assert_eq!(session.active_tool(), Tool::RemoveText);
    assert!(session.edit_prompt().is_empty());
    assert!(!session.is_current(generation));
}
