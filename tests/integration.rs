// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks across config, localization, the session and file IO.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced_retouch::application::port::{
    ImageTransformer, TransformError, TransformRequest, TransformedImage,
};
use iced_retouch::config::{self, Config, LOAD_ERROR_KEY};
use iced_retouch::domain::Tool;
use iced_retouch::i18n::fluent::I18n;
use iced_retouch::media;
use iced_retouch::session::{Completion, Session, Status};
use iced_retouch::ui::theming::ThemeMode;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::tempdir;

/// Answers every request with the image it was sent.
struct EchoTransformer;

impl ImageTransformer for EchoTransformer {
    fn transform(
        &self,
        request: TransformRequest,
    ) -> BoxFuture<'static, Result<TransformedImage, TransformError>> {
        async move {
            Ok(TransformedImage {
                bytes: request.image.to_vec(),
                mime_type: request.mime_type,
            })
        }
        .boxed()
    }
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([90, 140, 200, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[test]
fn language_and_theme_come_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.general.language = Some("es".to_string());
    saved.general.theme_mode = ThemeMode::Dark;
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, saved);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "es");

    // The CLI flag wins over the file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [broken")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
}

#[test]
fn uploaded_file_round_trips_through_session() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("photo.png");
    std::fs::write(&path, png(12, 8)).expect("write photo");

    let raw = media::read_image(&path).expect("read photo");
    let mut session = Session::new();
    session
        .upload(raw.bytes, raw.mime_type.as_str())
        .expect("upload");

    let original = session.original().expect("original");
    assert_eq!(original.dimensions().width, 12);
    assert_eq!(original.dimensions().height, 8);
    assert_eq!(*session.status(), Status::Ready);
}

#[tokio::test]
async fn colorize_result_can_be_compared_and_saved() {
    let mut session = Session::new();
    session.upload(png(10, 10), "image/png").expect("upload");
    session.select_tool(Tool::Colorize);

    let dispatch = session.process().expect("dispatch");
    assert_eq!(dispatch.request.tool, Tool::Colorize);
    assert_eq!(dispatch.request.prompt, None);

    let result = EchoTransformer.transform(dispatch.request).await;
    let completion = session.complete(dispatch.ticket, result);
    assert!(matches!(
        completion,
        Completion::Stored {
            tool: Tool::Colorize,
            ..
        }
    ));
    assert!(session.comparison().is_some());

    let download = session.download().expect("download");
    assert_eq!(download.file_name, "colorize-resultado.png");

    let dir = tempdir().expect("Failed to create temporary directory");
    let written = media::write_download(&dir.path().join(&download.file_name), &download.bytes)
        .expect("write result");
    assert_eq!(
        std::fs::read(written).expect("read back"),
        download.bytes.to_vec()
    );
}

#[tokio::test]
async fn result_arriving_after_reset_is_dropped() {
    let mut session = Session::new();
    session.upload(png(4, 4), "image/png").expect("upload");
    let dispatch = session.process().expect("dispatch");

    session.reset();
    let result = EchoTransformer.transform(dispatch.request).await;

    assert!(matches!(
        session.complete(dispatch.ticket, result),
        Completion::Stale
    ));
    assert!(!session.has_image());
    assert_eq!(*session.status(), Status::Idle);
}

#[tokio::test]
async fn edit_prompt_is_sent_verbatim() {
    let mut session = Session::new();
    session.upload(png(4, 4), "image/png").expect("upload");
    session.select_tool(Tool::Edit);
    session.set_edit_prompt("  add a red hat ");

    let dispatch = session.process().expect("dispatch");
    assert_eq!(dispatch.request.prompt.as_deref(), Some("  add a red hat "));
}
