// SPDX-License-Identifier: MPL-2.0
//! Update helpers for the application.
//!
//! Side effects that reach outside the timer component live here: the image
//! picker and the diagnostics export on close.

use super::Message;
use crate::app::config::DROP_BATCH_MS;
use crate::app::i18n::fluent::I18n;
use crate::diagnostics::DiagnosticsCollector;
use crate::media::extensions::IMAGE_EXTENSIONS;
use crate::ui::timer::{self, ImageSource};
use iced::{window, Task};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Context for the update helpers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub timer: &'a mut timer::State,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub diagnostics_path: Option<&'a Path>,
    /// Files dropped since the current batch window opened, in drop order.
    pub pending_drops: &'a mut Vec<PathBuf>,
}

pub fn handle_timer_message(ctx: &mut UpdateContext<'_>, message: timer::Message) -> Task<Message> {
    let (effect, task) = ctx.timer.handle_message(message);
    let task = task.map(Message::Timer);

    match effect {
        timer::Effect::None => task,
        timer::Effect::OpenImageDialog => Task::batch([task, open_image_dialog(ctx.i18n)]),
    }
}

/// Opens the multi-file picker filtered to image extensions.
pub fn open_image_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("dialog-images-title");
    let filter = i18n.tr("dialog-images-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::ImagesPicked,
    )
}

pub fn handle_images_picked(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    ctx.timer
        .load_images(paths, ImageSource::FileDialog)
        .map(Message::Timer)
}

/// Queues a dropped file; the first file of a batch opens the batch window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let opens_batch = ctx.pending_drops.is_empty();
    ctx.pending_drops.push(path);
    if opens_batch {
        Task::perform(
            async { tokio::time::sleep(Duration::from_millis(DROP_BATCH_MS)).await },
            |()| Message::DropBatchReady,
        )
    } else {
        Task::none()
    }
}

pub fn handle_drop_batch_ready(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let paths = std::mem::take(ctx.pending_drops);
    ctx.timer
        .load_images(paths, ImageSource::DragDrop)
        .map(Message::Timer)
}

/// Writes the diagnostics report if requested, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if let Some(path) = ctx.diagnostics_path {
        ctx.diagnostics.process_pending();
        if let Err(err) = ctx.diagnostics.export_to_file(path) {
            eprintln!("Failed to write diagnostics report to {}: {err}", path.display());
        }
    }
    window::close(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::UnavailableChime;
    use crate::diagnostics::DiagnosticReport;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn close_writes_diagnostics_report() {
        let dir = tempdir().expect("temp dir");
        let report_path = dir.path().join("report.json");

        let i18n = I18n::default();
        let mut diagnostics = DiagnosticsCollector::default();
        let mut timer = timer::State::new(
            timer::Settings::default(),
            Arc::new(UnavailableChime::new("test")),
            diagnostics.handle(),
        );
        timer.handle_message(timer::Message::Controls(
            crate::ui::timer::controls::Message::Toggle,
        ));

        let mut ctx = UpdateContext {
            i18n: &i18n,
            timer: &mut timer,
            diagnostics: &mut diagnostics,
            diagnostics_path: Some(&report_path),
            pending_drops: &mut Vec::new(),
        };
        let _ = handle_close_requested(&mut ctx, window::Id::unique());

        let json = std::fs::read_to_string(&report_path).expect("report written");
        let report: DiagnosticReport = serde_json::from_str(&json).expect("valid report");
        assert_eq!(report.metadata.event_count, 1);
        assert!(json.contains("start_timer"));
    }

    #[test]
    fn files_dropped_together_load_as_one_batch_in_drop_order() {
        let i18n = I18n::default();
        let mut diagnostics = DiagnosticsCollector::default();
        let mut timer = timer::State::new(
            timer::Settings::default(),
            Arc::new(UnavailableChime::new("test")),
            diagnostics.handle(),
        );
        let mut pending = Vec::new();
        let mut ctx = UpdateContext {
            i18n: &i18n,
            timer: &mut timer,
            diagnostics: &mut diagnostics,
            diagnostics_path: None,
            pending_drops: &mut pending,
        };

        let _ = handle_file_dropped(&mut ctx, PathBuf::from("b.png"));
        let _ = handle_file_dropped(&mut ctx, PathBuf::from("a.png"));
        let _ = handle_file_dropped(&mut ctx, PathBuf::from("c.png"));
        assert_eq!(
            *ctx.pending_drops,
            [
                PathBuf::from("b.png"),
                PathBuf::from("a.png"),
                PathBuf::from("c.png")
            ]
        );

        let _ = handle_drop_batch_ready(&mut ctx);
        assert!(ctx.pending_drops.is_empty());

        // A later drop opens a new batch.
        let _ = handle_file_dropped(&mut ctx, PathBuf::from("d.png"));
        assert_eq!(*ctx.pending_drops, [PathBuf::from("d.png")]);
    }
}
