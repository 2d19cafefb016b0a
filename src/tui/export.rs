use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::sync::OnceLock;
use std::time::Duration;

use super::state::UiState;
use crate::figures;
use crate::model::LaunchDataset;

// Global clipboard manager channel - initialized once on first use
static CLIPBOARD_SENDER: OnceLock<std_mpsc::Sender<String>> = OnceLock::new();

/// Export both figures for the current controls as JSON.
/// Returns the absolute path of the exported file.
pub fn export_figures_json(data: &LaunchDataset, state: &UiState) -> Result<PathBuf> {
    let report = figures::build_report(data, &state.site_filter(data), state.payload_range)?;
    let default_name = format!("launch-figures-{}.json", crate::export::timestamp_slug());
    let current_dir = std::env::current_dir().context("get current directory")?;
    let path = current_dir.join(default_name);
    crate::export::write_figures_json(&path, &report)?;
    Ok(path)
}

/// Export the filtered records as CSV with the input dataset's columns.
/// Returns the absolute path of the exported file.
pub fn export_records_csv(data: &LaunchDataset, state: &UiState) -> Result<PathBuf> {
    let records = state.filtered_records(data);
    let default_name = format!("launch-records-{}.csv", crate::export::timestamp_slug());
    let current_dir = std::env::current_dir().context("get current directory")?;
    let path = current_dir.join(default_name);
    crate::export::write_records_csv(&path, &records)?;
    Ok(path)
}

/// Initialize the clipboard manager thread if not already initialized.
/// Clipboard operations run sequentially on a dedicated thread that keeps
/// each clipboard instance alive long enough for clipboard managers to read
/// the contents on Linux.
fn init_clipboard_manager() -> Result<&'static std_mpsc::Sender<String>> {
    CLIPBOARD_SENDER.get_or_init(|| {
        let (tx, rx) = std_mpsc::channel::<String>();

        std::thread::spawn(move || {
            use arboard::Clipboard;

            for text in rx {
                if let Ok(mut clipboard) = Clipboard::new() {
                    if clipboard.set_text(&text).is_ok() {
                        std::thread::sleep(Duration::from_secs(2));
                    }
                }
            }
        });

        tx
    });

    CLIPBOARD_SENDER
        .get()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize clipboard manager"))
}

/// Copy text to clipboard.
/// Returns immediately after queuing the operation; the manager thread keeps
/// the clipboard contents alive.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sender = init_clipboard_manager()?;
    sender
        .send(text.to_string())
        .map_err(|_| anyhow::anyhow!("Clipboard manager channel closed"))?;
    Ok(())
}
