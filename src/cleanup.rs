use crate::display::{Terminal, fill_template, fill_template_concat, fill_template_named};
use crate::system::FileRemover;
use crate::system::filesystem::{DEFAULT_REMOVE_TIMEOUT, DemoFileRemover, RealFileRemover};
use crate::upload::{CleanupError, CleanupResult, UploadNotifier};
use std::io::Write;
use tokio::time;

/// Cleanup coordination for completed uploads
pub async fn run_with_args(demo_mode: bool, paths: &[String]) -> CleanupResult<()> {
    let terminal = Terminal::new();

    if demo_mode {
        let notifier = UploadNotifier::new(DemoFileRemover::new());
        run_cleanup(&terminal, &notifier, paths).await?;
        display_template_demo();
        Ok(())
    } else {
        let notifier = UploadNotifier::new(RealFileRemover);
        run_cleanup(&terminal, &notifier, paths).await
    }
}

async fn run_cleanup<R: FileRemover>(
    terminal: &Terminal,
    notifier: &UploadNotifier<R>,
    paths: &[String],
) -> CleanupResult<()> {
    display_header(paths.len());

    for path in paths {
        let was_present = notifier.remover().exists(path);

        // Bound each removal so one stuck file cannot hang the whole run
        let result = time::timeout(DEFAULT_REMOVE_TIMEOUT, notifier.on_upload_complete(path)).await;
        match result {
            Ok(outcome) => outcome
                .map_err(|e| CleanupError::filesystem_error(path, "remove", &e.to_string()))?,
            Err(_) => return Err(CleanupError::timeout_error("remove", DEFAULT_REMOVE_TIMEOUT)),
        }

        display_outcome(terminal, path, was_present);
    }

    std::io::stdout()
        .flush()
        .map_err(|e| CleanupError::filesystem_error("stdout", "flush", &e.to_string()))?;
    Ok(())
}

fn display_header(count: usize) {
    println!("{:=^60}", " 📤 Upload Cleanup ");
    println!(
        "Files: {} | Timeout: {:?} | Time: {}",
        count,
        DEFAULT_REMOVE_TIMEOUT,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();
}

fn display_outcome(terminal: &Terminal, path: &str, was_present: bool) {
    let label = if was_present { "removed" } else { "not present" };
    let styled = terminal.get_outcome_style(was_present).apply_to(label);
    println!("    {:<12} {}", styled, path);
}

/// Demo-only footer showing the three equivalent template-fill techniques
fn display_template_demo() {
    let name = "my name";
    println!();
    println!("Template fills (all equivalent):");
    println!("    positional: {}", fill_template(name));
    println!("    named:      {}", fill_template_named(name));
    println!("    concat:     {}", fill_template_concat(name));
}
