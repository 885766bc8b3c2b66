//! Bridges async handlers to the blocking print path.

use image::RgbImage;

/// Send `label` to the printer, absorbing every failure.
///
/// Returns `true` when the job was handed to the platform spooler. Failures
/// are logged and never propagate; the HTTP contract stays fail-open.
pub async fn dispatch_print(label: RgbImage, printer: Option<String>, dry_run: bool) -> bool {
    if dry_run {
        tracing::info!("Dry run mode: skipping physical print");
        return true;
    }

    let result = tokio::task::spawn_blocking(move || {
        let host = pageprinter::platform_host()?;
        pageprinter::print_image(host.as_ref(), &label, printer.as_deref())
    })
    .await;

    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Error printing image");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "Print task failed to run");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dry_run_reports_success_without_touching_a_printer() {
        let label = RgbImage::new(300, 180);
        assert!(dispatch_print(label, None, true).await);
    }
}
