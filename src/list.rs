//! `share files` and `share images`: fetch a listing, filter it, print it.
//!
//! A failed fetch shows up here as an empty listing; the reason is in the
//! log, not in the command's exit status.

use anyhow::Result;
use share_core::display::{
    view_count, ListingSummary, FILES_PER_COLLECTION, IMAGES_PER_COLLECTION,
};
use share_core::models::{ImageEntry, TextEntry};

use crate::context::AppContext;
use crate::view::ListingView;

const PREVIEW_WIDTH: usize = 60;

/// Fetch the text listing into a fresh view and return the entries
/// matching `query`.
pub async fn load_files(ctx: &AppContext, query: &str) -> Vec<TextEntry> {
    let view = ListingView::new();
    view.refresh(&ctx.text_listing()).await;
    let hits = view.search(query);
    view.close();
    hits
}

/// Image counterpart of [`load_files`].
pub async fn load_images(ctx: &AppContext, query: &str) -> Vec<ImageEntry> {
    let view = ListingView::new();
    view.refresh(&ctx.image_listing()).await;
    let hits = view.search(query);
    view.close();
    hits
}

pub async fn run_files(ctx: &AppContext, query: Option<&str>, json: bool) -> Result<()> {
    let files = load_files(ctx, query.unwrap_or_default()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("No files.");
        return Ok(());
    }

    println!("{:<32} {:<28} {:>8}  PREVIEW", "ID", "NAME", "SIZE");
    for file in &files {
        println!(
            "{:<32} {:<28} {:>8}  {}",
            file.id,
            file.name,
            file.size_label,
            clip(&file.preview, PREVIEW_WIDTH)
        );
    }

    let summary = ListingSummary::new(files.len(), FILES_PER_COLLECTION);
    println!();
    println!(
        "{} files, {} collections",
        summary.count, summary.collections
    );
    Ok(())
}

pub async fn run_images(ctx: &AppContext, query: Option<&str>, json: bool) -> Result<()> {
    let images = load_images(ctx, query.unwrap_or_default()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&images)?);
        return Ok(());
    }

    if images.is_empty() {
        println!("No images.");
        return Ok(());
    }

    println!("{:<32} {:<28} {:<16} {:>5}", "ID", "NAME", "CATEGORY", "VIEWS");
    for image in &images {
        println!(
            "{:<32} {:<28} {:<16} {:>5}",
            image.id,
            image.name,
            image.category,
            view_count(&image.id)
        );
    }

    let summary = ListingSummary::new(images.len(), IMAGES_PER_COLLECTION);
    println!();
    println!(
        "{} frames, {} collections",
        summary.count, summary.collections
    );
    Ok(())
}

/// Cut `text` to `width` characters for table output.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
