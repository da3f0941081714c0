//! `share file <id>` and `share image <id>`: detail view plus actions.
//!
//! An id missing from the freshly fetched listing is a normal outcome: a
//! not-found panel pointing back at the listing, exit status 0.

use anyhow::Result;
use serde::Serialize;
use share_core::display::view_count;
use share_core::language::{language_meta, LanguageMeta};
use share_core::models::{ImageEntry, ListingKind, TextEntry};
use std::path::PathBuf;

use crate::actions::{download_image, notice_for, save_text, share_link};
use crate::context::AppContext;
use crate::view::ListingView;

/// Flags shared by both detail commands.
#[derive(Debug, Clone, Default)]
pub struct DetailOptions {
    pub json: bool,
    /// Directory to download the entry into.
    pub save: Option<PathBuf>,
    /// Print the share link.
    pub link: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileDetail<'a> {
    #[serde(flatten)]
    entry: &'a TextEntry,
    language: LanguageMeta,
    share_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageDetail<'a> {
    #[serde(flatten)]
    entry: &'a ImageEntry,
    source_url: String,
    views: u32,
    share_url: String,
}

fn print_not_found(kind: ListingKind, id: &str) {
    let (noun, listing) = match kind {
        ListingKind::Text => ("file", "share files"),
        ListingKind::Image => ("image", "share images"),
    };
    println!("--- Not found ---");
    println!("No {} with id '{}'.", noun, id);
    println!("Browse what is available with `{}`.", listing);
}

pub async fn run_file(ctx: &AppContext, id: &str, opts: &DetailOptions) -> Result<()> {
    let view = ListingView::new();
    view.refresh(&ctx.text_listing()).await;
    let found = view.find(id);
    view.close();

    let file = match found {
        Some(file) => file,
        None => {
            if opts.json {
                println!("null");
            } else {
                print_not_found(ListingKind::Text, id);
            }
            return Ok(());
        }
    };

    let language = language_meta(&file.name, &file.mime_type);
    let link = share_link(ctx.client.origin(), ListingKind::Text, &file.id);

    if opts.json {
        let detail = FileDetail {
            entry: &file,
            language,
            share_url: link,
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("--- File ---");
        println!("id:          {}", file.id);
        println!("name:        {}", file.name);
        println!("type:        {} ({})", file.mime_type, language.label);
        println!("size:        {}", file.size_label);
        println!("created_at:  {}", file.created_at.format("%Y-%m-%dT%H:%M:%SZ"));
        println!("description: {}", file.description);
        if opts.link {
            println!("link:        {}", link);
        }
        println!();
        println!("--- Content ---");
        println!("{}", file.content);
    }

    if let Some(dir) = &opts.save {
        let result = save_text(&file, dir).await;
        eprintln!("{}", notice_for(&file.name, &result));
    }

    Ok(())
}

pub async fn run_image(ctx: &AppContext, id: &str, opts: &DetailOptions) -> Result<()> {
    let view = ListingView::new();
    view.refresh(&ctx.image_listing()).await;
    let found = view.find(id);
    view.close();

    let image = match found {
        Some(image) => image,
        None => {
            if opts.json {
                println!("null");
            } else {
                print_not_found(ListingKind::Image, id);
            }
            return Ok(());
        }
    };

    let source_url = ctx.client.resolve(&image.url);
    let link = share_link(ctx.client.origin(), ListingKind::Image, &image.id);
    let views = view_count(&image.id);

    if opts.json {
        let detail = ImageDetail {
            entry: &image,
            source_url,
            views,
            share_url: link,
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("--- Image ---");
        println!("id:          {}", image.id);
        println!("name:        {}", image.name);
        println!("category:    {}", image.category);
        println!("url:         {}", source_url);
        println!("views:       {}", views);
        println!("created_at:  {}", image.created_at.format("%Y-%m-%dT%H:%M:%SZ"));
        println!("description: {}", image.description);
        if opts.link {
            println!("link:        {}", link);
        }
    }

    if let Some(dir) = &opts.save {
        let result = download_image(&ctx.client, &image, dir).await;
        eprintln!("{}", notice_for(&image.name, &result));
    }

    Ok(())
}
