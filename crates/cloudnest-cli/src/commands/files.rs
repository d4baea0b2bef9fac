//! File commands

use super::require_token;
use crate::api::Client;
use anyhow::{Context, Result};
use chrono::Utc;
use cloudnest_core::{apply, format_bytes, format_timestamp, CloudNestError};
use cloudnest_types::{
    DateFilter, FileKind, FilterCriteria, PresignedUrlRequest, SortKey, TypeFilter,
    VARIANT_ORIGINAL,
};
use colored::Colorize;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use uuid::Uuid;

fn icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => "🖼️ ",
        FileKind::Video => "🎬",
        FileKind::Audio => "🎵",
        FileKind::Archive => "📦",
        FileKind::Document => "📄",
        FileKind::Other => "📃",
    }
}

pub async fn list(query: Option<&str>, type_arg: &str, date_arg: &str, sort_arg: &str) -> Result<()> {
    let token = require_token()?;

    let type_filter = TypeFilter::parse(type_arg).ok_or_else(|| CloudNestError::InvalidInput {
        field: "type filter".into(),
        message: format!(
            "{}. Expected all, image, video, audio, text or application",
            type_arg
        ),
    })?;
    let date_filter = DateFilter::parse(date_arg).ok_or_else(|| CloudNestError::InvalidInput {
        field: "date filter".into(),
        message: format!("{}. Expected any, today, week or month", date_arg),
    })?;
    let criteria = FilterCriteria {
        query: query.unwrap_or_default().to_string(),
        type_filter,
        date_filter,
        sort: SortKey::parse(sort_arg),
    };

    let client = Client::new();
    let files = client.list_files(&token).await?;
    let shown = apply(&files, &criteria);

    println!("{}", "📁 Your Files".blue().bold());
    println!();

    if shown.is_empty() {
        println!("   (No files)");
    } else {
        for file in &shown {
            let shared = if file.share.is_some() { " 🔗" } else { "" };
            println!(
                "   {} {}  {:>9}  {}{}",
                icon(file.kind()),
                format!("{:<38}", file.name).cyan(),
                format_bytes(file.size),
                format_timestamp(file.modified_at()).dimmed(),
                shared
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("   {} of {} files shown", shown.len(), files.len()).dimmed()
    );

    Ok(())
}

pub async fn info(id: Uuid) -> Result<()> {
    let token = require_token()?;

    let client = Client::new();
    let file = client.get_file(&token, id).await?;

    println!("{} {}", icon(file.kind()), file.name.cyan().bold());
    println!();
    println!("   ID:       {}", file.id.to_string().dimmed());
    println!("   Type:     {}", file.mime_type);
    println!(
        "   Size:     {} ({} bytes)",
        format_bytes(file.size),
        file.size
    );
    println!("   Created:  {}", format_timestamp(file.created_at));
    println!("   Modified: {}", format_timestamp(file.modified_at()));

    if !file.variants.is_empty() {
        println!();
        println!("   {}", "Variants:".bold());
        let mut names: Vec<&String> = file.variants.keys().collect();
        names.sort();
        for name in names {
            println!("     {:<10} {}", name, file.variants[name].dimmed());
        }
    }

    println!();
    match &file.share {
        Some(link) => {
            println!("   {}", "Share link:".bold());
            println!("     URL:      {}", link.url.cyan());
            match link.expires_at {
                Some(expires_at) if link.is_expired(Utc::now()) => println!(
                    "     Expires:  {} {}",
                    format_timestamp(expires_at),
                    "(expired)".red()
                ),
                Some(expires_at) => println!("     Expires:  {}", format_timestamp(expires_at)),
                None => println!("     Expires:  never"),
            }
            println!(
                "     Password: {}",
                if link.has_password { "yes" } else { "no" }
            );
        }
        None => println!("   Not shared"),
    }

    Ok(())
}

pub async fn upload(path: &Path) -> Result<()> {
    let token = require_token()?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", path.display()))?
        .to_string();
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    let size = metadata.len();
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    println!(
        "{} {} ({})",
        "⬆️  Uploading".blue().bold(),
        filename.cyan(),
        format_bytes(size)
    );

    let client = Client::new();
    let slot = client
        .request_upload_slot(
            &token,
            &PresignedUrlRequest {
                filename: filename.clone(),
                content_type: content_type.clone(),
                size,
            },
        )
        .await?;

    let bar = ProgressBar::new(size);
    bar.set_style(
        ProgressStyle::with_template("   {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")?
            .progress_chars("=> "),
    );

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Cannot open {}", path.display()))?;
    let stream = futures::stream::unfold((file, bar.clone()), |(mut file, bar)| async move {
        let mut buf = vec![0u8; 64 * 1024];
        match file.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                bar.inc(n as u64);
                Some((Ok::<_, std::io::Error>(bytes::Bytes::from(buf)), (file, bar)))
            }
            Err(e) => Some((Err(e), (file, bar))),
        }
    });

    client
        .put_presigned(
            &slot.presigned_url,
            &content_type,
            size,
            reqwest::Body::wrap_stream(stream),
        )
        .await?;
    bar.finish_and_clear();

    let record = client.complete_upload(&token, &slot.object_key).await?;

    println!("{}", "✅ Upload complete!".green().bold());
    println!("   ID: {}", record.id.to_string().dimmed());
    if let Some(url) = record.variant_url(VARIANT_ORIGINAL) {
        println!("   Hosted at: {}", url.cyan());
    }

    Ok(())
}

pub async fn download(id: Uuid, output: Option<PathBuf>) -> Result<()> {
    let token = require_token()?;

    let client = Client::new();
    let file = client.get_file(&token, id).await?;
    let out_path = output.unwrap_or_else(|| PathBuf::from(&file.name));

    println!(
        "{} {} ({})",
        "⬇️  Downloading".blue().bold(),
        file.name.cyan(),
        format_bytes(file.size)
    );

    let response = client.download(&token, id).await?;
    let total = response.content_length().unwrap_or(file.size);

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("   {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")?
            .progress_chars("=> "),
    );

    let mut out = tokio::fs::File::create(&out_path)
        .await
        .with_context(|| format!("Cannot create {}", out_path.display()))?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Download interrupted")?;
        out.write_all(&chunk).await?;
        bar.inc(chunk.len() as u64);
    }
    out.flush().await?;
    bar.finish_and_clear();

    println!(
        "{} Saved to {}",
        "✅".green(),
        out_path.display().to_string().cyan()
    );

    Ok(())
}

pub async fn delete(id: Uuid, yes: bool) -> Result<()> {
    let token = require_token()?;

    let client = Client::new();
    let file = client.get_file(&token, id).await?;

    if !yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\"? This cannot be undone.",
                file.name
            ))
            .default(false)
            .interact()?;

        if !confirm {
            println!("{}", "Delete cancelled.".yellow());
            return Ok(());
        }
    }

    client.delete_file(&token, id).await?;

    println!("{} File deleted", "✓".green());
    Ok(())
}
