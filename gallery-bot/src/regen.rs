//! Regeneration engine: full rebuild of the derived read-only files.
//!
//! Reads the authoritative record store, drops removed posts, recomputes slugs
//! and awards, and writes the paginated full listing, per-tag listings, and the
//! tag index. Tag pages are replaced wholesale so a shrinking tag set leaves no
//! orphans. Each file is written atomically; the deploy hook runs last and its
//! failure never rolls the files back.

use crate::deploy;
use crate::messages;
use anyhow::Result;
use gbot_core::slugify;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{write_atomic, Record, RecordStore};
use tracing::{info, instrument, warn};

/// Record projection published to the derived files: the stored fields with
/// the image base path applied, plus recomputed slugs and awards.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedRecord {
    #[serde(flatten)]
    record: Record,
    slugs: Vec<String>,
    awards: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TagEntry {
    title: String,
    slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenOutcome {
    /// No store file exists yet; nothing was written.
    NothingToDo,
    Deployed,
    /// Files were regenerated but the deploy hook reported failure.
    DeployFailed,
}

pub struct RegenerationEngine {
    store: RecordStore,
    data_dir: PathBuf,
    images_slug: String,
    page_size: usize,
    run_command: String,
}

impl RegenerationEngine {
    pub fn new(
        store: RecordStore,
        data_dir: PathBuf,
        images_slug: String,
        page_size: usize,
        run_command: String,
    ) -> Self {
        Self {
            store,
            data_dir,
            images_slug,
            page_size,
            run_command,
        }
    }

    /// Rebuilds every derived file and invokes the deploy hook with a summary
    /// of `updated` (the ids merged this cycle). A corrupt store aborts before
    /// anything on disk is touched.
    #[instrument(skip(self, updated), fields(updated = updated.len()))]
    pub async fn regenerate(&self, updated: &[i64]) -> Result<RegenOutcome> {
        if !self.store.exists() {
            info!("No record store yet, nothing to do");
            return Ok(RegenOutcome::NothingToDo);
        }
        let records = self.store.load()?;

        let mut all: Vec<PublishedRecord> = Vec::new();
        let mut buckets: BTreeMap<String, Vec<PublishedRecord>> = BTreeMap::new();
        let mut tag_titles: BTreeMap<String, String> = BTreeMap::new();

        for record in records.values().filter(|r| !r.is_removed) {
            let slugs: Vec<String> = record.tags.iter().map(|t| slugify(t)).collect();
            let mut awards = Vec::new();
            if record.is_month {
                awards.push("month".to_string());
            }
            if record.is_year {
                awards.push("year".to_string());
            }
            let mut projected = record.clone();
            projected.image = format!("{}{}", self.images_slug, projected.image);
            let published = PublishedRecord {
                record: projected,
                slugs: slugs.clone(),
                awards,
            };

            for (slug, tag) in slugs.iter().zip(&record.tags) {
                buckets
                    .entry(slug.clone())
                    .or_default()
                    .push(published.clone());
                tag_titles.insert(slug.clone(), tag.clone());
            }
            all.push(published);
        }

        // Old tag pages first: the tag set may have shrunk.
        self.remove_stale_tag_pages()?;

        self.write_pages("page", all)?;
        for (slug, posts) in buckets {
            self.write_pages(&format!("tags-{slug}"), posts)?;
        }

        let index: Vec<TagEntry> = tag_titles
            .into_iter()
            .map(|(slug, title)| TagEntry { title, slug })
            .collect();
        write_atomic(
            &self.data_dir.join("tags.json"),
            &serde_json::to_vec_pretty(&index)?,
        )?;

        info!(tags = index.len(), "Derived files regenerated");

        let message = messages::commit_message(updated);
        match deploy::run(&self.run_command, &message).await {
            Ok(()) => Ok(RegenOutcome::Deployed),
            Err(e) => {
                warn!(error = %e, "Deploy hook failed; derived files kept");
                Ok(RegenOutcome::DeployFailed)
            }
        }
    }

    /// Writes `<mask>-<page>.json` files, newest id first, `page_size` records
    /// per page. An empty collection still produces a single empty page, as the
    /// published site expects page 1 to exist.
    fn write_pages(&self, mask: &str, mut records: Vec<PublishedRecord>) -> Result<()> {
        records.sort_by(|a, b| b.record.id.cmp(&a.record.id));
        let pages = if records.is_empty() {
            1
        } else {
            records.len().div_ceil(self.page_size)
        };
        for page in 1..=pages {
            let start = (page - 1) * self.page_size;
            let end = (start + self.page_size).min(records.len());
            let chunk = &records[start..end];
            write_atomic(
                &self.data_dir.join(format!("{mask}-{page}.json")),
                &serde_json::to_vec_pretty(chunk)?,
            )?;
        }
        Ok(())
    }

    /// Deletes every `tags-*` page file (never `tags.json` itself).
    fn remove_stale_tag_pages(&self) -> Result<()> {
        if !self.data_dir.exists() {
            return Ok(());
        }
        for entry in std::fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("tags-") {
                std::fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
