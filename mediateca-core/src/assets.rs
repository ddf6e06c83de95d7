//! On-disk asset path resolution for covers and video files.
//!
//! Titles map to file names through a lossy ASCII slug: uppercase letters
//! are lowercased, spaces become underscores, and anything outside
//! `[a-z0-9_]` is dropped. The layout under the base directory is
//! `portadas/` for cover art and `videos/peliculas/` /
//! `videos/series/` for playable files.

use std::path::{Path, PathBuf};

use crate::entry::{MediaEntry, MediaKind};

/// Convert a title to its asset file stem.
pub fn title_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            'A'..='Z' => slug.push(c.to_ascii_lowercase()),
            ' ' => slug.push('_'),
            'a'..='z' | '0'..='9' | '_' => slug.push(c),
            _ => {}
        }
    }
    slug
}

/// Cover image path for a title: `<base>/portadas/<slug>.jpg`.
pub fn cover_path(base: &Path, title: &str) -> PathBuf {
    base.join("portadas").join(format!("{}.jpg", title_slug(title)))
}

/// The placeholder cover used when a per-title asset is absent.
pub fn default_cover_path(base: &Path) -> PathBuf {
    base.join("portadas").join("default.jpg")
}

/// Cover image path, falling back to the placeholder when the per-title
/// file does not exist on disk.
pub fn cover_path_or_default(base: &Path, title: &str) -> PathBuf {
    let path = cover_path(base, title);
    if path.exists() {
        path
    } else {
        default_cover_path(base)
    }
}

/// Video file path for one series episode:
/// `<base>/videos/series/<slug>_s<S>e<E>.mp4`.
pub fn episode_video_path(base: &Path, title: &str, season: u32, episode: u32) -> PathBuf {
    base.join("videos")
        .join("series")
        .join(format!("{}_s{season}e{episode}.mp4", title_slug(title)))
}

/// Default playable path for an entry.
///
/// Movies resolve to `videos/peliculas/<slug>.mp4`; series resolve to
/// their first episode.
pub fn video_path(base: &Path, entry: &MediaEntry) -> PathBuf {
    match entry.kind {
        MediaKind::Movie { .. } => base
            .join("videos")
            .join("peliculas")
            .join(format!("{}.mp4", title_slug(&entry.title))),
        MediaKind::Series { .. } => episode_video_path(base, &entry.title, 1, 1),
    }
}
