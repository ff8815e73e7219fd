//! Video embed blocks: YouTube, Vimeo, and local mp4 files.
//!
//! Each embed is followed by a print placeholder so paper output names the
//! video instead of showing an empty frame.

use std::sync::LazyLock;

use regex::Regex;
use wikimark_storage::escape_html;

static YOUTUBE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&?]+)").expect("valid youtube regex"),
        Regex::new(r"youtube\.com/embed/([^&?]+)").expect("valid youtube embed regex"),
        Regex::new(r"youtube\.com/v/([^&?]+)").expect("valid youtube v regex"),
    ]
});

static VIMEO_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"vimeo\.com/(\d+)").expect("valid vimeo regex"),
        Regex::new(r"vimeo\.com/video/(\d+)").expect("valid vimeo video regex"),
        Regex::new(r"player\.vimeo\.com/video/(\d+)").expect("valid vimeo player regex"),
    ]
});

/// Extract a YouTube video ID from a URL or bare ID.
///
/// Returns an empty string when nothing matches; callers treat that as
/// "not a video block".
pub fn extract_youtube_id(input: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.contains('/') && !trimmed.contains('.') && trimmed.len() >= 11 {
        return trimmed.to_owned();
    }

    YOUTUBE_PATTERNS
        .iter()
        .find_map(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1))
        .map_or_else(String::new, |m| m.as_str().to_owned())
}

/// Extract a Vimeo video ID from a URL or bare numeric ID.
pub fn extract_vimeo_id(input: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.to_owned();
    }

    VIMEO_PATTERNS
        .iter()
        .find_map(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1))
        .map_or_else(String::new, |m| m.as_str().to_owned())
}

/// Render a YouTube iframe embed plus print placeholder.
pub fn render_youtube(video_id: &str) -> String {
    let id = escape_html(video_id);
    let url = format!("https://www.youtube.com/watch?v={id}");
    format!(
        "<div class=\"video-container\">\n\
         <iframe width=\"560\" height=\"315\" src=\"https://www.youtube.com/embed/{id}\"\n\
         frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; \
         gyroscope; picture-in-picture\"\nallowfullscreen></iframe>\n</div>\
         <div class=\"video-print-placeholder\">\n\
         <p><strong>YouTube Video</strong></p>\n\
         <p>This embedded video is not available in print. You can view it online at:</p>\n\
         <p><a href=\"{url}\">{url}</a></p>\n</div>"
    )
}

/// Render a Vimeo iframe embed plus print placeholder.
pub fn render_vimeo(video_id: &str) -> String {
    let id = escape_html(video_id);
    let url = format!("https://vimeo.com/{id}");
    format!(
        "<div class=\"video-container\">\n\
         <iframe src=\"https://player.vimeo.com/video/{id}\"\n\
         width=\"560\" height=\"315\" frameborder=\"0\"\n\
         allow=\"autoplay; fullscreen; picture-in-picture\" allowfullscreen></iframe>\n</div>\
         <div class=\"video-print-placeholder\">\n\
         <p><strong>Vimeo Video</strong></p>\n\
         <p>This embedded video is not available in print. You can view it online at:</p>\n\
         <p><a href=\"{url}\">{url}</a></p>\n</div>"
    )
}

/// Render a local mp4 player plus print placeholder.
///
/// `video_path` must already be rewritten to its serving URL.
pub fn render_mp4(video_path: &str) -> String {
    let path = escape_html(video_path);
    let filename = video_path.rsplit('/').next().unwrap_or(video_path);
    let filename = escape_html(filename);
    format!(
        "<div class=\"video-container\">\n\
         <video class=\"local-video-player\" style=\"max-width: 100%; height: auto;\" controls>\n\
         <source src=\"{path}\" type=\"video/mp4\">\n\
         Your browser does not support the video tag.\n</video>\n</div>\
         <div class=\"video-print-placeholder\">\n\
         <p><strong>Video Content</strong></p>\n\
         <p>This embedded video ({filename}) is not available in print.</p>\n\
         <p>To view this video, access this document at your wiki URL.</p>\n</div>"
    )
}
