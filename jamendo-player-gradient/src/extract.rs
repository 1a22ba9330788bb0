use image::RgbaImage;
use moka::future::Cache;
use reqwest::StatusCode;

use crate::{Error, Result, default_colors, palette::palette, sample::sample_regions};

const MAX_PALETTE_COLORS: usize = 5;
const MAX_COVER_BYTES: usize = 8 * 1024 * 1024;

/// Turns cover art into gradient colors, remembering the result per cover url.
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    http: reqwest::Client,
    cache: Cache<String, Vec<String>>,
    max_cover_bytes: usize,
}

impl ColorExtractor {
    pub fn new() -> Self {
        let cache = moka::future::CacheBuilder::new(500)
            .time_to_live(std::time::Duration::from_secs(60 * 60 * 24))
            .build();

        Self {
            http: reqwest::Client::new(),
            cache,
            max_cover_bytes: MAX_COVER_BYTES,
        }
    }

    /// Colors for `cover_url`, or the defaults when the cover can't be used.
    /// Failures are not cached, so the next request tries the cover again.
    pub async fn colors(&self, cover_url: &str) -> Vec<String> {
        let cover_url = cover_url.trim();

        if !(cover_url.starts_with("http://") || cover_url.starts_with("https://")) {
            return default_colors();
        }

        if let Some(cache) = self.cache.get(cover_url).await {
            return cache;
        }

        match self.fetch_image(cover_url).await {
            Ok(image) => {
                let colors = colors_from_image(&image);
                self.cache
                    .insert(cover_url.to_string(), colors.clone())
                    .await;
                colors
            }
            Err(error) => {
                tracing::warn!("color extraction failed for {cover_url}: {error}");
                default_colors()
            }
        }
    }

    async fn fetch_image(&self, cover_url: &str) -> Result<RgbaImage> {
        let mut response = self.http.get(cover_url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status {
                status: response.status().as_u16(),
            });
        }

        let limit = self.max_cover_bytes;
        if response
            .content_length()
            .is_some_and(|length| length > limit as u64)
        {
            return Err(Error::TooLarge { limit });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if bytes.len() + chunk.len() > limit {
                return Err(Error::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        let image = image::load_from_memory(&bytes)?.to_rgba8();

        if image.width() == 0 || image.height() == 0 {
            return Err(Error::EmptyImage);
        }

        Ok(image)
    }
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Palette swatches when there are at least two, otherwise region samples.
pub fn colors_from_image(image: &RgbaImage) -> Vec<String> {
    let mut colors = palette(image);

    if colors.len() >= 2 {
        colors.truncate(MAX_PALETTE_COLORS);
    } else {
        tracing::debug!("palette too small ({} colors), sampling regions", colors.len());
        colors = sample_regions(image);
    }

    if colors.len() < 2 {
        return default_colors();
    }

    colors
}
