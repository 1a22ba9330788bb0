use snafu::prelude::*;

pub mod color;
pub mod extract;
pub mod mesh;
mod palette;
pub mod random;
mod sample;

pub use color::Color;
pub use extract::ColorExtractor;
pub use mesh::MeshGradient;

pub const DEFAULT_COLORS: [&str; 2] = ["#000000", "#333333"];

/// Shown while colors for a cover are being extracted.
pub const LOADING_BACKGROUND: &str = "linear-gradient(45deg, #000000, #333333)";

pub fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|color| color.to_string()).collect()
}

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("Unable to fetch cover: {source}"))]
    Fetch { source: reqwest::Error },
    #[snafu(display("Cover request failed with status {status}"))]
    Status { status: u16 },
    #[snafu(display("Unable to decode cover: {source}"))]
    Decode { source: image::ImageError },
    #[snafu(display("Cover is larger than {limit} bytes"))]
    TooLarge { limit: usize },
    #[snafu(display("Cover has no pixels"))]
    EmptyImage,
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Fetch { source }
    }
}

impl From<image::ImageError> for Error {
    fn from(source: image::ImageError) -> Self {
        Self::Decode { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
