use image::RgbaImage;

use crate::color::Color;

const MAX_SAMPLES: usize = 10_000;
const CLUSTERS: usize = 16;
const MAX_ITERATIONS: usize = 10;

const WEIGHT_SATURATION: f32 = 3.0;
const WEIGHT_LUMA: f32 = 6.0;
const WEIGHT_POPULATION: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Swatch {
    pub color: Color,
    pub population: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwatchKind {
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

struct Target {
    luma: (f32, f32, f32),
    saturation: (f32, f32, f32),
}

impl SwatchKind {
    pub const ORDER: [SwatchKind; 6] = [
        SwatchKind::Vibrant,
        SwatchKind::DarkVibrant,
        SwatchKind::LightVibrant,
        SwatchKind::Muted,
        SwatchKind::DarkMuted,
        SwatchKind::LightMuted,
    ];

    /// (min, target, max) for lightness and saturation.
    fn target(self) -> Target {
        const VIBRANT: (f32, f32, f32) = (0.35, 1.0, 1.0);
        const MUTED: (f32, f32, f32) = (0.0, 0.3, 0.4);

        match self {
            SwatchKind::Vibrant => Target {
                luma: (0.3, 0.5, 0.7),
                saturation: VIBRANT,
            },
            SwatchKind::DarkVibrant => Target {
                luma: (0.0, 0.26, 0.45),
                saturation: VIBRANT,
            },
            SwatchKind::LightVibrant => Target {
                luma: (0.55, 0.74, 1.0),
                saturation: VIBRANT,
            },
            SwatchKind::Muted => Target {
                luma: (0.3, 0.5, 0.7),
                saturation: MUTED,
            },
            SwatchKind::DarkMuted => Target {
                luma: (0.0, 0.26, 0.45),
                saturation: MUTED,
            },
            SwatchKind::LightMuted => Target {
                luma: (0.55, 0.74, 1.0),
                saturation: MUTED,
            },
        }
    }
}

/// Vibrant-style palette: hex colors in [`SwatchKind::ORDER`], skipping kinds nothing matched.
pub(crate) fn palette(image: &RgbaImage) -> Vec<String> {
    let swatches = quantize(image);
    let mut used: Vec<Color> = Vec::new();
    let mut colors = Vec::new();

    for kind in SwatchKind::ORDER {
        if let Some(swatch) = find_swatch(&swatches, kind, &used) {
            used.push(swatch.color);
            colors.push(swatch.color.hex());
        }
    }

    colors
}

fn find_swatch(swatches: &[Swatch], kind: SwatchKind, used: &[Color]) -> Option<Swatch> {
    let target = kind.target();
    let max_population = swatches.iter().map(|s| s.population).max()?.max(1) as f32;

    swatches
        .iter()
        .filter(|swatch| !used.contains(&swatch.color))
        .filter_map(|swatch| {
            let hsl = swatch.color.hsl();
            let (min_luma, target_luma, max_luma) = target.luma;
            let (min_sat, target_sat, max_sat) = target.saturation;

            let fits = (min_luma..=max_luma).contains(&hsl.l)
                && (min_sat..=max_sat).contains(&hsl.s);

            fits.then(|| {
                let score = (1.0 - (hsl.s - target_sat).abs()) * WEIGHT_SATURATION
                    + (1.0 - (hsl.l - target_luma).abs()) * WEIGHT_LUMA
                    + swatch.population as f32 / max_population * WEIGHT_POPULATION;
                (score, *swatch)
            })
        })
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, swatch)| swatch)
}

fn sample_pixels(image: &RgbaImage) -> Vec<[f32; 3]> {
    let total = image.pixels().len();
    let step = (total / MAX_SAMPLES).max(1);

    image
        .pixels()
        .step_by(step)
        // transparent and near-white pixels say nothing about the artwork
        .filter(|pixel| pixel[3] >= 125 && !(pixel[0] > 250 && pixel[1] > 250 && pixel[2] > 250))
        .map(|pixel| [pixel[0] as f32, pixel[1] as f32, pixel[2] as f32])
        .take(MAX_SAMPLES)
        .collect()
}

fn squared_distance(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    (0..3).map(|c| (a[c] - b[c]) * (a[c] - b[c])).sum()
}

/// Groups the sampled pixels into at most [`CLUSTERS`] colors with k-means.
pub(crate) fn quantize(image: &RgbaImage) -> Vec<Swatch> {
    let samples = sample_pixels(image);
    if samples.is_empty() {
        return vec![];
    }

    let k = CLUSTERS.min(samples.len());
    let mut centroids: Vec<[f32; 3]> = (0..k).map(|i| samples[i * samples.len() / k]).collect();
    let mut assignments = vec![0usize; samples.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut sums = vec![[0f32; 3]; k];
        let mut counts = vec![0usize; k];

        for (sample, assignment) in samples.iter().zip(assignments.iter_mut()) {
            let nearest = centroids
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    squared_distance(sample, a).total_cmp(&squared_distance(sample, b))
                })
                .map(|(index, _)| index)
                .unwrap_or(0);

            *assignment = nearest;
            counts[nearest] += 1;
            for channel in 0..3 {
                sums[nearest][channel] += sample[channel];
            }
        }

        let mut changed = false;
        for (index, centroid) in centroids.iter_mut().enumerate() {
            if counts[index] == 0 {
                continue;
            }

            let count = counts[index] as f32;
            let updated = [
                sums[index][0] / count,
                sums[index][1] / count,
                sums[index][2] / count,
            ];

            if squared_distance(centroid, &updated) > 1e-2 {
                changed = true;
            }
            *centroid = updated;
        }

        if !changed {
            break;
        }
    }

    let mut counts = vec![0usize; k];
    for assignment in assignments {
        counts[assignment] += 1;
    }

    let mut swatches: Vec<Swatch> = Vec::new();
    for (centroid, population) in centroids.into_iter().zip(counts) {
        if population == 0 {
            continue;
        }

        let color = Color::from(centroid.map(|c| c.clamp(0.0, 255.0).round() as u8));

        match swatches.iter_mut().find(|s| s.color.distance_sq(&color) < 1.0) {
            Some(existing) => existing.population += population,
            None => swatches.push(Swatch { color, population }),
        }
    }

    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn image_of(colors: &[[u8; 3]]) -> RgbaImage {
        let band = 10;
        RgbaImage::from_fn((colors.len() * band) as u32, 10, |x, _| {
            let [r, g, b] = colors[x as usize / band];
            Rgba([r, g, b, 255])
        })
    }

    #[test]
    fn quantize_finds_the_distinct_colors() {
        let image = image_of(&[[200, 20, 20], [20, 20, 200], [200, 20, 20]]);
        let swatches = quantize(&image);

        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[0].color, Color::new(200, 20, 20));
        assert_eq!(swatches[0].population, 200);
        assert_eq!(swatches[1].color, Color::new(20, 20, 200));
    }

    #[test]
    fn swatches_come_out_in_vibrant_order() {
        // vibrant red, dark vibrant blue, light muted grey-pink
        let image = image_of(&[[230, 30, 30], [20, 20, 110], [210, 190, 190]]);

        assert_eq!(palette(&image), vec!["#e61e1e", "#14146e", "#d2bebe"]);
    }

    #[test]
    fn transparent_and_white_pixels_are_ignored() {
        let image = RgbaImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([10, 200, 10, 0])
            }
        });

        assert!(quantize(&image).is_empty());
        assert!(palette(&image).is_empty());
    }

    #[test]
    fn a_single_flat_color_fills_one_swatch() {
        let image = image_of(&[[230, 30, 30]]);
        assert_eq!(palette(&image), vec!["#e61e1e".to_string()]);
    }
}
