use std::{fmt::Write, sync::LazyLock, time::Duration};

use crate::random::random_colors;

/// The animation cycles through this many steps before starting over.
pub const STEPS: u32 = 360;
/// Keyframes are sampled every this many steps.
const KEYFRAME_STRIDE: u32 = 10;

pub const ALBUM_FRAME_INTERVAL: Duration = Duration::from_millis(50);
pub const RANDOM_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

const FALLBACK_DARK: &str = "#000000";
const FALLBACK_LIGHT: &str = "#333333";

/// One radial layer drifting around `(base ± amplitude)` on each axis.
#[derive(Debug, Clone, Copy)]
struct Layer {
    x: (f64, f64, f64),
    y: (f64, f64, f64),
    stop: u32,
}

const LAYERS: [Layer; 5] = [
    Layer {
        x: (20.0, 10.0, 0.01),
        y: (30.0, 15.0, 0.015),
        stop: 40,
    },
    Layer {
        x: (80.0, 8.0, 0.012),
        y: (20.0, 12.0, 0.018),
        stop: 45,
    },
    Layer {
        x: (60.0, 15.0, 0.008),
        y: (70.0, 10.0, 0.011),
        stop: 35,
    },
    Layer {
        x: (25.0, 12.0, 0.014),
        y: (80.0, 8.0, 0.009),
        stop: 50,
    },
    Layer {
        x: (75.0, 6.0, 0.016),
        y: (60.0, 14.0, 0.013),
        stop: 40,
    },
];

impl Layer {
    fn position(&self, step: u32) -> (f64, f64) {
        let step = (step % STEPS) as f64;
        let (bx, ax, fx) = self.x;
        let (by, ay, fy) = self.y;

        (bx + (step * fx).sin() * ax, by + (step * fy).cos() * ay)
    }
}

/// Position of every layer at `step`, in percent of the element.
pub fn positions(step: u32) -> [(f64, f64); 5] {
    LAYERS.map(|layer| layer.position(step))
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshGradient {
    colors: [String; 5],
    frame_interval: Duration,
}

impl MeshGradient {
    /// Gradient for colors taken from album art, missing colors borrowed from the first two.
    pub fn album(colors: &[String]) -> Self {
        let color = |index: usize| colors.get(index).cloned();
        let dark = || color(0).unwrap_or_else(|| FALLBACK_DARK.to_string());
        let light = || color(1).unwrap_or_else(|| FALLBACK_LIGHT.to_string());

        Self {
            colors: [
                dark(),
                light(),
                color(2).unwrap_or_else(dark),
                color(3).unwrap_or_else(light),
                color(4).unwrap_or_else(dark),
            ],
            frame_interval: ALBUM_FRAME_INTERVAL,
        }
    }

    pub fn random() -> Self {
        let mut colors = random_colors(5).into_iter();
        let mut next = || colors.next().unwrap_or_else(|| FALLBACK_DARK.to_string());

        Self {
            colors: [next(), next(), next(), next(), next()],
            frame_interval: RANDOM_FRAME_INTERVAL,
        }
    }

    pub fn colors(&self) -> &[String; 5] {
        &self.colors
    }

    /// Length of one full cycle through all steps.
    pub fn cycle(&self) -> Duration {
        self.frame_interval * STEPS
    }

    /// Inline style for an element carrying the `mesh-gradient` class.
    pub fn style(&self) -> String {
        let mut style = String::new();
        for (index, color) in self.colors.iter().enumerate() {
            let _ = write!(style, "--mesh-c{index}: {color}; ");
        }
        let _ = write!(style, "animation-duration: {}ms;", self.cycle().as_millis());
        style
    }

    /// The gradient frozen at `step`.
    pub fn background_at(&self, step: u32) -> String {
        LAYERS
            .iter()
            .zip(&self.colors)
            .map(|(layer, color)| {
                let (x, y) = layer.position(step);
                format!(
                    "radial-gradient(circle at {x:.3}% {y:.3}%, {color} 0%, transparent {}%)",
                    layer.stop
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Registered properties, shared keyframes and the `mesh-gradient` class.
pub fn stylesheet() -> &'static str {
    &STYLESHEET
}

static STYLESHEET: LazyLock<String> = LazyLock::new(|| {
    let mut css = String::new();

    for (index, layer) in LAYERS.iter().enumerate() {
        let (x, y) = layer.position(0);
        for (axis, initial) in [("x", x), ("y", y)] {
            let _ = writeln!(
                css,
                "@property --mesh-{axis}{index} {{ syntax: '<percentage>'; inherits: false; initial-value: {initial:.3}%; }}"
            );
        }
    }

    let _ = writeln!(css, "@keyframes mesh-drift {{");
    let steps = (0..STEPS)
        .step_by(KEYFRAME_STRIDE as usize)
        .chain([STEPS - 1]);
    for step in steps {
        let percent = step as f64 / (STEPS - 1) as f64 * 100.0;
        let _ = write!(css, "  {percent:.3}% {{");
        for (index, (x, y)) in positions(step).iter().enumerate() {
            let _ = write!(css, " --mesh-x{index}: {x:.3}%; --mesh-y{index}: {y:.3}%;");
        }
        let _ = writeln!(css, " }}");
    }
    let _ = writeln!(css, "}}");

    let layers = LAYERS
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            format!(
                "radial-gradient(circle at var(--mesh-x{index}) var(--mesh-y{index}), var(--mesh-c{index}) 0%, transparent {}%)",
                layer.stop
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(
        css,
        ".mesh-gradient {{ position: absolute; inset: 0; opacity: 0.8; filter: blur(20px); background: {layers}; animation: mesh-drift 18s linear infinite; }}"
    );

    css
});
