use rand::Rng;

/// `count` bright CSS colors with random hue, saturation in `[60, 100)` and lightness in `[50, 70)`.
pub fn random_colors(count: usize) -> Vec<String> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let hue: u32 = rng.random_range(0..360);
            let saturation: f64 = rng.random_range(60.0..100.0);
            let lightness: f64 = rng.random_range(50.0..70.0);

            format!("hsl({hue}, {saturation:.1}%, {lightness:.1}%)")
        })
        .collect()
}
