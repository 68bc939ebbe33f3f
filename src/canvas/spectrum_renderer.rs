use web_sys::CanvasRenderingContext2d;

const SPECTRUM_FILL: &str = "#acd";

/// Vertices of the spectrum polygon, one per plotted bin.
///
/// Only the lower half of the frequency range is plotted (bins
/// `0..=len/2`); the upper half is discarded since the perceptually
/// interesting content sits low. Magnitude 0 maps to the bottom edge,
/// 255 to just below the top.
pub fn spectrum_points(data: &[u8], width: f64, height: f64) -> Vec<(f64, f64)> {
    let stop = data.len() / 2;
    if stop == 0 {
        return Vec::new();
    }
    (0..=stop)
        .map(|i| {
            let x = width * i as f64 / stop as f64;
            let y = height * (1.0 - data[i] as f64 / 256.0);
            (x, y)
        })
        .collect()
}

/// Fully redraw the spectrum canvas as a filled area chart.
pub fn draw_spectrum(ctx: &CanvasRenderingContext2d, data: &[u8]) {
    let Some(canvas) = ctx.canvas() else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let points = spectrum_points(data, width, height);
    if points.is_empty() {
        return;
    }

    ctx.begin_path();
    ctx.set_fill_style_str(SPECTRUM_FILL);
    ctx.move_to(0.0, height);
    for &(x, y) in &points {
        ctx.line_to(x, y);
    }
    ctx.line_to(width, height);
    ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::spectrum_points;

    #[test]
    fn test_plots_lower_half_inclusive() {
        let data = vec![0u8; 1024];
        let points = spectrum_points(&data, 300.0, 100.0);
        // Bins 0..=512.
        assert_eq!(points.len(), 513);
        assert_eq!(points.first().unwrap().0, 0.0);
        assert_eq!(points.last().unwrap().0, 300.0);
    }

    #[test]
    fn test_magnitude_maps_to_height() {
        let mut data = vec![0u8; 8];
        data[0] = 0;
        data[1] = 128;
        let points = spectrum_points(&data, 100.0, 100.0);
        // Silence sits on the bottom edge, half-scale at mid height.
        assert_eq!(points[0].1, 100.0);
        assert_eq!(points[1].1, 50.0);
        // Full scale approaches but never reaches the top (255/256).
        let points = spectrum_points(&[255u8; 8], 100.0, 100.0);
        assert!(points[0].1 > 0.0 && points[0].1 < 1.0);
    }

    #[test]
    fn test_degenerate_buffer_yields_nothing() {
        assert!(spectrum_points(&[], 100.0, 100.0).is_empty());
        assert!(spectrum_points(&[200], 100.0, 100.0).is_empty());
    }
}
