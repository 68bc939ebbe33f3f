use web_sys::CanvasRenderingContext2d;

const WAVEFORM_STROKE: &str = "#acd";

/// Vertices of the waveform polyline, one per sample.
///
/// The 0-255 amplitude range maps into the vertical band between 10%
/// and 90% of the surface height, so the trace keeps a margin at both
/// edges. The zero-signal level (128) lands on the midline.
pub fn waveform_points(data: &[u8], width: f64, height: f64) -> Vec<(f64, f64)> {
    let len = data.len();
    data.iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = width * i as f64 / len as f64;
            let y = (0.1 + 0.8 * v as f64 / 256.0) * height;
            (x, y)
        })
        .collect()
}

/// Fully redraw the waveform canvas as a stroked polyline.
pub fn draw_waveform(ctx: &CanvasRenderingContext2d, data: &[u8]) {
    let Some(canvas) = ctx.canvas() else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let points = waveform_points(data, width, height);
    let Some(&(x0, y0)) = points.first() else { return };

    ctx.begin_path();
    ctx.set_stroke_style_str(WAVEFORM_STROKE);
    ctx.move_to(x0, y0);
    for &(x, y) in &points {
        ctx.line_to(x, y);
    }
    ctx.stroke();
}
