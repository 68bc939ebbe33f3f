pub mod spectrum_renderer;
pub mod waveform_renderer;

use web_sys::CanvasRenderingContext2d;

use crate::audio::analyser::AnalysisSource;

/// Draw one frame of analysis output onto the two scope canvases.
///
/// Fresh byte buffers are pulled from `source` on every call and both
/// surfaces are redrawn from scratch; nothing persists between frames.
pub fn render_analysis(
    spectrum_ctx: &CanvasRenderingContext2d,
    waveform_ctx: &CanvasRenderingContext2d,
    source: &impl AnalysisSource,
) {
    let mut freq = vec![0u8; source.frequency_bin_count()];
    source.fill_frequency_data(&mut freq);
    spectrum_renderer::draw_spectrum(spectrum_ctx, &freq);

    let mut wave = vec![0u8; source.fft_size()];
    source.fill_time_domain_data(&mut wave);
    waveform_renderer::draw_waveform(waveform_ctx, &wave);
}
