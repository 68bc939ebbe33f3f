use web_sys::AnalyserNode;

/// Source of byte-valued (0-255) analysis snapshots.
///
/// Abstracts the Web Audio `AnalyserNode` so the render path can be
/// exercised against an in-memory fake in tests. Buffers are filled
/// fresh on each call; implementations must not retain them.
pub trait AnalysisSource {
    /// Length of the frequency-magnitude buffer.
    fn frequency_bin_count(&self) -> usize;

    /// Length of the time-domain amplitude buffer.
    fn fft_size(&self) -> usize;

    /// Write the current frequency magnitudes into `buf`.
    fn fill_frequency_data(&self, buf: &mut [u8]);

    /// Write the current time-domain samples (centered on 128) into `buf`.
    fn fill_time_domain_data(&self, buf: &mut [u8]);
}

impl AnalysisSource for AnalyserNode {
    fn frequency_bin_count(&self) -> usize {
        AnalyserNode::frequency_bin_count(self) as usize
    }

    fn fft_size(&self) -> usize {
        AnalyserNode::fft_size(self) as usize
    }

    fn fill_frequency_data(&self, buf: &mut [u8]) {
        self.get_byte_frequency_data(buf);
    }

    fn fill_time_domain_data(&self, buf: &mut [u8]) {
        self.get_byte_time_domain_data(buf);
    }
}
