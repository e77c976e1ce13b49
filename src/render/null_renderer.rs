use tracing::trace;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: validates each frame and keeps a summary of the last one.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    /// Segment fills of the last frame, in draw order.
    pub last_fills: Vec<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        self.last_fills.clear();
        self.last_fills
            .extend(frame.paths.iter().map(|path| path.fill.clone()));
        trace!(
            paths = self.last_path_count,
            texts = self.last_text_count,
            "headless frame rendered"
        );
        Ok(())
    }
}
