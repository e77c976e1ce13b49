use crate::core::{DonutSegment, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one donut chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// One filled path per segment; fills cycle when there are fewer fills
    /// than segments.
    pub fn from_donut(
        viewport: Viewport,
        segments: &[DonutSegment],
        fills: &[&str],
    ) -> ChartResult<Self> {
        if fills.is_empty() && !segments.is_empty() {
            return Err(ChartError::InvalidData(
                "donut frame needs at least one fill".to_owned(),
            ));
        }
        let paths = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                PathPrimitive::new(segment.path().to_string(), fills[index % fills.len()])
            })
            .collect();
        Ok(Self {
            viewport,
            paths,
            texts: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.texts.is_empty()
    }
}
