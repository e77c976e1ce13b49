use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoundingBox, format_currency};
use crate::error::{ChartError, ChartResult};
use crate::render::{CenterLabel, RenderFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
}

/// Read-only draw-pass state passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluginContext<'a> {
    pub chart_id: &'a str,
    pub kind: ChartKind,
    pub chart_area: BoundingBox,
    pub chart_height: f64,
    pub dataset: &'a [f64],
}

/// After-draw hook; plugins may only append to the frame.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn after_draw(&mut self, context: &PluginContext<'_>, frame: &mut RenderFrame);
}

/// What a center-text plugin prints under its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterValue {
    /// Sum of the dataset, formatted as currency.
    DatasetTotal,
    Fixed(String),
}

/// Draws a caption/value pair in the hole of one specific doughnut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterTextPlugin {
    id: String,
    target_chart_id: String,
    caption: String,
    value: CenterValue,
}

impl CenterTextPlugin {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        target_chart_id: impl Into<String>,
        caption: impl Into<String>,
        value: CenterValue,
    ) -> Self {
        Self {
            id: id.into(),
            target_chart_id: target_chart_id.into(),
            caption: caption.into(),
            value,
        }
    }
}

impl ChartPlugin for CenterTextPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn after_draw(&mut self, context: &PluginContext<'_>, frame: &mut RenderFrame) {
        if context.kind != ChartKind::Doughnut || context.chart_id != self.target_chart_id {
            return;
        }
        let value = match &self.value {
            CenterValue::DatasetTotal => {
                if context.dataset.is_empty() {
                    return;
                }
                format_currency(context.dataset.iter().sum())
            }
            CenterValue::Fixed(text) => text.clone(),
        };
        let label = CenterLabel::new(self.caption.clone(), value);
        frame
            .texts
            .extend(label.primitives(context.chart_area, context.chart_height));
    }
}

/// Plugin table owned by the chart assembly.
///
/// Initialization is explicit state on the registry: [`Self::register_once`]
/// runs its setup a single time per registry.
#[derive(Default)]
pub struct PluginRegistry {
    initialized: bool,
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("initialized", &self.initialized)
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Runs `setup` on first call only. Returns `true` when it ran.
    ///
    /// A failing setup leaves the registry uninitialized and drops whatever it
    /// registered, so the same setup can be retried.
    pub fn register_once<F>(&mut self, setup: F) -> ChartResult<bool>
    where
        F: FnOnce(&mut Self) -> ChartResult<()>,
    {
        if self.initialized {
            return Ok(false);
        }
        let registered_before = self.plugins.len();
        if let Err(err) = setup(self) {
            self.plugins.truncate(registered_before);
            return Err(err);
        }
        self.initialized = true;
        debug!(plugin_count = self.plugins.len(), "plugins initialized");
        Ok(true)
    }

    /// Registers a plugin with a unique, non-empty id.
    pub fn register(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        debug!(plugin_id = %plugin_id, "plugin registered");
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self.plugins.iter().position(|p| p.id() == plugin_id) {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Runs every plugin's after-draw hook in registration order.
    pub fn after_draw(&mut self, context: &PluginContext<'_>, frame: &mut RenderFrame) {
        for plugin in &mut self.plugins {
            plugin.after_draw(context, frame);
        }
    }
}
