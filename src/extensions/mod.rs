//! Draw-pass extensions owned by the chart assembly side.

pub mod plugins;

pub use plugins::{
    CenterTextPlugin, CenterValue, ChartKind, ChartPlugin, PluginContext, PluginRegistry,
};
