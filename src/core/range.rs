use crate::error::{ChartError, ChartResult};

/// Produces `steps` evenly spaced values from `min` to `max` inclusive.
///
/// A single step yields `[min]`; zero steps is rejected.
pub fn generate_range(min: f64, max: f64, steps: usize) -> ChartResult<Vec<f64>> {
    match steps {
        0 => Err(ChartError::InvalidRangeSteps { steps }),
        1 => Ok(vec![min]),
        _ => {
            let step_size = (max - min) / (steps - 1) as f64;
            Ok((0..steps)
                .map(|index| {
                    if index == steps - 1 {
                        max
                    } else {
                        min + index as f64 * step_size
                    }
                })
                .collect())
        }
    }
}
