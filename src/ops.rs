//! Operation counting for sequential classifier stacks (MDR-004)
//!
//! Derives the `total_operations` input of a [`crate::TrainingRun`] from
//! the layer arithmetic of a sequential model. Multiply-adds count as two
//! operations; the backward pass of a layer costs roughly two forward
//! passes (one GEMM for the input gradient, one for the weight gradient),
//! so a full training step is counted as three forward passes.

use serde::{Deserialize, Serialize};

/// Arithmetic work contributed by one layer, per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerOps {
    /// 2-D convolution over a feature map
    Conv2d {
        /// Output feature-map height
        out_h: u64,
        /// Output feature-map width
        out_w: u64,
        /// Kernel height
        kernel_h: u64,
        /// Kernel width
        kernel_w: u64,
        /// Input channels
        in_channels: u64,
        /// Output channels
        out_channels: u64,
    },
    /// Fully-connected layer
    Dense {
        /// Input features
        inputs: u64,
        /// Output features
        outputs: u64,
    },
}

impl LayerOps {
    /// Forward operations for one sample (multiply-add counted as 2 ops).
    pub fn forward_ops(&self) -> u64 {
        match *self {
            Self::Conv2d { out_h, out_w, kernel_h, kernel_w, in_channels, out_channels } => {
                2 * out_h * out_w * kernel_h * kernel_w * in_channels * out_channels
            }
            Self::Dense { inputs, outputs } => 2 * inputs * outputs,
        }
    }
}

/// Ordered layer stack used to count operations per sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsModel {
    layers: Vec<LayerOps>,
}

impl OpsModel {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer.
    pub fn layer(mut self, layer: LayerOps) -> Self {
        self.layers.push(layer);
        self
    }

    /// Number of layers in the stack.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Forward operations for one sample.
    pub fn forward_ops_per_sample(&self) -> u64 {
        self.layers.iter().map(LayerOps::forward_ops).sum()
    }

    /// Operations for one training step on one sample (forward + backward).
    pub fn training_ops_per_sample(&self) -> u64 {
        3 * self.forward_ops_per_sample()
    }

    /// Total training operations over the given number of samples.
    pub fn total_operations(&self, samples: u64) -> u64 {
        self.training_ops_per_sample().saturating_mul(samples)
    }

    /// The small convolutional digit classifier: 28x28 grayscale input,
    /// two 3x3 convolutions, a 2x2 max-pool (no multiply-adds), and two
    /// dense layers ending in a 10-way output.
    pub fn digit_classifier() -> Self {
        Self::new()
            .layer(LayerOps::Conv2d {
                out_h: 26,
                out_w: 26,
                kernel_h: 3,
                kernel_w: 3,
                in_channels: 1,
                out_channels: 32,
            })
            .layer(LayerOps::Conv2d {
                out_h: 24,
                out_w: 24,
                kernel_h: 3,
                kernel_w: 3,
                in_channels: 32,
                out_channels: 64,
            })
            // pool to 12x12x64, flatten to 9216
            .layer(LayerOps::Dense { inputs: 9216, outputs: 128 })
            .layer(LayerOps::Dense { inputs: 128, outputs: 10 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_forward_ops() {
        let layer = LayerOps::Dense { inputs: 128, outputs: 10 };
        assert_eq!(layer.forward_ops(), 2 * 128 * 10);
    }

    #[test]
    fn test_conv2d_forward_ops() {
        let layer = LayerOps::Conv2d {
            out_h: 26,
            out_w: 26,
            kernel_h: 3,
            kernel_w: 3,
            in_channels: 1,
            out_channels: 32,
        };
        assert_eq!(layer.forward_ops(), 2 * 26 * 26 * 3 * 3 * 32);
    }

    #[test]
    fn test_empty_model_has_zero_ops() {
        let model = OpsModel::new();
        assert_eq!(model.num_layers(), 0);
        assert_eq!(model.forward_ops_per_sample(), 0);
        assert_eq!(model.total_operations(1_000_000), 0);
    }

    #[test]
    fn test_model_sums_layers() {
        let model = OpsModel::new()
            .layer(LayerOps::Dense { inputs: 100, outputs: 50 })
            .layer(LayerOps::Dense { inputs: 50, outputs: 10 });

        assert_eq!(model.num_layers(), 2);
        assert_eq!(model.forward_ops_per_sample(), 2 * 100 * 50 + 2 * 50 * 10);
    }

    #[test]
    fn test_training_ops_are_three_forward_passes() {
        let model = OpsModel::new().layer(LayerOps::Dense { inputs: 10, outputs: 10 });
        assert_eq!(model.training_ops_per_sample(), 3 * model.forward_ops_per_sample());
    }

    #[test]
    fn test_total_operations_scales_with_samples() {
        let model = OpsModel::new().layer(LayerOps::Dense { inputs: 10, outputs: 10 });
        let per_step = model.training_ops_per_sample();
        assert_eq!(model.total_operations(1000), per_step * 1000);
    }

    #[test]
    fn test_total_operations_saturates_instead_of_wrapping() {
        let model = OpsModel::new().layer(LayerOps::Dense { inputs: 1 << 20, outputs: 1 << 20 });
        assert_eq!(model.total_operations(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_digit_classifier_layer_count() {
        let model = OpsModel::digit_classifier();
        assert_eq!(model.num_layers(), 4);
    }

    #[test]
    fn test_digit_classifier_dominated_by_second_conv() {
        // 24*24*3*3*32*64 multiply-adds dwarf everything else in the stack
        let second_conv = LayerOps::Conv2d {
            out_h: 24,
            out_w: 24,
            kernel_h: 3,
            kernel_w: 3,
            in_channels: 32,
            out_channels: 64,
        };
        let model = OpsModel::digit_classifier();
        assert!(second_conv.forward_ops() > model.forward_ops_per_sample() / 2);
    }

    #[test]
    fn test_digit_classifier_ops_magnitude() {
        // roughly 24 MFLOPs forward per sample for this stack
        let forward = OpsModel::digit_classifier().forward_ops_per_sample();
        assert!(forward > 20_000_000);
        assert!(forward < 30_000_000);
    }

    #[test]
    fn test_ops_model_serde_round_trip() {
        let model = OpsModel::digit_classifier();
        let json = serde_json::to_string(&model).expect("JSON serialization should succeed");
        let parsed: OpsModel =
            serde_json::from_str(&json).expect("JSON deserialization should succeed");
        assert_eq!(model, parsed);
    }
}
