use burn::{
    nn::{Linear, LinearConfig, Relu},
    prelude::*,
};

// #[derive(Config)] already generates Clone and Serialize/Deserialize;
// adding them again gives conflicting impls.
#[derive(Config, Debug)]
pub struct SurvivalMlpConfig {
    pub input_size:  usize,
    pub hidden_size: usize,
    #[config(default = 2)]
    pub num_classes: usize,
}

impl SurvivalMlpConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SurvivalMlp<B> {
        SurvivalMlp {
            hidden:     LinearConfig::new(self.input_size, self.hidden_size).init(device),
            output:     LinearConfig::new(self.hidden_size, self.num_classes).init(device),
            activation: Relu::new(),
        }
    }
}

/// Linear → ReLU → Linear. Produces one logit per class.
#[derive(Module, Debug)]
pub struct SurvivalMlp<B: Backend> {
    pub hidden:     Linear<B>,
    pub output:     Linear<B>,
    pub activation: Relu,
}

impl<B: Backend> SurvivalMlp<B> {
    /// features: [batch, input_size] → logits: [batch, num_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.activation.forward(self.hidden.forward(features));
        self.output.forward(x)
    }

    /// Softmax over the class dimension
    pub fn forward_proba(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        burn::tensor::activation::softmax(self.forward(features), 1)
    }
}
