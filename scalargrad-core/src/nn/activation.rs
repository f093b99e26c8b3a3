use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::activation::DEFAULT_LEAKY_RELU_ALPHA;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to the pre-activation of a [`Unit`](crate::nn::Unit).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    LeakyRelu(f64),
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Appends the activation of `input` to `graph`.
    pub fn apply(&self, graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarGradError> {
        match *self {
            Activation::Linear => graph.linear(input),
            Activation::Relu => graph.relu(input),
            Activation::LeakyRelu(alpha) => graph.leaky_relu(input, alpha),
            Activation::Sigmoid => graph.sigmoid(input),
            Activation::Tanh => graph.tanh(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::LeakyRelu(_) => "leaky_relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::LeakyRelu(alpha) => write!(f, "leaky_relu({alpha})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    /// Parses an activation name, ignoring case. `leaky_relu` uses the
    /// default slope of 0.01.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Activation::Linear),
            "relu" => Ok(Activation::Relu),
            "leaky_relu" => Ok(Activation::LeakyRelu(DEFAULT_LEAKY_RELU_ALPHA)),
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            _ => Err(ScalarGradError::UnsupportedActivation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Op;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("linear".parse::<Activation>().unwrap(), Activation::Linear);
        assert_eq!("ReLU".parse::<Activation>().unwrap(), Activation::Relu);
        assert_eq!(
            "leaky_relu".parse::<Activation>().unwrap(),
            Activation::LeakyRelu(0.01)
        );
        assert_eq!(" sigmoid ".parse::<Activation>().unwrap(), Activation::Sigmoid);
        assert_eq!("tanh".parse::<Activation>().unwrap(), Activation::Tanh);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "softplus".parse::<Activation>(),
            Err(ScalarGradError::UnsupportedActivation("softplus".to_string()))
        );
        let message = "gelu".parse::<Activation>().unwrap_err().to_string();
        assert_eq!(message, "Unsupported activation function 'gelu'");
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Activation::default(), Activation::Linear);
        assert_eq!(Activation::Tanh.to_string(), "tanh");
        assert_eq!(Activation::LeakyRelu(0.2).to_string(), "leaky_relu(0.2)");
    }

    #[test]
    fn test_apply_dispatch() {
        let cases = [
            (Activation::Linear, Op::Linear, -2.0),
            (Activation::Relu, Op::Relu, 0.0),
            (Activation::LeakyRelu(0.5), Op::LeakyRelu(0.5), -1.0),
            (Activation::Sigmoid, Op::Sigmoid, 1.0 / (1.0 + 2.0f64.exp())),
            (Activation::Tanh, Op::Tanh, (-2.0f64).tanh()),
        ];
        for (activation, op, expected) in cases {
            let mut graph = Graph::new();
            let x = graph.leaf(-2.0);
            let y = activation.apply(&mut graph, x).unwrap();
            assert_eq!(graph.op(y).unwrap(), op);
            assert_relative_eq!(graph.data(y).unwrap(), expected, max_relative = 1e-12);
        }
    }
}
