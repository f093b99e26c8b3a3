use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::{check_operand, Operand};
use std::str::FromStr;

/// Specifies the reduction applied to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {s}"
            ))),
        }
    }
}

/// Squared-error loss between predictions and targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Appends the loss to `graph` and returns its node.
    ///
    /// Targets can be plain numbers or nodes of `graph`.
    ///
    /// # Errors
    /// `DimensionMismatch` when the slices differ in length, `InvalidOperand`
    /// when they are empty or hold a node foreign to `graph`. Nothing is
    /// appended on error.
    pub fn forward<T>(
        &self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[T],
    ) -> Result<NodeId, ScalarGradError>
    where
        T: Into<Operand> + Copy,
    {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }

        for (&prediction, &target) in predictions.iter().zip(targets) {
            check_operand(graph, "mse_loss", prediction.into())?;
            check_operand(graph, "mse_loss", target.into())?;
        }

        let mut total: Option<NodeId> = None;
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let diff = graph.sub(prediction, target)?;
            let squared = graph.pow(diff, 2.0)?;
            total = Some(match total {
                Some(acc) => graph.add(acc, squared)?,
                None => squared,
            });
        }
        let total = total.ok_or_else(|| {
            ScalarGradError::invalid_operand("mse_loss", "predictions and targets are empty")
        })?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => graph.div(total, predictions.len() as f64),
        }
    }
}

/// Mean squared error of `predictions` against `targets`.
pub fn mse_loss<T>(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[T],
) -> Result<NodeId, ScalarGradError>
where
    T: Into<Operand> + Copy,
{
    MseLoss::default().forward(graph, predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
