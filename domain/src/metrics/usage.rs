//! Token usage and cost estimation for generation calls

use serde::{Deserialize, Serialize};

/// Tokens consumed by one generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// On-demand prices in USD per 1000 tokens.
///
/// Zero prices disable the cost estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenPricing {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl TokenPricing {
    pub fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    pub fn estimate(&self, usage: &TokenUsage) -> f64 {
        (usage.input_tokens as f64 * self.input_per_1k
            + usage.output_tokens as f64 * self.output_per_1k)
            / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        assert_eq!(TokenUsage::new(120, 380).total(), 500);
    }

    #[test]
    fn test_estimate() {
        let pricing = TokenPricing::new(0.003, 0.015);
        let cost = pricing.estimate(&TokenUsage::new(1000, 2000));
        assert!((cost - 0.033).abs() < 1e-12);
    }

    #[test]
    fn test_zero_pricing_costs_nothing() {
        assert_eq!(
            TokenPricing::default().estimate(&TokenUsage::new(500, 500)),
            0.0
        );
    }
}
