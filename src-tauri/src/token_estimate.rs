//! Naive token counting, prompt chunking and cost estimation for LLM calls.
//!
//! Tokens are whitespace-separated words. That is only a rough stand-in for a
//! real tokenizer, but it keeps estimates predictable and dependency free.

use serde::{Deserialize, Serialize};

/// USD per 1k tokens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            input_per_1k: 0.5,
            output_per_1k: 1.5,
        }
    }
}

impl Pricing {
    pub fn validate(&self) -> Result<(), String> {
        for (name, rate) in [
            ("input", self.input_per_1k),
            ("output", self.output_per_1k),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(format!(
                    "Invalid {name} price per 1k tokens: {rate}; expected a non-negative number."
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub price_usd: f64,
}

pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lazily yields chunks of at most `max_tokens` tokens joined by single spaces.
pub fn chunk_tokens(
    text: &str,
    max_tokens: i64,
) -> Result<impl Iterator<Item = String> + '_, String> {
    let chunk_size = usize::try_from(max_tokens)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| format!("max_tokens must be positive, got {max_tokens}"))?;

    let mut words = text.split_whitespace().peekable();
    Ok(std::iter::from_fn(move || {
        words.peek()?;
        let chunk: Vec<&str> = words.by_ref().take(chunk_size).collect();
        Some(chunk.join(" "))
    }))
}

pub fn split_into_chunks(text: &str, max_tokens: i64) -> Result<Vec<String>, String> {
    Ok(chunk_tokens(text, max_tokens)?.collect())
}

fn round_to_micros(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Negative response token counts are treated as zero.
pub fn estimate_cost(prompt: &str, response_tokens: i64, pricing: Pricing) -> CostEstimate {
    let input_tokens = count_tokens(prompt) as u64;
    let output_tokens = response_tokens.max(0) as u64;
    let price = (input_tokens as f64 / 1000.0) * pricing.input_per_1k
        + (output_tokens as f64 / 1000.0) * pricing.output_per_1k;

    CostEstimate {
        input_tokens,
        output_tokens,
        total_tokens: input_tokens + output_tokens,
        price_usd: round_to_micros(price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PROMPTS: [&str; 8] = [
        "Hello world",
        "",
        "Short\nwith\nnewlines",
        "Emoji 👍🏽 and unicode 測試",
        "Tab\tseparated\tvalues",
        "Spaces     and   multiple   spaces",
        "Punctuation!?,.;:",
        "   ",
    ];

    #[test]
    fn count_tokens_splits_on_any_whitespace() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(count_tokens(" \n\t "), 0);
        assert_eq!(count_tokens("Short\nwith\nnewlines"), 3);
        assert_eq!(count_tokens("Spaces     and   multiple   spaces"), 4);
        assert_eq!(count_tokens("Emoji 👍🏽 and unicode 測試"), 5);
        assert_eq!(count_tokens(&"A".repeat(1000)), 1);
    }

    #[test]
    fn estimate_cost_is_non_negative_and_grows_with_text() {
        for prompt in SAMPLE_PROMPTS {
            let estimate = estimate_cost(prompt, 0, Pricing::default());
            assert!(estimate.price_usd >= 0.0, "{prompt:?}");

            let longer = estimate_cost(&format!("{prompt} extra"), 0, Pricing::default());
            assert!(longer.total_tokens >= estimate.total_tokens, "{prompt:?}");
        }
    }

    #[test]
    fn estimate_cost_is_monotonic_over_repetition() {
        let base = "token ".repeat(5);
        let once = estimate_cost(&base, 0, Pricing::default());
        let twice = estimate_cost(&base.repeat(2), 0, Pricing::default());
        let four_times = estimate_cost(&base.repeat(4), 0, Pricing::default());
        assert_eq!(
            [once.total_tokens, twice.total_tokens, four_times.total_tokens],
            [5, 10, 20]
        );
        assert!(twice.price_usd >= once.price_usd);
        assert!(four_times.price_usd >= twice.price_usd);
    }

    #[test]
    fn estimate_cost_uses_default_rates() {
        let estimate = estimate_cost("Hello world", 1000, Pricing::default());
        assert_eq!(
            estimate,
            CostEstimate {
                input_tokens: 2,
                output_tokens: 1000,
                total_tokens: 1002,
                price_usd: 1.501,
            }
        );
    }

    #[test]
    fn estimate_cost_clamps_negative_response_tokens() {
        let estimate = estimate_cost("one two three", -50, Pricing::default());
        assert_eq!(estimate.output_tokens, 0);
        assert_eq!(estimate.total_tokens, 3);
        assert_eq!(estimate.price_usd, 0.0015);
    }

    #[test]
    fn estimate_cost_rounds_price_to_six_decimals() {
        let pricing = Pricing {
            input_per_1k: 0.0123456789,
            output_per_1k: 0.0,
        };
        assert_eq!(estimate_cost("word", 0, pricing).price_usd, 0.000012);

        let negligible = Pricing {
            input_per_1k: 0.0000004,
            output_per_1k: 0.0,
        };
        assert_eq!(estimate_cost("word", 0, negligible).price_usd, 0.0);
    }

    #[test]
    fn pricing_rejects_negative_and_non_finite_rates() {
        assert!(Pricing::default().validate().is_ok());
        let negative = Pricing {
            input_per_1k: -0.1,
            ..Pricing::default()
        };
        assert!(negative.validate().is_err());
        let infinite = Pricing {
            output_per_1k: f64::INFINITY,
            ..Pricing::default()
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn pricing_fills_missing_fields_with_defaults() {
        let pricing: Pricing =
            serde_json::from_str(r#"{ "inputPer1k": 2.0 }"#).expect("parse pricing");
        assert_eq!(
            pricing,
            Pricing {
                input_per_1k: 2.0,
                output_per_1k: 1.5,
            }
        );
    }

    #[test]
    fn split_into_chunks_counts() {
        let hundred = vec!["a"; 100].join(" ");
        let hundred_one = vec!["a"; 101].join(" ");
        let cases: [(&str, i64, usize); 7] = [
            ("", 10, 0),
            ("a b c", 1, 3),
            ("a b c", 2, 2),
            ("a b c", 3, 1),
            ("a b c", 5, 1),
            (hundred.as_str(), 10, 10),
            (hundred_one.as_str(), 10, 11),
        ];

        for (text, size, expected) in cases {
            let chunks = split_into_chunks(text, size).expect("valid chunk size");
            assert_eq!(chunks.len(), expected, "{size} over {text:?}");
            for chunk in &chunks {
                let tokens = count_tokens(chunk);
                assert!(tokens > 0 && (tokens as i64) <= size, "{chunk:?}");
            }
        }
    }

    #[test]
    fn split_into_chunks_keeps_order_and_leaves_partial_tail() {
        assert_eq!(
            split_into_chunks("a b c", 2).expect("valid chunk size"),
            vec!["a b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn split_into_chunks_normalizes_whitespace() {
        assert_eq!(
            split_into_chunks("Hello\nworld\tthis is  spaced", 5).expect("valid chunk size"),
            vec!["Hello world this is spaced".to_string()]
        );
        assert_eq!(
            split_into_chunks(" \n\t ", 3).expect("valid chunk size"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn split_into_chunks_rejects_non_positive_sizes() {
        for size in [0, -1, -10] {
            let error = split_into_chunks("hello world", size).expect_err("size is rejected");
            assert!(error.starts_with("max_tokens must be positive"));
        }
    }

    #[test]
    fn chunk_tokens_yields_lazily() {
        let mut chunks = chunk_tokens("alpha beta gamma delta epsilon", 2).expect("valid size");
        assert_eq!(chunks.next().as_deref(), Some("alpha beta"));
        assert_eq!(chunks.next().as_deref(), Some("gamma delta"));
        assert_eq!(chunks.next().as_deref(), Some("epsilon"));
        assert_eq!(chunks.next(), None);
    }
}
