//! Review sentiment scoring
//!
//! Scores each review text with the VADER lexicon and aggregates the
//! compound polarities into one of five bands. Places without any scorable
//! review text get an explicit no-data marker instead of a neutral default.

use serde::{Deserialize, Serialize};
use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::Review;

/// Categorical sentiment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    /// Map a mean polarity in [-1, 1] to its band (upper bounds inclusive)
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= -0.6 {
            Self::VeryNegative
        } else if score <= -0.2 {
            Self::Negative
        } else if score <= 0.2 {
            Self::Neutral
        } else if score <= 0.6 {
            Self::Positive
        } else {
            Self::VeryPositive
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        };
        write!(f, "{label}")
    }
}

/// Aggregate sentiment over a place's reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SentimentResult {
    /// Mean polarity and its band
    Scored { label: SentimentLabel, score: f64 },
    /// No review carried scorable text
    NoData,
}

/// Score a set of reviews
///
/// Reviews without text (or with empty text) are skipped entirely, not
/// counted as neutral.
#[must_use]
pub fn score_reviews(reviews: &[Review]) -> SentimentResult {
    let analyzer = SentimentIntensityAnalyzer::new();

    let scores: Vec<f64> = reviews
        .iter()
        .filter_map(|review| review.text.as_deref())
        .filter(|text| !text.is_empty())
        .map(|text| compound_score(&analyzer, text))
        .collect();

    if scores.is_empty() {
        return SentimentResult::NoData;
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    SentimentResult::Scored {
        label: SentimentLabel::from_score(mean),
        score: mean,
    }
}

/// VADER compound polarity for one text, in [-1, 1]
fn compound_score(analyzer: &SentimentIntensityAnalyzer, text: &str) -> f64 {
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
}
