use serde::Serialize;
use sqlx::prelude::FromRow;
use validator::Validate;

/// Highest value the rating slider can produce.
pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize)]
pub struct FeedbackRecord {
    pub id: String,
    pub event_id: String,
    pub user_email: String,
    pub rating: f64,
    pub comment: String,
    pub timestamp: i64,
}

#[derive(Validate, Clone, Debug)]
pub struct FeedbackInput {
    #[validate(length(min = 1))]
    pub event_id: String,
    #[validate(email)]
    pub user_email: String,
    #[validate(range(exclusive_min = 0.0, max = 5.0))]
    pub rating: f64,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub rating: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeedbackSummary {
    pub average_rating: Option<f64>,
    pub comments: Vec<Comment>,
}

impl FeedbackSummary {
    /// Whole stars shown next to the average.
    pub fn stars(&self) -> usize {
        match self.average_rating {
            Some(avg) if avg > 0.0 => avg.min(MAX_RATING).floor() as usize,
            _ => 0,
        }
    }
}

pub fn aggregate(feedback: &[FeedbackRecord]) -> FeedbackSummary {
    let comments = feedback
        .iter()
        .map(|record| Comment {
            author: record.user_email.to_owned(),
            text: record.comment.to_owned(),
            rating: record.rating,
        })
        .collect();

    if feedback.is_empty() {
        return FeedbackSummary {
            average_rating: None,
            comments,
        };
    }

    let total: f64 = feedback.iter().map(|record| record.rating).sum();
    let mean = total / feedback.len() as f64;

    FeedbackSummary {
        average_rating: Some(round_one_decimal(mean)),
        comments,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, rating: f64, comment: &str) -> FeedbackRecord {
        FeedbackRecord {
            id: format!("{email}-{rating}"),
            event_id: "evt".to_owned(),
            user_email: email.to_owned(),
            rating,
            comment: comment.to_owned(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = aggregate(&[]);
        assert_eq!(summary.average_rating, None);
        assert!(summary.comments.is_empty());
        assert_eq!(summary.stars(), 0);
    }

    #[test]
    fn test_aggregate_mean() {
        let summary = aggregate(&[
            record("a@b.com", 4.0, "good"),
            record("c@d.com", 5.0, "great"),
        ]);
        assert_eq!(summary.average_rating, Some(4.5));
        assert_eq!(summary.stars(), 4);
    }

    #[test]
    fn test_aggregate_rounds_to_one_decimal() {
        let summary = aggregate(&[
            record("a@b.com", 4.0, ""),
            record("a@b.com", 4.0, ""),
            record("a@b.com", 5.0, ""),
        ]);
        assert_eq!(summary.average_rating, Some(4.3));

        let summary = aggregate(&[record("a@b.com", 1.0, ""), record("a@b.com", 2.0, "")]);
        assert_eq!(summary.average_rating, Some(1.5));
    }

    #[test]
    fn test_aggregate_keeps_comments_in_order_without_dedup() {
        let summary = aggregate(&[
            record("a@b.com", 3.0, "first"),
            record("c@d.com", 5.0, "second"),
            record("a@b.com", 4.0, "first"),
        ]);

        assert_eq!(
            summary.comments,
            vec![
                Comment {
                    author: "a@b.com".to_owned(),
                    text: "first".to_owned(),
                    rating: 3.0,
                },
                Comment {
                    author: "c@d.com".to_owned(),
                    text: "second".to_owned(),
                    rating: 5.0,
                },
                Comment {
                    author: "a@b.com".to_owned(),
                    text: "first".to_owned(),
                    rating: 4.0,
                },
            ]
        );
        assert_eq!(summary.average_rating, Some(4.0));
    }

    #[test]
    fn test_feedback_input_rating_bounds() {
        let input = |rating: f64| FeedbackInput {
            event_id: "evt".to_owned(),
            user_email: "a@b.com".to_owned(),
            rating,
            comment: String::new(),
        };

        assert!(input(0.0).validate().is_err());
        assert!(input(0.5).validate().is_ok());
        assert!(input(5.0).validate().is_ok());
        assert!(input(5.5).validate().is_err());
    }
}
