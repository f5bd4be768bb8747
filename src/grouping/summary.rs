use serde::Serialize;
use std::collections::HashSet;

use crate::model::Review;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewActivity {
    pub review_count: usize,
    pub distinct_reviewer_count: usize,
}

pub fn summarize(reviews: &[Review]) -> ReviewActivity {
    let reviewers: HashSet<&str> = reviews.iter().map(|r| r.author.as_str()).collect();
    ReviewActivity {
        review_count: reviews.len(),
        distinct_reviewer_count: reviewers.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN_AUTHOR;

    fn review(author: &str) -> Review {
        Review {
            author: author.to_string(),
            pull_request: 1,
        }
    }

    #[test]
    fn test_repeat_reviewer_counts_once() {
        let reviews = vec![review("alice"), review("bob"), review("alice")];
        assert_eq!(
            summarize(&reviews),
            ReviewActivity {
                review_count: 3,
                distinct_reviewer_count: 2,
            }
        );
    }

    #[test]
    fn test_no_reviews() {
        assert_eq!(summarize(&[]), ReviewActivity::default());
    }

    #[test]
    fn test_deleted_accounts_share_one_identity() {
        let reviews = vec![review(UNKNOWN_AUTHOR), review(UNKNOWN_AUTHOR), review("carol")];
        let activity = summarize(&reviews);
        assert_eq!(activity.review_count, 3);
        assert_eq!(activity.distinct_reviewer_count, 2);
    }
}
