// Approval workflow shared by time entries, absence requests and daily reports.
//
// pending -> approved | rejected, exactly once. A rejected item never becomes
// approved; the employee has to file a new one.

use crate::shared::core::access::{Permission, Role};
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub user_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub verdict: Verdict,
    pub reviewer: Reviewer,
    pub at: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub status: ApprovalStatus,
    pub decided_by: String,
    pub decided_at: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("role {0} may not review this item")]
    NotPermitted(Role),

    #[error("reviewers may not decide their own items")]
    OwnItem,

    #[error("item is already {0}")]
    AlreadyDecided(ApprovalStatus),
}

impl Rejection for ApprovalError {
    fn kind(&self) -> RejectionKind {
        match self {
            ApprovalError::NotPermitted(_) | ApprovalError::OwnItem => RejectionKind::Forbidden,
            ApprovalError::AlreadyDecided(_) => RejectionKind::Conflict,
        }
    }
}

/// Applies a review to an item in `current` status that belongs to `owner`.
/// `required` is the permission the reviewer's role must hold for this kind
/// of item.
pub fn review(
    current: ApprovalStatus,
    owner: &str,
    review: &Review,
    required: Permission,
) -> Result<ApprovalRecord, ApprovalError> {
    if !review.reviewer.role.can(required) {
        return Err(ApprovalError::NotPermitted(review.reviewer.role));
    }
    if review.reviewer.user_id == owner {
        return Err(ApprovalError::OwnItem);
    }
    if current != ApprovalStatus::Pending {
        return Err(ApprovalError::AlreadyDecided(current));
    }
    let status = match review.verdict {
        Verdict::Approve => ApprovalStatus::Approved,
        Verdict::Reject => ApprovalStatus::Rejected,
    };
    Ok(ApprovalRecord {
        status,
        decided_by: review.reviewer.user_id.clone(),
        decided_at: review.at,
        comment: review.comment.clone(),
    })
}

#[cfg(test)]
mod approval_workflow_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn meister_review() -> Review {
        Review {
            verdict: Verdict::Approve,
            reviewer: Reviewer {
                user_id: "meister-0001".into(),
                role: Role::Meister,
            },
            at: Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap(),
            comment: None,
        }
    }

    #[rstest]
    fn it_should_approve_a_pending_item(meister_review: Review) {
        let record = review(
            ApprovalStatus::Pending,
            "monteur-0001",
            &meister_review,
            Permission::ReviewReports,
        )
        .unwrap();
        assert_eq!(record.status, ApprovalStatus::Approved);
        assert_eq!(record.decided_by, "meister-0001");
        assert_eq!(record.decided_at, meister_review.at);
    }

    #[rstest]
    fn it_should_reject_a_pending_item_with_a_comment(mut meister_review: Review) {
        meister_review.verdict = Verdict::Reject;
        meister_review.comment = Some("Stunden passen nicht".into());
        let record = review(
            ApprovalStatus::Pending,
            "monteur-0001",
            &meister_review,
            Permission::ReviewReports,
        )
        .unwrap();
        assert_eq!(record.status, ApprovalStatus::Rejected);
        assert_eq!(record.comment.as_deref(), Some("Stunden passen nicht"));
    }

    #[rstest]
    #[case(ApprovalStatus::Approved)]
    #[case(ApprovalStatus::Rejected)]
    fn it_should_refuse_a_second_decision(meister_review: Review, #[case] current: ApprovalStatus) {
        let result = review(
            current,
            "monteur-0001",
            &meister_review,
            Permission::ReviewReports,
        );
        assert_eq!(result, Err(ApprovalError::AlreadyDecided(current)));
        assert_eq!(result.unwrap_err().kind(), RejectionKind::Conflict);
    }

    #[rstest]
    fn it_should_refuse_a_reviewer_without_permission(mut meister_review: Review) {
        meister_review.reviewer.role = Role::Monteur;
        let result = review(
            ApprovalStatus::Pending,
            "monteur-0001",
            &meister_review,
            Permission::ReviewReports,
        );
        assert_eq!(result, Err(ApprovalError::NotPermitted(Role::Monteur)));
        assert_eq!(result.unwrap_err().kind(), RejectionKind::Forbidden);
    }

    #[rstest]
    fn it_should_refuse_a_review_of_the_reviewers_own_item(meister_review: Review) {
        let result = review(
            ApprovalStatus::Pending,
            "meister-0001",
            &meister_review,
            Permission::ReviewReports,
        );
        assert_eq!(result, Err(ApprovalError::OwnItem));
        assert_eq!(result.unwrap_err().kind(), RejectionKind::Forbidden);
    }
}
