//! Strength scorer, gate predicate and combined report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::met_count;
use crate::feedback::feedback;
use crate::types::{StrengthAssessment, StrengthLevel, StrengthReport};

/// Score granted per satisfied criterion.
const POINTS_PER_CRITERION: u8 = 20;

/// Scores a candidate password and maps the score to a tier.
///
/// Empty input returns `{None, 0}` without evaluating anything else. The
/// percentage is 20 points per satisfied criterion plus length bonuses
/// (+10 at 12 characters, +10 more at 16), capped at 100. The cap means a
/// long password can reach 100 on length bonuses without full character
/// variety; that substitution is part of the scoring contract and callers
/// needing hard guarantees use [`crate::validate`] instead.
pub fn score(password: &SecretString) -> StrengthAssessment {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthAssessment {
            level: StrengthLevel::None,
            percentage: 0,
        };
    }

    let mut points = met_count(pwd) as u8 * POINTS_PER_CRITERION;

    // Length bonuses stack and apply independently of the criteria.
    let len = pwd.chars().count();
    if len >= 12 {
        points += 10;
    }
    if len >= 16 {
        points += 10;
    }

    let percentage = points.min(100);
    StrengthAssessment {
        level: StrengthLevel::from_percentage(percentage),
        percentage,
    }
}

/// Admission predicate for account creation: true iff the candidate scores
/// Good or Strong. Thresholds live solely in the tier mapping, so this can
/// never drift from [`score`].
pub fn is_strong_enough(password: &SecretString) -> bool {
    score(password).level >= StrengthLevel::Good
}

/// Computes assessment and suggestions in one call.
pub fn report(password: &SecretString) -> StrengthReport {
    StrengthReport {
        assessment: score(password),
        suggestions: feedback(password),
    }
}

/// Debounced async delivery for live as-you-type meters: waits briefly,
/// drops the work if the token was cancelled in the meantime, otherwise
/// sends one [`StrengthReport`] on the channel.
#[cfg(feature = "async")]
pub async fn report_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength evaluation cancelled before delivery");
        return;
    }

    let report = report(password);
    if tx.send(report).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to deliver strength report: receiver dropped");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_tx_delivers() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        report_tx(&pwd("TestPass123!"), token, tx).await;

        let report = rx.recv().await.expect("should receive a report");
        assert_eq!(report.assessment.level, StrengthLevel::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        report_tx(&pwd("TestPass123!"), token, tx).await;

        // sender side returned without sending, so the channel is closed
        assert!(rx.recv().await.is_none());
    }
}
