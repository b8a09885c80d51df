//! Phishing simulation catalog and grading.
//!
//! A fixed set of canned emails, each carrying a ground-truth subset of the
//! threat-indicator master list. Users submit the tags they spotted; grading
//! compares against the ground truth and produces the detected/missed split
//! that gets logged.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum score for an attempt to earn the flat point bonus.
pub const BONUS_THRESHOLD: i32 = 80;

/// Points credited for an attempt at or above [`BONUS_THRESHOLD`].
pub const BONUS_POINTS: i32 = 50;

/// Penalty per incorrectly selected tag.
const FALSE_POSITIVE_PENALTY: f64 = 10.0;

// ---------------------------------------------------------------------------
// ThreatTag
// ---------------------------------------------------------------------------

/// Threat-indicator master list. Every simulated email's ground truth is a
/// subset of these eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatTag {
    SuspiciousSender,
    Urgency,
    SuspiciousLink,
    Threat,
    Authority,
    UnusualRequest,
    NoVerification,
    FakeAttachment,
}

/// All tags, in presentation order.
pub const ALL_THREAT_TAGS: [ThreatTag; 8] = [
    ThreatTag::SuspiciousSender,
    ThreatTag::Urgency,
    ThreatTag::SuspiciousLink,
    ThreatTag::Threat,
    ThreatTag::Authority,
    ThreatTag::UnusualRequest,
    ThreatTag::NoVerification,
    ThreatTag::FakeAttachment,
];

impl ThreatTag {
    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatTag::SuspiciousSender => "suspicious_sender",
            ThreatTag::Urgency => "urgency",
            ThreatTag::SuspiciousLink => "suspicious_link",
            ThreatTag::Threat => "threat",
            ThreatTag::Authority => "authority",
            ThreatTag::UnusualRequest => "unusual_request",
            ThreatTag::NoVerification => "no_verification",
            ThreatTag::FakeAttachment => "fake_attachment",
        }
    }

    /// Parse from a string. Returns `None` for unknown tags so submissions
    /// with made-up indicators can be rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "suspicious_sender" => Some(ThreatTag::SuspiciousSender),
            "urgency" => Some(ThreatTag::Urgency),
            "suspicious_link" => Some(ThreatTag::SuspiciousLink),
            "threat" => Some(ThreatTag::Threat),
            "authority" => Some(ThreatTag::Authority),
            "unusual_request" => Some(ThreatTag::UnusualRequest),
            "no_verification" => Some(ThreatTag::NoVerification),
            "fake_attachment" => Some(ThreatTag::FakeAttachment),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One canned simulation email. The `threats` slice is the ground truth and
/// must never be serialized to clients before grading.
#[derive(Debug, Clone, Copy)]
pub struct PhishingEmail {
    pub id: &'static str,
    pub from: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub threats: &'static [ThreatTag],
    pub category: &'static str,
}

/// The fixed simulation catalog.
pub const PHISHING_EMAILS: [PhishingEmail; 3] = [
    PhishingEmail {
        id: "email1",
        from: "noreply@paypa1-secure.com",
        subject: "URGENT: Your Account Has Been Suspended",
        body: concat!(
            "Dear Valued Customer,\n\n",
            "We have detected unusual activity on your PayPal account. Your account ",
            "has been temporarily suspended for your protection.\n\n",
            "To restore full access, please verify your information immediately by ",
            "clicking the link below:\n\n",
            "http://paypal-secure-verification.tk/verify\n\n",
            "If you do not verify within 24 hours, your account will be permanently ",
            "closed.\n\n",
            "Sincerely,\nPayPal Security Team",
        ),
        threats: &[
            ThreatTag::SuspiciousSender,
            ThreatTag::Urgency,
            ThreatTag::SuspiciousLink,
            ThreatTag::Threat,
        ],
        category: "Account Verification Scam",
    },
    PhishingEmail {
        id: "email2",
        from: "ceo@company.com",
        subject: "Re: Urgent Wire Transfer Needed",
        body: concat!(
            "Hi,\n\n",
            "I'm currently in a meeting with investors and need you to process an ",
            "urgent wire transfer immediately.\n\n",
            "Transfer $15,000 to this account:\n",
            "Bank: International Trust Bank\n",
            "Account: 98743210987\n",
            "Swift: ITBXYZ123\n\n",
            "This is time-sensitive - please handle this ASAP and confirm once ",
            "done.\n\n",
            "Thanks,\nJohn Smith\nCEO",
        ),
        threats: &[
            ThreatTag::Urgency,
            ThreatTag::Authority,
            ThreatTag::UnusualRequest,
            ThreatTag::NoVerification,
        ],
        category: "CEO Fraud",
    },
    PhishingEmail {
        id: "email3",
        from: "delivery@ups-tracking.net",
        subject: "Package Delivery Failed - Action Required",
        body: concat!(
            "Hello,\n\n",
            "We attempted to deliver your package today but were unable to complete ",
            "the delivery.\n\n",
            "Tracking Number: UPS827463891\n\n",
            "To reschedule delivery, please download and complete the attached ",
            "form:\n\n",
            "[Download Delivery Form]\n\n",
            "Please note: This link expires in 48 hours.\n\n",
            "UPS Customer Service",
        ),
        threats: &[
            ThreatTag::SuspiciousSender,
            ThreatTag::FakeAttachment,
            ThreatTag::Urgency,
            ThreatTag::SuspiciousLink,
        ],
        category: "Delivery Scam",
    },
];

/// Look up a catalog email by id.
pub fn find_email(id: &str) -> Option<&'static PhishingEmail> {
    PHISHING_EMAILS.iter().find(|e| e.id == id)
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Result of grading one submission against an email's ground truth.
#[derive(Debug, Clone)]
pub struct PhishingGrade {
    pub detected: Vec<ThreatTag>,
    pub missed: Vec<ThreatTag>,
    pub false_positives: Vec<ThreatTag>,
    pub score: i32,
}

/// Grade a tag selection: score = max(0, round(100 × detected/truth −
/// 10 × false positives)). Duplicate selections count once.
pub fn grade(email: &PhishingEmail, selected: &[ThreatTag]) -> PhishingGrade {
    let mut unique: Vec<ThreatTag> = Vec::new();
    for tag in selected {
        if !unique.contains(tag) {
            unique.push(*tag);
        }
    }

    let detected: Vec<ThreatTag> = unique
        .iter()
        .filter(|t| email.threats.contains(t))
        .copied()
        .collect();
    let missed: Vec<ThreatTag> = email
        .threats
        .iter()
        .filter(|t| !unique.contains(t))
        .copied()
        .collect();
    let false_positives: Vec<ThreatTag> = unique
        .iter()
        .filter(|t| !email.threats.contains(t))
        .copied()
        .collect();

    let raw = (detected.len() as f64 / email.threats.len() as f64) * 100.0
        - false_positives.len() as f64 * FALSE_POSITIVE_PENALTY;
    let score = i32::max(0, raw.round() as i32);

    PhishingGrade {
        detected,
        missed,
        false_positives,
        score,
    }
}

/// Flat point bonus for a high-scoring attempt.
pub fn bonus_points(score: i32) -> Option<i32> {
    if score >= BONUS_THRESHOLD {
        Some(BONUS_POINTS)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn email1() -> &'static PhishingEmail {
        find_email("email1").unwrap()
    }

    // -- ThreatTag --

    #[test]
    fn tag_round_trips_through_strings() {
        for tag in ALL_THREAT_TAGS {
            assert_eq!(ThreatTag::from_str(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn tag_from_str_rejects_unknown() {
        assert_eq!(ThreatTag::from_str("spoofed_header"), None);
    }

    // -- catalog --

    #[test]
    fn catalog_has_three_emails_with_four_threats_each() {
        assert_eq!(PHISHING_EMAILS.len(), 3);
        for email in &PHISHING_EMAILS {
            assert_eq!(email.threats.len(), 4, "{}", email.id);
        }
    }

    #[test]
    fn find_email_by_id() {
        assert!(find_email("email2").is_some());
        assert!(find_email("email9").is_none());
    }

    // -- grade --

    #[test]
    fn perfect_selection_scores_one_hundred() {
        let grade = grade(email1(), email1().threats);
        assert_eq!(grade.score, 100);
        assert_eq!(grade.detected.len(), 4);
        assert!(grade.missed.is_empty());
        assert!(grade.false_positives.is_empty());
    }

    #[test]
    fn each_false_positive_costs_ten_points() {
        let mut selected = email1().threats.to_vec();
        selected.push(ThreatTag::Authority);
        let grade = grade(email1(), &selected);
        assert_eq!(grade.score, 90);
        assert_eq!(grade.false_positives, vec![ThreatTag::Authority]);
    }

    #[test]
    fn missed_threats_lower_the_score() {
        // 2 of 4 detected: 50, no penalty.
        let grade = grade(
            email1(),
            &[ThreatTag::SuspiciousSender, ThreatTag::Urgency],
        );
        assert_eq!(grade.score, 50);
        assert_eq!(grade.missed.len(), 2);
    }

    #[test]
    fn score_clamps_at_zero() {
        // Nothing detected, many wrong guesses.
        let grade = grade(
            email1(),
            &[
                ThreatTag::Authority,
                ThreatTag::UnusualRequest,
                ThreatTag::NoVerification,
                ThreatTag::FakeAttachment,
            ],
        );
        assert_eq!(grade.score, 0);
    }

    #[test]
    fn duplicate_selections_count_once() {
        let grade = grade(
            email1(),
            &[ThreatTag::Urgency, ThreatTag::Urgency, ThreatTag::Urgency],
        );
        assert_eq!(grade.detected, vec![ThreatTag::Urgency]);
        assert_eq!(grade.score, 25);
    }

    #[test]
    fn empty_selection_misses_everything() {
        let grade = grade(email1(), &[]);
        assert_eq!(grade.score, 0);
        assert_eq!(grade.missed.len(), 4);
    }

    // -- bonus_points --

    #[test]
    fn bonus_at_threshold_and_above() {
        assert_eq!(bonus_points(80), Some(BONUS_POINTS));
        assert_eq!(bonus_points(100), Some(BONUS_POINTS));
        assert_eq!(bonus_points(79), None);
    }
}
