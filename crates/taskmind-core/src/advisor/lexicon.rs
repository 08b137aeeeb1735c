//! Keyword lexicon for heuristic priority scoring.
//!
//! Three disjoint keyword tiers, each with a fixed score contribution. A
//! tier contributes at most once no matter how many of its keywords match;
//! the matched keywords themselves are listed in the reasoning phrase.

/// Keywords signalling urgency or external commitment.
pub const HIGH_PRIORITY_KEYWORDS: [&str; 12] = [
    "urgent",
    "asap",
    "emergency",
    "critical",
    "deadline",
    "important",
    "meeting",
    "presentation",
    "client",
    "boss",
    "due",
    "submit",
];

/// Keywords signalling routine planned work.
pub const MEDIUM_PRIORITY_KEYWORDS: [&str; 7] = [
    "schedule", "plan", "review", "check", "update", "prepare", "organize",
];

/// Keywords signalling deferrable work. This tier lowers the score.
pub const LOW_PRIORITY_KEYWORDS: [&str; 6] =
    ["someday", "maybe", "eventually", "hobby", "leisure", "fun"];

/// Keyword tier identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTier {
    High,
    Medium,
    Low,
}

impl KeywordTier {
    /// Fixed score contribution when at least one keyword of the tier matches.
    pub fn contribution(&self) -> f64 {
        match self {
            KeywordTier::High => 0.7,
            KeywordTier::Medium => 0.4,
            KeywordTier::Low => -0.3,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeywordTier::High => &HIGH_PRIORITY_KEYWORDS,
            KeywordTier::Medium => &MEDIUM_PRIORITY_KEYWORDS,
            KeywordTier::Low => &LOW_PRIORITY_KEYWORDS,
        }
    }

    fn phrase_prefix(&self) -> &'static str {
        match self {
            KeywordTier::High => "Contains high-priority keywords",
            KeywordTier::Medium => "Contains medium-priority keywords",
            KeywordTier::Low => "Contains low-priority keywords",
        }
    }
}

/// One tier's match result: which keywords fired.
#[derive(Debug, Clone)]
pub struct TierMatch {
    pub tier: KeywordTier,
    pub matched: Vec<&'static str>,
}

impl TierMatch {
    /// Score contribution of the tier (independent of match count).
    pub fn contribution(&self) -> f64 {
        self.tier.contribution()
    }

    /// Reasoning phrase enumerating the matched keywords.
    pub fn phrase(&self) -> String {
        format!(
            "{}: {}",
            self.tier.phrase_prefix(),
            self.matched.join(", ")
        )
    }
}

/// Scan pre-lowercased text against all tiers.
///
/// Matching is substring containment, so "urgently" fires "urgent". Fired
/// tiers are returned in High, Medium, Low order; tiers with no match are
/// omitted.
pub fn scan(text: &str) -> Vec<TierMatch> {
    [KeywordTier::High, KeywordTier::Medium, KeywordTier::Low]
        .into_iter()
        .filter_map(|tier| {
            let matched: Vec<&'static str> = tier
                .keywords()
                .iter()
                .copied()
                .filter(|keyword| text.contains(keyword))
                .collect();
            if matched.is_empty() {
                None
            } else {
                Some(TierMatch { tier, matched })
            }
        })
        .collect()
}
