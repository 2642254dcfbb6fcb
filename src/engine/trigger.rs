//! Trigger scanning (token pre-classification).
//!
//! Before any regex runs, the normalized token is scanned for a handful of
//! coarse features. Each grammar rule declares the features it cannot match
//! without, and the matcher skips rules whose features are absent.
//!
//! ## Design notes
//!
//! - Gating must never change a classification. A bucket may only be listed
//!   on a rule if every string the rule's regex accepts has that feature.
//! - The scan is ASCII-only: the grammar is ASCII-only.

bitflags::bitflags! {
    /// Coarse token features used to gate grammar rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const HAS_COLON  = 1 << 1;
        const SIGNED     = 1 << 2;
        const HAS_WORD   = 1 << 3;
        const WEEKDAYISH = 1 << 4;
    }
}

const WEEKDAY_STEMS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Features detected in a normalized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan an already-normalized (lower-cased) token.
    pub fn scan(token: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if token.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if token.contains(':') {
            buckets |= BucketMask::HAS_COLON;
        }
        if token.starts_with('+') || token.starts_with('-') {
            buckets |= BucketMask::SIGNED;
        }
        if token.bytes().any(|b| b.is_ascii_alphabetic()) {
            buckets |= BucketMask::HAS_WORD;
        }
        if WEEKDAY_STEMS.iter().any(|stem| token.contains(stem)) {
            buckets |= BucketMask::WEEKDAYISH;
        }

        TriggerInfo { buckets }
    }

    /// Whether a rule requiring `required` may match this token.
    pub fn admits(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}
