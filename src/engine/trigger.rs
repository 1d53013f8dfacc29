//! Trigger scanning (input pre-classification).
//!
//! Before any regex runs, the normalized input is scanned for a few coarse
//! signals. Each recognizer declares the buckets it needs; recognizers whose
//! buckets are missing are skipped for this input.
//!
//! This is a *heuristic* scan. False positives are fine (the recognizer still
//! has to match), false negatives are not: a bucket must be set whenever a
//! recognizer gated on it could possibly match.

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS         = 1 << 0;
        const HAS_DATE_SEPARATOR = 1 << 1;
        const RANDOMISH          = 1 << 2;
    }
}

/// Input characteristics detected from the normalized input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` (already lowercased) for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if input.contains('.') || input.contains('/') {
            buckets |= BucketMask::HAS_DATE_SEPARATOR;
        }
        if input.contains("random") {
            buckets |= BucketMask::RANDOMISH;
        }

        TriggerInfo { buckets }
    }

    /// True when every bit of `required` was seen.
    pub fn allows(&self, required: u32) -> bool {
        self.buckets.contains(BucketMask::from_bits_truncate(required))
    }
}
