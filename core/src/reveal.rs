/// Observer threshold. It only decides when callbacks fire; any entry that
/// reports intersecting reveals its element.
pub const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEntry {
    pub index: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Flag the element visible and stop observing it.
    Reveal,
    Ignore,
}

/// One-shot visibility flags for a fixed set of observed elements.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            revealed: vec![false; count],
        }
    }

    pub fn observe(&mut self, entry: RevealEntry) -> RevealOutcome {
        let Some(revealed) = self.revealed.get_mut(entry.index) else {
            return RevealOutcome::Ignore;
        };
        if *revealed {
            return RevealOutcome::Ignore;
        }
        if !entry.is_intersecting {
            return RevealOutcome::Ignore;
        }
        *revealed = true;
        RevealOutcome::Reveal
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
