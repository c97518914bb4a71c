use serde::{Deserialize, Serialize};

/// The fixed step sequence of the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Income,
    Family,
    Funds,
    Insurance,
    OtherFunds,
    Donations,
    Withheld,
    Summary,
}

impl WizardStep {
    pub const COUNT: usize = 8;

    pub const ALL: [WizardStep; Self::COUNT] = [
        Self::Income,
        Self::Family,
        Self::Funds,
        Self::Insurance,
        Self::OtherFunds,
        Self::Donations,
        Self::Withheld,
        Self::Summary,
    ];

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        match self {
            Self::Income => 0,
            Self::Family => 1,
            Self::Funds => 2,
            Self::Insurance => 3,
            Self::OtherFunds => 4,
            Self::Donations => 5,
            Self::Withheld => 6,
            Self::Summary => 7,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Family => "Family",
            Self::Funds => "Funds & savings",
            Self::Insurance => "Insurance",
            Self::OtherFunds => "Other funds",
            Self::Donations => "Donations",
            Self::Withheld => "Tax withheld",
            Self::Summary => "Summary",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indices_match_positions_in_all() {
        for (position, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
    }

    #[test]
    fn next_and_prev_walk_the_sequence() {
        assert_eq!(WizardStep::Income.prev(), None);
        assert_eq!(WizardStep::Income.next(), Some(WizardStep::Family));
        assert_eq!(WizardStep::Withheld.next(), Some(WizardStep::Summary));
        assert_eq!(WizardStep::Summary.next(), None);
        assert_eq!(WizardStep::Summary.prev(), Some(WizardStep::Withheld));
    }
}
