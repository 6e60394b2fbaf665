use std::fmt;

use super::binder::LabelKind;
use super::simulation::AnchorMode;

/// Layout state selected from the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartMode {
    #[default]
    Grouped,
    SplitByType,
    SplitBySeverity,
}

impl ChartMode {
    pub const ALL: [Self; 3] = [Self::Grouped, Self::SplitByType, Self::SplitBySeverity];

    /// Unknown names fall back to [`ChartMode::Grouped`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "type" => Self::SplitByType,
            "severity" => Self::SplitBySeverity,
            _ => Self::Grouped,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Grouped => "all",
            Self::SplitByType => "type",
            Self::SplitBySeverity => "severity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grouped => "All",
            Self::SplitByType => "Types",
            Self::SplitBySeverity => "Severities",
        }
    }

    pub fn anchor(self) -> AnchorMode {
        match self {
            Self::Grouped => AnchorMode::Grouped,
            Self::SplitByType => AnchorMode::SplitByType,
            Self::SplitBySeverity => AnchorMode::SplitBySeverity,
        }
    }

    pub fn visible_labels(self) -> Option<LabelKind> {
        match self {
            Self::Grouped => None,
            Self::SplitByType => Some(LabelKind::Category),
            Self::SplitBySeverity => Some(LabelKind::Severity),
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in ChartMode::ALL {
            assert_eq!(ChartMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn unknown_names_group_everything() {
        assert_eq!(ChartMode::from_name("bogus"), ChartMode::Grouped);
        assert_eq!(ChartMode::from_name(""), ChartMode::Grouped);
        assert_eq!(ChartMode::from_name("TYPE"), ChartMode::Grouped);
    }

    #[test]
    fn each_mode_shows_at_most_one_label_set() {
        assert_eq!(ChartMode::Grouped.visible_labels(), None);
        assert_eq!(
            ChartMode::SplitByType.visible_labels(),
            Some(LabelKind::Category)
        );
        assert_eq!(
            ChartMode::SplitBySeverity.visible_labels(),
            Some(LabelKind::Severity)
        );
    }
}
