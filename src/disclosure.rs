/// Show/hide state for a "read more" block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Label for the control that flips this state.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Collapsed => "Read more",
            Self::Expanded => "Show less",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let d = Disclosure::default();
        assert!(!d.is_expanded());
        assert_eq!(d.label(), "Read more");
    }

    #[test]
    fn test_toggle_alternates() {
        let mut d = Disclosure::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            d = d.toggled();
            seen.push(d.is_expanded());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for d in [Disclosure::Collapsed, Disclosure::Expanded] {
            assert_eq!(d.toggled().toggled(), d);
            assert_ne!(d.toggled(), d);
        }
        assert_eq!(Disclosure::Expanded.label(), "Show less");
    }
}
