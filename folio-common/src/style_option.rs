/// One selectable choice within a style dimension
#[derive(Clone, Copy, Debug)]
pub struct StyleOption {
    pub label: &'static str,
    /// CSS-legal token written into the style record
    pub value: &'static str,
}

impl StyleOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Options are identified by value; labels are display-only.
impl PartialEq for StyleOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for StyleOption {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_label() {
        let a = StyleOption::new("Black", "#000");
        let b = StyleOption::new("Schwarz", "#000");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_values_differ() {
        let a = StyleOption::new("18px", "18px");
        let b = StyleOption::new("18px", "25px");
        assert_ne!(a, b);
    }
}
