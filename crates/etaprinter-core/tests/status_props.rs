// Rust guideline compliant 2026-02-06

//! Property-based tests for the progress bar.

use etaprinter_core::render_bar;
use proptest::prelude::*;

/// Extracts the cells between the brackets.
fn cells(bar: &str) -> &str {
    let start = bar.find('[').expect("opening bracket") + 1;
    let end = bar.rfind(']').expect("closing bracket");
    &bar[start..end]
}

proptest! {
    /// The bar always holds exactly 100 cells.
    #[test]
    fn prop_bar_has_fixed_width(percentage in 0u8..=100) {
        let bar = render_bar(percentage);
        prop_assert_eq!(cells(&bar).chars().count(), 100);
        let prefix = format!("{}% [", percentage);
        prop_assert!(bar.starts_with(&prefix));
        prop_assert!(bar.ends_with("] "));
    }

    /// Exactly one head except at the ends of the range.
    #[test]
    fn prop_bar_has_single_head(percentage in 0u8..=100) {
        let bar = render_bar(percentage);
        let heads = cells(&bar).chars().filter(|c| *c == '>').count();
        let expected = usize::from(percentage != 0 && percentage != 100);
        prop_assert_eq!(heads, expected);
    }

    /// Filled cells precede the head, blanks follow it.
    #[test]
    fn prop_bar_fill_matches_percentage(percentage in 1u8..100) {
        let bar = render_bar(percentage);
        let filled = cells(&bar).chars().take_while(|c| *c == '=').count();
        prop_assert_eq!(filled, usize::from(percentage) - 1);
        let blanks = cells(&bar).chars().filter(|c| *c == ' ').count();
        prop_assert_eq!(blanks, 100 - usize::from(percentage));
    }
}
