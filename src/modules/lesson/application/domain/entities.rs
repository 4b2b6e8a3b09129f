pub const LESSON_NAME_MIN: usize = 2;
pub const LESSON_NAME_MAX: usize = 20;

/// Length is counted in characters, so "Bahasa Jawa" and "算数" measure the same way.
pub fn lesson_name_in_range(name: &str) -> bool {
    let len = name.chars().count();
    (LESSON_NAME_MIN..=LESSON_NAME_MAX).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(lesson_name_in_range("IP"));
        assert!(lesson_name_in_range(&"a".repeat(20)));
        assert!(!lesson_name_in_range("M"));
        assert!(!lesson_name_in_range(&"a".repeat(21)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(lesson_name_in_range("算数"));
    }
}
