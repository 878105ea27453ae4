pub const CHILD_CAVEAT: &str = " Children should avoid outdoor play.";
pub const ELDERLY_CAVEAT: &str = " Elderly should stay indoors and limit exposure.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    /// 12 and under
    Child,
    Adult,
    /// 60 and over
    Elderly,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeGroup::Child,
            13..=59 => AgeGroup::Adult,
            _ => AgeGroup::Elderly,
        }
    }

    pub fn caveat(&self) -> Option<&'static str> {
        match self {
            AgeGroup::Child => Some(CHILD_CAVEAT),
            AgeGroup::Adult => None,
            AgeGroup::Elderly => Some(ELDERLY_CAVEAT),
        }
    }
}

/// Base suggestion plus at most one age caveat.
pub fn adjust_suggestion(base: &str, age: u32) -> String {
    let mut suggestion = base.to_string();
    if let Some(caveat) = AgeGroup::from_age(age).caveat() {
        suggestion.push_str(caveat);
    }
    suggestion
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "Air quality is satisfactory. Enjoy outdoor activities.";

    #[test]
    fn age_brackets() {
        assert_eq!(AgeGroup::from_age(1), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(13), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Elderly);
        assert_eq!(AgeGroup::from_age(120), AgeGroup::Elderly);
    }

    #[test]
    fn adults_get_base_suggestion_only() {
        for age in 13..=59 {
            assert_eq!(adjust_suggestion(BASE, age), BASE);
        }
    }

    #[test]
    fn children_and_elderly_get_one_caveat() {
        let child = adjust_suggestion(BASE, 8);
        assert_eq!(child, format!("{}{}", BASE, CHILD_CAVEAT));

        let elderly = adjust_suggestion(BASE, 65);
        assert!(elderly.ends_with(ELDERLY_CAVEAT));
        assert!(!elderly.contains(CHILD_CAVEAT));
    }

    #[test]
    fn never_more_than_one_caveat() {
        for age in 0..=130 {
            let s = adjust_suggestion(BASE, age);
            let count = s.matches(CHILD_CAVEAT).count() + s.matches(ELDERLY_CAVEAT).count();
            assert!(count <= 1, "age {} got {} caveats", age, count);
        }
    }
}
