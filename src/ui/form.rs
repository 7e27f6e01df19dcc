use std::ops::RangeInclusive;

use crate::domain::passenger::{
    Category, Passenger, Port, Sex, TicketClass, AGE_RANGE, FARE_RANGE, PARCH_RANGE, SIBSP_RANGE,
};

/// The seven controls, in focus order (top of the screen to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sex,
    TicketClass,
    Embarked,
    Age,
    SibSp,
    Parch,
    Fare,
}

impl Field {
    pub const ORDER: [Field; 7] = [
        Field::Sex,
        Field::TicketClass,
        Field::Embarked,
        Field::Age,
        Field::SibSp,
        Field::Parch,
        Field::Fare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Sex         => "Gender",
            Field::TicketClass => "Ticket Class",
            Field::Embarked    => "Port of Embarkation",
            Field::Age         => "Age",
            Field::SibSp       => "Number of Siblings/Spouse",
            Field::Parch       => "Number of Parents/Children",
            Field::Fare        => "Ticket Fare ($)",
        }
    }

    /// Slider bounds; `None` for the radio groups.
    pub fn range(self) -> Option<RangeInclusive<u16>> {
        match self {
            Field::Age   => Some(AGE_RANGE),
            Field::SibSp => Some(SIBSP_RANGE),
            Field::Parch => Some(PARCH_RANGE),
            Field::Fare  => Some(FARE_RANGE),
            Field::Sex | Field::TicketClass | Field::Embarked => None,
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or_default()
    }

    pub fn next(self) -> Field {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        let n = Self::ORDER.len();
        Self::ORDER[(self.position() + n - 1) % n]
    }
}

/// Move a category selection by `delta`, stopping at either end.
fn step_category<C: Category>(current: C, delta: i32) -> C {
    let last = C::ALL.len() as i32 - 1;
    let idx = (current.code() as i32 + delta).clamp(0, last);
    C::ALL[idx as usize]
}

fn step_value(current: u16, delta: i32, range: &RangeInclusive<u16>) -> u16 {
    let v = (current as i32 + delta).clamp(*range.start() as i32, *range.end() as i32);
    v as u16
}

/// Control state of the Input Collector. Every mutation keeps the
/// passenger inside the declared ranges, so the form can never hold
/// an invalid input.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerForm {
    pub passenger: Passenger,
    pub focus:     Field,
}

impl Default for PassengerForm {
    fn default() -> Self {
        Self { passenger: Passenger::default(), focus: Field::ORDER[0] }
    }
}

impl PassengerForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Adjust the focused control. Returns true if a value changed.
    pub fn step(&mut self, delta: i32) -> bool {
        let before = self.passenger;
        let p = &mut self.passenger;
        match self.focus {
            Field::Sex         => p.sex = step_category(p.sex, delta),
            Field::TicketClass => p.class = step_category(p.class, delta),
            Field::Embarked    => p.embarked = step_category(p.embarked, delta),
            Field::Age         => p.age = step_value(p.age, delta, &AGE_RANGE),
            Field::SibSp       => p.sibsp = step_value(p.sibsp, delta, &SIBSP_RANGE),
            Field::Parch       => p.parch = step_value(p.parch, delta, &PARCH_RANGE),
            Field::Fare        => p.fare = step_value(p.fare, delta, &FARE_RANGE),
        }
        self.passenger != before
    }

    /// Jump the focused control to its lowest value
    pub fn to_min(&mut self) -> bool {
        self.step(i32::from(u16::MIN) - i32::from(u16::MAX))
    }

    /// Jump the focused control to its highest value
    pub fn to_max(&mut self) -> bool {
        self.step(i32::from(u16::MAX))
    }

    /// Restore every control to its default. Focus is kept.
    pub fn reset(&mut self) -> bool {
        let changed = self.passenger != Passenger::default();
        self.passenger = Passenger::default();
        changed
    }

    /// Current value of a slider control
    pub fn value(&self, field: Field) -> Option<u16> {
        let p = &self.passenger;
        match field {
            Field::Age   => Some(p.age),
            Field::SibSp => Some(p.sibsp),
            Field::Parch => Some(p.parch),
            Field::Fare  => Some(p.fare),
            Field::Sex | Field::TicketClass | Field::Embarked => None,
        }
    }

    /// (option labels, selected index) of a radio group
    pub fn options(&self, field: Field) -> Option<(Vec<&'static str>, usize)> {
        fn labels<C: Category>(selected: C) -> (Vec<&'static str>, usize) {
            (C::ALL.iter().map(|c| c.label()).collect(), selected.code() as usize)
        }
        let p = &self.passenger;
        match field {
            Field::Sex         => Some(labels::<Sex>(p.sex)),
            Field::TicketClass => Some(labels::<TicketClass>(p.class)),
            Field::Embarked    => Some(labels::<Port>(p.embarked)),
            _ => None,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn focused(field: Field) -> PassengerForm {
        PassengerForm { focus: field, ..PassengerForm::default() }
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Field::Fare.next(), Field::Sex);
        assert_eq!(Field::Sex.prev(), Field::Fare);
        let mut form = PassengerForm::default();
        for _ in 0..Field::ORDER.len() {
            form.focus_next();
        }
        assert_eq!(form.focus, Field::Sex);
    }

    #[test]
    fn test_sliders_clamp_to_range() {
        let mut form = focused(Field::Age);
        assert!(form.to_max());
        assert_eq!(form.passenger.age, 80);
        assert!(!form.step(1));
        assert_eq!(form.passenger.age, 80);
        assert!(form.to_min());
        assert_eq!(form.passenger.age, 0);
        assert!(!form.step(-10));

        let mut form = focused(Field::Fare);
        form.step(1000);
        assert_eq!(form.passenger.fare, 512);

        let mut form = focused(Field::Parch);
        form.step(10);
        assert_eq!(form.passenger.parch, 6);

        let mut form = focused(Field::SibSp);
        form.step(10);
        assert_eq!(form.passenger.sibsp, 10);
    }

    #[test]
    fn test_radio_groups_clamp_at_ends() {
        let mut form = focused(Field::TicketClass);
        assert!(!form.step(1)); // already Third Class
        assert!(form.step(-1));
        assert_eq!(form.passenger.class, TicketClass::Second);
        form.to_min();
        assert_eq!(form.passenger.class, TicketClass::First);

        let mut form = focused(Field::Sex);
        form.step(-1);
        assert_eq!(form.passenger.sex, Sex::Female);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = focused(Field::Fare);
        form.step(-100);
        assert!(form.reset());
        assert_eq!(form.passenger, Passenger::default());
        assert_eq!(form.focus, Field::Fare);
        assert!(!form.reset());
    }

    #[test]
    fn test_radio_options_list_every_label() {
        let form = PassengerForm::default();
        let (labels, selected) = form.options(Field::Embarked).unwrap();
        assert_eq!(labels, vec!["Cherbourg", "Queenstown", "Southampton"]);
        assert_eq!(selected, 2);
        assert!(form.options(Field::Age).is_none());
        assert_eq!(form.value(Field::Age), Some(30));
    }

    #[test]
    fn test_every_slider_has_a_range() {
        for field in Field::ORDER {
            assert_eq!(field.range().is_some(), PassengerForm::default().value(field).is_some());
        }
    }
}
