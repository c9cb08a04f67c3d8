//! Protocol class

token_enum! {
    /// PJLink feature tier. Class 2 is a superset of class 1.
    Class, "class" {
        One = "1",
        Two = "2",
    }
}

impl Class {
    /// Class from its wire digit
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Class::One),
            '2' => Some(Class::Two),
            _ => None,
        }
    }

    /// Wire digit for this class
    pub fn digit(self) -> char {
        match self {
            Class::One => '1',
            Class::Two => '2',
        }
    }
}
