//! Category taxonomies used by the kootas.
//!
//! Each enum's declaration order is the row/column order of its
//! compatibility matrix in [`crate::tables`].

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Varna (caste), ranked highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

pub const ALL_VARNAS: [Varna; 4] = [Varna::Brahmin, Varna::Kshatriya, Varna::Vaishya, Varna::Shudra];

impl Varna {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Brahmin => 0,
            Self::Kshatriya => 1,
            Self::Vaishya => 2,
            Self::Shudra => 3,
        }
    }
}

/// Vashya (dominance) group of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vashya {
    /// Quadruped.
    Chatushpada,
    /// Wild (forest dweller).
    Vanachara,
    /// Water dweller.
    Jalochara,
    /// Insect.
    Keetochara,
    /// Human.
    Manushya,
}

pub const ALL_VASHYAS: [Vashya; 5] = [
    Vashya::Chatushpada,
    Vashya::Vanachara,
    Vashya::Jalochara,
    Vashya::Keetochara,
    Vashya::Manushya,
];

impl Vashya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Vanachara => "Vanachara",
            Self::Jalochara => "Jalochara",
            Self::Keetochara => "Keetochara",
            Self::Manushya => "Manushya",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Chatushpada => 0,
            Self::Vanachara => 1,
            Self::Jalochara => 2,
            Self::Keetochara => 3,
            Self::Manushya => 4,
        }
    }
}

/// Gana (temperament).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

pub const ALL_GANAS: [Gana; 3] = [Gana::Deva, Gana::Manushya, Gana::Rakshasa];

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Deva => 0,
            Self::Manushya => 1,
            Self::Rakshasa => 2,
        }
    }
}

/// Yoni (animal archetype). Fourteen classical yonis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    /// Horse.
    Ashwa,
    /// Elephant.
    Gaja,
    /// Sheep.
    Mesha,
    /// Serpent.
    Sarpa,
    /// Dog.
    Shwan,
    /// Cat.
    Marjara,
    /// Rat.
    Mushaka,
    /// Cow.
    Go,
    /// Buffalo.
    Mahisha,
    /// Tiger.
    Vyaghra,
    /// Deer.
    Mriga,
    /// Monkey.
    Vanara,
    /// Mongoose.
    Nakula,
    /// Lion.
    Simha,
}

pub const ALL_YONIS: [Yoni; 14] = [
    Yoni::Ashwa,
    Yoni::Gaja,
    Yoni::Mesha,
    Yoni::Sarpa,
    Yoni::Shwan,
    Yoni::Marjara,
    Yoni::Mushaka,
    Yoni::Go,
    Yoni::Mahisha,
    Yoni::Vyaghra,
    Yoni::Mriga,
    Yoni::Vanara,
    Yoni::Nakula,
    Yoni::Simha,
];

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwa => "Ashwa",
            Self::Gaja => "Gaja",
            Self::Mesha => "Mesha",
            Self::Sarpa => "Sarpa",
            Self::Shwan => "Shwan",
            Self::Marjara => "Marjara",
            Self::Mushaka => "Mushaka",
            Self::Go => "Go",
            Self::Mahisha => "Mahisha",
            Self::Vyaghra => "Vyaghra",
            Self::Mriga => "Mriga",
            Self::Vanara => "Vanara",
            Self::Nakula => "Nakula",
            Self::Simha => "Simha",
        }
    }

    /// English name of the animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ashwa => "Horse",
            Self::Gaja => "Elephant",
            Self::Mesha => "Sheep",
            Self::Sarpa => "Serpent",
            Self::Shwan => "Dog",
            Self::Marjara => "Cat",
            Self::Mushaka => "Rat",
            Self::Go => "Cow",
            Self::Mahisha => "Buffalo",
            Self::Vyaghra => "Tiger",
            Self::Mriga => "Deer",
            Self::Vanara => "Monkey",
            Self::Nakula => "Mongoose",
            Self::Simha => "Lion",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Ashwa => 0,
            Self::Gaja => 1,
            Self::Mesha => 2,
            Self::Sarpa => 3,
            Self::Shwan => 4,
            Self::Marjara => 5,
            Self::Mushaka => 6,
            Self::Go => 7,
            Self::Mahisha => 8,
            Self::Vyaghra => 9,
            Self::Mriga => 10,
            Self::Vanara => 11,
            Self::Nakula => 12,
            Self::Simha => 13,
        }
    }
}

/// Nadi (humor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Aadi,
    Madhya,
    Antya,
}

pub const ALL_NADIS: [Nadi; 3] = [Nadi::Aadi, Nadi::Madhya, Nadi::Antya];

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aadi => "Aadi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Aadi => 0,
            Self::Madhya => 1,
            Self::Antya => 2,
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),+) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.pad(self.name())
                }
            }
        )+
    };
}

display_by_name!(Varna, Vashya, Gana, Yoni, Nadi);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, v) in ALL_VARNAS.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
        for (i, v) in ALL_VASHYAS.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
        for (i, g) in ALL_GANAS.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
        for (i, y) in ALL_YONIS.iter().enumerate() {
            assert_eq!(y.index(), i);
        }
        for (i, n) in ALL_NADIS.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
    }

    #[test]
    fn display_uses_sanskrit_name() {
        assert_eq!(Varna::Brahmin.to_string(), "Brahmin");
        assert_eq!(Yoni::Go.to_string(), "Go");
        assert_eq!(Nadi::Antya.to_string(), "Antya");
    }

    #[test]
    fn serialized_names_match_display() {
        for y in ALL_YONIS {
            let json = serde_json::to_string(&y).unwrap();
            assert_eq!(json, format!("\"{}\"", y.name()));
        }
        for v in ALL_VASHYAS {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.name()));
        }
    }
}
