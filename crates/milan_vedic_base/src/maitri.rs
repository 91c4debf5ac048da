//! Natural (naisargika) friendship between the sapta grahas.
//!
//! Clean-room table from BPHS. The relation is directional: Chandra counts
//! Budha a friend while Budha counts Chandra an enemy.

use serde::Serialize;

use crate::graha::Graha;

/// Natural relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NaisargikaMaitri {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other` by natural friendship.
///
/// A graha regards itself as Neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn; neutral=Mercury
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Surya, Budha | Surya) => Neutral,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Budha) => Friend,
        (Chandra, Chandra | Mangal | Guru | Shukra | Shani) => Neutral,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury; neutral=Venus,Saturn
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Budha) => Enemy,
        (Mangal, Mangal | Shukra | Shani) => Neutral,

        // Mercury: friends=Sun,Venus; enemies=Moon; neutral=Mars,Jupiter,Saturn
        (Budha, Surya | Shukra) => Friend,
        (Budha, Chandra) => Enemy,
        (Budha, Budha | Mangal | Guru | Shani) => Neutral,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus; neutral=Saturn
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Budha | Shukra) => Enemy,
        (Guru, Guru | Shani) => Neutral,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon; neutral=Mars,Jupiter
        (Shukra, Budha | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shukra, Shukra | Mangal | Guru) => Neutral,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars; neutral=Jupiter
        (Shani, Budha | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        (Shani, Shani | Guru) => Neutral,
    }
}
