//! Random display names for players
//!
//! Names are "Adjective Noun", drawn independently from two fixed word
//! lists. Nothing prevents two players from drawing the same name.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::capitalize_first_letter;

/// Adjectives, stored lowercase
pub const ADJECTIVES: &[&str] = &[
    "adorable", "adventurous", "aggressive", "angry", "anxious", "bad", "black", "bored",
    "brainy", "calm", "careful", "beautiful", "lone", "red", "purple", "pink", "brown", "white",
    "green", "orange", "cool", "swaggy", "interesting", "intelligent", "smart", "clumsy", "funny",
    "charismatic", "cheerful", "charming", "curious", "crazy", "dangerous", "clever",
    "cooperative", "busy", "brave", "courageous", "eager", "evil", "gorgeous", "gifted",
    "fragile", "healthy", "hungry", "lonely", "mysterious", "shy", "ugly", "talented", "witty",
];

/// Nouns, stored lowercase
pub const NOUNS: &[&str] = &[
    "bear", "coyote", "human", "individual", "person", "cat", "dog", "player", "wolf", "tiger",
    "leopard", "parrot", "bird", "fish", "animal", "gamer", "athlete", "teacher", "student",
    "driver", "runner", "singer", "dancer", "pedestrian", "cow", "pig", "chicken", "engineer",
    "doctor", "nurse", "firefighter", "warrior", "soldier", "mage", "knight", "baker", "chef",
    "emperor", "actor", "flower", "horse", "kangaroo", "lizard", "monkey", "zebra", "ghost",
    "magician", "elephant", "canadian", "apple", "specimen", "unit", "citizen",
];

/// Generates a display name using the thread-local RNG.
pub fn generate_name() -> String {
    generate_name_with(&mut rand::thread_rng())
}

/// Generates a display name like "Brave Knight" from the given RNG.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use hudkit_domain::value_objects::generate_name_with;
///
/// let name = generate_name_with(&mut StdRng::seed_from_u64(1));
/// assert_eq!(name.split(' ').count(), 2);
/// ```
pub fn generate_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = pick(ADJECTIVES, rng);
    let noun = pick(NOUNS, rng);
    format!(
        "{} {}",
        capitalize_first_letter(adjective),
        capitalize_first_letter(noun)
    )
}

fn pick<'a, R: Rng + ?Sized>(words: &[&'a str], rng: &mut R) -> &'a str {
    // Both lists are non-empty constants
    words.choose(rng).copied().unwrap_or_default()
}
