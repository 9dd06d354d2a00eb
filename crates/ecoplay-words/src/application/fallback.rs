//! Built-in word lists used when the content provider is unavailable.

use crate::domain::word::{Difficulty, WordEntry};

const EASY: [(&str, &str); 10] = [
    ("RECYCLE", "Process of converting waste into reusable material"),
    ("GREEN", "Color associated with environmental movements"),
    ("EARTH", "Our home planet"),
    ("WATER", "Essential resource for all life"),
    ("SOLAR", "Relating to energy from the sun"),
    ("PLANT", "Living organism that produces oxygen"),
    ("CLEAN", "Free from pollution"),
    ("WASTE", "Unwanted or unusable material"),
    ("REUSE", "Use again or more than once"),
    ("ECO", "Prefix relating to the environment"),
];

const MEDIUM: [(&str, &str); 10] = [
    ("COMPOST", "Decayed organic material used as plant fertilizer"),
    ("CLIMATE", "Long-term weather patterns in an area"),
    ("ORGANIC", "Produced without artificial chemicals"),
    ("ECOLOGY", "Study of interactions between organisms and environment"),
    ("BIOFUEL", "Fuel derived from organic matter"),
    ("CARBON", "Element that forms the basis of greenhouse gases"),
    ("HABITAT", "Natural home of an animal or plant"),
    ("WETLAND", "Land area saturated with water"),
    ("OZONE", "Layer in the atmosphere that protects from UV radiation"),
    ("FOREST", "Large area covered with trees"),
];

const HARD: [(&str, &str); 10] = [
    ("BIODIVERSITY", "Variety of plant and animal life in a habitat"),
    ("SUSTAINABLE", "Able to be maintained at a certain rate or level"),
    ("CONSERVATION", "Protection of natural resources"),
    ("DEFORESTATION", "Clearing of forests on a large scale"),
    ("PHOTOVOLTAIC", "Converting light into electricity"),
    ("HYDROELECTRIC", "Generating electricity using flowing water"),
    ("PERMACULTURE", "Agricultural ecosystem intended to be sustainable"),
    ("DESERTIFICATION", "Process by which fertile land becomes desert"),
    ("EUTROPHICATION", "Excessive richness of nutrients in a body of water"),
    ("GEOTHERMAL", "Relating to heat from the earth's interior"),
];

/// Returns the built-in list for `difficulty`.
///
/// These lists are served as they are; they are not held to the provider's
/// per-difficulty length limit.
#[must_use]
pub fn fallback_words(difficulty: Difficulty) -> Vec<WordEntry> {
    let list = match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    };
    list.iter()
        .map(|(word, hint)| WordEntry {
            word: (*word).to_owned(),
            hint: (*hint).to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_difficulty_has_ten_valid_words() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let words = fallback_words(difficulty);
            assert_eq!(words.len(), 10);
            for entry in &words {
                assert_eq!(entry.normalized().as_ref(), Some(entry));
            }
        }
    }

    #[test]
    fn test_medium_list_starts_with_compost() {
        assert_eq!(fallback_words(Difficulty::Medium)[0].word, "COMPOST");
    }
}
