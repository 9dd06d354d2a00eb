//! Built-in question bank served when no catalog directory is configured.

use ecoplay_quiz::domain::question::Question;

fn question(text: &str, options: [&str; 4], correct: &str, explanation: &str) -> Question {
    Question {
        question: text.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
        correct_answer: correct.to_owned(),
        explanation: explanation.to_owned(),
    }
}

/// Returns ten sustainability questions in authoring order.
#[must_use]
pub fn built_in_questions() -> Vec<Question> {
    vec![
        question(
            "Which gas is the largest contributor to human-caused global warming?",
            ["Oxygen", "Carbon dioxide", "Nitrogen", "Argon"],
            "B",
            "Carbon dioxide from burning fossil fuels accounts for the largest share of the \
             human-caused greenhouse effect.",
        ),
        question(
            "Which of these energy sources is renewable?",
            ["Coal", "Natural gas", "Wind", "Diesel"],
            "C",
            "Wind is replenished naturally and does not run out on a human timescale.",
        ),
        question(
            "What does the term 'biodiversity' describe?",
            [
                "The variety of life in an area",
                "The number of trees in a forest",
                "The amount of rainfall in a year",
                "The speed of plant growth",
            ],
            "A",
            "Biodiversity is the variety of species, genes, and ecosystems found in a place.",
        ),
        question(
            "Which practice reduces household water use the most?",
            [
                "Running half-empty dishwasher loads",
                "Fixing leaking taps and toilets",
                "Watering the lawn at noon",
                "Taking longer showers",
            ],
            "B",
            "Leaks can waste thousands of litres a year; fixing them is one of the simplest savings.",
        ),
        question(
            "What is composting?",
            [
                "Burning garden waste",
                "Sending food scraps to landfill",
                "Breaking down organic waste into fertiliser",
                "Freezing leftovers",
            ],
            "C",
            "Composting lets microorganisms turn organic waste into nutrient-rich soil.",
        ),
        question(
            "Which transport option usually has the lowest emissions per passenger?",
            ["Short-haul flight", "Solo car trip", "Intercity train", "Private jet"],
            "C",
            "Trains carry many passengers efficiently and often run on electricity.",
        ),
        question(
            "What is the main cause of ocean acidification?",
            [
                "Plastic waste",
                "Absorption of carbon dioxide",
                "Oil spills",
                "Overfishing",
            ],
            "B",
            "Seawater absorbs CO2 from the air, forming carbonic acid and lowering its pH.",
        ),
        question(
            "Which label indicates that produce was grown without synthetic pesticides?",
            ["Organic", "Fresh", "Natural flavour", "Imported"],
            "A",
            "Organic certification restricts synthetic pesticides and fertilisers.",
        ),
        question(
            "What does a wetland provide to its surroundings?",
            [
                "Nothing of value",
                "Flood control and water filtration",
                "Desert conditions",
                "Increased air pollution",
            ],
            "B",
            "Wetlands absorb floodwater and filter pollutants while sheltering wildlife.",
        ),
        question(
            "Which of the 'three Rs' should come first?",
            ["Recycle", "Reuse", "Reduce", "They are equal"],
            "C",
            "Reducing consumption avoids waste entirely, before reuse or recycling are needed.",
        ),
    ]
}
