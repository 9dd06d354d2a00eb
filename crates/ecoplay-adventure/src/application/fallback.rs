//! Built-in scenarios used when the content provider is unavailable.
//!
//! Ten playable chapters followed by a closing node whose only choice points
//! at id 12, which does not exist; loading it ends the adventure.

use crate::domain::scenario::{Choice, Scenario};

fn choice(id: &str, text: &str, points: i32, feedback: &str, next: u32) -> Choice {
    Choice {
        id: id.to_owned(),
        text: text.to_owned(),
        points_delta: Some(points),
        feedback: Some(feedback.to_owned()),
        next_scenario_id: Some(next),
    }
}

fn scenario(
    id: u32,
    description: &str,
    environment: &str,
    hint: &str,
    choices: Vec<Choice>,
) -> Scenario {
    Scenario {
        id,
        description: description.to_owned(),
        environment: environment.to_owned(),
        hint: hint.to_owned(),
        choices,
    }
}

/// Returns the built-in scenario list (ids 1 through 11).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn fallback_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "<p>You are hiking in a forest when you find a turtle tangled in plastic waste. \
             The turtle appears to be struggling and in distress.</p><p>What do you do?</p>",
            "forest",
            "Turtles can be injured by plastic waste. Consider both immediate help and long-term solutions.",
            vec![
                choice(
                    "1A",
                    "Remove the plastic carefully and release the turtle",
                    10,
                    "You carefully remove the plastic without harming the turtle. It slowly moves \
                     away, free from the harmful debris. You feel good knowing you've directly \
                     helped a creature in need.",
                    2,
                ),
                choice(
                    "1B",
                    "Ignore it and keep walking",
                    -5,
                    "You continue your hike, leaving the turtle struggling. As you walk away, you \
                     can't help but feel a sense of guilt knowing you could have helped.",
                    2,
                ),
                choice(
                    "1C",
                    "Call a wildlife rescue team",
                    5,
                    "You call a local wildlife rescue team. They thank you for reporting it and \
                     promise to send someone right away. You wait until they arrive to make sure \
                     the turtle gets help.",
                    2,
                ),
            ],
        ),
        scenario(
            2,
            "<p>You come across a small stream that's visibly polluted with trash and chemical \
             runoff from a nearby facility.</p><p>How do you respond to this situation?</p>",
            "ocean",
            "Water pollution affects entire ecosystems. Think about both immediate and systemic solutions.",
            vec![
                choice(
                    "2A",
                    "Organize a community cleanup for the stream",
                    15,
                    "You post about the polluted stream on social media and organize a weekend \
                     cleanup. Twenty people join you, and together you remove several bags of trash.",
                    3,
                ),
                choice(
                    "2B",
                    "Report the pollution to environmental authorities",
                    10,
                    "You document the pollution with photos and report it to the environmental \
                     protection agency. They thank you for the detailed report and promise to investigate.",
                    3,
                ),
                choice(
                    "2C",
                    "Take a water sample to test it yourself",
                    5,
                    "You collect a water sample in a clean container. Later, you use a home \
                     testing kit to confirm high levels of contaminants.",
                    3,
                ),
            ],
        ),
        scenario(
            3,
            "<p>Your town is experiencing a severe drought. Water restrictions have been \
             implemented, but you notice your neighbor using a sprinkler system daily.</p>\
             <p>What action do you take?</p>",
            "urban",
            "Water conservation during droughts is crucial. Consider both personal relationships and community needs.",
            vec![
                choice(
                    "3A",
                    "Politely talk to your neighbor about water conservation",
                    10,
                    "You approach your neighbor kindly and share information about the drought's \
                     severity. They're receptive and agree to reduce their water usage.",
                    4,
                ),
                choice(
                    "3B",
                    "Report them to local authorities for violating restrictions",
                    5,
                    "You report the violation anonymously. A water conservation officer visits \
                     your neighbor, who receives a warning.",
                    4,
                ),
                choice(
                    "3C",
                    "Leave an informational pamphlet about water conservation",
                    7,
                    "You leave a friendly note with information about the drought and water-saving tips.",
                    4,
                ),
            ],
        ),
        scenario(
            4,
            "<p>While shopping for groceries, you're deciding between conventional produce and \
             organic options.</p><p>What do you choose?</p>",
            "urban",
            "Food choices have environmental impacts through pesticide use, transportation emissions, \
             and supporting local economies.",
            vec![
                choice(
                    "4A",
                    "Buy the organic, locally grown produce",
                    15,
                    "You choose the organic, local options. Though more expensive, you're \
                     supporting local farmers and reducing transportation emissions.",
                    5,
                ),
                choice(
                    "4B",
                    "Buy the conventional, imported produce to save money",
                    -5,
                    "You opt for the cheaper conventional produce. While saving money, these foods \
                     traveled long distances, increasing carbon emissions.",
                    5,
                ),
                choice(
                    "4C",
                    "Buy some organic items and some conventional ones",
                    5,
                    "You compromise by purchasing organic versions of the 'dirty dozen' and \
                     conventional versions of other items.",
                    5,
                ),
            ],
        ),
        scenario(
            5,
            "<p>You're planning a vacation and considering different transportation options. \
             Your destination is about 500 miles away.</p><p>How do you choose to travel?</p>",
            "urban",
            "Different modes of transportation have varying carbon footprints.",
            vec![
                choice(
                    "5A",
                    "Fly there to save time",
                    -10,
                    "You choose to fly for convenience. Air travel produces significant carbon \
                     emissions per passenger.",
                    6,
                ),
                choice(
                    "5B",
                    "Take a train or bus",
                    15,
                    "You opt for public transportation. Trains and buses have much lower emissions \
                     per passenger than planes or private cars.",
                    6,
                ),
                choice(
                    "5C",
                    "Drive your own car",
                    -5,
                    "You drive your gasoline-powered car. While more convenient than public \
                     transport, your solo car trip generates significant emissions.",
                    6,
                ),
            ],
        ),
        scenario(
            6,
            "<p>You discover that a large corporation is planning to build a factory near a \
             protected wetland area.</p><p>What action do you take?</p>",
            "forest",
            "This situation involves balancing economic benefits with environmental protection.",
            vec![
                choice(
                    "6A",
                    "Actively protest against the factory",
                    10,
                    "You join local environmental groups in organizing protests. Your efforts gain \
                     media attention, putting pressure on the corporation.",
                    7,
                ),
                choice(
                    "6B",
                    "Support the factory for economic growth",
                    -10,
                    "You advocate for the factory, prioritizing job creation. The factory is \
                     built, creating jobs, but pollution begins affecting the wetland.",
                    7,
                ),
                choice(
                    "6C",
                    "Propose a compromise with stricter environmental regulations",
                    15,
                    "You work with both environmentalists and the corporation to develop a plan \
                     that allows the factory with enhanced environmental protections.",
                    7,
                ),
            ],
        ),
        scenario(
            7,
            "<p>You notice that your workplace has no recycling program and generates a lot of \
             waste.</p><p>What do you do about this situation?</p>",
            "urban",
            "Organizational change often requires both individual action and system-level approaches.",
            vec![
                choice(
                    "7A",
                    "Start bringing your own reusable items but don't address the larger issue",
                    5,
                    "You begin using a reusable water bottle, coffee mug, and lunch containers. \
                     Your colleagues notice your example.",
                    8,
                ),
                choice(
                    "7B",
                    "Propose and help implement a comprehensive recycling program",
                    15,
                    "You research recycling options, create a proposal, and present it to \
                     management. They approve your plan.",
                    8,
                ),
                choice(
                    "7C",
                    "Complain about the waste problem to colleagues without taking action",
                    -5,
                    "You frequently mention the waste problem to coworkers but don't suggest solutions.",
                    8,
                ),
            ],
        ),
        scenario(
            8,
            "<p>You're renovating your home and need to choose materials and appliances.</p>\
             <p>What do you prioritize?</p>",
            "urban",
            "Different aspects of home renovation have varying environmental impacts.",
            vec![
                choice(
                    "8A",
                    "Energy efficiency (better insulation, energy-efficient appliances)",
                    15,
                    "You invest in proper insulation and Energy Star appliances. Your energy bills drop by 30%.",
                    9,
                ),
                choice(
                    "8B",
                    "Water conservation (low-flow fixtures, efficient irrigation)",
                    10,
                    "You install low-flow toilets, faucets, and showerheads, plus a rain barrel \
                     for garden irrigation.",
                    9,
                ),
                choice(
                    "8C",
                    "Sustainable materials (reclaimed wood, low-VOC paint)",
                    5,
                    "You choose eco-friendly materials like bamboo flooring, reclaimed wood, and non-toxic paint.",
                    9,
                ),
            ],
        ),
        scenario(
            9,
            "<p>You discover an area in your community where illegal dumping has occurred.</p>\
             <p>How do you respond?</p>",
            "urban",
            "Illegal dumping can contaminate soil and water. Consider both cleanup and prevention.",
            vec![
                choice(
                    "9A",
                    "Report it to local authorities",
                    10,
                    "You document the dumping site with photos and report it to environmental authorities.",
                    10,
                ),
                choice(
                    "9B",
                    "Organize a community cleanup with proper safety measures",
                    15,
                    "You contact local environmental groups for guidance, then organize a cleanup \
                     with proper safety equipment.",
                    10,
                ),
                choice(
                    "9C",
                    "Clean it up yourself without special equipment",
                    -5,
                    "With good intentions but inadequate protection, you attempt to clean up the site.",
                    10,
                ),
            ],
        ),
        scenario(
            10,
            "<p>You're considering how to reduce your carbon footprint through your diet.</p>\
             <p>What dietary change do you decide to make?</p>",
            "urban",
            "Food choices have significant environmental impacts. Animal products generally have \
             higher carbon footprints than plant-based options.",
            vec![
                choice(
                    "10A",
                    "Become fully vegan (no animal products)",
                    15,
                    "You transition to a completely plant-based diet. This choice significantly \
                     reduces your carbon footprint.",
                    11,
                ),
                choice(
                    "10B",
                    "Adopt a vegetarian diet (no meat but still consume dairy and eggs)",
                    10,
                    "You eliminate meat but continue eating dairy and eggs. This reduces your \
                     dietary carbon footprint substantially.",
                    11,
                ),
                choice(
                    "10C",
                    "Become a 'flexitarian' (mostly plant-based with occasional meat)",
                    5,
                    "You reduce meat consumption to once or twice a week and choose more plant-based meals.",
                    11,
                ),
            ],
        ),
        scenario(
            11,
            "<p>This is the end of your eco-adventure journey. Your choices have shaped the \
             environment around you.</p>",
            "forest",
            "Every environmental choice matters, both big and small.",
            vec![Choice {
                id: "11A".to_owned(),
                text: "See your results".to_owned(),
                points_delta: Some(0),
                feedback: None,
                next_scenario_id: Some(12),
            }],
        ),
    ]
}
