//! Ending classification.
//!
//! The final eco-point total maps onto one of four endings. The mapping is
//! a pure function of the score and is defined for every `i32`.

use ecoplay_core::band;
use serde::Serialize;

/// The four possible endings, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingTier {
    /// 80 points or more.
    Champion,
    /// 50 to 79 points.
    EcoWarrior,
    /// 30 to 49 points.
    Ally,
    /// Below 30 points.
    Observer,
}

/// How strongly the player's choices helped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// Champion ending.
    Excellent,
    /// Eco-Warrior ending.
    Good,
    /// Ally ending.
    Moderate,
    /// Observer ending.
    Limited,
}

/// A badge on the ending screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge name.
    pub name: &'static str,
    /// Whether this ending earns it.
    pub earned: bool,
}

/// Everything the ending screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ending {
    /// Which tier this is.
    pub tier: EndingTier,
    /// Player title, e.g. "Eco-Warrior".
    pub title: &'static str,
    /// Closing narrative.
    pub narrative: &'static str,
    /// Impact classification.
    pub impact_level: ImpactLevel,
    /// Fill level of the impact meter, in percent.
    pub impact_percent: u8,
    /// Consequences listed under the meter.
    pub highlights: [&'static str; 4],
    /// Badge row.
    pub badges: [Badge; 3],
}

const THRESHOLDS: [(i32, EndingTier); 3] = [
    (80, EndingTier::Champion),
    (50, EndingTier::EcoWarrior),
    (30, EndingTier::Ally),
];

const BADGE_NAMES: [&str; 3] = ["Earth Protector", "Sustainability Expert", "Wildlife Guardian"];

/// Classifies a final score.
#[must_use]
pub fn classify(score: i32) -> EndingTier {
    band::classify(score, &THRESHOLDS, EndingTier::Observer)
}

fn badges(earned: usize) -> [Badge; 3] {
    let mut row = [Badge {
        name: "",
        earned: false,
    }; 3];
    for (i, badge) in row.iter_mut().enumerate() {
        badge.name = BADGE_NAMES[i];
        badge.earned = i < earned;
    }
    row
}

impl EndingTier {
    /// Full ending content for this tier.
    #[must_use]
    pub fn ending(self) -> Ending {
        match self {
            Self::Champion => Ending {
                tier: self,
                title: "Environmental Champion",
                narrative: "Congratulations, Environmental Champion! Your choices have made a \
                            significant positive impact on the planet. Future generations will \
                            benefit from your wisdom and care for the environment.",
                impact_level: ImpactLevel::Excellent,
                impact_percent: 95,
                highlights: [
                    "You've helped reduce carbon emissions by an estimated 75%",
                    "Your actions have protected endangered species and their habitats",
                    "Communities are thriving with sustainable practices you've supported",
                    "Natural resources are being preserved for future generations",
                ],
                badges: badges(3),
            },
            Self::EcoWarrior => Ending {
                tier: self,
                title: "Eco-Warrior",
                narrative: "Well done, Eco-Warrior! Your journey shows a strong commitment to \
                            environmental sustainability. While some challenges remain, your \
                            positive choices have helped create a better world.",
                impact_level: ImpactLevel::Good,
                impact_percent: 70,
                highlights: [
                    "You've contributed to a 45% reduction in pollution",
                    "Several ecosystems are recovering thanks to your efforts",
                    "Renewable energy adoption has increased in your region",
                    "Your community is more environmentally conscious",
                ],
                badges: badges(2),
            },
            Self::Ally => Ending {
                tier: self,
                title: "Environmental Ally",
                narrative: "You're on the right path as an Environmental Ally. While some of \
                            your choices could have been more eco-friendly, you've shown \
                            awareness of environmental issues and made some positive impacts.",
                impact_level: ImpactLevel::Moderate,
                impact_percent: 40,
                highlights: [
                    "You've helped reduce waste by about 25%",
                    "Some wildlife populations have stabilized with your help",
                    "Your community has taken small steps toward sustainability",
                    "There's room for improvement, but you've made a difference",
                ],
                badges: badges(1),
            },
            Self::Observer => Ending {
                tier: self,
                title: "Environmental Observer",
                narrative: "Your journey as an Environmental Observer has ended. Many of your \
                            choices didn't prioritize ecological sustainability. Consider how \
                            different decisions might lead to a healthier planet in the future.",
                impact_level: ImpactLevel::Limited,
                impact_percent: 15,
                highlights: [
                    "Environmental degradation continues in many areas",
                    "Wildlife populations remain threatened",
                    "Pollution levels remain high in your region",
                    "There's significant opportunity to make more eco-friendly choices",
                ],
                badges: badges(0),
            },
        }
    }
}
