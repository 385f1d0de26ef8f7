/// Piece of a paragraph; `Strong` runs are emphasised.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Span {
    Plain(&'static str),
    Strong(&'static str),
}

pub const STORY: &[&[Span]] = &[
    &[
        Span::Plain("Born from the intersection of "),
        Span::Strong("digital innovation"),
        Span::Plain(" and "),
        Span::Strong("sartorial excellence"),
        Span::Plain(", Hynox emerged when we realized the future demanded more than just good code or great clothes."),
    ],
    &[Span::Plain(
        "We saw a generation that refused to choose between looking good and thinking smart. So we built a company that delivers both: curated fashion that speaks to your style and tech solutions that amplify your vision.",
    )],
    &[Span::Plain("This isn't just business. This is evolution.")],
];

pub const MISSION: &[Span] = &[
    Span::Plain("\"To empower the next generation with tools that enhance both their "),
    Span::Strong("digital presence"),
    Span::Plain(" and their "),
    Span::Strong("personal style"),
    Span::Plain(
        ", because in 2025, there's no difference between who you are online and who you are in real life.\"",
    ),
];

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PILLARS: &[Card] = &[
    Card { icon: "👕", title: "FASHION", desc: "Curated monthly boxes" },
    Card { icon: "💻", title: "TECH", desc: "Digital solutions" },
];

pub const DIFFERENCES: &[Card] = &[
    Card {
        icon: "⚡",
        title: "DUAL EXPERTISE",
        desc: "We're the only company that masters both fashion curation and enterprise-level tech development. Your style and your systems, perfected.",
    },
    Card {
        icon: "🎯",
        title: "GEN Z FOCUSED",
        desc: "Built by digital natives, for digital natives. We understand the aesthetic and functionality that defines the next generation.",
    },
    Card {
        icon: "✨",
        title: "FUTURE-FIRST",
        desc: "Every piece we curate and every line of code we write is designed for tomorrow's world, not yesterday's limitations.",
    },
];

pub const VALUES: &[Card] = &[
    Card {
        icon: "💡",
        title: "AUTHENTICITY OVER TRENDS",
        desc: "We don't chase what's popular. We define what's next.",
    },
    Card {
        icon: "🎯",
        title: "QUALITY OVER QUANTITY",
        desc: "Every garment curated, every solution developed: built to last and built to matter.",
    },
    Card {
        icon: "🚀",
        title: "INNOVATION OVER IMITATION",
        desc: "We create new paradigms instead of copying old ones.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_runs(spans: &[Span]) -> Vec<&'static str> {
        spans
            .iter()
            .filter_map(|s| match s {
                Span::Strong(text) => Some(*text),
                Span::Plain(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_story_opening_emphasis() {
        assert_eq!(strong_runs(STORY[0]), vec!["digital innovation", "sartorial excellence"]);
    }

    #[test]
    fn test_mission_emphasis() {
        assert_eq!(strong_runs(MISSION), vec!["digital presence", "personal style"]);
    }

    #[test]
    fn test_card_counts() {
        assert_eq!(PILLARS.len(), 2);
        assert_eq!(DIFFERENCES.len(), 3);
        assert_eq!(VALUES.len(), 3);
    }
}
