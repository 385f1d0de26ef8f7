//! Copy and figures for the home page.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "👥",
        title: "Meta Ads",
        description: "Lead Generation, Sales, Retargeting strategies that convert your audience into customers.",
    },
    Service {
        icon: "🎯",
        title: "Google Ads",
        description: "Search, Display, YouTube, and Shopping campaigns optimized for maximum ROI.",
    },
    Service {
        icon: "📊",
        title: "Performance Tracking",
        description: "Advanced analytics and conversion optimization to ensure every dollar counts.",
    },
    Service {
        icon: "📈",
        title: "Scaling Strategies",
        description: "Data-driven approaches to scale winning campaigns for massive returns.",
    },
];

/// Extra visual attached to a process step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepVisual {
    None,
    GrowthChart,
    RoiBadge,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub visual: StepVisual,
}

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "We analyze your business & craft high-converting ads",
        description: "Our team dives deep into your business, audience, and competitors to create ads that resonate and convert.",
        visual: StepVisual::None,
    },
    Step {
        number: "02",
        title: "We A/B test and optimize in real-time",
        description: "Continuous testing and optimization ensure your campaigns perform at their peak efficiency.",
        visual: StepVisual::GrowthChart,
    },
    Step {
        number: "03",
        title: "We scale winning campaigns for massive ROI",
        description: "Once we identify winning strategies, we scale them strategically to maximize your return on investment.",
        visual: StepVisual::RoiBadge,
    },
];

/// Headline figure animated under a testimonial.
pub struct Stat {
    pub value: i64,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
    pub stat: Stat,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        company: "TechStart Inc.",
        quote: "The team delivered a 350% ROAS on our campaigns. They're truly performance-focused and data-driven.",
        image: "/assets/avatar.jpg",
        stat: Stat { value: 350, label: "increase in ROAS", gradient: "gradient-blue" },
    },
    Testimonial {
        name: "Michael Chen",
        company: "Retail Solutions",
        quote: "Our lead generation increased by 240% within just 3 months of working with this amazing team.",
        image: "/assets/avatar.jpg",
        stat: Stat { value: 240, label: "more leads generated", gradient: "gradient-orange" },
    },
    Testimonial {
        name: "Emma Williams",
        company: "SaaS Platform",
        quote: "They transformed our Google Ads strategy, resulting in an 85% increase in conversion rate.",
        image: "/assets/avatar.jpg",
        stat: Stat { value: 85, label: "conversion rate increase", gradient: "gradient-green" },
    },
];

pub struct AdPreview {
    pub platform: &'static str,
    pub logo: &'static str,
    pub preview: &'static str,
    pub glow: &'static str,
}

pub const AD_PREVIEWS: &[AdPreview] = &[
    AdPreview {
        platform: "Meta",
        logo: "/assets/meta.png",
        preview: "/assets/meta_ads.jpeg",
        glow: "rgba(59, 130, 246, 0.3)",
    },
    AdPreview {
        platform: "Google",
        logo: "/assets/google.png",
        preview: "/assets/googleads.jpeg",
        glow: "rgba(234, 88, 12, 0.3)",
    },
];

pub const GROWTH_BARS: usize = 12;

/// Bar height in percent for the optimisation chart: a rising trend with
/// a gentle wobble.
pub fn growth_bar_height(i: usize) -> f64 {
    let i = i as f64;
    20.0 + (i * 0.8).sin() * 10.0 + i * 2.5
}

/// The last few bars are drawn brighter.
pub fn growth_bar_opacity(i: usize) -> f64 {
    if i > 8 {
        0.9
    } else {
        0.7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_fit_the_chart() {
        for i in 0..GROWTH_BARS {
            let h = growth_bar_height(i);
            assert!(h > 0.0 && h <= 100.0, "bar {} is {}%", i, h);
        }
        assert!((growth_bar_height(0) - 20.0).abs() < 1e-9);
        assert!(growth_bar_height(GROWTH_BARS - 1) > growth_bar_height(0));
    }

    #[test]
    fn test_bar_opacity() {
        assert_eq!(growth_bar_opacity(8), 0.7);
        assert_eq!(growth_bar_opacity(9), 0.9);
    }

    #[test]
    fn test_stats_match_quotes() {
        for t in TESTIMONIALS {
            assert!(t.quote.contains(&format!("{}%", t.stat.value)), "{}", t.name);
        }
    }

    #[test]
    fn test_steps_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }
}
