pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

pub const MEMBERS: &[Member] = &[
    Member {
        name: "Sukash",
        role: "Founder & CEO",
        quote: "Leading the vision, empowering the team, and building a future where design meets purpose.",
        image: "/assets/member5.jpg",
    },
    Member {
        name: "Parameswaran E",
        role: "Developer / CTO",
        quote: "Architecting robust solutions and pushing the boundaries of technology to create seamless experiences.",
        image: "/assets/member6.jpg",
    },
    Member {
        name: "Swasthik",
        role: "Developer / CFO",
        quote: "Balancing innovation with financial strategy to ensure sustainable growth and a strong technical foundation.",
        image: "/assets/member3.jpg",
    },
    Member {
        name: "Surrendar Prakash",
        role: "Graphic Designer",
        quote: "Transforming concepts into compelling visuals that resonate with our audience and define our brand identity.",
        image: "/assets/member4.jpg",
    },
    Member {
        name: "Hrithik S",
        role: "Operations",
        quote: "Streamlining processes and ensuring smooth daily operations to deliver exceptional service and efficiency.",
        image: "/assets/member2.jpg",
    },
    Member {
        name: "Anbu Selvan",
        role: "Store Manager",
        quote: "Creating an inviting atmosphere and ensuring a seamless experience for every customer who walks through our doors.",
        image: "/assets/member1.jpg",
    },
];

pub const DNA: &[(&str, &str)] = &[
    (
        "Think Different",
        "We question everything, challenge norms, and create solutions that don't exist yet.",
    ),
    (
        "Move Fast",
        "Speed is our superpower. We iterate, learn, and ship at the speed of thought.",
    ),
    (
        "Stay Human",
        "Technology serves people, not the other way around. We build with empathy.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder_leads_the_roster() {
        assert_eq!(MEMBERS.len(), 6);
        assert_eq!(MEMBERS[0].role, "Founder & CEO");
    }

    #[test]
    fn test_member_images_are_distinct() {
        for (i, a) in MEMBERS.iter().enumerate() {
            for b in &MEMBERS[i + 1..] {
                assert_ne!(a.image, b.image, "{} and {}", a.name, b.name);
            }
        }
    }
}
