//! Static copy for the landing page sections.

pub const BRAND: &str = "Codeteria";

pub const NAV_TABS: [&str; 6] = [
    "Playground",
    "Challenges",
    "DS Problems",
    "Quiz",
    "Community",
    "Pro",
];

pub const HERO_TITLE: &str = "Code, Challenge, Conquer";
pub const HERO_TAGLINE: &str = "Embark on an epic coding adventure with Codeteria";

pub const PLAYGROUND_TITLE: &str = "Interactive Code Playground";
pub const PLAYGROUND_SUBTITLE: &str = "Experience real-time coding with instant feedback";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "</>",
        title: "Adaptive Challenges",
        description: "AI-powered coding challenges that evolve with your skills",
    },
    Feature {
        icon: "[=]",
        title: "Interactive Tutorials",
        description: "Learn by doing with our hands-on, step-by-step guides",
    },
    Feature {
        icon: "(@)",
        title: "Global Leaderboards",
        description: "Compete with coders worldwide and climb the ranks",
    },
    Feature {
        icon: "/!/",
        title: "Real-time Collaboration",
        description: "Pair program and solve problems with peers in real-time",
    },
];

pub const CTA_TITLE: &str = "Join the Codeteria Revolution";
pub const CTA_BODY: &str =
    "Unleash your coding potential and become part of a thriving global community";
pub const CTA_BUTTONS: [&str; 2] = ["Start Your Coding Journey", "Quiz"];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS_TITLE: &str = "What Our Coders Say";

pub const TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        name: "Alex",
        role: "Full Stack Developer",
        quote: "Codeteria's challenges pushed me to new heights. I landed my dream job thanks to the skills I honed here!",
    },
    Testimonial {
        name: "Samantha",
        role: "AI Enthusiast",
        quote: "The AI-powered adaptive learning on Codeteria is mind-blowing. It's like having a personal coding mentor 24/7.",
    },
    Testimonial {
        name: "Raj",
        role: "Student",
        quote: "I went from coding newbie to hackathon winner in just 6 months. Codeteria's community is incredibly supportive!",
    },
    Testimonial {
        name: "Anika",
        role: "Software Engineer",
        quote: "Codeteria's challenges helped me level up my skills and land my dream job. The platform is a game-changer!",
    },
    Testimonial {
        name: "Vikram",
        role: "Data Scientist",
        quote: "The AI-powered challenges on Codeteria sharpened my problem-solving skills, making me confident in handling real-world data projects.",
    },
    Testimonial {
        name: "Sanya",
        role: "Web Developer",
        quote: "Thanks to Codeteria, I was able to build a portfolio that got me noticed by top companies. It's the perfect platform for learning!",
    },
    Testimonial {
        name: "Amit",
        role: "UI/UX Designer",
        quote: "The collaborative tools and design challenges on Codeteria pushed my creativity to new heights. Highly recommended!",
    },
    Testimonial {
        name: "Neha",
        role: "Product Manager",
        quote: "I improved my technical understanding and communication skills, which has been crucial in managing product development teams.",
    },
];

pub const NEWSLETTER_TITLE: &str = "Subscribe to Our Newsletter";
pub const NEWSLETTER_BODY: &str =
    "Get the latest coding challenges, tutorials, and updates delivered to your inbox!";
pub const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";

pub const CONTACT_TITLE: &str = "Get in Touch";
pub const CONTACT_BODY: &str = "Questions, partnerships or feedback: hello@codeteria.dev";

pub const FOOTER: &str = "© Codeteria. All rights reserved.";
