//! Display content for every page. All of it is fixed at build time.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
    pub project: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    /// Short name shown by the team headline.
    pub caption: &'static str,
    pub portrait: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub tools: &'static [&'static str],
    pub example: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Project {
    pub name: &'static str,
    pub tagline: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub result: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub image: &'static str,
}

impl Project {
    pub fn description(&self) -> String {
        format!("{} {} {}", self.problem, self.solution, self.result)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TechCategory {
    pub label: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CompanyValue {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Resolves a technology's logo by naming convention.
pub fn tech_icon(name: &str) -> String {
    format!("/icons/{}.svg", urlencoding::encode(name))
}

/// Two digit, 1-based card label.
pub fn card_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub const INDUSTRIES: &[&str] = &["Machine Learning", "AI Agents", "E-commerce", "SaaS", "Education"];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sachin Pawar",
        role: "Founder, Ajinkya Social Foundation",
        company: "Ajinkya Social Foundation",
        quote: "Nirmaan delivered our non-profit organisation website ahead of schedule and under budget. Their attention to design, UI and compliance was exceptional.",
        rating: 5,
        project: "Ajinkya Social Foundation (ajinkyasocialfoundation.org)",
    },
    Testimonial {
        name: "Anonymous",
        role: "Design Department Head, Zenova",
        company: "Zenova",
        quote: "The animations and User Interface they developed was just what I needed. Highly recommended for your projects.",
        rating: 5,
        project: "Zenova (zenova-nine.vercel.app)",
    },
    Testimonial {
        name: "Saurabh Gawade",
        role: "Founder, Shreya E-Motors App",
        company: "Shreya E-Motors",
        quote: "Our logistics improved significantly since we started using the app. The team was professional, responsive, and truly understood our business.",
        rating: 5,
        project: "Shreya E-Motors App",
    },
    Testimonial {
        name: "Tuba",
        role: "Marketing Department, WeConnect Overseas",
        company: "WeConnect Overseas",
        quote: "Our website attracted more students and worked as a means to gain trust. The team performed well and really improved the experience.",
        rating: 5,
        project: "WeConnect Overseas (weconnectoverseas.info)",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Kashyap Mavani",
        role: "Founder & CEO",
        expertise: "Full-Stack Architecture",
        caption: "Kashyap",
        portrait: "/profiles/img1.png",
    },
    TeamMember {
        name: "Disha Raskar",
        role: "CTO",
        expertise: "Cloud & DevOps",
        caption: "Disha",
        portrait: "/profiles/img2.png",
    },
    TeamMember {
        name: "Shubhankar Patil",
        role: "Lead Frontend",
        expertise: "React & UX",
        caption: "Shubhankar",
        portrait: "/profiles/img3.png",
    },
    TeamMember {
        name: "Meet Mavani",
        role: "Lead Backend",
        expertise: "Node.js & Python",
        caption: "Meet",
        portrait: "/profiles/img4.png",
    },
];

pub const TEAM_CAPTION: &str = "The Squad";

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Web Development",
        icon: "</>",
        summary: "Build powerful, responsive web applications that scale with your business",
        tools: &["React", "Next.js", "Vue", "TypeScript", "Tailwind CSS"],
        example: "Built a real-time collaboration platform serving 50K+ users with 99.9% uptime",
        accent: "#10b981",
    },
    ServiceOffering {
        title: "Mobile Development",
        icon: "📱",
        summary: "Native and cross-platform mobile apps for iOS and Android",
        tools: &["React Native", "Flutter", "Swift", "Kotlin"],
        example: "Delivered a fintech app with biometric authentication and offline capabilities",
        accent: "#3b82f6",
    },
    ServiceOffering {
        title: "Cloud Solutions",
        icon: "☁️",
        summary: "Scalable cloud infrastructure and migration services",
        tools: &["AWS", "GCP", "Azure", "Docker", "Kubernetes"],
        example: "Migrated legacy monolith to microservices, reducing costs by 40%",
        accent: "#8b5cf6",
    },
    ServiceOffering {
        title: "Backend Development",
        icon: "🗄️",
        summary: "Robust APIs and server-side logic for complex business requirements",
        tools: &["Node.js", "Python", "PostgreSQL", "MongoDB", "Redis"],
        example: "Created high-performance API handling 10M+ requests daily",
        accent: "#f59e0b",
    },
    ServiceOffering {
        title: "AI Integration",
        icon: "🧠",
        summary: "Integrate AI/ML capabilities into your applications",
        tools: &["TensorFlow", "PyTorch", "OpenAI", "Langchain"],
        example: "Implemented AI chatbot reducing customer support tickets by 60%",
        accent: "#ec4899",
    },
    ServiceOffering {
        title: "UI/UX Design",
        icon: "🎨",
        summary: "Beautiful, intuitive interfaces that users love",
        tools: &["Figma", "Adobe XD", "Framer", "Design Systems"],
        example: "Redesigned e-commerce platform, increasing conversions by 35%",
        accent: "#06b6d4",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Shreya Motors App",
        tagline: "Electric vehicle management platform",
        problem: "Application required to manage electric vehicles and their rental assignments.",
        solution: "Built a comprehensive application with real time location updates, batteries and charging management.",
        result: "80% improvement in logistics, 50% improved charging and battery management, new implementation of database.",
        tech: &["Bubble"],
        live_url: None,
        source_url: None,
        image: "/sticky-cards/card_1.jpg",
    },
    Project {
        name: "Ajinkya Social Foundation",
        tagline: "Non-Profit Organization website",
        problem: "Required website to improve reach and simplify donation process.",
        solution: "Developed a dynamic website having integrated payment gateway along with CMS and CRUD functionalities.",
        result: "Information about the NGO became accessible, improved donation frequency by 70%, simplified donation process significantly.",
        tech: &["Next.js", "Python", "TensorFlow", "PostgreSQL", "Redis"],
        live_url: Some("https://ajinkyasocialfoundation.org"),
        source_url: None,
        image: "/sticky-cards/card_2.jpg",
    },
    Project {
        name: "Zenova",
        tagline: "GSAP Showcase",
        problem: "Needed a showcase for the animation abilities of the team.",
        solution: "Created a scroll controlled website with smooth animations and responsive UI.",
        result: "Displayed animation skills of the team.",
        tech: &["Next.js", "Tailwind CSS", "Motion"],
        live_url: Some("https://zenova-nine.vercel.app"),
        source_url: None,
        image: "/sticky-cards/card_3.jpg",
    },
    Project {
        name: "WeConnect Overseas",
        tagline: "Educational support platform",
        problem: "WeConnect Overseas needed a complete overhaul of their homepage.",
        solution: "Built a modern, elegant and catchy homepage with smooth minimalist animations and pleasing UI.",
        result: "Improvement in establishing trust in students.",
        tech: &["React", "Tailwind CSS"],
        live_url: Some("https://weconnectoverseas.info"),
        source_url: None,
        image: "/sticky-cards/card_4.jpg",
    },
];

/// Logos for the home page marquee, in display order.
pub const TECH_TAGS: &[&str] = &[
    "React",
    "Next.js",
    "TypeScript",
    "Tailwind CSS",
    "Motion",
    "Node.js",
    "Python",
    "Django",
    "Flask",
    "Express",
    "React Native",
    "Flutter",
    "Bubble",
    "AWS",
    "Google Cloud",
    "Kubernetes",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "MySQL",
    "PyTorch",
    "OpenCV",
    "GitHub",
];

pub const TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        label: "Frontend",
        items: &[
            ("React", "⚛️"),
            ("Next.js", "▲"),
            ("Vue", "💚"),
            ("TypeScript", "📘"),
            ("Tailwind CSS", "🎨"),
            ("Framer Motion", "🎬"),
        ],
    },
    TechCategory {
        label: "Backend",
        items: &[
            ("Node.js", "🟢"),
            ("Python", "🐍"),
            ("Django", "🎸"),
            ("Flask", "🌶️"),
            ("Express", "🚂"),
            ("GraphQL", "◼️"),
        ],
    },
    TechCategory {
        label: "Mobile",
        items: &[("React Native", "📱"), ("Flutter", "🦋"), ("Swift", "🍎"), ("Kotlin", "🤖")],
    },
    TechCategory {
        label: "Cloud",
        items: &[
            ("AWS", "☁️"),
            ("Google Cloud", "🌐"),
            ("Azure", "🔷"),
            ("Docker", "🐳"),
            ("Kubernetes", "☸️"),
            ("Terraform", "🏗️"),
        ],
    },
    TechCategory {
        label: "Database",
        items: &[
            ("PostgreSQL", "🐘"),
            ("MongoDB", "🍃"),
            ("Redis", "🔴"),
            ("MySQL", "🐬"),
            ("Elasticsearch", "🔍"),
        ],
    },
    TechCategory {
        label: "AI / ML",
        items: &[
            ("TensorFlow", "🧠"),
            ("PyTorch", "🔥"),
            ("OpenCV", "👁️"),
            ("OpenAI", "🤖"),
            ("Langchain", "⛓️"),
        ],
    },
    TechCategory {
        label: "DevOps",
        items: &[
            ("GitHub Actions", "⚙️"),
            ("Jenkins", "👨‍🔧"),
            ("GitLab CI", "🦊"),
            ("CircleCI", "⭕"),
            ("Nginx", "🌐"),
            ("Prometheus", "📊"),
        ],
    },
];

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Quality First",
        icon: "🎯",
        description: "We never compromise on code quality, testing, or security standards.",
    },
    CompanyValue {
        title: "Innovation",
        icon: "⚡",
        description: "Staying ahead with the latest technologies and best practices.",
    },
    CompanyValue {
        title: "Client Focus",
        icon: "❤️",
        description: "Your success is our success. We build lasting partnerships.",
    },
    CompanyValue {
        title: "Transparency",
        icon: "🛡️",
        description: "Clear communication, honest timelines, and no hidden surprises.",
    },
];

pub const PHILOSOPHY: &[(&str, &str)] = &[
    ("Clean Code", "We write code that's maintainable, testable, and well-documented. Your codebase should be an asset, not a liability."),
    ("Scalability", "We build systems that grow with your business. From day one, we architect solutions with scale in mind."),
    ("Cloud-Native", "Leveraging modern cloud platforms (AWS, GCP, Azure) to deliver reliable, cost-effective solutions."),
    ("Security First", "Security isn't an afterthought. We follow industry best practices and conduct regular security audits."),
];

pub const STATS: &[Stat] = &[
    Stat { value: "150+", label: "Happy Clients" },
    Stat { value: "200+", label: "Projects Delivered" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "10+", label: "Years Experience" },
];

/// Everyone we have shipped for, derived from the testimonials.
pub fn client_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for testimonial in TESTIMONIALS {
        if !names.contains(&testimonial.company) {
            names.push(testimonial.company);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_one_to_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn icon_paths_are_url_encoded() {
        assert_eq!(tech_icon("React"), "/icons/React.svg");
        assert_eq!(tech_icon("Tailwind CSS"), "/icons/Tailwind%20CSS.svg");
        assert_eq!(tech_icon("Next.js"), "/icons/Next.js.svg");
    }

    #[test]
    fn card_indices_are_two_digit_and_one_based() {
        assert_eq!(card_index(0), "01");
        assert_eq!(card_index(9), "10");
    }

    #[test]
    fn team_has_a_caption_per_member() {
        assert!(TEAM.iter().all(|m| !m.caption.is_empty() && m.name.starts_with(m.caption)));
    }

    #[test]
    fn client_names_are_unique() {
        let names = client_names();
        assert_eq!(names.len(), TESTIMONIALS.len());
        assert_eq!(names[0], "Ajinkya Social Foundation");
    }

    #[test]
    fn project_description_joins_the_case_study() {
        let zenova = &PROJECTS[2];
        let text = zenova.description();
        assert!(text.starts_with(zenova.problem));
        assert!(text.ends_with(zenova.result));
    }
}
