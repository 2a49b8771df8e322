use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty logs while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub struct Social {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub twitter: &'static str,
}

pub struct Company {
    pub name: &'static str,
    pub logo: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub social: Social,
}

pub const COMPANY: Company = Company {
    name: "Nirmaan",
    logo: "/assets/NirmaanLogo-BgRemoved.png",
    tagline: "Building Tomorrow's Software Today",
    email: "nirmaan.devv@gmail.com",
    phone: "+91 9850015522",
    location: "Pune, Maharashtra",
    social: Social {
        linkedin: "https://linkedin.com/company/nirmaan",
        github: "https://github.com/nirmaan",
        twitter: "https://twitter.com/nirmaan",
    },
};

/// Theme colours, exposed to the stylesheet as CSS custom properties.
pub mod theme {
    pub const PRIMARY_LIGHT: &str = "#E8F5E9";
    pub const PRIMARY: &str = "#4CAF50";
    pub const PRIMARY_DARK: &str = "#1B5E20";
    pub const ACCENT: &str = "#81C784";
    pub const TEXT_SECONDARY: &str = "#2E7D32";
    pub const FONT: &str = "Inter, system-ui, sans-serif";
    pub const DISPLAY_FONT: &str = "'Barlow Condensed', sans-serif";
    /// GSAP's power4.out expressed as a CSS curve.
    pub const EASE_POWER4_OUT: &str = "cubic-bezier(0.23, 1, 0.32, 1)";

    pub fn css_variables() -> String {
        format!(
            ":root {{ --primary-light: {}; --primary: {}; --primary-dark: {}; --accent: {}; --text-secondary: {}; --font: {}; --display-font: {}; --ease-out: {}; }}",
            PRIMARY_LIGHT, PRIMARY, PRIMARY_DARK, ACCENT, TEXT_SECONDARY, FONT, DISPLAY_FONT, EASE_POWER4_OUT
        )
    }
}

pub mod breakpoints {
    /// Below this width the team widget switches to tap mode.
    pub const TEAM_MOBILE: f64 = 900.0;
    /// Project cards stack vertically below this width.
    pub const CARDS_MOBILE: f64 = 900.0;
    /// Tech tooltips only show at or above this width.
    pub const TOOLTIP_MIN: f64 = 768.0;
    pub const NAV_SCROLLED_AT: f64 = 50.0;
}

pub mod motion {
    pub const REVEAL_LETTER_SECS: f64 = 0.75;
    pub const REVEAL_STAGGER_SECS: f64 = 0.025;
    pub const AVATAR_SECS: f64 = 0.5;
    pub const AVATAR_REST_PX: f64 = 150.0;
    pub const AVATAR_ACTIVE_PX: f64 = 240.0;

    pub const MARQUEE_ITEMS_PER_ROW: usize = 6;
    pub const MARQUEE_COPIES: usize = 3;
    pub const MARQUEE_LOOP_SECS: f64 = 40.0;
    pub const MARQUEE_BOOST: f64 = 2.0;
    pub const MARQUEE_RELAX_SECS: f64 = 0.4;

    pub const CARD_SCALE_DROP: f64 = 0.25;
    pub const CARD_SCALE_FLOOR: f64 = 0.75;
    pub const CARD_ROTATION_DEG: f64 = 5.0;

    pub const PARTICLE_COUNT: usize = 2000;
    pub const PARTICLE_SPREAD: f64 = 10.0;

    pub const ENTRANCE_MARGIN_PX: f64 = 100.0;
    pub const ENTRANCE_STEP_MS: u32 = 100;

    pub const NOTICE_MS: u32 = 5_000;
}
