// src/checks/mod.rs
// Declarative table of UI checks: route -> expected content.
// Every probe expects HTTP 200; `requires` lists substrings that must
// appear in the raw response body.

/// One GET request within a check.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub path: &'static str,
    pub requires: &'static [&'static str],
}

/// A named check. A check passes only if every step passes.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    /// Human-readable line printed when the check passes.
    pub label: &'static str,
    pub steps: &'static [Step],
}

/// The fixed check sequence. Order is stable so output is reproducible
/// run to run; the checks themselves are independent.
pub const CHECKS: &[Check] = &[
    Check {
        name: "landing_page",
        label: "Landing page loads with particles and typed text elements",
        steps: &[Step {
            path: "/",
            requires: &["OpenAlgo", "particles-js", "typed-text"],
        }],
    },
    Check {
        name: "theme_toggle",
        label: "Theme toggle script loads",
        steps: &[Step {
            path: "/static/js/theme.js",
            requires: &[],
        }],
    },
    Check {
        name: "animation_scripts",
        label: "All animation scripts load",
        steps: &[
            Step {
                path: "/static/js/particles-config.js",
                requires: &[],
            },
            Step {
                path: "/static/js/advanced-animations.js",
                requires: &[],
            },
            Step {
                path: "/static/js/trading-effects.js",
                requires: &[],
            },
        ],
    },
    Check {
        name: "navigation_links",
        label: "Navigation links work",
        steps: &[
            Step {
                path: "/faq",
                requires: &["FAQ"],
            },
            Step {
                path: "/download",
                requires: &["Download"],
            },
        ],
    },
    Check {
        name: "css_styles",
        label: "CSS styles load with component classes",
        steps: &[Step {
            path: "/static/css/main.css",
            requires: &["btn-primary", "card"],
        }],
    },
    Check {
        name: "external_links",
        label: "External links are present on the landing page",
        steps: &[Step {
            path: "/",
            requires: &[
                "github.com/marketcalls/openalgo",
                "discord.com",
                "docs.openalgo.in",
            ],
        }],
    },
];
