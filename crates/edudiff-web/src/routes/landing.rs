//! Marketing pages.

use askama::Template;
use axum::extract::State;
use axum::Json;
use generation_client::DemoVideo;

use crate::state::AppState;

/// A numbered step of the "How it works" section.
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A tile of the feature grid.
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS modifier for the tile accent color.
    pub accent: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "1. Ask a Question",
        description: "Type any question you have, from 'How does photosynthesis work?' to complex calculus problems.",
    },
    Step {
        title: "2. AI Generates Explanation",
        description: "Our AI instantly analyzes your query and creates a custom explanation with text, voice, and visuals.",
    },
    Step {
        title: "3. Learn Faster",
        description: "Absorb the information quickly through our multi-modal format and retain it better.",
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Clear Explanations",
        description: "Get structured, easy-to-understand text answers generated instantly by AI.",
        accent: "blue",
    },
    Feature {
        title: "Voice Narration",
        description: "Listen to natural-sounding audio explanations, just like a real tutor.",
        accent: "purple",
    },
    Feature {
        title: "Visual Micro-GIFs",
        description: "Understand complex concepts with automatically generated 3-second animations.",
        accent: "pink",
    },
    Feature {
        title: "Instant Results",
        description: "No long video rendering. Get your micro-lessons in seconds.",
        accent: "amber",
    },
];

/// Landing page template.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub demos: Vec<DemoVideo>,
    pub steps: &'static [Step],
    pub features: &'static [Feature],
}

/// Render the landing page.
///
/// Demos are fetched while rendering; an unreachable backend just shows the
/// placeholder.
pub async fn landing_page(State(state): State<AppState>) -> LandingTemplate {
    LandingTemplate {
        demos: state.backend.get_demos().await,
        steps: &STEPS,
        features: &FEATURES,
    }
}

/// Demo gallery as JSON. Never an error.
pub async fn demos_api(State(state): State<AppState>) -> Json<Vec<DemoVideo>> {
    Json(state.backend.get_demos().await)
}
