//! Sign-in and sign-up pages.
//!
//! Both hand off to the identity provider; the pages only frame the link.

use askama::Template;
use axum::extract::State;

use crate::state::AppState;

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub title: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub action_label: &'static str,
    pub provider_url: String,
    pub alternate_prompt: &'static str,
    pub alternate_label: &'static str,
    pub alternate_href: &'static str,
}

pub async fn sign_in_page(State(state): State<AppState>) -> AuthTemplate {
    AuthTemplate {
        title: "Sign in",
        heading: "Welcome back",
        subheading: "Sign in to keep learning with EduDiff Lite.",
        action_label: "Continue to sign in",
        provider_url: state.auth.sign_in_url.clone(),
        alternate_prompt: "New here?",
        alternate_label: "Create an account",
        alternate_href: "/sign-up",
    }
}

pub async fn sign_up_page(State(state): State<AppState>) -> AuthTemplate {
    AuthTemplate {
        title: "Sign up",
        heading: "Create your account",
        subheading: "Turn any question into a visual lesson.",
        action_label: "Continue to sign up",
        provider_url: state.auth.sign_up_url.clone(),
        alternate_prompt: "Already have an account?",
        alternate_label: "Sign in",
        alternate_href: "/sign-in",
    }
}
