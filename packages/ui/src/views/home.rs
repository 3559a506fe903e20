use dioxus::prelude::*;

use crate::{use_auth, Destination, NavLink};

/// Landing page.
#[component]
pub fn HomeView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let signed_in = auth.read().is_authenticated();

    rsx! {
        div {
            class: "home",
            section {
                class: "home__hero",
                div {
                    class: "home__hero-content",
                    span { class: "home__eyebrow", "Celebrations made simple" }
                    h1 {
                        "Stay ahead of every"
                        span { " special moment" }
                    }
                    p {
                        "Seembe helps you keep track of the people you love, plan thoughtful gestures, "
                        "and send timely reminders so you never miss a celebration again."
                    }
                    div {
                        class: "home__cta",
                        if signed_in {
                            NavLink { to: Destination::Dashboard, on_navigate: on_navigate, class: "home__button primary", "Go to dashboard" }
                        } else {
                            NavLink { to: Destination::Register, on_navigate: on_navigate, class: "home__button primary", "Get started free" }
                            NavLink { to: Destination::Login, on_navigate: on_navigate, class: "home__button ghost", "I already have an account" }
                        }
                    }
                }
                div {
                    class: "home__hero-card",
                    for (title, body) in HIGHLIGHTS {
                        div {
                            class: "home__stats",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
            section {
                class: "home__features",
                h2 { "Everything you need to celebrate thoughtfully" }
                div {
                    class: "home__feature-grid",
                    for (title, body) in FEATURES {
                        article {
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Automated reminders", "Customize how and when you want to be notified for each event."),
    ("Personal profiles", "Store favourite gifts, notes, and past celebrations in one place."),
    ("Smart planning", "Create checklists and message templates to celebrate with ease."),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Organize your celebrants",
        "Build detailed profiles for family, friends, and clients including relationship notes, favourite things, and key milestones.",
    ),
    (
        "Plan memorable events",
        "Schedule birthdays, anniversaries, or cultural moments and track preparation tasks from one intuitive dashboard.",
    ),
    (
        "Stay connected",
        "Use messaging templates and reminders to send warm wishes exactly when they matter most.",
    ),
];
