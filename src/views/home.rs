use dioxus::prelude::*;

const PROJECTS: [(&str, &str); 3] = [
    ("Dashboard", "0"),
    ("Design System", "100"),
    ("Landing Kit", "200"),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            id: "home",
            class: "container mx-auto px-4 pt-36",
            h1 {
                class: "text-2xl font-bold mb-4",
                "data-aos": "fade-down",
                "Hi, I'm "
                span { id: "typed", class: "text-primary" }
            }
            p {
                class: "text-gray-600 dark:text-gray-300",
                "data-aos": "fade-up",
                "data-aos-delay": "200",
                "I build fast, accessible interfaces for the web."
            }
        }
        section {
            id: "about",
            class: "container mx-auto px-4 py-24",
            h2 { class: "text-xl font-semibold mb-2", "data-aos": "fade-right", "About" }
            p {
                class: "text-gray-600 dark:text-gray-300",
                "data-aos": "fade-left",
                "Frontend work, design systems and the occasional side project."
            }
        }
        section {
            id: "projects",
            class: "container mx-auto px-4 py-24",
            h2 { class: "text-xl font-semibold mb-2", "data-aos": "fade-up", "Projects" }
            div {
                class: "grid gap-6 md:grid-cols-3",
                for (name, delay) in PROJECTS {
                    div {
                        key: "{name}",
                        class: "rounded-lg p-6 shadow",
                        "data-aos": "zoom-in",
                        "data-aos-delay": delay,
                        "{name}"
                    }
                }
            }
        }
        section {
            id: "contact",
            class: "container mx-auto px-4 py-24",
            h2 { class: "text-xl font-semibold mb-2", "data-aos": "fade-up", "Contact" }
            p { class: "text-gray-600 dark:text-gray-300", "Say hello." }
        }
    }
}
