use dioxus::prelude::*;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Page chrome. Element ids here are the ones the page behaviors look up.
#[component(no_case_check)]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            header {
                class: "absolute top-0 left-0 z-10 flex w-full items-center bg-transparent transition-colors duration-200",
                div {
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    a {
                        href: "#home",
                        class: "text-lg font-bold text-primary",
                        "portfolio"
                    }
                    div {
                        class: "flex items-center space-x-4",
                        button {
                            id: "hamburger",
                            r#type: "button",
                            class: "block lg:hidden",
                            aria_label: "Toggle navigation",
                            aria_controls: "nav-menu",
                            aria_expanded: "false",
                            span { class: "hamburger-line origin-top-left" }
                            span { class: "hamburger-line" }
                            span { class: "hamburger-line origin-bottom-left" }
                        }
                        nav {
                            id: "nav-menu",
                            class: "hidden absolute right-4 top-full w-full max-w-[250px] rounded-lg bg-white py-5 shadow-lg dark:bg-dark-primary lg:static lg:block lg:max-w-full lg:bg-transparent lg:shadow-none",
                            ul {
                                class: "block lg:flex",
                                for (href, label) in NAV_LINKS {
                                    li {
                                        class: "group",
                                        a {
                                            href: href,
                                            class: "mx-8 flex py-2 text-base text-gray-800 group-hover:text-primary dark:text-white",
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            id: "theme-toggle",
                            r#type: "button",
                            class: "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 transition-colors",
                            aria_label: "Toggle dark mode",
                            svg {
                                id: "theme-toggle-dark-icon",
                                class: "hidden w-5 h-5",
                                view_box: "0 0 20 20",
                                fill: "currentColor",
                                path { d: "M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z" }
                            }
                            svg {
                                id: "theme-toggle-light-icon",
                                class: "hidden w-5 h-5",
                                view_box: "0 0 20 20",
                                fill: "currentColor",
                                path { d: "M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0z" }
                            }
                        }
                    }
                }
            }

            Outlet::<Route> {}

            a {
                id: "to-top",
                href: "#home",
                class: "hidden fixed bottom-4 right-4 z-[9999] h-14 w-14 items-center justify-center rounded-full bg-primary p-4 hover:animate-pulse",
                aria_label: "Back to top",
                span { class: "mt-2 block h-5 w-5 rotate-45 border-t-2 border-l-2" }
            }
        }
    }
}
