use crate::favorites;
use crate::theme::theme_definition;
use crate::types::{Exam, FilterState, ThemeMode, User};
use crate::views::shared::avatar_initial;
use crate::views::{
    AboutView, BrowseView, ExamDetailModal, HomeView, LoginView, SignupView, TutorView, UploadView,
};
use dioxus::prelude::*;
use std::collections::HashSet;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Browse,
    Tutor,
    About,
    Upload,
    Login,
    Signup,
}

#[component]
pub fn App() -> Element {
    let view = use_signal(|| AppView::Home);
    let user = use_signal(|| Option::<User>::None);
    // Loaded once at startup; rewritten whole on every toggle.
    let favorites = use_signal(favorites::load_favorites);
    let filters = use_signal(FilterState::default);
    let selected_exam = use_signal(|| Option::<Exam>::None);
    let theme = use_signal(|| ThemeMode::Light);

    let body = match view() {
        AppView::Login => rsx! { LoginView { view, user } },
        AppView::Signup => rsx! { SignupView { view, user } },
        other => {
            let content = match other {
                AppView::Home => rsx! { HomeView { view } },
                AppView::Browse => rsx! { BrowseView { filters, favorites, selected_exam } },
                AppView::Tutor => rsx! { TutorView {} },
                AppView::Upload => rsx! { UploadView {} },
                _ => rsx! { AboutView {} },
            };
            rsx! {
                AppHeader { view, user, theme }
                main { {content} }
                AppFooter {}
                if let Some(exam) = selected_exam() {
                    ExamDetailModal { exam, selected_exam }
                }
            }
        }
    };

    rsx! {
        ThemeStyles { theme }
        {body}
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(
    view: Signal<AppView>,
    user: Signal<Option<User>>,
    theme: Signal<ThemeMode>,
) -> Element {
    let mut view = view;
    let mut user = user;
    let mut theme = theme;
    let mut menu_open = use_signal(|| false);
    let current_user = user();

    rsx! {
        header { class: "header",
            div { class: "header-content",
                div {
                    class: "header-brand",
                    onclick: move |_| view.set(AppView::Home),
                    h1 { "Exame" span { class: "accent-green", "STP" } }
                    p { class: "header-tagline", "REPOSITÓRIO EDUCATIVO" }
                }

                nav { class: format_args!("header-nav {}", if menu_open() { "open" } else { "" }),
                    NavButton { view, target: AppView::Home, label: "Início" }
                    NavButton { view, target: AppView::Browse, label: "Exames" }
                    NavButton { view, target: AppView::Tutor, label: "Tutor IA" }
                    NavButton { view, target: AppView::About, label: "Sobre" }
                }

                div { class: "header-actions",
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        title: "Alternar tema",
                        onclick: move |_| {
                            let next = match theme() {
                                ThemeMode::Light => ThemeMode::Dark,
                                ThemeMode::Dark => ThemeMode::Light,
                            };
                            theme.set(next);
                        },
                        if matches!(theme(), ThemeMode::Light) { "☾" } else { "☀" }
                    }

                    if let Some(current) = current_user {
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| view.set(AppView::Upload),
                            "Contribuir"
                        }
                        div { class: "user-chip",
                            div { class: "user-chip-meta",
                                p { class: "user-chip-name", "{current.name}" }
                                p { class: "user-chip-role text-muted", "{current.role.label()}" }
                            }
                            div { class: "user-avatar",
                                if let Some(avatar) = current.avatar.as_ref() {
                                    img { src: "{avatar}", alt: "{current.name}" }
                                } else {
                                    span { "{avatar_initial(&current.name)}" }
                                }
                            }
                        }
                        button {
                            class: "link-button",
                            r#type: "button",
                            title: "Terminar sessão",
                            onclick: move |_| {
                                user.set(None);
                                view.set(AppView::Home);
                            },
                            "Sair"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| view.set(AppView::Login),
                            "Entrar"
                        }
                    }

                    button {
                        class: "menu-toggle",
                        r#type: "button",
                        aria_label: "Abrir menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "☰"
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(view: Signal<AppView>, target: AppView, label: &'static str) -> Element {
    let mut view = view;
    let class = if view() == target {
        "nav-link active"
    } else {
        "nav-link"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| view.set(target),
            "{label}"
        }
    }
}

#[component]
fn AppFooter() -> Element {
    let year = time::OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "footer",
            p { "ExameSTP © {year}" }
            p { class: "text-muted",
                "Uma iniciativa independente para apoiar a educação em São Tomé e Príncipe. Não afiliado oficialmente ao Ministério da Educação."
            }
        }
    }
}
