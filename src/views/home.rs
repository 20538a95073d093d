use crate::ui::AppView;
use dioxus::prelude::*;

#[component]
pub fn HomeView(view: Signal<AppView>) -> Element {
    let mut view = view;
    rsx! {
        div { class: "home-container",
            section { class: "hero",
                h1 { class: "hero-title",
                    "Estuda para o Futuro de"
                    br {}
                    span { class: "accent-yellow", "São Tomé e Príncipe" }
                }
                p { class: "hero-subtitle",
                    "Acede a centenas de exames nacionais e provas de frequência. Prepara-te com a ajuda do nosso Tutor de Inteligência Artificial."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-hero-primary",
                        r#type: "button",
                        onclick: move |_| view.set(AppView::Browse),
                        "Explorar Exames"
                    }
                    button {
                        class: "btn btn-hero-secondary",
                        r#type: "button",
                        onclick: move |_| view.set(AppView::Tutor),
                        "Falar com Tutor IA"
                    }
                }
            }

            section { class: "feature-grid",
                div { class: "feature-card",
                    h3 { "Arquivo Completo" }
                    p { class: "text-muted",
                        "Exames desde a 7ª à 12ª classe, organizados por disciplina e ano letivo."
                    }
                }
                div { class: "feature-card",
                    h3 { "Busca Fácil" }
                    p { class: "text-muted",
                        "Encontra rapidamente a prova que precisas com os nossos filtros inteligentes."
                    }
                }
                div { class: "feature-card",
                    h3 { "Comunidade" }
                    p { class: "text-muted",
                        "Contribui enviando provas que tenhas para ajudar outros estudantes."
                    }
                }
            }
        }
    }
}
