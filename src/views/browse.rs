use crate::catalog::{self, CATALOG};
use crate::favorites::{save_favorites, toggle_favorite};
use crate::types::{Exam, FilterState, GradeLevel, Subject};
use dioxus::{events::FormEvent, prelude::*};
use std::collections::HashSet;

#[component]
pub fn BrowseView(
    filters: Signal<FilterState>,
    favorites: Signal<HashSet<String>>,
    selected_exam: Signal<Option<Exam>>,
) -> Element {
    let mut filters = filters;
    let filter_snapshot = filters();
    let favorites_snapshot = favorites();
    let filtered = catalog::filter_exams(&CATALOG, &filter_snapshot, &favorites_snapshot);
    let years = catalog::year_options(&CATALOG);
    let only_favorites = filter_snapshot.only_favorites;

    rsx! {
        div { class: "browse-layout",
            aside { class: "filter-sidebar",
                div { class: "filter-panel",
                    h2 { class: "filter-title", "Filtros" }

                    button {
                        class: format_args!(
                            "favorites-toggle {}",
                            if only_favorites { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| {
                            filters.with_mut(|f| f.only_favorites = !f.only_favorites);
                        },
                        if only_favorites { "A ver Favoritos ♥" } else { "Meus Favoritos ♥" }
                    }

                    hr { class: "filter-divider" }

                    div { class: "filter-group",
                        label { class: "filter-label", r#for: "filter-grade", "Classe" }
                        select {
                            id: "filter-grade",
                            value: filter_snapshot.grade.map(|g| g.label()).unwrap_or("Todas"),
                            onchange: move |evt: FormEvent| {
                                filters.with_mut(|f| f.grade = GradeLevel::from_label(&evt.value()));
                            },
                            option { value: "Todas", "Todas as Classes" }
                            for grade in GradeLevel::ALL {
                                option { value: "{grade.label()}", "{grade.label()}" }
                            }
                        }
                    }

                    div { class: "filter-group",
                        label { class: "filter-label", r#for: "filter-subject", "Disciplina" }
                        select {
                            id: "filter-subject",
                            value: filter_snapshot.subject.map(|s| s.label()).unwrap_or("Todas"),
                            onchange: move |evt: FormEvent| {
                                filters.with_mut(|f| f.subject = Subject::from_label(&evt.value()));
                            },
                            option { value: "Todas", "Todas as Disciplinas" }
                            for subject in Subject::ALL {
                                option { value: "{subject.label()}", "{subject.label()}" }
                            }
                        }
                    }

                    div { class: "filter-group",
                        label { class: "filter-label", r#for: "filter-year", "Ano" }
                        select {
                            id: "filter-year",
                            value: filter_snapshot.year.map(|y| y.to_string()).unwrap_or_else(|| "Todos".to_string()),
                            onchange: move |evt: FormEvent| {
                                filters.with_mut(|f| f.year = evt.value().parse::<i32>().ok());
                            },
                            option { value: "Todos", "Todos os Anos" }
                            for year in years.iter() {
                                option { value: "{year}", "{year}" }
                            }
                        }
                    }

                    button {
                        class: "filter-clear",
                        r#type: "button",
                        onclick: move |_| filters.set(FilterState::default()),
                        "Limpar todos os filtros"
                    }
                }
            }

            section { class: "browse-results",
                div { class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Pesquisar por nome da prova, conteúdo...",
                        value: "{filter_snapshot.query}",
                        oninput: move |evt| filters.with_mut(|f| f.query = evt.value()),
                    }
                }

                if filtered.is_empty() {
                    div { class: "empty-state",
                        h3 {
                            if only_favorites { "Sem exames favoritos" } else { "Nenhum exame encontrado" }
                        }
                        p { class: "text-muted",
                            if only_favorites {
                                "Clica no ícone de coração nos exames para os guardares aqui."
                            } else {
                                "Tente ajustar os filtros ou a sua pesquisa."
                            }
                        }
                        if !only_favorites {
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| filters.set(FilterState::default()),
                                "Limpar filtros"
                            }
                        }
                    }
                } else {
                    div { class: "exam-grid",
                        for exam in filtered.iter().cloned() {
                            ExamCard {
                                key: "{exam.id}",
                                exam: exam.clone(),
                                is_favorite: favorites_snapshot.contains(&exam.id),
                                favorites,
                                selected_exam,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExamCard(
    exam: Exam,
    is_favorite: bool,
    favorites: Signal<HashSet<String>>,
    selected_exam: Signal<Option<Exam>>,
) -> Element {
    let mut favorites = favorites;
    let mut selected_exam = selected_exam;
    let exam_for_select = exam.clone();
    let exam_id = exam.id.clone();
    let description = exam.description.clone().unwrap_or_default();

    rsx! {
        div { class: "exam-card",
            button {
                class: format_args!("favorite-btn {}", if is_favorite { "active" } else { "" }),
                r#type: "button",
                title: if is_favorite { "Remover dos favoritos" } else { "Guardar exame" },
                onclick: move |evt| {
                    // The heart lives inside the card; don't open the modal.
                    evt.stop_propagation();
                    favorites.with_mut(|set| {
                        toggle_favorite(set, &exam_id);
                        save_favorites(set);
                    });
                },
                "♥"
            }
            div {
                class: "exam-card-body",
                onclick: move |_| selected_exam.set(Some(exam_for_select.clone())),
                div { class: "exam-card-meta",
                    span { class: "badge badge-subject", "{exam.subject.label()}" }
                    span { class: "badge badge-year", "{exam.year}" }
                }
                h3 { class: "exam-card-title", "{exam.title}" }
                p { class: "exam-card-description", "{description}" }
                div { class: "exam-card-footer",
                    span { "{exam.grade.label()}" }
                    span { "{exam.exam_type.label()}" }
                }
            }
        }
    }
}
