use crate::ai;
use crate::types::Exam;
use crate::views::shared::{PDF_FALLBACK_URL, markdown_to_html};
use dioxus::prelude::*;
use tracing::error;

const PLAN_FALLBACK_MESSAGE: &str =
    "Desculpe, ocorreu um erro ao gerar o plano de estudos. Tente novamente mais tarde.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Document,
    StudyPlan,
}

#[component]
pub fn ExamDetailModal(exam: Exam, selected_exam: Signal<Option<Exam>>) -> Element {
    let mut selected_exam = selected_exam;
    let mut active_tab = use_signal(|| DetailTab::Document);
    let study_plan = use_signal(|| Option::<String>::None);
    let loading_plan = use_signal(|| false);
    let focus_area = use_signal(String::new);

    let pdf_url = exam
        .download_url
        .clone()
        .unwrap_or_else(|| PDF_FALLBACK_URL.to_string());

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| selected_exam.set(None),
            div { class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "{exam.title}" }
                        p { class: "modal-subtitle", "{exam.subject.label()} › {exam.grade.label()}" }
                    }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Fechar",
                        onclick: move |_| selected_exam.set(None),
                        dangerous_inner_html: "&times;"
                    }
                }

                div { class: "modal-tabs",
                    button {
                        class: format_args!(
                            "modal-tab {}",
                            if active_tab() == DetailTab::Document { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| active_tab.set(DetailTab::Document),
                        "Prova & Documento"
                    }
                    button {
                        class: format_args!(
                            "modal-tab {}",
                            if active_tab() == DetailTab::StudyPlan { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| active_tab.set(DetailTab::StudyPlan),
                        "Plano de Estudo (IA)"
                    }
                }

                div { class: "modal-content",
                    if active_tab() == DetailTab::Document {
                        DocumentTab { exam: exam.clone(), pdf_url: pdf_url.clone() }
                    } else {
                        StudyPlanTab { exam: exam.clone(), study_plan, loading_plan, focus_area }
                    }
                }

                footer { class: "modal-footer",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| selected_exam.set(None),
                        "Fechar Janela"
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentTab(exam: Exam, pdf_url: String) -> Element {
    let description = exam
        .description
        .clone()
        .unwrap_or_else(|| "Sem descrição disponível.".to_string());

    rsx! {
        div { class: "detail-grid",
            div { class: "detail-meta",
                div { class: "detail-card",
                    h3 { class: "detail-card-title", "Detalhes" }
                    ul { class: "detail-list",
                        li { span { class: "detail-label", "Ano:" } " {exam.year}" }
                        li { span { class: "detail-label", "Tipo:" } " {exam.exam_type.label()}" }
                        li { span { class: "detail-label", "Classe:" } " {exam.grade.label()}" }
                    }
                }
                div { class: "detail-card detail-card-description",
                    h3 { class: "detail-card-title", "Descrição" }
                    p { "{description}" }
                    a {
                        class: "btn btn-primary download-link",
                        href: "{pdf_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Baixar PDF"
                    }
                }
            }
            div { class: "doc-viewer",
                div { class: "doc-viewer-bar",
                    span { class: "text-muted", "Visualização do Documento" }
                    a {
                        class: "link-button",
                        href: "{pdf_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Abrir noutra janela ↗"
                    }
                }
                iframe {
                    class: "doc-viewer-frame",
                    src: "{pdf_url}",
                    title: "Visualizador de PDF",
                }
            }
        }
    }
}

#[component]
fn StudyPlanTab(
    exam: Exam,
    study_plan: Signal<Option<String>>,
    loading_plan: Signal<bool>,
    focus_area: Signal<String>,
) -> Element {
    let mut study_plan = study_plan;
    let mut loading_plan = loading_plan;
    let mut focus_area = focus_area;
    let mut generate_plan = {
        let subject = exam.subject;
        let grade = exam.grade;
        move || {
            let focus = focus_area();
            if focus.trim().is_empty() || loading_plan() {
                return;
            }
            loading_plan.set(true);
            spawn(async move {
                match ai::create_study_plan(subject, grade, &focus).await {
                    Ok(plan) => study_plan.set(Some(plan)),
                    Err(err) => {
                        error!("study plan generation failed: {}", err);
                        study_plan.set(Some(PLAN_FALLBACK_MESSAGE.to_string()));
                    }
                }
                loading_plan.set(false);
            });
        }
    };

    rsx! {
        if let Some(plan) = study_plan() {
            div { class: "plan-result",
                div { class: "plan-result-header",
                    h3 { "Teu Roteiro de Estudo" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| study_plan.set(None),
                        "Gerar novo"
                    }
                }
                div { class: "plan-result-body md",
                    dangerous_inner_html: "{markdown_to_html(&plan)}"
                }
            }
        } else {
            div { class: "plan-intro",
                h3 { "Plano de Estudo Personalizado" }
                p {
                    "A nossa IA pode criar um roteiro de estudo focado nas tuas dificuldades específicas para este exame."
                }
                div { class: "plan-form",
                    label { class: "filter-label", r#for: "focus-area", "Onde tens mais dificuldade?" }
                    input {
                        id: "focus-area",
                        r#type: "text",
                        placeholder: "Ex: Geometria no espaço, Verbos irregulares, Bioquímica...",
                        value: "{focus_area}",
                        oninput: move |evt| focus_area.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading_plan() || focus_area().trim().is_empty(),
                        onclick: move |_| generate_plan(),
                        if loading_plan() { "A Gerar Plano..." } else { "Gerar Dicas de Estudo" }
                    }
                }
            }
        }
    }
}
