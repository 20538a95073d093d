//! Simulated contribution flow: the progress bar is a timer, no file ever
//! leaves the device.

use crate::types::{GradeLevel, Subject};
use dioxus::prelude::*;
use std::time::Duration;

const UPLOAD_TICK: Duration = Duration::from_millis(300);
const UPLOAD_STEP: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UploadState {
    Idle,
    Uploading,
    Success,
}

#[component]
pub fn UploadView() -> Element {
    let state = use_signal(|| UploadState::Idle);
    let progress = use_signal(|| 0i32);

    let mut start_upload = {
        let mut state = state;
        let mut progress = progress;
        move || {
            if state() == UploadState::Uploading {
                return;
            }
            state.set(UploadState::Uploading);
            progress.set(0);
            spawn(async move {
                loop {
                    tokio::time::sleep(UPLOAD_TICK).await;
                    let next = (progress() + UPLOAD_STEP).min(100);
                    progress.set(next);
                    if next >= 100 {
                        state.set(UploadState::Success);
                        break;
                    }
                }
            });
        }
    };

    let mut reset_upload = {
        let mut state = state;
        let mut progress = progress;
        move || {
            state.set(UploadState::Idle);
            progress.set(0);
        }
    };

    rsx! {
        div { class: "upload-container",
            div { class: "upload-panel",
                header { class: "upload-header",
                    h2 { "Contribuir com uma Prova" }
                    p {
                        "Ajuda a comunidade estudantil de STP digitalizando e enviando provas antigas."
                    }
                }

                if state() == UploadState::Success {
                    div { class: "upload-success",
                        h3 { "Prova Enviada com Sucesso!" }
                        p { class: "text-muted",
                            "Obrigado pela tua contribuição. A nossa equipa irá rever o documento e publicá-lo em breve."
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| reset_upload(),
                            "Enviar outra prova"
                        }
                    }
                } else {
                    div { class: "upload-form",
                        div { class: "form-field",
                            label { r#for: "upload-title", "Nome da Prova / Título" }
                            input {
                                id: "upload-title",
                                r#type: "text",
                                placeholder: "Ex: Exame Nacional de Matemática 12ª Classe - 2023",
                            }
                        }

                        div { class: "upload-form-grid",
                            div { class: "form-field",
                                label { r#for: "upload-subject", "Disciplina" }
                                select { id: "upload-subject",
                                    for subject in Subject::ALL {
                                        option { value: "{subject.label()}", "{subject.label()}" }
                                    }
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "upload-grade", "Classe" }
                                select { id: "upload-grade",
                                    for grade in GradeLevel::ALL {
                                        option { value: "{grade.label()}", "{grade.label()}" }
                                    }
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "upload-year", "Ano" }
                                input { id: "upload-year", r#type: "number", placeholder: "2024" }
                            }
                            div { class: "form-field",
                                label { r#for: "upload-type", "Tipo" }
                                select { id: "upload-type",
                                    option { "Exame Nacional" }
                                    option { "Prova de Frequência" }
                                }
                            }
                        }

                        div { class: "upload-dropzone",
                            p { "Clica para selecionar o ficheiro PDF ou Imagem" }
                            p { class: "text-muted", "Máximo 10MB" }
                            input { r#type: "file", class: "hidden" }
                        }

                        if state() == UploadState::Uploading {
                            div { class: "upload-progress",
                                div { class: "upload-progress-meta",
                                    span { "A enviar ficheiro..." }
                                    span { "{progress()}%" }
                                }
                                div { class: "upload-progress-track",
                                    div {
                                        class: "upload-progress-fill",
                                        style: "width: {progress()}%;",
                                    }
                                }
                            }
                        }

                        div { class: "upload-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: state() == UploadState::Uploading,
                                onclick: move |_| start_upload(),
                                if state() == UploadState::Uploading { "A enviar..." } else { "Enviar para Revisão" }
                            }
                        }
                    }
                }
            }
        }
    }
}
