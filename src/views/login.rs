use crate::auth::{self, AuthError};
use crate::types::User;
use crate::ui::AppView;
use dioxus::prelude::*;

#[component]
pub fn LoginView(view: Signal<AppView>, user: Signal<Option<User>>) -> Element {
    let mut view = view;
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| Option::<AuthError>::None);
    let loading = use_signal(|| false);

    let mut submit = {
        let email = email;
        let password = password;
        let mut error = error;
        let mut loading = loading;
        let mut user = user;
        move || {
            if loading() {
                return;
            }
            error.set(None);
            let email_value = email();
            let password_value = password();
            if let Err(err) = auth::validate_login(&email_value, &password_value) {
                error.set(Some(err));
                return;
            }
            loading.set(true);
            spawn(async move {
                match auth::login(&email_value, &password_value).await {
                    Ok(logged_in) => {
                        user.set(Some(logged_in));
                        view.set(AppView::Home);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div { class: "auth-layout",
            div { class: "auth-branding",
                div {
                    h1 { class: "auth-wordmark", "Exame" span { class: "accent-yellow", "STP" } }
                    p {
                        "A tua porta de entrada para o sucesso académico. Acede a exames, provas e recebe ajuda do nosso Tutor IA."
                    }
                }
                ul { class: "auth-perks",
                    li {
                        strong { "Arquivo Completo" }
                        span { "Milhares de provas desde 2010" }
                    }
                    li {
                        strong { "Inteligência Artificial" }
                        span { "Planos de estudo personalizados" }
                    }
                }
            }

            div { class: "auth-form-wrap",
                div { class: "auth-form-panel",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| view.set(AppView::Home),
                        "← Voltar ao início"
                    }

                    div { class: "auth-form-heading",
                        h2 { "Bem-vindo de volta!" }
                        p { class: "text-muted", "Introduz os teus dados para continuar." }
                    }

                    form { class: "auth-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            submit();
                        },
                        div { class: "form-field",
                            label { r#for: "login-email", "Email" }
                            input {
                                id: "login-email",
                                r#type: "email",
                                placeholder: "exemplo@escola.st",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "login-password", "Palavra-passe" }
                            input {
                                id: "login-password",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }

                        if let Some(err) = error() {
                            div { class: "form-error", "{err}" }
                        }

                        button {
                            class: "btn btn-primary auth-submit",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "A entrar..." } else { "Entrar na conta" }
                        }

                        p { class: "auth-switch",
                            "Não tens conta? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| view.set(AppView::Signup),
                                "Criar conta gratuita"
                            }
                        }
                    }
                }
            }
        }
    }
}
