use crate::auth::{self, AuthError};
use crate::types::User;
use crate::ui::AppView;
use dioxus::prelude::*;

#[component]
pub fn SignupView(view: Signal<AppView>, user: Signal<Option<User>>) -> Element {
    let mut view = view;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| Option::<AuthError>::None);
    let loading = use_signal(|| false);

    let mut submit = {
        let name = name;
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
            let name_value = name();
            let email_value = email();
            let password_value = password();
            if let Err(err) = auth::validate_signup(&name_value, &email_value, &password_value) {
                error.set(Some(err));
                return;
            }
            loading.set(true);
            spawn(async move {
                match auth::signup(&name_value, &email_value, &password_value).await {
                    Ok(created) => {
                        user.set(Some(created));
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
                    p { "Junta-te à maior comunidade de estudantes de São Tomé e Príncipe." }
                }
                ul { class: "auth-perks",
                    li {
                        strong { "Acesso Ilimitado" }
                        span { "Baixa qualquer prova sem restrições" }
                    }
                    li {
                        strong { "Tutor Pessoal" }
                        span { "Guarda o teu histórico de estudo" }
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
                        h2 { "Cria a tua conta" }
                        p { class: "text-muted", "É grátis e demora menos de um minuto." }
                    }

                    form { class: "auth-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            submit();
                        },
                        div { class: "form-field",
                            label { r#for: "signup-name", "Nome completo" }
                            input {
                                id: "signup-name",
                                r#type: "text",
                                placeholder: "Ana Sousa",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "signup-email", "Email" }
                            input {
                                id: "signup-email",
                                r#type: "email",
                                placeholder: "exemplo@escola.st",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "signup-password", "Palavra-passe" }
                            input {
                                id: "signup-password",
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
                            if loading() { "A criar conta..." } else { "Criar conta" }
                        }

                        p { class: "auth-switch",
                            "Já tens conta? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| view.set(AppView::Login),
                                "Entrar"
                            }
                        }
                    }
                }
            }
        }
    }
}
