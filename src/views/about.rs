use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "about-container",
            section { class: "about-hero",
                h1 {
                    "Democratizar a Educação em"
                    br {}
                    span { class: "accent-yellow", "São Tomé e Príncipe" }
                }
                p {
                    "Somos uma plataforma comunitária dedicada a facilitar o acesso a recursos educativos e promover o sucesso escolar de todos os santomenses."
                }
            }

            section { class: "about-mission",
                h2 { "A Nossa Missão" }
                p { class: "text-muted",
                    "O ExameSTP nasceu da necessidade de centralizar materiais de estudo que muitas vezes se perdem ou são de difícil acesso. Acreditamos que a tecnologia pode ser a ponte para uma educação mais igualitária."
                }

                div { class: "feature-grid",
                    div { class: "feature-card",
                        h3 { "Acesso Universal" }
                        p { class: "text-muted",
                            "Garantir que qualquer estudante, de Pantufo ao Príncipe, tenha acesso às mesmas provas e exames para se preparar."
                        }
                    }
                    div { class: "feature-card",
                        h3 { "Inovação" }
                        p { class: "text-muted",
                            "Introduzir ferramentas modernas, como a Inteligência Artificial, para personalizar o estudo e tirar dúvidas em tempo real."
                        }
                    }
                    div { class: "feature-card",
                        h3 { "Comunidade" }
                        p { class: "text-muted",
                            "Uma plataforma construída por estudantes, para estudantes, alimentada pelas contribuições de quem já passou pelos mesmos exames."
                        }
                    }
                }
            }
        }
    }
}
