use dioxus::prelude::*;
use tracing::debug;

use crate::core::contact::{ContactError, ContactForm};
use crate::core::site;
use crate::i18n::{use_i18n, Domain};

const STATS: [(&str, &str); 4] = [
    ("50+", "stats-projects"),
    ("3+", "stats-experience"),
    ("15+", "stats-technologies"),
    ("100%", "stats-satisfaction"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Sent,
    Rejected(ContactError),
}

#[component]
pub fn ContactSection() -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Contact);
    let language = i18n.language();
    let owner = site::OWNER_NAME;
    let email = site::CONTACT_EMAIL;
    let phone = site::CONTACT_PHONE;
    let location = site::CONTACT_LOCATION;

    let mut form = use_signal(ContactForm::default);
    let mut outcome = use_signal(|| None::<Outcome>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().submit(language);
        match result {
            Ok(_) => {
                form.set(ContactForm::default());
                outcome.set(Some(Outcome::Sent));
            }
            Err(err) => {
                debug!(%err, "contact form rejected");
                outcome.set(Some(Outcome::Rejected(err)));
            }
        }
    };

    let notice = match outcome() {
        Some(Outcome::Sent) => Some(("form__notice form__notice--ok", text.t("sent-confirmation"))),
        Some(Outcome::Rejected(err)) => Some(("form__notice form__notice--error", text.t(err.message_key()))),
        None => None,
    };

    rsx! {
        div { class: "section",
            header { class: "section__header",
                h2 { class: "section__title gradient-text", {text.t("title")} }
                p { class: "section__subtitle", {text.t("subtitle")} }
            }

            div { class: "contact",
                div { class: "contact__aside",
                    div { class: "card resume-card",
                        h3 { {text.t("resume-title")} }
                        p { {text.t("resume-description")} }
                        div { class: "resume-card__banner",
                            strong { "{owner}" }
                            span { {text.t("resume-role")} }
                            small { {text.t("resume-summary")} }
                        }
                        a {
                            class: "button button--primary button--block",
                            href: site::RESUME_PATH,
                            download: site::RESUME_DOWNLOAD_NAME,
                            {text.t("download-resume")}
                        }
                    }

                    ul { class: "card contact__details",
                        li {
                            a { href: "mailto:{email}", "{email}" }
                        }
                        li { "{phone}" }
                        li { {text.t("availability")} }
                        li { "{location}" }
                    }

                    div { class: "stats",
                        for (value, label) in STATS {
                            div { key: "{label}", class: "stats__item",
                                span { class: "stats__value", "{value}" }
                                span { class: "stats__label", {text.t(label)} }
                            }
                        }
                    }
                }

                form { class: "card form", novalidate: true, onsubmit,
                    h3 { {text.t("send-message")} }
                    p { class: "form__hint", {text.t("send-message-desc")} }

                    label { class: "form__field",
                        span { {text.t("your-name")} }
                        input {
                            r#type: "text",
                            name: "name",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label { class: "form__field",
                        span { {text.t("email-address")} }
                        input {
                            r#type: "email",
                            name: "email",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    label { class: "form__field",
                        span { {text.t("message")} }
                        textarea {
                            name: "message",
                            rows: "5",
                            placeholder: text.t("message-placeholder"),
                            value: "{form.read().message}",
                            oninput: move |evt| form.write().message = evt.value(),
                        }
                    }

                    if let Some((class, message)) = notice {
                        p { class, role: "status", "{message}" }
                    }

                    button { class: "button button--primary button--block", r#type: "submit",
                        {text.t("send-btn")}
                    }

                    div { class: "form__guarantee",
                        strong { {text.t("response-guarantee")} }
                        p { {text.t("response-desc")} }
                    }
                }
            }
        }
    }
}
