use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: String,
    value: String,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field is-horizontal",
            div {
                class: "field-label",
                label { class: "label", "{label}" }
            }
            div {
                class: "field-body",
                div {
                    class: "control",
                    input {
                        class: "input",
                        r#type: "text",
                        disabled: is_disabled.unwrap_or_default(),
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt),
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: String,
    options: Vec<Element>,
    is_disabled: Option<bool>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field is-horizontal",
            div {
                class: "field-label",
                label { class: "label", "{label}" }
            }
            div {
                class: "field-body",
                div {
                    class: "control",
                    div {
                        class: "select",
                        select {
                            disabled: is_disabled.unwrap_or_default(),
                            onchange,
                            for option in options {
                                {option}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectOption(text: String, value: String, selected: bool) -> Element {
    rsx! {
        option {
            selected,
            value,
            "{text}"
        }
    }
}
