use dioxus::prelude::*;
use log::error;

use customer_info_app as app;
use customer_info_domain::{self as domain, CustomerService};

use crate::{
    DOMAIN_SERVICE, NOTIFICATIONS,
    component::form::{InputField, SelectField, SelectOption},
};

#[component]
pub fn CustomerEntry() -> Element {
    let mut form = use_signal(domain::CustomerForm::default);

    let submit = move |_| {
        let result = DOMAIN_SERVICE.read().submit(&mut form.write());
        NOTIFICATIONS.write().push(app::Notification::from(&result));
    };

    let is_submitting = form.read().is_submitting();
    let contact_method = form.read().fields.contact_method;

    rsx! {
        div {
            class: "box",
            for text_field in TextField::ALL {
                InputField {
                    key: "{text_field.label()}",
                    label: text_field.label().to_string(),
                    value: text_field.value(&form.read().fields).to_string(),
                    is_disabled: is_submitting,
                    oninput: move |event: FormEvent| {
                        *text_field.value_mut(&mut form.write().fields) = event.value();
                    },
                }
            }
            SelectField {
                label: "Preferred Contact:".to_string(),
                options: contact_method_options(contact_method),
                is_disabled: is_submitting,
                onchange: move |event: FormEvent| {
                    match domain::ContactMethod::from_selection(&event.value()) {
                        Ok(contact_method) => form.write().fields.contact_method = contact_method,
                        Err(err) => error!("failed to select contact method: {err}"),
                    }
                },
            }
            div {
                class: "field is-grouped is-grouped-right",
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_submitting { "is-loading" },
                        disabled: is_submitting,
                        onclick: submit,
                        "Submit"
                    }
                }
            }
        }
    }
}

fn contact_method_options(selected: Option<domain::ContactMethod>) -> Vec<Element> {
    std::iter::once(rsx! {
        SelectOption {
            text: String::new(),
            value: String::new(),
            selected: selected.is_none(),
        }
    })
    .chain(domain::ContactMethod::iter().map(|contact_method| {
        rsx! {
            SelectOption {
                text: contact_method.to_string(),
                value: contact_method.to_string(),
                selected: selected == Some(*contact_method),
            }
        }
    }))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TextField {
    Name,
    Birthday,
    Email,
    Phone,
    Address,
}

impl TextField {
    const ALL: [TextField; 5] = [
        TextField::Name,
        TextField::Birthday,
        TextField::Email,
        TextField::Phone,
        TextField::Address,
    ];

    fn label(self) -> &'static str {
        match self {
            TextField::Name => "Name:",
            TextField::Birthday => "Birthday (YYYY-MM-DD):",
            TextField::Email => "Email:",
            TextField::Phone => "Phone Number:",
            TextField::Address => "Address:",
        }
    }

    fn value(self, fields: &domain::CustomerFields) -> &str {
        match self {
            TextField::Name => &fields.name,
            TextField::Birthday => &fields.birthday,
            TextField::Email => &fields.email,
            TextField::Phone => &fields.phone,
            TextField::Address => &fields.address,
        }
    }

    fn value_mut(self, fields: &mut domain::CustomerFields) -> &mut String {
        match self {
            TextField::Name => &mut fields.name,
            TextField::Birthday => &mut fields.birthday,
            TextField::Email => &mut fields.email,
            TextField::Phone => &mut fields.phone,
            TextField::Address => &mut fields.address,
        }
    }
}
