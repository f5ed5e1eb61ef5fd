//! Labelled inputs bound to one string field of a form draft.

#[cfg(test)]
#[path = "form_fields_test.rs"]
mod form_fields_test;

use leptos::prelude::*;

use crate::net::types::OptionItem;

/// Accessor pair for one string field of draft `D`.
pub struct Field<D> {
    pub get: fn(&D) -> &String,
    pub set: fn(&mut D, String),
}

impl<D> Clone for Field<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Field<D> {}

/// Outcome line shown under a form after submitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Saved(&'static str),
    Failed(String),
}

/// What a [`text_field`] collects; decides the HTML input type and step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    /// Number with cents.
    Price,
    Date,
    DateTime,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number | Self::Price => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            Self::Price => Some("0.01"),
            _ => None,
        }
    }
}

pub fn text_field<D: Send + Sync + 'static>(
    label: &'static str,
    kind: InputKind,
    required: bool,
    draft: RwSignal<D>,
    field: Field<D>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind.html_type()
                required=required
                step=kind.step()
                prop:value=move || draft.with(|d| (field.get)(d).clone())
                on:input=move |ev| draft.update(|d| (field.set)(d, event_target_value(&ev)))
            />
        </label>
    }
}

pub fn textarea_field<D: Send + Sync + 'static>(label: &'static str, draft: RwSignal<D>, field: Field<D>) -> impl IntoView {
    view! {
        <label class="form-field form-field--wide">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input"
                rows="3"
                prop:value=move || draft.with(|d| (field.get)(d).clone())
                on:input=move |ev| draft.update(|d| (field.set)(d, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

/// Read-only display of a value derived from other fields.
pub fn derived_field(label: &'static str, value: impl Fn() -> String + Send + Sync + 'static) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input class="form-field__input form-field__input--derived" type="text" readonly=true prop:value=value/>
        </label>
    }
}

pub fn select_field<D: Send + Sync + 'static>(
    label: &'static str,
    options: Signal<Vec<OptionItem>>,
    draft: RwSignal<D>,
    field: Field<D>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                required=true
                on:change=move |ev| draft.update(|d| (field.set)(d, event_target_value(&ev)))
            >
                <option value="" selected=move || draft.with(|d| (field.get)(d).is_empty())>
                    {format!("Select {label}")}
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let id = option.id.to_string();
                            let current = id.clone();
                            view! {
                                <option value=id selected=move || draft.with(|d| *(field.get)(d) == current)>
                                    {option.name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
pub fn StatusLine(status: RwSignal<Option<FormStatus>>) -> impl IntoView {
    move || match status.get() {
        Some(FormStatus::Saved(msg)) => view! { <p class="form-status form-status--saved">{msg}</p> }.into_any(),
        Some(FormStatus::Failed(msg)) => view! { <p class="form-status form-status--failed">{msg}</p> }.into_any(),
        None => ().into_any(),
    }
}
