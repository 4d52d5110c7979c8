//! View rendering for the create/edit form page.

use common::form::{FormMode, FormPhase};
use common::model::student::Field;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentFormPage;

const INPUT_STYLE: &str = "width:100%;padding:12px;border:2px solid #ddd;border-radius:6px;font-size:16px;box-sizing:border-box;";
const INPUT_ERROR_STYLE: &str = "width:100%;padding:12px;border:2px solid #e74c3c;border-radius:6px;font-size:16px;box-sizing:border-box;";

pub fn view(page: &StudentFormPage, ctx: &Context<StudentFormPage>) -> Html {
    let link = ctx.link();
    let title = match page.model.mode() {
        FormMode::Create => "Add New Student",
        FormMode::Edit { .. } => "Edit Student",
    };

    html! {
        <div class="student-form-page" style="padding:20px;max-width:1200px;margin:0 auto;">
            <button
                class="btn btn-back"
                style="padding:12px 24px;background:#6c757d;color:#fff;border:none;border-radius:8px;cursor:pointer;margin-bottom:20px;font-size:16px;"
                disabled={page.model.is_submitting()}
                onclick={link.callback(|_| Msg::Back)}
            >
                { "← Back to Students" }
            </button>
            <h1 style="text-align:center;color:#2c3e50;margin-bottom:30px;">{ title }</h1>
            {
                match page.model.phase() {
                    FormPhase::Loading => html! {
                        <div class="loading" style="text-align:center;padding:60px 20px;color:#666;">
                            <h3>{ "Loading Student Data..." }</h3>
                            <p>{ "Please wait while we fetch the student information." }</p>
                        </div>
                    },
                    FormPhase::Ready | FormPhase::Closed => build_form(page, link),
                }
            }
        </div>
    }
}

fn build_form(page: &StudentFormPage, link: &Scope<StudentFormPage>) -> Html {
    let submitting = page.model.is_submitting();
    let button_text = match (page.model.mode(), submitting) {
        (FormMode::Create, false) => "Add Student",
        (FormMode::Create, true) => "Adding Student...",
        (FormMode::Edit { .. }, false) => "Update Student",
        (FormMode::Edit { .. }, true) => "Updating...",
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form
            onsubmit={onsubmit}
            style="max-width:500px;margin:0 auto;background:#fff;padding:30px;border-radius:10px;box-shadow:0 2px 10px rgba(0,0,0,0.1);border:1px solid #ddd;"
        >
            { for Field::ALL.into_iter().map(|field| build_field(page, link, field)) }
            <button
                type="submit"
                disabled={submitting}
                style="width:100%;padding:14px;background:#667eea;color:#fff;border:none;border-radius:6px;font-size:16px;font-weight:bold;cursor:pointer;"
            >
                { button_text }
            </button>
        </form>
    }
}

fn build_field(page: &StudentFormPage, link: &Scope<StudentFormPage>, field: Field) -> Html {
    let error = page.model.error(field).map(str::to_string);
    // Plain inputs: the browser's own email check would pre-empt `validate`.
    let (input_type, input_mode) = match field {
        Field::Email => ("text", "email"),
        Field::Phone => ("tel", "tel"),
        _ => ("text", "text"),
    };
    let placeholder = match field {
        Field::Name => "Enter full name",
        Field::Email => "Enter email address",
        Field::Course => "Enter course name",
        Field::Phone => "Enter 10-digit phone number",
    };
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <div class="form-group" style="margin-bottom:20px;">
            <label for={field.key()} style="display:block;margin-bottom:8px;font-weight:600;color:#333;">
                { field.label() }
            </label>
            <input
                id={field.key()}
                name={field.key()}
                type={input_type}
                inputmode={input_mode}
                placeholder={placeholder}
                value={page.model.draft().get(field).to_string()}
                disabled={page.model.is_submitting()}
                style={if error.is_some() { INPUT_ERROR_STYLE } else { INPUT_STYLE }}
                oninput={oninput}
            />
            {
                if let Some(message) = error {
                    html! { <span class="field-error" style="color:#e74c3c;font-size:14px;margin-top:5px;display:block;">{ message }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
