//! View rendering for the student list page.

use common::list::{DeleteMode, ListState, RefreshTrigger};
use common::model::student::Student;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentsPage;

const HEADER_STYLE: &str = "text-align:center;color:#2c3e50;margin-bottom:30px;font-size:2.5rem;font-weight:bold;";
const TOOLBAR_STYLE: &str = "display:flex;justify-content:space-between;align-items:center;margin-bottom:20px;flex-wrap:wrap;gap:10px;";
const CELL_STYLE: &str = "padding:12px;border-bottom:1px solid #e1e5e9;text-align:left;word-break:break-word;";

pub fn view(page: &StudentsPage, ctx: &Context<StudentsPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="students-page" style="padding:20px;max-width:1200px;margin:0 auto;">
            <h1 style={HEADER_STYLE}>{ "Student Management System" }</h1>
            { build_toolbar(page, link) }
            { build_body(page, link) }
        </div>
    }
}

fn build_toolbar(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    html! {
        <div style={TOOLBAR_STYLE}>
            <button
                class="btn btn-add"
                style="padding:12px 24px;background:#4CAF50;color:#fff;border:none;border-radius:8px;cursor:pointer;font-size:16px;font-weight:bold;"
                onclick={link.callback(|_| Msg::Add)}
            >
                { "+ Add New Student" }
            </button>
            <button
                class="btn btn-refresh"
                style="padding:12px 24px;background:#2196F3;color:#fff;border:none;border-radius:8px;cursor:pointer;font-size:16px;font-weight:600;"
                disabled={page.model.is_loading()}
                onclick={link.callback(|_| Msg::Refresh(RefreshTrigger::User))}
            >
                { "↻ Refresh List" }
            </button>
        </div>
    }
}

fn build_body(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    match page.model.state() {
        ListState::Idle | ListState::Loading => html! {
            <div class="loading" style="text-align:center;padding:60px 20px;color:#666;">
                <h3>{ "Loading Students..." }</h3>
                <p>{ "Please wait while we fetch the student data." }</p>
            </div>
        },
        ListState::LoadError(reason) => html! {
            <div class="load-error" style="text-align:center;padding:60px 20px;color:#c62828;">
                <h3>{ "Could not load students" }</h3>
                <p>{ reason.clone() }</p>
            </div>
        },
        ListState::Loaded if page.model.students().is_empty() => html! {
            <div class="empty" style="text-align:center;padding:60px 20px;color:#666;">
                <h3>{ "No students found" }</h3>
                <p>{ "Add your first student to get started." }</p>
            </div>
        },
        ListState::Loaded => build_table(page, link),
    }
}

fn build_table(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let busy = page.model.pending_delete().is_some();

    html! {
        <table style="width:100%;border-collapse:collapse;table-layout:fixed;box-shadow:0 4px 6px rgba(0,0,0,0.1);">
            <thead style="background:#667eea;color:#fff;">
                <tr>
                    <th style={CELL_STYLE}>{ "#" }</th>
                    <th style={CELL_STYLE}>{ "Name" }</th>
                    <th style={CELL_STYLE}>{ "Email" }</th>
                    <th style={CELL_STYLE}>{ "Course" }</th>
                    <th style={CELL_STYLE}>{ "Phone" }</th>
                    <th style={CELL_STYLE}>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for page.model.students().iter().enumerate().map(|(index, student)| build_row(index, student, busy, link)) }
            </tbody>
        </table>
    }
}

fn build_row(index: usize, student: &Student, busy: bool, link: &Scope<StudentsPage>) -> Html {
    let edit_id = student.id.clone();
    let delete_id = student.id.clone();
    let secure_id = student.id.clone();

    html! {
        <tr key={student.id.clone()}>
            <td style={CELL_STYLE}>{ index + 1 }</td>
            <td style={CELL_STYLE}>{ student.name.clone() }</td>
            <td style={CELL_STYLE}>{ student.email.clone() }</td>
            <td style={CELL_STYLE}>{ student.course.clone() }</td>
            <td style={CELL_STYLE}>{ student.phone.clone() }</td>
            <td style={CELL_STYLE}>
                { action_button("Edit", "#ff9800", false, link.callback(move |_| Msg::Edit(edit_id.clone()))) }
                { action_button("Delete", "#f44336", busy, link.callback(move |_| Msg::Delete(delete_id.clone(), DeleteMode::Simple))) }
                { action_button("Secure Delete", "#9c27b0", busy, link.callback(move |_| Msg::Delete(secure_id.clone(), DeleteMode::TypedName))) }
            </td>
        </tr>
    }
}

fn action_button(label: &str, color: &str, disabled: bool, on_click: Callback<MouseEvent>) -> Html {
    let style = format!(
        "margin:2px;padding:6px 12px;background:{};color:#fff;border:none;border-radius:4px;cursor:pointer;font-size:14px;",
        color
    );
    html! {
        <button style={style} disabled={disabled} onclick={on_click}>{ label.to_string() }</button>
    }
}
