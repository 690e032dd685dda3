use axum::response::Html;
use school_db::models::teacher::Teacher;

use super::{course, date_of, escape, layout, table, text};

/// What the user typed into the search form, echoed back into it.
#[derive(Debug)]
pub struct SearchForm<'a> {
    pub search_key: Option<&'a str>,
    pub hire_date: Option<&'a str>,
}

fn search_form(form: &SearchForm<'_>) -> String {
    format!(
        "<form method=\"get\" action=\"/TeacherPage/List\">\n\
         <input type=\"search\" name=\"SearchKey\" value=\"{key}\" placeholder=\"Name, hire date or salary\">\n\
         <input type=\"date\" name=\"HireDate\" value=\"{hire}\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>",
        key = form.search_key.map(escape).unwrap_or_default(),
        hire = form.hire_date.map(escape).unwrap_or_default(),
    )
}

/// Teacher list with the search form; `message` is shown above the table.
pub fn list(teachers: &[Teacher], form: &SearchForm<'_>, message: Option<&str>) -> Html<String> {
    let rows = teachers
        .iter()
        .map(|t| {
            format!(
                "<tr><td><a href=\"/TeacherPage/Show/{id}\">{name}</a></td>\
                 <td>{number}</td><td>{hired}</td><td>{salary}</td></tr>\n",
                id = t.id,
                name = escape(&t.full_name()),
                number = text(&t.employee_number),
                hired = date_of(t.hire_date),
                salary = t.salary,
            )
        })
        .collect();
    let message = message
        .map(|m| format!("<p class=\"message\">{}</p>\n", escape(m)))
        .unwrap_or_default();
    let body = format!(
        "{form}\n{message}{table}",
        form = search_form(form),
        table = table(&["Name", "Employee Number", "Hired", "Salary"], rows),
    );
    layout("Teachers", &body)
}

/// Teacher detail, including whatever courses were attached to the record.
pub fn show(teacher: &Teacher) -> Html<String> {
    let courses = match teacher.courses.as_deref() {
        Some(courses) if !courses.is_empty() => table(&course::HEADERS, course::rows(courses)),
        _ => "<p>No courses.</p>".to_string(),
    };
    let body = format!(
        "<dl>\n\
         <dt>First Name</dt><dd>{first}</dd>\n\
         <dt>Last Name</dt><dd>{last}</dd>\n\
         <dt>Employee Number</dt><dd>{number}</dd>\n\
         <dt>Hired</dt><dd>{hired}</dd>\n\
         <dt>Salary</dt><dd>{salary}</dd>\n\
         </dl>\n\
         <h2>Courses</h2>\n\
         {courses}\n\
         <a href=\"/TeacherPage/List\">Back to teachers</a>",
        first = text(&teacher.first_name),
        last = text(&teacher.last_name),
        number = text(&teacher.employee_number),
        hired = date_of(teacher.hire_date),
        salary = teacher.salary,
    );
    layout("Teacher", &body)
}
