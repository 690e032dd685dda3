use axum::response::Html;
use school_db::models::course::Course;

use super::{date, layout, table, text};

/// One table row per course; shared with the teacher detail page.
pub(crate) fn rows(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .map(|c| {
            format!(
                "<tr><td><a href=\"/CoursePage/Show/{id}\">{code}</a></td>\
                 <td>{name}</td><td>{start}</td><td>{finish}</td></tr>\n",
                id = c.id,
                code = text(&c.code),
                name = text(&c.name),
                start = date(c.start_date),
                finish = date(c.finish_date),
            )
        })
        .collect()
}

pub(crate) const HEADERS: [&str; 4] = ["Code", "Name", "Start", "Finish"];

pub fn list(courses: &[Course]) -> Html<String> {
    layout("Courses", &table(&HEADERS, rows(courses)))
}

pub fn show(course: &Course) -> Html<String> {
    let body = format!(
        "<dl>\n\
         <dt>Code</dt><dd>{code}</dd>\n\
         <dt>Name</dt><dd>{name}</dd>\n\
         <dt>Teacher</dt><dd><a href=\"/TeacherPage/Show/{teacher_id}\">#{teacher_id}</a></dd>\n\
         <dt>Start</dt><dd>{start}</dd>\n\
         <dt>Finish</dt><dd>{finish}</dd>\n\
         </dl>\n\
         <a href=\"/CoursePage/List\">Back to courses</a>",
        code = text(&course.code),
        name = text(&course.name),
        teacher_id = course.teacher_id,
        start = date(course.start_date),
        finish = date(course.finish_date),
    );
    layout("Course", &body)
}
