use axum::response::Html;
use school_db::models::student::Student;

use super::{date_of, layout, table, text};

pub fn list(students: &[Student]) -> Html<String> {
    let rows = students
        .iter()
        .map(|s| {
            format!(
                "<tr><td><a href=\"/StudentPage/Show/{id}\">{first} {last}</a></td>\
                 <td>{number}</td><td>{enrolled}</td></tr>\n",
                id = s.id,
                first = text(&s.first_name),
                last = text(&s.last_name),
                number = text(&s.student_number),
                enrolled = date_of(s.enrol_date),
            )
        })
        .collect();
    layout(
        "Students",
        &table(&["Name", "Student Number", "Enrolled"], rows),
    )
}

pub fn show(student: &Student) -> Html<String> {
    let body = format!(
        "<dl>\n\
         <dt>First Name</dt><dd>{first}</dd>\n\
         <dt>Last Name</dt><dd>{last}</dd>\n\
         <dt>Student Number</dt><dd>{number}</dd>\n\
         <dt>Enrolled</dt><dd>{enrolled}</dd>\n\
         </dl>\n\
         <a href=\"/StudentPage/List\">Back to students</a>",
        first = text(&student.first_name),
        last = text(&student.last_name),
        number = text(&student.student_number),
        enrolled = date_of(student.enrol_date),
    );
    layout("Student", &body)
}
