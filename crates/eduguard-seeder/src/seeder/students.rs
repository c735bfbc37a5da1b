//! Student seed generation.

use eduguard_models::Student;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;

const GRADES: [&str; 4] = ["Grade 9", "Grade 10", "Grade 11", "Grade 12"];

/// The five demo students every fresh roster starts with.
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new(
            "John Doe",
            "Grade 10",
            "STU001",
            "john.doe@school.com",
            "+256700000001",
        ),
        Student::new(
            "Jane Smith",
            "Grade 11",
            "STU002",
            "jane.smith@school.com",
            "+256700000002",
        ),
        Student::new(
            "Bob Johnson",
            "Grade 10",
            "STU003",
            "bob.johnson@school.com",
            "+256700000003",
        ),
        Student::new(
            "Alice Williams",
            "Grade 12",
            "STU004",
            "alice.williams@school.com",
            "+256700000004",
        ),
        Student::new(
            "Charlie Brown",
            "Grade 11",
            "STU005",
            "charlie.brown@school.com",
            "+256700000005",
        ),
    ]
}

/// Generates `count` students numbered from `first_number` (`STU006`, ...).
///
/// Every third generated student gets a linked device.
pub fn generate_students(count: usize, first_number: usize) -> Vec<Student> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_student(first_number + idx))
        .collect()
}

fn generate_student(number: usize) -> Student {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let email = format!(
        "{}.{}{}@school.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        number
    );

    let student = Student::new(
        format!("{first_name} {last_name}"),
        GRADES[number % GRADES.len()],
        format!("STU{number:03}"),
        email,
        format!("+2567{number:08}"),
    );

    if number % 3 == 0 {
        student.with_device(format!("DEV-{number:04}"))
    } else {
        student
    }
}
