use clap::{Arg, Command};

fn field_arg(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).value_name(value_name)
}

pub fn list_command() -> Command {
    Command::new("list").about("Fetch and show all students")
}

pub fn add_command() -> Command {
    Command::new("add")
        .about("Add a new student")
        .arg(field_arg("name", "NAME", "Full name").required(true))
        .arg(field_arg("age", "AGE", "Age in years").required(true))
        .arg(field_arg("email", "EMAIL", "Email address").required(true))
        .arg(field_arg("city", "CITY", "City of residence").required(true))
}

pub fn edit_command() -> Command {
    Command::new("edit")
        .about("Update a student; omitted fields keep their current value")
        .arg(
            Arg::new("id")
                .help("Id of the student to edit")
                .required(true)
                .index(1),
        )
        .arg(field_arg("name", "NAME", "New full name"))
        .arg(field_arg("age", "AGE", "New age in years"))
        .arg(field_arg("email", "EMAIL", "New email address"))
        .arg(field_arg("city", "CITY", "New city of residence"))
}

pub fn delete_command() -> Command {
    Command::new("delete").about("Delete a student").arg(
        Arg::new("id")
            .help("Id of the student to delete")
            .required(true)
            .index(1),
    )
}
