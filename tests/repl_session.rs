use assert_cmd::Command;
use chrono::{Datelike, Duration, Local};
use predicates::prelude::*;
use std::path::Path;

fn rolo_session(book_path: &Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("rolo")
        .unwrap()
        .arg("--file")
        .arg(book_path)
        .arg("--no-color")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn test_welcome_and_goodbye() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    rolo_session(&book_path, "exit\n")
        .success()
        .stdout(predicates::str::contains("Welcome to the assistant bot!"))
        .stdout(predicates::str::contains("Good bye!"));
}

#[test]
fn test_add_change_phone_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    let input = "add John 1234567890\n\
                 add John 0987654321\n\
                 phone John\n\
                 change John 1234567890 1111111111\n\
                 phone John\n\
                 close\n";

    rolo_session(&book_path, input)
        .success()
        .stdout(predicates::str::contains("Contact added."))
        .stdout(predicates::str::contains("Contact update."))
        .stdout(predicates::str::contains("John: 1234567890; 0987654321"))
        .stdout(predicates::str::contains("Contact updated."))
        // The edited phone is appended after the untouched one.
        .stdout(predicates::str::contains("John: 0987654321; 1111111111"))
        .stdout(predicates::str::contains("Good bye!"));
}

#[test]
fn test_birthday_add_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    let input = "add John 1234567890\n\
                 add Jane 0987654321\n\
                 add-birthday John 29.02.2000\n\
                 show-birthday John\n\
                 show-birthday Jane\n\
                 exit\n";

    rolo_session(&book_path, input)
        .success()
        .stdout(predicates::str::contains("Birthday added."))
        .stdout(predicates::str::contains("John's birthday: 29.02.2000"))
        .stdout(predicates::str::contains("Jane has no birthday saved."));
}

#[test]
fn test_bad_input_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    let input = "\n\
                 frobnicate\n\
                 add John 123\n\
                 add\n\
                 phone Unknown\n\
                 add-birthday John 31.02.2023\n\
                 exit\n";

    rolo_session(&book_path, input)
        .success()
        .stdout(predicates::str::contains("Enter a command please."))
        .stdout(predicates::str::contains("Invalid command."))
        .stdout(predicates::str::contains(
            "Invalid phone number `123`: must be exactly 10 digits.",
        ))
        .stdout(predicates::str::contains("Not enough arguments."))
        .stdout(predicates::str::contains("Contact not found: Unknown."))
        .stdout(predicates::str::contains(
            "Invalid date `31.02.2023`: use DD.MM.YYYY.",
        ))
        .stdout(predicates::str::contains("Good bye!"));
}

#[test]
fn test_change_usage_nudge() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    rolo_session(&book_path, "change John\nexit\n")
        .success()
        .stdout(predicates::str::contains(
            "Enter name, old phone and new phone.",
        ));
}

#[test]
fn test_empty_book_replies() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    rolo_session(&book_path, "all\nbirthdays\nexit\n")
        .success()
        .stdout(predicates::str::contains("No contacts saved."))
        .stdout(predicates::str::contains(
            "There are no birthdays in the next 7 days.",
        ));
}

#[test]
fn test_contacts_survive_across_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    let input = "add John 1234567890\n\
                 add-birthday John 01.05.1995\n\
                 exit\n";
    rolo_session(&book_path, input).success();

    let raw = std::fs::read_to_string(&book_path).unwrap();
    assert!(raw.contains("\"John\""), "book file should name the contact");

    rolo_session(&book_path, "all\nexit\n")
        .success()
        .stdout(predicates::str::contains(
            "Contact name: John, phones: 1234567890, birthday: 01.05.1995",
        ));
}

#[test]
fn test_eof_ends_the_session_and_saves() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    rolo_session(&book_path, "add John 1234567890\n")
        .success()
        .stdout(predicates::str::contains("Good bye!").not());

    rolo_session(&book_path, "phone John\nexit\n")
        .success()
        .stdout(predicates::str::contains("John: 1234567890"));
}

#[test]
fn test_config_window_reaches_the_birthdays_reply() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "window_days": 2 }"#,
    )
    .unwrap();

    // A birthday three days out sits inside the default window but outside
    // the configured two-day one.
    let today = Local::now().date_naive();
    let born = (today + Duration::days(3)).with_year(2000).unwrap();

    let input = format!(
        "add John 1234567890\nadd-birthday John {}\nbirthdays\nexit\n",
        born.format("%d.%m.%Y")
    );

    rolo_session(&book_path, &input)
        .success()
        .stdout(predicates::str::contains(
            "There are no birthdays in the next 2 days.",
        ))
        .stdout(predicates::str::contains("Congratulate").not());
}

#[test]
fn test_huge_config_window_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "window_days": 4294967295 }"#,
    )
    .unwrap();

    let input = "add John 1234567890\n\
                 add-birthday John 01.01.1990\n\
                 birthdays\n\
                 exit\n";

    rolo_session(&book_path, input)
        .success()
        .stdout(predicates::str::contains("Congratulate John"))
        .stdout(predicates::str::contains("Good bye!"));
}

#[test]
fn test_birthdays_reports_a_shifted_greeting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("contacts.json");

    // Seed a birthday three days out. Year 2000 is a leap year, so every
    // month/day combination exists in it.
    let today = Local::now().date_naive();
    let upcoming = today + Duration::days(3);
    let born = upcoming.with_year(2000).unwrap();

    let mut expected = upcoming;
    let weekday = expected.weekday().num_days_from_monday();
    if weekday >= 5 {
        expected += Duration::days(i64::from(7 - weekday));
    }

    let input = format!(
        "add John 1234567890\nadd-birthday John {}\nbirthdays\nexit\n",
        born.format("%d.%m.%Y")
    );

    rolo_session(&book_path, &input)
        .success()
        .stdout(predicates::str::contains(format!(
            "Congratulate John — {}",
            expected.format("%d.%m.%Y")
        )));
}
