//! Black-box tests for the command-line surface.
//!
//! Each harness gets its own working directory, so every test runs against
//! a fresh `tasks.sqlite3`. Interactive input is driven through stdin and
//! the console protocol is asserted on the captured streams.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct CliHarness {
    temp_dir: TempDir,
}

impl CliHarness {
    fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    /// A taskr invocation rooted in the harness directory. Debug-mode
    /// variables are scrubbed so output stays on the plain console path.
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskr").expect("Failed to find taskr binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TASKR_DEBUG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn add_task(&self, title: &str, priority: &str, category: &str) {
        self.command()
            .arg("add")
            .write_stdin(format!("{}\n{}\n{}\n", title, priority, category))
            .assert()
            .success()
            .stdout(predicate::str::contains("Task added successfully"));
    }
}

#[test]
fn test_no_args_prints_help() {
    let harness = CliHarness::new();

    harness
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Add a new task"))
        .stdout(predicate::str::contains("Update an existing task"))
        .stdout(predicate::str::contains("Delete a task"))
        .stdout(predicate::str::contains("List all tasks"));
}

#[test]
fn test_unknown_command_exits_zero() {
    let harness = CliHarness::new();

    harness
        .command()
        .arg("remove")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid command. Use 'taskr' with one of the following commands: add, update, delete, list",
        ));
}

#[test]
fn test_add_emits_prompts_in_order() {
    let harness = CliHarness::new();

    harness
        .command()
        .arg("add")
        .write_stdin("Buy milk\nlow\nerrands\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter task title: Enter task priority (low/medium/high): Enter task category: ",
        ))
        .stdout(predicate::str::contains("Task added successfully"));
}

#[test]
fn test_add_then_list_shows_task() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");

    harness
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Tasks:"))
        .stdout(predicate::str::contains(
            "ID: 1, Title: Buy milk, Priority: low, Category: errands, Completed: false",
        ));
}

#[test]
fn test_list_empty_table_prints_header_only() {
    let harness = CliHarness::new();

    harness
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Tasks:"))
        .stdout(predicate::str::contains("ID:").not());
}

#[test]
fn test_update_emits_prompts_in_order() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");

    harness
        .command()
        .arg("update")
        .write_stdin("1\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter task ID to update: Enter updated task title (press Enter to skip): \
             Enter updated task priority (press Enter to skip): \
             Enter updated task category (press Enter to skip): ",
        ))
        .stdout(predicate::str::contains("Task updated successfully"));
}

#[test]
fn test_update_title_only_preserves_other_fields() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");
    harness.add_task("Call mom", "high", "family");

    harness
        .command()
        .arg("update")
        .write_stdin("1\nGroceries\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task updated successfully"));

    harness
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Title: Groceries, Priority: low, Category: errands, Completed: false",
        ))
        .stdout(predicate::str::contains(
            "ID: 2, Title: Call mom, Priority: high, Category: family, Completed: false",
        ));
}

#[test]
fn test_update_all_blank_keeps_row_identical() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");

    harness.command().arg("update").write_stdin("1\n\n\n\n").assert().success();

    harness.command().arg("list").assert().success().stdout(predicate::str::contains(
        "ID: 1, Title: Buy milk, Priority: low, Category: errands, Completed: false",
    ));
}

#[test]
fn test_update_missing_id_reports_fetch_error() {
    let harness = CliHarness::new();

    harness
        .command()
        .arg("update")
        .write_stdin("42\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching task details:"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_update_non_numeric_id_behaves_as_zero() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");

    harness
        .command()
        .arg("update")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching task details: task with ID 0 not found"));
}

#[test]
fn test_delete_removes_row() {
    let harness = CliHarness::new();
    harness.add_task("Buy milk", "low", "errands");
    harness.add_task("Call mom", "high", "family");

    harness
        .command()
        .arg("delete")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter task ID to delete: "))
        .stdout(predicate::str::contains("Task deleted successfully"));

    harness
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1, Title: Buy milk"))
        .stdout(predicate::str::contains("ID: 2").not());
}

#[test]
fn test_delete_nonexistent_id_reports_success() {
    let harness = CliHarness::new();

    harness
        .command()
        .arg("delete")
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted successfully"));
}
