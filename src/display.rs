use crate::types::Task;
use chrono::NaiveDateTime;
use colored::*;
use terminal_size::{Width, terminal_size};
use textwrap::wrap;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
// checkbox + space + mm/dd date + two spaces
const LINE_PREFIX_LEN: usize = 3 + 1 + 5 + 2;

pub fn print_list_header() {
    println!("{}", "done date   task".bold().underline());
}

/// One task line: checkbox, dimmed creation date, wrapped description.
/// `lead` is how many columns the caller already printed before the line
/// (the selection number, if any), so continuation lines stay aligned.
pub fn print_task_line(task: &Task, lead: usize) {
    let checkbox = if task.checked {
        "[x]".bright_green()
    } else {
        "[ ]".normal()
    };
    let date = short_date(&task.created).dimmed();

    let indent_len = lead + LINE_PREFIX_LEN;
    let width = term_width().saturating_sub(indent_len).max(20);
    let lines = wrap(&task.description, width);

    match lines.split_first() {
        Some((first, rest)) => {
            println!("{} {}  {}", checkbox, date, first.bright_white());
            let indent = " ".repeat(indent_len);
            for line in rest {
                println!("{}{}", indent, line.bright_white());
            }
        }
        None => println!("{} {}", checkbox, date),
    }
}

/// Enumerated rendering for the interactive selector: zero-based index,
/// right-aligned, followed by the normal task line.
pub fn print_selection_list(tasks: &[Task]) {
    let number_width = tasks.len().saturating_sub(1).to_string().len();
    for (idx, task) in tasks.iter().enumerate() {
        print!("{:>width$}) ", idx, width = number_width);
        print_task_line(task, number_width + 2);
    }
}

fn short_date(created: &str) -> String {
    NaiveDateTime::parse_from_str(created, DATE_FORMAT)
        .map(|dt| dt.format("%m/%d").to_string())
        .unwrap_or_else(|_| "??/??".to_string())
}

fn term_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80)
}
