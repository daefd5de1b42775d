//! Line-oriented console rendering for primer and showcase results.
//!
//! Each section prints its header even when the fetch failed. A failure
//! carrying a server message adds that message as one line; other failures
//! print nothing further, their cause having been logged by the service.

use std::io::{self, Write};

use crate::domain::ports::FetchError;
use crate::domain::{ColorPage, PrimerReport, ShowcaseReport, Todo, UserPage};

/// Write the warm-up results.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_primer(report: &PrimerReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Additional {}", report.sum)?;
    writeln!(out)?;
    writeln!(out, "Concatenate String {}", report.combined)?;
    writeln!(out, "Count Length {}", report.combined_length)?;
    writeln!(out)?;
    writeln!(out, "Substraction {}", report.difference)?;
    writeln!(out)?;
    writeln!(out, "Multiply {}", report.product)
}

/// Write the three fetch sections in a fixed order.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_showcase(report: &ShowcaseReport, out: &mut impl Write) -> io::Result<()> {
    render_todos(&report.todos, out)?;
    render_users(&report.users, out)?;
    render_colors(&report.colors, out)
}

fn render_todos(result: &Result<Vec<Todo>, FetchError>, out: &mut impl Write) -> io::Result<()> {
    section(out, "Data from JSONPlaceholder:")?;
    match result {
        Ok(todos) => todos
            .iter()
            .try_for_each(|todo| writeln!(out, "{} {}", todo.id, todo.title)),
        Err(error) => render_failure(error, out),
    }
}

fn render_users(result: &Result<UserPage, FetchError>, out: &mut impl Write) -> io::Result<()> {
    section(out, "Data from Reqres.in - Users:")?;
    match result {
        Ok(page) => {
            writeln!(out, "Page: {} Total: {}", page.page, page.total)?;
            page.iter().try_for_each(|user| {
                writeln!(out, "{} {} {}", user.id, user.first_name, user.last_name)
            })
        }
        Err(error) => render_failure(error, out),
    }
}

fn render_colors(result: &Result<ColorPage, FetchError>, out: &mut impl Write) -> io::Result<()> {
    section(out, "Data from Reqres.in - Colors:")?;
    match result {
        Ok(page) => {
            writeln!(out, "Page: {} Total: {}", page.page, page.total)?;
            page.iter().try_for_each(|color| {
                writeln!(
                    out,
                    "{} {} {} {} {}",
                    color.id, color.name, color.year, color.color, color.pantone_value
                )
            })
        }
        Err(error) => render_failure(error, out),
    }
}

fn section(out: &mut impl Write, header: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{header}")
}

fn render_failure(error: &FetchError, out: &mut impl Write) -> io::Result<()> {
    match error.server_message() {
        Some(message) => writeln!(out, "{message}"),
        None => Ok(()),
    }
}
