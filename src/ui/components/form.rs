//! Add-book form renderer.
//!
//! The form takes three lines:
//!
//! ```text
//!  Title: [Dune________________]  Author: [Frank Herbert______]
//!  Genre: ‹ Science Fiction ›  Pages: [412___]  Rating: ★★★★☆
//!  Select a rating
//! ```
//!
//! The third line holds the last validation message, or a hint when there is
//! none.

use crate::app::FormField;
use crate::ui::helpers::{fill_line, fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldInfo, FormInfo};

const TEXT_INPUT_WIDTH: usize = 24;
const PAGES_INPUT_WIDTH: usize = 6;

/// Renders the form starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let (first, second) = form.fields.split_at(form.fields.len().min(2));

    position_cursor(row, 1);
    let used = render_fields(first, theme);
    fill_line(used, cols);

    position_cursor(row + 1, 1);
    let used = render_fields(second, theme);
    fill_line(used, cols);

    position_cursor(row + 2, 1);
    let message = match &form.error {
        Some(error) => {
            print!("{}", Theme::fg(&theme.colors.error_fg));
            format!(" {error}")
        }
        None if form.is_focused => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            " Enter: add book".to_string()
        }
        None => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            " a: add a book".to_string()
        }
    };
    print!("{message}");
    fill_line(text_width(&message), cols);
    print!("{}", Theme::reset());

    row + 3
}

/// Prints a run of labelled fields and returns how many columns they used.
fn render_fields(fields: &[FormFieldInfo], theme: &Theme) -> usize {
    let mut used = 0;

    for field in fields {
        let label = format!(" {}: ", field.label);
        print!("{}{label}", Theme::fg(&theme.colors.text_dim));
        used += text_width(&label);

        let value = field_display(field);
        if field.is_focused {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else if field.field == FormField::Rating {
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{value}");
        print!("{}", Theme::reset());
        used += text_width(&value);

        print!(" ");
        used += 1;
    }

    used
}

/// Field value as drawn: text inputs in brackets, the genre between arrows.
fn field_display(field: &FormFieldInfo) -> String {
    match field.field {
        FormField::Genre => format!("‹ {} ›", field.value),
        FormField::Rating => field.value.clone(),
        FormField::Pages => format!("[{}]", fit(&field.value, PAGES_INPUT_WIDTH)),
        FormField::Title | FormField::Author => {
            format!("[{}]", fit(&field.value, TEXT_INPUT_WIDTH))
        }
    }
}
