use std::path::Path;

use console::Style;
use lumistack_core::error::StackError;
use lumistack_core::io::encode::ExportResult;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    error: Style,
    hint: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            error: Style::new().red().bold(),
            hint: Style::new().yellow(),
        }
    }
}

pub fn print_result_summary(input_count: usize, result: &ExportResult, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lumistack"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Inputs"),
        s.value.apply_to(input_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(&result.info.dimensions)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(&result.info.format)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Est. size"),
        s.value.apply_to(&result.info.size_estimate)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Encoded"),
        s.value.apply_to(format!("{} bytes", result.bytes.len()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved to"),
        s.path.apply_to(output.display())
    );
    println!();
}

/// Print a user-facing error line. Out-of-memory gets a distinct, actionable hint.
pub fn print_error(err: &anyhow::Error) {
    let s = Styles::new();
    eprintln!("{} {}", s.error.apply_to("error:"), err);

    if matches!(
        err.downcast_ref::<StackError>(),
        Some(StackError::OutOfMemory { .. })
    ) {
        eprintln!(
            "{}",
            s.hint
                .apply_to("hint: try a lower upscale factor or stack fewer images")
        );
    }
}
