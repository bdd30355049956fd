use artie::{FolderNameInfo, ParseError, ValidationResult};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(
    folder_name: &str,
    folder_info: &Result<FolderNameInfo, ParseError>,
    result: &ValidationResult,
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Validating: \"{}\"", folder_name), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Dataset ━━━", ansi::GRAY));
    match folder_info {
        Ok(info) => {
            println!("  drama:    {}", info.drama);
            println!("  iso:      {}", info.iso);
            println!("  bible id: {}", info.bible_id);
            println!("  dataset:  {}", palette.bold(&info.dataset_name));
        }
        Err(err) => {
            println!("  {}", palette.paint(err.to_string(), ansi::YELLOW));
        }
    }

    println!("\n{}", palette.paint("━━━ Files ━━━", ansi::GRAY));
    println!(
        "  audio: {} file(s), books: {}",
        result.total_audio_files,
        format_books(&result.audio_books, &palette)
    );
    println!(
        "  text:  {} file(s), books: {}",
        result.total_text_files,
        format_books(&result.text_books, &palette)
    );

    println!("\n{}", palette.paint("━━━ Diagnostics ━━━", ansi::GRAY));
    if result.errors.is_empty() {
        println!("  {}", palette.paint("✓ folder is consistent", ansi::GREEN));
    } else {
        for error in &result.errors {
            println!("  {}", palette.paint(format!("✗ {error}"), ansi::RED));
        }
    }
    for warning in &result.warnings {
        println!("  {}", palette.paint(format!("⚠ {warning}"), ansi::YELLOW));
    }
    println!();
}

fn format_books(books: &[artie::BookId], palette: &ansi::Palette) -> String {
    if books.is_empty() {
        return palette.dim("(none)");
    }
    books.iter().map(|book| book.as_str()).collect::<Vec<_>>().join(", ")
}
