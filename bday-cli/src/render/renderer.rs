use super::theme::OneDark;
use bday_core::{ParsedMoment, ValidationFailure, render::format_moment};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %d %b %Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// `Friday, 04 May 1990 - a valid date`
    pub fn print_moment(&self, moment: &ParsedMoment) {
        let mut date = format_moment(moment, &self.opts.date_format);
        let mut note = "a valid date".to_string();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            note = note.with(Color::Green).to_string();
        }
        println!("{} - {}", date, note);
    }

    /// The failure's own message, on stderr so piped output stays clean.
    pub fn print_failure(&self, failure: &ValidationFailure) {
        let mut message = failure.to_string();
        if self.opts.use_color {
            message = message.with(Color::Red).to_string();
        }
        eprintln!("{message}");
    }
}
